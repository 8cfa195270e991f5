//! Error types for the pe-app service layer.

use std::path::PathBuf;

use pe_core::PeError;
use pe_correlations::CorrelationError;
use pe_economics::EconomicsError;
use pe_solver::SolverError;

/// Application error type that wraps errors from the engine crates and
/// provides a unified error interface for CLI and other front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    #[error(transparent)]
    Economics(#[from] EconomicsError),

    #[error(transparent)]
    Unit(#[from] PeError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Result type for pe-app operations.
pub type AppResult<T> = Result<T, AppError>;

/// Error taxonomy exposed to callers, independent of which crate raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DomainViolation,
    UnsupportedUnit,
    NoSignChange,
    NotConverged,
    NoValidIrr,
    NotRecovered,
    InvalidRequest,
    Io,
}

fn solver_kind(e: &SolverError) -> ErrorKind {
    match e {
        SolverError::NoSignChange { .. } => ErrorKind::NoSignChange,
        SolverError::NotConverged { .. } => ErrorKind::NotConverged,
        SolverError::InvalidBracket { .. }
        | SolverError::InvalidTolerance { .. }
        | SolverError::NonFinite { .. } => ErrorKind::DomainViolation,
    }
}

fn unit_kind(e: &PeError) -> ErrorKind {
    match e {
        PeError::DomainViolation { .. } | PeError::NonFinite { .. } => ErrorKind::DomainViolation,
        PeError::UnsupportedUnit { .. } | PeError::UnknownUnit { .. } => ErrorKind::UnsupportedUnit,
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Correlation(e) => match e {
                CorrelationError::DomainViolation { .. } | CorrelationError::NonPhysical { .. } => {
                    ErrorKind::DomainViolation
                }
                CorrelationError::Unit(u) => unit_kind(u),
                CorrelationError::Solver(s) => solver_kind(s),
            },
            AppError::Economics(e) => match e {
                EconomicsError::DomainViolation { .. } => ErrorKind::DomainViolation,
                EconomicsError::NoValidIrr { .. } => ErrorKind::NoValidIrr,
                EconomicsError::NotRecovered { .. } => ErrorKind::NotRecovered,
                EconomicsError::Unit(u) => unit_kind(u),
                EconomicsError::Solver(s) => solver_kind(s),
            },
            AppError::Unit(u) => unit_kind(u),
            AppError::InvalidRequest(_) | AppError::Parse { .. } => ErrorKind::InvalidRequest,
            AppError::FileRead { .. } => ErrorKind::Io,
        }
    }
}
