//! Error types for economic metrics.

use pe_core::PeError;
use pe_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomicsError {
    #[error("Domain violation: {what}")]
    DomainViolation { what: &'static str },

    #[error("No valid IRR: {reason}")]
    NoValidIrr { reason: &'static str },

    #[error("Investment not recovered within {horizon} periods")]
    NotRecovered { horizon: usize },

    #[error(transparent)]
    Unit(PeError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type EconResult<T> = Result<T, EconomicsError>;

impl From<PeError> for EconomicsError {
    fn from(e: PeError) -> Self {
        match e {
            PeError::DomainViolation { what } => EconomicsError::DomainViolation { what },
            PeError::NonFinite { what, .. } => EconomicsError::DomainViolation { what },
            other => EconomicsError::Unit(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EconomicsError::NotRecovered { horizon: 4 };
        assert!(err.to_string().contains("4 periods"));

        let err = EconomicsError::NoValidIrr {
            reason: "cash flows never change sign",
        };
        assert!(err.to_string().contains("IRR"));
    }
}
