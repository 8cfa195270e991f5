//! Error types for root-finding.

use thiserror::Error;

/// Errors that can occur while solving `f(x) = 0`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error(
        "No sign change over [{lower}, {upper}]: f(lower) = {f_lower}, f(upper) = {f_upper}"
    )]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("Not converged after {iterations} iterations (best |f| = {residual})")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("Invalid bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },

    #[error("Invalid tolerance: {what}")]
    InvalidTolerance { what: &'static str },

    #[error("Non-finite function value at x = {x}: {value}")]
    NonFinite { x: f64, value: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;
