//! Error types for correlation evaluation.

use pe_core::PeError;
use pe_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while evaluating a correlation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// An input lies outside the correlation's physical or mathematical domain.
    #[error("Domain violation: {what}")]
    DomainViolation { what: &'static str },

    /// Inputs were in range but the result came out non-finite.
    #[error("Non-physical result: {what}")]
    NonPhysical { what: &'static str },

    #[error(transparent)]
    Unit(PeError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;

impl From<PeError> for CorrelationError {
    fn from(e: PeError) -> Self {
        match e {
            PeError::DomainViolation { what } => CorrelationError::DomainViolation { what },
            PeError::NonFinite { what, .. } => CorrelationError::DomainViolation { what },
            other => CorrelationError::Unit(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CorrelationError::DomainViolation {
            what: "poisson ratio must be in (-1, 0.5)",
        };
        assert!(err.to_string().contains("poisson ratio"));
    }

    #[test]
    fn core_errors_fold_into_domain_violation() {
        let err: CorrelationError = PeError::NonFinite {
            what: "depth",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, CorrelationError::DomainViolation { what: "depth" });

        let err: CorrelationError = PeError::UnsupportedUnit {
            from: "psi".into(),
            to: "density".into(),
        }
        .into();
        assert!(matches!(err, CorrelationError::Unit(_)));
    }
}
