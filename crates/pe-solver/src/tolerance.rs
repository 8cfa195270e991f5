//! Per-call convergence settings.

use crate::error::{SolverError, SolverResult};

/// Convergence tolerance and iteration cap for a single solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToleranceSpec {
    /// Absolute tolerance on x: stop once the bracket half-width is below it
    pub abs: f64,
    /// Absolute tolerance on the residual |f(x)|
    pub residual: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for ToleranceSpec {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            residual: 1e-9,
            max_iterations: 200,
        }
    }
}

impl ToleranceSpec {
    /// Tolerance driven by the residual only; x-tolerance stays at the default.
    pub fn residual(residual: f64) -> Self {
        Self {
            residual,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> SolverResult<()> {
        if !(self.abs.is_finite() && self.abs >= 0.0) {
            return Err(SolverError::InvalidTolerance {
                what: "abs must be finite and non-negative",
            });
        }
        if !(self.residual.is_finite() && self.residual >= 0.0) {
            return Err(SolverError::InvalidTolerance {
                what: "residual must be finite and non-negative",
            });
        }
        if self.abs == 0.0 && self.residual == 0.0 {
            return Err(SolverError::InvalidTolerance {
                what: "abs and residual cannot both be zero",
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidTolerance {
                what: "max_iterations must be at least 1",
            });
        }
        Ok(())
    }
}
