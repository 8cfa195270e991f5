//! Common utilities for correlation calculations.

use crate::error::{CorrelationError, CorrelationResult};

/// Holdup floor used when forming `y = λ/HL²` in the Beggs-Brill `S` term.
pub const EPSILON_HOLDUP: f64 = 1e-6;

/// Reynolds number below which pipe flow is treated as laminar.
pub const LAMINAR_REYNOLDS: f64 = 2300.0;

/// Ensure a computed value is finite, returning it unchanged.
pub fn check_finite(value: f64, what: &'static str) -> CorrelationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CorrelationError::NonPhysical { what })
    }
}

/// Fail with `DomainViolation { what }` unless `ok` holds.
pub fn require(ok: bool, what: &'static str) -> CorrelationResult<()> {
    if ok {
        Ok(())
    } else {
        Err(CorrelationError::DomainViolation { what })
    }
}

/// Clamp a value between min and max.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_require() {
        assert!(require(true, "ok").is_ok());
        assert_eq!(
            require(false, "depth must be non-negative"),
            Err(CorrelationError::DomainViolation {
                what: "depth must be non-negative"
            })
        );
    }
}
