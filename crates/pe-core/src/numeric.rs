use crate::PeError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative comparison tolerances
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol.abs` or within `tol.rel` of the
/// larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PeError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PeError::NonFinite { what, value: v })
    }
}

/// Require a finite, strictly positive value.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PeError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(PeError::DomainViolation { what })
    }
}

/// Require a finite, non-negative value.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, PeError> {
    ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(PeError::DomainViolation { what })
    }
}

/// Require a finite value inside the closed interval `[lo, hi]`.
pub fn ensure_in_range(v: Real, lo: Real, hi: Real, what: &'static str) -> Result<Real, PeError> {
    ensure_finite(v, what)?;
    if (lo..=hi).contains(&v) {
        Ok(v)
    } else {
        Err(PeError::DomainViolation { what })
    }
}
