//! Validated cash flow streams and discount rates.

use crate::error::{EconResult, EconomicsError};
use pe_core::ensure_finite;

/// Upper bound accepted for a discount rate (10 000 % per period).
pub const MAX_DISCOUNT_RATE: f64 = 100.0;

/// Net cash flows for periods 1..=N. Never empty, every entry finite.
#[derive(Clone, Debug, PartialEq)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    pub fn new(flows: Vec<f64>) -> EconResult<Self> {
        if flows.is_empty() {
            return Err(EconomicsError::DomainViolation {
                what: "cash flow series must not be empty",
            });
        }
        for &cf in &flows {
            ensure_finite(cf, "cash flow")?;
        }
        Ok(Self(flows))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of periods.
    pub fn horizon(&self) -> usize {
        self.0.len()
    }

    /// `(period, flow)` pairs, periods starting at 1.
    pub fn periods(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().enumerate().map(|(i, &cf)| (i + 1, cf))
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = EconomicsError;

    fn try_from(flows: Vec<f64>) -> EconResult<Self> {
        Self::new(flows)
    }
}

/// Per-period discount rate as a fraction, in `(-1, MAX_DISCOUNT_RATE]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DiscountRate(f64);

impl DiscountRate {
    pub fn new(rate: f64) -> EconResult<Self> {
        let r = ensure_finite(rate, "discount rate")?;
        if r <= -1.0 || r > MAX_DISCOUNT_RATE {
            return Err(EconomicsError::DomainViolation {
                what: "discount rate must be in (-1, 100]",
            });
        }
        Ok(Self(r))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `(1 + r)^-t`.
    pub fn discount_factor(self, period: usize) -> f64 {
        discount_factor(self.0, period)
    }
}

/// `(1 + r)^-t` for a raw rate; callers keep `r > -1`.
pub(crate) fn discount_factor(rate: f64, period: usize) -> f64 {
    (1.0 + rate).powi(-(period as i32))
}
