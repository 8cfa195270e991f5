//! Time-value-of-money metrics: NPV, IRR, discounted payback, profitability index.
//!
//! Cash flows occur at the end of periods 1..=N; the initial investment is a
//! non-negative magnitude spent at period 0.

use crate::cashflow::{CashFlowSeries, DiscountRate, discount_factor};
use crate::error::{EconResult, EconomicsError};
use pe_core::{ensure_finite, ensure_non_negative, ensure_positive};
use pe_solver::{SolverError, ToleranceSpec, brackets_root, solve};
use tracing::debug;

/// Lowest rate tried when bracketing an IRR. Long horizons overflow here, so
/// the bracket is raised until the NPV is finite.
pub const IRR_LOWER: f64 = -0.99;
/// Initial upper bracket for IRR.
pub const IRR_UPPER: f64 = 10.0;
/// Upper bracket after one widening.
pub const IRR_UPPER_WIDE: f64 = 100.0;

fn present_value_at(series: &CashFlowSeries, rate: f64) -> f64 {
    series
        .periods()
        .map(|(t, cf)| cf * discount_factor(rate, t))
        .sum()
}

/// Discounted value of the future flows alone.
///
/// Rates close to -1 over long horizons overflow; that fails with
/// `DomainViolation` instead of returning an infinite value.
pub fn present_value(series: &CashFlowSeries, rate: DiscountRate) -> EconResult<f64> {
    let pv = present_value_at(series, rate.value());
    Ok(ensure_finite(pv, "present value overflows at this rate and horizon")?)
}

/// `Σ CF_t/(1+r)^t − I`.
pub fn npv(series: &CashFlowSeries, rate: DiscountRate, investment: f64) -> EconResult<f64> {
    let investment = ensure_non_negative(investment, "initial investment must be non-negative")?;
    Ok(present_value(series, rate)? - investment)
}

/// Lowest rate in `[IRR_LOWER, 0]` at which the NPV is finite.
///
/// Each retry doubles the growth factor `1 + r`, ending at zero.
fn finite_irr_lower(series: &CashFlowSeries, investment: f64) -> EconResult<f64> {
    let mut rate = IRR_LOWER;
    loop {
        if (present_value_at(series, rate) - investment).is_finite() {
            return Ok(rate);
        }
        if rate >= 0.0 {
            return Err(EconomicsError::NoValidIrr {
                reason: "net present value overflows at every non-positive rate",
            });
        }
        rate = (1.0 + 2.0 * rate).min(0.0);
    }
}

/// Rate at which NPV is zero.
///
/// `tolerance` is the acceptable |NPV| at the returned rate. Fails with
/// `NoValidIrr` when the stream `[-I, CF1..CFN]` never changes sign, or when
/// no root lies between the lowest finite bracket (at least `-0.99`) and 100.
pub fn irr(series: &CashFlowSeries, investment: f64, tolerance: f64) -> EconResult<f64> {
    let investment = ensure_non_negative(investment, "initial investment must be non-negative")?;
    let tolerance = ensure_positive(tolerance, "IRR tolerance must be positive")?;

    let stream = std::iter::once(-investment).chain(series.as_slice().iter().copied());
    let (mut has_pos, mut has_neg) = (false, false);
    for v in stream {
        has_pos |= v > 0.0;
        has_neg |= v < 0.0;
    }
    if !(has_pos && has_neg) {
        return Err(EconomicsError::NoValidIrr {
            reason: "cash flow stream never changes sign",
        });
    }

    let lower = finite_irr_lower(series, investment)?;
    if lower > IRR_LOWER {
        debug!(lower, horizon = series.horizon(), "raised IRR lower bracket");
    }

    let mut f = |r: f64| -> EconResult<f64> { Ok(present_value_at(series, r) - investment) };
    let upper = if brackets_root(&mut f, lower, IRR_UPPER)? {
        IRR_UPPER
    } else {
        debug!(upper = IRR_UPPER_WIDE, "widening IRR bracket");
        IRR_UPPER_WIDE
    };

    let tol = ToleranceSpec {
        abs: f64::EPSILON,
        residual: tolerance,
        max_iterations: 200,
    };
    match solve(f, lower, upper, &tol) {
        Ok(root) => {
            debug!(irr = root.root, iterations = root.iterations, "IRR converged");
            Ok(root.root)
        }
        Err(EconomicsError::Solver(SolverError::NoSignChange { .. })) => {
            Err(EconomicsError::NoValidIrr {
                reason: "no rate in [-0.99, 100] gives zero NPV",
            })
        }
        Err(e) => Err(e),
    }
}

/// Periods until cumulative discounted flow recovers the investment,
/// interpolated within the recovering period.
pub fn discounted_payback_period(
    series: &CashFlowSeries,
    rate: DiscountRate,
    investment: f64,
) -> EconResult<f64> {
    let investment = ensure_non_negative(investment, "initial investment must be non-negative")?;
    if investment == 0.0 {
        return Ok(0.0);
    }

    let mut cumulative = -investment;
    for (t, cf) in series.periods() {
        let discounted = ensure_finite(
            cf * rate.discount_factor(t),
            "discounted cash flow overflows at this rate and horizon",
        )?;
        if cumulative + discounted >= 0.0 {
            return Ok((t - 1) as f64 + (-cumulative) / discounted);
        }
        cumulative += discounted;
    }
    Err(EconomicsError::NotRecovered {
        horizon: series.horizon(),
    })
}

/// Present value of future flows per unit of investment.
pub fn profitability_index(
    series: &CashFlowSeries,
    rate: DiscountRate,
    investment: f64,
) -> EconResult<f64> {
    let investment = ensure_non_negative(investment, "initial investment must be non-negative")?;
    if investment == 0.0 {
        return Err(EconomicsError::DomainViolation {
            what: "profitability index needs a non-zero investment",
        });
    }
    Ok(present_value(series, rate)? / investment)
}
