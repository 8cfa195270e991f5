//! Annual revenue and break-even pricing for a producing well.

use crate::cashflow::DiscountRate;
use crate::error::{EconResult, EconomicsError};
use pe_core::{
    Volume, VolumeRate, ensure_finite, ensure_in_range, ensure_non_negative, ensure_positive,
    in_bbl, in_bbl_per_day, in_mscf_per_day,
};

pub const DAYS_PER_YEAR: f64 = 365.0;

fn annual_net(daily_volume: f64, price: f64, royalty_rate: f64, unit_opex: f64) -> EconResult<f64> {
    let price = ensure_finite(price, "price")?;
    let royalty = ensure_in_range(royalty_rate, 0.0, 1.0, "royalty rate must be in [0, 1]")?;
    let opex = ensure_non_negative(unit_opex, "operating cost must be non-negative")?;
    Ok(daily_volume * DAYS_PER_YEAR * (price * (1.0 - royalty) - opex))
}

/// Annual oil revenue net of royalty and per-barrel operating cost.
pub fn oil_revenue(
    production_rate: VolumeRate,
    oil_price_per_bbl: f64,
    royalty_rate: f64,
    opex_per_bbl: f64,
) -> EconResult<f64> {
    let q = ensure_non_negative(in_bbl_per_day(production_rate), "production rate must be non-negative")?;
    annual_net(q, oil_price_per_bbl, royalty_rate, opex_per_bbl)
}

/// Annual gas revenue net of royalty and per-Mscf operating cost.
pub fn gas_revenue(
    production_rate: VolumeRate,
    gas_price_per_mscf: f64,
    royalty_rate: f64,
    opex_per_mscf: f64,
) -> EconResult<f64> {
    let q = ensure_non_negative(in_mscf_per_day(production_rate), "production rate must be non-negative")?;
    annual_net(q, gas_price_per_mscf, royalty_rate, opex_per_mscf)
}

/// Uniform-series present worth factor `(1 − (1+r)^-n)/r`, `n` at `r = 0`.
pub fn annuity_factor(rate: DiscountRate, years: u32) -> f64 {
    let r = rate.value();
    if r == 0.0 {
        years as f64
    } else {
        (1.0 - (1.0 + r).powi(-(years as i32))) / r
    }
}

/// Oil price at which a constant annual production pays back the investment
/// at the given discount rate over the project life.
pub fn break_even_oil_price(
    investment: f64,
    annual_production: Volume,
    opex_per_bbl: f64,
    royalty_rate: f64,
    rate: DiscountRate,
    project_life_years: u32,
) -> EconResult<f64> {
    let investment = ensure_non_negative(investment, "initial investment must be non-negative")?;
    let q = ensure_positive(in_bbl(annual_production), "annual production must be positive")?;
    let opex = ensure_non_negative(opex_per_bbl, "operating cost must be non-negative")?;
    let royalty = ensure_in_range(royalty_rate, 0.0, 1.0, "royalty rate must be in [0, 1)")?;
    if royalty >= 1.0 {
        return Err(EconomicsError::DomainViolation {
            what: "royalty rate must be in [0, 1)",
        });
    }
    if project_life_years == 0 {
        return Err(EconomicsError::DomainViolation {
            what: "project life must be at least one year",
        });
    }

    let af = annuity_factor(rate, project_life_years);
    let price = (investment / (af * q) + opex) / (1.0 - royalty);
    Ok(ensure_finite(price, "break-even price")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflow::CashFlowSeries;
    use crate::metrics::npv;
    use pe_core::{bbl, bbl_per_day, mscf_per_day};

    #[test]
    fn oil_revenue_field_example() {
        let r = oil_revenue(bbl_per_day(100.0), 70.0, 0.125, 15.0).unwrap();
        assert!((r - 100.0 * 365.0 * (70.0 * 0.875 - 15.0)).abs() < 1e-6);
        assert!(oil_revenue(bbl_per_day(100.0), 70.0, 1.5, 15.0).is_err());
    }

    #[test]
    fn gas_revenue_field_example() {
        let r = gas_revenue(mscf_per_day(1_000.0), 3.0, 0.125, 1.5).unwrap();
        assert!((r - 1_000.0 * 365.0 * (3.0 * 0.875 - 1.5)).abs() < 1e-6);
    }

    #[test]
    fn break_even_price_zeroes_npv() {
        let rate = DiscountRate::new(0.1).unwrap();
        let price = break_even_oil_price(1.0e6, bbl(20_000.0), 15.0, 0.125, rate, 10).unwrap();

        let annual = 20_000.0 * (price * 0.875 - 15.0);
        let flows = CashFlowSeries::new(vec![annual; 10]).unwrap();
        assert!(npv(&flows, rate, 1.0e6).unwrap().abs() < 1e-6);
    }

    #[test]
    fn annuity_factor_at_zero_rate() {
        assert_eq!(annuity_factor(DiscountRate::new(0.0).unwrap(), 20), 20.0);
    }
}
