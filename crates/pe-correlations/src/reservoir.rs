//! Inflow performance and black-oil PVT (Vogel, PI, Standing).

use crate::common::{check_finite, require};
use crate::error::{CorrelationError, CorrelationResult};
use pe_core::{
    Pressure, ProductivityIndex, Temperature, VolumeRate, ensure_non_negative, ensure_positive,
    in_bbl_per_day, in_fahrenheit, in_psi, psi,
};

/// Vogel IPR: `q = qmax·(1 − 0.2·x − 0.8·x²)` with `x = pwf/pr`.
pub fn vogel_ipr(
    reservoir_pressure: Pressure,
    flowing_pressure: Pressure,
    max_rate: VolumeRate,
) -> CorrelationResult<VolumeRate> {
    let pr = ensure_positive(in_psi(reservoir_pressure), "reservoir pressure must be positive")?;
    let pwf = ensure_non_negative(in_psi(flowing_pressure), "flowing pressure must be non-negative")?;
    require(pwf <= pr, "flowing pressure must not exceed reservoir pressure")?;
    ensure_non_negative(in_bbl_per_day(max_rate), "maximum rate must be non-negative")?;

    let x = pwf / pr;
    Ok(max_rate * (1.0 - 0.2 * x - 0.8 * x * x))
}

/// Straight-line productivity index `J = q/(pr − pwf)`.
pub fn productivity_index(
    rate: VolumeRate,
    reservoir_pressure: Pressure,
    flowing_pressure: Pressure,
) -> CorrelationResult<ProductivityIndex> {
    ensure_non_negative(in_bbl_per_day(rate), "rate must be non-negative")?;
    let pr = ensure_positive(in_psi(reservoir_pressure), "reservoir pressure must be positive")?;
    let pwf = ensure_non_negative(in_psi(flowing_pressure), "flowing pressure must be non-negative")?;
    require(pr > pwf, "drawdown must be positive")?;
    Ok(rate / (reservoir_pressure - flowing_pressure))
}

/// Oil specific gravity from API gravity.
pub fn oil_specific_gravity(api_gravity: f64) -> CorrelationResult<f64> {
    let api = ensure_positive(api_gravity, "API gravity must be positive")?;
    Ok(141.5 / (131.5 + api))
}

/// Standing bubble point,
/// `Pb = 18.2·((Rs/γg)^0.83·10^(0.00091·T − 0.0125·API) − 1.4)` psia,
/// with Rs in scf/STB and T in °F.
pub fn standing_bubble_point(
    gor_scf_per_stb: f64,
    gas_gravity: f64,
    api_gravity: f64,
    temperature: Temperature,
) -> CorrelationResult<Pressure> {
    let rs = ensure_positive(gor_scf_per_stb, "solution GOR must be positive")?;
    let gg = ensure_positive(gas_gravity, "gas gravity must be positive")?;
    let api = ensure_positive(api_gravity, "API gravity must be positive")?;
    let t = pe_core::ensure_finite(in_fahrenheit(temperature), "temperature")?;

    let exponent = 0.00091 * t - 0.0125 * api;
    let pb = check_finite(
        18.2 * ((rs / gg).powf(0.83) * 10f64.powf(exponent) - 1.4),
        "bubble point",
    )?;
    if pb <= 0.0 {
        return Err(CorrelationError::DomainViolation {
            what: "inputs give a non-positive bubble point",
        });
    }
    Ok(psi(pb))
}

/// Standing solution gas-oil ratio (scf/STB) at a pressure at or below the
/// bubble point; the inverse of [`standing_bubble_point`].
pub fn standing_solution_gor(
    pressure: Pressure,
    gas_gravity: f64,
    api_gravity: f64,
    temperature: Temperature,
) -> CorrelationResult<f64> {
    let p = ensure_positive(in_psi(pressure), "pressure must be positive")?;
    let gg = ensure_positive(gas_gravity, "gas gravity must be positive")?;
    let api = ensure_positive(api_gravity, "API gravity must be positive")?;
    let t = pe_core::ensure_finite(in_fahrenheit(temperature), "temperature")?;

    let exponent = 0.0125 * api - 0.00091 * t;
    check_finite(
        gg * ((p / 18.2 + 1.4) * 10f64.powf(exponent)).powf(1.0 / 0.83),
        "solution GOR",
    )
}

/// Standing oil formation volume factor at the bubble point (bbl/STB),
/// `Bo = 0.9759 + 0.00012·(Rs·(γg/γo)^0.5 + 1.25·T)^1.2`.
pub fn standing_oil_fvf(
    gor_scf_per_stb: f64,
    gas_gravity: f64,
    api_gravity: f64,
    temperature: Temperature,
) -> CorrelationResult<f64> {
    let rs = ensure_non_negative(gor_scf_per_stb, "solution GOR must be non-negative")?;
    let gg = ensure_positive(gas_gravity, "gas gravity must be positive")?;
    let go = oil_specific_gravity(api_gravity)?;
    let t = pe_core::ensure_finite(in_fahrenheit(temperature), "temperature")?;

    let f = rs * (gg / go).sqrt() + 1.25 * t;
    require(f >= 0.0, "correlating group must be non-negative")?;
    check_finite(0.9759 + 0.00012 * f.powf(1.2), "oil formation volume factor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pe_core::{bbl_per_day, fahrenheit, in_bbl_per_day_per_psi};

    #[test]
    fn vogel_endpoints() {
        let qmax = bbl_per_day(1_000.0);
        let open = vogel_ipr(psi(3_000.0), psi(0.0), qmax).unwrap();
        let shut = vogel_ipr(psi(3_000.0), psi(3_000.0), qmax).unwrap();
        assert!((in_bbl_per_day(open) - 1_000.0).abs() < 1e-9);
        assert!(in_bbl_per_day(shut).abs() < 1e-9);

        let half = vogel_ipr(psi(3_000.0), psi(1_500.0), qmax).unwrap();
        assert!((in_bbl_per_day(half) - 700.0).abs() < 1e-9);
        assert!(vogel_ipr(psi(3_000.0), psi(3_500.0), qmax).is_err());
    }

    #[test]
    fn productivity_index_straight_line() {
        let j = productivity_index(bbl_per_day(500.0), psi(3_000.0), psi(2_000.0)).unwrap();
        assert!((in_bbl_per_day_per_psi(j) - 0.5).abs() < 1e-12);
        assert!(productivity_index(bbl_per_day(500.0), psi(2_000.0), psi(2_000.0)).is_err());
    }

    #[test]
    fn standing_bubble_point_field_example() {
        let pb = standing_bubble_point(350.0, 0.75, 30.0, fahrenheit(200.0)).unwrap();
        let expected = 18.2
            * ((350.0_f64 / 0.75).powf(0.83) * 10f64.powf(0.00091 * 200.0 - 0.0125 * 30.0) - 1.4);
        assert!((in_psi(pb) - expected).abs() < 1e-6);
        assert!(in_psi(pb) > 1_000.0 && in_psi(pb) < 3_000.0);
    }

    #[test]
    fn solution_gor_inverts_bubble_point() {
        let t = fahrenheit(180.0);
        let pb = standing_bubble_point(600.0, 0.8, 35.0, t).unwrap();
        let rs = standing_solution_gor(pb, 0.8, 35.0, t).unwrap();
        assert!((rs - 600.0).abs() < 1e-6);
    }

    #[test]
    fn standing_fvf_above_one() {
        let bo = standing_oil_fvf(350.0, 0.75, 30.0, fahrenheit(200.0)).unwrap();
        assert!(bo > 1.0 && bo < 1.5);
        assert!(standing_oil_fvf(350.0, 0.75, 0.0, fahrenheit(200.0)).is_err());
    }
}
