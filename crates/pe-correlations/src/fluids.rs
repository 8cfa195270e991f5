//! Water and gas PVT: McCain water FVF and viscosity, Osif water
//! compressibility, real-gas formation volume factor.
//!
//! Salinity arrives in ppm by weight. McCain's fits read it as weight
//! percent solids (`ppm / 10⁴`); Osif's reads it as g/L, taken as `ppm / 10³`
//! (dilute brine).

use crate::common::{check_finite, require};
use crate::error::CorrelationResult;
use pe_core::{
    DynVisc, Pressure, Temperature, cp, ensure_finite, ensure_in_range, ensure_positive,
    in_fahrenheit, in_psi, in_rankine,
};

/// Standard conditions for gas volumes.
pub const STANDARD_PRESSURE_PSIA: f64 = 14.7;
pub const STANDARD_TEMPERATURE_R: f64 = 520.0;

/// Upper salinity bound of the McCain viscosity fit (26 wt %).
const MAX_SALINITY_PPM: f64 = 260_000.0;

fn salinity_ppm(salinity: f64) -> CorrelationResult<f64> {
    Ok(ensure_in_range(
        salinity,
        0.0,
        MAX_SALINITY_PPM,
        "salinity must be in [0, 260000] ppm",
    )?)
}

/// McCain water formation volume factor (res bbl/STB),
/// `Bw = (1 + ΔVwT)(1 + ΔVwp)`.
///
/// Dissolved solids shift the two terms in opposite directions, so the
/// fresh-water fit is used for brines as well.
pub fn water_formation_volume_factor(
    temperature: Temperature,
    pressure: Pressure,
) -> CorrelationResult<f64> {
    let t = ensure_finite(in_fahrenheit(temperature), "temperature")?;
    let p = ensure_positive(in_psi(pressure), "pressure must be positive")?;

    let dv_t = -1.0001e-2 + 1.33391e-4 * t + 5.50654e-7 * t * t;
    let dv_p = -1.95301e-9 * p * t - 1.72834e-13 * p * p * t - 3.58922e-7 * p
        - 2.25341e-10 * p * p;
    let bw = check_finite((1.0 + dv_t) * (1.0 + dv_p), "water formation volume factor")?;
    require(bw > 0.0, "inputs give a non-positive water formation volume factor")?;
    Ok(bw)
}

/// Osif isothermal water compressibility (1/psi),
/// `cw = 1/(7.033·p + 541.5·S − 537·T + 403300)` with S in g/L NaCl.
pub fn water_compressibility(
    temperature: Temperature,
    pressure: Pressure,
    salinity: f64,
) -> CorrelationResult<f64> {
    let t = ensure_finite(in_fahrenheit(temperature), "temperature")?;
    let p = ensure_positive(in_psi(pressure), "pressure must be positive")?;
    let s = salinity_ppm(salinity)? / 1.0e3;

    let denom = 7.033 * p + 541.5 * s - 537.0 * t + 403_300.0;
    require(denom > 0.0, "temperature too high for the compressibility fit")?;
    check_finite(1.0 / denom, "water compressibility")
}

/// Real-gas formation volume factor (res ft³/scf), `Bg = (psc/Tsc)·z·T/p`.
pub fn gas_formation_volume_factor(
    temperature: Temperature,
    pressure: Pressure,
    z_factor: f64,
) -> CorrelationResult<f64> {
    let t = ensure_positive(in_rankine(temperature), "absolute temperature must be positive")?;
    let p = ensure_positive(in_psi(pressure), "pressure must be positive")?;
    let z = ensure_positive(z_factor, "z-factor must be positive")?;
    check_finite(
        STANDARD_PRESSURE_PSIA / STANDARD_TEMPERATURE_R * z * t / p,
        "gas formation volume factor",
    )
}

/// McCain brine viscosity: `μ1 = A·T^−B` at one atmosphere, corrected by
/// `0.9994 + 4.0295e-5·p + 3.1062e-9·p²`.
///
/// Fitted for 100-400 °F.
pub fn water_viscosity(
    temperature: Temperature,
    pressure: Pressure,
    salinity: f64,
) -> CorrelationResult<DynVisc> {
    let t = ensure_positive(in_fahrenheit(temperature), "temperature must be above 0 °F")?;
    let p = ensure_positive(in_psi(pressure), "pressure must be positive")?;
    let s = salinity_ppm(salinity)? / 1.0e4;

    let a = 109.574 - 8.40564 * s + 0.313314 * s.powi(2) + 8.72213e-3 * s.powi(3);
    let b = 1.12166 - 2.63951e-2 * s + 6.79461e-4 * s.powi(2) + 5.47119e-5 * s.powi(3)
        - 1.55586e-6 * s.powi(4);
    let mu_atm = a * t.powf(-b);
    let mu = check_finite(
        mu_atm * (0.9994 + 4.0295e-5 * p + 3.1062e-9 * p * p),
        "water viscosity",
    )?;
    Ok(cp(mu))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pe_core::{fahrenheit, in_cp, psi, rankine};

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn water_fvf_near_one() {
        let bw = water_formation_volume_factor(fahrenheit(200.0), psi(5_000.0)).unwrap();
        let dv_t = -1.0001e-2 + 1.33391e-4 * 200.0 + 5.50654e-7 * 40_000.0;
        let dv_p = -1.95301e-9 * 1.0e6 - 1.72834e-13 * 2.5e7 * 200.0 - 3.58922e-7 * 5_000.0
            - 2.25341e-10 * 2.5e7;
        assert!(close(bw, (1.0 + dv_t) * (1.0 + dv_p), 1e-12));
        assert!(bw > 1.0 && bw < 1.05);

        // Compression wins over expansion at low temperature and high pressure.
        let cold = water_formation_volume_factor(fahrenheit(60.0), psi(10_000.0)).unwrap();
        assert!(cold < 1.0);
    }

    #[test]
    fn osif_compressibility() {
        let fresh = water_compressibility(fahrenheit(200.0), psi(5_000.0), 0.0).unwrap();
        assert!(close(fresh, 1.0 / 331_065.0, 1e-15));
        let brine = water_compressibility(fahrenheit(200.0), psi(5_000.0), 100_000.0).unwrap();
        assert!(brine < fresh);
        assert!(water_compressibility(fahrenheit(200.0), psi(5_000.0), -1.0).is_err());
    }

    #[test]
    fn gas_fvf_ideal_at_standard_conditions() {
        let bg = gas_formation_volume_factor(rankine(520.0), psi(14.7), 1.0).unwrap();
        assert!(close(bg, 1.0, 1e-9));

        let bg = gas_formation_volume_factor(fahrenheit(200.0), psi(3_000.0), 0.9).unwrap();
        assert!(close(bg, 0.028_269 * 0.9 * 659.67 / 3_000.0, 1e-6));
        assert!(gas_formation_volume_factor(rankine(520.0), psi(0.0), 1.0).is_err());
    }

    #[test]
    fn water_viscosity_falls_with_temperature() {
        let hot = water_viscosity(fahrenheit(200.0), psi(14.7), 0.0).unwrap();
        let expected = 109.574 * 200.0_f64.powf(-1.12166) * (0.9994 + 4.0295e-5 * 14.7);
        assert!(close(in_cp(hot), expected, 1e-6));
        assert!(in_cp(hot) > 0.25 && in_cp(hot) < 0.35);

        let warm = water_viscosity(fahrenheit(120.0), psi(14.7), 0.0).unwrap();
        assert!(in_cp(warm) > in_cp(hot));

        let brine = water_viscosity(fahrenheit(200.0), psi(14.7), 150_000.0).unwrap();
        assert!(in_cp(brine) > in_cp(hot));
    }
}
