//! Well deliverability and buildup analysis: Darcy radial inflow, skin,
//! Rawlins-Schellhardt back-pressure, gas choke flow and the Horner plot.

use crate::common::{check_finite, require};
use crate::error::{CorrelationError, CorrelationResult};
use pe_core::{
    Area, DynVisc, Length, Pressure, ProductivityIndex, Temperature, Time, VolumeRate,
    bbl_per_day, ensure_finite, ensure_in_range, ensure_non_negative, ensure_positive,
    in_bbl_per_day, in_bbl_per_day_per_psi, in_cp, in_ft, in_hours, in_inches, in_md,
    in_mscf_per_day, in_psi, in_rankine, md, mscf_per_day, psi,
};
use tracing::debug;

/// Darcy radial-flow constant for md, ft, psi, cP and bbl/day.
const DARCY_RADIAL: f64 = 0.007_08;

/// Horner permeability constant for bbl/day, cP, ft and psi/cycle.
const HORNER_PERMEABILITY: f64 = 162.6;

/// Ratio of specific heats assumed for natural gas through a choke.
pub const GAS_HEAT_CAPACITY_RATIO: f64 = 1.3;

/// Steady-state radial inflow `q = 0.00708·k·h·Δp/(μ·B·ln(re/rw))` bbl/day.
#[allow(clippy::too_many_arguments)]
pub fn darcy_radial_flow(
    permeability: Area,
    thickness: Length,
    pressure_drop: Pressure,
    viscosity: DynVisc,
    formation_volume_factor: f64,
    wellbore_radius: Length,
    drainage_radius: Length,
) -> CorrelationResult<VolumeRate> {
    let k = ensure_positive(in_md(permeability), "permeability must be positive")?;
    let h = ensure_positive(in_ft(thickness), "thickness must be positive")?;
    let dp = ensure_non_negative(in_psi(pressure_drop), "pressure drop must be non-negative")?;
    let mu = ensure_positive(in_cp(viscosity), "viscosity must be positive")?;
    let b = ensure_positive(formation_volume_factor, "formation volume factor must be positive")?;
    let rw = ensure_positive(in_ft(wellbore_radius), "wellbore radius must be positive")?;
    let re = ensure_positive(in_ft(drainage_radius), "drainage radius must be positive")?;
    require(re > rw, "drainage radius must exceed wellbore radius")?;

    let q = check_finite(
        DARCY_RADIAL * k * h * dp / (mu * b * (re / rw).ln()),
        "radial flow rate",
    )?;
    Ok(bbl_per_day(q))
}

/// Pseudo-steady-state skin from measured and ideal productivity,
/// `s = (J_ideal/J_actual − 1)·(ln(re/rw) − 0.75)`.
///
/// Negative for a stimulated well.
pub fn skin_factor(
    actual_productivity_index: ProductivityIndex,
    ideal_productivity_index: ProductivityIndex,
    wellbore_radius: Length,
    drainage_radius: Length,
) -> CorrelationResult<f64> {
    let actual = ensure_positive(
        in_bbl_per_day_per_psi(actual_productivity_index),
        "actual productivity index must be positive",
    )?;
    let ideal = ensure_positive(
        in_bbl_per_day_per_psi(ideal_productivity_index),
        "ideal productivity index must be positive",
    )?;
    let rw = ensure_positive(in_ft(wellbore_radius), "wellbore radius must be positive")?;
    let re = ensure_positive(in_ft(drainage_radius), "drainage radius must be positive")?;
    require(re > rw, "drainage radius must exceed wellbore radius")?;

    check_finite(
        (ideal / actual - 1.0) * ((re / rw).ln() - 0.75),
        "skin factor",
    )
}

/// Rawlins-Schellhardt back-pressure deliverability
/// `q = AOF·(1 − (pwf/pr)²)^n`, with `0.5 ≤ n ≤ 1`.
pub fn gas_well_deliverability(
    absolute_open_flow: VolumeRate,
    flowing_pressure: Pressure,
    reservoir_pressure: Pressure,
    flow_exponent: f64,
) -> CorrelationResult<VolumeRate> {
    ensure_non_negative(
        in_mscf_per_day(absolute_open_flow),
        "absolute open flow must be non-negative",
    )?;
    let pwf = ensure_non_negative(in_psi(flowing_pressure), "flowing pressure must be non-negative")?;
    let pr = ensure_positive(in_psi(reservoir_pressure), "reservoir pressure must be positive")?;
    require(pwf <= pr, "flowing pressure must not exceed reservoir pressure")?;
    let n = ensure_in_range(flow_exponent, 0.5, 1.0, "flow exponent must be in [0.5, 1]")?;

    let x = pwf / pr;
    Ok(absolute_open_flow * (1.0 - x * x).powf(n))
}

/// Gas rate through a choke and whether the flow is choked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChokeFlow {
    pub rate: VolumeRate,
    /// Downstream pressure is at or below the critical ratio
    pub critical: bool,
}

/// Gas flow through a choke bean,
/// `q = 974.61·Cd·p1·d²·√(k/((k−1)·γg·T1)·(y^(2/k) − y^((k+1)/k)))` Mscf/d,
/// with `y = p2/p1` held at the critical ratio `(2/(k+1))^(k/(k−1))` once the
/// flow chokes.
pub fn gas_choke_flow_rate(
    upstream_pressure: Pressure,
    downstream_pressure: Pressure,
    choke_diameter: Length,
    gas_gravity: f64,
    upstream_temperature: Temperature,
    discharge_coefficient: f64,
) -> CorrelationResult<ChokeFlow> {
    let p1 = ensure_positive(in_psi(upstream_pressure), "upstream pressure must be positive")?;
    let p2 = ensure_non_negative(
        in_psi(downstream_pressure),
        "downstream pressure must be non-negative",
    )?;
    require(p2 <= p1, "downstream pressure must not exceed upstream pressure")?;
    let d = ensure_positive(in_inches(choke_diameter), "choke diameter must be positive")?;
    let gg = ensure_positive(gas_gravity, "gas gravity must be positive")?;
    let t1 = ensure_positive(in_rankine(upstream_temperature), "absolute temperature must be positive")?;
    let cd = ensure_in_range(discharge_coefficient, 0.0, 1.0, "discharge coefficient must be in (0, 1]")?;
    require(cd > 0.0, "discharge coefficient must be in (0, 1]")?;

    let k = GAS_HEAT_CAPACITY_RATIO;
    let critical_ratio = (2.0 / (k + 1.0)).powf(k / (k - 1.0));
    let critical = p2 / p1 <= critical_ratio;
    let y = (p2 / p1).max(critical_ratio);

    let expansion = y.powf(2.0 / k) - y.powf((k + 1.0) / k);
    let q = check_finite(
        974.61 * cd * p1 * d * d * (k / ((k - 1.0) * gg * t1) * expansion).sqrt(),
        "choke flow rate",
    )?;
    Ok(ChokeFlow {
        rate: mscf_per_day(q),
        critical,
    })
}

/// Pressure buildup after a constant-rate drawdown.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildupTest {
    /// Shut-in pressures, paired with `shut_in_times`
    pub shut_in_pressures: Vec<Pressure>,
    /// Elapsed shut-in times Δt, each positive
    pub shut_in_times: Vec<Time>,
    pub producing_time: Time,
    /// Flowing pressure at the moment of shut-in
    pub flowing_pressure: Pressure,
    pub rate: VolumeRate,
    pub formation_volume_factor: f64,
    pub viscosity: DynVisc,
    pub porosity: f64,
    /// 1/psi
    pub total_compressibility: f64,
    pub thickness: Length,
    pub wellbore_radius: Length,
}

/// Horner straight-line interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HornerAnalysis {
    /// Semilog slope, psi per log cycle (positive for a buildup)
    pub slope: f64,
    /// Line extrapolated to infinite shut-in time (`p*`)
    pub extrapolated_pressure: Pressure,
    /// Line read at Δt = 1 hr
    pub one_hour_pressure: Pressure,
    pub permeability: Area,
    pub skin: f64,
}

/// Least-squares Horner analysis: fits `pws = p* − m·log10((tp + Δt)/Δt)`,
/// then `k = 162.6·q·B·μ/(m·h)` and
/// `s = 1.151·((p1hr − pwf)/m − log10(k/(φ·μ·ct·rw²)) + 3.23)`.
pub fn horner_analysis(test: &BuildupTest) -> CorrelationResult<HornerAnalysis> {
    require(
        test.shut_in_pressures.len() == test.shut_in_times.len(),
        "pressure and time series must have the same length",
    )?;
    require(
        test.shut_in_pressures.len() >= 2,
        "a Horner fit needs at least two points",
    )?;
    let tp = ensure_positive(in_hours(test.producing_time), "producing time must be positive")?;
    let pwf = ensure_non_negative(in_psi(test.flowing_pressure), "flowing pressure must be non-negative")?;
    let q = ensure_positive(in_bbl_per_day(test.rate), "rate must be positive")?;
    let b = ensure_positive(
        test.formation_volume_factor,
        "formation volume factor must be positive",
    )?;
    let mu = ensure_positive(in_cp(test.viscosity), "viscosity must be positive")?;
    let phi = ensure_in_range(test.porosity, 0.0, 1.0, "porosity must be in (0, 1]")?;
    require(phi > 0.0, "porosity must be in (0, 1]")?;
    let ct = ensure_positive(test.total_compressibility, "total compressibility must be positive")?;
    let h = ensure_positive(in_ft(test.thickness), "thickness must be positive")?;
    let rw = ensure_positive(in_ft(test.wellbore_radius), "wellbore radius must be positive")?;

    let mut points = Vec::with_capacity(test.shut_in_times.len());
    for (&p, &dt) in test.shut_in_pressures.iter().zip(&test.shut_in_times) {
        let dt = ensure_positive(in_hours(dt), "shut-in times must be positive")?;
        let p = ensure_finite(in_psi(p), "shut-in pressure")?;
        points.push((((tp + dt) / dt).log10(), p));
    }

    let (intercept, fitted_slope) = least_squares(&points)?;
    let m = -fitted_slope;
    if m <= 0.0 {
        return Err(CorrelationError::DomainViolation {
            what: "shut-in pressures must rise with shut-in time",
        });
    }

    let k = check_finite(HORNER_PERMEABILITY * q * b * mu / (m * h), "Horner permeability")?;
    let p1hr = intercept - m * (tp + 1.0).log10();
    let skin = check_finite(
        1.151 * ((p1hr - pwf) / m - (k / (phi * mu * ct * rw * rw)).log10() + 3.23),
        "skin factor",
    )?;
    debug!(slope = m, permeability_md = k, skin, "Horner analysis");

    Ok(HornerAnalysis {
        slope: m,
        extrapolated_pressure: psi(intercept),
        one_hour_pressure: psi(p1hr),
        permeability: md(k),
        skin,
    })
}

/// Ordinary least squares `y = a + b·x`, returning `(a, b)`.
fn least_squares(points: &[(f64, f64)]) -> CorrelationResult<(f64, f64)> {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (mut sxx, mut sxy) = (0.0, 0.0);
    for (x, y) in points {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    require(sxx > 0.0, "shut-in times must not all be equal")?;
    let slope = sxy / sxx;
    Ok((mean_y - slope * mean_x, slope))
}
