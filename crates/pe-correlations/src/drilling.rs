//! Drilling hydraulics: mud gradients, hydrostatics, velocities and ECD.
//!
//! Field correlations are written in the units they were fitted in (ppg, psi,
//! ft, gpm, inches). Inputs arrive as typed quantities and are read out in
//! those units at the top of each function.

use crate::common::{check_finite, require};
use crate::error::CorrelationResult;
use pe_core::units::factors::PPG_TO_PSI_PER_FT;
use pe_core::{
    Density, DynVisc, Length, Pressure, PressureGradient, Ratio, TaggedQuantity, UnitTag,
    Velocity, VolumeRate, ensure_non_negative, ensure_positive, ft_per_min, in_ft, in_gpm,
    in_inches, in_kg_m3, in_m, in_mps, in_pa_s, in_ppg, in_psi, ppg, psi_per_ft, unitless,
};

/// Annular/pipe velocity constant: ft/min from gpm and inches.
const VELOCITY_FACTOR: f64 = 24.51;

/// Mud gradient in psi/ft: `ppg × 0.052`.
pub fn pressure_gradient(mud_weight: Density) -> CorrelationResult<PressureGradient> {
    let mw = ensure_positive(in_ppg(mud_weight), "mud weight must be positive")?;
    let grad = check_finite(mw * PPG_TO_PSI_PER_FT, "pressure gradient")?;
    Ok(psi_per_ft(grad))
}

/// Mud gradient from a mud weight whose unit arrives as a label.
///
/// Any density unit is accepted (ppg, sg, lb/ft³, kg/m³, g/cm³); anything
/// else fails with `UnsupportedUnit`.
pub fn mud_weight_to_pressure_gradient(
    mud_weight: &TaggedQuantity,
) -> CorrelationResult<PressureGradient> {
    let mw = mud_weight.to(UnitTag::Ppg)?;
    pressure_gradient(ppg(mw.value))
}

/// Hydrostatic pressure of a mud column.
pub fn hydrostatic_pressure(mud_weight: Density, depth: Length) -> CorrelationResult<Pressure> {
    ensure_non_negative(in_ft(depth), "depth must be non-negative")?;
    let grad = pressure_gradient(mud_weight)?;
    Ok(grad * depth)
}

/// Annular velocity `24.51·Q/(Dh² − Dp²)` in ft/min.
pub fn annular_velocity(
    flow_rate: VolumeRate,
    hole_diameter: Length,
    pipe_diameter: Length,
) -> CorrelationResult<Velocity> {
    let q = ensure_non_negative(in_gpm(flow_rate), "flow rate must be non-negative")?;
    let dh = ensure_positive(in_inches(hole_diameter), "hole diameter must be positive")?;
    let dp = ensure_non_negative(in_inches(pipe_diameter), "pipe diameter must be non-negative")?;
    require(dh > dp, "hole diameter must exceed pipe diameter")?;

    let v = check_finite(VELOCITY_FACTOR * q / (dh * dh - dp * dp), "annular velocity")?;
    Ok(ft_per_min(v))
}

/// Velocity inside the drill string, `24.51·Q/ID²` in ft/min.
pub fn pipe_velocity(flow_rate: VolumeRate, inner_diameter: Length) -> CorrelationResult<Velocity> {
    let q = ensure_non_negative(in_gpm(flow_rate), "flow rate must be non-negative")?;
    let id = ensure_positive(in_inches(inner_diameter), "inner diameter must be positive")?;

    let v = check_finite(VELOCITY_FACTOR * q / (id * id), "pipe velocity")?;
    Ok(ft_per_min(v))
}

/// Reynolds number `ρ·|v|·D/μ`.
pub fn reynolds_number(
    velocity: Velocity,
    diameter: Length,
    density: Density,
    viscosity: DynVisc,
) -> CorrelationResult<Ratio> {
    let v = pe_core::ensure_finite(in_mps(velocity), "velocity")?;
    let d = ensure_positive(in_m(diameter), "diameter must be positive")?;
    let rho = ensure_positive(in_kg_m3(density), "density must be positive")?;
    let mu = ensure_positive(in_pa_s(viscosity), "viscosity must be positive")?;

    let re = check_finite(rho * v.abs() * d / mu, "Reynolds number")?;
    Ok(unitless(re))
}

/// Equivalent circulating density `MW + APL/(0.052·TVD)`.
pub fn equivalent_circulating_density(
    mud_weight: Density,
    annular_pressure_loss: Pressure,
    tvd: Length,
) -> CorrelationResult<Density> {
    let mw = ensure_positive(in_ppg(mud_weight), "mud weight must be positive")?;
    let apl = ensure_non_negative(
        in_psi(annular_pressure_loss),
        "annular pressure loss must be non-negative",
    )?;
    let depth = ensure_positive(in_ft(tvd), "true vertical depth must be positive")?;

    let ecd = check_finite(mw + apl / (PPG_TO_PSI_PER_FT * depth), "ECD")?;
    Ok(ppg(ecd))
}
