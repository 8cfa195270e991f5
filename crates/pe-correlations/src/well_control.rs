//! Well control: kill mud weight, circulating pressures, MAASP, formation,
//! overburden and fracture gradients, and lost-circulation margin.

use crate::common::{check_finite, require};
use crate::error::{CorrelationError, CorrelationResult};
use pe_core::units::factors::PPG_TO_PSI_PER_FT;
use pe_core::{
    Density, Length, Pressure, PressureGradient, ensure_finite, ensure_in_range,
    ensure_non_negative, ensure_positive, in_ft, in_lb_per_ft3, in_pa_per_m, in_ppg, in_psi,
    pa_per_m, ppg, psi, psi_per_ft,
};

/// Grain density of the compaction trend (2.65 g/cm³ quartz).
const MATRIX_DENSITY_PPG: f64 = 22.1;
/// Pore-water density of the compaction trend.
const PORE_WATER_DENSITY_PPG: f64 = 8.6;
/// Athy porosity decay constant, 1/ft.
const COMPACTION_PER_FT: f64 = 2.0e-4;

/// Kill calculations for a single kick, evaluated together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KillSheet {
    pub kill_mud_weight: Density,
    pub initial_circulating_pressure: Pressure,
    pub final_circulating_pressure: Pressure,
}

/// Mud weight whose hydrostatic column balances `pressure` at `depth`.
pub fn equivalent_mud_weight(pressure: Pressure, depth: Length) -> CorrelationResult<Density> {
    let p = ensure_non_negative(in_psi(pressure), "pressure must be non-negative")?;
    let d = ensure_positive(in_ft(depth), "depth must be positive")?;
    Ok(ppg(check_finite(p / (PPG_TO_PSI_PER_FT * d), "equivalent mud weight")?))
}

/// `MW + SIDPP/(0.052·TVD)`.
pub fn kill_mud_weight(
    original_mud_weight: Density,
    sidpp: Pressure,
    tvd: Length,
) -> CorrelationResult<Density> {
    let mw = ensure_positive(in_ppg(original_mud_weight), "mud weight must be positive")?;
    let sidpp = ensure_non_negative(in_psi(sidpp), "SIDPP must be non-negative")?;
    let tvd = ensure_positive(in_ft(tvd), "true vertical depth must be positive")?;
    Ok(ppg(check_finite(
        mw + sidpp / (PPG_TO_PSI_PER_FT * tvd),
        "kill mud weight",
    )?))
}

/// ICP = SIDPP + slow pump rate pressure.
pub fn initial_circulating_pressure(
    sidpp: Pressure,
    slow_pump_pressure: Pressure,
) -> CorrelationResult<Pressure> {
    ensure_non_negative(in_psi(sidpp), "SIDPP must be non-negative")?;
    ensure_non_negative(in_psi(slow_pump_pressure), "slow pump pressure must be non-negative")?;
    Ok(sidpp + slow_pump_pressure)
}

/// FCP = SPR·KMW/OMW.
pub fn final_circulating_pressure(
    slow_pump_pressure: Pressure,
    original_mud_weight: Density,
    kill_mud_weight: Density,
) -> CorrelationResult<Pressure> {
    let spr = ensure_non_negative(in_psi(slow_pump_pressure), "slow pump pressure must be non-negative")?;
    let omw = ensure_positive(in_ppg(original_mud_weight), "mud weight must be positive")?;
    let kmw = ensure_positive(in_ppg(kill_mud_weight), "kill mud weight must be positive")?;
    Ok(psi(check_finite(spr * kmw / omw, "final circulating pressure")?))
}

/// Kill mud weight, ICP and FCP for one kick.
pub fn kill_sheet(
    original_mud_weight: Density,
    sidpp: Pressure,
    slow_pump_pressure: Pressure,
    tvd: Length,
) -> CorrelationResult<KillSheet> {
    let kmw = kill_mud_weight(original_mud_weight, sidpp, tvd)?;
    let icp = initial_circulating_pressure(sidpp, slow_pump_pressure)?;
    let fcp = final_circulating_pressure(slow_pump_pressure, original_mud_weight, kmw)?;
    Ok(KillSheet {
        kill_mud_weight: kmw,
        initial_circulating_pressure: icp,
        final_circulating_pressure: fcp,
    })
}

/// Maximum allowable annular surface pressure `Pfrac − 0.052·MW·D_shoe`.
///
/// A mud column that already exceeds the shoe fracture pressure has no
/// allowable surface pressure and is reported as a domain violation.
pub fn maximum_allowable_annular_surface_pressure(
    fracture_pressure: Pressure,
    mud_weight: Density,
    shoe_depth: Length,
) -> CorrelationResult<Pressure> {
    let pf = ensure_non_negative(in_psi(fracture_pressure), "fracture pressure must be non-negative")?;
    let mw = ensure_positive(in_ppg(mud_weight), "mud weight must be positive")?;
    let shoe = ensure_non_negative(in_ft(shoe_depth), "shoe depth must be non-negative")?;

    let maasp = check_finite(pf - PPG_TO_PSI_PER_FT * mw * shoe, "MAASP")?;
    if maasp < 0.0 {
        return Err(CorrelationError::DomainViolation {
            what: "mud hydrostatic at the shoe exceeds fracture pressure",
        });
    }
    Ok(psi(maasp))
}

/// Drill pipe pressure while pumping kill mud to the bit.
///
/// Declines linearly from ICP to FCP over `total_strokes`, then holds FCP.
pub fn pump_pressure_schedule(
    icp: Pressure,
    fcp: Pressure,
    total_strokes: f64,
    current_stroke: f64,
) -> CorrelationResult<Pressure> {
    ensure_non_negative(in_psi(icp), "ICP must be non-negative")?;
    ensure_non_negative(in_psi(fcp), "FCP must be non-negative")?;
    ensure_positive(total_strokes, "total strokes must be positive")?;
    ensure_non_negative(current_stroke, "current stroke must be non-negative")?;

    if current_stroke >= total_strokes {
        return Ok(fcp);
    }
    let fraction = current_stroke / total_strokes;
    Ok(icp - (icp - fcp) * fraction)
}

/// Eaton fracture gradient `ν/(1−ν)·(OBG − PPG) + PPG`.
pub fn fracture_pressure_gradient(
    overburden: PressureGradient,
    pore: PressureGradient,
    poisson_ratio: f64,
) -> CorrelationResult<PressureGradient> {
    let obg = ensure_finite(in_pa_per_m(overburden), "overburden gradient")?;
    let pore = ensure_non_negative(in_pa_per_m(pore), "pore gradient must be non-negative")?;
    let nu = ensure_in_range(poisson_ratio, 0.0, 1.0, "poisson ratio must be in [0, 1)")?;
    require(nu < 1.0, "poisson ratio must be in [0, 1)")?;
    require(obg >= pore, "overburden gradient must not be below pore gradient")?;

    let frac = check_finite(nu / (1.0 - nu) * (obg - pore) + pore, "fracture gradient")?;
    Ok(pa_per_m(frac))
}

/// Hydrostatic gradient of the formation water column, `ρw·g` (lb/ft³ / 144 psi/ft).
pub fn formation_pressure_gradient(water_density: Density) -> CorrelationResult<PressureGradient> {
    let rho = ensure_positive(in_lb_per_ft3(water_density), "water density must be positive")?;
    Ok(psi_per_ft(rho / 144.0))
}

/// Average overburden gradient to `depth` under an Athy compaction trend.
///
/// Porosity decays as `φ0·e^(−cD)` from the surface porosity implied by
/// `surface_density`; the gradient is `0.052·ρ̄` with `ρ̄` the depth-averaged
/// bulk density, equal to `surface_density` at the surface.
pub fn overburden_pressure_gradient(
    depth: Length,
    surface_density: Density,
) -> CorrelationResult<PressureGradient> {
    let d = ensure_non_negative(in_ft(depth), "depth must be non-negative")?;
    let rho_s = ensure_positive(in_ppg(surface_density), "surface density must be positive")?;
    require(
        rho_s > PORE_WATER_DENSITY_PPG && rho_s < MATRIX_DENSITY_PPG,
        "surface density must lie between pore water and grain density",
    )?;

    let phi0 = (MATRIX_DENSITY_PPG - rho_s) / (MATRIX_DENSITY_PPG - PORE_WATER_DENSITY_PPG);
    let cd = COMPACTION_PER_FT * d;
    // mean of e^(−cD) over the column; series near the surface
    let decay = if cd < 1.0e-8 { 1.0 - cd / 2.0 } else { -(-cd).exp_m1() / cd };
    let mean_density =
        MATRIX_DENSITY_PPG - (MATRIX_DENSITY_PPG - PORE_WATER_DENSITY_PPG) * phi0 * decay;
    let gradient = check_finite(PPG_TO_PSI_PER_FT * mean_density, "overburden gradient")?;
    Ok(psi_per_ft(gradient))
}

/// Pressure ceiling before losses, and what is left above the mud column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LostCirculation {
    /// Formation breakdown pressure less the safety margin
    pub limit_pressure: Pressure,
    /// `limit_pressure` minus the hydrostatic pressure
    pub remaining_margin: Pressure,
}

/// Lost-circulation limit `Pbreakdown − margin` and the headroom left over
/// the current hydrostatic.
///
/// A hydrostatic already above the limit is reported as a domain violation.
pub fn lost_circulation_pressure(
    breakdown_pressure: Pressure,
    hydrostatic_pressure: Pressure,
    safety_margin: Pressure,
) -> CorrelationResult<LostCirculation> {
    let pb = ensure_positive(in_psi(breakdown_pressure), "breakdown pressure must be positive")?;
    let ph = ensure_non_negative(
        in_psi(hydrostatic_pressure),
        "hydrostatic pressure must be non-negative",
    )?;
    let margin = ensure_non_negative(in_psi(safety_margin), "safety margin must be non-negative")?;

    let limit = pb - margin;
    let remaining = limit - ph;
    if remaining < 0.0 {
        return Err(CorrelationError::DomainViolation {
            what: "hydrostatic pressure exceeds the lost-circulation limit",
        });
    }
    Ok(LostCirculation {
        limit_pressure: psi(limit),
        remaining_margin: psi(remaining),
    })
}
