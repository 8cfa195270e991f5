//! Single-phase flow: friction factors, pipe pressure drop, gas/liquid line
//! capacity, orifices, critical and settling velocities, pump power.

use crate::common::{LAMINAR_REYNOLDS, check_finite, require};
use crate::error::{CorrelationError, CorrelationResult};
use pe_core::constants::G0_MPS2;
use pe_core::{
    Density, DynVisc, Length, Power, Pressure, Ratio, SurfaceTension, Temperature, Velocity,
    VolumeRate, ensure_finite, ensure_in_range, ensure_non_negative, ensure_positive, ft_per_s,
    gpm, in_ft, in_inches, in_kg_m3, in_lb_per_ft3, in_m, in_m3ps, in_miles, in_pa, in_pa_s,
    in_psi, in_rankine, m3ps, mps, mscf_per_day, pa, unitless, w,
};
use pe_solver::{ToleranceSpec, solve_with_expansion};

/// Weymouth base temperature (°R) and pressure (psia).
const WEYMOUTH_BASE_T: f64 = 520.0;
const WEYMOUTH_BASE_P: f64 = 14.73;

/// Density of fresh water for specific-gravity based inputs, kg/m³.
const WATER_DENSITY_KG_M3: f64 = 1000.0;

/// Swamee-Jain explicit approximation of the Colebrook friction factor (Darcy).
pub fn swamee_jain_friction_factor(reynolds: f64, relative_roughness: f64) -> CorrelationResult<f64> {
    let re = ensure_positive(reynolds, "Reynolds number must be positive")?;
    let e_d = ensure_non_negative(relative_roughness, "relative roughness must be non-negative")?;
    let a = e_d / 3.7;
    let b = 5.74 / re.powf(0.9);
    check_finite(0.25 / (a + b).log10().powi(2), "Swamee-Jain friction factor")
}

/// Darcy friction factor from the Moody chart.
///
/// Laminar flow uses `64/Re`; otherwise the Colebrook-White equation is solved
/// for `x = 1/√f` with the bracketing root finder, starting from a bracket
/// around the Swamee-Jain estimate.
pub fn moody_friction_factor(reynolds: f64, relative_roughness: f64) -> CorrelationResult<Ratio> {
    let re = ensure_positive(reynolds, "Reynolds number must be positive")?;
    let e_d = ensure_non_negative(relative_roughness, "relative roughness must be non-negative")?;

    if re < LAMINAR_REYNOLDS {
        return Ok(unitless(64.0 / re));
    }

    let x0 = 1.0 / swamee_jain_friction_factor(re, e_d)?.sqrt();
    let colebrook = |x: f64| -> CorrelationResult<f64> {
        Ok(x + 2.0 * (e_d / 3.7 + 2.51 * x / re).log10())
    };
    let tol = ToleranceSpec {
        abs: 1e-14,
        residual: 1e-10,
        max_iterations: 100,
    };
    let root = solve_with_expansion(colebrook, 0.5 * x0, 2.0 * x0, 4.0, &tol)?;
    let f = check_finite(1.0 / (root.root * root.root), "Colebrook friction factor")?;
    Ok(unitless(f))
}

/// Frictional pressure drop along a horizontal pipe (Darcy-Weisbach).
pub fn pressure_drop_horizontal_pipe(
    flow_rate: VolumeRate,
    diameter: Length,
    length: Length,
    density: Density,
    viscosity: DynVisc,
    roughness: Length,
) -> CorrelationResult<Pressure> {
    let q = ensure_non_negative(in_m3ps(flow_rate), "flow rate must be non-negative")?;
    let d = ensure_positive(in_m(diameter), "pipe diameter must be positive")?;
    let l = ensure_non_negative(in_m(length), "pipe length must be non-negative")?;
    let rho = ensure_positive(in_kg_m3(density), "fluid density must be positive")?;
    let mu = ensure_positive(in_pa_s(viscosity), "fluid viscosity must be positive")?;
    let eps = ensure_non_negative(in_m(roughness), "pipe roughness must be non-negative")?;

    if q == 0.0 {
        return Ok(pa(0.0));
    }

    let area = std::f64::consts::PI * d * d / 4.0;
    let v = q / area;
    let re = check_finite(rho * v * d / mu, "Reynolds number")?;
    let f = moody_friction_factor(re, eps / d)?.value;

    let dp = check_finite(f * l / d * 0.5 * rho * v * v, "pressure drop")?;
    Ok(pa(dp))
}

/// Weymouth gas line capacity in Mscf/d.
///
/// `433.5·E·(Tb/Pb)·((p1² − p2²)/(γ·T·L))^0.5·D^2.667` with pressures in psia,
/// T in °R, L in miles and D in inches.
pub fn gas_flow_rate_weymouth(
    upstream_pressure: Pressure,
    downstream_pressure: Pressure,
    diameter: Length,
    length: Length,
    gas_gravity: f64,
    temperature: Temperature,
    efficiency: f64,
) -> CorrelationResult<VolumeRate> {
    let p1 = ensure_non_negative(in_psi(upstream_pressure), "upstream pressure must be non-negative")?;
    let p2 = ensure_non_negative(in_psi(downstream_pressure), "downstream pressure must be non-negative")?;
    require(p1 >= p2, "upstream pressure must not be below downstream pressure")?;
    let d = ensure_positive(in_inches(diameter), "pipe diameter must be positive")?;
    let l = ensure_positive(in_miles(length), "pipe length must be positive")?;
    let sg = ensure_positive(gas_gravity, "gas gravity must be positive")?;
    let t = ensure_positive(in_rankine(temperature), "temperature must be positive")?;
    let eff = ensure_in_range(efficiency, 0.0, 1.0, "pipeline efficiency must be in (0, 1]")?;
    require(eff > 0.0, "pipeline efficiency must be in (0, 1]")?;

    let scf_per_day = 433.5
        * eff
        * (WEYMOUTH_BASE_T / WEYMOUTH_BASE_P)
        * ((p1 * p1 - p2 * p2) / (sg * t * l)).sqrt()
        * d.powf(2.667);
    let mscf = check_finite(scf_per_day / 1000.0, "Weymouth flow rate")?;
    Ok(mscf_per_day(mscf))
}

/// Hazen-Williams liquid line capacity, `Q[gpm] = 0.442·D^2.63·C·(ΔP/L)^0.54`
/// with D in inches, ΔP in psi and L in ft.
pub fn oil_flow_rate_hazen_williams(
    pressure_drop: Pressure,
    diameter: Length,
    length: Length,
    coefficient: f64,
) -> CorrelationResult<VolumeRate> {
    let dp = ensure_non_negative(in_psi(pressure_drop), "pressure drop must be non-negative")?;
    let d = ensure_positive(in_inches(diameter), "pipe diameter must be positive")?;
    let l = ensure_positive(in_ft(length), "pipe length must be positive")?;
    let c = ensure_positive(coefficient, "Hazen-Williams coefficient must be positive")?;

    let q = check_finite(0.442 * d.powf(2.63) * c * (dp / l).powf(0.54), "Hazen-Williams flow rate")?;
    Ok(gpm(q))
}

/// Incompressible orifice flow `Cd·A·√(2ΔP/ρ)`.
pub fn flow_through_orifice(
    upstream_pressure: Pressure,
    downstream_pressure: Pressure,
    diameter: Length,
    density: Density,
    discharge_coefficient: f64,
) -> CorrelationResult<VolumeRate> {
    let p1 = ensure_finite(in_pa(upstream_pressure), "upstream pressure")?;
    let p2 = ensure_finite(in_pa(downstream_pressure), "downstream pressure")?;
    require(p1 >= p2, "upstream pressure must not be below downstream pressure")?;
    let d = ensure_positive(in_m(diameter), "orifice diameter must be positive")?;
    let rho = ensure_positive(in_kg_m3(density), "fluid density must be positive")?;
    let cd = ensure_in_range(discharge_coefficient, 0.0, 1.0, "discharge coefficient must be in (0, 1]")?;
    require(cd > 0.0, "discharge coefficient must be in (0, 1]")?;

    let area = std::f64::consts::PI * d * d / 4.0;
    let q = check_finite(cd * area * (2.0 * (p1 - p2) / rho).sqrt(), "orifice flow rate")?;
    Ok(m3ps(q))
}

/// Turner critical velocity for liquid unloading, in ft/s:
/// `1.593·σ^¼·(ρL − ρg)^¼/ρg^½` with σ in dynes/cm and densities in lb/ft³.
pub fn critical_flow_velocity(
    liquid_density: Density,
    gas_density: Density,
    surface_tension: SurfaceTension,
) -> CorrelationResult<Velocity> {
    let rho_l = ensure_positive(in_lb_per_ft3(liquid_density), "liquid density must be positive")?;
    let rho_g = ensure_positive(in_lb_per_ft3(gas_density), "gas density must be positive")?;
    require(rho_l > rho_g, "liquid density must exceed gas density")?;
    let sigma = ensure_non_negative(surface_tension.in_dyn_per_cm(), "surface tension must be non-negative")?;

    let v = check_finite(
        1.593 * sigma.powf(0.25) * (rho_l - rho_g).powf(0.25) / rho_g.sqrt(),
        "critical velocity",
    )?;
    Ok(ft_per_s(v))
}

/// Stokes terminal settling velocity `g·d²·(ρp − ρf)/(18·μ)`.
///
/// Negative when the particle is lighter than the fluid (it rises).
pub fn terminal_settling_velocity(
    particle_diameter: Length,
    particle_density: Density,
    fluid_density: Density,
    fluid_viscosity: DynVisc,
) -> CorrelationResult<Velocity> {
    let d = ensure_positive(in_m(particle_diameter), "particle diameter must be positive")?;
    let rho_p = ensure_positive(in_kg_m3(particle_density), "particle density must be positive")?;
    let rho_f = ensure_positive(in_kg_m3(fluid_density), "fluid density must be positive")?;
    let mu = ensure_positive(in_pa_s(fluid_viscosity), "fluid viscosity must be positive")?;

    let v = check_finite(G0_MPS2 * d * d * (rho_p - rho_f) / (18.0 * mu), "settling velocity")?;
    Ok(mps(v))
}

/// Hydraulic power required at the pump shaft, `ρ·g·Q·H/η`.
pub fn pump_power(
    flow_rate: VolumeRate,
    total_dynamic_head: Length,
    efficiency: f64,
    specific_gravity: f64,
) -> CorrelationResult<Power> {
    let q = ensure_non_negative(in_m3ps(flow_rate), "flow rate must be non-negative")?;
    let head = ensure_non_negative(in_m(total_dynamic_head), "total dynamic head must be non-negative")?;
    let eta = ensure_in_range(efficiency, 0.0, 1.0, "pump efficiency must be in (0, 1]")?;
    if eta == 0.0 {
        return Err(CorrelationError::DomainViolation {
            what: "pump efficiency must be in (0, 1]",
        });
    }
    let sg = ensure_positive(specific_gravity, "specific gravity must be positive")?;

    let rho = sg * WATER_DENSITY_KG_M3;
    let p = check_finite(rho * G0_MPS2 * q * head / eta, "pump power")?;
    Ok(w(p))
}
