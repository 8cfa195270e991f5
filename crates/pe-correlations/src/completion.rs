//! Completion and stimulation: fracture geometry, proppant and acid volumes.
//!
//! `fracture_width` and `fracture_productivity` are simplified screening
//! relations, not the textbook PKN width or a Prats/Cinco-Ley productivity
//! model. They are kept with their established coefficients so results stay
//! comparable with earlier runs.

use crate::common::{check_finite, require};
use crate::error::CorrelationResult;
use pe_core::units::factors::GAL_PER_FT3;
use pe_core::{
    Area, Density, DynVisc, Length, Mass, Pressure, Volume, VolumeRate, ensure_in_range,
    ensure_positive, ensure_non_negative, gal_per_ft, in_bbl_per_min, in_cp, in_ft, in_gal,
    in_lbm, in_md, in_md_ft, in_psi, inches, ppg, psi,
};

/// Pounds per gallon of water used for "pounds of proppant added" per gallon.
const PROPPANT_PPA_FACTOR: f64 = 8.34;

/// Productivity uplift of a propped fracture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractureProductivity {
    /// Post- to pre-fracture productivity ratio
    pub productivity_ratio: f64,
    /// Dimensionless fracture conductivity `kf·wf/(k·xf)`
    pub dimensionless_conductivity: f64,
}

/// Plane-strain modulus `E' = E/(1 − ν²)`.
pub fn plane_strain_modulus(youngs_modulus: Pressure, poisson_ratio: f64) -> CorrelationResult<Pressure> {
    let e = ensure_positive(in_psi(youngs_modulus), "Young's modulus must be positive")?;
    let nu = pe_core::ensure_finite(poisson_ratio, "poisson ratio")?;
    require(nu > -1.0 && nu < 0.5, "poisson ratio must be in (-1, 0.5)")?;
    Ok(psi(check_finite(e / (1.0 - nu * nu), "plane-strain modulus")?))
}

/// Fracture width `(12·μ·q/(h·E'))^(1/3)`, reported in inches.
///
/// `q` is the injection rate in bbl/s, `μ` in cP, `h` in ft and `E'` in psi.
/// Width grows with rate and shrinks with stiffer rock.
pub fn fracture_width(
    injection_rate: VolumeRate,
    viscosity: DynVisc,
    height: Length,
    youngs_modulus: Pressure,
    poisson_ratio: f64,
) -> CorrelationResult<Length> {
    let rate = ensure_positive(in_bbl_per_min(injection_rate), "injection rate must be positive")?;
    let mu = ensure_positive(in_cp(viscosity), "fluid viscosity must be positive")?;
    let h = ensure_positive(in_ft(height), "fracture height must be positive")?;
    let e_prime = in_psi(plane_strain_modulus(youngs_modulus, poisson_ratio)?);

    let q = rate / 60.0;
    let width = check_finite((12.0 * mu * q / (h * e_prime)).cbrt(), "fracture width")?;
    Ok(inches(width))
}

/// Proppant concentration in pounds added per gallon: `(lb/sg)/gal × 8.34`.
pub fn proppant_concentration(
    proppant_mass: Mass,
    fracture_volume: Volume,
    proppant_sg: f64,
) -> CorrelationResult<Density> {
    let mass = ensure_non_negative(in_lbm(proppant_mass), "proppant mass must be non-negative")?;
    let volume = ensure_positive(in_gal(fracture_volume), "fracture volume must be positive")?;
    let sg = ensure_positive(proppant_sg, "proppant specific gravity must be positive")?;

    let conc = check_finite(mass / sg / volume * PROPPANT_PPA_FACTOR, "proppant concentration")?;
    Ok(ppg(conc))
}

/// Matrix acid volume per foot of treated height,
/// `π((rw + pen)² − rw²)·φ·7.48` gal/ft.
pub fn acidizing_volume(
    wellbore_radius: Length,
    penetration_depth: Length,
    porosity: f64,
) -> CorrelationResult<Area> {
    let rw = ensure_positive(in_ft(wellbore_radius), "wellbore radius must be positive")?;
    let pen = ensure_non_negative(in_ft(penetration_depth), "penetration depth must be non-negative")?;
    let phi = ensure_in_range(porosity, 0.0, 1.0, "porosity must be in [0, 1]")?;

    let r = rw + pen;
    let rock_ft3_per_ft = std::f64::consts::PI * (r * r - rw * rw);
    let acid = check_finite(rock_ft3_per_ft * phi * GAL_PER_FT3, "acid volume")?;
    Ok(gal_per_ft(acid))
}

/// Productivity ratio `1 + 0.5·FCD` with `FCD = kf·wf/(k·xf)`.
pub fn fracture_productivity(
    permeability: Area,
    half_length: Length,
    conductivity: Volume,
) -> CorrelationResult<FractureProductivity> {
    let k = ensure_positive(in_md(permeability), "formation permeability must be positive")?;
    let xf = ensure_positive(in_ft(half_length), "fracture half-length must be positive")?;
    let kfwf = ensure_non_negative(in_md_ft(conductivity), "fracture conductivity must be non-negative")?;

    let fcd = check_finite(kfwf / (k * xf), "dimensionless conductivity")?;
    Ok(FractureProductivity {
        productivity_ratio: 1.0 + 0.5 * fcd,
        dimensionless_conductivity: fcd,
    })
}
