//! Petrophysics: log porosity, Archie saturation, permeability transforms,
//! Corey relative permeability, Brooks-Corey capillary pressure and
//! volumetrics.
//!
//! Porosities and saturations are fractions in [0, 1].

use crate::common::{check_finite, clamp, require};
use crate::error::CorrelationResult;
use pe_core::{
    Area, Density, Length, Pressure, Volume, ensure_in_range, ensure_non_negative,
    ensure_positive, in_acre_ft, in_ft, in_kg_m3, in_m, in_psi, md, psi,
};

/// Corey exponents and endpoint for one phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoreyPhase {
    /// Relative permeability at the phase's maximum saturation
    pub endpoint: f64,
    pub exponent: f64,
}

impl Default for CoreyPhase {
    fn default() -> Self {
        Self {
            endpoint: 1.0,
            exponent: 2.0,
        }
    }
}

/// Archie parameters `a`, `m`, `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchieParameters {
    pub tortuosity: f64,
    pub cementation: f64,
    pub saturation_exponent: f64,
}

impl Default for ArchieParameters {
    fn default() -> Self {
        Self {
            tortuosity: 1.0,
            cementation: 2.0,
            saturation_exponent: 2.0,
        }
    }
}

fn fraction(value: f64, what: &'static str) -> CorrelationResult<f64> {
    Ok(ensure_in_range(value, 0.0, 1.0, what)?)
}

/// Effective porosity `(φN + φD)/2·(1 − Vsh)`.
pub fn porosity_from_logs(
    neutron_porosity: f64,
    density_porosity: f64,
    shale_volume: f64,
) -> CorrelationResult<f64> {
    let phi_n = fraction(neutron_porosity, "neutron porosity must be in [0, 1]")?;
    let phi_d = fraction(density_porosity, "density porosity must be in [0, 1]")?;
    let vsh = fraction(shale_volume, "shale volume must be in [0, 1]")?;
    Ok(0.5 * (phi_n + phi_d) * (1.0 - vsh))
}

/// Density-log porosity `(ρma − ρb)/(ρma − ρf)`.
///
/// The bulk density must lie between the fluid and matrix densities.
pub fn density_porosity(
    bulk_density: Density,
    matrix_density: Density,
    fluid_density: Density,
) -> CorrelationResult<f64> {
    let rho_b = ensure_positive(in_kg_m3(bulk_density), "bulk density must be positive")?;
    let rho_ma = ensure_positive(in_kg_m3(matrix_density), "matrix density must be positive")?;
    let rho_f = ensure_positive(in_kg_m3(fluid_density), "fluid density must be positive")?;
    require(rho_ma > rho_f, "matrix density must exceed fluid density")?;
    require(
        rho_b >= rho_f && rho_b <= rho_ma,
        "bulk density must lie between fluid and matrix density",
    )?;
    Ok((rho_ma - rho_b) / (rho_ma - rho_f))
}

/// Formation resistivity factor `F = a/φ^m`.
pub fn formation_factor(
    porosity: f64,
    tortuosity: f64,
    cementation: f64,
) -> CorrelationResult<f64> {
    let phi = fraction(porosity, "porosity must be in [0, 1]")?;
    require(phi > 0.0, "porosity must be positive")?;
    let a = ensure_positive(tortuosity, "tortuosity factor must be positive")?;
    let m = ensure_positive(cementation, "cementation exponent must be positive")?;
    check_finite(a / phi.powf(m), "formation factor")
}

/// Archie water saturation `Sw = (a·Rw/(φ^m·Rt))^(1/n)`, capped at 1.
pub fn archie_water_saturation(
    formation_resistivity: f64,
    water_resistivity: f64,
    porosity: f64,
    params: ArchieParameters,
) -> CorrelationResult<f64> {
    let rt = ensure_positive(formation_resistivity, "formation resistivity must be positive")?;
    let rw = ensure_positive(water_resistivity, "water resistivity must be positive")?;
    let n = ensure_positive(params.saturation_exponent, "saturation exponent must be positive")?;
    let f = formation_factor(porosity, params.tortuosity, params.cementation)?;
    let sw = check_finite((f * rw / rt).powf(1.0 / n), "water saturation")?;
    Ok(sw.min(1.0))
}

/// Kozeny-Carman permeability `k = d²·φ³/(C·(1 − φ)²)`.
///
/// `shape_factor` is the Carman constant (180 for packed spheres).
pub fn kozeny_carman_permeability(
    porosity: f64,
    grain_diameter: Length,
    shape_factor: f64,
) -> CorrelationResult<Area> {
    let phi = fraction(porosity, "porosity must be in [0, 1]")?;
    require(phi < 1.0, "porosity must be below 1")?;
    ensure_positive(in_m(grain_diameter), "grain diameter must be positive")?;
    let c = ensure_positive(shape_factor, "shape factor must be positive")?;
    let factor = phi.powi(3) / (c * (1.0 - phi).powi(2));
    Ok(grain_diameter * grain_diameter * factor)
}

/// Timur permeability `k = 8581·φ^4.4/Swi²` md (fractions).
pub fn timur_permeability(
    porosity: f64,
    irreducible_water_saturation: f64,
) -> CorrelationResult<Area> {
    let phi = fraction(porosity, "porosity must be in [0, 1]")?;
    let swi = fraction(
        irreducible_water_saturation,
        "irreducible water saturation must be in [0, 1]",
    )?;
    require(swi > 0.0, "irreducible water saturation must be positive")?;
    let k = check_finite(8_581.0 * phi.powf(4.4) / (swi * swi), "Timur permeability")?;
    Ok(md(k))
}

/// Normalized water saturation `(Sw − Swi)/(1 − Swi − Sor)`, clamped to [0, 1].
fn normalized_water_saturation(sw: f64, swi: f64, sor: f64) -> CorrelationResult<f64> {
    let sw = fraction(sw, "water saturation must be in [0, 1]")?;
    let swi = fraction(swi, "irreducible water saturation must be in [0, 1]")?;
    let sor = fraction(sor, "residual oil saturation must be in [0, 1]")?;
    require(swi + sor < 1.0, "irreducible water plus residual oil must be below 1")?;
    Ok(clamp((sw - swi) / (1.0 - swi - sor), 0.0, 1.0))
}

fn check_corey(phase: CoreyPhase) -> CorrelationResult<()> {
    fraction(phase.endpoint, "relative permeability endpoint must be in [0, 1]")?;
    ensure_positive(phase.exponent, "Corey exponent must be positive")?;
    Ok(())
}

/// Corey oil relative permeability `kro = kro°·(1 − Swn)^no`.
pub fn corey_oil_relative_permeability(
    water_saturation: f64,
    irreducible_water_saturation: f64,
    residual_oil_saturation: f64,
    oil: CoreyPhase,
) -> CorrelationResult<f64> {
    check_corey(oil)?;
    let swn = normalized_water_saturation(
        water_saturation,
        irreducible_water_saturation,
        residual_oil_saturation,
    )?;
    Ok(oil.endpoint * (1.0 - swn).powf(oil.exponent))
}

/// Corey water relative permeability `krw = krw°·Swn^nw`.
pub fn corey_water_relative_permeability(
    water_saturation: f64,
    irreducible_water_saturation: f64,
    residual_oil_saturation: f64,
    water: CoreyPhase,
) -> CorrelationResult<f64> {
    check_corey(water)?;
    let swn = normalized_water_saturation(
        water_saturation,
        irreducible_water_saturation,
        residual_oil_saturation,
    )?;
    Ok(water.endpoint * swn.powf(water.exponent))
}

/// Brooks-Corey drainage capillary pressure `Pc = Pe·Se^(−1/λ)` with
/// `Se = (Sw − Swi)/(1 − Swi)`.
///
/// Undefined at or below irreducible saturation, where `Pc` diverges.
pub fn brooks_corey_capillary_pressure(
    water_saturation: f64,
    irreducible_water_saturation: f64,
    entry_pressure: Pressure,
    pore_size_distribution: f64,
) -> CorrelationResult<Pressure> {
    let sw = fraction(water_saturation, "water saturation must be in [0, 1]")?;
    let swi = fraction(
        irreducible_water_saturation,
        "irreducible water saturation must be in [0, 1]",
    )?;
    require(swi < 1.0, "irreducible water saturation must be below 1")?;
    require(sw > swi, "water saturation must exceed irreducible saturation")?;
    let pe = ensure_non_negative(in_psi(entry_pressure), "entry pressure must be non-negative")?;
    let lambda = ensure_positive(
        pore_size_distribution,
        "pore size distribution index must be positive",
    )?;

    let se = (sw - swi) / (1.0 - swi);
    let pc = check_finite(pe * se.powf(-1.0 / lambda), "capillary pressure")?;
    Ok(psi(pc))
}

/// Net-to-gross thickness ratio.
pub fn net_to_gross(net_thickness: Length, gross_thickness: Length) -> CorrelationResult<f64> {
    let net = ensure_non_negative(in_ft(net_thickness), "net thickness must be non-negative")?;
    let gross = ensure_positive(in_ft(gross_thickness), "gross thickness must be positive")?;
    require(net <= gross, "net thickness must not exceed gross thickness")?;
    Ok(net / gross)
}

/// Oil-filled rock volume `GRV·NTG·φ·So`.
pub fn bulk_volume_oil(
    gross_rock_volume: Volume,
    net_to_gross: f64,
    porosity: f64,
    oil_saturation: f64,
) -> CorrelationResult<Volume> {
    ensure_non_negative(in_acre_ft(gross_rock_volume), "gross rock volume must be non-negative")?;
    let ntg = fraction(net_to_gross, "net-to-gross must be in [0, 1]")?;
    let phi = fraction(porosity, "porosity must be in [0, 1]")?;
    let so = fraction(oil_saturation, "oil saturation must be in [0, 1]")?;
    Ok(gross_rock_volume * (ntg * phi * so))
}

/// Hydrocarbon pore volume `BV·φ·Sh`.
pub fn hydrocarbon_pore_volume(
    bulk_volume: Volume,
    porosity: f64,
    hydrocarbon_saturation: f64,
) -> CorrelationResult<Volume> {
    ensure_non_negative(in_acre_ft(bulk_volume), "bulk volume must be non-negative")?;
    let phi = fraction(porosity, "porosity must be in [0, 1]")?;
    let sh = fraction(hydrocarbon_saturation, "hydrocarbon saturation must be in [0, 1]")?;
    Ok(bulk_volume * (phi * sh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorrelationError;
    use pe_core::{acre_ft, ft, g_per_cm3, in_md, inches};

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn log_porosities() {
        assert!(close(porosity_from_logs(0.25, 0.21, 0.1).unwrap(), 0.207, 1e-12));
        assert!(porosity_from_logs(1.2, 0.2, 0.0).is_err());

        let phi = density_porosity(g_per_cm3(2.40), g_per_cm3(2.65), g_per_cm3(1.0)).unwrap();
        assert!(close(phi, 0.25 / 1.65, 1e-12));
        assert_eq!(
            density_porosity(g_per_cm3(2.70), g_per_cm3(2.65), g_per_cm3(1.0)),
            Err(CorrelationError::DomainViolation {
                what: "bulk density must lie between fluid and matrix density"
            })
        );
    }

    #[test]
    fn archie_clean_sand() {
        // F = 1/0.2² = 25, Sw = sqrt(25·0.05/20) = 0.25
        assert!(close(formation_factor(0.2, 1.0, 2.0).unwrap(), 25.0, 1e-9));
        let sw = archie_water_saturation(20.0, 0.05, 0.2, ArchieParameters::default()).unwrap();
        assert!(close(sw, 0.25, 1e-12));

        // Rt below F·Rw reads wet, never above 1.
        let wet = archie_water_saturation(0.5, 0.05, 0.2, ArchieParameters::default()).unwrap();
        assert_eq!(wet, 1.0);
        assert!(archie_water_saturation(20.0, 0.05, 0.0, ArchieParameters::default()).is_err());
    }

    #[test]
    fn permeability_transforms() {
        let k = timur_permeability(0.2, 0.25).unwrap();
        assert!(close(in_md(k), 8_581.0 * 0.2_f64.powf(4.4) / 0.0625, 1e-9));
        assert!(timur_permeability(0.2, 0.0).is_err());

        let fine = kozeny_carman_permeability(0.25, inches(0.004), 180.0).unwrap();
        let coarse = kozeny_carman_permeability(0.25, inches(0.008), 180.0).unwrap();
        assert!(close(in_md(coarse) / in_md(fine), 4.0, 1e-9));
        assert!(kozeny_carman_permeability(1.0, inches(0.004), 180.0).is_err());
    }

    #[test]
    fn corey_endpoints() {
        let (swi, sor) = (0.2, 0.25);
        let phase = CoreyPhase::default();
        let kro_max = corey_oil_relative_permeability(swi, swi, sor, phase).unwrap();
        assert!(close(kro_max, 1.0, 1e-12));
        assert_eq!(corey_oil_relative_permeability(0.75, swi, sor, phase).unwrap(), 0.0);
        assert_eq!(corey_water_relative_permeability(swi, swi, sor, phase).unwrap(), 0.0);

        let water = CoreyPhase {
            endpoint: 0.4,
            exponent: 3.0,
        };
        let krw = corey_water_relative_permeability(0.75, swi, sor, water).unwrap();
        assert!(close(krw, 0.4, 1e-12));
        // halfway through the mobile range
        let krw_mid = corey_water_relative_permeability(0.475, swi, sor, water).unwrap();
        assert!(close(krw_mid, 0.4 * 0.125, 1e-12));

        assert!(corey_oil_relative_permeability(0.5, 0.6, 0.5, phase).is_err());
    }

    #[test]
    fn brooks_corey_rises_toward_irreducible() {
        let pe = psi(2.0);
        let wet = brooks_corey_capillary_pressure(1.0, 0.2, pe, 2.0).unwrap();
        assert!(close(in_psi(wet), 2.0, 1e-9));
        let dry = brooks_corey_capillary_pressure(0.3, 0.2, pe, 2.0).unwrap();
        assert!(in_psi(dry) > in_psi(wet));
        assert!(brooks_corey_capillary_pressure(0.2, 0.2, pe, 2.0).is_err());
    }

    #[test]
    fn volumetrics() {
        assert!(close(net_to_gross(ft(60.0), ft(80.0)).unwrap(), 0.75, 1e-12));
        assert!(net_to_gross(ft(90.0), ft(80.0)).is_err());

        let bvo = bulk_volume_oil(acre_ft(1_000.0), 0.75, 0.2, 0.7).unwrap();
        assert!(close(in_acre_ft(bvo), 105.0, 1e-9));
        let hcpv = hydrocarbon_pore_volume(acre_ft(1_000.0), 0.2, 0.7).unwrap();
        assert!(close(in_acre_ft(hcpv), 140.0, 1e-9));
    }
}
