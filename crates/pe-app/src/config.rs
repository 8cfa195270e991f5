//! Engine defaults: the documented values used when a request omits an
//! optional parameter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Defaults for optional request parameters.
///
/// Every field has a default, so a YAML file only needs the keys it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineDefaults {
    /// Unit label assumed for mud weights
    pub mud_weight_unit: String,
    pub poisson_ratio: f64,
    /// Proppant specific gravity
    pub proppant_sg: f64,
    /// Acid strength, percent (reported only)
    pub acid_concentration_percent: f64,
    /// Absolute pipe roughness, ft
    pub pipe_roughness_ft: f64,
    pub weymouth_efficiency: f64,
    pub hazen_williams_coefficient: f64,
    pub orifice_discharge_coefficient: f64,
    pub pump_efficiency: f64,
    /// Specific gravity of the pumped fluid
    pub pump_fluid_sg: f64,
    /// Acceptable |NPV| at the reported IRR
    pub irr_tolerance: f64,
    pub royalty_rate: f64,
    /// $/bbl
    pub oil_opex_per_bbl: f64,
    /// $/Mscf
    pub gas_opex_per_mscf: f64,
    pub break_even_discount_rate: f64,
    pub project_life_years: u32,
    /// Surface bulk density of the overburden compaction trend, ppg
    pub overburden_surface_density_ppg: f64,
    /// psi held back from the breakdown pressure
    pub lost_circulation_margin_psi: f64,
    pub shale_volume: f64,
    pub archie_tortuosity: f64,
    pub archie_cementation: f64,
    pub archie_saturation_exponent: f64,
    /// Carman constant
    pub kozeny_carman_shape_factor: f64,
    pub corey_endpoint: f64,
    pub corey_exponent: f64,
    /// Brine salinity, ppm
    pub salinity_ppm: f64,
    pub gas_z_factor: f64,
    /// Rawlins-Schellhardt exponent n
    pub deliverability_exponent: f64,
    pub choke_discharge_coefficient: f64,
    /// ft
    pub wellbore_radius_ft: f64,
    /// ft
    pub drainage_radius_ft: f64,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            mud_weight_unit: "ppg".to_string(),
            poisson_ratio: 0.25,
            proppant_sg: 2.65,
            acid_concentration_percent: 15.0,
            pipe_roughness_ft: 0.0006,
            weymouth_efficiency: 1.0,
            hazen_williams_coefficient: 120.0,
            orifice_discharge_coefficient: 0.6,
            pump_efficiency: 0.75,
            pump_fluid_sg: 1.0,
            irr_tolerance: 0.001,
            royalty_rate: 0.125,
            oil_opex_per_bbl: 15.0,
            gas_opex_per_mscf: 1.5,
            break_even_discount_rate: 0.1,
            project_life_years: 20,
            overburden_surface_density_ppg: 18.0,
            lost_circulation_margin_psi: 50.0,
            shale_volume: 0.0,
            archie_tortuosity: 1.0,
            archie_cementation: 2.0,
            archie_saturation_exponent: 2.0,
            kozeny_carman_shape_factor: 180.0,
            corey_endpoint: 1.0,
            corey_exponent: 2.0,
            salinity_ppm: 0.0,
            gas_z_factor: 1.0,
            deliverability_exponent: 0.5,
            choke_discharge_coefficient: 0.85,
            wellbore_radius_ft: 0.354,
            drainage_radius_ft: 745.0,
        }
    }
}

/// Load defaults from a YAML file.
pub fn load_defaults(path: &Path) -> AppResult<EngineDefaults> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_defaults(&content).map_err(|message| AppError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse defaults from YAML text.
pub fn parse_defaults(yaml: &str) -> Result<EngineDefaults, String> {
    if yaml.trim().is_empty() {
        return Ok(EngineDefaults::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse defaults YAML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let d = parse_defaults("poisson_ratio: 0.3\nroyalty_rate: 0.2\n").unwrap();
        assert_eq!(d.poisson_ratio, 0.3);
        assert_eq!(d.royalty_rate, 0.2);
        assert_eq!(d.proppant_sg, 2.65);
        assert_eq!(d.mud_weight_unit, "ppg");
    }

    #[test]
    fn petrophysics_defaults_override_independently() {
        let d = parse_defaults("archie_cementation: 1.8\nsalinity_ppm: 35000\n").unwrap();
        assert_eq!(d.archie_cementation, 1.8);
        assert_eq!(d.archie_saturation_exponent, 2.0);
        assert_eq!(d.salinity_ppm, 35_000.0);
        assert_eq!(d.drainage_radius_ft, 745.0);
    }

    #[test]
    fn empty_yaml_is_all_defaults() {
        assert_eq!(parse_defaults("").unwrap(), EngineDefaults::default());
    }

    #[test]
    fn malformed_yaml_is_reported() {
        assert!(parse_defaults("poisson_ratio: [").is_err());
    }
}
