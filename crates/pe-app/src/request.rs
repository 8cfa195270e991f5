//! Request catalog: one variant per engine operation.
//!
//! Numbers arrive in the oilfield units named on each field. Optional fields
//! fall back to [`EngineDefaults`](crate::config::EngineDefaults).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    // --- drilling ---
    /// Mud weight in `unit` (default ppg)
    MudWeightToPressureGradient {
        mud_weight: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// Mud weight in `unit`, depth ft
    HydrostaticPressure {
        mud_weight: f64,
        depth: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// gpm, inches
    AnnularVelocity {
        flow_rate: f64,
        hole_diameter: f64,
        pipe_diameter: f64,
    },
    /// gpm, inches
    PipeVelocity {
        flow_rate: f64,
        pipe_inner_diameter: f64,
    },
    /// ft/s, inches, ppg, cP
    ReynoldsNumber {
        velocity: f64,
        diameter: f64,
        density: f64,
        viscosity: f64,
    },
    /// ppg, psi, ft
    EquivalentCirculatingDensity {
        mud_weight: f64,
        annular_pressure_loss: f64,
        true_vertical_depth: f64,
    },

    // --- well control ---
    /// psi, ft
    EquivalentMudWeight { pressure: f64, depth: f64 },
    /// ppg, psi, ft
    KillMudWeight {
        original_mud_weight: f64,
        shut_in_drillpipe_pressure: f64,
        true_vertical_depth: f64,
    },
    /// psi
    InitialCirculatingPressure {
        shut_in_drillpipe_pressure: f64,
        slow_pump_rate_pressure: f64,
    },
    /// psi, ppg
    FinalCirculatingPressure {
        slow_pump_rate_pressure: f64,
        original_mud_weight: f64,
        kill_mud_weight: f64,
    },
    /// ppg, psi, ft
    KillSheet {
        original_mud_weight: f64,
        shut_in_drillpipe_pressure: f64,
        slow_pump_rate_pressure: f64,
        true_vertical_depth: f64,
    },
    /// psi, ppg, ft
    MaximumAllowableAnnularSurfacePressure {
        fracture_pressure: f64,
        mud_weight: f64,
        shoe_depth: f64,
    },
    /// psi, strokes
    PumpPressureSchedule {
        initial_circulating_pressure: f64,
        final_circulating_pressure: f64,
        total_pump_strokes: f64,
        current_stroke: f64,
    },
    /// psi/ft
    FracturePressureGradient {
        overburden_gradient: f64,
        pore_pressure_gradient: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poisson_ratio: Option<f64>,
    },

    /// lb/ft³
    FormationPressureGradient { formation_water_density: f64 },
    /// ft, surface bulk density ppg
    OverburdenPressureGradient {
        depth: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        surface_density: Option<f64>,
    },
    /// psi
    LostCirculationPressure {
        formation_pressure: f64,
        hydrostatic_pressure: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        safety_margin: Option<f64>,
    },

    // --- completion ---
    /// bbl/min, cP, ft, psi
    FractureWidth {
        injection_rate: f64,
        fluid_viscosity: f64,
        fracture_height: f64,
        youngs_modulus: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poisson_ratio: Option<f64>,
    },
    /// lb, gal, specific gravity
    ProppantConcentration {
        proppant_mass: f64,
        fracture_volume: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proppant_density: Option<f64>,
    },
    /// ft, inches, fraction, percent
    AcidizingVolume {
        wellbore_radius: f64,
        penetration_depth: f64,
        porosity: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        acid_concentration: Option<f64>,
    },
    /// md, ft, md·ft
    HydraulicFracturingProductivity {
        formation_permeability: f64,
        fracture_half_length: f64,
        fracture_conductivity: f64,
    },

    // --- flow ---
    MoodyFrictionFactor {
        reynolds_number: f64,
        relative_roughness: f64,
    },
    /// bbl/day, inches, ft, lb/ft³, cP, ft
    PressureDropHorizontalPipe {
        flow_rate: f64,
        pipe_diameter: f64,
        pipe_length: f64,
        fluid_density: f64,
        fluid_viscosity: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pipe_roughness: Option<f64>,
    },
    /// psia, inches, miles, gravity, °R
    GasFlowRateWeymouth {
        upstream_pressure: f64,
        downstream_pressure: f64,
        pipe_diameter: f64,
        pipe_length: f64,
        gas_gravity: f64,
        temperature: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        efficiency: Option<f64>,
    },
    /// psi, inches, ft
    OilFlowRateHazenWilliams {
        pressure_drop: f64,
        pipe_diameter: f64,
        pipe_length: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hazen_williams_coefficient: Option<f64>,
    },
    /// psi, inches, lb/ft³
    FlowThroughOrifice {
        upstream_pressure: f64,
        downstream_pressure: f64,
        orifice_diameter: f64,
        fluid_density: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discharge_coefficient: Option<f64>,
    },
    /// lb/ft³, dynes/cm
    CriticalFlowVelocity {
        liquid_density: f64,
        gas_density: f64,
        surface_tension: f64,
    },
    /// ft, lb/ft³, cP
    TerminalSettlingVelocity {
        particle_diameter: f64,
        particle_density: f64,
        fluid_density: f64,
        fluid_viscosity: f64,
    },
    /// ft/s, ft, degrees, lb/ft³, cP, dynes/cm
    MultiphaseFlowPressureDrop {
        liquid_superficial_velocity: f64,
        gas_superficial_velocity: f64,
        pipe_diameter: f64,
        pipe_inclination: f64,
        liquid_density: f64,
        gas_density: f64,
        liquid_viscosity: f64,
        gas_viscosity: f64,
        surface_tension: f64,
    },
    /// bbl/day, ft
    PumpHeadCalculation {
        flow_rate: f64,
        total_dynamic_head: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pump_efficiency: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specific_gravity: Option<f64>,
    },

    // --- reservoir ---
    /// psia, STB/day
    VogelIpr {
        reservoir_pressure: f64,
        bottomhole_pressure: f64,
        maximum_oil_rate: f64,
    },
    /// STB/day, psia
    ProductivityIndex {
        flow_rate: f64,
        reservoir_pressure: f64,
        bottomhole_pressure: f64,
    },
    /// scf/STB, gravity, °API, °F
    BubblePointPressure {
        gas_oil_ratio: f64,
        gas_gravity: f64,
        oil_gravity: f64,
        temperature: f64,
    },
    /// scf/STB, gravity, °API, °F
    OilFormationVolumeFactor {
        gas_oil_ratio: f64,
        gas_gravity: f64,
        oil_gravity: f64,
        temperature: f64,
    },
    /// psia, °F, gravity, °API
    SolutionGasOilRatio {
        pressure: f64,
        temperature: f64,
        gas_gravity: f64,
        oil_gravity: f64,
    },

    // --- production ---
    /// md, ft, psi, cP, bbl/STB, ft
    DarcyRadialFlow {
        permeability: f64,
        thickness: f64,
        pressure_drop: f64,
        viscosity: f64,
        formation_volume_factor: f64,
        wellbore_radius: f64,
        drainage_radius: f64,
    },
    /// STB/day/psi, ft
    SkinFactor {
        actual_productivity_index: f64,
        ideal_productivity_index: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wellbore_radius: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drainage_radius: Option<f64>,
    },
    /// Mscf/day, psia
    GasWellDeliverability {
        absolute_open_flow_potential: f64,
        flowing_bottomhole_pressure: f64,
        reservoir_pressure: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flow_exponent: Option<f64>,
    },
    /// psia, inches, gravity, °R
    ChokeFlowRateGas {
        upstream_pressure: f64,
        downstream_pressure: f64,
        choke_diameter: f64,
        gas_gravity: f64,
        temperature: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discharge_coefficient: Option<f64>,
    },
    /// psia, hours, STB/day, fraction, cP, 1/psi, bbl/STB, ft
    WellTestHorner {
        pressure_data: Vec<f64>,
        time_data: Vec<f64>,
        production_time: f64,
        flowing_pressure: f64,
        flow_rate: f64,
        porosity: f64,
        viscosity: f64,
        total_compressibility: f64,
        formation_volume_factor: f64,
        thickness: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wellbore_radius: Option<f64>,
    },

    // --- rock properties ---
    /// Fractions
    PorosityFromLogs {
        neutron_porosity: f64,
        density_porosity: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shale_volume: Option<f64>,
    },
    /// g/cm³
    PorosityFromDensityLog {
        bulk_density: f64,
        matrix_density: f64,
        fluid_density: f64,
    },
    /// ohm·m, fraction
    WaterSaturationArchie {
        formation_resistivity: f64,
        water_resistivity: f64,
        porosity: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cementation_factor: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        saturation_exponent: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tortuosity_factor: Option<f64>,
    },
    /// Fraction, inches
    PermeabilityFromPorosityKozenyCarman {
        porosity: f64,
        grain_diameter: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shape_factor: Option<f64>,
    },
    /// Fractions
    PermeabilityTimurCorrelation {
        porosity: f64,
        irreducible_water_saturation: f64,
    },
    /// Fractions
    RelativePermeabilityOilCorey {
        water_saturation: f64,
        irreducible_water_saturation: f64,
        residual_oil_saturation: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        oil_endpoint: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        oil_exponent: Option<f64>,
    },
    /// Fractions
    RelativePermeabilityWaterCorey {
        water_saturation: f64,
        irreducible_water_saturation: f64,
        residual_oil_saturation: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        water_endpoint: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        water_exponent: Option<f64>,
    },
    /// Fractions, psi
    CapillaryPressureBrooksCorey {
        water_saturation: f64,
        irreducible_water_saturation: f64,
        entry_pressure: f64,
        pore_size_distribution: f64,
    },
    FormationFactor {
        porosity: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cementation_factor: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tortuosity_factor: Option<f64>,
    },
    /// ft
    NetToGrossRatio {
        net_thickness: f64,
        gross_thickness: f64,
    },
    /// acre-ft, fractions
    BulkVolumeOil {
        gross_rock_volume: f64,
        net_to_gross: f64,
        porosity: f64,
        oil_saturation: f64,
    },
    /// acre-ft, fractions
    HydrocarbonPoreVolume {
        bulk_volume: f64,
        porosity: f64,
        hydrocarbon_saturation: f64,
    },

    // --- fluids ---
    /// °F, psia
    WaterFormationVolumeFactor { temperature: f64, pressure: f64 },
    /// °F, psia, ppm
    WaterCompressibility {
        temperature: f64,
        pressure: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salinity: Option<f64>,
    },
    /// °F, psia
    GasFormationVolumeFactor {
        temperature: f64,
        pressure: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        z_factor: Option<f64>,
    },
    /// °F, psia, ppm
    WaterViscosity {
        temperature: f64,
        pressure: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salinity: Option<f64>,
    },

    // --- economics ---
    NetPresentValue {
        cash_flows: Vec<f64>,
        discount_rate: f64,
        #[serde(default)]
        initial_investment: f64,
    },
    InternalRateOfReturn {
        cash_flows: Vec<f64>,
        initial_investment: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },
    DiscountedPaybackPeriod {
        cash_flows: Vec<f64>,
        discount_rate: f64,
        initial_investment: f64,
    },
    ProfitabilityIndex {
        cash_flows: Vec<f64>,
        discount_rate: f64,
        initial_investment: f64,
    },
    /// bbl/day, $/bbl
    OilRevenue {
        production_rate: f64,
        oil_price: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        royalty_rate: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operating_cost_per_barrel: Option<f64>,
    },
    /// Mscf/day, $/Mscf
    GasRevenue {
        production_rate: f64,
        gas_price: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        royalty_rate: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operating_cost_per_mcf: Option<f64>,
    },
    /// $, bbl/year, $/bbl
    BreakEvenOilPrice {
        initial_investment: f64,
        annual_production: f64,
        operating_cost_per_barrel: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        royalty_rate: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discount_rate: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        project_life: Option<u32>,
    },
    NpvProfile {
        cash_flows: Vec<f64>,
        #[serde(default)]
        initial_investment: f64,
        rates: Vec<f64>,
    },
}

impl Request {
    /// Operation name as it appears in the `operation` tag.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::MudWeightToPressureGradient { .. } => "mud_weight_to_pressure_gradient",
            Request::HydrostaticPressure { .. } => "hydrostatic_pressure",
            Request::AnnularVelocity { .. } => "annular_velocity",
            Request::PipeVelocity { .. } => "pipe_velocity",
            Request::ReynoldsNumber { .. } => "reynolds_number",
            Request::EquivalentCirculatingDensity { .. } => "equivalent_circulating_density",
            Request::EquivalentMudWeight { .. } => "equivalent_mud_weight",
            Request::KillMudWeight { .. } => "kill_mud_weight",
            Request::InitialCirculatingPressure { .. } => "initial_circulating_pressure",
            Request::FinalCirculatingPressure { .. } => "final_circulating_pressure",
            Request::KillSheet { .. } => "kill_sheet",
            Request::MaximumAllowableAnnularSurfacePressure { .. } => {
                "maximum_allowable_annular_surface_pressure"
            }
            Request::PumpPressureSchedule { .. } => "pump_pressure_schedule",
            Request::FracturePressureGradient { .. } => "fracture_pressure_gradient",
            Request::FormationPressureGradient { .. } => "formation_pressure_gradient",
            Request::OverburdenPressureGradient { .. } => "overburden_pressure_gradient",
            Request::LostCirculationPressure { .. } => "lost_circulation_pressure",
            Request::FractureWidth { .. } => "fracture_width",
            Request::ProppantConcentration { .. } => "proppant_concentration",
            Request::AcidizingVolume { .. } => "acidizing_volume",
            Request::HydraulicFracturingProductivity { .. } => "hydraulic_fracturing_productivity",
            Request::MoodyFrictionFactor { .. } => "moody_friction_factor",
            Request::PressureDropHorizontalPipe { .. } => "pressure_drop_horizontal_pipe",
            Request::GasFlowRateWeymouth { .. } => "gas_flow_rate_weymouth",
            Request::OilFlowRateHazenWilliams { .. } => "oil_flow_rate_hazen_williams",
            Request::FlowThroughOrifice { .. } => "flow_through_orifice",
            Request::CriticalFlowVelocity { .. } => "critical_flow_velocity",
            Request::TerminalSettlingVelocity { .. } => "terminal_settling_velocity",
            Request::MultiphaseFlowPressureDrop { .. } => "multiphase_flow_pressure_drop",
            Request::PumpHeadCalculation { .. } => "pump_head_calculation",
            Request::VogelIpr { .. } => "vogel_ipr",
            Request::ProductivityIndex { .. } => "productivity_index",
            Request::BubblePointPressure { .. } => "bubble_point_pressure",
            Request::OilFormationVolumeFactor { .. } => "oil_formation_volume_factor",
            Request::SolutionGasOilRatio { .. } => "solution_gas_oil_ratio",
            Request::DarcyRadialFlow { .. } => "darcy_radial_flow",
            Request::SkinFactor { .. } => "skin_factor",
            Request::GasWellDeliverability { .. } => "gas_well_deliverability",
            Request::ChokeFlowRateGas { .. } => "choke_flow_rate_gas",
            Request::WellTestHorner { .. } => "well_test_horner",
            Request::PorosityFromLogs { .. } => "porosity_from_logs",
            Request::PorosityFromDensityLog { .. } => "porosity_from_density_log",
            Request::WaterSaturationArchie { .. } => "water_saturation_archie",
            Request::PermeabilityFromPorosityKozenyCarman { .. } => {
                "permeability_from_porosity_kozeny_carman"
            }
            Request::PermeabilityTimurCorrelation { .. } => "permeability_timur_correlation",
            Request::RelativePermeabilityOilCorey { .. } => "relative_permeability_oil_corey",
            Request::RelativePermeabilityWaterCorey { .. } => "relative_permeability_water_corey",
            Request::CapillaryPressureBrooksCorey { .. } => "capillary_pressure_brooks_corey",
            Request::FormationFactor { .. } => "formation_factor",
            Request::NetToGrossRatio { .. } => "net_to_gross_ratio",
            Request::BulkVolumeOil { .. } => "bulk_volume_oil",
            Request::HydrocarbonPoreVolume { .. } => "hydrocarbon_pore_volume",
            Request::WaterFormationVolumeFactor { .. } => "water_formation_volume_factor",
            Request::WaterCompressibility { .. } => "water_compressibility",
            Request::GasFormationVolumeFactor { .. } => "gas_formation_volume_factor",
            Request::WaterViscosity { .. } => "water_viscosity",
            Request::NetPresentValue { .. } => "net_present_value",
            Request::InternalRateOfReturn { .. } => "internal_rate_of_return",
            Request::DiscountedPaybackPeriod { .. } => "discounted_payback_period",
            Request::ProfitabilityIndex { .. } => "profitability_index",
            Request::OilRevenue { .. } => "oil_revenue",
            Request::GasRevenue { .. } => "gas_revenue",
            Request::BreakEvenOilPrice { .. } => "break_even_oil_price",
            Request::NpvProfile { .. } => "npv_profile",
        }
    }
}

/// A request file holds either a single request or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Many(Vec<Request>),
    One(Box<Request>),
}

impl From<RequestFile> for Vec<Request> {
    fn from(file: RequestFile) -> Self {
        match file {
            RequestFile::Many(list) => list,
            RequestFile::One(one) => vec![*one],
        }
    }
}

/// Parse requests from YAML text (JSON is accepted too, being valid YAML).
pub fn parse_requests(text: &str) -> Result<Vec<Request>, String> {
    serde_yaml::from_str::<RequestFile>(text)
        .map(Into::into)
        .map_err(|e| format!("Failed to parse request: {}", e))
}

/// Load one request or a list of requests from a YAML or JSON file.
pub fn load_requests(path: &Path) -> AppResult<Vec<Request>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<RequestFile>(&content)
            .map(Into::into)
            .map_err(|e| format!("Failed to parse request JSON: {}", e))
    } else {
        parse_requests(&content)
    };

    parsed.map_err(|message| AppError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_tag_selects_variant() {
        let reqs = parse_requests("operation: fracture_width\ninjection_rate: 30\nfluid_viscosity: 100\nfracture_height: 100\nyoungs_modulus: 3000000\n").unwrap();
        assert_eq!(reqs.len(), 1);
        match &reqs[0] {
            Request::FractureWidth { poisson_ratio, .. } => assert!(poisson_ratio.is_none()),
            other => panic!("unexpected request {other:?}"),
        }
        assert_eq!(reqs[0].operation(), "fracture_width");
    }

    #[test]
    fn list_of_requests() {
        let yaml = r#"
- operation: net_present_value
  cash_flows: [100000, 150000, 120000, 90000]
  discount_rate: 0.1
  initial_investment: 400000
- operation: mud_weight_to_pressure_gradient
  mud_weight: 12
"#;
        let reqs = parse_requests(yaml).unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[1].operation(), "mud_weight_to_pressure_gradient");
    }

    #[test]
    fn json_body_parses() {
        let json = r#"{"operation": "equivalent_mud_weight", "pressure": 6240, "depth": 10000}"#;
        let reqs = parse_requests(json).unwrap();
        assert_eq!(
            reqs[0],
            Request::EquivalentMudWeight {
                pressure: 6240.0,
                depth: 10000.0
            }
        );
    }

    #[test]
    fn horner_request_carries_series() {
        let yaml = r#"
operation: well_test_horner
pressure_data: [2750, 2790, 2815]
time_data: [1, 2, 4]
production_time: 240
flowing_pressure: 2300
flow_rate: 500
porosity: 0.2
viscosity: 1.0
total_compressibility: 1.0e-5
formation_volume_factor: 1.2
thickness: 30
"#;
        let reqs = parse_requests(yaml).unwrap();
        assert_eq!(reqs[0].operation(), "well_test_horner");
        match &reqs[0] {
            Request::WellTestHorner {
                pressure_data,
                time_data,
                wellbore_radius,
                ..
            } => {
                assert_eq!(pressure_data.len(), 3);
                assert_eq!(time_data, &vec![1.0, 2.0, 4.0]);
                assert!(wellbore_radius.is_none());
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn unknown_operation_is_rejected() {
        assert!(parse_requests("operation: drilling_cost\nwell_depth: 10000\n").is_err());
    }

    #[test]
    fn tag_round_trips_through_serialization() {
        let req = Request::KillSheet {
            original_mud_weight: 10.0,
            shut_in_drillpipe_pressure: 500.0,
            slow_pump_rate_pressure: 800.0,
            true_vertical_depth: 10_000.0,
        };
        let text = serde_json::to_string(&req).unwrap();
        assert!(text.contains("\"operation\":\"kill_sheet\""));
        let back: Request = serde_json::from_str(&text).unwrap();
        assert_eq!(back, req);
    }
}
