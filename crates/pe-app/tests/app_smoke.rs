//! End-to-end tests for the pe-app service layer.

use std::path::PathBuf;

use pe_app::{
    AppError, EngineDefaults, ErrorKind, Request, evaluate, evaluate_all, load_defaults,
    load_requests, parse_requests,
};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pe_app_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

fn eval_yaml(yaml: &str) -> Result<pe_app::OperationResponse, AppError> {
    let reqs = parse_requests(yaml).expect("parse request");
    assert_eq!(reqs.len(), 1);
    evaluate(&reqs[0], &EngineDefaults::default())
}

#[test]
fn npv_reference_scenario() {
    let resp = eval_yaml(
        "operation: net_present_value\ncash_flows: [100000, 150000, 120000, 90000]\ndiscount_rate: 0.1\ninitial_investment: 400000\n",
    )
    .unwrap();
    assert_eq!(resp.operation, "net_present_value");
    assert!((resp.number("npv").unwrap() - (-33_494.98)).abs() < 0.01);
}

#[test]
fn mud_weight_scenarios() {
    let grad = eval_yaml("operation: mud_weight_to_pressure_gradient\nmud_weight: 12\n").unwrap();
    assert!((grad.number("pressure_gradient").unwrap() - 0.624).abs() < 1e-9);

    let hydro =
        eval_yaml("operation: hydrostatic_pressure\nmud_weight: 12\ndepth: 10000\n").unwrap();
    assert!((hydro.number("hydrostatic_pressure").unwrap() - 6240.0).abs() < 1e-6);
}

#[test]
fn kill_sheet_outputs() {
    let resp = eval_yaml(
        "operation: kill_sheet\noriginal_mud_weight: 10\nshut_in_drillpipe_pressure: 520\nslow_pump_rate_pressure: 800\ntrue_vertical_depth: 10000\n",
    )
    .unwrap();
    assert!((resp.number("kill_mud_weight").unwrap() - 11.0).abs() < 1e-9);
    assert!((resp.number("initial_circulating_pressure").unwrap() - 1320.0).abs() < 1e-9);
    assert!((resp.number("final_circulating_pressure").unwrap() - 880.0).abs() < 1e-9);
}

#[test]
fn error_kinds_surface_through_evaluate() {
    let irr = eval_yaml(
        "operation: internal_rate_of_return\ncash_flows: [100, 200, 300]\ninitial_investment: 0\n",
    )
    .unwrap_err();
    assert_eq!(irr.kind(), ErrorKind::NoValidIrr);

    let pi = eval_yaml(
        "operation: profitability_index\ncash_flows: [100]\ndiscount_rate: 0.1\ninitial_investment: 0\n",
    )
    .unwrap_err();
    assert_eq!(pi.kind(), ErrorKind::DomainViolation);

    let width = eval_yaml(
        "operation: fracture_width\ninjection_rate: 30\nfluid_viscosity: 100\nfracture_height: 100\nyoungs_modulus: 3000000\npoisson_ratio: 1.0\n",
    )
    .unwrap_err();
    assert_eq!(width.kind(), ErrorKind::DomainViolation);

    let unit = eval_yaml("operation: mud_weight_to_pressure_gradient\nmud_weight: 12\nunit: furlongs\n")
        .unwrap_err();
    assert_eq!(unit.kind(), ErrorKind::UnsupportedUnit);

    let payback = eval_yaml(
        "operation: discounted_payback_period\ncash_flows: [10, 10]\ndiscount_rate: 0.1\ninitial_investment: 100\n",
    )
    .unwrap_err();
    assert_eq!(payback.kind(), ErrorKind::NotRecovered);
}

#[test]
fn configured_defaults_change_results() {
    let req = Request::OilRevenue {
        production_rate: 100.0,
        oil_price: 70.0,
        royalty_rate: None,
        operating_cost_per_barrel: None,
    };
    let stock = evaluate(&req, &EngineDefaults::default()).unwrap();
    let expected = 100.0 * 365.0 * (70.0 * (1.0 - 0.125) - 15.0);
    assert!((stock.number("annual_net_revenue").unwrap() - expected).abs() < 1e-6);

    let path = temp_file("defaults.yaml", "royalty_rate: 0.2\noil_opex_per_bbl: 10\n");
    let custom = load_defaults(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let resp = evaluate(&req, &custom).unwrap();
    let expected = 100.0 * 365.0 * (70.0 * 0.8 - 10.0);
    assert!((resp.number("annual_net_revenue").unwrap() - expected).abs() < 1e-6);
}

#[test]
fn batch_file_round_trip() {
    let yaml = r#"
- operation: vogel_ipr
  reservoir_pressure: 3000
  bottomhole_pressure: 1500
  maximum_oil_rate: 1000
- operation: npv_profile
  cash_flows: [100, 100, 100]
  initial_investment: 250
  rates: [0.0, 0.05, 0.1]
- operation: maximum_allowable_annular_surface_pressure
  fracture_pressure: 100
  mud_weight: 12
  shoe_depth: 5000
"#;
    let path = temp_file("batch.yaml", yaml);
    let reqs = load_requests(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(reqs.len(), 3);

    let results = evaluate_all(&reqs, &EngineDefaults::default());
    let vogel = results[0].as_ref().unwrap();
    assert!((vogel.number("oil_rate").unwrap() - 700.0).abs() < 1e-9);

    let profile = results[1].as_ref().unwrap();
    match &profile.get("npv").unwrap().value {
        pe_app::Value::Series(npvs) => {
            assert_eq!(npvs.len(), 3);
            assert!((npvs[0] - 50.0).abs() < 1e-9);
            assert!(npvs.windows(2).all(|w| w[0] > w[1]));
        }
        other => panic!("expected a series, got {other:?}"),
    }

    // fracture pressure below the mud column
    assert_eq!(
        results[2].as_ref().unwrap_err().kind(),
        ErrorKind::DomainViolation
    );
}

#[test]
fn json_request_file_and_response() {
    let path = temp_file(
        "req.json",
        r#"{"operation": "multiphase_flow_pressure_drop",
            "liquid_superficial_velocity": 3.0, "gas_superficial_velocity": 5.0,
            "pipe_diameter": 0.5, "pipe_inclination": 30.0,
            "liquid_density": 53.0, "gas_density": 5.0,
            "liquid_viscosity": 2.0, "gas_viscosity": 0.015, "surface_tension": 30.0}"#,
    );
    let reqs = load_requests(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let resp = evaluate(&reqs[0], &EngineDefaults::default()).unwrap();
    let holdup = resp.number("liquid_holdup").unwrap();
    assert!((0.0..=1.0).contains(&holdup));
    assert!(resp.number("pressure_gradient").unwrap() > 0.0);

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["operation"], "multiphase_flow_pressure_drop");
    assert!(json["outputs"].as_array().unwrap().len() >= 7);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_requests(&PathBuf::from("/nonexistent/pe_requests.yaml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn demo_requests_all_evaluate() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let reqs = load_requests(&root.join("requests.yaml")).unwrap();
    let defaults = load_defaults(&root.join("defaults.yaml")).unwrap();
    assert!(reqs.len() >= 16);
    for (req, result) in reqs.iter().zip(evaluate_all(&reqs, &defaults)) {
        assert!(result.is_ok(), "{} failed: {:?}", req.operation(), result.err());
    }
}

#[test]
fn rock_and_fluid_scenarios() {
    let phi = eval_yaml(
        "operation: porosity_from_density_log\nbulk_density: 2.40\nmatrix_density: 2.65\nfluid_density: 1.0\n",
    )
    .unwrap();
    assert!((phi.number("porosity").unwrap() - 0.25 / 1.65).abs() < 1e-12);

    let f = eval_yaml("operation: formation_factor\nporosity: 0.2\n").unwrap();
    assert!((f.number("formation_factor").unwrap() - 25.0).abs() < 1e-9);

    let bg = eval_yaml(
        "operation: gas_formation_volume_factor\ntemperature: 60.33\npressure: 14.7\n",
    )
    .unwrap();
    assert!((bg.number("gas_formation_volume_factor").unwrap() - 1.0).abs() < 1e-9);

    let wet = eval_yaml(
        "operation: capillary_pressure_brooks_corey\nwater_saturation: 0.2\nirreducible_water_saturation: 0.2\nentry_pressure: 2\npore_size_distribution: 2\n",
    )
    .unwrap_err();
    assert_eq!(wet.kind(), ErrorKind::DomainViolation);
}

#[test]
fn production_scenarios() {
    let q = eval_yaml(
        "operation: darcy_radial_flow\npermeability: 100\nthickness: 50\npressure_drop: 1000\nviscosity: 1.0\nformation_volume_factor: 1.2\nwellbore_radius: 0.5\ndrainage_radius: 1000\n",
    )
    .unwrap();
    let expected = 0.007_08 * 100.0 * 50.0 * 1_000.0 / (1.2 * 2_000.0_f64.ln());
    assert!((q.number("flow_rate").unwrap() - expected).abs() < 1e-6);

    let skin = eval_yaml(
        "operation: skin_factor\nactual_productivity_index: 1.0\nideal_productivity_index: 2.0\n",
    )
    .unwrap();
    let expected = (745.0_f64 / 0.354).ln() - 0.75;
    assert!((skin.number("skin_factor").unwrap() - expected).abs() < 1e-9);

    let aof = eval_yaml(
        "operation: gas_well_deliverability\nabsolute_open_flow_potential: 10000\nflowing_bottomhole_pressure: 1000\nreservoir_pressure: 2000\n",
    )
    .unwrap();
    let expected = 10_000.0 * 0.75_f64.sqrt();
    assert!((aof.number("gas_flow_rate").unwrap() - expected).abs() < 1e-6);
}

#[test]
fn horner_buildup_recovers_permeability() {
    // buildup generated from k = 50 md, s = 2, p* = 3000 psia
    let (tp, k, skin, p_star) = (240.0_f64, 50.0_f64, 2.0_f64, 3_000.0_f64);
    let m = 162.6 * 500.0 * 1.2 * 1.0 / (k * 30.0);
    let p1hr = p_star - m * (tp + 1.0).log10();
    let pwf = p1hr - m * (skin / 1.151 + (k / (0.2 * 1.0e-5 * 0.354 * 0.354)).log10() - 3.23);
    let times = vec![1.0, 2.0, 4.0, 8.0, 16.0];
    let pressures = times
        .iter()
        .map(|dt: &f64| p_star - m * ((tp + dt) / dt).log10())
        .collect();

    let resp = evaluate(
        &Request::WellTestHorner {
            pressure_data: pressures,
            time_data: times,
            production_time: tp,
            flowing_pressure: pwf,
            flow_rate: 500.0,
            porosity: 0.2,
            viscosity: 1.0,
            total_compressibility: 1.0e-5,
            formation_volume_factor: 1.2,
            thickness: 30.0,
            wellbore_radius: None,
        },
        &EngineDefaults::default(),
    )
    .unwrap();
    assert!((resp.number("permeability").unwrap() - k).abs() < 1e-6);
    assert!((resp.number("skin_factor").unwrap() - skin).abs() < 1e-6);
    assert!((resp.number("extrapolated_pressure").unwrap() - p_star).abs() < 1e-6);
}

#[test]
fn lost_circulation_limit_breached() {
    let err = eval_yaml(
        "operation: lost_circulation_pressure\nformation_pressure: 6000\nhydrostatic_pressure: 5990\n",
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainViolation);
}
