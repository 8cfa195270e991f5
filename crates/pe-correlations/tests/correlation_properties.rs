use pe_core::{
    SurfaceTension, bbl_per_min, cp, deg, ft, in_inches, in_psi, in_psi_per_ft, kg_m3, m, mps, ppg,
    psi,
};
use pe_correlations::completion::fracture_width;
use pe_correlations::drilling::{hydrostatic_pressure, pressure_gradient};
use pe_correlations::{CorrelationError, MultiphaseInput, beggs_brill};
use proptest::prelude::*;

#[test]
fn mud_gradient_scenario() {
    let g = pressure_gradient(ppg(12.0)).unwrap();
    assert!((in_psi_per_ft(g) - 0.624).abs() < 1e-9);
    let p = hydrostatic_pressure(ppg(12.0), ft(10_000.0)).unwrap();
    assert!((in_psi(p) - 6_240.0).abs() < 1.0);
}

#[test]
fn fracture_width_poisson_one_scenario() {
    let err = fracture_width(bbl_per_min(30.0), cp(100.0), ft(100.0), psi(3.0e6), 1.0).unwrap_err();
    assert!(matches!(err, CorrelationError::DomainViolation { .. }));
}

proptest! {
    #[test]
    fn beggs_brill_holdup_is_bounded(
        vsl in 0.01f64..10.0,
        vsg in 0.01f64..30.0,
        diameter in 0.02f64..0.5,
        inclination in -90.0f64..=90.0,
        rho_l in 500.0f64..1_200.0,
        rho_g in 0.5f64..200.0,
        mu_l in 0.1f64..50.0,
        mu_g in 0.01f64..0.05,
        sigma in 5.0f64..80.0,
    ) {
        let input = MultiphaseInput {
            liquid_superficial_velocity: mps(vsl),
            gas_superficial_velocity: mps(vsg),
            diameter: m(diameter),
            inclination: deg(inclination),
            liquid_density: kg_m3(rho_l),
            gas_density: kg_m3(rho_g),
            liquid_viscosity: cp(mu_l),
            gas_viscosity: cp(mu_g),
            surface_tension: SurfaceTension::dyn_per_cm(sigma),
        };
        let out = beggs_brill(&input).unwrap();
        prop_assert!((0.0..=1.0).contains(&out.liquid_holdup));
        prop_assert!(out.pressure_gradient.value.is_finite());
    }

    #[test]
    fn fracture_width_grows_with_rate(
        rate in 1.0f64..100.0,
        factor in 1.01f64..5.0,
        e in 1.0e5f64..1.0e7,
        nu in 0.0f64..0.49,
    ) {
        let w1 = fracture_width(bbl_per_min(rate), cp(50.0), ft(100.0), psi(e), nu).unwrap();
        let w2 = fracture_width(bbl_per_min(rate * factor), cp(50.0), ft(100.0), psi(e), nu).unwrap();
        prop_assert!(in_inches(w2) > in_inches(w1));
    }

    #[test]
    fn fracture_width_shrinks_with_modulus(
        rate in 1.0f64..100.0,
        e in 1.0e5f64..1.0e7,
        factor in 1.01f64..5.0,
        nu in 0.0f64..0.49,
    ) {
        let soft = fracture_width(bbl_per_min(rate), cp(50.0), ft(100.0), psi(e), nu).unwrap();
        let stiff = fracture_width(bbl_per_min(rate), cp(50.0), ft(100.0), psi(e * factor), nu).unwrap();
        prop_assert!(in_inches(stiff) < in_inches(soft));
    }
}
