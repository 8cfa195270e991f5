use pe_economics::{CashFlowSeries, DiscountRate, EconomicsError, irr, npv, profitability_index};
use proptest::prelude::*;

#[test]
fn reference_npv() {
    let cf = CashFlowSeries::new(vec![100_000.0, 150_000.0, 120_000.0, 90_000.0]).unwrap();
    let v = npv(&cf, DiscountRate::new(0.10).unwrap(), 400_000.0).unwrap();
    assert!((v + 33_494.98).abs() < 0.01);
}

#[test]
fn all_positive_flows_without_investment_have_no_irr() {
    let cf = CashFlowSeries::new(vec![100_000.0, 150_000.0, 120_000.0]).unwrap();
    assert!(matches!(
        irr(&cf, 0.0, 0.001),
        Err(EconomicsError::NoValidIrr { .. })
    ));
}

#[test]
fn profitability_index_without_investment_fails() {
    let cf = CashFlowSeries::new(vec![100.0]).unwrap();
    let err = profitability_index(&cf, DiscountRate::new(0.1).unwrap(), 0.0).unwrap_err();
    assert!(matches!(err, EconomicsError::DomainViolation { .. }));
}

proptest! {
    #[test]
    fn npv_decreases_with_rate(
        flows in prop::collection::vec(1.0f64..1.0e6, 1..15),
        investment in 0.0f64..1.0e6,
        r1 in -0.5f64..5.0,
        dr in 0.001f64..5.0,
    ) {
        let cf = CashFlowSeries::new(flows).unwrap();
        let lo = npv(&cf, DiscountRate::new(r1).unwrap(), investment).unwrap();
        let hi = npv(&cf, DiscountRate::new(r1 + dr).unwrap(), investment).unwrap();
        prop_assert!(hi < lo);
    }

    #[test]
    fn irr_zeroes_npv(
        flows in prop::collection::vec(1.0f64..1.0e5, 1..12),
        fraction in 0.05f64..0.95,
    ) {
        // Investment below the undiscounted total keeps the IRR positive and
        // the stream has exactly one sign change.
        let total: f64 = flows.iter().sum();
        let investment = total * fraction;
        let cf = CashFlowSeries::new(flows).unwrap();
        let tol = 1e-3;
        let r = irr(&cf, investment, tol).unwrap();
        let at_irr = npv(&cf, DiscountRate::new(r).unwrap(), investment).unwrap();
        prop_assert!(at_irr.abs() <= tol);
    }

    #[test]
    fn npv_is_finite_or_a_domain_violation(
        flows in prop::collection::vec(-1.0e6f64..1.0e6, 1..600),
        investment in 0.0f64..1.0e6,
        rate in -0.999f64..1.0,
    ) {
        let cf = CashFlowSeries::new(flows).unwrap();
        match npv(&cf, DiscountRate::new(rate).unwrap(), investment) {
            Ok(v) => prop_assert!(v.is_finite()),
            Err(EconomicsError::DomainViolation { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn long_horizon_irr_zeroes_npv(
        (flows, fraction) in (1usize..600).prop_flat_map(|n| {
            (prop::collection::vec(1.0f64..1.0e5, n), 0.05f64..0.95)
        }),
    ) {
        // One sign change: a root exists between -1 and the undiscounted break-even.
        let total: f64 = flows.iter().sum();
        let investment = total * fraction;
        let cf = CashFlowSeries::new(flows).unwrap();
        let tol = 1e-3;
        let r = irr(&cf, investment, tol).unwrap();
        prop_assert!(r.is_finite() && r > 0.0);
        let at_irr = npv(&cf, DiscountRate::new(r).unwrap(), investment).unwrap();
        prop_assert!(at_irr.abs() <= tol);
    }

    #[test]
    fn irr_is_finite_or_a_typed_error(
        flows in prop::collection::vec(-1.0e5f64..1.0e5, 1..600),
        investment in 0.0f64..1.0e6,
    ) {
        let cf = CashFlowSeries::new(flows).unwrap();
        match irr(&cf, investment, 1e-3) {
            Ok(r) => prop_assert!(r.is_finite() && r > -1.0),
            Err(EconomicsError::NoValidIrr { .. } | EconomicsError::Solver(_)) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
