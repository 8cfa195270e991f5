//! Beggs-Brill two-phase pressure gradient for inclined pipe.
//!
//! The correlation classifies the horizontal flow pattern from the no-slip
//! liquid holdup `λ` and the mixture Froude number, applies the pattern's
//! holdup closure, corrects it for inclination, and builds a two-phase
//! friction factor from the ratio `λ/HL²`. All arithmetic is done in SI.

use crate::common::{EPSILON_HOLDUP, LAMINAR_REYNOLDS, check_finite, clamp, require};
use crate::error::CorrelationResult;
use pe_core::constants::G0_MPS2;
use pe_core::{
    Angle, Density, DynVisc, Length, PressureGradient, SurfaceTension, Velocity, ensure_non_negative,
    ensure_positive, in_deg, in_kg_m3, in_m, in_mps, in_pa_s, in_rad, pa_per_m,
};

/// Horizontal flow pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowRegime {
    Segregated,
    Transition,
    Intermittent,
    Distributed,
    /// Gas only (`λ = 0`)
    SinglePhaseGas,
    /// Liquid only (`λ = 1`)
    SinglePhaseLiquid,
}

impl FlowRegime {
    pub fn name(self) -> &'static str {
        match self {
            FlowRegime::Segregated => "segregated",
            FlowRegime::Transition => "transition",
            FlowRegime::Intermittent => "intermittent",
            FlowRegime::Distributed => "distributed",
            FlowRegime::SinglePhaseGas => "single_phase_gas",
            FlowRegime::SinglePhaseLiquid => "single_phase_liquid",
        }
    }
}

/// Flowing conditions at one point of the pipe.
#[derive(Clone, Copy, Debug)]
pub struct MultiphaseInput {
    pub liquid_superficial_velocity: Velocity,
    pub gas_superficial_velocity: Velocity,
    pub diameter: Length,
    /// Angle from horizontal, positive uphill, in [-90°, 90°]
    pub inclination: Angle,
    pub liquid_density: Density,
    pub gas_density: Density,
    pub liquid_viscosity: DynVisc,
    pub gas_viscosity: DynVisc,
    pub surface_tension: SurfaceTension,
}

/// Pressure gradient and holdup, produced together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiphaseGradient {
    /// Total gradient (elevation + friction); positive means pressure falls
    /// in the direction of flow
    pub pressure_gradient: PressureGradient,
    pub elevation_gradient: PressureGradient,
    pub friction_gradient: PressureGradient,
    /// In-situ liquid holdup, always in [0, 1]
    pub liquid_holdup: f64,
    /// Input liquid fraction `λ = vsl/vm`
    pub no_slip_holdup: f64,
    pub regime: FlowRegime,
    pub froude_number: f64,
}

/// Flow-pattern boundaries L1..L4 as functions of `λ`.
#[derive(Clone, Copy, Debug)]
struct Boundaries {
    l1: f64,
    l2: f64,
    l3: f64,
    l4: f64,
}

impl Boundaries {
    fn new(lambda: f64) -> Self {
        Self {
            l1: 316.0 * lambda.powf(0.302),
            l2: 0.000_925_2 * lambda.powf(-2.468_4),
            l3: 0.1 * lambda.powf(-1.451_6),
            l4: 0.5 * lambda.powf(-6.738),
        }
    }

    fn classify(&self, lambda: f64, froude: f64) -> FlowRegime {
        if (lambda < 0.01 && froude < self.l1) || (lambda >= 0.01 && froude < self.l2) {
            FlowRegime::Segregated
        } else if lambda >= 0.01 && froude >= self.l2 && froude <= self.l3 {
            FlowRegime::Transition
        } else if ((0.01..0.4).contains(&lambda) && froude > self.l3 && froude <= self.l1)
            || (lambda >= 0.4 && froude > self.l3 && froude <= self.l4)
        {
            FlowRegime::Intermittent
        } else {
            FlowRegime::Distributed
        }
    }
}

/// Horizontal holdup `a·λ^b/Fr^c`, never below `λ`.
fn horizontal_holdup(regime: FlowRegime, lambda: f64, froude: f64) -> f64 {
    let (a, b, c): (f64, f64, f64) = match regime {
        FlowRegime::Segregated => (0.98, 0.4846, 0.0868),
        FlowRegime::Intermittent => (0.845, 0.5351, 0.0173),
        _ => (1.065, 0.5824, 0.0609),
    };
    (a * lambda.powf(b) / froude.powf(c)).max(lambda)
}

/// Inclination correction `ψ = 1 + C·(sin 1.8θ − sin³ 1.8θ / 3)`.
fn inclination_factor(regime: FlowRegime, lambda: f64, nlv: f64, froude: f64, theta: f64) -> f64 {
    let coeffs: Option<(f64, f64, f64, f64)> = if theta < 0.0 {
        Some((4.70, -0.3692, 0.1244, -0.5056))
    } else {
        match regime {
            FlowRegime::Segregated => Some((0.011, -3.768, 3.539, -1.614)),
            FlowRegime::Intermittent => Some((2.96, 0.305, -0.4473, 0.0978)),
            _ => None,
        }
    };
    let Some((d, e, f, g)) = coeffs else {
        return 1.0;
    };

    // ln(d·λ^e·NLV^f·Fr^g), summed to stay finite for extreme arguments
    let log_term = d.ln() + e * lambda.ln() + f * nlv.ln() + g * froude.ln();
    let c = ((1.0 - lambda) * log_term).max(0.0);
    let s = (1.8 * theta).sin();
    1.0 + c * (s - s.powi(3) / 3.0)
}

fn inclined_holdup(regime: FlowRegime, lambda: f64, nlv: f64, froude: f64, theta: f64) -> f64 {
    horizontal_holdup(regime, lambda, froude) * inclination_factor(regime, lambda, nlv, froude, theta)
}

/// Smooth-pipe no-slip friction factor (Darcy); `64/Re` when laminar.
fn no_slip_friction_factor(reynolds: f64) -> f64 {
    if reynolds < LAMINAR_REYNOLDS {
        return 64.0 / reynolds;
    }
    let denom = 4.5223 * reynolds.log10() - 3.8215;
    1.0 / (2.0 * (reynolds / denom).log10()).powi(2)
}

/// Two-phase friction multiplier exponent `S` from `y = λ/HL²`.
fn friction_exponent(lambda: f64, holdup: f64) -> f64 {
    let hl = holdup.max(EPSILON_HOLDUP);
    let y = lambda / (hl * hl);
    if y > 1.0 && y < 1.2 {
        return (2.2 * y - 1.2).ln();
    }
    let ln_y = y.ln();
    ln_y / (-0.0523 + 3.182 * ln_y - 0.8725 * ln_y.powi(2) + 0.01853 * ln_y.powi(4))
}

/// Beggs-Brill pressure gradient and liquid holdup.
///
/// Holdup is clamped to [0, 1] rather than reported as an error.
pub fn beggs_brill(input: &MultiphaseInput) -> CorrelationResult<MultiphaseGradient> {
    let vsl = ensure_non_negative(
        in_mps(input.liquid_superficial_velocity),
        "liquid superficial velocity must be non-negative",
    )?;
    let vsg = ensure_non_negative(
        in_mps(input.gas_superficial_velocity),
        "gas superficial velocity must be non-negative",
    )?;
    let vm = vsl + vsg;
    require(vm > 0.0, "mixture velocity must be positive")?;
    let d = ensure_positive(in_m(input.diameter), "pipe diameter must be positive")?;
    let deg = pe_core::ensure_finite(in_deg(input.inclination), "inclination")?;
    require((-90.0..=90.0).contains(&deg), "inclination must be in [-90, 90] degrees")?;
    let theta = in_rad(input.inclination);
    let rho_l = ensure_positive(in_kg_m3(input.liquid_density), "liquid density must be positive")?;
    let rho_g = ensure_positive(in_kg_m3(input.gas_density), "gas density must be positive")?;
    let mu_l = ensure_positive(in_pa_s(input.liquid_viscosity), "liquid viscosity must be positive")?;
    let mu_g = ensure_positive(in_pa_s(input.gas_viscosity), "gas viscosity must be positive")?;
    let sigma = ensure_positive(
        input.surface_tension.in_n_per_m(),
        "surface tension must be positive",
    )?;

    let lambda = vsl / vm;
    let froude = vm * vm / (G0_MPS2 * d);

    let (regime, holdup) = if vsl == 0.0 {
        (FlowRegime::SinglePhaseGas, 0.0)
    } else if vsg == 0.0 {
        (FlowRegime::SinglePhaseLiquid, 1.0)
    } else {
        let nlv = vsl * (rho_l / (G0_MPS2 * sigma)).powf(0.25);
        let bounds = Boundaries::new(lambda);
        let regime = bounds.classify(lambda, froude);
        let raw = match regime {
            FlowRegime::Transition => {
                let a = (bounds.l3 - froude) / (bounds.l3 - bounds.l2);
                let seg = inclined_holdup(FlowRegime::Segregated, lambda, nlv, froude, theta);
                let int = inclined_holdup(FlowRegime::Intermittent, lambda, nlv, froude, theta);
                a * seg + (1.0 - a) * int
            }
            _ => inclined_holdup(regime, lambda, nlv, froude, theta),
        };
        (regime, clamp(check_finite(raw, "liquid holdup")?, 0.0, 1.0))
    };

    let rho_n = rho_l * lambda + rho_g * (1.0 - lambda);
    let mu_n = mu_l * lambda + mu_g * (1.0 - lambda);
    let rho_s = rho_l * holdup + rho_g * (1.0 - holdup);

    let re_n = rho_n * vm * d / mu_n;
    let f_n = no_slip_friction_factor(re_n);
    let f_tp = match regime {
        FlowRegime::SinglePhaseGas | FlowRegime::SinglePhaseLiquid => f_n,
        _ => f_n * friction_exponent(lambda, holdup).exp(),
    };

    let elevation = check_finite(rho_s * G0_MPS2 * theta.sin(), "elevation gradient")?;
    let friction = check_finite(f_tp * rho_n * vm * vm / (2.0 * d), "friction gradient")?;

    Ok(MultiphaseGradient {
        pressure_gradient: pa_per_m(elevation + friction),
        elevation_gradient: pa_per_m(elevation),
        friction_gradient: pa_per_m(friction),
        liquid_holdup: holdup,
        no_slip_holdup: lambda,
        regime,
        froude_number: froude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorrelationError;
    use pe_core::{cp, deg, ft, ft_per_s, in_pa_per_m, in_psi_per_ft, kg_m3, lb_per_ft3, mps};

    fn base_input() -> MultiphaseInput {
        MultiphaseInput {
            liquid_superficial_velocity: ft_per_s(3.0),
            gas_superficial_velocity: ft_per_s(10.0),
            diameter: ft(0.5),
            inclination: deg(90.0),
            liquid_density: lb_per_ft3(56.0),
            gas_density: lb_per_ft3(2.8),
            liquid_viscosity: cp(2.0),
            gas_viscosity: cp(0.018),
            surface_tension: SurfaceTension::dyn_per_cm(30.0),
        }
    }

    #[test]
    fn vertical_upflow_is_dominated_by_elevation() {
        let out = beggs_brill(&base_input()).unwrap();
        assert!(out.liquid_holdup >= out.no_slip_holdup);
        assert!(out.liquid_holdup <= 1.0);
        assert!(in_pa_per_m(out.elevation_gradient) > in_pa_per_m(out.friction_gradient));
        // Between pure gas and pure liquid heads.
        let g = in_psi_per_ft(out.pressure_gradient);
        assert!(g > 2.8 / 144.0 && g < 0.6);
    }

    #[test]
    fn horizontal_flow_has_no_elevation_term() {
        let input = MultiphaseInput {
            inclination: deg(0.0),
            ..base_input()
        };
        let out = beggs_brill(&input).unwrap();
        assert!(in_pa_per_m(out.elevation_gradient).abs() < 1e-9);
        assert!(in_pa_per_m(out.friction_gradient) > 0.0);
    }

    #[test]
    fn downhill_elevation_term_is_negative() {
        let input = MultiphaseInput {
            inclination: deg(-45.0),
            ..base_input()
        };
        let out = beggs_brill(&input).unwrap();
        assert!(in_pa_per_m(out.elevation_gradient) < 0.0);
    }

    #[test]
    fn single_phase_limits() {
        let gas = beggs_brill(&MultiphaseInput {
            liquid_superficial_velocity: mps(0.0),
            ..base_input()
        })
        .unwrap();
        assert_eq!(gas.regime, FlowRegime::SinglePhaseGas);
        assert_eq!(gas.liquid_holdup, 0.0);

        let liquid = beggs_brill(&MultiphaseInput {
            gas_superficial_velocity: mps(0.0),
            ..base_input()
        })
        .unwrap();
        assert_eq!(liquid.regime, FlowRegime::SinglePhaseLiquid);
        assert_eq!(liquid.liquid_holdup, 1.0);
        let head = in_pa_per_m(liquid.elevation_gradient);
        assert!((head - in_kg_m3(lb_per_ft3(56.0)) * G0_MPS2).abs() < 1e-6);
    }

    #[test]
    fn regime_boundaries() {
        // Low-rate horizontal flow in a large line segregates.
        let slow = beggs_brill(&MultiphaseInput {
            liquid_superficial_velocity: mps(0.05),
            gas_superficial_velocity: mps(0.5),
            diameter: pe_core::m(0.3),
            inclination: deg(0.0),
            ..base_input()
        })
        .unwrap();
        assert_eq!(slow.regime, FlowRegime::Segregated);

        // High-rate liquid-rich flow in a small line is distributed.
        let fast = beggs_brill(&MultiphaseInput {
            liquid_superficial_velocity: mps(8.0),
            gas_superficial_velocity: mps(2.0),
            diameter: pe_core::m(0.05),
            inclination: deg(0.0),
            liquid_density: kg_m3(900.0),
            ..base_input()
        })
        .unwrap();
        assert_eq!(fast.regime, FlowRegime::Distributed);
    }

    #[test]
    fn inclination_correction() {
        let (lambda, nlv, froude): (f64, f64, f64) = (0.2, 1.5, 4.0);
        // Distributed flow uphill and any flat line are uncorrected.
        let flat = inclination_factor(FlowRegime::Segregated, lambda, nlv, froude, 0.0);
        assert_eq!(flat, 1.0);
        let distributed = inclination_factor(FlowRegime::Distributed, lambda, nlv, froude, 0.5);
        assert_eq!(distributed, 1.0);

        let theta = 30.0_f64.to_radians();
        let log_term =
            2.96_f64.ln() + 0.305 * lambda.ln() - 0.4473 * nlv.ln() + 0.0978 * froude.ln();
        let c = ((1.0 - lambda) * log_term).max(0.0);
        let s = (1.8 * theta).sin();
        let expected = 1.0 + c * (s - s.powi(3) / 3.0);
        let psi = inclination_factor(FlowRegime::Intermittent, lambda, nlv, froude, theta);
        assert!((psi - expected).abs() < 1e-12);
        assert!(psi.is_finite());

        // Downhill correction never raises holdup.
        let down = inclination_factor(FlowRegime::Segregated, lambda, nlv, froude, -theta);
        assert!(down <= 1.0);
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        let steep = MultiphaseInput {
            inclination: deg(95.0),
            ..base_input()
        };
        assert!(matches!(
            beggs_brill(&steep),
            Err(CorrelationError::DomainViolation { .. })
        ));

        let stagnant = MultiphaseInput {
            liquid_superficial_velocity: mps(0.0),
            gas_superficial_velocity: mps(0.0),
            ..base_input()
        };
        assert!(beggs_brill(&stagnant).is_err());
    }
}
