//! Request evaluation: converts field-unit inputs, applies defaults, calls
//! the engine crates, and labels the results.

use pe_core::{
    SurfaceTension, TaggedQuantity, UnitTag, acre_ft, bbl, bbl_per_day, bbl_per_day_per_psi,
    bbl_per_min, cp, deg, fahrenheit, ft, ft_per_s, g_per_cm3, gal, gpm, hours, in_acre_ft, in_bbl,
    in_bbl_per_day, in_bbl_per_day_per_psi, in_cp, in_ft_per_min, in_ft_per_s, in_gal_per_ft,
    in_gpm, in_hp, in_inches, in_md, in_mscf_per_day, in_ppg, in_psi, in_psi_per_ft, in_unitless,
    inches, lb_per_ft3, lbm, md, md_ft, miles, mscf_per_day, ppg, psi, psi_per_ft, rankine,
};
use pe_correlations::common::LAMINAR_REYNOLDS;
use pe_correlations::{
    ArchieParameters, BuildupTest, CoreyPhase, MultiphaseInput, beggs_brill, completion,
    drilling, flow, fluids, production, reservoir, rock, well_control,
};
use pe_economics::{CashFlowSeries, DiscountRate, metrics, revenue, sweep};
use tracing::{debug, warn};

use crate::config::EngineDefaults;
use crate::error::{AppError, AppResult};
use crate::request::Request;
use crate::response::OperationResponse;

/// Evaluate a single request against the given defaults.
pub fn evaluate(request: &Request, defaults: &EngineDefaults) -> AppResult<OperationResponse> {
    let operation = request.operation();
    debug!(operation, "evaluating request");
    let result = dispatch(request, defaults);
    match &result {
        Ok(resp) => debug!(operation, outputs = resp.outputs.len(), "request evaluated"),
        Err(e) => warn!(operation, kind = ?e.kind(), error = %e, "request failed"),
    }
    result
}

/// Evaluate a batch; one failure does not stop the others.
pub fn evaluate_all(
    requests: &[Request],
    defaults: &EngineDefaults,
) -> Vec<AppResult<OperationResponse>> {
    requests.iter().map(|r| evaluate(r, defaults)).collect()
}

/// Unit label a mud weight was given in, falling back to the configured default.
fn mud_weight_unit(unit: Option<&str>, defaults: &EngineDefaults) -> String {
    unit.unwrap_or(defaults.mud_weight_unit.as_str()).to_string()
}

fn series(flows: &[f64]) -> AppResult<CashFlowSeries> {
    Ok(CashFlowSeries::new(flows.to_vec())?)
}

fn rate(r: f64) -> AppResult<DiscountRate> {
    Ok(DiscountRate::new(r)?)
}

fn reynolds_regime(re: f64) -> &'static str {
    if re < LAMINAR_REYNOLDS {
        "laminar"
    } else if re <= 4000.0 {
        "transitional"
    } else {
        "turbulent"
    }
}

fn dispatch(request: &Request, d: &EngineDefaults) -> AppResult<OperationResponse> {
    let resp = OperationResponse::new(request.operation());
    let resp = match request {
        // --- drilling ---
        Request::MudWeightToPressureGradient { mud_weight, unit } => {
            let unit_label = mud_weight_unit(unit.as_deref(), d);
            let tagged = TaggedQuantity::parse(*mud_weight, &unit_label)?;
            let grad = drilling::mud_weight_to_pressure_gradient(&tagged)?;
            resp.output("pressure_gradient", in_psi_per_ft(grad), "psi/ft")
                .input("mud_weight", *mud_weight, &unit_label)
        }
        Request::HydrostaticPressure {
            mud_weight,
            depth,
            unit,
        } => {
            let unit_label = mud_weight_unit(unit.as_deref(), d);
            let mw = TaggedQuantity::parse(*mud_weight, &unit_label)?.to(UnitTag::Ppg)?;
            let p = drilling::hydrostatic_pressure(ppg(mw.value), ft(*depth))?;
            resp.output("hydrostatic_pressure", in_psi(p), "psi")
                .input("mud_weight", *mud_weight, &unit_label)
                .input("depth", *depth, "ft")
        }
        Request::AnnularVelocity {
            flow_rate,
            hole_diameter,
            pipe_diameter,
        } => {
            let v = drilling::annular_velocity(
                gpm(*flow_rate),
                inches(*hole_diameter),
                inches(*pipe_diameter),
            )?;
            resp.output("annular_velocity", in_ft_per_min(v), "ft/min")
                .input("flow_rate", *flow_rate, "gpm")
                .input("hole_diameter", *hole_diameter, "in")
                .input("pipe_diameter", *pipe_diameter, "in")
        }
        Request::PipeVelocity {
            flow_rate,
            pipe_inner_diameter,
        } => {
            let v = drilling::pipe_velocity(gpm(*flow_rate), inches(*pipe_inner_diameter))?;
            resp.output("pipe_velocity", in_ft_per_min(v), "ft/min")
                .input("flow_rate", *flow_rate, "gpm")
                .input("pipe_inner_diameter", *pipe_inner_diameter, "in")
        }
        Request::ReynoldsNumber {
            velocity,
            diameter,
            density,
            viscosity,
        } => {
            let re = in_unitless(drilling::reynolds_number(
                ft_per_s(*velocity),
                inches(*diameter),
                ppg(*density),
                cp(*viscosity),
            )?);
            resp.output("reynolds_number", re, "")
                .output("flow_regime", reynolds_regime(re.abs()), "")
                .input("velocity", *velocity, "ft/s")
                .input("diameter", *diameter, "in")
                .input("density", *density, "ppg")
                .input("viscosity", *viscosity, "cP")
        }
        Request::EquivalentCirculatingDensity {
            mud_weight,
            annular_pressure_loss,
            true_vertical_depth,
        } => {
            let ecd = drilling::equivalent_circulating_density(
                ppg(*mud_weight),
                psi(*annular_pressure_loss),
                ft(*true_vertical_depth),
            )?;
            resp.output("equivalent_circulating_density", in_ppg(ecd), "ppg")
                .input("mud_weight", *mud_weight, "ppg")
                .input("annular_pressure_loss", *annular_pressure_loss, "psi")
                .input("true_vertical_depth", *true_vertical_depth, "ft")
        }

        // --- well control ---
        Request::EquivalentMudWeight { pressure, depth } => {
            let emw = well_control::equivalent_mud_weight(psi(*pressure), ft(*depth))?;
            resp.output("equivalent_mud_weight", in_ppg(emw), "ppg")
                .input("pressure", *pressure, "psi")
                .input("depth", *depth, "ft")
        }
        Request::KillMudWeight {
            original_mud_weight,
            shut_in_drillpipe_pressure,
            true_vertical_depth,
        } => {
            let kmw = well_control::kill_mud_weight(
                ppg(*original_mud_weight),
                psi(*shut_in_drillpipe_pressure),
                ft(*true_vertical_depth),
            )?;
            resp.output("kill_mud_weight", in_ppg(kmw), "ppg")
                .input("original_mud_weight", *original_mud_weight, "ppg")
                .input("shut_in_drillpipe_pressure", *shut_in_drillpipe_pressure, "psi")
                .input("true_vertical_depth", *true_vertical_depth, "ft")
        }
        Request::InitialCirculatingPressure {
            shut_in_drillpipe_pressure,
            slow_pump_rate_pressure,
        } => {
            let icp = well_control::initial_circulating_pressure(
                psi(*shut_in_drillpipe_pressure),
                psi(*slow_pump_rate_pressure),
            )?;
            resp.output("initial_circulating_pressure", in_psi(icp), "psi")
                .input("shut_in_drillpipe_pressure", *shut_in_drillpipe_pressure, "psi")
                .input("slow_pump_rate_pressure", *slow_pump_rate_pressure, "psi")
        }
        Request::FinalCirculatingPressure {
            slow_pump_rate_pressure,
            original_mud_weight,
            kill_mud_weight,
        } => {
            let fcp = well_control::final_circulating_pressure(
                psi(*slow_pump_rate_pressure),
                ppg(*original_mud_weight),
                ppg(*kill_mud_weight),
            )?;
            resp.output("final_circulating_pressure", in_psi(fcp), "psi")
                .input("slow_pump_rate_pressure", *slow_pump_rate_pressure, "psi")
                .input("original_mud_weight", *original_mud_weight, "ppg")
                .input("kill_mud_weight", *kill_mud_weight, "ppg")
        }
        Request::KillSheet {
            original_mud_weight,
            shut_in_drillpipe_pressure,
            slow_pump_rate_pressure,
            true_vertical_depth,
        } => {
            let sheet = well_control::kill_sheet(
                ppg(*original_mud_weight),
                psi(*shut_in_drillpipe_pressure),
                psi(*slow_pump_rate_pressure),
                ft(*true_vertical_depth),
            )?;
            resp.output("kill_mud_weight", in_ppg(sheet.kill_mud_weight), "ppg")
                .output(
                    "initial_circulating_pressure",
                    in_psi(sheet.initial_circulating_pressure),
                    "psi",
                )
                .output(
                    "final_circulating_pressure",
                    in_psi(sheet.final_circulating_pressure),
                    "psi",
                )
                .input("original_mud_weight", *original_mud_weight, "ppg")
                .input("shut_in_drillpipe_pressure", *shut_in_drillpipe_pressure, "psi")
                .input("slow_pump_rate_pressure", *slow_pump_rate_pressure, "psi")
                .input("true_vertical_depth", *true_vertical_depth, "ft")
        }
        Request::MaximumAllowableAnnularSurfacePressure {
            fracture_pressure,
            mud_weight,
            shoe_depth,
        } => {
            let maasp = well_control::maximum_allowable_annular_surface_pressure(
                psi(*fracture_pressure),
                ppg(*mud_weight),
                ft(*shoe_depth),
            )?;
            resp.output("maasp", in_psi(maasp), "psi")
                .input("fracture_pressure", *fracture_pressure, "psi")
                .input("mud_weight", *mud_weight, "ppg")
                .input("shoe_depth", *shoe_depth, "ft")
        }
        Request::PumpPressureSchedule {
            initial_circulating_pressure,
            final_circulating_pressure,
            total_pump_strokes,
            current_stroke,
        } => {
            let p = well_control::pump_pressure_schedule(
                psi(*initial_circulating_pressure),
                psi(*final_circulating_pressure),
                *total_pump_strokes,
                *current_stroke,
            )?;
            resp.output("pump_pressure", in_psi(p), "psi")
                .input("initial_circulating_pressure", *initial_circulating_pressure, "psi")
                .input("final_circulating_pressure", *final_circulating_pressure, "psi")
                .input("total_pump_strokes", *total_pump_strokes, "strokes")
                .input("current_stroke", *current_stroke, "strokes")
        }
        Request::FracturePressureGradient {
            overburden_gradient,
            pore_pressure_gradient,
            poisson_ratio,
        } => {
            let nu = poisson_ratio.unwrap_or(d.poisson_ratio);
            let grad = well_control::fracture_pressure_gradient(
                psi_per_ft(*overburden_gradient),
                psi_per_ft(*pore_pressure_gradient),
                nu,
            )?;
            resp.output("fracture_pressure_gradient", in_psi_per_ft(grad), "psi/ft")
                .input("overburden_gradient", *overburden_gradient, "psi/ft")
                .input("pore_pressure_gradient", *pore_pressure_gradient, "psi/ft")
                .input("poisson_ratio", nu, "")
        }

        Request::FormationPressureGradient {
            formation_water_density,
        } => {
            let grad =
                well_control::formation_pressure_gradient(lb_per_ft3(*formation_water_density))?;
            resp.output("pressure_gradient", in_psi_per_ft(grad), "psi/ft")
                .input("formation_water_density", *formation_water_density, "lb/ft3")
        }
        Request::OverburdenPressureGradient {
            depth,
            surface_density,
        } => {
            let rho = surface_density.unwrap_or(d.overburden_surface_density_ppg);
            let grad = well_control::overburden_pressure_gradient(ft(*depth), ppg(rho))?;
            resp.output("overburden_gradient", in_psi_per_ft(grad), "psi/ft")
                .input("depth", *depth, "ft")
                .input("surface_density", rho, "ppg")
        }
        Request::LostCirculationPressure {
            formation_pressure,
            hydrostatic_pressure,
            safety_margin,
        } => {
            let margin = safety_margin.unwrap_or(d.lost_circulation_margin_psi);
            let lc = well_control::lost_circulation_pressure(
                psi(*formation_pressure),
                psi(*hydrostatic_pressure),
                psi(margin),
            )?;
            resp.output("lost_circulation_pressure", in_psi(lc.limit_pressure), "psi")
                .output("remaining_margin", in_psi(lc.remaining_margin), "psi")
                .input("formation_pressure", *formation_pressure, "psi")
                .input("hydrostatic_pressure", *hydrostatic_pressure, "psi")
                .input("safety_margin", margin, "psi")
        }

        // --- completion ---
        Request::FractureWidth {
            injection_rate,
            fluid_viscosity,
            fracture_height,
            youngs_modulus,
            poisson_ratio,
        } => {
            let nu = poisson_ratio.unwrap_or(d.poisson_ratio);
            let width = completion::fracture_width(
                bbl_per_min(*injection_rate),
                cp(*fluid_viscosity),
                ft(*fracture_height),
                psi(*youngs_modulus),
                nu,
            )?;
            resp.output("fracture_width", in_inches(width), "in")
                .input("injection_rate", *injection_rate, "bbl/min")
                .input("fluid_viscosity", *fluid_viscosity, "cP")
                .input("fracture_height", *fracture_height, "ft")
                .input("youngs_modulus", *youngs_modulus, "psi")
                .input("poisson_ratio", nu, "")
        }
        Request::ProppantConcentration {
            proppant_mass,
            fracture_volume,
            proppant_density,
        } => {
            let sg = proppant_density.unwrap_or(d.proppant_sg);
            let conc = completion::proppant_concentration(
                lbm(*proppant_mass),
                gal(*fracture_volume),
                sg,
            )?;
            resp.output("proppant_concentration", in_ppg(conc), "lb/gal")
                .input("proppant_mass", *proppant_mass, "lb")
                .input("fracture_volume", *fracture_volume, "gal")
                .input("proppant_density", sg, "sg")
        }
        Request::AcidizingVolume {
            wellbore_radius,
            penetration_depth,
            porosity,
            acid_concentration,
        } => {
            let conc = acid_concentration.unwrap_or(d.acid_concentration_percent);
            let volume = completion::acidizing_volume(
                ft(*wellbore_radius),
                inches(*penetration_depth),
                *porosity,
            )?;
            resp.output("acid_volume", in_gal_per_ft(volume), "gal/ft")
                .input("wellbore_radius", *wellbore_radius, "ft")
                .input("penetration_depth", *penetration_depth, "in")
                .input("porosity", *porosity, "")
                .input("acid_concentration", conc, "%")
        }
        Request::HydraulicFracturingProductivity {
            formation_permeability,
            fracture_half_length,
            fracture_conductivity,
        } => {
            let prod = completion::fracture_productivity(
                md(*formation_permeability),
                ft(*fracture_half_length),
                md_ft(*fracture_conductivity),
            )?;
            resp.output("productivity_ratio", prod.productivity_ratio, "")
                .output(
                    "dimensionless_conductivity",
                    prod.dimensionless_conductivity,
                    "",
                )
                .input("formation_permeability", *formation_permeability, "md")
                .input("fracture_half_length", *fracture_half_length, "ft")
                .input("fracture_conductivity", *fracture_conductivity, "md-ft")
        }

        // --- flow ---
        Request::MoodyFrictionFactor {
            reynolds_number,
            relative_roughness,
        } => {
            let f = flow::moody_friction_factor(*reynolds_number, *relative_roughness)?;
            resp.output("friction_factor", in_unitless(f), "")
                .input("reynolds_number", *reynolds_number, "")
                .input("relative_roughness", *relative_roughness, "")
        }
        Request::PressureDropHorizontalPipe {
            flow_rate,
            pipe_diameter,
            pipe_length,
            fluid_density,
            fluid_viscosity,
            pipe_roughness,
        } => {
            let roughness = pipe_roughness.unwrap_or(d.pipe_roughness_ft);
            let dp = flow::pressure_drop_horizontal_pipe(
                bbl_per_day(*flow_rate),
                inches(*pipe_diameter),
                ft(*pipe_length),
                lb_per_ft3(*fluid_density),
                cp(*fluid_viscosity),
                ft(roughness),
            )?;
            resp.output("pressure_drop", in_psi(dp), "psi")
                .input("flow_rate", *flow_rate, "bbl/day")
                .input("pipe_diameter", *pipe_diameter, "in")
                .input("pipe_length", *pipe_length, "ft")
                .input("fluid_density", *fluid_density, "lb/ft3")
                .input("fluid_viscosity", *fluid_viscosity, "cP")
                .input("pipe_roughness", roughness, "ft")
        }
        Request::GasFlowRateWeymouth {
            upstream_pressure,
            downstream_pressure,
            pipe_diameter,
            pipe_length,
            gas_gravity,
            temperature,
            efficiency,
        } => {
            let eff = efficiency.unwrap_or(d.weymouth_efficiency);
            let q = flow::gas_flow_rate_weymouth(
                psi(*upstream_pressure),
                psi(*downstream_pressure),
                inches(*pipe_diameter),
                miles(*pipe_length),
                *gas_gravity,
                rankine(*temperature),
                eff,
            )?;
            resp.output("gas_flow_rate", in_mscf_per_day(q), "Mscf/day")
                .input("upstream_pressure", *upstream_pressure, "psia")
                .input("downstream_pressure", *downstream_pressure, "psia")
                .input("pipe_diameter", *pipe_diameter, "in")
                .input("pipe_length", *pipe_length, "mi")
                .input("gas_gravity", *gas_gravity, "")
                .input("temperature", *temperature, "degR")
                .input("efficiency", eff, "")
        }
        Request::OilFlowRateHazenWilliams {
            pressure_drop,
            pipe_diameter,
            pipe_length,
            hazen_williams_coefficient,
        } => {
            let c = hazen_williams_coefficient.unwrap_or(d.hazen_williams_coefficient);
            let q = flow::oil_flow_rate_hazen_williams(
                psi(*pressure_drop),
                inches(*pipe_diameter),
                ft(*pipe_length),
                c,
            )?;
            resp.output("flow_rate", in_gpm(q), "gpm")
                .output("flow_rate_bbl_per_day", in_bbl_per_day(q), "bbl/day")
                .input("pressure_drop", *pressure_drop, "psi")
                .input("pipe_diameter", *pipe_diameter, "in")
                .input("pipe_length", *pipe_length, "ft")
                .input("hazen_williams_coefficient", c, "")
        }
        Request::FlowThroughOrifice {
            upstream_pressure,
            downstream_pressure,
            orifice_diameter,
            fluid_density,
            discharge_coefficient,
        } => {
            let cd = discharge_coefficient.unwrap_or(d.orifice_discharge_coefficient);
            let q = flow::flow_through_orifice(
                psi(*upstream_pressure),
                psi(*downstream_pressure),
                inches(*orifice_diameter),
                lb_per_ft3(*fluid_density),
                cd,
            )?;
            resp.output("flow_rate", in_bbl_per_day(q), "bbl/day")
                .input("upstream_pressure", *upstream_pressure, "psi")
                .input("downstream_pressure", *downstream_pressure, "psi")
                .input("orifice_diameter", *orifice_diameter, "in")
                .input("fluid_density", *fluid_density, "lb/ft3")
                .input("discharge_coefficient", cd, "")
        }
        Request::CriticalFlowVelocity {
            liquid_density,
            gas_density,
            surface_tension,
        } => {
            let v = flow::critical_flow_velocity(
                lb_per_ft3(*liquid_density),
                lb_per_ft3(*gas_density),
                SurfaceTension::dyn_per_cm(*surface_tension),
            )?;
            resp.output("critical_velocity", in_ft_per_s(v), "ft/s")
                .input("liquid_density", *liquid_density, "lb/ft3")
                .input("gas_density", *gas_density, "lb/ft3")
                .input("surface_tension", *surface_tension, "dyn/cm")
        }
        Request::TerminalSettlingVelocity {
            particle_diameter,
            particle_density,
            fluid_density,
            fluid_viscosity,
        } => {
            let v = flow::terminal_settling_velocity(
                ft(*particle_diameter),
                lb_per_ft3(*particle_density),
                lb_per_ft3(*fluid_density),
                cp(*fluid_viscosity),
            )?;
            resp.output("settling_velocity", in_ft_per_s(v), "ft/s")
                .input("particle_diameter", *particle_diameter, "ft")
                .input("particle_density", *particle_density, "lb/ft3")
                .input("fluid_density", *fluid_density, "lb/ft3")
                .input("fluid_viscosity", *fluid_viscosity, "cP")
        }
        Request::MultiphaseFlowPressureDrop {
            liquid_superficial_velocity,
            gas_superficial_velocity,
            pipe_diameter,
            pipe_inclination,
            liquid_density,
            gas_density,
            liquid_viscosity,
            gas_viscosity,
            surface_tension,
        } => {
            let input = MultiphaseInput {
                liquid_superficial_velocity: ft_per_s(*liquid_superficial_velocity),
                gas_superficial_velocity: ft_per_s(*gas_superficial_velocity),
                diameter: ft(*pipe_diameter),
                inclination: deg(*pipe_inclination),
                liquid_density: lb_per_ft3(*liquid_density),
                gas_density: lb_per_ft3(*gas_density),
                liquid_viscosity: cp(*liquid_viscosity),
                gas_viscosity: cp(*gas_viscosity),
                surface_tension: SurfaceTension::dyn_per_cm(*surface_tension),
            };
            let g = beggs_brill(&input)?;
            resp.output("pressure_gradient", in_psi_per_ft(g.pressure_gradient), "psi/ft")
                .output("elevation_gradient", in_psi_per_ft(g.elevation_gradient), "psi/ft")
                .output("friction_gradient", in_psi_per_ft(g.friction_gradient), "psi/ft")
                .output("liquid_holdup", g.liquid_holdup, "")
                .output("no_slip_holdup", g.no_slip_holdup, "")
                .output("flow_regime", g.regime.name(), "")
                .output("froude_number", g.froude_number, "")
                .input("liquid_superficial_velocity", *liquid_superficial_velocity, "ft/s")
                .input("gas_superficial_velocity", *gas_superficial_velocity, "ft/s")
                .input("pipe_diameter", *pipe_diameter, "ft")
                .input("pipe_inclination", *pipe_inclination, "deg")
                .input("liquid_density", *liquid_density, "lb/ft3")
                .input("gas_density", *gas_density, "lb/ft3")
                .input("liquid_viscosity", *liquid_viscosity, "cP")
                .input("gas_viscosity", *gas_viscosity, "cP")
                .input("surface_tension", *surface_tension, "dyn/cm")
        }
        Request::PumpHeadCalculation {
            flow_rate,
            total_dynamic_head,
            pump_efficiency,
            specific_gravity,
        } => {
            let eta = pump_efficiency.unwrap_or(d.pump_efficiency);
            let sg = specific_gravity.unwrap_or(d.pump_fluid_sg);
            let power = flow::pump_power(bbl_per_day(*flow_rate), ft(*total_dynamic_head), eta, sg)?;
            resp.output("brake_horsepower", in_hp(power), "hp")
                .input("flow_rate", *flow_rate, "bbl/day")
                .input("total_dynamic_head", *total_dynamic_head, "ft")
                .input("pump_efficiency", eta, "")
                .input("specific_gravity", sg, "")
        }

        // --- reservoir ---
        Request::VogelIpr {
            reservoir_pressure,
            bottomhole_pressure,
            maximum_oil_rate,
        } => {
            let q = reservoir::vogel_ipr(
                psi(*reservoir_pressure),
                psi(*bottomhole_pressure),
                bbl_per_day(*maximum_oil_rate),
            )?;
            resp.output("oil_rate", in_bbl_per_day(q), "STB/day")
                .input("reservoir_pressure", *reservoir_pressure, "psia")
                .input("bottomhole_pressure", *bottomhole_pressure, "psia")
                .input("maximum_oil_rate", *maximum_oil_rate, "STB/day")
        }
        Request::ProductivityIndex {
            flow_rate,
            reservoir_pressure,
            bottomhole_pressure,
        } => {
            let j = reservoir::productivity_index(
                bbl_per_day(*flow_rate),
                psi(*reservoir_pressure),
                psi(*bottomhole_pressure),
            )?;
            resp.output("productivity_index", in_bbl_per_day_per_psi(j), "STB/day/psi")
                .input("flow_rate", *flow_rate, "STB/day")
                .input("reservoir_pressure", *reservoir_pressure, "psia")
                .input("bottomhole_pressure", *bottomhole_pressure, "psia")
        }
        Request::BubblePointPressure {
            gas_oil_ratio,
            gas_gravity,
            oil_gravity,
            temperature,
        } => {
            let pb = reservoir::standing_bubble_point(
                *gas_oil_ratio,
                *gas_gravity,
                *oil_gravity,
                fahrenheit(*temperature),
            )?;
            resp.output("bubble_point_pressure", in_psi(pb), "psia")
                .input("gas_oil_ratio", *gas_oil_ratio, "scf/STB")
                .input("gas_gravity", *gas_gravity, "")
                .input("oil_gravity", *oil_gravity, "API")
                .input("temperature", *temperature, "degF")
        }
        Request::OilFormationVolumeFactor {
            gas_oil_ratio,
            gas_gravity,
            oil_gravity,
            temperature,
        } => {
            let bo = reservoir::standing_oil_fvf(
                *gas_oil_ratio,
                *gas_gravity,
                *oil_gravity,
                fahrenheit(*temperature),
            )?;
            resp.output("oil_formation_volume_factor", bo, "bbl/STB")
                .input("gas_oil_ratio", *gas_oil_ratio, "scf/STB")
                .input("gas_gravity", *gas_gravity, "")
                .input("oil_gravity", *oil_gravity, "API")
                .input("temperature", *temperature, "degF")
        }
        Request::SolutionGasOilRatio {
            pressure,
            temperature,
            gas_gravity,
            oil_gravity,
        } => {
            let rs = reservoir::standing_solution_gor(
                psi(*pressure),
                *gas_gravity,
                *oil_gravity,
                fahrenheit(*temperature),
            )?;
            resp.output("solution_gas_oil_ratio", rs, "scf/STB")
                .input("pressure", *pressure, "psia")
                .input("temperature", *temperature, "degF")
                .input("gas_gravity", *gas_gravity, "")
                .input("oil_gravity", *oil_gravity, "API")
        }

        // --- production ---
        Request::DarcyRadialFlow {
            permeability,
            thickness,
            pressure_drop,
            viscosity,
            formation_volume_factor,
            wellbore_radius,
            drainage_radius,
        } => {
            let q = production::darcy_radial_flow(
                md(*permeability),
                ft(*thickness),
                psi(*pressure_drop),
                cp(*viscosity),
                *formation_volume_factor,
                ft(*wellbore_radius),
                ft(*drainage_radius),
            )?;
            resp.output("flow_rate", in_bbl_per_day(q), "STB/day")
                .input("permeability", *permeability, "md")
                .input("thickness", *thickness, "ft")
                .input("pressure_drop", *pressure_drop, "psi")
                .input("viscosity", *viscosity, "cP")
                .input("formation_volume_factor", *formation_volume_factor, "bbl/STB")
                .input("wellbore_radius", *wellbore_radius, "ft")
                .input("drainage_radius", *drainage_radius, "ft")
        }
        Request::SkinFactor {
            actual_productivity_index,
            ideal_productivity_index,
            wellbore_radius,
            drainage_radius,
        } => {
            let rw = wellbore_radius.unwrap_or(d.wellbore_radius_ft);
            let re = drainage_radius.unwrap_or(d.drainage_radius_ft);
            let skin = production::skin_factor(
                bbl_per_day_per_psi(*actual_productivity_index),
                bbl_per_day_per_psi(*ideal_productivity_index),
                ft(rw),
                ft(re),
            )?;
            resp.output("skin_factor", skin, "")
                .input("actual_productivity_index", *actual_productivity_index, "STB/day/psi")
                .input("ideal_productivity_index", *ideal_productivity_index, "STB/day/psi")
                .input("wellbore_radius", rw, "ft")
                .input("drainage_radius", re, "ft")
        }
        Request::GasWellDeliverability {
            absolute_open_flow_potential,
            flowing_bottomhole_pressure,
            reservoir_pressure,
            flow_exponent,
        } => {
            let n = flow_exponent.unwrap_or(d.deliverability_exponent);
            let q = production::gas_well_deliverability(
                mscf_per_day(*absolute_open_flow_potential),
                psi(*flowing_bottomhole_pressure),
                psi(*reservoir_pressure),
                n,
            )?;
            resp.output("gas_flow_rate", in_mscf_per_day(q), "Mscf/day")
                .input("absolute_open_flow_potential", *absolute_open_flow_potential, "Mscf/day")
                .input("flowing_bottomhole_pressure", *flowing_bottomhole_pressure, "psia")
                .input("reservoir_pressure", *reservoir_pressure, "psia")
                .input("flow_exponent", n, "")
        }
        Request::ChokeFlowRateGas {
            upstream_pressure,
            downstream_pressure,
            choke_diameter,
            gas_gravity,
            temperature,
            discharge_coefficient,
        } => {
            let cd = discharge_coefficient.unwrap_or(d.choke_discharge_coefficient);
            let choke = production::gas_choke_flow_rate(
                psi(*upstream_pressure),
                psi(*downstream_pressure),
                inches(*choke_diameter),
                *gas_gravity,
                rankine(*temperature),
                cd,
            )?;
            let regime = if choke.critical { "critical" } else { "subcritical" };
            resp.output("gas_flow_rate", in_mscf_per_day(choke.rate), "Mscf/day")
                .output("flow_regime", regime, "")
                .input("upstream_pressure", *upstream_pressure, "psia")
                .input("downstream_pressure", *downstream_pressure, "psia")
                .input("choke_diameter", *choke_diameter, "in")
                .input("gas_gravity", *gas_gravity, "")
                .input("temperature", *temperature, "degR")
                .input("discharge_coefficient", cd, "")
        }
        Request::WellTestHorner {
            pressure_data,
            time_data,
            production_time,
            flowing_pressure,
            flow_rate,
            porosity,
            viscosity,
            total_compressibility,
            formation_volume_factor,
            thickness,
            wellbore_radius,
        } => {
            let rw = wellbore_radius.unwrap_or(d.wellbore_radius_ft);
            let test = BuildupTest {
                shut_in_pressures: pressure_data.iter().map(|&p| psi(p)).collect(),
                shut_in_times: time_data.iter().map(|&t| hours(t)).collect(),
                producing_time: hours(*production_time),
                flowing_pressure: psi(*flowing_pressure),
                rate: bbl_per_day(*flow_rate),
                formation_volume_factor: *formation_volume_factor,
                viscosity: cp(*viscosity),
                porosity: *porosity,
                total_compressibility: *total_compressibility,
                thickness: ft(*thickness),
                wellbore_radius: ft(rw),
            };
            let horner = production::horner_analysis(&test)?;
            resp.output("permeability", in_md(horner.permeability), "md")
                .output("skin_factor", horner.skin, "")
                .output("horner_slope", horner.slope, "psi/cycle")
                .output("extrapolated_pressure", in_psi(horner.extrapolated_pressure), "psia")
                .output("one_hour_pressure", in_psi(horner.one_hour_pressure), "psia")
                .input("pressure_data", pressure_data.as_slice(), "psia")
                .input("time_data", time_data.as_slice(), "hr")
                .input("production_time", *production_time, "hr")
                .input("flowing_pressure", *flowing_pressure, "psia")
                .input("flow_rate", *flow_rate, "STB/day")
                .input("porosity", *porosity, "")
                .input("viscosity", *viscosity, "cP")
                .input("total_compressibility", *total_compressibility, "1/psi")
                .input("formation_volume_factor", *formation_volume_factor, "bbl/STB")
                .input("thickness", *thickness, "ft")
                .input("wellbore_radius", rw, "ft")
        }

        // --- rock properties ---
        Request::PorosityFromLogs {
            neutron_porosity,
            density_porosity,
            shale_volume,
        } => {
            let vsh = shale_volume.unwrap_or(d.shale_volume);
            let phi = rock::porosity_from_logs(*neutron_porosity, *density_porosity, vsh)?;
            resp.output("effective_porosity", phi, "")
                .input("neutron_porosity", *neutron_porosity, "")
                .input("density_porosity", *density_porosity, "")
                .input("shale_volume", vsh, "")
        }
        Request::PorosityFromDensityLog {
            bulk_density,
            matrix_density,
            fluid_density,
        } => {
            let phi = rock::density_porosity(
                g_per_cm3(*bulk_density),
                g_per_cm3(*matrix_density),
                g_per_cm3(*fluid_density),
            )?;
            resp.output("porosity", phi, "")
                .input("bulk_density", *bulk_density, "g/cm3")
                .input("matrix_density", *matrix_density, "g/cm3")
                .input("fluid_density", *fluid_density, "g/cm3")
        }
        Request::WaterSaturationArchie {
            formation_resistivity,
            water_resistivity,
            porosity,
            cementation_factor,
            saturation_exponent,
            tortuosity_factor,
        } => {
            let params = ArchieParameters {
                tortuosity: tortuosity_factor.unwrap_or(d.archie_tortuosity),
                cementation: cementation_factor.unwrap_or(d.archie_cementation),
                saturation_exponent: saturation_exponent.unwrap_or(d.archie_saturation_exponent),
            };
            let sw = rock::archie_water_saturation(
                *formation_resistivity,
                *water_resistivity,
                *porosity,
                params,
            )?;
            resp.output("water_saturation", sw, "")
                .output("hydrocarbon_saturation", 1.0 - sw, "")
                .input("formation_resistivity", *formation_resistivity, "ohm-m")
                .input("water_resistivity", *water_resistivity, "ohm-m")
                .input("porosity", *porosity, "")
                .input("cementation_factor", params.cementation, "")
                .input("saturation_exponent", params.saturation_exponent, "")
                .input("tortuosity_factor", params.tortuosity, "")
        }
        Request::PermeabilityFromPorosityKozenyCarman {
            porosity,
            grain_diameter,
            shape_factor,
        } => {
            let c = shape_factor.unwrap_or(d.kozeny_carman_shape_factor);
            let k = rock::kozeny_carman_permeability(*porosity, inches(*grain_diameter), c)?;
            resp.output("permeability", in_md(k), "md")
                .input("porosity", *porosity, "")
                .input("grain_diameter", *grain_diameter, "in")
                .input("shape_factor", c, "")
        }
        Request::PermeabilityTimurCorrelation {
            porosity,
            irreducible_water_saturation,
        } => {
            let k = rock::timur_permeability(*porosity, *irreducible_water_saturation)?;
            resp.output("permeability", in_md(k), "md")
                .input("porosity", *porosity, "")
                .input("irreducible_water_saturation", *irreducible_water_saturation, "")
        }
        Request::RelativePermeabilityOilCorey {
            water_saturation,
            irreducible_water_saturation,
            residual_oil_saturation,
            oil_endpoint,
            oil_exponent,
        } => {
            let oil = CoreyPhase {
                endpoint: oil_endpoint.unwrap_or(d.corey_endpoint),
                exponent: oil_exponent.unwrap_or(d.corey_exponent),
            };
            let kro = rock::corey_oil_relative_permeability(
                *water_saturation,
                *irreducible_water_saturation,
                *residual_oil_saturation,
                oil,
            )?;
            resp.output("oil_relative_permeability", kro, "")
                .input("water_saturation", *water_saturation, "")
                .input("irreducible_water_saturation", *irreducible_water_saturation, "")
                .input("residual_oil_saturation", *residual_oil_saturation, "")
                .input("oil_endpoint", oil.endpoint, "")
                .input("oil_exponent", oil.exponent, "")
        }
        Request::RelativePermeabilityWaterCorey {
            water_saturation,
            irreducible_water_saturation,
            residual_oil_saturation,
            water_endpoint,
            water_exponent,
        } => {
            let water = CoreyPhase {
                endpoint: water_endpoint.unwrap_or(d.corey_endpoint),
                exponent: water_exponent.unwrap_or(d.corey_exponent),
            };
            let krw = rock::corey_water_relative_permeability(
                *water_saturation,
                *irreducible_water_saturation,
                *residual_oil_saturation,
                water,
            )?;
            resp.output("water_relative_permeability", krw, "")
                .input("water_saturation", *water_saturation, "")
                .input("irreducible_water_saturation", *irreducible_water_saturation, "")
                .input("residual_oil_saturation", *residual_oil_saturation, "")
                .input("water_endpoint", water.endpoint, "")
                .input("water_exponent", water.exponent, "")
        }
        Request::CapillaryPressureBrooksCorey {
            water_saturation,
            irreducible_water_saturation,
            entry_pressure,
            pore_size_distribution,
        } => {
            let pc = rock::brooks_corey_capillary_pressure(
                *water_saturation,
                *irreducible_water_saturation,
                psi(*entry_pressure),
                *pore_size_distribution,
            )?;
            resp.output("capillary_pressure", in_psi(pc), "psi")
                .input("water_saturation", *water_saturation, "")
                .input("irreducible_water_saturation", *irreducible_water_saturation, "")
                .input("entry_pressure", *entry_pressure, "psi")
                .input("pore_size_distribution", *pore_size_distribution, "")
        }
        Request::FormationFactor {
            porosity,
            cementation_factor,
            tortuosity_factor,
        } => {
            let a = tortuosity_factor.unwrap_or(d.archie_tortuosity);
            let m = cementation_factor.unwrap_or(d.archie_cementation);
            let f = rock::formation_factor(*porosity, a, m)?;
            resp.output("formation_factor", f, "")
                .input("porosity", *porosity, "")
                .input("cementation_factor", m, "")
                .input("tortuosity_factor", a, "")
        }
        Request::NetToGrossRatio {
            net_thickness,
            gross_thickness,
        } => {
            let ntg = rock::net_to_gross(ft(*net_thickness), ft(*gross_thickness))?;
            resp.output("net_to_gross", ntg, "")
                .input("net_thickness", *net_thickness, "ft")
                .input("gross_thickness", *gross_thickness, "ft")
        }
        Request::BulkVolumeOil {
            gross_rock_volume,
            net_to_gross,
            porosity,
            oil_saturation,
        } => {
            let v = rock::bulk_volume_oil(
                acre_ft(*gross_rock_volume),
                *net_to_gross,
                *porosity,
                *oil_saturation,
            )?;
            resp.output("bulk_volume_oil", in_acre_ft(v), "acre-ft")
                .output("bulk_volume_oil_bbl", in_bbl(v), "bbl")
                .input("gross_rock_volume", *gross_rock_volume, "acre-ft")
                .input("net_to_gross", *net_to_gross, "")
                .input("porosity", *porosity, "")
                .input("oil_saturation", *oil_saturation, "")
        }
        Request::HydrocarbonPoreVolume {
            bulk_volume,
            porosity,
            hydrocarbon_saturation,
        } => {
            let v = rock::hydrocarbon_pore_volume(
                acre_ft(*bulk_volume),
                *porosity,
                *hydrocarbon_saturation,
            )?;
            resp.output("hydrocarbon_pore_volume", in_acre_ft(v), "acre-ft")
                .output("hydrocarbon_pore_volume_bbl", in_bbl(v), "bbl")
                .input("bulk_volume", *bulk_volume, "acre-ft")
                .input("porosity", *porosity, "")
                .input("hydrocarbon_saturation", *hydrocarbon_saturation, "")
        }

        // --- fluids ---
        Request::WaterFormationVolumeFactor {
            temperature,
            pressure,
        } => {
            let bw = fluids::water_formation_volume_factor(fahrenheit(*temperature), psi(*pressure))?;
            resp.output("water_formation_volume_factor", bw, "bbl/STB")
                .input("temperature", *temperature, "degF")
                .input("pressure", *pressure, "psia")
        }
        Request::WaterCompressibility {
            temperature,
            pressure,
            salinity,
        } => {
            let s = salinity.unwrap_or(d.salinity_ppm);
            let cw = fluids::water_compressibility(fahrenheit(*temperature), psi(*pressure), s)?;
            resp.output("water_compressibility", cw, "1/psi")
                .input("temperature", *temperature, "degF")
                .input("pressure", *pressure, "psia")
                .input("salinity", s, "ppm")
        }
        Request::GasFormationVolumeFactor {
            temperature,
            pressure,
            z_factor,
        } => {
            let z = z_factor.unwrap_or(d.gas_z_factor);
            let bg = fluids::gas_formation_volume_factor(fahrenheit(*temperature), psi(*pressure), z)?;
            resp.output("gas_formation_volume_factor", bg, "ft3/scf")
                .input("temperature", *temperature, "degF")
                .input("pressure", *pressure, "psia")
                .input("z_factor", z, "")
        }
        Request::WaterViscosity {
            temperature,
            pressure,
            salinity,
        } => {
            let s = salinity.unwrap_or(d.salinity_ppm);
            let mu = fluids::water_viscosity(fahrenheit(*temperature), psi(*pressure), s)?;
            resp.output("water_viscosity", in_cp(mu), "cP")
                .input("temperature", *temperature, "degF")
                .input("pressure", *pressure, "psia")
                .input("salinity", s, "ppm")
        }

        // --- economics ---
        Request::NetPresentValue {
            cash_flows,
            discount_rate,
            initial_investment,
        } => {
            let npv = metrics::npv(&series(cash_flows)?, rate(*discount_rate)?, *initial_investment)?;
            resp.output("npv", npv, "$")
                .input("cash_flows", cash_flows.as_slice(), "$")
                .input("discount_rate", *discount_rate, "")
                .input("initial_investment", *initial_investment, "$")
        }
        Request::InternalRateOfReturn {
            cash_flows,
            initial_investment,
            tolerance,
        } => {
            let tol = tolerance.unwrap_or(d.irr_tolerance);
            let irr = metrics::irr(&series(cash_flows)?, *initial_investment, tol)?;
            resp.output("irr", irr, "")
                .output("irr_percent", irr * 100.0, "%")
                .input("cash_flows", cash_flows.as_slice(), "$")
                .input("initial_investment", *initial_investment, "$")
                .input("tolerance", tol, "$")
        }
        Request::DiscountedPaybackPeriod {
            cash_flows,
            discount_rate,
            initial_investment,
        } => {
            let period = metrics::discounted_payback_period(
                &series(cash_flows)?,
                rate(*discount_rate)?,
                *initial_investment,
            )?;
            resp.output("payback_period", period, "periods")
                .input("cash_flows", cash_flows.as_slice(), "$")
                .input("discount_rate", *discount_rate, "")
                .input("initial_investment", *initial_investment, "$")
        }
        Request::ProfitabilityIndex {
            cash_flows,
            discount_rate,
            initial_investment,
        } => {
            let pi = metrics::profitability_index(
                &series(cash_flows)?,
                rate(*discount_rate)?,
                *initial_investment,
            )?;
            resp.output("profitability_index", pi, "")
                .input("cash_flows", cash_flows.as_slice(), "$")
                .input("discount_rate", *discount_rate, "")
                .input("initial_investment", *initial_investment, "$")
        }
        Request::OilRevenue {
            production_rate,
            oil_price,
            royalty_rate,
            operating_cost_per_barrel,
        } => {
            let royalty = royalty_rate.unwrap_or(d.royalty_rate);
            let opex = operating_cost_per_barrel.unwrap_or(d.oil_opex_per_bbl);
            let net = revenue::oil_revenue(bbl_per_day(*production_rate), *oil_price, royalty, opex)?;
            resp.output("annual_net_revenue", net, "$/year")
                .input("production_rate", *production_rate, "bbl/day")
                .input("oil_price", *oil_price, "$/bbl")
                .input("royalty_rate", royalty, "")
                .input("operating_cost_per_barrel", opex, "$/bbl")
        }
        Request::GasRevenue {
            production_rate,
            gas_price,
            royalty_rate,
            operating_cost_per_mcf,
        } => {
            let royalty = royalty_rate.unwrap_or(d.royalty_rate);
            let opex = operating_cost_per_mcf.unwrap_or(d.gas_opex_per_mscf);
            let net = revenue::gas_revenue(
                mscf_per_day(*production_rate),
                *gas_price,
                royalty,
                opex,
            )?;
            resp.output("annual_net_revenue", net, "$/year")
                .input("production_rate", *production_rate, "Mscf/day")
                .input("gas_price", *gas_price, "$/Mscf")
                .input("royalty_rate", royalty, "")
                .input("operating_cost_per_mcf", opex, "$/Mscf")
        }
        Request::BreakEvenOilPrice {
            initial_investment,
            annual_production,
            operating_cost_per_barrel,
            royalty_rate,
            discount_rate,
            project_life,
        } => {
            let royalty = royalty_rate.unwrap_or(d.royalty_rate);
            let r = discount_rate.unwrap_or(d.break_even_discount_rate);
            let life = project_life.unwrap_or(d.project_life_years);
            let price = revenue::break_even_oil_price(
                *initial_investment,
                bbl(*annual_production),
                *operating_cost_per_barrel,
                royalty,
                rate(r)?,
                life,
            )?;
            resp.output("break_even_price", price, "$/bbl")
                .input("initial_investment", *initial_investment, "$")
                .input("annual_production", *annual_production, "bbl/year")
                .input("operating_cost_per_barrel", *operating_cost_per_barrel, "$/bbl")
                .input("royalty_rate", royalty, "")
                .input("discount_rate", r, "")
                .input("project_life", life as f64, "years")
        }
        Request::NpvProfile {
            cash_flows,
            initial_investment,
            rates,
        } => {
            if rates.is_empty() {
                return Err(AppError::InvalidRequest(
                    "npv_profile needs at least one rate".to_string(),
                ));
            }
            let grid = rates.iter().map(|&r| rate(r)).collect::<AppResult<Vec<_>>>()?;
            let points = sweep::npv_profile(&series(cash_flows)?, *initial_investment, &grid)?;
            let npvs: Vec<f64> = points.iter().map(|p| p.npv).collect();
            resp.output("npv", npvs, "$")
                .input("cash_flows", cash_flows.as_slice(), "$")
                .input("initial_investment", *initial_investment, "$")
                .input("rates", rates.as_slice(), "")
        }
    };
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(req: Request) -> AppResult<OperationResponse> {
        evaluate(&req, &EngineDefaults::default())
    }

    #[test]
    fn mud_gradient_defaults_to_ppg() {
        let resp = eval(Request::MudWeightToPressureGradient {
            mud_weight: 12.0,
            unit: None,
        })
        .unwrap();
        assert!((resp.number("pressure_gradient").unwrap() - 0.624).abs() < 1e-9);
        assert_eq!(resp.get_input("mud_weight").unwrap().unit, "ppg");
    }

    #[test]
    fn hydrostatic_converts_specific_gravity() {
        let resp = eval(Request::HydrostaticPressure {
            mud_weight: 1.2,
            depth: 10_000.0,
            unit: Some("sg".to_string()),
        })
        .unwrap();
        let expected = 1.2 * 8.33 * 0.052 * 10_000.0;
        assert!((resp.number("hydrostatic_pressure").unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn hydrostatic_echoes_mud_weight_as_given() {
        let resp = eval(Request::HydrostaticPressure {
            mud_weight: 1.2,
            depth: 10_000.0,
            unit: Some("sg".to_string()),
        })
        .unwrap();
        let echoed = resp.get_input("mud_weight").unwrap();
        assert_eq!(echoed.value, crate::Value::Number(1.2));
        assert_eq!(echoed.unit, "sg");

        let resp = eval(Request::HydrostaticPressure {
            mud_weight: 12.0,
            depth: 10_000.0,
            unit: None,
        })
        .unwrap();
        let echoed = resp.get_input("mud_weight").unwrap();
        assert_eq!(echoed.value, crate::Value::Number(12.0));
        assert_eq!(echoed.unit, "ppg");
    }

    #[test]
    fn optional_parameters_fall_back_to_defaults() {
        let resp = eval(Request::AcidizingVolume {
            wellbore_radius: 0.354,
            penetration_depth: 12.0,
            porosity: 0.2,
            acid_concentration: None,
        })
        .unwrap();
        assert_eq!(
            resp.get_input("acid_concentration").unwrap().value,
            crate::response::Value::Number(15.0)
        );
    }

    #[test]
    fn reynolds_regime_labels() {
        assert_eq!(reynolds_regime(1_000.0), "laminar");
        assert_eq!(reynolds_regime(3_000.0), "transitional");
        assert_eq!(reynolds_regime(50_000.0), "turbulent");
    }

    #[test]
    fn empty_rate_list_is_invalid() {
        let err = eval(Request::NpvProfile {
            cash_flows: vec![100.0],
            initial_investment: 50.0,
            rates: vec![],
        })
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn formation_gradient_from_water_density() {
        let resp = eval(Request::FormationPressureGradient {
            formation_water_density: 64.8,
        })
        .unwrap();
        assert!((resp.number("pressure_gradient").unwrap() - 0.45).abs() < 1e-9);
    }

    #[test]
    fn lost_circulation_uses_default_margin() {
        let resp = eval(Request::LostCirculationPressure {
            formation_pressure: 6_000.0,
            hydrostatic_pressure: 5_200.0,
            safety_margin: None,
        })
        .unwrap();
        assert!((resp.number("lost_circulation_pressure").unwrap() - 5_950.0).abs() < 1e-9);
        assert!((resp.number("remaining_margin").unwrap() - 750.0).abs() < 1e-9);
        assert_eq!(
            resp.get_input("safety_margin").unwrap().value,
            crate::Value::Number(50.0)
        );
    }

    #[test]
    fn archie_request_reports_defaults_used() {
        let resp = eval(Request::WaterSaturationArchie {
            formation_resistivity: 20.0,
            water_resistivity: 0.05,
            porosity: 0.2,
            cementation_factor: None,
            saturation_exponent: None,
            tortuosity_factor: None,
        })
        .unwrap();
        assert!((resp.number("water_saturation").unwrap() - 0.25).abs() < 1e-12);
        assert!((resp.number("hydrocarbon_saturation").unwrap() - 0.75).abs() < 1e-12);
        assert_eq!(
            resp.get_input("cementation_factor").unwrap().value,
            crate::Value::Number(2.0)
        );
    }

    #[test]
    fn volumetrics_report_barrels() {
        let resp = eval(Request::HydrocarbonPoreVolume {
            bulk_volume: 1_000.0,
            porosity: 0.2,
            hydrocarbon_saturation: 0.75,
        })
        .unwrap();
        assert!((resp.number("hydrocarbon_pore_volume").unwrap() - 150.0).abs() < 1e-9);
        let bbl = resp.number("hydrocarbon_pore_volume_bbl").unwrap();
        assert!((bbl - 150.0 * 7_758.367).abs() < 1.0);
    }

    #[test]
    fn choke_reports_flow_regime() {
        let resp = eval(Request::ChokeFlowRateGas {
            upstream_pressure: 1_000.0,
            downstream_pressure: 200.0,
            choke_diameter: 0.5,
            gas_gravity: 0.65,
            temperature: 600.0,
            discharge_coefficient: None,
        })
        .unwrap();
        assert_eq!(resp.get("flow_regime").unwrap().value, crate::Value::from("critical"));
        assert!(resp.number("gas_flow_rate").unwrap() > 0.0);
        assert_eq!(
            resp.get_input("discharge_coefficient").unwrap().value,
            crate::Value::Number(0.85)
        );
    }

    #[test]
    fn horner_rejects_mismatched_series() {
        let err = eval(Request::WellTestHorner {
            pressure_data: vec![2_750.0, 2_790.0, 2_815.0],
            time_data: vec![1.0, 2.0],
            production_time: 240.0,
            flowing_pressure: 2_300.0,
            flow_rate: 500.0,
            porosity: 0.2,
            viscosity: 1.0,
            total_compressibility: 1.0e-5,
            formation_volume_factor: 1.2,
            thickness: 30.0,
            wellbore_radius: None,
        })
        .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DomainViolation);
    }

    #[test]
    fn brine_viscosity_uses_default_salinity() {
        let fresh = eval(Request::WaterViscosity {
            temperature: 200.0,
            pressure: 14.7,
            salinity: None,
        })
        .unwrap();
        let brine = eval(Request::WaterViscosity {
            temperature: 200.0,
            pressure: 14.7,
            salinity: Some(150_000.0),
        })
        .unwrap();
        assert!(brine.number("water_viscosity").unwrap() > fresh.number("water_viscosity").unwrap());
        assert_eq!(
            fresh.get_input("salinity").unwrap().value,
            crate::Value::Number(0.0)
        );
    }
}
