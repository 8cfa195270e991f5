// pe-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, Area as UomArea,
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, Mass as UomMass,
    MassDensity as UomMassDensity, Power as UomPower, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Velocity as UomVelocity, Volume as UomVolume, VolumeRate as UomVolumeRate,
};
use uom::si::{ISQ, Quantity, SI};
use uom::typenum::{N1, N2, P1, P4, Z0};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

/// Pressure gradient, Pa/m in SI.
pub type PressureGradient = Quantity<ISQ<N2, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Productivity index (volume rate per unit drawdown), m³/(s·Pa) in SI.
pub type ProductivityIndex = Quantity<ISQ<P4, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Fixed oilfield conversion constants. Every factor maps one field unit onto
/// its SI counterpart unless stated otherwise.
pub mod factors {
    pub const PSI_TO_PA: f64 = 6_894.757_293_168;
    pub const KPA_TO_PA: f64 = 1.0e3;
    pub const MPA_TO_PA: f64 = 1.0e6;
    pub const BAR_TO_PA: f64 = 1.0e5;
    pub const ATM_TO_PA: f64 = 101_325.0;

    pub const FT_TO_M: f64 = 0.3048;
    pub const IN_TO_M: f64 = 0.0254;
    pub const CM_TO_M: f64 = 0.01;
    pub const MILE_TO_M: f64 = 1_609.344;

    pub const BBL_TO_M3: f64 = 0.158_987_294_928;
    pub const GAL_TO_M3: f64 = 0.003_785_411_784;
    pub const FT3_TO_M3: f64 = 0.028_316_846_592;
    /// Thousand standard cubic feet.
    pub const MSCF_TO_M3: f64 = 1.0e3 * FT3_TO_M3;
    /// 43 560 ft³.
    pub const ACRE_FT_TO_M3: f64 = 43_560.0 * FT3_TO_M3;

    pub const MINUTE_TO_S: f64 = 60.0;
    pub const HOUR_TO_S: f64 = 3_600.0;
    pub const DAY_TO_S: f64 = 86_400.0;

    pub const LBM_TO_KG: f64 = 0.453_592_37;
    pub const PPG_TO_KG_M3: f64 = 119.826_427_316;
    pub const LB_FT3_TO_KG_M3: f64 = 16.018_463_374;
    pub const G_CM3_TO_KG_M3: f64 = 1.0e3;

    pub const CP_TO_PA_S: f64 = 1.0e-3;
    pub const HP_TO_W: f64 = 745.699_871_582;

    /// Oilfield hydrostatic constant: psi/ft per ppg.
    pub const PPG_TO_PSI_PER_FT: f64 = 0.052;
    /// Mud-weight specific gravity reference: ppg of fresh water.
    pub const WATER_PPG: f64 = 8.33;
    /// Gallons per cubic foot used by completion volume formulas.
    pub const GAL_PER_FT3: f64 = 7.48;

    pub const RANKINE_PER_KELVIN: f64 = 1.8;
    pub const FAHRENHEIT_RANKINE_OFFSET: f64 = 459.67;
    pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Darcy units: 1 md in m².
    pub const MD_TO_M2: f64 = 9.869_233e-16;
    /// 1 dyne/cm in N/m.
    pub const DYN_CM_TO_N_M: f64 = 1.0e-3;
}

/// Defines a constructor and a reader for one field unit of a quantity.
///
/// The constructor stores SI; the reader returns the field-unit value.
macro_rules! field_unit {
    ($(#[$meta:meta])* $ctor:ident, $reader:ident, $ty:ident, $si:path, $factor:expr) => {
        $(#[$meta])*
        #[inline]
        pub fn $ctor(v: f64) -> $ty {
            $ty::new::<$si>(v * ($factor))
        }

        #[inline]
        pub fn $reader(q: $ty) -> f64 {
            q.get::<$si>() / ($factor)
        }
    };
}

use uom::si::{
    angle::radian, area::square_meter, dynamic_viscosity::pascal_second, length::meter,
    mass::kilogram, mass_density::kilogram_per_cubic_meter, power::watt, pressure::pascal,
    ratio::ratio, time::second, velocity::meter_per_second, volume::cubic_meter,
    volume_rate::cubic_meter_per_second,
};

// Pressure
field_unit!(pa, in_pa, Pressure, pascal, 1.0);
field_unit!(kpa, in_kpa, Pressure, pascal, factors::KPA_TO_PA);
field_unit!(
    /// Pounds-force per square inch (absolute or differential, by context).
    psi,
    in_psi,
    Pressure,
    pascal,
    factors::PSI_TO_PA
);

// Length
field_unit!(m, in_m, Length, meter, 1.0);
field_unit!(ft, in_ft, Length, meter, factors::FT_TO_M);
field_unit!(inches, in_inches, Length, meter, factors::IN_TO_M);
field_unit!(miles, in_miles, Length, meter, factors::MILE_TO_M);

// Area
field_unit!(m2, in_m2, Area, square_meter, 1.0);
field_unit!(
    /// Volume per unit length (gal/ft), which is dimensionally an area.
    gal_per_ft,
    in_gal_per_ft,
    Area,
    square_meter,
    factors::GAL_TO_M3 / factors::FT_TO_M
);

// Volume
field_unit!(m3, in_m3, Volume, cubic_meter, 1.0);
field_unit!(bbl, in_bbl, Volume, cubic_meter, factors::BBL_TO_M3);
field_unit!(gal, in_gal, Volume, cubic_meter, factors::GAL_TO_M3);
field_unit!(ft3, in_ft3, Volume, cubic_meter, factors::FT3_TO_M3);
field_unit!(acre_ft, in_acre_ft, Volume, cubic_meter, factors::ACRE_FT_TO_M3);

// Volume rate
field_unit!(m3ps, in_m3ps, VolumeRate, cubic_meter_per_second, 1.0);
field_unit!(
    bbl_per_min,
    in_bbl_per_min,
    VolumeRate,
    cubic_meter_per_second,
    factors::BBL_TO_M3 / factors::MINUTE_TO_S
);
field_unit!(
    bbl_per_day,
    in_bbl_per_day,
    VolumeRate,
    cubic_meter_per_second,
    factors::BBL_TO_M3 / factors::DAY_TO_S
);
field_unit!(
    gpm,
    in_gpm,
    VolumeRate,
    cubic_meter_per_second,
    factors::GAL_TO_M3 / factors::MINUTE_TO_S
);
field_unit!(
    /// Thousand standard cubic feet per day.
    mscf_per_day,
    in_mscf_per_day,
    VolumeRate,
    cubic_meter_per_second,
    factors::MSCF_TO_M3 / factors::DAY_TO_S
);

// Density
field_unit!(kg_m3, in_kg_m3, Density, kilogram_per_cubic_meter, 1.0);
field_unit!(
    /// Pounds per US gallon.
    ppg,
    in_ppg,
    Density,
    kilogram_per_cubic_meter,
    factors::PPG_TO_KG_M3
);
field_unit!(
    lb_per_ft3,
    in_lb_per_ft3,
    Density,
    kilogram_per_cubic_meter,
    factors::LB_FT3_TO_KG_M3
);
field_unit!(
    /// Log-analysis density unit.
    g_per_cm3,
    in_g_per_cm3,
    Density,
    kilogram_per_cubic_meter,
    factors::G_CM3_TO_KG_M3
);
field_unit!(
    /// Mud-weight specific gravity (1.0 = 8.33 ppg).
    sg,
    in_sg,
    Density,
    kilogram_per_cubic_meter,
    factors::WATER_PPG * factors::PPG_TO_KG_M3
);

// Viscosity
field_unit!(pa_s, in_pa_s, DynVisc, pascal_second, 1.0);
field_unit!(cp, in_cp, DynVisc, pascal_second, factors::CP_TO_PA_S);

// Velocity
field_unit!(mps, in_mps, Velocity, meter_per_second, 1.0);
field_unit!(ft_per_s, in_ft_per_s, Velocity, meter_per_second, factors::FT_TO_M);
field_unit!(
    ft_per_min,
    in_ft_per_min,
    Velocity,
    meter_per_second,
    factors::FT_TO_M / factors::MINUTE_TO_S
);

// Permeability (an area) and fracture conductivity (permeability x width)
field_unit!(md, in_md, Area, square_meter, factors::MD_TO_M2);
field_unit!(
    md_ft,
    in_md_ft,
    Volume,
    cubic_meter,
    factors::MD_TO_M2 * factors::FT_TO_M
);

// Mass
field_unit!(kg, in_kg, Mass, kilogram, 1.0);
field_unit!(lbm, in_lbm, Mass, kilogram, factors::LBM_TO_KG);

// Time
field_unit!(s, in_s, Time, second, 1.0);
field_unit!(hours, in_hours, Time, second, factors::HOUR_TO_S);
field_unit!(days, in_days, Time, second, factors::DAY_TO_S);

// Power
field_unit!(w, in_w, Power, watt, 1.0);
field_unit!(hp, in_hp, Power, watt, factors::HP_TO_W);

// Angle
field_unit!(rad, in_rad, Angle, radian, 1.0);
field_unit!(
    deg,
    in_deg,
    Angle,
    radian,
    std::f64::consts::PI / 180.0
);

#[inline]
pub fn unitless(v: f64) -> Ratio {
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn in_unitless(r: Ratio) -> f64 {
    r.get::<ratio>()
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn in_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn rankine(v: f64) -> Temperature {
    k(v / factors::RANKINE_PER_KELVIN)
}

#[inline]
pub fn in_rankine(t: Temperature) -> f64 {
    in_k(t) * factors::RANKINE_PER_KELVIN
}

#[inline]
pub fn fahrenheit(v: f64) -> Temperature {
    rankine(v + factors::FAHRENHEIT_RANKINE_OFFSET)
}

#[inline]
pub fn in_fahrenheit(t: Temperature) -> f64 {
    in_rankine(t) - factors::FAHRENHEIT_RANKINE_OFFSET
}

#[inline]
pub fn pa_per_m(v: f64) -> PressureGradient {
    pa(v) / m(1.0)
}

#[inline]
pub fn in_pa_per_m(g: PressureGradient) -> f64 {
    in_pa(g * m(1.0))
}

#[inline]
pub fn psi_per_ft(v: f64) -> PressureGradient {
    psi(v) / ft(1.0)
}

#[inline]
pub fn in_psi_per_ft(g: PressureGradient) -> f64 {
    in_psi(g * ft(1.0))
}

#[inline]
pub fn bbl_per_day_per_psi(v: f64) -> ProductivityIndex {
    bbl_per_day(v) / psi(1.0)
}

#[inline]
pub fn in_bbl_per_day_per_psi(j: ProductivityIndex) -> f64 {
    in_bbl_per_day(j * psi(1.0))
}

/// Interfacial tension, stored in N/m.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SurfaceTension(f64);

impl SurfaceTension {
    pub fn n_per_m(v: f64) -> Self {
        Self(v)
    }

    pub fn dyn_per_cm(v: f64) -> Self {
        Self(v * factors::DYN_CM_TO_N_M)
    }

    pub fn in_n_per_m(self) -> f64 {
        self.0
    }

    pub fn in_dyn_per_cm(self) -> f64 {
        self.0 / factors::DYN_CM_TO_N_M
    }
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = factors::G0_MPS2;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn constructors_smoke() {
        let _p = psi(14.7);
        let _t = fahrenheit(60.0);
        let _q = bbl_per_min(10.0);
        let _l = ft(2.0);
        let _dt = days(1.0);
        let _r = unitless(0.5);
        let _g0 = constants::g0();
    }

    #[test]
    fn field_readers_invert_constructors() {
        assert!(close(in_psi(psi(3_000.0)), 3_000.0, 1e-12));
        assert!(close(in_inches(inches(8.5)), 8.5, 1e-12));
        assert!(close(in_bbl_per_day(bbl_per_day(1_200.0)), 1_200.0, 1e-12));
        assert!(close(in_ppg(ppg(12.0)), 12.0, 1e-12));
        assert!(close(in_cp(cp(1.5)), 1.5, 1e-12));
        assert!(close(in_rankine(rankine(520.0)), 520.0, 1e-12));
        assert!(close(in_fahrenheit(fahrenheit(150.0)), 150.0, 1e-12));
    }

    #[test]
    fn cross_unit_identities() {
        // one foot is twelve inches
        assert!(close(in_inches(ft(1.0)), 12.0, 1e-12));
        // one barrel is 42 US gallons
        assert!(close(in_gal(bbl(1.0)), 42.0, 1e-9));
        // one sg of mud is 8.33 ppg
        assert!(close(in_ppg(sg(1.0)), 8.33, 1e-12));
        // one ppg is 7.4805 lb/ft3
        assert!(close(in_lb_per_ft3(ppg(1.0)), 7.480_52, 1e-5));
        // md*ft composes from md and ft
        assert!(close(in_md_ft(md(100.0) * ft(0.5)), 50.0, 1e-12));
        assert!(close(SurfaceTension::dyn_per_cm(30.0).in_n_per_m(), 0.03, 1e-12));
        // one acre-foot is 7758.4 bbl
        assert!(close(in_bbl(acre_ft(1.0)), 7_758.367, 1e-6));
        assert!(close(in_hours(days(1.0)), 24.0, 1e-12));
        assert!(close(in_kg_m3(g_per_cm3(2.65)), 2_650.0, 1e-12));
    }

    #[test]
    fn pressure_gradient_composes_from_pressure_and_length() {
        let g = psi_per_ft(0.433);
        assert!(close(in_psi_per_ft(g), 0.433, 1e-12));
        let p = g * ft(1_000.0);
        assert!(close(in_psi(p), 433.0, 1e-12));
        assert!(close(in_pa_per_m(pa_per_m(9_806.65)), 9_806.65, 1e-12));
        let j: ProductivityIndex = bbl_per_day(500.0) / psi(250.0);
        assert!(close(in_bbl_per_day_per_psi(j), 2.0, 1e-12));
    }
}
