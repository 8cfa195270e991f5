//! Text-tagged units and dimension-checked conversions.
//!
//! Typed `uom` quantities cover the inside of the engine. This module covers
//! the edge where a unit arrives as a label (`"ppg"`, `"psi"`, `"bbl/min"`):
//! each [`UnitTag`] knows its [`Dimension`] and an affine map onto SI, so a
//! conversion is `si = value * scale + offset` followed by the inverse map of
//! the target unit. Converting across dimensions is an error, never a guess.

use crate::error::{PeError, PeResult};
use crate::units::factors;
use std::fmt;
use std::str::FromStr;

/// Physical dimension family of a unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Pressure,
    Length,
    /// Mass density, including mud weight.
    Density,
    PressureGradient,
    Volume,
    VolumeRate,
    Viscosity,
    Velocity,
    Time,
    Temperature,
    Mass,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "Pressure"),
            Self::Length => write!(f, "Length"),
            Self::Density => write!(f, "Density"),
            Self::PressureGradient => write!(f, "Pressure Gradient"),
            Self::Volume => write!(f, "Volume"),
            Self::VolumeRate => write!(f, "Volume Rate"),
            Self::Viscosity => write!(f, "Viscosity"),
            Self::Velocity => write!(f, "Velocity"),
            Self::Time => write!(f, "Time"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Mass => write!(f, "Mass"),
        }
    }
}

/// A unit accepted at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitTag {
    // Pressure
    Pascal,
    Kilopascal,
    Megapascal,
    Bar,
    Atmosphere,
    Psi,
    // Length
    Meter,
    Centimeter,
    Foot,
    Inch,
    Mile,
    // Density / mud weight
    KgPerM3,
    GPerCm3,
    Ppg,
    SpecificGravity,
    LbPerFt3,
    // Pressure gradient
    PaPerM,
    KpaPerM,
    PsiPerFt,
    // Volume
    CubicMeter,
    Barrel,
    Gallon,
    CubicFoot,
    // Volume rate
    CubicMeterPerSecond,
    CubicFootPerSecond,
    BarrelPerSecond,
    BarrelPerMinute,
    BarrelPerDay,
    GallonPerMinute,
    // Viscosity
    PascalSecond,
    Centipoise,
    // Velocity
    MeterPerSecond,
    FootPerSecond,
    FootPerMinute,
    // Time
    Second,
    Minute,
    Hour,
    Day,
    // Temperature
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
    // Mass
    Kilogram,
    PoundMass,
}

impl UnitTag {
    /// Every supported tag, in declaration order.
    pub const ALL: [UnitTag; 44] = [
        Self::Pascal,
        Self::Kilopascal,
        Self::Megapascal,
        Self::Bar,
        Self::Atmosphere,
        Self::Psi,
        Self::Meter,
        Self::Centimeter,
        Self::Foot,
        Self::Inch,
        Self::Mile,
        Self::KgPerM3,
        Self::GPerCm3,
        Self::Ppg,
        Self::SpecificGravity,
        Self::LbPerFt3,
        Self::PaPerM,
        Self::KpaPerM,
        Self::PsiPerFt,
        Self::CubicMeter,
        Self::Barrel,
        Self::Gallon,
        Self::CubicFoot,
        Self::CubicMeterPerSecond,
        Self::CubicFootPerSecond,
        Self::BarrelPerSecond,
        Self::BarrelPerMinute,
        Self::BarrelPerDay,
        Self::GallonPerMinute,
        Self::PascalSecond,
        Self::Centipoise,
        Self::MeterPerSecond,
        Self::FootPerSecond,
        Self::FootPerMinute,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Kelvin,
        Self::Celsius,
        Self::Fahrenheit,
        Self::Rankine,
        Self::Kilogram,
        Self::PoundMass,
    ];

    pub fn dimension(self) -> Dimension {
        use UnitTag::*;
        match self {
            Pascal | Kilopascal | Megapascal | Bar | Atmosphere | Psi => Dimension::Pressure,
            Meter | Centimeter | Foot | Inch | Mile => Dimension::Length,
            KgPerM3 | GPerCm3 | Ppg | SpecificGravity | LbPerFt3 => Dimension::Density,
            PaPerM | KpaPerM | PsiPerFt => Dimension::PressureGradient,
            CubicMeter | Barrel | Gallon | CubicFoot => Dimension::Volume,
            CubicMeterPerSecond | CubicFootPerSecond | BarrelPerSecond | BarrelPerMinute
            | BarrelPerDay | GallonPerMinute => Dimension::VolumeRate,
            PascalSecond | Centipoise => Dimension::Viscosity,
            MeterPerSecond | FootPerSecond | FootPerMinute => Dimension::Velocity,
            Second | Minute | Hour | Day => Dimension::Time,
            Kelvin | Celsius | Fahrenheit | Rankine => Dimension::Temperature,
            Kilogram | PoundMass => Dimension::Mass,
        }
    }

    /// Canonical label, as accepted by [`UnitTag::from_str`].
    pub fn symbol(self) -> &'static str {
        use UnitTag::*;
        match self {
            Pascal => "Pa",
            Kilopascal => "kPa",
            Megapascal => "MPa",
            Bar => "bar",
            Atmosphere => "atm",
            Psi => "psi",
            Meter => "m",
            Centimeter => "cm",
            Foot => "ft",
            Inch => "in",
            Mile => "mile",
            KgPerM3 => "kg/m3",
            GPerCm3 => "g/cm3",
            Ppg => "ppg",
            SpecificGravity => "sg",
            LbPerFt3 => "lb/ft3",
            PaPerM => "Pa/m",
            KpaPerM => "kPa/m",
            PsiPerFt => "psi/ft",
            CubicMeter => "m3",
            Barrel => "bbl",
            Gallon => "gal",
            CubicFoot => "ft3",
            CubicMeterPerSecond => "m3/s",
            CubicFootPerSecond => "ft3/s",
            BarrelPerSecond => "bbl/s",
            BarrelPerMinute => "bbl/min",
            BarrelPerDay => "bbl/day",
            GallonPerMinute => "gpm",
            PascalSecond => "Pa.s",
            Centipoise => "cP",
            MeterPerSecond => "m/s",
            FootPerSecond => "ft/s",
            FootPerMinute => "ft/min",
            Second => "s",
            Minute => "min",
            Hour => "hr",
            Day => "day",
            Kelvin => "K",
            Celsius => "degC",
            Fahrenheit => "degF",
            Rankine => "degR",
            Kilogram => "kg",
            PoundMass => "lbm",
        }
    }

    /// Affine map onto SI: `si = value * scale + offset`.
    fn to_si(self) -> (f64, f64) {
        use UnitTag::*;
        use factors::*;
        match self {
            Pascal => (1.0, 0.0),
            Kilopascal => (KPA_TO_PA, 0.0),
            Megapascal => (MPA_TO_PA, 0.0),
            Bar => (BAR_TO_PA, 0.0),
            Atmosphere => (ATM_TO_PA, 0.0),
            Psi => (PSI_TO_PA, 0.0),
            Meter => (1.0, 0.0),
            Centimeter => (CM_TO_M, 0.0),
            Foot => (FT_TO_M, 0.0),
            Inch => (IN_TO_M, 0.0),
            Mile => (MILE_TO_M, 0.0),
            KgPerM3 => (1.0, 0.0),
            GPerCm3 => (G_CM3_TO_KG_M3, 0.0),
            Ppg => (PPG_TO_KG_M3, 0.0),
            SpecificGravity => (WATER_PPG * PPG_TO_KG_M3, 0.0),
            LbPerFt3 => (LB_FT3_TO_KG_M3, 0.0),
            PaPerM => (1.0, 0.0),
            KpaPerM => (KPA_TO_PA, 0.0),
            PsiPerFt => (PSI_TO_PA / FT_TO_M, 0.0),
            CubicMeter => (1.0, 0.0),
            Barrel => (BBL_TO_M3, 0.0),
            Gallon => (GAL_TO_M3, 0.0),
            CubicFoot => (FT3_TO_M3, 0.0),
            CubicMeterPerSecond => (1.0, 0.0),
            CubicFootPerSecond => (FT3_TO_M3, 0.0),
            BarrelPerSecond => (BBL_TO_M3, 0.0),
            BarrelPerMinute => (BBL_TO_M3 / MINUTE_TO_S, 0.0),
            BarrelPerDay => (BBL_TO_M3 / DAY_TO_S, 0.0),
            GallonPerMinute => (GAL_TO_M3 / MINUTE_TO_S, 0.0),
            PascalSecond => (1.0, 0.0),
            Centipoise => (CP_TO_PA_S, 0.0),
            MeterPerSecond => (1.0, 0.0),
            FootPerSecond => (FT_TO_M, 0.0),
            FootPerMinute => (FT_TO_M / MINUTE_TO_S, 0.0),
            Second => (1.0, 0.0),
            Minute => (MINUTE_TO_S, 0.0),
            Hour => (HOUR_TO_S, 0.0),
            Day => (DAY_TO_S, 0.0),
            Kelvin => (1.0, 0.0),
            Celsius => (1.0, CELSIUS_KELVIN_OFFSET),
            Fahrenheit => (
                1.0 / RANKINE_PER_KELVIN,
                FAHRENHEIT_RANKINE_OFFSET / RANKINE_PER_KELVIN,
            ),
            Rankine => (1.0 / RANKINE_PER_KELVIN, 0.0),
            Kilogram => (1.0, 0.0),
            PoundMass => (LBM_TO_KG, 0.0),
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitTag {
    type Err = PeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use UnitTag::*;
        let normalized = s.trim().to_lowercase().replace(' ', "");
        let tag = match normalized.as_str() {
            "pa" | "pascal" => Pascal,
            "kpa" => Kilopascal,
            "mpa" => Megapascal,
            "bar" => Bar,
            "atm" => Atmosphere,
            "psi" | "psia" => Psi,
            "m" | "meter" | "meters" => Meter,
            "cm" => Centimeter,
            "ft" | "foot" | "feet" => Foot,
            "in" | "inch" | "inches" => Inch,
            "mile" | "miles" | "mi" => Mile,
            "kg/m3" | "kg/m^3" | "kg/m³" => KgPerM3,
            "g/cm3" | "g/cm^3" | "g/cc" => GPerCm3,
            "ppg" | "lb/gal" | "lbm/gal" => Ppg,
            "sg" | "specific_gravity" | "specificgravity" => SpecificGravity,
            "lb/ft3" | "lb/ft^3" | "lbm/ft3" | "pcf" => LbPerFt3,
            "pa/m" => PaPerM,
            "kpa/m" => KpaPerM,
            "psi/ft" => PsiPerFt,
            "m3" | "m^3" => CubicMeter,
            "bbl" | "barrel" | "barrels" => Barrel,
            "gal" | "gallon" | "gallons" => Gallon,
            "ft3" | "ft^3" | "cf" => CubicFoot,
            "m3/s" | "m^3/s" => CubicMeterPerSecond,
            "ft3/s" | "cfs" => CubicFootPerSecond,
            "bbl/s" | "bbl/sec" => BarrelPerSecond,
            "bbl/min" | "bpm" => BarrelPerMinute,
            "bbl/day" | "bbl/d" | "bpd" => BarrelPerDay,
            "gpm" | "gal/min" => GallonPerMinute,
            "pa.s" | "pa*s" | "pas" => PascalSecond,
            "cp" | "centipoise" => Centipoise,
            "m/s" => MeterPerSecond,
            "ft/s" | "ft/sec" | "fps" => FootPerSecond,
            "ft/min" => FootPerMinute,
            "s" | "sec" | "second" | "seconds" => Second,
            "min" | "minute" | "minutes" => Minute,
            "hr" | "h" | "hour" | "hours" => Hour,
            "day" | "days" | "d" => Day,
            "k" | "kelvin" => Kelvin,
            "c" | "degc" | "°c" | "celsius" => Celsius,
            "f" | "degf" | "°f" | "fahrenheit" => Fahrenheit,
            "r" | "degr" | "°r" | "rankine" => Rankine,
            "kg" => Kilogram,
            "lbm" => PoundMass,
            _ => {
                return Err(PeError::UnknownUnit {
                    unit: s.trim().to_string(),
                })
            }
        };
        Ok(tag)
    }
}

/// Convert `value` from one unit to another of the same dimension.
pub fn convert(value: f64, from: UnitTag, to: UnitTag) -> PeResult<f64> {
    if from.dimension() != to.dimension() {
        return Err(PeError::UnsupportedUnit {
            from: from.symbol().to_string(),
            to: to.symbol().to_string(),
        });
    }
    if from == to {
        return Ok(value);
    }
    let (from_scale, from_offset) = from.to_si();
    let (to_scale, to_offset) = to.to_si();
    let si = value * from_scale + from_offset;
    Ok((si - to_offset) / to_scale)
}

/// A numeric value carrying its unit label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedQuantity {
    pub value: f64,
    pub unit: UnitTag,
}

impl TaggedQuantity {
    pub fn new(value: f64, unit: UnitTag) -> Self {
        Self { value, unit }
    }

    /// Parse the unit label and attach it to `value`.
    pub fn parse(value: f64, unit: &str) -> PeResult<Self> {
        Ok(Self::new(value, unit.parse()?))
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Re-express in another unit of the same dimension.
    pub fn to(&self, unit: UnitTag) -> PeResult<Self> {
        Ok(Self::new(convert(self.value, self.unit, unit)?, unit))
    }

    /// Value in SI base units of its dimension.
    pub fn si_value(&self) -> f64 {
        let (scale, offset) = self.unit.to_si();
        self.value * scale + offset
    }

    /// Fail with `UnsupportedUnit` unless this quantity has the given dimension.
    pub fn expect_dimension(&self, dimension: Dimension) -> PeResult<&Self> {
        if self.dimension() == dimension {
            Ok(self)
        } else {
            Err(PeError::UnsupportedUnit {
                from: self.unit.symbol().to_string(),
                to: dimension.to_string(),
            })
        }
    }
}

impl fmt::Display for TaggedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        crate::nearly_equal(a, b, crate::Tolerances { abs: 1e-9, rel: 1e-9 })
    }

    #[test]
    fn parse_common_field_labels() {
        assert_eq!("ppg".parse::<UnitTag>().unwrap(), UnitTag::Ppg);
        assert_eq!(" PSI ".parse::<UnitTag>().unwrap(), UnitTag::Psi);
        assert_eq!("lb/ft3".parse::<UnitTag>().unwrap(), UnitTag::LbPerFt3);
        assert_eq!("pcf".parse::<UnitTag>().unwrap(), UnitTag::LbPerFt3);
        assert_eq!("bbl/min".parse::<UnitTag>().unwrap(), UnitTag::BarrelPerMinute);
        assert_eq!("cP".parse::<UnitTag>().unwrap(), UnitTag::Centipoise);
    }

    #[test]
    fn reject_unknown_label() {
        assert!(matches!(
            "furlong".parse::<UnitTag>(),
            Err(PeError::UnknownUnit { unit }) if unit == "furlong"
        ));
    }

    #[test]
    fn symbols_parse_back_to_their_tag() {
        for tag in UnitTag::ALL {
            assert_eq!(tag.symbol().parse::<UnitTag>().unwrap(), tag, "{tag:?}");
        }
    }

    #[test]
    fn inches_to_feet() {
        assert!(close(convert(6.0, UnitTag::Inch, UnitTag::Foot).unwrap(), 0.5));
    }

    #[test]
    fn barrels_per_minute_to_per_second() {
        let q = convert(60.0, UnitTag::BarrelPerMinute, UnitTag::BarrelPerSecond).unwrap();
        assert!(close(q, 1.0));
    }

    #[test]
    fn mud_weight_units() {
        assert!(close(convert(1.0, UnitTag::SpecificGravity, UnitTag::Ppg).unwrap(), 8.33));
        let pcf = convert(10.0, UnitTag::Ppg, UnitTag::LbPerFt3).unwrap();
        assert!((pcf - 74.805).abs() < 1e-2);
    }

    #[test]
    fn temperature_is_affine() {
        assert!(close(convert(32.0, UnitTag::Fahrenheit, UnitTag::Celsius).unwrap(), 0.0));
        assert!(close(convert(100.0, UnitTag::Celsius, UnitTag::Fahrenheit).unwrap(), 212.0));
        assert!(close(convert(60.0, UnitTag::Fahrenheit, UnitTag::Rankine).unwrap(), 519.67));
    }

    #[test]
    fn cross_dimension_is_unsupported() {
        let err = convert(1.0, UnitTag::Psi, UnitTag::Foot).unwrap_err();
        assert!(matches!(err, PeError::UnsupportedUnit { .. }));
        // mud weight is a density, not a gradient
        assert!(convert(12.0, UnitTag::Ppg, UnitTag::PsiPerFt).is_err());
    }

    #[test]
    fn tagged_quantity_conversion_and_dimension_guard() {
        let depth = TaggedQuantity::parse(120.0, "in").unwrap();
        let feet = depth.to(UnitTag::Foot).unwrap();
        assert!(close(feet.value, 10.0));
        assert!(depth.expect_dimension(Dimension::Length).is_ok());
        assert!(depth.expect_dimension(Dimension::Pressure).is_err());
        assert!(close(TaggedQuantity::new(1.0, UnitTag::Psi).si_value(), 6_894.757_293_168));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tag() -> impl Strategy<Value = UnitTag> {
        prop::sample::select(UnitTag::ALL.to_vec())
    }

    /// Two tags sharing a dimension (possibly the same tag).
    fn same_dimension_pair() -> impl Strategy<Value = (UnitTag, UnitTag)> {
        tag().prop_flat_map(|a| {
            let peers: Vec<UnitTag> = UnitTag::ALL
                .iter()
                .copied()
                .filter(|t| t.dimension() == a.dimension())
                .collect();
            (Just(a), prop::sample::select(peers))
        })
    }

    proptest! {
        #[test]
        fn round_trip_same_dimension((a, b) in same_dimension_pair(), value in -1.0e6_f64..1.0e6_f64) {
            let there = convert(value, a, b).unwrap();
            let back = convert(there, b, a).unwrap();
            let tol = crate::Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(crate::nearly_equal(back, value, tol), "{a:?} -> {b:?}: {value} -> {back}");
        }

        #[test]
        fn cross_dimension_always_fails(a in tag(), b in tag(), value in -1.0e3_f64..1.0e3_f64) {
            prop_assume!(a.dimension() != b.dimension());
            let is_unsupported = matches!(convert(value, a, b), Err(PeError::UnsupportedUnit { .. }));
            prop_assert!(is_unsupported);
        }
    }
}
