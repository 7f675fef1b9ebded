//! Length and distance measurement.
//!
//! Four measurement systems: metric, imperial, astronomical (light travel
//! distances) and nautical. The nautical system holds the single trailing
//! unit and never normalizes.

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};
use std::time::Duration;

use crate::quantity::{Quantity, UnitOfMeasure};
use crate::units::area::{Area, AreaUnit};
use crate::units::velocity::{Velocity, VelocityUnit};

/// Units of measure for length or distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    // Metric common
    Femtometer,
    Picometer,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    // Metric rare
    Decimeter,
    Decameter,
    Hectometer,
    Megameter,
    // Imperial common
    Inch,
    Foot,
    Yard,
    Mile,
    // Imperial rare
    Microinch,
    // Astronomical
    LightSecond,
    LightMinute,
    LightHour,
    LightDay,
    LightWeek,
    LightYear,
    // Nautical
    NauticalMile,
}

/// Measurement systems for length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthSystem {
    Metric,
    Imperial,
    Astronomical,
    Nautical,
}

/// A measurement of length or distance.
pub type Length = Quantity<LengthUnit>;

/// Normalization candidates per system, largest unit first. Rare units
/// (decimeters through megameters, microinches) are excluded.
const METRIC_STANDARD: &[LengthUnit] = &[
    LengthUnit::Kilometer,
    LengthUnit::Meter,
    LengthUnit::Centimeter,
    LengthUnit::Millimeter,
    LengthUnit::Micrometer,
    LengthUnit::Nanometer,
    LengthUnit::Picometer,
    LengthUnit::Femtometer,
];
const IMPERIAL_STANDARD: &[LengthUnit] = &[
    LengthUnit::Mile,
    LengthUnit::Yard,
    LengthUnit::Foot,
    LengthUnit::Inch,
];
const ASTRONOMICAL_STANDARD: &[LengthUnit] = &[
    LengthUnit::LightYear,
    LengthUnit::LightWeek,
    LengthUnit::LightDay,
    LengthUnit::LightHour,
    LengthUnit::LightMinute,
    LengthUnit::LightSecond,
];

impl UnitOfMeasure for LengthUnit {
    type System = LengthSystem;

    const BASE: Self = LengthUnit::Meter;

    const ALL: &'static [Self] = &[
        LengthUnit::Femtometer,
        LengthUnit::Picometer,
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Decimeter,
        LengthUnit::Decameter,
        LengthUnit::Hectometer,
        LengthUnit::Megameter,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
        LengthUnit::Microinch,
        LengthUnit::LightSecond,
        LengthUnit::LightMinute,
        LengthUnit::LightHour,
        LengthUnit::LightDay,
        LengthUnit::LightWeek,
        LengthUnit::LightYear,
        LengthUnit::NauticalMile,
    ];

    /// Meters per one of this unit.
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Femtometer => 1e-15,
            LengthUnit::Picometer => 1e-12,
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Decimeter => 1e-1,
            LengthUnit::Meter => 1.0,
            LengthUnit::Decameter => 1e1,
            LengthUnit::Hectometer => 1e2,
            LengthUnit::Kilometer => 1e3,
            LengthUnit::Megameter => 1e6,
            LengthUnit::Microinch => 2.54e-8,
            LengthUnit::Inch => 2.54e-2,
            LengthUnit::Foot => 3.048e-1,
            LengthUnit::Yard => 9.144e-1,
            LengthUnit::Mile => 1.609344e3,
            LengthUnit::NauticalMile => 1.852e3,
            LengthUnit::LightSecond => 2.99792458e8,
            LengthUnit::LightMinute => 1.798754748e10,
            LengthUnit::LightHour => 1.0792528488e12,
            LengthUnit::LightDay => 2.59020684e13,
            LengthUnit::LightWeek => 1.81314478598e14,
            LengthUnit::LightYear => 9.460730472580e15,
        }
    }

    fn system(self) -> LengthSystem {
        match self {
            LengthUnit::Femtometer
            | LengthUnit::Picometer
            | LengthUnit::Nanometer
            | LengthUnit::Micrometer
            | LengthUnit::Millimeter
            | LengthUnit::Centimeter
            | LengthUnit::Meter
            | LengthUnit::Kilometer
            | LengthUnit::Decimeter
            | LengthUnit::Decameter
            | LengthUnit::Hectometer
            | LengthUnit::Megameter => LengthSystem::Metric,
            LengthUnit::Inch
            | LengthUnit::Foot
            | LengthUnit::Yard
            | LengthUnit::Mile
            | LengthUnit::Microinch => LengthSystem::Imperial,
            LengthUnit::LightSecond
            | LengthUnit::LightMinute
            | LengthUnit::LightHour
            | LengthUnit::LightDay
            | LengthUnit::LightWeek
            | LengthUnit::LightYear => LengthSystem::Astronomical,
            LengthUnit::NauticalMile => LengthSystem::Nautical,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Femtometer => "fm",
            LengthUnit::Picometer => "pm",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Decimeter => "dm",
            LengthUnit::Decameter => "da",
            LengthUnit::Hectometer => "hm",
            LengthUnit::Megameter => "Mm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::Microinch => "µin",
            LengthUnit::LightSecond => "lhs",
            LengthUnit::LightMinute => "lm",
            LengthUnit::LightHour => "lh",
            LengthUnit::LightDay => "ld",
            LengthUnit::LightWeek => "lw",
            LengthUnit::LightYear => "ly",
            LengthUnit::NauticalMile => "Nm",
        }
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Femtometer => "femtometers",
            LengthUnit::Picometer => "picometers",
            LengthUnit::Nanometer => "nanometers",
            LengthUnit::Micrometer => "micrometers",
            LengthUnit::Millimeter => "millimeters",
            LengthUnit::Centimeter => "centimeters",
            LengthUnit::Meter => "meters",
            LengthUnit::Kilometer => "kilometers",
            LengthUnit::Decimeter => "decimeters",
            LengthUnit::Decameter => "decameters",
            LengthUnit::Hectometer => "hectometers",
            LengthUnit::Megameter => "megameters",
            LengthUnit::Inch => "inches",
            LengthUnit::Foot => "feet",
            LengthUnit::Yard => "yards",
            LengthUnit::Mile => "miles",
            LengthUnit::Microinch => "microinches",
            LengthUnit::LightSecond => "light-seconds",
            LengthUnit::LightMinute => "light-minutes",
            LengthUnit::LightHour => "light-hours",
            LengthUnit::LightDay => "light-days",
            LengthUnit::LightWeek => "light-weeks",
            LengthUnit::LightYear => "light-years",
            LengthUnit::NauticalMile => "nautical miles",
        }
    }

    fn standard_units(system: LengthSystem) -> &'static [Self] {
        match system {
            LengthSystem::Metric => METRIC_STANDARD,
            LengthSystem::Imperial => IMPERIAL_STANDARD,
            LengthSystem::Astronomical => ASTRONOMICAL_STANDARD,
            LengthSystem::Nautical => &[],
        }
    }

    fn is_metric(system: LengthSystem) -> bool {
        system == LengthSystem::Metric
    }
}

/// Length × length = area. The result stays in the left operand's system:
/// imperial lengths multiply in feet and yield square feet, everything else
/// multiplies in meters and yields square meters.
impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Length) -> Area {
        match self.system() {
            LengthSystem::Imperial => Area::new(
                self.value_in(LengthUnit::Foot) * rhs.value_in(LengthUnit::Foot),
                AreaUnit::SquareFoot,
            ),
            _ => Area::new(
                self.value_in(LengthUnit::Meter) * rhs.value_in(LengthUnit::Meter),
                AreaUnit::SquareMeter,
            ),
        }
    }
}

/// Length ÷ elapsed time = average velocity.
///
/// The result unit follows the length's system. Metric distances pick km/h
/// when the source unit is the kilometer and m/s otherwise; imperial
/// distances give miles per hour, astronomical ones a multiple of the speed
/// of light, and nautical ones knots.
impl Div<Duration> for Length {
    type Output = Velocity;

    fn div(self, rhs: Duration) -> Velocity {
        let seconds = rhs.as_secs_f64();
        let hours = seconds / 3600.0;
        match self.system() {
            LengthSystem::Metric => {
                if self.unit() == LengthUnit::Kilometer {
                    Velocity::new(self.value() / hours, VelocityUnit::KilometerPerHour)
                } else {
                    Velocity::new(
                        self.value_in(LengthUnit::Meter) / seconds,
                        VelocityUnit::MeterPerSecond,
                    )
                }
            }
            LengthSystem::Imperial => Velocity::new(
                self.value_in(LengthUnit::Mile) / hours,
                VelocityUnit::MilePerHour,
            ),
            LengthSystem::Astronomical => Velocity::new(
                self.value_in(LengthUnit::LightSecond) / seconds,
                VelocityUnit::SpeedOfLight,
            ),
            LengthSystem::Nautical => Velocity::new(
                self.value_in(LengthUnit::NauticalMile) / hours,
                VelocityUnit::Knot,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_unit_factor_is_one() {
        assert_eq!(LengthUnit::BASE.factor(), 1.0);
    }

    #[test]
    fn test_system_classification() {
        assert_eq!(LengthUnit::Megameter.system(), LengthSystem::Metric);
        assert_eq!(LengthUnit::Microinch.system(), LengthSystem::Imperial);
        assert_eq!(LengthUnit::LightYear.system(), LengthSystem::Astronomical);
        assert_eq!(LengthUnit::NauticalMile.system(), LengthSystem::Nautical);
    }

    #[test]
    fn test_conversion_meter_to_inch() {
        let q = Length::new(1.0, LengthUnit::Meter);
        assert_relative_eq!(q.value_in(LengthUnit::Inch), 39.3700787, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_millimeters_to_meters() {
        let mut q = Length::new(1034.0, LengthUnit::Millimeter);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::Meter);
        assert_relative_eq!(q.value(), 1.034);
    }

    #[test]
    fn test_normalize_inches_to_feet() {
        let mut q = Length::new(34.5, LengthUnit::Inch);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::Foot);
        assert_relative_eq!(q.value(), 2.875, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_power_of_ten_boundary() {
        // log10(999 mm in m) is just below 0, but the non-strict threshold
        // on log10(999) + log10(1e-3 / 1.0) picks the meter anyway.
        let mut q = Length::new(999.0, LengthUnit::Millimeter);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::Meter);
        assert_relative_eq!(q.value(), 0.999);
    }

    #[test]
    fn test_normalize_excludes_rare_units() {
        let mut q = Length::new(25.0, LengthUnit::Decimeter);
        q.normalize();
        // 2.5 m, never 2.5 dam or similar rare units.
        assert_eq!(q.unit(), LengthUnit::Meter);
        assert_relative_eq!(q.value(), 2.5);
    }

    #[test]
    fn test_normalize_zero_metric_resets_to_meter() {
        let mut q = Length::new(0.0, LengthUnit::Kilometer);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::Meter);
        assert_eq!(q.value(), 0.0);
    }

    #[test]
    fn test_normalize_zero_imperial_unchanged() {
        let mut q = Length::new(0.0, LengthUnit::Inch);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::Inch);
    }

    #[test]
    fn test_normalize_nautical_is_noop() {
        let mut q = Length::new(0.004, LengthUnit::NauticalMile);
        q.normalize();
        assert_eq!(q.unit(), LengthUnit::NauticalMile);
        assert_eq!(q.value(), 0.004);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut q = Length::new(1034.0, LengthUnit::Millimeter);
        q.normalize();
        let once = q;
        q.normalize();
        assert_eq!(q.unit(), once.unit());
        assert_eq!(q.value(), once.value());
    }

    #[test]
    fn test_metric_lengths_multiply_to_square_meters() {
        let l = Length::new(1.45, LengthUnit::Meter);
        let a = l * l;
        assert_eq!(a.unit(), AreaUnit::SquareMeter);
        assert_relative_eq!(a.value(), 1.45 * 1.45);
    }

    #[test]
    fn test_imperial_lengths_multiply_to_square_feet() {
        let l = Length::new(2.0, LengthUnit::Yard);
        let a = l * l;
        assert_eq!(a.unit(), AreaUnit::SquareFoot);
        assert_relative_eq!(a.value(), 36.0, epsilon = 1e-9);
    }

    #[test]
    fn test_kilometers_over_time_give_kmh() {
        // 15.3 km in 13 minutes and 25 seconds.
        let distance = Length::new(15.3, LengthUnit::Kilometer);
        let speed = distance / Duration::from_secs(13 * 60 + 25);
        assert_eq!(speed.unit(), VelocityUnit::KilometerPerHour);
        assert_relative_eq!(speed.value(), 15.3 / (805.0 / 3600.0), epsilon = 1e-9);
    }

    #[test]
    fn test_meters_over_time_give_mps() {
        let distance = Length::new(100.0, LengthUnit::Meter);
        let speed = distance / Duration::from_secs(20);
        assert_eq!(speed.unit(), VelocityUnit::MeterPerSecond);
        assert_relative_eq!(speed.value(), 5.0);
    }

    #[test]
    fn test_nautical_miles_over_time_give_knots() {
        let distance = Length::new(30.0, LengthUnit::NauticalMile);
        let speed = distance / Duration::from_secs(2 * 3600);
        assert_eq!(speed.unit(), VelocityUnit::Knot);
        assert_relative_eq!(speed.value(), 15.0);
    }

    #[test]
    fn test_light_distance_over_time_gives_speed_of_light_multiple() {
        let distance = Length::new(2.0, LengthUnit::LightSecond);
        let speed = distance / Duration::from_secs(1);
        assert_eq!(speed.unit(), VelocityUnit::SpeedOfLight);
        assert_relative_eq!(speed.value(), 2.0);
    }
}
