//! Velocity measurement.
//!
//! Derived from length over time, so the cross-kind operators live here
//! and in [`crate::units::length`]. The astronomical system (multiples of
//! the speed of sound and of light) carries no normalization candidates
//! and refuses the velocity × time product.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::QuantityError;
use crate::quantity::{Quantity, UnitOfMeasure};
use crate::units::length::{Length, LengthUnit};

/// Units of measure for velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VelocityUnit {
    // Metric
    MeterPerSecond,
    KilometerPerHour,
    MillimeterPerMinute,
    MillimeterPerSecond,
    CentimeterPerMinute,
    CentimeterPerSecond,
    MeterPerMinute,
    // Imperial
    MilePerHour,
    InchPerSecond,
    FootPerHour,
    FootPerMinute,
    FootPerSecond,
    MilePerMinute,
    // Astronomical
    SpeedOfSound,
    SpeedOfLight,
    // Nautical
    Knot,
}

/// Measurement systems for velocity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VelocitySystem {
    Metric,
    Imperial,
    Astronomical,
    Nautical,
}

/// A measurement of velocity.
pub type Velocity = Quantity<VelocityUnit>;

const METRIC_STANDARD: &[VelocityUnit] = &[
    VelocityUnit::KilometerPerHour,
    VelocityUnit::MeterPerSecond,
];
const IMPERIAL_STANDARD: &[VelocityUnit] = &[VelocityUnit::MilePerHour];

impl UnitOfMeasure for VelocityUnit {
    type System = VelocitySystem;

    const BASE: Self = VelocityUnit::MeterPerSecond;

    const ALL: &'static [Self] = &[
        VelocityUnit::MeterPerSecond,
        VelocityUnit::KilometerPerHour,
        VelocityUnit::MillimeterPerMinute,
        VelocityUnit::MillimeterPerSecond,
        VelocityUnit::CentimeterPerMinute,
        VelocityUnit::CentimeterPerSecond,
        VelocityUnit::MeterPerMinute,
        VelocityUnit::MilePerHour,
        VelocityUnit::InchPerSecond,
        VelocityUnit::FootPerHour,
        VelocityUnit::FootPerMinute,
        VelocityUnit::FootPerSecond,
        VelocityUnit::MilePerMinute,
        VelocityUnit::SpeedOfSound,
        VelocityUnit::SpeedOfLight,
        VelocityUnit::Knot,
    ];

    /// Meters per second per one of this unit.
    fn factor(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::KilometerPerHour => 0.277778,
            VelocityUnit::MillimeterPerMinute => 1.66667e-5,
            VelocityUnit::MillimeterPerSecond => 1e-3,
            VelocityUnit::CentimeterPerMinute => 1.66667e-4,
            VelocityUnit::CentimeterPerSecond => 1e-2,
            VelocityUnit::MeterPerMinute => 1.66667e-2,
            VelocityUnit::MilePerHour => 0.44704,
            VelocityUnit::InchPerSecond => 2.54e-2,
            VelocityUnit::FootPerHour => 8.46667e-5,
            VelocityUnit::FootPerMinute => 5.08e-3,
            VelocityUnit::FootPerSecond => 0.3048,
            VelocityUnit::MilePerMinute => 26.8224,
            VelocityUnit::SpeedOfSound => 3.432e2,
            VelocityUnit::SpeedOfLight => 2.99792e8,
            VelocityUnit::Knot => 0.514444,
        }
    }

    fn system(self) -> VelocitySystem {
        match self {
            VelocityUnit::MeterPerSecond
            | VelocityUnit::KilometerPerHour
            | VelocityUnit::MillimeterPerMinute
            | VelocityUnit::MillimeterPerSecond
            | VelocityUnit::CentimeterPerMinute
            | VelocityUnit::CentimeterPerSecond
            | VelocityUnit::MeterPerMinute => VelocitySystem::Metric,
            VelocityUnit::MilePerHour
            | VelocityUnit::InchPerSecond
            | VelocityUnit::FootPerHour
            | VelocityUnit::FootPerMinute
            | VelocityUnit::FootPerSecond
            | VelocityUnit::MilePerMinute => VelocitySystem::Imperial,
            VelocityUnit::SpeedOfSound | VelocityUnit::SpeedOfLight => {
                VelocitySystem::Astronomical
            }
            VelocityUnit::Knot => VelocitySystem::Nautical,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "ms",
            VelocityUnit::KilometerPerHour => "kmh",
            VelocityUnit::MillimeterPerMinute => "mm/min",
            VelocityUnit::MillimeterPerSecond => "mm/s",
            VelocityUnit::CentimeterPerMinute => "cm/min",
            VelocityUnit::CentimeterPerSecond => "cm/s",
            VelocityUnit::MeterPerMinute => "m/min",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::InchPerSecond => "in/s",
            VelocityUnit::FootPerHour => "ft/h",
            VelocityUnit::FootPerMinute => "ft/min",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MilePerMinute => "mi/min",
            VelocityUnit::SpeedOfSound => "x speed of sound",
            VelocityUnit::SpeedOfLight => "x speed of light",
            VelocityUnit::Knot => "kn",
        }
    }

    fn name(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "meters per second",
            VelocityUnit::KilometerPerHour => "kilometers per hour",
            VelocityUnit::MillimeterPerMinute => "millimeters per minute",
            VelocityUnit::MillimeterPerSecond => "millimeters per second",
            VelocityUnit::CentimeterPerMinute => "centimeters per minute",
            VelocityUnit::CentimeterPerSecond => "centimeters per second",
            VelocityUnit::MeterPerMinute => "meters per minute",
            VelocityUnit::MilePerHour => "miles per hour",
            VelocityUnit::InchPerSecond => "inches per second",
            VelocityUnit::FootPerHour => "feet per hour",
            VelocityUnit::FootPerMinute => "feet per minute",
            VelocityUnit::FootPerSecond => "feet per second",
            VelocityUnit::MilePerMinute => "miles per minute",
            VelocityUnit::SpeedOfSound => "times the speed of sound",
            VelocityUnit::SpeedOfLight => "times the speed of light",
            VelocityUnit::Knot => "knots",
        }
    }

    fn standard_units(system: VelocitySystem) -> &'static [Self] {
        match system {
            VelocitySystem::Metric => METRIC_STANDARD,
            VelocitySystem::Imperial => IMPERIAL_STANDARD,
            VelocitySystem::Astronomical | VelocitySystem::Nautical => &[],
        }
    }

    fn is_metric(system: VelocitySystem) -> bool {
        system == VelocitySystem::Metric
    }
}

impl Velocity {
    /// Velocity × elapsed time = distance covered.
    ///
    /// The distance unit follows the velocity's system: km/h gives
    /// kilometers, other metric speeds meters, imperial speeds miles,
    /// nautical speeds nautical miles. Astronomical speeds have no
    /// sensible distance unit here and return
    /// [`QuantityError::UnsupportedOperation`].
    pub fn checked_mul(self, elapsed: Duration) -> Result<Length, QuantityError> {
        let seconds = elapsed.as_secs_f64();
        let hours = seconds / 3600.0;
        match self.system() {
            VelocitySystem::Metric => {
                if self.unit() == VelocityUnit::KilometerPerHour {
                    Ok(Length::new(self.value() * hours, LengthUnit::Kilometer))
                } else {
                    Ok(Length::new(
                        self.value_in(VelocityUnit::MeterPerSecond) * seconds,
                        LengthUnit::Meter,
                    ))
                }
            }
            VelocitySystem::Imperial => Ok(Length::new(
                self.value_in(VelocityUnit::MilePerHour) * hours,
                LengthUnit::Mile,
            )),
            VelocitySystem::Nautical => Ok(Length::new(
                self.value_in(VelocityUnit::Knot) * hours,
                LengthUnit::NauticalMile,
            )),
            VelocitySystem::Astronomical => Err(QuantityError::unsupported(
                "velocity × time",
                VelocitySystem::Astronomical,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_unit_factor_is_one() {
        assert_eq!(VelocityUnit::BASE.factor(), 1.0);
    }

    #[test]
    fn test_system_classification() {
        assert_eq!(VelocityUnit::MeterPerMinute.system(), VelocitySystem::Metric);
        assert_eq!(VelocityUnit::MilePerMinute.system(), VelocitySystem::Imperial);
        assert_eq!(VelocityUnit::SpeedOfLight.system(), VelocitySystem::Astronomical);
        assert_eq!(VelocityUnit::Knot.system(), VelocitySystem::Nautical);
    }

    #[test]
    fn test_conversion_kmh_to_mph() {
        let v = Velocity::new(100.0, VelocityUnit::KilometerPerHour);
        assert_relative_eq!(
            v.value_in(VelocityUnit::MilePerHour),
            100.0 * 0.277778 / 0.44704,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_normalize_metric_speed_to_kmh() {
        let mut v = Velocity::new(500.0, VelocityUnit::CentimeterPerSecond);
        v.normalize();
        assert_eq!(v.unit(), VelocityUnit::KilometerPerHour);
        assert_relative_eq!(v.value(), 500.0 * 1e-2 / 0.277778, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_keeps_unit_when_no_candidate_fits() {
        // Below one in every standard unit, so the scan selects nothing.
        let mut v = Velocity::new(0.9, VelocityUnit::KilometerPerHour);
        v.normalize();
        assert_eq!(v.unit(), VelocityUnit::KilometerPerHour);
        assert_relative_eq!(v.value(), 0.9);
    }

    #[test]
    fn test_normalize_fast_speed_keeps_kmh() {
        let mut v = Velocity::new(68.4, VelocityUnit::KilometerPerHour);
        v.normalize();
        assert_eq!(v.unit(), VelocityUnit::KilometerPerHour);
        assert_relative_eq!(v.value(), 68.4);
    }

    #[test]
    fn test_normalize_imperial_to_mph() {
        let mut v = Velocity::new(88.0, VelocityUnit::FootPerSecond);
        v.normalize();
        assert_eq!(v.unit(), VelocityUnit::MilePerHour);
        assert_relative_eq!(v.value(), 88.0 * 0.3048 / 0.44704, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_knot_is_noop() {
        let mut v = Velocity::new(0.02, VelocityUnit::Knot);
        v.normalize();
        assert_eq!(v.unit(), VelocityUnit::Knot);
        assert_eq!(v.value(), 0.02);
    }

    #[test]
    fn test_kmh_times_duration_gives_kilometers() {
        let v = Velocity::new(68.4, VelocityUnit::KilometerPerHour);
        let d = v.checked_mul(Duration::from_secs(30 * 60)).unwrap();
        assert_eq!(d.unit(), LengthUnit::Kilometer);
        assert_relative_eq!(d.value(), 34.2);
    }

    #[test]
    fn test_mps_times_duration_gives_meters() {
        let v = Velocity::new(5.0, VelocityUnit::MeterPerSecond);
        let d = v.checked_mul(Duration::from_secs(20)).unwrap();
        assert_eq!(d.unit(), LengthUnit::Meter);
        assert_relative_eq!(d.value(), 100.0);
    }

    #[test]
    fn test_mph_times_duration_gives_miles() {
        let v = Velocity::new(60.0, VelocityUnit::MilePerHour);
        let d = v.checked_mul(Duration::from_secs(90 * 60)).unwrap();
        assert_eq!(d.unit(), LengthUnit::Mile);
        assert_relative_eq!(d.value(), 90.0);
    }

    #[test]
    fn test_knots_times_duration_gives_nautical_miles() {
        let v = Velocity::new(12.0, VelocityUnit::Knot);
        let d = v.checked_mul(Duration::from_secs(3600)).unwrap();
        assert_eq!(d.unit(), LengthUnit::NauticalMile);
        assert_relative_eq!(d.value(), 12.0);
    }

    #[test]
    fn test_astronomical_speed_times_duration_is_unsupported() {
        let v = Velocity::new(1.0, VelocityUnit::SpeedOfLight);
        let err = v.checked_mul(Duration::from_secs(1)).unwrap_err();
        assert!(matches!(
            err,
            QuantityError::UnsupportedOperation { operation: "velocity × time", .. }
        ));
    }
}
