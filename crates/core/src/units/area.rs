//! Area measurement.
//!
//! Two measurement systems: metric (including the hectare) and imperial
//! (including the acre).

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::quantity::{Quantity, UnitOfMeasure};
use crate::units::length::{Length, LengthUnit};
use crate::units::volume::{Volume, VolumeUnit};

/// Units of measure for area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    // Metric common
    SquareFemtometer,
    SquarePicometer,
    SquareNanometer,
    SquareMicrometer,
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    Hectare,
    SquareKilometer,
    // Metric rare
    SquareDecimeter,
    SquareDecameter,
    SquareMegameter,
    // Imperial common
    SquareMicroinch,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
    SquareMile,
}

/// Measurement systems for area units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaSystem {
    Metric,
    Imperial,
}

/// A measurement of area.
pub type Area = Quantity<AreaUnit>;

const METRIC_STANDARD: &[AreaUnit] = &[
    AreaUnit::SquareKilometer,
    AreaUnit::Hectare,
    AreaUnit::SquareMeter,
    AreaUnit::SquareCentimeter,
    AreaUnit::SquareMillimeter,
    AreaUnit::SquareMicrometer,
    AreaUnit::SquareNanometer,
    AreaUnit::SquarePicometer,
    AreaUnit::SquareFemtometer,
];
const IMPERIAL_STANDARD: &[AreaUnit] = &[
    AreaUnit::SquareMile,
    AreaUnit::Acre,
    AreaUnit::SquareYard,
    AreaUnit::SquareFoot,
    AreaUnit::SquareInch,
    AreaUnit::SquareMicroinch,
];

impl UnitOfMeasure for AreaUnit {
    type System = AreaSystem;

    const BASE: Self = AreaUnit::SquareMeter;

    const ALL: &'static [Self] = &[
        AreaUnit::SquareFemtometer,
        AreaUnit::SquarePicometer,
        AreaUnit::SquareNanometer,
        AreaUnit::SquareMicrometer,
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::Hectare,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareDecimeter,
        AreaUnit::SquareDecameter,
        AreaUnit::SquareMegameter,
        AreaUnit::SquareMicroinch,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
        AreaUnit::SquareYard,
        AreaUnit::Acre,
        AreaUnit::SquareMile,
    ];

    /// Square meters per one of this unit.
    fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareFemtometer => 1e-30,
            AreaUnit::SquarePicometer => 1e-24,
            AreaUnit::SquareNanometer => 1e-18,
            AreaUnit::SquareMicrometer => 1e-12,
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareDecimeter => 1e-2,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareDecameter => 1e2,
            AreaUnit::Hectare => 1e4,
            AreaUnit::SquareKilometer => 1e6,
            AreaUnit::SquareMegameter => 1e12,
            AreaUnit::SquareMicroinch => 6.4516e-8,
            AreaUnit::SquareInch => 6.4516e-4,
            AreaUnit::SquareFoot => 9.2903e-2,
            AreaUnit::SquareYard => 0.836127,
            AreaUnit::Acre => 4.0468564224e3,
            AreaUnit::SquareMile => 2.589988110336e6,
        }
    }

    fn system(self) -> AreaSystem {
        match self {
            AreaUnit::SquareFemtometer
            | AreaUnit::SquarePicometer
            | AreaUnit::SquareNanometer
            | AreaUnit::SquareMicrometer
            | AreaUnit::SquareMillimeter
            | AreaUnit::SquareCentimeter
            | AreaUnit::SquareMeter
            | AreaUnit::Hectare
            | AreaUnit::SquareKilometer
            | AreaUnit::SquareDecimeter
            | AreaUnit::SquareDecameter
            | AreaUnit::SquareMegameter => AreaSystem::Metric,
            AreaUnit::SquareMicroinch
            | AreaUnit::SquareInch
            | AreaUnit::SquareFoot
            | AreaUnit::SquareYard
            | AreaUnit::Acre
            | AreaUnit::SquareMile => AreaSystem::Imperial,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareFemtometer => "fm²",
            AreaUnit::SquarePicometer => "pm²",
            AreaUnit::SquareNanometer => "nm²",
            AreaUnit::SquareMicrometer => "µm²",
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMeter => "m²",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareKilometer => "km²",
            AreaUnit::SquareDecimeter => "dm²",
            AreaUnit::SquareDecameter => "da²",
            AreaUnit::SquareMegameter => "Mm²",
            AreaUnit::SquareMicroinch => "µin²",
            AreaUnit::SquareInch => "in²",
            AreaUnit::SquareFoot => "ft²",
            AreaUnit::SquareYard => "yd²",
            AreaUnit::Acre => "ac",
            AreaUnit::SquareMile => "mi²",
        }
    }

    fn name(self) -> &'static str {
        match self {
            AreaUnit::SquareFemtometer => "square femtometers",
            AreaUnit::SquarePicometer => "square picometers",
            AreaUnit::SquareNanometer => "square nanometers",
            AreaUnit::SquareMicrometer => "square micrometers",
            AreaUnit::SquareMillimeter => "square millimeters",
            AreaUnit::SquareCentimeter => "square centimeters",
            AreaUnit::SquareMeter => "square meters",
            AreaUnit::Hectare => "hectares",
            AreaUnit::SquareKilometer => "square kilometers",
            AreaUnit::SquareDecimeter => "square decimeters",
            AreaUnit::SquareDecameter => "square decameters",
            AreaUnit::SquareMegameter => "square megameters",
            AreaUnit::SquareMicroinch => "square microinches",
            AreaUnit::SquareInch => "square inches",
            AreaUnit::SquareFoot => "square feet",
            AreaUnit::SquareYard => "square yards",
            AreaUnit::Acre => "acres",
            AreaUnit::SquareMile => "square miles",
        }
    }

    fn standard_units(system: AreaSystem) -> &'static [Self] {
        match system {
            AreaSystem::Metric => METRIC_STANDARD,
            AreaSystem::Imperial => IMPERIAL_STANDARD,
        }
    }

    fn is_metric(system: AreaSystem) -> bool {
        system == AreaSystem::Metric
    }
}

/// Area ÷ length = length, in the area's system: square meters divide in
/// base units, imperial areas divide in square feet and yield feet.
impl Div<Length> for Area {
    type Output = Length;

    fn div(self, rhs: Length) -> Length {
        match self.system() {
            AreaSystem::Metric => Length::new(
                self.value_in(AreaUnit::SquareMeter) / rhs.value_in(LengthUnit::Meter),
                LengthUnit::Meter,
            ),
            AreaSystem::Imperial => Length::new(
                self.value_in(AreaUnit::SquareFoot) / rhs.value_in(LengthUnit::Foot),
                LengthUnit::Foot,
            ),
        }
    }
}

/// Area × length = volume, in the area's system.
impl Mul<Length> for Area {
    type Output = Volume;

    fn mul(self, rhs: Length) -> Volume {
        match self.system() {
            AreaSystem::Metric => Volume::new(
                self.value_in(AreaUnit::SquareMeter) * rhs.value_in(LengthUnit::Meter),
                VolumeUnit::CubicMeter,
            ),
            AreaSystem::Imperial => Volume::new(
                self.value_in(AreaUnit::SquareFoot) * rhs.value_in(LengthUnit::Foot),
                VolumeUnit::CubicFoot,
            ),
        }
    }
}

/// Length × area delegates to area × length.
impl Mul<Area> for Length {
    type Output = Volume;

    fn mul(self, rhs: Area) -> Volume {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_unit_factor_is_one() {
        assert_eq!(AreaUnit::BASE.factor(), 1.0);
    }

    #[test]
    fn test_hectare_is_ten_thousand_square_meters() {
        let field = Area::new(1.0, AreaUnit::Hectare);
        assert_relative_eq!(field.value_in(AreaUnit::SquareMeter), 1e4);
    }

    #[test]
    fn test_system_classification() {
        assert_eq!(AreaUnit::SquareMegameter.system(), AreaSystem::Metric);
        assert_eq!(AreaUnit::Acre.system(), AreaSystem::Imperial);
    }

    #[test]
    fn test_normalize_prefers_hectare_over_square_meter() {
        let mut field = Area::new(25_000.0, AreaUnit::SquareMeter);
        field.normalize();
        assert_eq!(field.unit(), AreaUnit::Hectare);
        assert_relative_eq!(field.value(), 2.5);
    }

    #[test]
    fn test_normalize_imperial_to_acres() {
        let mut lot = Area::new(100_000.0, AreaUnit::SquareYard);
        lot.normalize();
        // 100000 yd² is about 20.66 acres.
        assert_eq!(lot.unit(), AreaUnit::Acre);
        assert_relative_eq!(lot.value(), 100_000.0 * 0.836127 / 4.0468564224e3, epsilon = 1e-9);
    }

    #[test]
    fn test_area_divided_by_length() {
        let a = Area::new(12.0, AreaUnit::SquareMeter);
        let l = a / Length::new(4.0, LengthUnit::Meter);
        assert_eq!(l.unit(), LengthUnit::Meter);
        assert_relative_eq!(l.value(), 3.0);
    }

    #[test]
    fn test_imperial_area_divided_by_length_gives_feet() {
        let a = Area::new(10.0, AreaUnit::SquareFoot);
        let l = a / Length::new(2.0, LengthUnit::Foot);
        assert_eq!(l.unit(), LengthUnit::Foot);
        assert_relative_eq!(l.value(), 5.0);
    }

    #[test]
    fn test_area_times_length_gives_volume() {
        let a = Area::new(2.0, AreaUnit::SquareMeter);
        let v = a * Length::new(3.0, LengthUnit::Meter);
        assert_eq!(v.unit(), VolumeUnit::CubicMeter);
        assert_relative_eq!(v.value(), 6.0);
    }

    #[test]
    fn test_length_times_area_commutes() {
        let a = Area::new(2.0, AreaUnit::SquareFoot);
        let l = Length::new(3.0, LengthUnit::Foot);
        let v = l * a;
        assert_eq!(v.unit(), VolumeUnit::CubicFoot);
        assert_relative_eq!(v.value(), (a * l).value());
    }
}
