//! Volume measurement.
//!
//! The richest unit-family count of the four kinds: solid and liquid
//! families for both metric and imperial conventions, plus a special
//! family holding only the barrel. Because three families sit after the
//! metric solid range, classification must tag every unit explicitly
//! rather than fall through a chain of range checks.

use serde::{Deserialize, Serialize};

use crate::error::QuantityError;
use crate::quantity::{Quantity, UnitOfMeasure};
use crate::units::area::{Area, AreaUnit};
use crate::units::length::{Length, LengthUnit};

/// Units of measure for volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    // Metric solid common
    CubicFemtometer,
    CubicPicometer,
    CubicNanometer,
    CubicMicrometer,
    CubicMillimeter,
    CubicCentimeter,
    CubicMeter,
    CubicKilometer,
    // Metric solid rare
    CubicDecimeter,
    CubicDecameter,
    CubicHectometer,
    // Metric liquid common
    Microliter,
    Milliliter,
    Centiliter,
    Deciliter,
    Liter,
    Hectoliter,
    // Metric liquid rare
    Decaliter,
    Kiloliter,
    Megaliter,
    Gigaliter,
    // Imperial solid common
    CubicMicroinch,
    CubicInch,
    CubicFoot,
    CubicYard,
    // Imperial liquid common
    FluidOunce,
    Pint,
    Quart,
    Gallon,
    // Special
    Barrel,
}

/// Measurement systems for volume units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeSystem {
    MetricSolid,
    MetricLiquid,
    ImperialSolid,
    ImperialLiquid,
    Special,
}

/// A measurement of volume.
pub type Volume = Quantity<VolumeUnit>;

const METRIC_SOLID_STANDARD: &[VolumeUnit] = &[
    VolumeUnit::CubicKilometer,
    VolumeUnit::CubicMeter,
    VolumeUnit::CubicCentimeter,
    VolumeUnit::CubicMillimeter,
    VolumeUnit::CubicMicrometer,
    VolumeUnit::CubicNanometer,
    VolumeUnit::CubicPicometer,
    VolumeUnit::CubicFemtometer,
];
const METRIC_LIQUID_STANDARD: &[VolumeUnit] = &[
    VolumeUnit::Hectoliter,
    VolumeUnit::Liter,
    VolumeUnit::Deciliter,
    VolumeUnit::Centiliter,
    VolumeUnit::Milliliter,
    VolumeUnit::Microliter,
];
const IMPERIAL_SOLID_STANDARD: &[VolumeUnit] = &[
    VolumeUnit::CubicYard,
    VolumeUnit::CubicFoot,
    VolumeUnit::CubicInch,
    VolumeUnit::CubicMicroinch,
];
const IMPERIAL_LIQUID_STANDARD: &[VolumeUnit] = &[
    VolumeUnit::Gallon,
    VolumeUnit::Quart,
    VolumeUnit::Pint,
    VolumeUnit::FluidOunce,
];

impl UnitOfMeasure for VolumeUnit {
    type System = VolumeSystem;

    const BASE: Self = VolumeUnit::CubicMeter;

    const ALL: &'static [Self] = &[
        VolumeUnit::CubicFemtometer,
        VolumeUnit::CubicPicometer,
        VolumeUnit::CubicNanometer,
        VolumeUnit::CubicMicrometer,
        VolumeUnit::CubicMillimeter,
        VolumeUnit::CubicCentimeter,
        VolumeUnit::CubicMeter,
        VolumeUnit::CubicKilometer,
        VolumeUnit::CubicDecimeter,
        VolumeUnit::CubicDecameter,
        VolumeUnit::CubicHectometer,
        VolumeUnit::Microliter,
        VolumeUnit::Milliliter,
        VolumeUnit::Centiliter,
        VolumeUnit::Deciliter,
        VolumeUnit::Liter,
        VolumeUnit::Hectoliter,
        VolumeUnit::Decaliter,
        VolumeUnit::Kiloliter,
        VolumeUnit::Megaliter,
        VolumeUnit::Gigaliter,
        VolumeUnit::CubicMicroinch,
        VolumeUnit::CubicInch,
        VolumeUnit::CubicFoot,
        VolumeUnit::CubicYard,
        VolumeUnit::FluidOunce,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
        VolumeUnit::Barrel,
    ];

    /// Cubic meters per one of this unit.
    fn factor(self) -> f64 {
        match self {
            VolumeUnit::CubicFemtometer => 1e-45,
            VolumeUnit::CubicPicometer => 1e-36,
            VolumeUnit::CubicNanometer => 1e-27,
            VolumeUnit::CubicMicrometer => 1e-18,
            VolumeUnit::CubicMillimeter => 1e-9,
            VolumeUnit::CubicCentimeter => 1e-6,
            VolumeUnit::CubicDecimeter => 1e-3,
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::CubicDecameter => 1e3,
            VolumeUnit::CubicHectometer => 1e6,
            VolumeUnit::CubicKilometer => 1e9,
            VolumeUnit::Microliter => 1e-9,
            VolumeUnit::Milliliter => 1e-6,
            VolumeUnit::Centiliter => 1e-5,
            VolumeUnit::Deciliter => 1e-4,
            VolumeUnit::Liter => 1e-3,
            VolumeUnit::Decaliter => 1e-2,
            VolumeUnit::Hectoliter => 1e-1,
            VolumeUnit::Kiloliter => 1.0,
            VolumeUnit::Megaliter => 1e3,
            VolumeUnit::Gigaliter => 1e6,
            VolumeUnit::CubicMicroinch => 1.6387064e-23,
            VolumeUnit::CubicInch => 1.6387064e-5,
            VolumeUnit::CubicFoot => 2.8316846592e-2,
            VolumeUnit::CubicYard => 7.64554857984e-1,
            VolumeUnit::FluidOunce => 2.8413e-5,
            VolumeUnit::Pint => 5.68261e-4,
            VolumeUnit::Quart => 1.136523e-3,
            VolumeUnit::Gallon => 4.54609e-3,
            VolumeUnit::Barrel => 1.58987294928e-1,
        }
    }

    fn system(self) -> VolumeSystem {
        match self {
            VolumeUnit::CubicFemtometer
            | VolumeUnit::CubicPicometer
            | VolumeUnit::CubicNanometer
            | VolumeUnit::CubicMicrometer
            | VolumeUnit::CubicMillimeter
            | VolumeUnit::CubicCentimeter
            | VolumeUnit::CubicMeter
            | VolumeUnit::CubicKilometer
            | VolumeUnit::CubicDecimeter
            | VolumeUnit::CubicDecameter
            | VolumeUnit::CubicHectometer => VolumeSystem::MetricSolid,
            VolumeUnit::Microliter
            | VolumeUnit::Milliliter
            | VolumeUnit::Centiliter
            | VolumeUnit::Deciliter
            | VolumeUnit::Liter
            | VolumeUnit::Hectoliter
            | VolumeUnit::Decaliter
            | VolumeUnit::Kiloliter
            | VolumeUnit::Megaliter
            | VolumeUnit::Gigaliter => VolumeSystem::MetricLiquid,
            VolumeUnit::CubicMicroinch
            | VolumeUnit::CubicInch
            | VolumeUnit::CubicFoot
            | VolumeUnit::CubicYard => VolumeSystem::ImperialSolid,
            VolumeUnit::FluidOunce
            | VolumeUnit::Pint
            | VolumeUnit::Quart
            | VolumeUnit::Gallon => VolumeSystem::ImperialLiquid,
            VolumeUnit::Barrel => VolumeSystem::Special,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicFemtometer => "fm³",
            VolumeUnit::CubicPicometer => "pm³",
            VolumeUnit::CubicNanometer => "nm³",
            VolumeUnit::CubicMicrometer => "µm³",
            VolumeUnit::CubicMillimeter => "mm³",
            VolumeUnit::CubicCentimeter => "cm³",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::CubicKilometer => "km³",
            VolumeUnit::CubicDecimeter => "dm³",
            VolumeUnit::CubicDecameter => "da³",
            VolumeUnit::CubicHectometer => "ha³",
            VolumeUnit::Microliter => "µl",
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Centiliter => "cl",
            VolumeUnit::Deciliter => "dl",
            VolumeUnit::Liter => "l",
            VolumeUnit::Hectoliter => "hl",
            VolumeUnit::Decaliter => "dal",
            VolumeUnit::Kiloliter => "kl",
            VolumeUnit::Megaliter => "Ml",
            VolumeUnit::Gigaliter => "Gl",
            VolumeUnit::CubicMicroinch => "µin³",
            VolumeUnit::CubicInch => "in³",
            VolumeUnit::CubicFoot => "ft³",
            VolumeUnit::CubicYard => "yd³",
            VolumeUnit::FluidOunce => "fl.o",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Barrel => "bbl",
        }
    }

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::CubicFemtometer => "cubic femtometers",
            VolumeUnit::CubicPicometer => "cubic picometers",
            VolumeUnit::CubicNanometer => "cubic nanometers",
            VolumeUnit::CubicMicrometer => "cubic micrometers",
            VolumeUnit::CubicMillimeter => "cubic millimeters",
            VolumeUnit::CubicCentimeter => "cubic centimeters",
            VolumeUnit::CubicMeter => "cubic meters",
            VolumeUnit::CubicKilometer => "cubic kilometers",
            VolumeUnit::CubicDecimeter => "cubic decimeters",
            VolumeUnit::CubicDecameter => "cubic decameters",
            VolumeUnit::CubicHectometer => "cubic hectometers",
            VolumeUnit::Microliter => "microliters",
            VolumeUnit::Milliliter => "milliliters",
            VolumeUnit::Centiliter => "centiliters",
            VolumeUnit::Deciliter => "deciliters",
            VolumeUnit::Liter => "liters",
            VolumeUnit::Hectoliter => "hectoliters",
            VolumeUnit::Decaliter => "decaliters",
            VolumeUnit::Kiloliter => "kiloliters",
            VolumeUnit::Megaliter => "megaliters",
            VolumeUnit::Gigaliter => "gigaliters",
            VolumeUnit::CubicMicroinch => "cubic microinches",
            VolumeUnit::CubicInch => "cubic inches",
            VolumeUnit::CubicFoot => "cubic feet",
            VolumeUnit::CubicYard => "cubic yards",
            VolumeUnit::FluidOunce => "fluid ounces",
            VolumeUnit::Pint => "pints",
            VolumeUnit::Quart => "quarts",
            VolumeUnit::Gallon => "gallons",
            VolumeUnit::Barrel => "barrels",
        }
    }

    fn standard_units(system: VolumeSystem) -> &'static [Self] {
        match system {
            VolumeSystem::MetricSolid => METRIC_SOLID_STANDARD,
            VolumeSystem::MetricLiquid => METRIC_LIQUID_STANDARD,
            VolumeSystem::ImperialSolid => IMPERIAL_SOLID_STANDARD,
            VolumeSystem::ImperialLiquid => IMPERIAL_LIQUID_STANDARD,
            VolumeSystem::Special => &[],
        }
    }

    fn is_metric(system: VolumeSystem) -> bool {
        matches!(
            system,
            VolumeSystem::MetricSolid | VolumeSystem::MetricLiquid
        )
    }
}

impl Volume {
    /// Volume ÷ length = area, defined for solid volume systems only.
    ///
    /// Dividing a liquid measure (or a barrel) by a length is not a
    /// meaningful cross-section; those systems return
    /// [`QuantityError::UnsupportedOperation`] instead of guessing a unit.
    pub fn checked_div(self, rhs: Length) -> Result<Area, QuantityError> {
        match self.system() {
            VolumeSystem::MetricSolid => Ok(Area::new(
                self.value_in(VolumeUnit::CubicMeter) / rhs.value_in(LengthUnit::Meter),
                AreaUnit::SquareMeter,
            )),
            VolumeSystem::ImperialSolid => Ok(Area::new(
                self.value_in(VolumeUnit::CubicFoot) / rhs.value_in(LengthUnit::Foot),
                AreaUnit::SquareFoot,
            )),
            system => Err(QuantityError::unsupported("volume / length", system)),
        }
    }
}
