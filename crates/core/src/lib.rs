//! Strongly-typed physical quantities
//!
//! A library for engineering and scientific calculations that binds a numeric
//! magnitude to an explicit unit, so that mixing meters with feet or liters
//! with gallons is either handled by an explicit conversion or rejected.
//!
//! ## Design
//!
//! - One generic value type, [`Quantity`], instantiated for four quantity
//!   kinds: [`Length`], [`Area`], [`Volume`] and [`Velocity`].
//! - Each kind provides a unit enumeration implementing [`UnitOfMeasure`]:
//!   a conversion-factor table anchored to an SI base unit, an explicit
//!   per-unit measurement-system tag, and short/long unit names.
//! - Cross-kind operators encode the dimensional algebra (length × length =
//!   area, area × length = volume, length / time = velocity, ...) and pick
//!   the result unit from the left operand's measurement system, so metric
//!   inputs never silently produce imperial outputs.
//!
//! Offset-based unit systems (Celsius/Fahrenheit) need an affine conversion
//! and are deliberately not modeled; every conversion here is a pure
//! multiplicative rescale.
//!
//! ## Usage
//! ```
//! use measure_core::{Length, LengthUnit};
//!
//! let lhs = Length::new(1.25, LengthUnit::Meter);
//! let rhs = Length::new(10.0, LengthUnit::Centimeter);
//! assert_eq!(lhs + rhs, Length::new(1.35, LengthUnit::Meter));
//!
//! let mut d = Length::new(1034.0, LengthUnit::Millimeter);
//! d.normalize();
//! assert_eq!(d.unit(), LengthUnit::Meter);
//! ```

pub mod error;
pub mod quantity;
pub mod units;

pub use error::{ParseQuantityError, QuantityError};
pub use quantity::{Quantity, UnitOfMeasure};
pub use units::area::{Area, AreaSystem, AreaUnit};
pub use units::length::{Length, LengthSystem, LengthUnit};
pub use units::velocity::{Velocity, VelocitySystem, VelocityUnit};
pub use units::volume::{Volume, VolumeSystem, VolumeUnit};
