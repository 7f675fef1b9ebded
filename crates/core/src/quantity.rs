//! The generic quantity type and the per-kind unit trait.
//!
//! Every quantity kind (length, area, volume, velocity) is the same shape:
//! a unit enumeration with a multiplicative conversion-factor table anchored
//! to an SI base unit, a measurement-system tag per unit, and name tables.
//! [`Quantity`] implements the shared algebra (conversion, rescaling,
//! normalization, arithmetic, comparison, rendering, parsing) once, on top
//! of the [`UnitOfMeasure`] trait; the kind modules only supply data and the
//! cross-kind operators.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseQuantityError;

/// Behavior of a unit enumeration for one quantity kind.
///
/// Implementations must keep `factor`, `system`, `symbol` and `name`
/// exhaustive over the enumeration; an unmapped unit is a programming error
/// and the exhaustive `match` makes it a compile error rather than a runtime
/// one.
pub trait UnitOfMeasure: Copy + Eq + fmt::Debug + 'static {
    /// Measurement-system tag grouping units into families
    /// (metric, imperial, ...).
    type System: Copy + Eq + fmt::Debug;

    /// The base (SI) unit every conversion is anchored to; its factor is 1.
    const BASE: Self;

    /// Every unit of the kind, used for symbol lookup during parsing.
    const ALL: &'static [Self];

    /// How many base units equal one of this unit.
    fn factor(self) -> f64;

    /// The measurement system this unit belongs to.
    fn system(self) -> Self::System;

    /// Short unit symbol, e.g. `"m"` or `"ft²"`.
    fn symbol(self) -> &'static str;

    /// Long unit name, e.g. `"meters"`.
    fn name(self) -> &'static str;

    /// The commonly-used units of a system, ordered largest first.
    ///
    /// This is the candidate set for [`Quantity::normalize`]; rare units
    /// (femtometers, megameters, ...) are classifiable but never chosen.
    /// Systems that do not normalize return an empty slice.
    fn standard_units(system: Self::System) -> &'static [Self];

    /// Whether a system counts as metric for normalization of zero values.
    fn is_metric(system: Self::System) -> bool;
}

/// A numeric magnitude bound to an explicit unit.
///
/// The magnitude is always interpreted in `unit`; no quantity carries an
/// implicit base-unit value. Copies are independent values, and the only
/// in-place mutations ([`set_unit`](Quantity::set_unit),
/// [`normalize`](Quantity::normalize)) rescale the magnitude together with
/// the unit rather than reinterpreting it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<U: UnitOfMeasure> {
    value: f64,
    unit: U,
}

impl<U: UnitOfMeasure> Quantity<U> {
    /// Create a quantity from a magnitude and unit.
    #[inline]
    #[must_use]
    pub const fn new(value: f64, unit: U) -> Self {
        Quantity { value, unit }
    }

    /// Create a quantity in the kind's base (SI) unit.
    #[inline]
    #[must_use]
    pub const fn base(value: f64) -> Self {
        Quantity {
            value,
            unit: U::BASE,
        }
    }

    /// The magnitude, in the quantity's own unit.
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// The quantity's current unit.
    #[inline]
    #[must_use]
    pub fn unit(self) -> U {
        self.unit
    }

    /// The measurement system of the current unit.
    #[inline]
    #[must_use]
    pub fn system(self) -> U::System {
        self.unit.system()
    }

    /// Whether the current unit belongs to a metric system.
    #[inline]
    #[must_use]
    pub fn is_metric(self) -> bool {
        U::is_metric(self.system())
    }

    /// Short symbol of the current unit.
    #[inline]
    #[must_use]
    pub fn unit_symbol(self) -> &'static str {
        self.unit.symbol()
    }

    /// Long name of the current unit.
    #[inline]
    #[must_use]
    pub fn unit_name(self) -> &'static str {
        self.unit.name()
    }

    /// The magnitude expressed in another unit. No side effect.
    ///
    /// Returns the stored magnitude unchanged when `unit` equals the current
    /// unit, avoiding a needless floating-point round-trip.
    #[must_use]
    pub fn value_in(self, unit: U) -> f64 {
        if self.unit == unit {
            self.value
        } else {
            self.value * (self.unit.factor() / unit.factor())
        }
    }

    /// A copy of this quantity rescaled to another unit.
    #[must_use]
    pub fn to(self, unit: U) -> Self {
        Quantity {
            value: self.value_in(unit),
            unit,
        }
    }

    /// Rescale in place to another unit.
    ///
    /// The magnitude is multiplied by `factor(old) / factor(new)` so the
    /// quantity keeps describing the same physical amount. No-op when the
    /// unit is unchanged.
    pub fn set_unit(&mut self, unit: U) {
        if self.unit != unit {
            self.value *= self.unit.factor() / unit.factor();
            self.unit = unit;
        }
    }

    /// Rescale in place to the most natural unit within the current system.
    ///
    /// Scans the system's standard units from largest to smallest and picks
    /// the first one in which the magnitude is at least 1 in decimal order,
    /// e.g. `1034 mm -> 1.034 m` and `34.5 in -> 2.875 ft`. The threshold is
    /// non-strict, so a magnitude sitting exactly on a power-of-ten boundary
    /// normalizes to the larger unit (`999 mm -> 0.999 m`).
    ///
    /// A zero magnitude resets metric quantities to the base unit and leaves
    /// other systems unchanged. Systems without standard units (nautical
    /// lengths, astronomical velocities, barrel volumes) never change.
    pub fn normalize(&mut self) {
        let candidates = U::standard_units(self.system());
        if candidates.is_empty() {
            return;
        }
        if self.value == 0.0 {
            if self.is_metric() {
                self.unit = U::BASE;
            }
            return;
        }
        let log = self.value.abs().log10();
        let factor = self.unit.factor();
        for &unit in candidates {
            let log_new = (factor / unit.factor()).log10();
            if log + log_new >= 0.0 {
                let from = self.unit;
                self.set_unit(unit);
                tracing::trace!(from = ?from, to = ?unit, "normalized quantity");
                break;
            }
        }
    }
}

/// Zero in the kind's base unit.
impl<U: UnitOfMeasure> Default for Quantity<U> {
    fn default() -> Self {
        Quantity::base(0.0)
    }
}

/// Equality converts the right operand into the left operand's unit first;
/// `1 m == 100 cm` holds even though the representations differ.
impl<U: UnitOfMeasure> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value_in(self.unit)
    }
}

impl<U: UnitOfMeasure> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value_in(self.unit))
    }
}

/// Addition converts the right operand into the left operand's unit; the
/// result keeps the left operand's unit.
impl<U: UnitOfMeasure> Add for Quantity<U> {
    type Output = Quantity<U>;
    fn add(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl<U: UnitOfMeasure> Sub for Quantity<U> {
    type Output = Quantity<U>;
    fn sub(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl<U: UnitOfMeasure> Mul<f64> for Quantity<U> {
    type Output = Quantity<U>;
    fn mul(self, rhs: f64) -> Quantity<U> {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl<U: UnitOfMeasure> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        rhs * self
    }
}

impl<U: UnitOfMeasure> Div<f64> for Quantity<U> {
    type Output = Quantity<U>;
    fn div(self, rhs: f64) -> Quantity<U> {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl<U: UnitOfMeasure> Neg for Quantity<U> {
    type Output = Quantity<U>;
    fn neg(self) -> Quantity<U> {
        Quantity::new(-self.value, self.unit)
    }
}

/// Renders as `"<magnitude> <symbol>"`. The formatter's precision is applied
/// to the magnitude, and the alternate flag (`{:#}`) selects the long unit
/// name: `format!("{:#.2}", q)` gives e.g. `"1.35 meters"`.
impl<U: UnitOfMeasure> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_text = if f.alternate() {
            self.unit.name()
        } else {
            self.unit.symbol()
        };
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} {}", precision, self.value, unit_text)
        } else {
            write!(f, "{} {}", self.value, unit_text)
        }
    }
}

/// Parses `"<number><whitespace><unit-symbol>"`.
///
/// The text is split at the first alphabetic character; the prefix must
/// parse as a float and the suffix must match a short unit symbol exactly
/// (case-sensitive). `"5 zz"` is an [`ParseQuantityError::UnknownUnit`]
/// failure, never a partial result.
impl<U: UnitOfMeasure> FromStr for Quantity<U> {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.find(char::is_alphabetic).unwrap_or(s.len());
        let (number_text, unit_text) = s.split_at(split);
        let number_text = number_text.trim();
        let value: f64 = number_text
            .parse()
            .map_err(|_| ParseQuantityError::InvalidNumber(number_text.to_string()))?;
        let unit_text = unit_text.trim();
        let unit = U::ALL
            .iter()
            .copied()
            .find(|u| u.symbol() == unit_text)
            .ok_or_else(|| ParseQuantityError::UnknownUnit(unit_text.to_string()))?;
        Ok(Quantity::new(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use crate::units::length::{Length, LengthUnit};
    use crate::ParseQuantityError;

    #[test]
    fn test_default_is_zero_base_unit() {
        let q = Length::default();
        assert_eq!(q.value(), 0.0);
        assert_eq!(q.unit(), LengthUnit::Meter);
    }

    #[test]
    fn test_value_in_identity_unit() {
        let q = Length::new(2.5, LengthUnit::Foot);
        assert_eq!(q.value_in(LengthUnit::Foot), 2.5);
    }

    #[test]
    fn test_set_unit_rescales_in_place() {
        let mut q = Length::new(1.0, LengthUnit::Meter);
        q.set_unit(LengthUnit::Centimeter);
        assert_eq!(q.value(), 100.0);
        assert_eq!(q.unit(), LengthUnit::Centimeter);
    }

    #[test]
    fn test_to_returns_rescaled_copy() {
        let q = Length::new(1.0, LengthUnit::Kilometer);
        let m = q.to(LengthUnit::Meter);
        assert_eq!(m.value(), 1000.0);
        assert_eq!(q.unit(), LengthUnit::Kilometer);
    }

    #[test]
    fn test_addition_keeps_left_unit() {
        let lhs = Length::new(1.25, LengthUnit::Meter);
        let rhs = Length::new(10.0, LengthUnit::Centimeter);
        let sum = lhs + rhs;
        assert_eq!(sum, Length::new(1.35, LengthUnit::Meter));
        assert_eq!(sum.unit(), LengthUnit::Meter);
    }

    #[test]
    fn test_scalar_multiplication() {
        let q = Length::new(2.0, LengthUnit::Yard);
        assert_eq!((q * 3.0).value(), 6.0);
        assert_eq!((3.0 * q).value(), 6.0);
        assert_eq!((q / 2.0).value(), 1.0);
        assert_eq!((q * 3.0).unit(), LengthUnit::Yard);
    }

    #[test]
    fn test_equality_converts_right_operand() {
        assert_eq!(
            Length::new(1.0, LengthUnit::Meter),
            Length::new(100.0, LengthUnit::Centimeter)
        );
        assert_ne!(
            Length::new(1.0, LengthUnit::Meter),
            Length::new(1.0, LengthUnit::Yard)
        );
    }

    #[test]
    fn test_ordering_converts_right_operand() {
        let one_meter = Length::new(1.0, LengthUnit::Meter);
        let one_yard = Length::new(1.0, LengthUnit::Yard);
        assert!(one_yard < one_meter);
        assert!(one_meter > one_yard);
    }

    #[test]
    fn test_display_short_and_long() {
        let q = Length::new(1.35, LengthUnit::Meter);
        assert_eq!(q.to_string(), "1.35 m");
        assert_eq!(format!("{q:#}"), "1.35 meters");
        assert_eq!(format!("{q:.1}"), "1.4 m");
        assert_eq!(format!("{q:#.3}"), "1.350 meters");
    }

    #[test]
    fn test_parse_number_and_symbol() {
        let q: Length = "1.25 m".parse().unwrap();
        assert_eq!(q, Length::new(1.25, LengthUnit::Meter));

        let q: Length = "43.4 in".parse().unwrap();
        assert_eq!(q.unit(), LengthUnit::Inch);
    }

    #[test]
    fn test_parse_unknown_unit_fails() {
        let err = "5 zz".parse::<Length>().unwrap_err();
        assert_eq!(err, ParseQuantityError::UnknownUnit("zz".to_string()));
    }

    #[test]
    fn test_parse_invalid_number_fails() {
        let err = "x1 m".parse::<Length>().unwrap_err();
        assert!(matches!(err, ParseQuantityError::InvalidNumber(_)));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // "Nm" is the nautical mile; "nm" is the nanometer.
        let nautical: Length = "1 Nm".parse().unwrap();
        let nano: Length = "1 nm".parse().unwrap();
        assert_eq!(nautical.unit(), LengthUnit::NauticalMile);
        assert_eq!(nano.unit(), LengthUnit::Nanometer);
    }
}
