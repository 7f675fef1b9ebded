//! Error types for quantity operations and text parsing.

use std::fmt;

/// Errors raised by cross-kind quantity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// A cross-kind operation was invoked on a measurement system with no
    /// defined conversion rule (e.g. dividing a liquid volume by a length).
    UnsupportedOperation {
        /// The operation that was attempted, e.g. `"volume / length"`.
        operation: &'static str,
        /// The measurement system of the left operand.
        system: String,
    },
}

impl QuantityError {
    pub(crate) fn unsupported(operation: &'static str, system: impl fmt::Debug) -> Self {
        let system = format!("{system:?}");
        tracing::debug!(operation, %system, "unsupported cross-kind operation");
        QuantityError::UnsupportedOperation { operation, system }
    }
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::UnsupportedOperation { operation, system } => {
                write!(f, "no {operation} rule for the {system} measurement system")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

/// Errors raised when parsing a quantity from text.
///
/// The expected form is a numeric prefix followed by a short unit symbol,
/// e.g. `"1.25 m"` or `"43.4 in"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseQuantityError {
    /// The numeric prefix could not be parsed as a float.
    InvalidNumber(String),
    /// The unit suffix did not match any known short unit symbol.
    UnknownUnit(String),
}

impl fmt::Display for ParseQuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseQuantityError::InvalidNumber(text) => {
                write!(f, "invalid numeric value ({text})")
            }
            ParseQuantityError::UnknownUnit(text) => write!(f, "unknown unit ({text})"),
        }
    }
}

impl std::error::Error for ParseQuantityError {}
