//! Error types for box construction, formatting and loading.

use crate::unit::UnitOfMeasure;

/// Result type for box operations
pub type BoxResult<T> = Result<T, BoxError>;

/// Error type for box operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoxError {
    /// A dimension is non-positive or larger than 10 m once expressed in its unit.
    #[error("dimensions out of range: {a} × {b} × {c} {unit}")]
    OutOfRange {
        a: f64,
        b: f64,
        c: f64,
        unit: UnitOfMeasure,
    },

    #[error("format not supported: {0:?}")]
    UnsupportedFormat(String),

    #[error("unknown unit of measure: {0:?}")]
    UnknownUnit(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoxError {
    #[must_use]
    pub const fn out_of_range(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> Self {
        Self::OutOfRange { a, b, c, unit }
    }

    #[must_use]
    pub fn unsupported_format(selector: impl Into<String>) -> Self {
        Self::UnsupportedFormat(selector.into())
    }

    #[must_use]
    pub fn unknown_unit(text: impl Into<String>) -> Self {
        Self::UnknownUnit(text.into())
    }

    #[must_use]
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config(details.into())
    }

    /// True for the validation failure raised by every constructor.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
