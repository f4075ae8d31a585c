//! Units of measure accepted by [`Cuboid`](crate::Cuboid).
//!
//! Metres are the canonical unit. Every conversion to metres divides by the unit's
//! scale rather than multiplying by its reciprocal, so two boxes describing the same
//! size in different units normalize to bit-identical values whenever the decimal
//! inputs allow it (`1000 mm / 1000 == 1 m`).
//!
//! Rounding follows round-half-to-even at every precision:
//!
//! ```text
//! round(v)     = round_ties_even(v)
//! round(v, 1)  = round_ties_even(v * 10) / 10
//! ```
//!
//! The metre text format is the exception: it keeps 15 significant digits and then
//! rounds halves away from zero, so `0.0625 m` prints as `0.063 m`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// Largest edge a box may have, in metres.
pub const MAX_SIZE_METERS: f64 = 10.0;

/// Unit a box's dimensions were specified in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[serde(alias = "mm", alias = "millimetre")]
    Millimeter,
    #[serde(alias = "cm", alias = "centimetre")]
    Centimeter,
    #[default]
    #[serde(alias = "m", alias = "metre")]
    Meter,
}

impl UnitOfMeasure {
    /// All units, smallest first.
    pub const ALL: [UnitOfMeasure; 3] = [Self::Millimeter, Self::Centimeter, Self::Meter];

    /// Printable symbol (`"mm"`, `"cm"`, `"m"`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }

    /// How many of this unit make up one metre.
    pub const fn per_meter(self) -> f64 {
        match self {
            Self::Millimeter => 1000.0,
            Self::Centimeter => 100.0,
            Self::Meter => 1.0,
        }
    }

    /// Value substituted for omitted dimensions by the short constructors.
    ///
    /// These constants (100 mm, 10 cm, 0.1 m) are kept for compatibility with the
    /// existing constructor chain; note they do not describe the same physical length.
    pub const fn filler(self) -> f64 {
        match self {
            Self::Millimeter => 100.0,
            Self::Centimeter => 10.0,
            Self::Meter => 0.1,
        }
    }

    /// [`MAX_SIZE_METERS`] expressed in this unit.
    pub fn max_value(self) -> f64 {
        MAX_SIZE_METERS * self.per_meter()
    }

    /// Convert a raw value in this unit to metres.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meter => value,
            _ => value / self.per_meter(),
        }
    }

    /// Convert a raw value in this unit to centimetres, rounded to one decimal.
    pub fn to_centimeters(self, value: f64) -> f64 {
        let cm = match self {
            Self::Millimeter => value / 10.0,
            Self::Centimeter => value,
            Self::Meter => value * 100.0,
        };
        round_to_tenth(cm)
    }

    /// Convert a raw value in this unit to whole millimetres.
    pub fn to_millimeters(self, value: f64) -> f64 {
        let mm = match self {
            Self::Millimeter => value,
            Self::Centimeter => value * 10.0,
            Self::Meter => value * 1000.0,
        };
        mm.round_ties_even()
    }
}

/// Round to one decimal place, ties to even.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Round to `decimals` places the way fixed-point text output does: reduce to 15
/// significant digits, then round halves away from zero.
pub(crate) fn round_half_away(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    // "d.dddddddddddddde<exp>": 15 significant digits.
    let text = format!("{:.14e}", value.abs());
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return value;
    };
    let digits = mantissa.replace('.', "").parse::<u64>();
    let (Ok(digits), Ok(exponent)) = (digits, exponent.parse::<i32>()) else {
        return value;
    };

    // |value| * 10^decimals == digits * 10^shift
    let shift = exponent - 14 + decimals;
    if shift >= 0 {
        return value;
    }
    let scaled = if -shift > 15 {
        0
    } else {
        let divisor = 10u64.pow(shift.unsigned_abs());
        let quotient = digits / divisor;
        if (digits % divisor) * 2 >= divisor {
            quotient + 1
        } else {
            quotient
        }
    };

    (scaled as f64 / 10f64.powi(decimals)).copysign(value)
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimetre" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimetre" => Ok(Self::Centimeter),
            "m" | "meter" | "metre" => Ok(Self::Meter),
            _ => Err(BoxError::unknown_unit(s)),
        }
    }
}
