//! Text representations of a [`Cuboid`](crate::Cuboid).

use std::fmt;
use std::str::FromStr;

use crate::error::{BoxError, BoxResult};
use crate::unit::UnitOfMeasure;

/// Separator placed between the three rendered dimensions.
pub const SEPARATOR: &str = " × ";

/// Output unit selected by a format string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoxFormat {
    /// `"2.345 m × 1.001 m × 0.500 m"`
    #[default]
    Meters,
    /// `"234.5 cm × 100.1 cm × 50.0 cm"`
    Centimeters,
    /// `"2345 mm × 1001 mm × 500 mm"`
    Millimeters,
}

impl BoxFormat {
    /// Resolve an optional selector. `None` and `"m"` pick metres.
    pub fn parse(selector: Option<&str>) -> BoxResult<Self> {
        match selector {
            None | Some("m") => Ok(Self::Meters),
            Some("cm") => Ok(Self::Centimeters),
            Some("mm") => Ok(Self::Millimeters),
            Some(other) => Err(BoxError::unsupported_format(other)),
        }
    }

    /// Unit the dimensions are printed in.
    pub const fn unit(self) -> UnitOfMeasure {
        match self {
            Self::Meters => UnitOfMeasure::Meter,
            Self::Centimeters => UnitOfMeasure::Centimeter,
            Self::Millimeters => UnitOfMeasure::Millimeter,
        }
    }

    /// Digits after the decimal point.
    pub const fn precision(self) -> usize {
        match self {
            Self::Meters => 3,
            Self::Centimeters => 1,
            Self::Millimeters => 0,
        }
    }

    /// Pair three already-converted values with this format for display.
    pub(crate) const fn render(self, dims: [f64; 3]) -> Rendered {
        Rendered { format: self, dims }
    }
}

/// Three converted values shown as `"{x} u × {y} u × {z} u"`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rendered {
    format: BoxFormat,
    dims: [f64; 3],
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.format.unit().symbol();
        let precision = self.format.precision();
        for (i, value) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{value:.precision$} {symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for BoxFormat {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for BoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit().symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_selectors() {
        assert_eq!(BoxFormat::parse(None).unwrap(), BoxFormat::Meters);
        assert_eq!(BoxFormat::parse(Some("m")).unwrap(), BoxFormat::Meters);
        assert_eq!(BoxFormat::parse(Some("cm")).unwrap(), BoxFormat::Centimeters);
        assert_eq!(BoxFormat::parse(Some("mm")).unwrap(), BoxFormat::Millimeters);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            BoxFormat::parse(Some("CM")).unwrap_err(),
            BoxError::unsupported_format("CM")
        );
        assert!("ft".parse::<BoxFormat>().is_err());
        assert!("".parse::<BoxFormat>().is_err());
    }

    #[test]
    fn render_uses_precision() {
        let out = BoxFormat::Centimeters.render([1.0, 22.5, 300.0]).to_string();
        assert_eq!(out, "1.0 cm × 22.5 cm × 300.0 cm");

        let out = BoxFormat::Millimeters.render([1.0, 20.0, 300.0]).to_string();
        assert_eq!(out, "1 mm × 20 mm × 300 mm");

        let out = BoxFormat::Meters.render([0.5, 1.0, 10.0]).to_string();
        assert_eq!(out, "0.500 m × 1.000 m × 10.000 m");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in [BoxFormat::Meters, BoxFormat::Centimeters, BoxFormat::Millimeters] {
            assert_eq!(format.to_string().parse::<BoxFormat>().unwrap(), format);
        }
    }
}
