//! The [`Cuboid`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use qtty::length::Meters;
use serde::{Deserialize, Serialize};

use crate::error::{BoxError, BoxResult};
use crate::format::BoxFormat;
use crate::record::CuboidRecord;
use crate::unit::{round_half_away, round_to_tenth, UnitOfMeasure};

/// Iterator over a box's raw dimensions, in construction units.
pub type Dimensions = std::array::IntoIter<f64, 3>;

/// A rectangular box with edges `a`, `b`, `c`.
///
/// Edges are stored exactly as given, in the unit they were given in. The
/// accessors [`a`](Self::a), [`b`](Self::b) and [`c`](Self::c) report them in
/// metres; indexing, iteration and [`to_array`](Self::to_array) report the raw
/// values.
///
/// Every edge must be positive and at most 10 m:
///
/// - **millimetres**: each edge must still be positive after rounding to a whole
///   millimetre; the 10 000 mm bound is checked on the unrounded value.
/// - **centimetres**: each edge is rounded to 0.1 cm and the rounded value must lie
///   in `(0, 1000]`.
/// - **metres**: no rounding, edges must lie in `(0, 10]`.
///
/// Two boxes are equal when their edges are equal in metres, whatever units they
/// were built from.
///
/// ```rust
/// use boxdim::{Cuboid, UnitOfMeasure};
///
/// let mm = Cuboid::new(2500.0, 1000.0, 500.0, UnitOfMeasure::Millimeter)?;
/// let m = Cuboid::in_meters(2.5, 1.0, 0.5)?;
/// assert_eq!(mm, m);
/// assert_eq!(mm.to_string(), "2.500 m × 1.000 m × 0.500 m");
/// assert_eq!(mm.to_string_with(Some("cm"))?, "250.0 cm × 100.0 cm × 50.0 cm");
/// assert_eq!(mm[0], 2500.0);
/// # Ok::<(), boxdim::BoxError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CuboidRecord", into = "CuboidRecord")]
pub struct Cuboid {
    a: f64,
    b: f64,
    c: f64,
    unit: UnitOfMeasure,
}

impl Cuboid {
    /// Create a box from three edges in `unit`.
    pub fn new(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> BoxResult<Self> {
        check_size(a, b, c, unit)?;
        Ok(Self { a, b, c, unit })
    }

    /// Create a box from three edges in metres.
    pub fn in_meters(a: f64, b: f64, c: f64) -> BoxResult<Self> {
        Self::new(a, b, c, UnitOfMeasure::Meter)
    }

    /// Two edges given; `c` is the unit's [filler](UnitOfMeasure::filler) value.
    pub fn with_two(a: f64, b: f64, unit: UnitOfMeasure) -> BoxResult<Self> {
        Self::new(a, b, unit.filler(), unit)
    }

    /// One edge given; `b` and `c` are the unit's filler value.
    pub fn with_one(a: f64, unit: UnitOfMeasure) -> BoxResult<Self> {
        Self::with_two(a, unit.filler(), unit)
    }

    /// No edge given; all three are the unit's filler value.
    pub fn with_unit(unit: UnitOfMeasure) -> BoxResult<Self> {
        Self::with_one(unit.filler(), unit)
    }

    /// Create a box from a `(a, b, c)` triple measured in **millimetres**.
    ///
    /// This is the conversion behind `Cuboid::try_from((a, b, c))`. The tuple carries
    /// no unit, so millimetres are always assumed.
    pub fn from_millimeters((a, b, c): (f64, f64, f64)) -> BoxResult<Self> {
        Self::new(a, b, c, UnitOfMeasure::Millimeter)
    }

    /// Unit the box was constructed with.
    pub const fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    /// First edge in metres.
    pub fn a(&self) -> Meters {
        Meters::new(self.unit.to_meters(self.a))
    }

    /// Second edge in metres.
    pub fn b(&self) -> Meters {
        Meters::new(self.unit.to_meters(self.b))
    }

    /// Third edge in metres.
    pub fn c(&self) -> Meters {
        Meters::new(self.unit.to_meters(self.c))
    }

    /// Raw edges `[a, b, c]` in the construction unit.
    pub const fn to_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Iterate the raw edges `a`, `b`, `c`. Each call starts a fresh iterator.
    pub fn iter(&self) -> Dimensions {
        self.to_array().into_iter()
    }

    /// Raw edge by position. Positions other than 0, 1 and 2 yield `0.0`.
    pub fn get(&self, index: i64) -> f64 {
        match index {
            0 => self.a,
            1 => self.b,
            2 => self.c,
            _ => 0.0,
        }
    }

    /// Render with an explicit [`BoxFormat`].
    pub fn format(&self, format: BoxFormat) -> String {
        format.render(self.converted(format)).to_string()
    }

    /// Render with a format selector: `None` or `"m"`, `"cm"`, `"mm"`.
    pub fn to_string_with(&self, selector: Option<&str>) -> BoxResult<String> {
        BoxFormat::parse(selector).map(|format| self.format(format))
    }

    fn normalized(&self) -> [f64; 3] {
        self.to_array().map(|v| self.unit.to_meters(v))
    }

    fn converted(&self, format: BoxFormat) -> [f64; 3] {
        match format {
            BoxFormat::Meters => self.normalized().map(|v| round_half_away(v, 3)),
            BoxFormat::Centimeters => self.to_array().map(|v| self.unit.to_centimeters(v)),
            BoxFormat::Millimeters => self.to_array().map(|v| self.unit.to_millimeters(v)),
        }
    }
}

fn check_size(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> BoxResult<()> {
    let dims = [a, b, c];
    let max = unit.max_value();

    let fits = dims.iter().all(|&v| v > 0.0)
        && match unit {
            UnitOfMeasure::Millimeter => dims
                .iter()
                .all(|&v| v.round_ties_even() > 0.0 && v <= max),
            UnitOfMeasure::Centimeter => dims
                .map(round_to_tenth)
                .iter()
                .all(|&v| v > 0.0 && v <= max),
            UnitOfMeasure::Meter => dims.iter().all(|&v| v <= max),
        };

    if fits {
        Ok(())
    } else {
        log::debug!("rejected box size {a} × {b} × {c} {unit}");
        Err(BoxError::out_of_range(a, b, c, unit))
    }
}

impl Default for Cuboid {
    /// `0.1 m × 0.1 m × 0.1 m`, the box built by [`Cuboid::with_unit`] for metres.
    fn default() -> Self {
        let side = UnitOfMeasure::Meter.filler();
        Self {
            a: side,
            b: side,
            c: side,
            unit: UnitOfMeasure::Meter,
        }
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.normalized() == other.normalized()
    }
}

// Edges are validated finite and positive, so equality is total.
impl Eq for Cuboid {}

impl Hash for Cuboid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.normalized() {
            v.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = BoxFormat::Meters;
        fmt::Display::fmt(&format.render(self.converted(format)), f)
    }
}

impl Index<usize> for Cuboid {
    type Output = f64;

    /// Out-of-range positions yield `0.0` instead of panicking.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => &0.0,
        }
    }
}

impl IntoIterator for Cuboid {
    type Item = f64;
    type IntoIter = Dimensions;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Cuboid {
    type Item = f64;
    type IntoIter = Dimensions;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Cuboid> for [f64; 3] {
    fn from(cuboid: Cuboid) -> Self {
        cuboid.to_array()
    }
}

impl TryFrom<(f64, f64, f64)> for Cuboid {
    type Error = BoxError;

    fn try_from(value: (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::from_millimeters(value)
    }
}
