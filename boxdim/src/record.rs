//! Serialized box records and TOML box files.
//!
//! A single box is written as a table with its three edges and an optional unit
//! (metres when omitted):
//!
//! ```toml
//! a = 250
//! b = 120
//! c = 80
//! unit = "cm"
//! ```
//!
//! A catalog file holds any number of `[[boxes]]` tables of the same shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cuboid::Cuboid;
use crate::error::{BoxError, BoxResult};
use crate::unit::UnitOfMeasure;

/// Unvalidated on-disk form of a [`Cuboid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuboidRecord {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub unit: UnitOfMeasure,
}

impl CuboidRecord {
    /// Parse a record from a TOML document.
    pub fn from_toml_str(content: &str) -> BoxResult<Self> {
        toml::from_str(content)
            .map_err(|e| BoxError::config(format!("Failed to parse box record: {}", e)))
    }

    /// Load a record from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }

    /// Validate the record into a [`Cuboid`].
    pub fn to_cuboid(&self) -> BoxResult<Cuboid> {
        Cuboid::new(self.a, self.b, self.c, self.unit)
    }
}

impl TryFrom<CuboidRecord> for Cuboid {
    type Error = BoxError;

    fn try_from(record: CuboidRecord) -> Result<Self, Self::Error> {
        record.to_cuboid()
    }
}

impl From<Cuboid> for CuboidRecord {
    fn from(cuboid: Cuboid) -> Self {
        let [a, b, c] = cuboid.to_array();
        Self {
            a,
            b,
            c,
            unit: cuboid.unit(),
        }
    }
}

/// A list of box records loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuboidCatalog {
    #[serde(default)]
    pub boxes: Vec<CuboidRecord>,
}

impl CuboidCatalog {
    /// Parse a catalog from a TOML document.
    pub fn from_toml_str(content: &str) -> BoxResult<Self> {
        toml::from_str(content)
            .map_err(|e| BoxError::config(format!("Failed to parse box catalog: {}", e)))
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Returns
    /// * `Ok(CuboidCatalog)` if the file was read and parsed
    /// * `Err(BoxError::Config)` if the file cannot be read or is not a valid catalog
    pub fn from_file<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        let path = path.as_ref();
        let catalog = Self::from_toml_str(&read_file(path)?)?;
        log::debug!(
            "loaded {} box records from {}",
            catalog.boxes.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Validate every record, failing on the first invalid one.
    pub fn cuboids(&self) -> BoxResult<Vec<Cuboid>> {
        self.boxes.iter().map(CuboidRecord::to_cuboid).collect()
    }

    /// Serialize the catalog back to TOML.
    pub fn to_toml_string(&self) -> BoxResult<String> {
        toml::to_string(self)
            .map_err(|e| BoxError::config(format!("Failed to serialize box catalog: {}", e)))
    }
}

impl FromIterator<Cuboid> for CuboidCatalog {
    fn from_iter<I: IntoIterator<Item = Cuboid>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().map(CuboidRecord::from).collect(),
        }
    }
}

fn read_file(path: &Path) -> BoxResult<String> {
    fs::read_to_string(path)
        .map_err(|e| BoxError::config(format!("Failed to read {}: {}", path.display(), e)))
}
