//! Validated box sizes.
//!
//! `boxdim` models a rectangular box as three edges plus the unit they were
//! measured in (millimetres, centimetres or metres). Construction validates that
//! every edge is positive and no longer than 10 m; after that a [`Cuboid`] is an
//! immutable `Copy` value.
//!
//! ```rust
//! use boxdim::{BoxError, Cuboid, UnitOfMeasure};
//!
//! let parcel = Cuboid::new(25.0, 12.0, 8.0, UnitOfMeasure::Centimeter)?;
//! assert_eq!(parcel.to_string(), "0.250 m × 0.120 m × 0.080 m");
//! assert_eq!(parcel.to_string_with(Some("mm"))?, "250 mm × 120 mm × 80 mm");
//! assert_eq!(parcel.iter().collect::<Vec<_>>(), vec![25.0, 12.0, 8.0]);
//!
//! // A bare triple is read as millimetres.
//! let from_tuple = Cuboid::try_from((250.0, 120.0, 80.0))?;
//! assert_eq!(from_tuple, parcel);
//!
//! assert!(matches!(
//!     Cuboid::in_meters(11.0, 1.0, 1.0),
//!     Err(BoxError::OutOfRange { .. })
//! ));
//! # Ok::<(), BoxError>(())
//! ```
//!
//! # Errors
//!
//! Constructors fail with [`BoxError::OutOfRange`]; formatting with an unknown
//! selector fails with [`BoxError::UnsupportedFormat`]. Loading records from TOML
//! adds [`BoxError::Config`] and [`BoxError::UnknownUnit`].
//!
//! # Logging
//!
//! Rejected sizes and loaded catalogs are reported at `debug` level through the
//! [`log`] facade. The crate installs no logger.

#![forbid(unsafe_code)]

pub mod cuboid;
pub mod error;
pub mod format;
pub mod record;
pub mod unit;


pub use cuboid::{Cuboid, Dimensions};
pub use error::{BoxError, BoxResult};
pub use format::BoxFormat;
pub use record::{CuboidCatalog, CuboidRecord};
pub use unit::{UnitOfMeasure, MAX_SIZE_METERS};
