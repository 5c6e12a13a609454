//! Dimension-typed geometries on top of the [GEOS](https://libgeos.org) engine.
//!
//! Geometry values ([`geometry::Geometry`] and the concrete shapes) are plain data tagged with
//! a coordinate dimension: [`XY`], [`XYZ`], [`XYM`] or [`XYZM`]. Operations in
//! [`algorithm::geos`] project them into engine handles for the duration of one call and read
//! the result back with a dimension chosen at compile time.
//!
//! ```
//! use geos_typed::algorithm::geos::{BooleanOps, Predicates};
//! use geos_typed::geometry::Polygon;
//! use geos_typed::io::wkt::FromWkt;
//! use geos_typed::XY;
//!
//! let a = Polygon::<XY>::from_wkt("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
//! let b = Polygon::<XY>::from_wkt("POLYGON ((1 0, 2 0, 2 1, 1 1, 1 0))").unwrap();
//! let rectangle = Polygon::<XY>::from_wkt("POLYGON ((0 0, 2 0, 2 1, 0 1, 0 0))").unwrap();
//!
//! assert!(a.union(&b).unwrap().equals(&rectangle).unwrap());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use coord::Coordinate;
pub use dimension::{Dimension, Dimensions, HasM, HasZ, XY, XYM, XYZ, XYZM};
pub use error::{GeosError, Result};

pub mod algorithm;
pub mod coord;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod io;
pub mod native;
#[cfg(test)]
pub(crate) mod test;
