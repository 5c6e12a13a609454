//! Conversions between geometry values and engine handles, text and binary encodings, and
//! other geometry crates.

pub mod geo;
pub mod geojson;
pub mod geos;
pub mod wkb;
pub mod wkt;
