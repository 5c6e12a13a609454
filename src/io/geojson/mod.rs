//! Read from and write to [GeoJSON](https://geojson.org/) documents.
//!
//! Positions are read as `[x, y, z, m]`: a value needs a position at least as long as its
//! dimension requires. Measures are never written.

mod feature;
mod reader;
mod writer;

pub use feature::{Feature, FeatureCollection, GeoJson};
pub use geojson::feature::Id;
pub use geojson::JsonObject;
