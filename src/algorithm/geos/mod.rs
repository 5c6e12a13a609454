//! Bindings to the GEOS engine for geometry operations.
//!
//! Every trait here is implemented for all values that can be materialized natively
//! ([`ToNative`](crate::io::geos::ToNative)), so operations apply equally to concrete shapes
//! and to [`Geometry`](crate::geometry::Geometry).
//!
//! The dimension of a result follows fixed rules. Operations that only reason about planar
//! position return `XY` values. Operations that trace the input linework keep the height and
//! drop the measure ([`WithoutM`](crate::dimension::WithoutM)). Overlay operations combining
//! two operands return the union of both dimensions ([`UnionOf`](crate::dimension::UnionOf)).
//! Predicates are planar.

mod area;
mod boolean_ops;
mod boundary;
mod bounding;
mod buffer;
mod centroid;
mod clip;
mod distance;
mod is_ring;
mod is_valid;
mod length;
mod linework;
mod make_valid;
mod normalize;
mod predicates;
mod relate;
mod simplify;

pub use area::Area;
pub use boolean_ops::{BooleanOps, UnaryUnion};
pub use boundary::Boundary;
pub use bounding::{BoundingGeometry, ConvexHull};
pub use buffer::{Buffer, BufferStyle, CapStyle, JoinStyle};
pub use centroid::{Centroid, PointOnSurface};
pub use clip::ClipByRect;
pub use distance::Distance;
pub use is_ring::IsRing;
pub use is_valid::{IsEmpty, IsSimple, IsValid};
pub use length::Length;
pub use linework::{polygonize, LineMerge, Polygonize, Snap};
pub use make_valid::MakeValid;
pub use normalize::Normalize;
pub use predicates::Predicates;
pub use relate::Relate;
pub use simplify::Simplify;
