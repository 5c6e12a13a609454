//! Geometry operations evaluated by the native engine.

pub(crate) mod dispatch;
pub mod geos;
