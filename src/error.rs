//! Defines [`GeosError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::dimension::Dimensions;
use crate::native::GeometryTypeId;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeosError {
    /// A line string or ring has fewer coordinates than its shape requires.
    #[error("Too few points")]
    TooFewPoints,

    /// The first and last coordinates of a linear ring differ.
    #[error("Ring not closed")]
    RingNotClosed,

    /// The source does not carry every coordinate component the target dimension needs.
    #[error("Cannot convert coordinate types from {from} to {to}")]
    CannotConvertCoordinateTypes {
        /// Dimension of the source.
        from: Dimensions,
        /// Requested dimension.
        to: Dimensions,
    },

    /// A native geometry was read as the wrong shape.
    #[error("Type mismatch: actual {actual:?}, expected {expected:?}")]
    TypeMismatch {
        /// Native type of the geometry.
        actual: GeometryTypeId,
        /// Type the caller asked for.
        expected: GeometryTypeId,
    },

    /// The engine reported a geometry type id outside the known table.
    #[error("Unknown native geometry type id {0}")]
    UnknownGeometryType(i32),

    /// A native session could not be created.
    #[error("GEOS engine unavailable")]
    EngineUnavailable,

    /// A native call failed. Holds every message the engine emitted on the session.
    #[error("GEOS error: {}", .0.join("; "))]
    LibraryError(Vec<String>),

    /// Text handed to the engine contained an interior NUL byte.
    #[error("Invalid string: {0}")]
    InvalidString(String),

    /// GeoJSON error
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeosError>;

impl From<std::ffi::NulError> for GeosError {
    fn from(err: std::ffi::NulError) -> Self {
        GeosError::InvalidString(err.to_string())
    }
}

impl From<geojson::Error> for GeosError {
    fn from(err: geojson::Error) -> Self {
        GeosError::GeoJson(err.to_string())
    }
}
