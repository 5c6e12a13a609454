//! Conversion between geometry values and engine handles.
//!
//! [`ToNative`] deep-copies a value into freshly owned engine memory. [`FromNative`] reads a
//! handle back, dispatching on the engine's runtime type tag and reading polygon rings and
//! collection members through views rather than copies.

mod geometry;
mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::ffi::c_uint;

use geos_sys::{GEOSGeom_createCollection_r, GEOSGeom_createEmptyCollection_r, GEOSGeometry};

use crate::dimension::Dimension;
use crate::error::{GeosError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

/// Values that can be materialized as an engine geometry.
pub trait ToNative {
    /// Coordinate dimension of the materialized geometry.
    type Dim: Dimension;

    /// Deep-copies `self` into a new root owned by `context`.
    fn to_native(&self, context: &Context) -> Result<NativeObject>;
}

/// Values that can be read back from an engine geometry.
pub trait FromNative: Sized {
    /// Reads `object`, failing when it lacks an ordinate `Self` needs.
    fn from_native(object: &NativeObject) -> Result<Self> {
        Self::from_native_with(object, MissingOrdinates::Reject)
    }

    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self>;
}

macro_rules! impl_to_native {
    ($($shape:ident),+) => {
        $(impl<D: Dimension> ToNative for $shape<D> {
            type Dim = D;

            fn to_native(&self, context: &Context) -> Result<NativeObject> {
                Ok(self.materialize(context)?.into_native())
            }
        })+
    };
}

impl_to_native!(
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry
);

/// Fails with [`GeosError::TypeMismatch`] unless `object` is one of `accepted`.
///
/// The first accepted type is reported as the expected one.
pub(crate) fn expect_type(object: &NativeObject, accepted: &[GeometryTypeId]) -> Result<()> {
    let actual = object.geometry_type()?;
    if accepted.contains(&actual) {
        Ok(())
    } else {
        Err(GeosError::TypeMismatch {
            actual,
            expected: accepted[0],
        })
    }
}

/// Reads every member of a multi-geometry or collection through views.
pub(crate) fn read_members<T: FromNative>(
    object: &NativeObject,
    missing: MissingOrdinates,
) -> Result<Vec<T>> {
    (0..object.num_geometries()?)
        .map(|i| T::from_native_with(&object.geometry_n(i)?, missing))
        .collect()
}

/// Builds a multi-geometry or collection; the new geometry adopts `members`.
pub(crate) fn create_collection<'c>(
    context: &'c Context,
    type_id: GeometryTypeId,
    members: Vec<OwnedGeometry<'c>>,
) -> Result<OwnedGeometry<'c>> {
    if members.is_empty() {
        let empty =
            unsafe { GEOSGeom_createEmptyCollection_r(context.as_raw(), type_id.to_native()) };
        return OwnedGeometry::new(context, empty);
    }

    // The engine takes ownership of the members as soon as it is called.
    let mut members: Vec<*mut GEOSGeometry> =
        members.into_iter().map(OwnedGeometry::release).collect();
    let collection = unsafe {
        GEOSGeom_createCollection_r(
            context.as_raw(),
            type_id.to_native(),
            members.as_mut_ptr(),
            members.len() as c_uint,
        )
    };
    OwnedGeometry::new(context, collection)
}
