use geos_sys::GEOSGeom_createLineString_r;

use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::LineString;
use crate::io::geos::{expect_type, FromNative};
use crate::native::{Context, CoordSeq, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> LineString<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let seq = CoordSeq::from_coords(context, self.coords())?;
        let line = unsafe { GEOSGeom_createLineString_r(context.as_raw(), seq.release()) };
        OwnedGeometry::new(context, line)
    }
}

impl<D: Dimension> FromNative for LineString<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(
            object,
            &[GeometryTypeId::LineString, GeometryTypeId::LinearRing],
        )?;
        LineString::try_new(object.coordinates(missing)?)
    }
}
