use geos_sys::GEOSGeom_createLinearRing_r;

use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::LinearRing;
use crate::io::geos::{expect_type, FromNative};
use crate::native::{Context, CoordSeq, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> LinearRing<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let seq = CoordSeq::from_coords(context, self.coords())?;
        let ring = unsafe { GEOSGeom_createLinearRing_r(context.as_raw(), seq.release()) };
        OwnedGeometry::new(context, ring)
    }
}

impl<D: Dimension> FromNative for LinearRing<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::LinearRing])?;
        LinearRing::try_new(object.coordinates(missing)?)
    }
}
