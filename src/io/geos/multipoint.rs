use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::geos::{create_collection, expect_type, read_members, FromNative};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> MultiPoint<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let members = self
            .points()
            .iter()
            .map(|point| point.materialize(context))
            .collect::<Result<Vec<_>>>()?;
        create_collection(context, GeometryTypeId::MultiPoint, members)
    }
}

impl<D: Dimension> FromNative for MultiPoint<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::MultiPoint])?;
        Ok(MultiPoint::new(read_members(object, missing)?))
    }
}
