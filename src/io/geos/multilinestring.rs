use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::geos::{create_collection, expect_type, read_members, FromNative};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> MultiLineString<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let members = self
            .line_strings()
            .iter()
            .map(|line| line.materialize(context))
            .collect::<Result<Vec<_>>>()?;
        create_collection(context, GeometryTypeId::MultiLineString, members)
    }
}

impl<D: Dimension> FromNative for MultiLineString<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::MultiLineString])?;
        Ok(MultiLineString::new(read_members(object, missing)?))
    }
}
