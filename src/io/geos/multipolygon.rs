use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::geos::{create_collection, expect_type, read_members, FromNative};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> MultiPolygon<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let members = self
            .polygons()
            .iter()
            .map(|polygon| polygon.materialize(context))
            .collect::<Result<Vec<_>>>()?;
        create_collection(context, GeometryTypeId::MultiPolygon, members)
    }
}

impl<D: Dimension> FromNative for MultiPolygon<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::MultiPolygon])?;
        Ok(MultiPolygon::new(read_members(object, missing)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::XY;
    use crate::error::GeosError;
    use crate::geometry::MultiPoint;
    use crate::io::geos::ToNative;
    use crate::test::polygon::{square_with_hole, unit_square};

    #[test]
    fn round_trip() {
        let context = Context::open().unwrap();
        let multi = MultiPolygon::new(vec![unit_square(), square_with_hole()]);
        let native = multi.to_native(&context).unwrap();
        assert_eq!(MultiPolygon::<XY>::from_native(&native).unwrap(), multi);
    }

    #[test]
    fn wrong_collection_type() {
        let context = Context::open().unwrap();
        let native = MultiPolygon::new(vec![unit_square()])
            .to_native(&context)
            .unwrap();
        assert!(matches!(
            MultiPoint::<XY>::from_native(&native),
            Err(GeosError::TypeMismatch { .. })
        ));
    }
}
