use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::geos::{create_collection, expect_type, read_members, FromNative};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> GeometryCollection<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let members = self
            .geometries()
            .iter()
            .map(|geometry| geometry.materialize(context))
            .collect::<Result<Vec<_>>>()?;
        create_collection(context, GeometryTypeId::GeometryCollection, members)
    }
}

impl<D: Dimension> FromNative for GeometryCollection<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::GeometryCollection])?;
        Ok(GeometryCollection::new(read_members(object, missing)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::XY;
    use crate::geometry::{Geometry, MultiPoint, Point};
    use crate::io::geos::ToNative;
    use crate::test::polygon::unit_square;

    #[test]
    fn nested_collection() {
        let context = Context::open().unwrap();
        let inner = GeometryCollection::new(vec![Geometry::Point(Point::new(
            Coordinate::<XY>::new(9., 9.),
        ))]);
        let collection = GeometryCollection::new(vec![
            unit_square().into(),
            MultiPoint::new(vec![]).into(),
            inner.into(),
        ]);

        let native = collection.to_native(&context).unwrap();
        assert_eq!(native.num_geometries().unwrap(), 3);
        assert_eq!(
            GeometryCollection::<XY>::from_native(&native).unwrap(),
            collection
        );
    }
}
