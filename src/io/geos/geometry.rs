use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::io::geos::FromNative;
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> Geometry<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        match self {
            Geometry::Point(g) => g.materialize(context),
            Geometry::LineString(g) => g.materialize(context),
            Geometry::Polygon(g) => g.materialize(context),
            Geometry::MultiPoint(g) => g.materialize(context),
            Geometry::MultiLineString(g) => g.materialize(context),
            Geometry::MultiPolygon(g) => g.materialize(context),
            Geometry::GeometryCollection(g) => g.materialize(context),
        }
    }
}

impl<D: Dimension> FromNative for Geometry<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        let geometry = match object.geometry_type()? {
            GeometryTypeId::Point => Point::<D>::from_native_with(object, missing)?.into(),
            GeometryTypeId::LineString | GeometryTypeId::LinearRing => {
                LineString::<D>::from_native_with(object, missing)?.into()
            }
            GeometryTypeId::Polygon => Polygon::<D>::from_native_with(object, missing)?.into(),
            GeometryTypeId::MultiPoint => {
                MultiPoint::<D>::from_native_with(object, missing)?.into()
            }
            GeometryTypeId::MultiLineString => {
                MultiLineString::<D>::from_native_with(object, missing)?.into()
            }
            GeometryTypeId::MultiPolygon => {
                MultiPolygon::<D>::from_native_with(object, missing)?.into()
            }
            GeometryTypeId::GeometryCollection => {
                GeometryCollection::<D>::from_native_with(object, missing)?.into()
            }
        };
        Ok(geometry)
    }
}
