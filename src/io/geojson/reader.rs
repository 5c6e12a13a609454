use geojson::{PolygonType, Position, Value};

use crate::coord::Coordinate;
use crate::dimension::{Dimension, Dimensions};
use crate::error::{GeosError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::geojson::{Feature, FeatureCollection};

fn coord<D: Dimension>(position: &Position) -> Result<Coordinate<D>> {
    let [x, y, rest @ ..] = position.as_slice() else {
        return Err(GeosError::GeoJson(format!(
            "position needs at least two values, got {}",
            position.len()
        )));
    };
    let source = Dimensions::from_components(!rest.is_empty(), rest.len() > 1);
    if !source.contains(D::DIMENSIONS) {
        return Err(GeosError::CannotConvertCoordinateTypes {
            from: source,
            to: D::DIMENSIONS,
        });
    }
    let z = D::HAS_Z.then(|| rest[0]);
    let m = D::HAS_M.then(|| rest[1]);
    Ok(Coordinate::from_parts(*x, *y, z, m))
}

fn coords<D: Dimension>(positions: &[Position]) -> Result<Vec<Coordinate<D>>> {
    positions.iter().map(coord).collect()
}

fn polygon<D: Dimension>(rings: &PolygonType) -> Result<Polygon<D>> {
    let mut rings = rings
        .iter()
        .map(|ring| LinearRing::try_new(coords(ring)?))
        .collect::<Result<Vec<_>>>()?
        .into_iter();
    let exterior = rings.next().ok_or(GeosError::TooFewPoints)?;
    Ok(Polygon::new(exterior, rings.collect()))
}

impl<D: Dimension> TryFrom<&geojson::Geometry> for Geometry<D> {
    type Error = GeosError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        let geometry = match &value.value {
            Value::Point(position) => Point::new(coord::<D>(position)?).into(),
            Value::MultiPoint(positions) => MultiPoint::new(
                positions
                    .iter()
                    .map(|p| coord::<D>(p).map(Point::new))
                    .collect::<Result<_>>()?,
            )
            .into(),
            Value::LineString(positions) => LineString::try_new(coords::<D>(positions)?)?.into(),
            Value::MultiLineString(lines) => MultiLineString::new(
                lines
                    .iter()
                    .map(|line| LineString::try_new(coords::<D>(line)?))
                    .collect::<Result<_>>()?,
            )
            .into(),
            Value::Polygon(rings) => polygon::<D>(rings)?.into(),
            Value::MultiPolygon(polygons) => MultiPolygon::new(
                polygons.iter().map(polygon::<D>).collect::<Result<_>>()?,
            )
            .into(),
            Value::GeometryCollection(geometries) => GeometryCollection::new(
                geometries
                    .iter()
                    .map(Geometry::<D>::try_from)
                    .collect::<Result<_>>()?,
            )
            .into(),
        };
        Ok(geometry)
    }
}

impl<D: Dimension> TryFrom<geojson::Feature> for Feature<D> {
    type Error = GeosError;

    fn try_from(value: geojson::Feature) -> Result<Self> {
        Ok(Feature {
            geometry: value.geometry.as_ref().map(Geometry::<D>::try_from).transpose()?,
            id: value.id,
            properties: value.properties,
        })
    }
}

impl<D: Dimension> TryFrom<geojson::FeatureCollection> for FeatureCollection<D> {
    type Error = GeosError;

    fn try_from(value: geojson::FeatureCollection) -> Result<Self> {
        Ok(FeatureCollection {
            features: value
                .features
                .into_iter()
                .map(Feature::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::{XY, XYM, XYZ, XYZM};

    fn geometry(value: Value) -> geojson::Geometry {
        geojson::Geometry::new(value)
    }

    #[test]
    fn positions_by_dimension() {
        let point = geometry(Value::Point(vec![1., 2., 3., 4.]));
        assert_eq!(
            Geometry::<XYZM>::try_from(&point).unwrap(),
            Geometry::Point(Point::new(Coordinate::<XYZM>::new(1., 2., 3., 4.)))
        );
        assert_eq!(
            Geometry::<XYM>::try_from(&point).unwrap(),
            Geometry::Point(Point::new(Coordinate::<XYM>::new(1., 2., 4.)))
        );

        let flat = geometry(Value::Point(vec![1., 2.]));
        assert!(Geometry::<XY>::try_from(&flat).is_ok());
        assert_eq!(
            Geometry::<XYZ>::try_from(&flat).unwrap_err(),
            GeosError::CannotConvertCoordinateTypes {
                from: Dimensions::XY,
                to: Dimensions::XYZ,
            }
        );
    }

    #[test]
    fn short_position() {
        let point = geometry(Value::Point(vec![1.]));
        assert!(matches!(
            Geometry::<XY>::try_from(&point),
            Err(GeosError::GeoJson(_))
        ));
    }

    #[test]
    fn open_ring_is_rejected() {
        let polygon = geometry(Value::Polygon(vec![vec![
            vec![0., 0.],
            vec![1., 0.],
            vec![1., 1.],
            vec![0., 1.],
        ]]));
        assert_eq!(
            Geometry::<XY>::try_from(&polygon).unwrap_err(),
            GeosError::RingNotClosed
        );
    }

    #[test]
    fn nested_collection() {
        let collection = geometry(Value::GeometryCollection(vec![
            geometry(Value::LineString(vec![vec![0., 0.], vec![1., 1.]])),
            geometry(Value::GeometryCollection(vec![])),
        ]));
        let Geometry::GeometryCollection(parsed) = Geometry::<XY>::try_from(&collection).unwrap()
        else {
            panic!("expected a collection");
        };
        assert_eq!(parsed.geometries().len(), 2);
    }
}
