use crate::coord::Coordinate;
use crate::dimension::Dimension;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo<D: Dimension>(coord: &Coordinate<D>) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert any Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo<D: Dimension>(point: &Point<D>) -> geo::Point {
    geo::Point(coord_to_geo(&point.coord()))
}

fn coords_to_geo<D: Dimension>(coords: &[Coordinate<D>]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(coord_to_geo).collect())
}

/// Convert any LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo<D: Dimension>(line_string: &LineString<D>) -> geo::LineString {
    coords_to_geo(line_string.coords())
}

fn ring_to_geo<D: Dimension>(ring: &LinearRing<D>) -> geo::LineString {
    coords_to_geo(ring.coords())
}

/// Convert any Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo<D: Dimension>(polygon: &Polygon<D>) -> geo::Polygon {
    geo::Polygon::new(
        ring_to_geo(polygon.exterior()),
        polygon.holes().iter().map(ring_to_geo).collect(),
    )
}

/// Convert any MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo<D: Dimension>(multi_point: &MultiPoint<D>) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert any MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo<D: Dimension>(
    multi_line_string: &MultiLineString<D>,
) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert any MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo<D: Dimension>(multi_polygon: &MultiPolygon<D>) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert any GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo<D: Dimension>(
    geometry_collection: &GeometryCollection<D>,
) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        geometry_collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo<D: Dimension>(geometry: &Geometry<D>) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

impl<D: Dimension> From<&Geometry<D>> for geo::Geometry {
    fn from(value: &Geometry<D>) -> Self {
        geometry_to_geo(value)
    }
}
