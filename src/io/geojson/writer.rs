use geojson::{PolygonType, Position, Value};

use crate::coord::Coordinate;
use crate::dimension::Dimension;
use crate::geometry::{Geometry, LinearRing, Polygon};
use crate::io::geojson::{Feature, FeatureCollection};

// Positions carry no measure: GeoJSON defines at most a height, and a NaN height standing in
// for an absent one would be written as `null`.
fn position<D: Dimension>(coord: &Coordinate<D>) -> Position {
    match coord.z_opt() {
        Some(z) => vec![coord.x(), coord.y(), z],
        None => vec![coord.x(), coord.y()],
    }
}

fn positions<D: Dimension>(coords: &[Coordinate<D>]) -> Vec<Position> {
    coords.iter().map(position).collect()
}

fn ring<D: Dimension>(ring: &LinearRing<D>) -> Vec<Position> {
    positions(ring.coords())
}

fn polygon<D: Dimension>(polygon: &Polygon<D>) -> PolygonType {
    std::iter::once(polygon.exterior())
        .chain(polygon.holes())
        .map(ring)
        .collect()
}

impl<D: Dimension> From<&Geometry<D>> for geojson::Geometry {
    fn from(value: &Geometry<D>) -> Self {
        let value = match value {
            Geometry::Point(g) => Value::Point(position(&g.coord())),
            Geometry::LineString(g) => Value::LineString(positions(g.coords())),
            Geometry::Polygon(g) => Value::Polygon(polygon(g)),
            Geometry::MultiPoint(g) => {
                Value::MultiPoint(g.points().iter().map(|p| position(&p.coord())).collect())
            }
            Geometry::MultiLineString(g) => Value::MultiLineString(
                g.line_strings()
                    .iter()
                    .map(|line| positions(line.coords()))
                    .collect(),
            ),
            Geometry::MultiPolygon(g) => {
                Value::MultiPolygon(g.polygons().iter().map(polygon).collect())
            }
            Geometry::GeometryCollection(g) => Value::GeometryCollection(
                g.geometries().iter().map(geojson::Geometry::from).collect(),
            ),
        };
        geojson::Geometry::new(value)
    }
}

impl<D: Dimension> From<&Feature<D>> for geojson::Feature {
    fn from(value: &Feature<D>) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: value.geometry.as_ref().map(geojson::Geometry::from),
            id: value.id.clone(),
            properties: value.properties.clone(),
            foreign_members: None,
        }
    }
}

impl<D: Dimension> From<&FeatureCollection<D>> for geojson::FeatureCollection {
    fn from(value: &FeatureCollection<D>) -> Self {
        geojson::FeatureCollection {
            bbox: None,
            features: value.features.iter().map(geojson::Feature::from).collect(),
            foreign_members: None,
        }
    }
}
