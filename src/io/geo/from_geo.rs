use crate::coord::Coordinate;
use crate::dimension::XY;
use crate::error::{GeosError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

fn coord_from_geo(coord: geo::Coord) -> Coordinate<XY> {
    Coordinate::<XY>::new(coord.x, coord.y)
}

fn line_string_from_geo(line_string: geo::LineString) -> Result<LineString<XY>> {
    LineString::try_new(line_string.into_iter().map(coord_from_geo).collect())
}

/// `geo` closes rings implicitly; make the closing coordinate explicit.
fn ring_from_geo(mut ring: geo::LineString) -> Result<LinearRing<XY>> {
    ring.close();
    LinearRing::try_new(ring.into_iter().map(coord_from_geo).collect())
}

fn polygon_from_geo(polygon: geo::Polygon) -> Result<Polygon<XY>> {
    let (exterior, interiors) = polygon.into_inner();
    let holes = interiors
        .into_iter()
        .map(ring_from_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(ring_from_geo(exterior)?, holes))
}

impl TryFrom<geo::Geometry> for Geometry<XY> {
    type Error = GeosError;

    /// `Line` becomes a line string; `Rect` and `Triangle` become polygons.
    fn try_from(value: geo::Geometry) -> Result<Self> {
        let geometry = match value {
            geo::Geometry::Point(p) => Point::new(coord_from_geo(p.0)).into(),
            geo::Geometry::Line(line) => {
                line_string_from_geo(geo::LineString::new(vec![line.start, line.end]))?.into()
            }
            geo::Geometry::LineString(ls) => line_string_from_geo(ls)?.into(),
            geo::Geometry::Polygon(polygon) => polygon_from_geo(polygon)?.into(),
            geo::Geometry::MultiPoint(mp) => MultiPoint::new(
                mp.into_iter()
                    .map(|p| Point::new(coord_from_geo(p.0)))
                    .collect(),
            )
            .into(),
            geo::Geometry::MultiLineString(mls) => MultiLineString::new(
                mls.into_iter()
                    .map(line_string_from_geo)
                    .collect::<Result<_>>()?,
            )
            .into(),
            geo::Geometry::MultiPolygon(mp) => MultiPolygon::new(
                mp.into_iter()
                    .map(polygon_from_geo)
                    .collect::<Result<_>>()?,
            )
            .into(),
            geo::Geometry::GeometryCollection(gc) => GeometryCollection::new(
                gc.into_iter()
                    .map(Geometry::<XY>::try_from)
                    .collect::<Result<_>>()?,
            )
            .into(),
            geo::Geometry::Rect(rect) => polygon_from_geo(rect.to_polygon())?.into(),
            geo::Geometry::Triangle(triangle) => polygon_from_geo(triangle.to_polygon())?.into(),
        };
        Ok(geometry)
    }
}
