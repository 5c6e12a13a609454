//! Dimension-tagged geometry values.
//!
//! These are plain data values; they own no native resources and are only projected into
//! engine handles (see [`crate::native`]) while an operation runs.

mod circle;
mod envelope;
mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use circle::Circle;
pub use envelope::Envelope;
pub use geometrycollection::GeometryCollection;
pub use linearring::LinearRing;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

use crate::coord::Coordinate;
use crate::dimension::{Dimension, NarrowTo};
use crate::error::{GeosError, Result};
use crate::native::GeometryTypeId;

/// Any geometry of dimension `D`.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<D: Dimension> {
    Point(Point<D>),
    LineString(LineString<D>),
    Polygon(Polygon<D>),
    MultiPoint(MultiPoint<D>),
    MultiLineString(MultiLineString<D>),
    MultiPolygon(MultiPolygon<D>),
    GeometryCollection(GeometryCollection<D>),
}

impl<D: Dimension> Geometry<D> {
    /// The native type this value materializes as.
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }

    pub fn convert<T: Dimension>(&self) -> Geometry<T>
    where
        D: NarrowTo<T>,
    {
        match self {
            Geometry::Point(g) => Geometry::Point(g.convert()),
            Geometry::LineString(g) => Geometry::LineString(g.convert()),
            Geometry::Polygon(g) => Geometry::Polygon(g.convert()),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.convert()),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.convert()),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.convert()),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.convert()),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<Geometry<T>> {
        Ok(match self {
            Geometry::Point(g) => Geometry::Point(g.try_convert()?),
            Geometry::LineString(g) => Geometry::LineString(g.try_convert()?),
            Geometry::Polygon(g) => Geometry::Polygon(g.try_convert()?),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.try_convert()?),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.try_convert()?),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.try_convert()?),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.try_convert()?),
        })
    }

    /// Calls `f` on every coordinate, depth first.
    pub fn visit_coords(&self, f: &mut impl FnMut(&Coordinate<D>)) {
        match self {
            Geometry::Point(g) => f(&g.coord()),
            Geometry::LineString(g) => g.coords().iter().for_each(f),
            Geometry::Polygon(g) => visit_polygon(g, f),
            Geometry::MultiPoint(g) => g.points().iter().for_each(|p| f(&p.coord())),
            Geometry::MultiLineString(g) => g
                .line_strings()
                .iter()
                .for_each(|l| l.coords().iter().for_each(&mut *f)),
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .for_each(|p| visit_polygon(p, &mut *f)),
            Geometry::GeometryCollection(g) => {
                g.geometries().iter().for_each(|child| child.visit_coords(&mut *f))
            }
        }
    }
}

fn visit_polygon<D: Dimension>(polygon: &Polygon<D>, f: &mut impl FnMut(&Coordinate<D>)) {
    polygon.exterior().coords().iter().for_each(&mut *f);
    for hole in polygon.holes() {
        hole.coords().iter().for_each(&mut *f);
    }
}

macro_rules! impl_variant_conversions {
    ($shape:ident, $type_id:ident) => {
        impl<D: Dimension> From<$shape<D>> for Geometry<D> {
            fn from(value: $shape<D>) -> Self {
                Geometry::$shape(value)
            }
        }

        impl<D: Dimension> TryFrom<Geometry<D>> for $shape<D> {
            type Error = GeosError;

            fn try_from(value: Geometry<D>) -> Result<Self> {
                match value {
                    Geometry::$shape(g) => Ok(g),
                    other => Err(GeosError::TypeMismatch {
                        actual: other.geometry_type(),
                        expected: GeometryTypeId::$type_id,
                    }),
                }
            }
        }
    };
}

impl_variant_conversions!(Point, Point);
impl_variant_conversions!(LineString, LineString);
impl_variant_conversions!(Polygon, Polygon);
impl_variant_conversions!(MultiPoint, MultiPoint);
impl_variant_conversions!(MultiLineString, MultiLineString);
impl_variant_conversions!(MultiPolygon, MultiPolygon);
impl_variant_conversions!(GeometryCollection, GeometryCollection);

impl<D: Dimension> From<LinearRing<D>> for Geometry<D> {
    fn from(value: LinearRing<D>) -> Self {
        Geometry::LineString(value.into())
    }
}
