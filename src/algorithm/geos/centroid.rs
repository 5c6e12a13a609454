use geos_sys::{GEOSGetCentroid_r, GEOSPointOnSurface_r};

use crate::algorithm::dispatch::unary;
use crate::dimension::XY;
use crate::error::Result;
use crate::geometry::Point;
use crate::io::geos::ToNative;

/// Planar center of mass.
///
/// The centroid of an empty geometry fails with
/// [`TooFewPoints`](crate::error::GeosError::TooFewPoints).
pub trait Centroid {
    fn centroid(&self) -> Result<Point<XY>>;
}

impl<T: ToNative + ?Sized> Centroid for T {
    fn centroid(&self) -> Result<Point<XY>> {
        unary(self, |h, g| unsafe { GEOSGetCentroid_r(h, g) })
    }
}

/// A point guaranteed to lie in the interior of a geometry.
pub trait PointOnSurface {
    fn point_on_surface(&self) -> Result<Point<XY>>;
}

impl<T: ToNative + ?Sized> PointOnSurface for T {
    fn point_on_surface(&self) -> Result<Point<XY>> {
        unary(self, |h, g| unsafe { GEOSPointOnSurface_r(h, g) })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geos::Predicates;
    use crate::coord::Coordinate;
    use crate::error::GeosError;
    use crate::geometry::MultiPoint;
    use crate::test::polygon::{square_with_hole, unit_square_z};

    #[test]
    fn centroid_is_planar() {
        let centroid = unit_square_z().centroid().unwrap();
        assert_eq!(centroid, Point::new(Coordinate::<XY>::new(0.5, 0.5)));
    }

    #[test]
    fn point_on_surface_avoids_hole() {
        let polygon = square_with_hole();
        let point = polygon.point_on_surface().unwrap();
        assert!(polygon.contains(&point).unwrap());
        // The centroid of a symmetric donut falls in its hole.
        assert!(!polygon.contains(&polygon.centroid().unwrap()).unwrap());
    }

    #[test]
    fn empty_has_no_centroid() {
        assert_eq!(
            MultiPoint::<XY>::new(vec![]).centroid().unwrap_err(),
            GeosError::TooFewPoints
        );
    }
}
