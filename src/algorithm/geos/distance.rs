use geos_sys::GEOSDistance_r;

use crate::algorithm::dispatch::binary_measure;
use crate::error::Result;
use crate::io::geos::ToNative;

/// Minimum planar distance between two geometries.
pub trait Distance {
    fn distance<G: ToNative + ?Sized>(&self, other: &G) -> Result<f64>;
}

impl<T: ToNative + ?Sized> Distance for T {
    fn distance<G: ToNative + ?Sized>(&self, other: &G) -> Result<f64> {
        binary_measure(self, other, |h, a, b, distance| unsafe {
            GEOSDistance_r(h, a, b, distance)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::{XY, XYZ};
    use crate::geometry::Point;
    use crate::test::polygon::{shifted_square, unit_square};
    use approx::assert_relative_eq;

    #[test]
    fn point_distance_ignores_height() {
        let a = Point::new(Coordinate::<XYZ>::new(0., 0., 0.));
        let b = Point::new(Coordinate::<XY>::new(3., 4.));
        assert_relative_eq!(a.distance(&b).unwrap(), 5.0);
    }

    #[test]
    fn polygons() {
        assert_relative_eq!(unit_square().distance(&shifted_square(3.)).unwrap(), 2.0);
        assert_eq!(unit_square().distance(&shifted_square(0.5)).unwrap(), 0.0);
    }
}
