use geos_sys::GEOSGeom_createPoint_r;

use crate::dimension::Dimension;
use crate::error::{GeosError, Result};
use crate::geometry::Point;
use crate::io::geos::{expect_type, FromNative};
use crate::native::{Context, CoordSeq, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> Point<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let seq = CoordSeq::from_coords(context, &[self.coord()])?;
        let point = unsafe { GEOSGeom_createPoint_r(context.as_raw(), seq.release()) };
        OwnedGeometry::new(context, point)
    }
}

impl<D: Dimension> FromNative for Point<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::Point])?;
        let coords = object.coordinates(missing)?;
        coords
            .first()
            .copied()
            .map(Point::new)
            .ok_or(GeosError::TooFewPoints)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::{XY, XYM, XYZ, XYZM};
    use crate::io::geos::ToNative;

    #[test]
    fn xyzm_round_trip_narrows() {
        let context = Context::open().unwrap();
        let point = Point::new(Coordinate::<XYZ>::new(1., 2., 3.));
        let native = point.to_native(&context).unwrap();

        assert_eq!(Point::<XYZ>::from_native(&native).unwrap(), point);
        assert_eq!(
            Point::<XY>::from_native(&native).unwrap(),
            Point::new(Coordinate::<XY>::new(1., 2.))
        );
    }

    #[test]
    fn missing_height_is_rejected_or_filled() {
        let context = Context::open().unwrap();
        let native = Point::new(Coordinate::<XY>::new(1., 2.))
            .to_native(&context)
            .unwrap();

        assert!(matches!(
            Point::<XYZ>::from_native(&native),
            Err(GeosError::CannotConvertCoordinateTypes { .. })
        ));
        let filled = Point::<XYZ>::from_native_with(&native, MissingOrdinates::FillNaN).unwrap();
        assert_eq!(filled.x(), 1.);
        assert!(filled.z().is_nan());
    }

    #[test]
    fn measure_only_point() {
        let context = Context::open().unwrap();
        let point = Point::new(Coordinate::<XYM>::new(1., 2., 4.));
        let native = point.to_native(&context).unwrap();
        assert_eq!(Point::<XYM>::from_native(&native).unwrap(), point);

        let as_xyzm = Point::<XYZM>::from_native(&native).unwrap();
        assert_eq!(as_xyzm.m(), 4.);
        assert!(as_xyzm.z().is_nan());
    }

    #[test]
    fn not_a_point() {
        let context = Context::open().unwrap();
        let native = crate::test::polygon::unit_square()
            .to_native(&context)
            .unwrap();
        assert_eq!(
            Point::<XY>::from_native(&native).unwrap_err(),
            GeosError::TypeMismatch {
                actual: GeometryTypeId::Polygon,
                expected: GeometryTypeId::Point,
            }
        );
    }
}
