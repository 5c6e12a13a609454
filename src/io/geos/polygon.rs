use std::ffi::c_uint;

use geos_sys::{GEOSGeom_createPolygon_r, GEOSGeometry};

use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::{LinearRing, Polygon};
use crate::io::geos::{expect_type, FromNative};
use crate::native::{Context, GeometryTypeId, MissingOrdinates, NativeObject, OwnedGeometry};

impl<D: Dimension> Polygon<D> {
    pub(crate) fn materialize<'c>(&self, context: &'c Context) -> Result<OwnedGeometry<'c>> {
        let exterior = self.exterior().materialize(context)?;
        let holes = self
            .holes()
            .iter()
            .map(|hole| hole.materialize(context))
            .collect::<Result<Vec<_>>>()?;

        // The engine takes ownership of the rings as soon as it is called.
        let mut holes: Vec<*mut GEOSGeometry> =
            holes.into_iter().map(OwnedGeometry::release).collect();
        let polygon = unsafe {
            GEOSGeom_createPolygon_r(
                context.as_raw(),
                exterior.release(),
                holes.as_mut_ptr(),
                holes.len() as c_uint,
            )
        };
        OwnedGeometry::new(context, polygon)
    }
}

impl<D: Dimension> FromNative for Polygon<D> {
    fn from_native_with(object: &NativeObject, missing: MissingOrdinates) -> Result<Self> {
        expect_type(object, &[GeometryTypeId::Polygon])?;
        let exterior = LinearRing::from_native_with(&object.exterior_ring()?, missing)?;
        let holes = (0..object.num_interior_rings()?)
            .map(|i| LinearRing::from_native_with(&object.interior_ring(i)?, missing))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, holes))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::{XY, XYZM};
    use crate::error::GeosError;
    use crate::geometry::LinearRing;
    use crate::io::geos::ToNative;
    use crate::test::polygon::{square_with_hole, unit_square};

    #[test]
    fn round_trip_with_hole() {
        let context = Context::open().unwrap();
        let native = square_with_hole().to_native(&context).unwrap();
        assert_eq!(Polygon::<XY>::from_native(&native).unwrap(), square_with_hole());
    }

    #[test]
    fn ring_closed_on_nan_ordinates() {
        let ring = LinearRing::try_new(vec![
            Coordinate::<XYZM>::new(0., 0., f64::NAN, f64::NAN),
            Coordinate::<XYZM>::new(1., 0., 5., f64::NAN),
            Coordinate::<XYZM>::new(1., 1., f64::NAN, 7.),
            Coordinate::<XYZM>::new(0., 0., f64::NAN, f64::NAN),
        ])
        .unwrap();
        let context = Context::open().unwrap();
        let native = Polygon::new(ring, vec![]).to_native(&context).unwrap();

        let read = Polygon::<XYZM>::from_native(&native).unwrap();
        let coords = read.exterior().coords();
        assert_eq!(coords.len(), 4);
        assert!(coords[0].equals_2d(&coords[3]));
        assert_eq!(coords[1].z(), 5.);
        assert_eq!(coords[2].m(), 7.);
    }

    #[test]
    fn empty_polygon_has_too_few_points() {
        let context = Context::open().unwrap();
        let native = unsafe {
            NativeObject::from_root(
                &context,
                geos_sys::GEOSGeom_createEmptyPolygon_r(context.as_raw()),
            )
        }
        .unwrap();
        assert!(native.is_empty().unwrap());
        assert_eq!(
            Polygon::<XY>::from_native(&native).unwrap_err(),
            GeosError::TooFewPoints
        );
        assert_ne!(unit_square(), square_with_hole());
    }
}
