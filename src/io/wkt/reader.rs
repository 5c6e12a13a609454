use std::ffi::CString;
use std::ptr::NonNull;

use geos_sys::{
    GEOSWKTReader, GEOSWKTReader_create_r, GEOSWKTReader_destroy_r, GEOSWKTReader_read_r,
};

use crate::error::Result;
use crate::io::geos::FromNative;
use crate::native::{Context, NativeObject};

struct WktReader<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSWKTReader>,
}

impl<'c> WktReader<'c> {
    fn new(context: &'c Context) -> Result<Self> {
        let ptr = unsafe { GEOSWKTReader_create_r(context.as_raw()) };
        Ok(Self {
            context,
            ptr: context.check_ptr(ptr)?,
        })
    }

    fn read(&self, wkt: &str) -> Result<NativeObject> {
        let wkt = CString::new(wkt)?;
        unsafe {
            let geometry =
                GEOSWKTReader_read_r(self.context.as_raw(), self.ptr.as_ptr(), wkt.as_ptr());
            NativeObject::from_root(self.context, geometry)
        }
    }
}

impl Drop for WktReader<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKTReader_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// Decode a value from Well-Known Text.
pub trait FromWkt: Sized {
    /// Fails with [`LibraryError`](crate::error::GeosError::LibraryError) on malformed or
    /// empty input, and with
    /// [`CannotConvertCoordinateTypes`](crate::error::GeosError::CannotConvertCoordinateTypes)
    /// when the text lacks an ordinate `Self` needs.
    fn from_wkt(wkt: &str) -> Result<Self>;
}

impl<T: FromNative> FromWkt for T {
    fn from_wkt(wkt: &str) -> Result<Self> {
        let context = Context::open()?;
        let native = WktReader::new(&context)?.read(wkt)?;
        T::from_native(&native)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::{Dimensions, XY, XYM, XYZ, XYZM};
    use crate::error::GeosError;
    use crate::geometry::{Geometry, Point, Polygon};
    use crate::test::polygon::unit_square;

    #[test]
    fn read_polygon() {
        let polygon = Polygon::<XY>::from_wkt("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
        assert_eq!(polygon, unit_square());
    }

    #[test]
    fn read_point_zm() {
        let point = Point::<XYZM>::from_wkt("POINT ZM (1 2 3 4)").unwrap();
        assert_eq!(point, Point::new(Coordinate::<XYZM>::new(1., 2., 3., 4.)));
        let narrowed = Point::<XY>::from_wkt("POINT ZM (1 2 3 4)").unwrap();
        assert_eq!(narrowed, Point::new(Coordinate::<XY>::new(1., 2.)));
    }

    #[test]
    fn read_point_m() {
        let point = Point::<XYM>::from_wkt("POINT M (1 2 3)").unwrap();
        assert_eq!(point, Point::new(Coordinate::<XYM>::new(1., 2., 3.)));
        assert_eq!(
            Point::<XYZ>::from_wkt("POINT M (1 2 3)").unwrap_err(),
            GeosError::CannotConvertCoordinateTypes {
                from: Dimensions::XYM,
                to: Dimensions::XYZ,
            }
        );
    }

    #[test]
    fn flat_text_is_not_three_dimensional() {
        assert_eq!(
            Geometry::<XYZ>::from_wkt("LINESTRING (0 0, 1 1)").unwrap_err(),
            GeosError::CannotConvertCoordinateTypes {
                from: crate::dimension::Dimensions::XY,
                to: crate::dimension::Dimensions::XYZ,
            }
        );
    }

    #[test]
    fn malformed_text() {
        crate::test::init_logging();
        let err = Geometry::<XY>::from_wkt("POLYGON ((0 0, 1 0").unwrap_err();
        let GeosError::LibraryError(messages) = err else {
            panic!("expected an engine error");
        };
        assert!(!messages.is_empty());
        assert!(matches!(
            Geometry::<XY>::from_wkt(""),
            Err(GeosError::LibraryError(_))
        ));
    }

    #[test]
    fn wrong_shape() {
        assert!(matches!(
            Point::<XY>::from_wkt("LINESTRING (0 0, 1 1)"),
            Err(GeosError::TypeMismatch { .. })
        ));
    }
}
