use std::ptr;

use geos_sys::{
    GEOSConvexHull_r, GEOSGeom_getXMax_r, GEOSGeom_getXMin_r,
    GEOSGeom_getYMax_r, GEOSGeom_getYMin_r, GEOSGeometry, GEOSMinimumBoundingCircle_r,
    GEOSMinimumRotatedRectangle_r, GEOSMinimumWidth_r,
};

use crate::algorithm::dispatch::{read_result, unary, with_native};
use crate::dimension::XY;
use crate::error::Result;
use crate::geometry::{Circle, Envelope, Geometry, LineString, Point};
use crate::io::geos::ToNative;
use crate::native::NativeObject;

/// The smallest convex geometry containing every point of the input.
pub trait ConvexHull {
    fn convex_hull(&self) -> Result<Geometry<XY>>;
}

impl<T: ToNative + ?Sized> ConvexHull for T {
    fn convex_hull(&self) -> Result<Geometry<XY>> {
        unary(self, |h, g| unsafe { GEOSConvexHull_r(h, g) })
    }
}

/// Planar bounding shapes.
pub trait BoundingGeometry {
    /// The smallest circle enclosing the geometry.
    fn minimum_bounding_circle(&self) -> Result<Circle>;

    /// The rectangle of least area enclosing the geometry, at any rotation.
    ///
    /// Degenerate inputs yield a line string or point.
    fn minimum_rotated_rectangle(&self) -> Result<Geometry<XY>>;

    /// A two-point line spanning the minimum width of the geometry.
    fn minimum_width(&self) -> Result<LineString<XY>>;

    /// Axis-aligned bounds, or `None` for an empty geometry.
    fn envelope(&self) -> Result<Option<Envelope>>;
}

impl<T: ToNative + ?Sized> BoundingGeometry for T {
    fn minimum_bounding_circle(&self) -> Result<Circle> {
        with_native(self, |g| {
            let context = g.context();
            let mut radius = f64::NAN;
            let mut center: *mut GEOSGeometry = ptr::null_mut();
            let circle = unsafe {
                GEOSMinimumBoundingCircle_r(context.as_raw(), g.as_ptr(), &mut radius, &mut center)
            };
            // Both handles are adopted before either is checked, so neither leaks.
            let circle = unsafe { NativeObject::from_root(context, circle) };
            let center = read_result::<Point<XY>>(context, center);
            circle?;
            Ok(Circle::new(center?, radius))
        })
    }

    fn minimum_rotated_rectangle(&self) -> Result<Geometry<XY>> {
        unary(self, |h, g| unsafe { GEOSMinimumRotatedRectangle_r(h, g) })
    }

    fn minimum_width(&self) -> Result<LineString<XY>> {
        unary(self, |h, g| unsafe { GEOSMinimumWidth_r(h, g) })
    }

    fn envelope(&self) -> Result<Option<Envelope>> {
        with_native(self, |g| {
            if g.is_empty()? {
                return Ok(None);
            }
            let context = g.context();
            let (mut min_x, mut max_x, mut min_y, mut max_y) = (0., 0., 0., 0.);
            unsafe {
                context.check_status(GEOSGeom_getXMin_r(context.as_raw(), g.as_ptr(), &mut min_x))?;
                context.check_status(GEOSGeom_getXMax_r(context.as_raw(), g.as_ptr(), &mut max_x))?;
                context.check_status(GEOSGeom_getYMin_r(context.as_raw(), g.as_ptr(), &mut min_y))?;
                context.check_status(GEOSGeom_getYMax_r(context.as_raw(), g.as_ptr(), &mut max_y))?;
            }
            Ok(Some(Envelope::new(min_x, max_x, min_y, max_y)))
        })
    }
}
