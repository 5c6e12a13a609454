use geos_sys::GEOSArea_r;

use crate::algorithm::dispatch::measure;
use crate::error::Result;
use crate::io::geos::ToNative;

/// Unsigned planar area of a geometry.
pub trait Area {
    /// # Examples
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use geos_typed::algorithm::geos::Area;
    /// use geos_typed::geometry::Geometry;
    /// use geos_typed::io::wkt::FromWkt;
    /// use geos_typed::XY;
    ///
    /// let polygon = Geometry::<XY>::from_wkt("POLYGON ((0 0, 3 0, 3 2, 0 2, 0 0))").unwrap();
    /// assert_relative_eq!(polygon.area().unwrap(), 6.0);
    /// ```
    fn area(&self) -> Result<f64>;
}

impl<G: ToNative + ?Sized> Area for G {
    fn area(&self) -> Result<f64> {
        measure(self, |h, g, area| unsafe { GEOSArea_r(h, g, area) })
    }
}
