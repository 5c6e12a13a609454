use geos_sys::GEOSLength_r;

use crate::algorithm::dispatch::measure;
use crate::error::Result;
use crate::io::geos::ToNative;

/// Planar length of a geometry's linework. Polygons report their perimeter.
pub trait Length {
    fn length(&self) -> Result<f64>;
}

impl<G: ToNative + ?Sized> Length for G {
    fn length(&self) -> Result<f64> {
        measure(self, |h, g, length| unsafe { GEOSLength_r(h, g, length) })
    }
}
