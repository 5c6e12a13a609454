use geos_sys::GEOSBoundary_r;

use crate::algorithm::dispatch::unary;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::ToNative;

/// The combinatorial boundary: rings of polygons, end points of open lines.
pub trait Boundary: ToNative {
    fn boundary(&self) -> Result<Geometry<WithoutM<Self::Dim>>> {
        unary(self, |h, g| unsafe { GEOSBoundary_r(h, g) })
    }
}

impl<T: ToNative> Boundary for T {}
