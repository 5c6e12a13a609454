use geos_sys::GEOSMakeValid_r;

use crate::algorithm::dispatch::unary;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::ToNative;

/// Repairs an invalid geometry without dropping any of its vertices.
///
/// Collapsed parts may come back as lower-dimensional geometries, so the result is often a
/// collection.
pub trait MakeValid: ToNative {
    fn make_valid(&self) -> Result<Geometry<WithoutM<Self::Dim>>> {
        unary(self, |h, g| unsafe { GEOSMakeValid_r(h, g) })
    }
}

impl<T: ToNative> MakeValid for T {}
