use geos_sys::{GEOSSimplify_r, GEOSTopologyPreserveSimplify_r};

use crate::algorithm::dispatch::unary_optional;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::ToNative;

/// Vertex reduction by planar distance tolerance.
///
/// Both variants return `None` when the geometry collapses entirely.
pub trait Simplify: ToNative {
    /// Douglas-Peucker simplification. The result may be invalid.
    fn simplify(&self, tolerance: f64) -> Result<Option<Geometry<WithoutM<Self::Dim>>>> {
        unary_optional(self, |h, g| unsafe { GEOSSimplify_r(h, g, tolerance) })
    }

    /// Simplification that keeps rings simple and holes inside their shells.
    fn topology_preserve_simplify(
        &self,
        tolerance: f64,
    ) -> Result<Option<Geometry<WithoutM<Self::Dim>>>> {
        unary_optional(self, |h, g| unsafe {
            GEOSTopologyPreserveSimplify_r(h, g, tolerance)
        })
    }
}

impl<T: ToNative> Simplify for T {}
