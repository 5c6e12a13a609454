use geos_sys::{GEOSGeometry, GEOSNormalize_r};

use crate::algorithm::dispatch::with_native;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::{FromNative, ToNative};
use crate::native::MissingOrdinates;

/// Rewrites a geometry in the engine's canonical vertex and member order.
pub trait Normalize: ToNative {
    fn normalize(&self) -> Result<Geometry<WithoutM<Self::Dim>>> {
        with_native(self, |g| {
            let context = g.context();
            // The handle was materialized for this call alone, so it may be rewritten in place.
            let status =
                unsafe { GEOSNormalize_r(context.as_raw(), g.as_ptr() as *mut GEOSGeometry) };
            if status == -1 {
                return Err(context.take_error());
            }
            Geometry::from_native_with(g, MissingOrdinates::FillNaN)
        })
    }
}

impl<T: ToNative> Normalize for T {}
