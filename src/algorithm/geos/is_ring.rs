use geos_sys::GEOSisRing_r;

use crate::algorithm::dispatch::unary_predicate;
use crate::dimension::Dimension;
use crate::error::Result;
use crate::geometry::{LineString, LinearRing};

/// Returns `true` if the line is closed and simple.
pub trait IsRing {
    fn is_ring(&self) -> Result<bool>;
}

macro_rules! iter_geos_impl {
    ($type:ident) => {
        impl<D: Dimension> IsRing for $type<D> {
            fn is_ring(&self) -> Result<bool> {
                unary_predicate(self, |h, g| unsafe { GEOSisRing_r(h, g) })
            }
        }
    };
}

iter_geos_impl!(LineString);
iter_geos_impl!(LinearRing);
