use geos_sys::{GEOSisEmpty_r, GEOSisSimple_r, GEOSisValidReason_r, GEOSisValid_r};

use crate::algorithm::dispatch::{unary_predicate, with_native};
use crate::error::Result;
use crate::io::geos::ToNative;

/// Checks if the geometry is valid.
pub trait IsValid {
    fn is_valid(&self) -> Result<bool>;

    /// `"Valid Geometry"`, or a description of the first problem found along with its
    /// location.
    fn is_valid_reason(&self) -> Result<String>;
}

impl<T: ToNative + ?Sized> IsValid for T {
    fn is_valid(&self) -> Result<bool> {
        unary_predicate(self, |h, g| unsafe { GEOSisValid_r(h, g) })
    }

    fn is_valid_reason(&self) -> Result<String> {
        with_native(self, |g| {
            let reason = unsafe { GEOSisValidReason_r(g.context().as_raw(), g.as_ptr()) };
            g.context().take_string(reason)
        })
    }
}

/// Checks if the geometry has no points.
pub trait IsEmpty {
    fn is_empty(&self) -> Result<bool>;
}

impl<T: ToNative + ?Sized> IsEmpty for T {
    fn is_empty(&self) -> Result<bool> {
        unary_predicate(self, |h, g| unsafe { GEOSisEmpty_r(h, g) })
    }
}

/// Checks if the geometry has no anomalous points such as self-intersections.
pub trait IsSimple {
    fn is_simple(&self) -> Result<bool>;
}

impl<T: ToNative + ?Sized> IsSimple for T {
    fn is_simple(&self) -> Result<bool> {
        unary_predicate(self, |h, g| unsafe { GEOSisSimple_r(h, g) })
    }
}
