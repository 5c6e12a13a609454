use std::ffi::CString;

use geos_sys::{GEOSRelatePattern_r, GEOSRelate_r};

use crate::algorithm::dispatch::{predicate, with_natives};
use crate::error::Result;
use crate::io::geos::ToNative;

/// DE-9IM relationships between two geometries.
pub trait Relate {
    /// The DE-9IM intersection matrix, e.g. `"212101212"`.
    fn relate<G: ToNative + ?Sized>(&self, other: &G) -> Result<String>;

    /// Whether the intersection matrix matches `pattern`, which may use `T`, `F`, `*` and
    /// `0`-`2`.
    fn relate_pattern<G: ToNative + ?Sized>(&self, other: &G, pattern: &str) -> Result<bool>;
}

impl<T: ToNative + ?Sized> Relate for T {
    fn relate<G: ToNative + ?Sized>(&self, other: &G) -> Result<String> {
        with_natives(self, other, |a, b| {
            let matrix = unsafe { GEOSRelate_r(a.context().as_raw(), a.as_ptr(), b.as_ptr()) };
            a.context().take_string(matrix)
        })
    }

    fn relate_pattern<G: ToNative + ?Sized>(&self, other: &G, pattern: &str) -> Result<bool> {
        let pattern = CString::new(pattern)?;
        predicate(self, other, |h, a, b| unsafe {
            GEOSRelatePattern_r(h, a, b, pattern.as_ptr())
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeosError;
    use crate::test::polygon::{shifted_square, unit_square};

    #[test]
    fn overlapping_squares() {
        let matrix = unit_square().relate(&shifted_square(0.5)).unwrap();
        assert_eq!(matrix, "212101212");
        assert!(unit_square()
            .relate_pattern(&shifted_square(0.5), "T*T***T**")
            .unwrap());
        assert!(!unit_square()
            .relate_pattern(&shifted_square(3.), "T********")
            .unwrap());
    }

    #[test]
    fn nul_in_pattern() {
        assert!(matches!(
            unit_square().relate_pattern(&unit_square(), "T\0"),
            Err(GeosError::InvalidString(_))
        ));
    }
}
