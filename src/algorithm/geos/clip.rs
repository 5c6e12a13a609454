use geos_sys::GEOSClipByRect_r;

use crate::algorithm::dispatch::unary_optional;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::{Envelope, Geometry};
use crate::io::geos::ToNative;

/// Fast clipping against an axis-aligned rectangle.
///
/// The result is not guaranteed to be valid; it is `None` when nothing lies inside the
/// rectangle.
pub trait ClipByRect: ToNative {
    fn clip_by_rect(&self, rect: &Envelope) -> Result<Option<Geometry<WithoutM<Self::Dim>>>> {
        unary_optional(self, |h, g| unsafe {
            GEOSClipByRect_r(h, g, rect.min_x, rect.min_y, rect.max_x, rect.max_y)
        })
    }
}

impl<T: ToNative> ClipByRect for T {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geos::Area;
    use crate::test::heights;
    use crate::test::polygon::{square_with_hole, unit_square_z};
    use approx::assert_relative_eq;

    #[test]
    fn clip_corner() {
        let clipped = square_with_hole()
            .clip_by_rect(&Envelope::new(-1., 2., -1., 2.))
            .unwrap()
            .unwrap();
        assert_relative_eq!(clipped.area().unwrap(), 4.0);
    }

    #[test]
    fn clip_raised_square() {
        let clipped = unit_square_z()
            .clip_by_rect(&Envelope::new(0.5, 2., -1., 2.))
            .unwrap()
            .unwrap();
        assert_relative_eq!(clipped.area().unwrap(), 0.5);
        assert!(heights(&clipped).iter().all(|z| z.is_nan() || *z == 5.));
    }

    #[test]
    fn clip_outside_is_none() {
        let clipped = square_with_hole()
            .clip_by_rect(&Envelope::new(20., 30., 20., 30.))
            .unwrap();
        assert_eq!(clipped, None);
    }
}
