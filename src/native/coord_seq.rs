use std::ffi::c_uint;
use std::marker::PhantomData;
use std::ptr::NonNull;

use geos_sys::{
    GEOSCoordSeq_create_r, GEOSCoordSeq_destroy_r, GEOSCoordSeq_getOrdinate_r, GEOSCoordSeq_getSize_r, GEOSCoordSeq_setOrdinate_r,
    GEOSCoordSequence,
};

use crate::coord::Coordinate;
use crate::dimension::{Dimension, Dimensions};
use crate::error::{GeosError, Result};
use crate::native::Context;

const X: c_uint = 0;
const Y: c_uint = 1;
const Z: c_uint = 2;
const M: c_uint = 3;

/// What to do when a native sequence lacks an ordinate the requested dimension needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingOrdinates {
    /// Fail with [`GeosError::CannotConvertCoordinateTypes`].
    #[default]
    Reject,
    /// Fill the missing ordinate with NaN.
    FillNaN,
}

/// Width of the native sequence that stores coordinates of dimension `D`.
///
/// The engine has no measure-only layout, so `XYM` is stored as `XYZM` with a NaN height.
pub(crate) fn native_width<D: Dimension>() -> c_uint {
    match D::DIMENSIONS {
        Dimensions::XY => 2,
        Dimensions::XYZ => 3,
        Dimensions::XYM | Dimensions::XYZM => 4,
    }
}

/// A coordinate sequence being filled before it is handed to a geometry constructor.
pub(crate) struct CoordSeq<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSCoordSequence>,
}

impl<'c> CoordSeq<'c> {
    pub(crate) fn from_coords<D: Dimension>(
        context: &'c Context,
        coords: &[Coordinate<D>],
    ) -> Result<Self> {
        let width = native_width::<D>();
        let ptr = unsafe { GEOSCoordSeq_create_r(context.as_raw(), coords.len() as c_uint, width) };
        let seq = Self {
            context,
            ptr: context.check_ptr(ptr)?,
        };

        for (i, coord) in coords.iter().enumerate() {
            seq.set(i, X, coord.x())?;
            seq.set(i, Y, coord.y())?;
            if width > Z {
                seq.set(i, Z, coord.z_opt().unwrap_or(f64::NAN))?;
            }
            if let Some(m) = coord.m_opt() {
                seq.set(i, M, m)?;
            }
        }
        Ok(seq)
    }

    fn set(&self, index: usize, ordinate: c_uint, value: f64) -> Result<()> {
        let status = unsafe {
            GEOSCoordSeq_setOrdinate_r(
                self.context.as_raw(),
                self.ptr.as_ptr(),
                index as c_uint,
                ordinate,
                value,
            )
        };
        self.context.check_status(status)
    }

    /// Gives up ownership after a geometry constructor adopted the sequence.
    pub(crate) fn release(self) -> *mut GEOSCoordSequence {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }
}

impl Drop for CoordSeq<'_> {
    fn drop(&mut self) {
        unsafe { GEOSCoordSeq_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// A read-only sequence owned by a geometry.
pub(crate) struct ConstCoordSeq<'a> {
    context: &'a Context,
    ptr: *const GEOSCoordSequence,
    owner: PhantomData<&'a GEOSCoordSequence>,
}

impl<'a> ConstCoordSeq<'a> {
    pub(crate) fn new(context: &'a Context, ptr: *const GEOSCoordSequence) -> Result<Self> {
        if ptr.is_null() {
            return Err(context.take_error());
        }
        Ok(Self {
            context,
            ptr,
            owner: PhantomData,
        })
    }

    pub(crate) fn size(&self) -> Result<usize> {
        let mut size: c_uint = 0;
        let status = unsafe { GEOSCoordSeq_getSize_r(self.context.as_raw(), self.ptr, &mut size) };
        self.context.check_status(status)?;
        Ok(size as usize)
    }

    fn ordinate(&self, index: usize, ordinate: c_uint) -> Result<f64> {
        let mut value = f64::NAN;
        let status = unsafe {
            GEOSCoordSeq_getOrdinate_r(
                self.context.as_raw(),
                self.ptr,
                index as c_uint,
                ordinate,
                &mut value,
            )
        };
        self.context.check_status(status)?;
        Ok(value)
    }

    /// Reads every coordinate. `source` is what the owning geometry reports it stores; the
    /// sequence width alone cannot tell a measure from a height.
    pub(crate) fn coordinates<D: Dimension>(
        &self,
        source: Dimensions,
        missing: MissingOrdinates,
    ) -> Result<Vec<Coordinate<D>>> {
        if missing == MissingOrdinates::Reject && !source.contains(D::DIMENSIONS) {
            return Err(GeosError::CannotConvertCoordinateTypes {
                from: source,
                to: D::DIMENSIONS,
            });
        }

        let read_z = D::HAS_Z && source.has_z();
        let read_m = D::HAS_M && source.has_m();
        (0..self.size()?)
            .map(|i| {
                let x = self.ordinate(i, X)?;
                let y = self.ordinate(i, Y)?;
                let z = if read_z { Some(self.ordinate(i, Z)?) } else { None };
                let m = if read_m { Some(self.ordinate(i, M)?) } else { None };
                Ok(Coordinate::from_parts(x, y, z, m))
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::{XY, XYM, XYZ, XYZM};

    #[test]
    fn widths() {
        assert_eq!(native_width::<XY>(), 2);
        assert_eq!(native_width::<XYZ>(), 3);
        assert_eq!(native_width::<XYM>(), 4);
        assert_eq!(native_width::<XYZM>(), 4);
    }

    #[test]
    fn sequence_drops_without_owner() {
        let context = Context::open().unwrap();
        let coords = vec![
            Coordinate::<XYZ>::new(0., 1., 2.),
            Coordinate::<XYZ>::new(3., 4., 5.),
        ];
        let seq = CoordSeq::from_coords(&context, &coords).unwrap();
        drop(seq);
        assert!(context.errors().is_empty());
    }
}
