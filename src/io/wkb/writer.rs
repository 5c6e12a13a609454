use std::ffi::c_int;
use std::ptr::NonNull;

use geos_sys::{
    GEOSWKBWriter, GEOSWKBWriter_create_r, GEOSWKBWriter_destroy_r,
    GEOSWKBWriter_setOutputDimension_r, GEOSWKBWriter_write_r,
};

use crate::error::Result;
use crate::io::geos::ToNative;
use crate::native::{native_width, Context, NativeObject};

struct WkbWriter<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSWKBWriter>,
}

impl<'c> WkbWriter<'c> {
    fn new(context: &'c Context, dimension: c_int) -> Result<Self> {
        let ptr = unsafe { GEOSWKBWriter_create_r(context.as_raw()) };
        let writer = Self {
            context,
            ptr: context.check_ptr(ptr)?,
        };
        unsafe {
            GEOSWKBWriter_setOutputDimension_r(context.as_raw(), writer.ptr.as_ptr(), dimension)
        };
        Ok(writer)
    }

    fn write(&self, geometry: &NativeObject) -> Result<Vec<u8>> {
        let mut size = 0;
        let wkb = unsafe {
            GEOSWKBWriter_write_r(
                self.context.as_raw(),
                self.ptr.as_ptr(),
                geometry.as_ptr(),
                &mut size,
            )
        };
        self.context.take_bytes(wkb, size)
    }
}

impl Drop for WkbWriter<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKBWriter_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// Encode a value as Well-Known Binary in the machine's byte order.
///
/// The output carries the ordinates of the value's dimension. Measure-only values are written
/// with a NaN height.
pub trait ToWkb {
    fn to_wkb(&self) -> Result<Vec<u8>>;
}

impl<T: ToNative + ?Sized> ToWkb for T {
    fn to_wkb(&self) -> Result<Vec<u8>> {
        let context = Context::open()?;
        let native = self.to_native(&context)?;
        WkbWriter::new(&context, native_width::<T::Dim>() as c_int)?.write(&native)
    }
}
