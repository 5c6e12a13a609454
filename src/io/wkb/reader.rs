use std::ptr::NonNull;

use geos_sys::{
    GEOSWKBReader, GEOSWKBReader_create_r, GEOSWKBReader_destroy_r, GEOSWKBReader_read_r,
};

use crate::error::Result;
use crate::io::geos::FromNative;
use crate::native::{Context, NativeObject};

struct WkbReader<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSWKBReader>,
}

impl<'c> WkbReader<'c> {
    fn new(context: &'c Context) -> Result<Self> {
        let ptr = unsafe { GEOSWKBReader_create_r(context.as_raw()) };
        Ok(Self {
            context,
            ptr: context.check_ptr(ptr)?,
        })
    }

    fn read(&self, wkb: &[u8]) -> Result<NativeObject> {
        unsafe {
            let geometry = GEOSWKBReader_read_r(
                self.context.as_raw(),
                self.ptr.as_ptr(),
                wkb.as_ptr(),
                wkb.len(),
            );
            NativeObject::from_root(self.context, geometry)
        }
    }
}

impl Drop for WkbReader<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKBReader_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// Decode a value from Well-Known Binary.
pub trait FromWkb: Sized {
    fn from_wkb(wkb: &[u8]) -> Result<Self>;
}

impl<T: FromNative> FromWkb for T {
    fn from_wkb(wkb: &[u8]) -> Result<Self> {
        let context = Context::open()?;
        let native = WkbReader::new(&context)?.read(wkb)?;
        T::from_native(&native)
    }
}
