use std::ffi::{c_char, c_int};
use std::ptr::NonNull;

use geos_sys::{
    GEOSWKTWriter, GEOSWKTWriter_create_r, GEOSWKTWriter_destroy_r,
    GEOSWKTWriter_setOutputDimension_r, GEOSWKTWriter_setRoundingPrecision_r,
    GEOSWKTWriter_setTrim_r, GEOSWKTWriter_write_r,
};
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::Result;
use crate::io::geos::ToNative;
use crate::native::{native_width, Context, NativeObject};

/// Formatting of Well-Known Text output.
///
/// The default writes every digit the engine keeps, without trimming trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WktOptions {
    /// Drop trailing zeros after the decimal point.
    pub trim: bool,
    /// Fixed number of digits after the decimal point.
    pub rounding_precision: Option<u32>,
}

struct WktWriter<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSWKTWriter>,
}

impl<'c> WktWriter<'c> {
    fn new(context: &'c Context, options: &WktOptions, dimension: c_int) -> Result<Self> {
        let ptr = unsafe { GEOSWKTWriter_create_r(context.as_raw()) };
        let writer = Self {
            context,
            ptr: context.check_ptr(ptr)?,
        };
        let precision = options
            .rounding_precision
            .map_or(-1, |digits| digits.min(c_int::MAX as u32) as c_int);
        unsafe {
            let (handle, ptr) = (context.as_raw(), writer.ptr.as_ptr());
            GEOSWKTWriter_setTrim_r(handle, ptr, options.trim as c_char);
            GEOSWKTWriter_setRoundingPrecision_r(handle, ptr, precision);
            GEOSWKTWriter_setOutputDimension_r(handle, ptr, dimension);
        }
        Ok(writer)
    }

    fn write(&self, geometry: &NativeObject) -> Result<String> {
        let wkt = unsafe {
            GEOSWKTWriter_write_r(self.context.as_raw(), self.ptr.as_ptr(), geometry.as_ptr())
        };
        self.context.take_string(wkt)
    }
}

impl Drop for WktWriter<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKTWriter_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// Encode a value as Well-Known Text.
///
/// The output carries the ordinates of the value's dimension. Measure-only values are written
/// as `ZM` with a NaN height.
pub trait ToWkt {
    fn to_wkt(&self) -> Result<String> {
        self.to_wkt_with_options(&WktOptions::default())
    }

    fn to_wkt_with_options(&self, options: &WktOptions) -> Result<String>;
}

impl<T: ToNative + ?Sized> ToWkt for T {
    fn to_wkt_with_options(&self, options: &WktOptions) -> Result<String> {
        let context = Context::open()?;
        let native = self.to_native(&context)?;
        let writer = WktWriter::new(&context, options, output_dimension::<T::Dim>())?;
        writer.write(&native)
    }
}

fn output_dimension<D: Dimension>() -> c_int {
    native_width::<D>() as c_int
}
