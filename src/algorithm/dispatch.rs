//! Runs one native operation on a fresh [`Context`].
//!
//! Each helper opens a context, materializes its operands on it, hands the raw handles to the
//! native call and translates the sentinel the call returns (null pointer, status code or
//! three-valued `char`) before anything else sees it. The context and every transient handle
//! are released when the helper returns, on success and on failure alike.

use std::ffi::{c_char, c_int};

use geos_sys::{GEOSContextHandle_t, GEOSGeometry};

use crate::error::{GeosError, Result};
use crate::io::geos::{FromNative, ToNative};
use crate::native::{Context, MissingOrdinates, NativeObject};

type Handle = GEOSContextHandle_t;
type Geom = *const GEOSGeometry;

/// Materializes `geometry` on a new context and runs `f` on it.
pub(crate) fn with_native<G, R>(geometry: &G, f: impl FnOnce(&NativeObject) -> Result<R>) -> Result<R>
where
    G: ToNative + ?Sized,
{
    let context = Context::open()?;
    let native = geometry.to_native(&context)?;
    f(&native)
}

/// Materializes both operands on one shared context and runs `f` on them.
pub(crate) fn with_natives<A, B, R>(
    a: &A,
    b: &B,
    f: impl FnOnce(&NativeObject, &NativeObject) -> Result<R>,
) -> Result<R>
where
    A: ToNative + ?Sized,
    B: ToNative + ?Sized,
{
    let context = Context::open()?;
    let a = a.to_native(&context)?;
    let b = b.to_native(&context)?;
    f(&a, &b)
}

/// Adopts an operation result and reads it back.
///
/// Results are read leniently: an ordinate the engine did not produce is filled with NaN.
pub(crate) fn read_result<T: FromNative>(context: &Context, ptr: *mut GEOSGeometry) -> Result<T> {
    let result = unsafe { NativeObject::from_root(context, ptr) }?;
    T::from_native_with(&result, MissingOrdinates::FillNaN)
}

/// Like [`read_result`], but an empty or degenerate result is `None`.
pub(crate) fn read_optional<T: FromNative>(
    context: &Context,
    ptr: *mut GEOSGeometry,
) -> Result<Option<T>> {
    let result = unsafe { NativeObject::from_root(context, ptr) }?;
    if result.is_empty()? {
        return Ok(None);
    }
    match T::from_native_with(&result, MissingOrdinates::FillNaN) {
        Ok(value) => Ok(Some(value)),
        Err(GeosError::TooFewPoints) => Ok(None),
        Err(err) => Err(err),
    }
}

pub(crate) fn unary<G, T>(geometry: &G, op: impl FnOnce(Handle, Geom) -> *mut GEOSGeometry) -> Result<T>
where
    G: ToNative + ?Sized,
    T: FromNative,
{
    with_native(geometry, |g| {
        let ptr = op(g.context().as_raw(), g.as_ptr());
        read_result(g.context(), ptr)
    })
}

pub(crate) fn unary_optional<G, T>(
    geometry: &G,
    op: impl FnOnce(Handle, Geom) -> *mut GEOSGeometry,
) -> Result<Option<T>>
where
    G: ToNative + ?Sized,
    T: FromNative,
{
    with_native(geometry, |g| {
        let ptr = op(g.context().as_raw(), g.as_ptr());
        read_optional(g.context(), ptr)
    })
}

pub(crate) fn binary<A, B, T>(
    a: &A,
    b: &B,
    op: impl FnOnce(Handle, Geom, Geom) -> *mut GEOSGeometry,
) -> Result<T>
where
    A: ToNative + ?Sized,
    B: ToNative + ?Sized,
    T: FromNative,
{
    with_natives(a, b, |a, b| {
        let ptr = op(a.context().as_raw(), a.as_ptr(), b.as_ptr());
        read_result(a.context(), ptr)
    })
}

pub(crate) fn binary_optional<A, B, T>(
    a: &A,
    b: &B,
    op: impl FnOnce(Handle, Geom, Geom) -> *mut GEOSGeometry,
) -> Result<Option<T>>
where
    A: ToNative + ?Sized,
    B: ToNative + ?Sized,
    T: FromNative,
{
    with_natives(a, b, |a, b| {
        let ptr = op(a.context().as_raw(), a.as_ptr(), b.as_ptr());
        read_optional(a.context(), ptr)
    })
}

pub(crate) fn unary_predicate<G>(geometry: &G, op: impl FnOnce(Handle, Geom) -> c_char) -> Result<bool>
where
    G: ToNative + ?Sized,
{
    with_native(geometry, |g| {
        let value = op(g.context().as_raw(), g.as_ptr());
        g.context().check_predicate(value)
    })
}

pub(crate) fn predicate<A, B>(a: &A, b: &B, op: impl FnOnce(Handle, Geom, Geom) -> c_char) -> Result<bool>
where
    A: ToNative + ?Sized,
    B: ToNative + ?Sized,
{
    with_natives(a, b, |a, b| {
        let value = op(a.context().as_raw(), a.as_ptr(), b.as_ptr());
        a.context().check_predicate(value)
    })
}

/// Runs a native call that writes a double through an out-parameter and returns a status.
pub(crate) fn measure<G>(geometry: &G, op: impl FnOnce(Handle, Geom, &mut f64) -> c_int) -> Result<f64>
where
    G: ToNative + ?Sized,
{
    with_native(geometry, |g| {
        let mut value = f64::NAN;
        let status = op(g.context().as_raw(), g.as_ptr(), &mut value);
        g.context().check_status(status)?;
        Ok(value)
    })
}

pub(crate) fn binary_measure<A, B>(
    a: &A,
    b: &B,
    op: impl FnOnce(Handle, Geom, Geom, &mut f64) -> c_int,
) -> Result<f64>
where
    A: ToNative + ?Sized,
    B: ToNative + ?Sized,
{
    with_natives(a, b, |a, b| {
        let mut value = f64::NAN;
        let status = op(a.context().as_raw(), a.as_ptr(), b.as_ptr(), &mut value);
        a.context().check_status(status)?;
        Ok(value)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinate;
    use crate::dimension::XY;
    use crate::geometry::{Geometry, Point};
    use crate::test::polygon::unit_square;

    #[test]
    fn null_result_carries_engine_message() {
        let context = Context::open().unwrap();
        let err = read_result::<Geometry<XY>>(&context, std::ptr::null_mut()).unwrap_err();
        assert_eq!(err, GeosError::LibraryError(vec![]));
    }

    #[test]
    fn empty_result_is_none() {
        let result: Option<Geometry<XY>> = unary_optional(&unit_square(), |h, g| unsafe {
            geos_sys::GEOSBuffer_r(h, g, -1., 8)
        })
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn failing_predicate_is_library_error() {
        let point = Point::new(Coordinate::<XY>::new(0., 0.));
        let err = predicate(&point, &point, |_, _, _| 2).unwrap_err();
        assert!(matches!(err, GeosError::LibraryError(_)));
    }
}
