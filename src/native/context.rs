use std::cell::RefCell;
use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr::NonNull;
use std::rc::Rc;

use geos_sys::{
    GEOSContextHandle_t, GEOSContext_setErrorMessageHandler_r,
    GEOSContext_setNoticeMessageHandler_r, GEOSFree_r, GEOS_finish_r, GEOS_init_r,
};

use crate::error::{GeosError, Result};

type ErrorSink = RefCell<Vec<String>>;

/// A native engine session.
///
/// Every error message the engine emits while running operations through this session is
/// captured and surfaces in the [`GeosError::LibraryError`] of the failing call. A context is
/// meant to live for exactly one call tree: open it, run the native calls, drop it.
///
/// Clones share the session; the session ends when the last clone (including those held by
/// [`NativeObject`](super::NativeObject)s) is dropped. Contexts are neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct Context(Rc<Session>);

struct Session {
    handle: GEOSContextHandle_t,
    errors: Box<ErrorSink>,
}

unsafe extern "C" fn capture_error(message: *const c_char, userdata: *mut c_void) {
    if message.is_null() || userdata.is_null() {
        return;
    }
    let message = CStr::from_ptr(message).to_string_lossy().into_owned();
    log::debug!("GEOS error: {message}");
    let sink = &*(userdata as *const ErrorSink);
    if let Ok(mut errors) = sink.try_borrow_mut() {
        errors.push(message);
    }
}

unsafe extern "C" fn log_notice(message: *const c_char, _userdata: *mut c_void) {
    if message.is_null() {
        return;
    }
    log::debug!("GEOS notice: {}", CStr::from_ptr(message).to_string_lossy());
}

impl Context {
    /// Opens a new session.
    ///
    /// Fails with [`GeosError::EngineUnavailable`] when the engine cannot allocate one.
    pub fn open() -> Result<Self> {
        let handle = unsafe { GEOS_init_r() };
        if handle.is_null() {
            return Err(GeosError::EngineUnavailable);
        }

        let errors: Box<ErrorSink> = Box::default();
        let sink = &*errors as *const ErrorSink as *mut c_void;
        unsafe {
            GEOSContext_setErrorMessageHandler_r(handle, Some(capture_error), sink);
            GEOSContext_setNoticeMessageHandler_r(handle, Some(log_notice), std::ptr::null_mut());
        }
        log::trace!("opened GEOS context {handle:p}");

        Ok(Self(Rc::new(Session { handle, errors })))
    }

    pub fn as_raw(&self) -> GEOSContextHandle_t {
        self.0.handle
    }

    /// Every message captured so far.
    pub fn errors(&self) -> Vec<String> {
        self.0.errors.borrow().clone()
    }

    /// Drains the captured messages into a [`GeosError::LibraryError`].
    pub(crate) fn take_error(&self) -> GeosError {
        GeosError::LibraryError(self.0.errors.borrow_mut().drain(..).collect())
    }

    /// A null return from the engine signals failure.
    pub(crate) fn check_ptr<T>(&self, ptr: *mut T) -> Result<NonNull<T>> {
        NonNull::new(ptr).ok_or_else(|| self.take_error())
    }

    /// Status returns where zero signals failure.
    pub(crate) fn check_status(&self, status: c_int) -> Result<()> {
        if status == 0 {
            Err(self.take_error())
        } else {
            Ok(())
        }
    }

    /// Three-valued predicate returns: 0 is false, 1 is true, anything else is an error.
    pub(crate) fn check_predicate(&self, value: c_char) -> Result<bool> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(self.take_error()),
        }
    }

    /// Copies a string the engine allocated and frees the original.
    pub(crate) fn take_string(&self, ptr: *mut c_char) -> Result<String> {
        let ptr = self.check_ptr(ptr)?;
        let value = unsafe { CStr::from_ptr(ptr.as_ptr()) }
            .to_string_lossy()
            .into_owned();
        unsafe { GEOSFree_r(self.as_raw(), ptr.as_ptr() as *mut c_void) };
        Ok(value)
    }

    /// Copies a buffer the engine allocated and frees the original.
    pub(crate) fn take_bytes(&self, ptr: *mut u8, len: usize) -> Result<Vec<u8>> {
        let ptr = self.check_ptr(ptr)?;
        let value = unsafe { std::slice::from_raw_parts(ptr.as_ptr(), len) }.to_vec();
        unsafe { GEOSFree_r(self.as_raw(), ptr.as_ptr() as *mut c_void) };
        Ok(value)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::trace!("finishing GEOS context {:p}", self.handle);
        unsafe { GEOS_finish_r(self.handle) };
    }
}
