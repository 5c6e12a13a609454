use std::ffi::c_int;
use std::ptr::NonNull;
use std::rc::Rc;

use geos_sys::{
    GEOSGeomTypeId_r, GEOSGeom_clone_r, GEOSGeom_destroy_r, GEOSGeom_getCoordSeq_r,
    GEOSGeometry, GEOSGetExteriorRing_r, GEOSGetGeometryN_r, GEOSGetInteriorRingN_r,
    GEOSGetNumGeometries_r, GEOSGetNumInteriorRings_r, GEOSHasM_r, GEOSHasZ_r, GEOSisEmpty_r,
};

use crate::coord::Coordinate;
use crate::dimension::{Dimension, Dimensions};
use crate::error::Result;
use crate::native::coord_seq::{ConstCoordSeq, MissingOrdinates};
use crate::native::{Context, GeometryTypeId};

/// A handle to one engine-allocated geometry.
///
/// A *root* owns its handle and destroys it when the last clone is dropped. A *view* points
/// into memory owned by its parent (a ring of a polygon, a member of a collection); it never
/// destroys the handle and keeps its parent, and so the whole chain up to the root, alive.
#[derive(Clone)]
pub struct NativeObject(Rc<Handle>);

struct Handle {
    context: Context,
    ptr: NonNull<GEOSGeometry>,
    parent: Option<NativeObject>,
}

impl Drop for Handle {
    fn drop(&mut self) {
        if self.parent.is_none() {
            unsafe { GEOSGeom_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
        }
    }
}

impl NativeObject {
    pub(crate) fn adopt(context: Context, ptr: NonNull<GEOSGeometry>) -> Self {
        Self(Rc::new(Handle {
            context,
            ptr,
            parent: None,
        }))
    }

    /// Takes ownership of a freshly produced geometry handle.
    ///
    /// A null `ptr` is reported as a failure of the last native call on `context`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a geometry created on `context` that nothing else owns.
    pub unsafe fn from_root(context: &Context, ptr: *mut GEOSGeometry) -> Result<Self> {
        let ptr = context.check_ptr(ptr)?;
        Ok(Self::adopt(context.clone(), ptr))
    }

    /// Wraps a handle owned by `parent`'s subtree.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point into the geometry owned by `parent` (or one of its
    /// ancestors) and stay valid for as long as that geometry is alive and unmodified.
    pub unsafe fn from_view(parent: &NativeObject, ptr: *const GEOSGeometry) -> Result<Self> {
        let ptr = parent.context().check_ptr(ptr as *mut GEOSGeometry)?;
        Ok(Self(Rc::new(Handle {
            context: parent.context().clone(),
            ptr,
            parent: Some(parent.clone()),
        })))
    }

    /// Read-only pointer for passing into native calls.
    pub fn as_ptr(&self) -> *const GEOSGeometry {
        self.0.ptr.as_ptr()
    }

    pub fn context(&self) -> &Context {
        &self.0.context
    }

    pub fn is_view(&self) -> bool {
        self.0.parent.is_some()
    }

    pub fn geometry_type(&self) -> Result<GeometryTypeId> {
        let id = unsafe { GEOSGeomTypeId_r(self.context().as_raw(), self.as_ptr()) };
        if id < 0 {
            return Err(self.context().take_error());
        }
        GeometryTypeId::from_native(id)
    }

    pub fn is_empty(&self) -> Result<bool> {
        let value = unsafe { GEOSisEmpty_r(self.context().as_raw(), self.as_ptr()) };
        self.context().check_predicate(value)
    }

    /// Which of height and measure the stored coordinates carry.
    pub fn dimensions(&self) -> Result<Dimensions> {
        let context = self.context();
        let has_z = unsafe { GEOSHasZ_r(context.as_raw(), self.as_ptr()) };
        let has_m = unsafe { GEOSHasM_r(context.as_raw(), self.as_ptr()) };
        Ok(Dimensions::from_components(
            context.check_predicate(has_z)?,
            context.check_predicate(has_m)?,
        ))
    }

    /// The exterior ring of a polygon, as a view.
    pub fn exterior_ring(&self) -> Result<NativeObject> {
        unsafe {
            let ring = GEOSGetExteriorRing_r(self.context().as_raw(), self.as_ptr());
            Self::from_view(self, ring)
        }
    }

    pub fn num_interior_rings(&self) -> Result<usize> {
        let n = unsafe { GEOSGetNumInteriorRings_r(self.context().as_raw(), self.as_ptr()) };
        self.check_count(n)
    }

    /// Interior ring `n` of a polygon, as a view.
    pub fn interior_ring(&self, n: usize) -> Result<NativeObject> {
        unsafe {
            let ring = GEOSGetInteriorRingN_r(self.context().as_raw(), self.as_ptr(), n as c_int);
            Self::from_view(self, ring)
        }
    }

    pub fn num_geometries(&self) -> Result<usize> {
        let n = unsafe { GEOSGetNumGeometries_r(self.context().as_raw(), self.as_ptr()) };
        self.check_count(n)
    }

    /// Member `n` of a multi-geometry or collection, as a view.
    pub fn geometry_n(&self, n: usize) -> Result<NativeObject> {
        unsafe {
            let child = GEOSGetGeometryN_r(self.context().as_raw(), self.as_ptr(), n as c_int);
            Self::from_view(self, child)
        }
    }

    /// The coordinates of a point, line string or linear ring.
    pub fn coordinates<D: Dimension>(
        &self,
        missing: MissingOrdinates,
    ) -> Result<Vec<Coordinate<D>>> {
        let seq = unsafe { GEOSGeom_getCoordSeq_r(self.context().as_raw(), self.as_ptr()) };
        let seq = ConstCoordSeq::new(self.context(), seq)?;
        seq.coordinates(self.dimensions()?, missing)
    }

    /// A new root holding a deep copy of this geometry.
    pub fn to_root(&self) -> Result<NativeObject> {
        unsafe {
            let copy = GEOSGeom_clone_r(self.context().as_raw(), self.as_ptr());
            Self::from_root(self.context(), copy)
        }
    }

    fn check_count(&self, n: c_int) -> Result<usize> {
        usize::try_from(n).map_err(|_| self.context().take_error())
    }
}

/// An engine geometry under construction.
///
/// Destroys the handle on drop unless ownership moved to the engine ([`Self::release`]) or to
/// a [`NativeObject`] ([`Self::into_native`]).
pub(crate) struct OwnedGeometry<'c> {
    context: &'c Context,
    ptr: NonNull<GEOSGeometry>,
}

impl<'c> OwnedGeometry<'c> {
    pub(crate) fn new(context: &'c Context, ptr: *mut GEOSGeometry) -> Result<Self> {
        Ok(Self {
            context,
            ptr: context.check_ptr(ptr)?,
        })
    }

    /// Gives up ownership, e.g. after the engine adopted the handle into a parent geometry.
    pub(crate) fn release(self) -> *mut GEOSGeometry {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }

    pub(crate) fn into_native(self) -> NativeObject {
        let context = self.context.clone();
        let ptr = self.ptr;
        std::mem::forget(self);
        NativeObject::adopt(context, ptr)
    }
}

impl Drop for OwnedGeometry<'_> {
    fn drop(&mut self) {
        unsafe { GEOSGeom_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}
