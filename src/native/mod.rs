//! Ownership of engine sessions and engine-allocated geometries.
//!
//! A [`Context`] is one short-lived engine session. [`NativeObject`]s are handles to
//! geometries allocated on a context; roots own their handle, views borrow it from a parent
//! they keep alive. Both release their native resources when dropped.

mod context;
mod coord_seq;
mod object;
mod type_id;

pub use context::Context;
pub use coord_seq::MissingOrdinates;
pub use object::NativeObject;
pub use type_id::GeometryTypeId;

pub(crate) use coord_seq::{native_width, CoordSeq};
pub(crate) use object::OwnedGeometry;
