use std::ffi::c_int;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeosError, Result};

/// Geometry type ids reported by the engine.
///
/// This is the only place native type integers are mapped to shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GeometryTypeId {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryTypeId {
    pub(crate) fn from_native(value: c_int) -> Result<Self> {
        Self::try_from(value).map_err(|err| GeosError::UnknownGeometryType(err.number))
    }

    pub(crate) fn to_native(self) -> c_int {
        i32::from(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn native_ids() {
        assert_eq!(
            GeometryTypeId::from_native(3).unwrap(),
            GeometryTypeId::Polygon
        );
        assert_eq!(GeometryTypeId::GeometryCollection.to_native(), 7);
        assert_eq!(
            GeometryTypeId::from_native(42).unwrap_err(),
            GeosError::UnknownGeometryType(42)
        );
    }
}
