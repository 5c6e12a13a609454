//! Coordinate dimension tags.
//!
//! Every geometry in this crate is generic over one of the zero-sized tags [`XY`], [`XYZ`],
//! [`XYM`] and [`XYZM`]. The tag decides which coordinate fields exist ([`HasZ`], [`HasM`]),
//! which narrowing conversions are infallible ([`NarrowTo`]) and what dimension a binary
//! operation produces ([`Union`]).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The runtime mirror of a dimension tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimensions {
    /// Picks the variant carrying exactly the requested components.
    pub fn from_components(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimensions::XY,
            (true, false) => Dimensions::XYZ,
            (false, true) => Dimensions::XYM,
            (true, true) => Dimensions::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimensions::XY => 2,
            Dimensions::XYZ => 3,
            Dimensions::XYM => 3,
            Dimensions::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimensions::XYZ | Dimensions::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimensions::XYM | Dimensions::XYZM)
    }

    /// Whether every component of `other` is also present in `self`.
    pub fn contains(&self, other: Dimensions) -> bool {
        (self.has_z() || !other.has_z()) && (self.has_m() || !other.has_m())
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimensions::XY => write!(f, "XY"),
            Dimensions::XYZ => write!(f, "XYZ"),
            Dimensions::XYM => write!(f, "XYM"),
            Dimensions::XYZM => write!(f, "XYZM"),
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::XY {}
    impl Sealed for super::XYZ {}
    impl Sealed for super::XYM {}
    impl Sealed for super::XYZM {}
}

/// A compile-time coordinate dimension.
///
/// This trait is sealed; the four tags in this module are the only implementors.
pub trait Dimension:
    private::Sealed + Debug + Default + Copy + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Runtime equivalent of this tag.
    const DIMENSIONS: Dimensions;

    /// Whether coordinates carry a height.
    const HAS_Z: bool;

    /// Whether coordinates carry a measure.
    const HAS_M: bool;

    /// This tag with the measure removed.
    type WithoutM: Dimension;
}

/// Tags whose coordinates carry a height.
pub trait HasZ: Dimension {}

/// Tags whose coordinates carry a measure.
pub trait HasM: Dimension {}

/// Two-dimensional coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XY;

/// Coordinates with a height.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XYZ;

/// Coordinates with a measure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XYM;

/// Coordinates with both a height and a measure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XYZM;

impl Dimension for XY {
    const DIMENSIONS: Dimensions = Dimensions::XY;
    const HAS_Z: bool = false;
    const HAS_M: bool = false;
    type WithoutM = XY;
}

impl Dimension for XYZ {
    const DIMENSIONS: Dimensions = Dimensions::XYZ;
    const HAS_Z: bool = true;
    const HAS_M: bool = false;
    type WithoutM = XYZ;
}

impl Dimension for XYM {
    const DIMENSIONS: Dimensions = Dimensions::XYM;
    const HAS_Z: bool = false;
    const HAS_M: bool = true;
    type WithoutM = XY;
}

impl Dimension for XYZM {
    const DIMENSIONS: Dimensions = Dimensions::XYZM;
    const HAS_Z: bool = true;
    const HAS_M: bool = true;
    type WithoutM = XYZ;
}

impl HasZ for XYZ {}
impl HasZ for XYZM {}
impl HasM for XYM {}
impl HasM for XYZM {}

/// Shorthand for a tag with its measure removed.
pub type WithoutM<D> = <D as Dimension>::WithoutM;

/// Infallible narrowing: `Self` carries every component of `Target`.
pub trait NarrowTo<Target: Dimension>: Dimension {}

macro_rules! impl_narrow_to {
    ($source:ty => $($target:ty),+) => {
        $(impl NarrowTo<$target> for $source {})+
    };
}

impl_narrow_to!(XY => XY);
impl_narrow_to!(XYZ => XY, XYZ);
impl_narrow_to!(XYM => XY, XYM);
impl_narrow_to!(XYZM => XY, XYZ, XYM, XYZM);

/// Dimension of the result of combining `Self` with `Rhs`.
///
/// The output has a height when either side has one, and a measure when either side has one.
pub trait Union<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Shorthand for the promoted dimension of a binary operation.
pub type UnionOf<A, B> = <A as Union<B>>::Output;

macro_rules! impl_union {
    ($($lhs:ty, $rhs:ty => $output:ty;)+) => {
        $(impl Union<$rhs> for $lhs {
            type Output = $output;
        })+
    };
}

impl_union! {
    XY, XY => XY;
    XY, XYZ => XYZ;
    XY, XYM => XYM;
    XY, XYZM => XYZM;
    XYZ, XY => XYZ;
    XYZ, XYZ => XYZ;
    XYZ, XYM => XYZM;
    XYZ, XYZM => XYZM;
    XYM, XY => XYM;
    XYM, XYZ => XYZM;
    XYM, XYM => XYM;
    XYM, XYZM => XYZM;
    XYZM, XY => XYZM;
    XYZM, XYZ => XYZM;
    XYZM, XYM => XYZM;
    XYZM, XYZM => XYZM;
}

#[cfg(test)]
mod test {
    use super::*;

    fn dims_of<D: Dimension>() -> Dimensions {
        D::DIMENSIONS
    }

    fn union_dims<A: Union<B>, B: Dimension>() -> Dimensions {
        UnionOf::<A, B>::DIMENSIONS
    }

    #[test]
    fn union_table_matches_component_rule() {
        assert_eq!(union_dims::<XY, XY>(), Dimensions::XY);
        assert_eq!(union_dims::<XY, XYZ>(), Dimensions::XYZ);
        assert_eq!(union_dims::<XYM, XYZ>(), Dimensions::XYZM);
        assert_eq!(union_dims::<XYZ, XYM>(), Dimensions::XYZM);
        assert_eq!(union_dims::<XYM, XY>(), Dimensions::XYM);
        assert_eq!(union_dims::<XYZM, XY>(), Dimensions::XYZM);
    }

    #[test]
    fn without_m() {
        assert_eq!(dims_of::<WithoutM<XY>>(), Dimensions::XY);
        assert_eq!(dims_of::<WithoutM<XYZ>>(), Dimensions::XYZ);
        assert_eq!(dims_of::<WithoutM<XYM>>(), Dimensions::XY);
        assert_eq!(dims_of::<WithoutM<XYZM>>(), Dimensions::XYZ);
    }

    #[test]
    fn runtime_dimensions() {
        let all = [
            Dimensions::XY,
            Dimensions::XYZ,
            Dimensions::XYM,
            Dimensions::XYZM,
        ];
        for dims in all {
            assert_eq!(Dimensions::from_components(dims.has_z(), dims.has_m()), dims);
        }

        assert_eq!(Dimensions::XYM.size(), 3);
        assert_eq!(Dimensions::XYZM.size(), 4);
        assert!(Dimensions::XYZM.contains(Dimensions::XYM));
        assert!(!Dimensions::XYZ.contains(Dimensions::XYM));
        assert!(!Dimensions::XY.contains(Dimensions::XYZ));
        assert_eq!(Dimensions::XYZM.to_string(), "XYZM");
    }
}
