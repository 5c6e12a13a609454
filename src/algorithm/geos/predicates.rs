use geos_sys::{
    GEOSContains_r, GEOSCoveredBy_r, GEOSCovers_r, GEOSCrosses_r, GEOSDisjoint_r, GEOSEquals_r,
    GEOSIntersects_r, GEOSOverlaps_r, GEOSTouches_r, GEOSWithin_r,
};

use crate::algorithm::dispatch::predicate;
use crate::error::Result;
use crate::io::geos::ToNative;

/// Binary spatial predicates.
///
/// Evaluation is planar: heights and measures are ignored, so two points that only differ in
/// `z` are equal.
pub trait Predicates {
    /// Topological equality.
    fn equals<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn disjoint<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn touches<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn intersects<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn crosses<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn within<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn contains<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn overlaps<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn covers<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
    fn covered_by<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool>;
}

macro_rules! predicate_impl {
    ($($method:ident => $native:ident),+ $(,)?) => {
        impl<T: ToNative + ?Sized> Predicates for T {
            $(fn $method<G: ToNative + ?Sized>(&self, other: &G) -> Result<bool> {
                predicate(self, other, |h, a, b| unsafe { $native(h, a, b) })
            })+
        }
    };
}

predicate_impl!(
    equals => GEOSEquals_r,
    disjoint => GEOSDisjoint_r,
    touches => GEOSTouches_r,
    intersects => GEOSIntersects_r,
    crosses => GEOSCrosses_r,
    within => GEOSWithin_r,
    contains => GEOSContains_r,
    overlaps => GEOSOverlaps_r,
    covers => GEOSCovers_r,
    covered_by => GEOSCoveredBy_r,
);
