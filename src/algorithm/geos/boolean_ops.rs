use geos_sys::{
    GEOSDifference_r, GEOSIntersection_r, GEOSSymDifference_r, GEOSUnaryUnion_r, GEOSUnion_r,
};

use crate::algorithm::dispatch::{binary, binary_optional, unary};
use crate::dimension::{Union, UnionOf, WithoutM};
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::ToNative;

/// Overlay operations combining two geometries.
///
/// The result carries a height when either operand has one, and a measure when either operand
/// has one. Vertices introduced by the overlay get an interpolated height and a NaN measure.
///
/// Intersection, difference and symmetric difference return `None` when the result is empty.
pub trait BooleanOps: ToNative {
    /// # Examples
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use geos_typed::algorithm::geos::{Area, BooleanOps};
    /// use geos_typed::geometry::Geometry;
    /// use geos_typed::io::wkt::FromWkt;
    /// use geos_typed::{XY, XYZ};
    ///
    /// let flat = Geometry::<XY>::from_wkt("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
    /// let raised =
    ///     Geometry::<XYZ>::from_wkt("POLYGON Z ((1 0 1, 2 0 1, 2 1 1, 1 1 1, 1 0 1))").unwrap();
    ///
    /// let union: Geometry<XYZ> = flat.union(&raised).unwrap();
    /// assert_relative_eq!(union.area().unwrap(), 2.0);
    /// ```
    fn union<G>(&self, other: &G) -> Result<Geometry<UnionOf<Self::Dim, G::Dim>>>
    where
        G: ToNative,
        Self::Dim: Union<G::Dim>,
    {
        binary(self, other, |h, a, b| unsafe { GEOSUnion_r(h, a, b) })
    }

    fn intersection<G>(&self, other: &G) -> Result<Option<Geometry<UnionOf<Self::Dim, G::Dim>>>>
    where
        G: ToNative,
        Self::Dim: Union<G::Dim>,
    {
        binary_optional(self, other, |h, a, b| unsafe { GEOSIntersection_r(h, a, b) })
    }

    /// The part of `self` not covered by `other`.
    fn difference<G>(&self, other: &G) -> Result<Option<Geometry<UnionOf<Self::Dim, G::Dim>>>>
    where
        G: ToNative,
        Self::Dim: Union<G::Dim>,
    {
        binary_optional(self, other, |h, a, b| unsafe { GEOSDifference_r(h, a, b) })
    }

    fn sym_difference<G>(
        &self,
        other: &G,
    ) -> Result<Option<Geometry<UnionOf<Self::Dim, G::Dim>>>>
    where
        G: ToNative,
        Self::Dim: Union<G::Dim>,
    {
        binary_optional(self, other, |h, a, b| unsafe { GEOSSymDifference_r(h, a, b) })
    }
}

impl<T: ToNative> BooleanOps for T {}

/// Dissolves all parts of a geometry into one.
pub trait UnaryUnion: ToNative {
    fn unary_union(&self) -> Result<Geometry<WithoutM<Self::Dim>>> {
        unary(self, |h, g| unsafe { GEOSUnaryUnion_r(h, g) })
    }
}

impl<T: ToNative> UnaryUnion for T {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geos::{Area, Predicates};
    use crate::dimension::{XY, XYM, XYZ, XYZM};
    use crate::geometry::{MultiPolygon, Polygon};
    use crate::test::polygon::{shifted_square, shifted_square_m, unit_square, unit_square_z};
    use crate::test::{heights, measures};
    use approx::assert_relative_eq;

    fn rectangle() -> Polygon<XY> {
        use crate::coord::Coordinate;
        use crate::geometry::LinearRing;

        let ring = LinearRing::try_new(vec![
            Coordinate::<XY>::new(0., 0.),
            Coordinate::<XY>::new(2., 0.),
            Coordinate::<XY>::new(2., 1.),
            Coordinate::<XY>::new(0., 1.),
            Coordinate::<XY>::new(0., 0.),
        ])
        .unwrap();
        Polygon::new(ring, vec![])
    }

    #[test]
    fn adjacent_squares_union_to_rectangle() {
        crate::test::init_logging();
        let union: Geometry<XY> = unit_square().union(&shifted_square(1.)).unwrap();
        assert!(union.equals(&rectangle()).unwrap());
    }

    #[test]
    fn flat_union_height_is_height() {
        let union: Geometry<XYZ> = unit_square().union(&unit_square_z()).unwrap();
        assert_relative_eq!(union.area().unwrap(), 1.0);
    }

    #[test]
    fn measure_union_height_is_four_dimensional() {
        let union: Geometry<XYZM> = shifted_square_m().union(&unit_square_z()).unwrap();
        assert_relative_eq!(union.area().unwrap(), 1.5);

        let Geometry::Polygon(polygon) = &union else {
            panic!("expected a polygon");
        };
        assert!(polygon.exterior().coords().len() >= 7);

        // The measured square has no height of its own; where the result keeps one it comes
        // from the raised square.
        let heights = heights(&union);
        assert!(heights.iter().any(|z| *z == 5.));
        assert!(heights.iter().all(|z| z.is_nan() || *z == 5.));

        let measures = measures(&union);
        assert_eq!(measures.len(), heights.len());
        assert!(measures.iter().all(|m| m.is_nan() || *m == 7.));
    }

    #[test]
    fn intersection() {
        let overlap: Geometry<XY> = unit_square()
            .intersection(&shifted_square(0.5))
            .unwrap()
            .unwrap();
        assert_relative_eq!(overlap.area().unwrap(), 0.5);

        let nothing: Option<Geometry<XY>> =
            unit_square().intersection(&shifted_square(5.)).unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn difference_of_identical_is_none() {
        let none: Option<Geometry<XY>> = unit_square().difference(&unit_square()).unwrap();
        assert_eq!(none, None);

        let rest: Geometry<XY> = unit_square()
            .difference(&shifted_square(0.5))
            .unwrap()
            .unwrap();
        assert_relative_eq!(rest.area().unwrap(), 0.5);
    }

    #[test]
    fn sym_difference() {
        let result: Geometry<XY> = unit_square()
            .sym_difference(&shifted_square(0.5))
            .unwrap()
            .unwrap();
        assert_relative_eq!(result.area().unwrap(), 1.0);
    }

    #[test]
    fn unary_union_dissolves() {
        let multi = MultiPolygon::new(vec![unit_square(), shifted_square(0.5)]);
        let dissolved = multi.unary_union().unwrap();
        assert!(matches!(dissolved, Geometry::Polygon(_)));
        assert_relative_eq!(dissolved.area().unwrap(), 1.5);

        let measured = MultiPolygon::<XYM>::new(vec![shifted_square_m()]);
        let _: Geometry<XY> = measured.unary_union().unwrap();
    }
}
