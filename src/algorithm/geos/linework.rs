use std::ffi::c_uint;

use geos_sys::{GEOSGeometry, GEOSLineMerge_r, GEOSPolygonize_r, GEOSSnap_r};

use crate::algorithm::dispatch::{binary, read_result, unary};
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::{Geometry, GeometryCollection};
use crate::io::geos::ToNative;
use crate::native::Context;

/// Snaps the vertices and segments of a geometry to those of another.
pub trait Snap: ToNative {
    fn snap<G: ToNative>(
        &self,
        reference: &G,
        tolerance: f64,
    ) -> Result<Geometry<WithoutM<Self::Dim>>> {
        binary(self, reference, |h, a, b| unsafe { GEOSSnap_r(h, a, b, tolerance) })
    }
}

impl<T: ToNative> Snap for T {}

/// Sews connected line segments into maximal line strings.
pub trait LineMerge: ToNative {
    fn line_merge(&self) -> Result<Geometry<WithoutM<Self::Dim>>> {
        unary(self, |h, g| unsafe { GEOSLineMerge_r(h, g) })
    }
}

impl<T: ToNative> LineMerge for T {}

/// Builds the polygons formed by the linework of a geometry.
pub trait Polygonize: ToNative + Sized {
    fn polygonize(&self) -> Result<GeometryCollection<WithoutM<Self::Dim>>> {
        polygonize(std::slice::from_ref(self))
    }
}

impl<T: ToNative> Polygonize for T {}

/// Builds the polygons formed by the combined linework of `geometries`.
pub fn polygonize<G: ToNative>(
    geometries: &[G],
) -> Result<GeometryCollection<WithoutM<G::Dim>>> {
    let context = Context::open()?;
    let natives = geometries
        .iter()
        .map(|g| g.to_native(&context))
        .collect::<Result<Vec<_>>>()?;
    let pointers: Vec<*const GEOSGeometry> = natives.iter().map(|g| g.as_ptr()).collect();

    let result = unsafe {
        GEOSPolygonize_r(
            context.as_raw(),
            pointers.as_ptr(),
            pointers.len() as c_uint,
        )
    };
    read_result(&context, result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geos::Area;
    use crate::coord::Coordinate;
    use crate::dimension::{XY, XYZ};
    use crate::geometry::{LineString, MultiLineString};
    use crate::test::linestring::diagonal_z;
    use crate::test::polygon::unit_square;
    use approx::assert_relative_eq;

    fn segment(a: (f64, f64), b: (f64, f64)) -> LineString<XY> {
        LineString::try_new(vec![a.into(), b.into()]).unwrap()
    }

    fn square_edges() -> Vec<LineString<XY>> {
        vec![
            segment((0., 0.), (1., 0.)),
            segment((1., 0.), (1., 1.)),
            segment((1., 1.), (0., 1.)),
            segment((0., 1.), (0., 0.)),
        ]
    }

    #[test]
    fn merge_segments() {
        let merged = MultiLineString::new(square_edges()).line_merge().unwrap();
        let Geometry::LineString(line) = merged else {
            panic!("expected one line string");
        };
        assert!(line.is_closed());
        assert_eq!(line.coords().len(), 5);
    }

    #[test]
    fn merge_keeps_height() {
        let merged: Geometry<XYZ> = MultiLineString::new(vec![diagonal_z()])
            .line_merge()
            .unwrap();
        let mut heights = vec![];
        merged.visit_coords(&mut |c| heights.push(c.z()));
        heights.sort_by(f64::total_cmp);
        assert_eq!(heights, vec![10., 20., 30.]);
    }

    #[test]
    fn polygonize_edges() {
        let polygons = polygonize(&square_edges()).unwrap();
        assert_eq!(polygons.geometries().len(), 1);
        assert_relative_eq!(polygons.geometries()[0].area().unwrap(), 1.0);

        let single = MultiLineString::new(square_edges()).polygonize().unwrap();
        assert_eq!(single, polygons);
    }

    #[test]
    fn snap_to_nearby_vertex() {
        let point = crate::geometry::Point::new(Coordinate::<XY>::new(0.05, 0.));
        let snapped = point.snap(&unit_square(), 0.1).unwrap();
        assert_eq!(
            snapped,
            Geometry::Point(crate::geometry::Point::new(Coordinate::<XY>::new(0., 0.)))
        );
    }
}
