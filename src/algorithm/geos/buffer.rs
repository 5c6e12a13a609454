use std::ffi::c_int;

use geos_sys::GEOSBufferWithStyle_r;
use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};

use crate::algorithm::dispatch::unary_optional;
use crate::dimension::WithoutM;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geos::ToNative;

/// Shape of buffer ends around line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, Serialize, Deserialize)]
#[repr(i32)]
pub enum CapStyle {
    #[default]
    Round = 1,
    Flat = 2,
    Square = 3,
}

/// Shape of buffer corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, Serialize, Deserialize)]
#[repr(i32)]
pub enum JoinStyle {
    #[default]
    Round = 1,
    Mitre = 2,
    Bevel = 3,
}

/// Parameters of a buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferStyle {
    /// Number of segments used to approximate a quarter circle.
    pub quadrant_segments: i32,
    pub end_cap: CapStyle,
    pub join: JoinStyle,
    /// Limit on the distance of a mitred corner from the input, as a ratio of the width.
    pub mitre_limit: f64,
}

impl Default for BufferStyle {
    fn default() -> Self {
        Self {
            quadrant_segments: 8,
            end_cap: CapStyle::Round,
            join: JoinStyle::Round,
            mitre_limit: 5.0,
        }
    }
}

/// Buffers a geometry by a planar distance.
///
/// The result keeps the height of the input and drops its measure. A negative width shrinks
/// polygons; when nothing is left the result is `None`.
pub trait Buffer: ToNative {
    fn buffer(
        &self,
        width: f64,
        quadrant_segments: i32,
    ) -> Result<Option<Geometry<WithoutM<Self::Dim>>>> {
        self.buffer_with_style(
            width,
            &BufferStyle {
                quadrant_segments,
                ..Default::default()
            },
        )
    }

    fn buffer_with_style(
        &self,
        width: f64,
        style: &BufferStyle,
    ) -> Result<Option<Geometry<WithoutM<Self::Dim>>>> {
        unary_optional(self, |h, g| unsafe {
            GEOSBufferWithStyle_r(
                h,
                g,
                width,
                style.quadrant_segments as c_int,
                i32::from(style.end_cap),
                i32::from(style.join),
                style.mitre_limit,
            )
        })
    }
}

impl<T: ToNative> Buffer for T {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geos::Area;
    use crate::coord::Coordinate;
    use crate::dimension::{XY, XYZ};
    use crate::geometry::Point;
    use crate::test::heights;
    use crate::test::linestring::diagonal;
    use crate::test::point::{p0, p_m};
    use crate::test::polygon::{unit_square, unit_square_z};
    use approx::assert_relative_eq;

    #[test]
    fn point_buffer() {
        let buffered = p0().buffer(1., 8).unwrap().unwrap();
        assert!(matches!(buffered, Geometry::Polygon(_)));
        assert_relative_eq!(buffered.area().unwrap(), std::f64::consts::PI, epsilon = 0.1);
    }

    #[test]
    fn measure_is_dropped() {
        let buffered: Option<Geometry<XY>> = p_m().buffer(1., 8).unwrap();
        assert!(buffered.is_some());
    }

    #[test]
    fn raised_inputs_buffer_to_polygons() {
        let buffered: Geometry<XYZ> = unit_square_z().buffer(1., 8).unwrap().unwrap();
        assert!(matches!(buffered, Geometry::Polygon(_)));
        assert_relative_eq!(
            buffered.area().unwrap(),
            5. + std::f64::consts::PI,
            epsilon = 0.1
        );
        assert!(heights(&buffered).iter().all(|z| z.is_nan() || *z == 5.));

        let point = Point::new(Coordinate::<XYZ>::new(0., 0., 3.));
        let buffered = point.buffer(1., 8).unwrap().unwrap();
        assert_relative_eq!(buffered.area().unwrap(), std::f64::consts::PI, epsilon = 0.1);
    }

    #[test]
    fn negative_buffer_erases_polygon() {
        assert_eq!(unit_square().buffer(-1., 8).unwrap(), None);
        assert_eq!(p0().buffer(0., 8).unwrap(), None);
    }

    #[test]
    fn flat_caps() {
        let style = BufferStyle {
            end_cap: CapStyle::Flat,
            ..Default::default()
        };
        let line = crate::geometry::LineString::try_new(vec![
            Coordinate::<XY>::new(0., 0.),
            Coordinate::<XY>::new(10., 0.),
        ])
        .unwrap();
        let buffered = line.buffer_with_style(1., &style).unwrap().unwrap();
        assert_relative_eq!(buffered.area().unwrap(), 20.0, epsilon = 1e-9);
        assert!(diagonal().buffer(0.5, 4).unwrap().is_some());
    }

    #[test]
    fn style_from_json() {
        let style: BufferStyle = serde_json::from_str(r#"{"join": "Mitre"}"#).unwrap();
        assert_eq!(style.join, JoinStyle::Mitre);
        assert_eq!(style.quadrant_segments, 8);
    }
}
