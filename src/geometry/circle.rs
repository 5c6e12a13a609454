use crate::dimension::XY;
use crate::geometry::Point;

/// A planar circle, as returned by the minimum bounding circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point<XY>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point<XY>, radius: f64) -> Self {
        Self { center, radius }
    }
}
