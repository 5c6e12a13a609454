use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::dimension::{Dimension, XY};
use crate::error::Result;
use crate::geometry::{Geometry, LinearRing, Polygon};

/// Axis-aligned planar bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Envelope {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds of every coordinate in `geometry`, or `None` when it has no coordinates.
    pub fn of<D: Dimension>(geometry: &Geometry<D>) -> Option<Self> {
        let mut envelope: Option<Envelope> = None;
        geometry.visit_coords(&mut |c| {
            let (x, y) = (c.x(), c.y());
            envelope = Some(match envelope {
                None => Envelope::new(x, x, y, y),
                Some(e) => Envelope::new(
                    e.min_x.min(x),
                    e.max_x.max(x),
                    e.min_y.min(y),
                    e.max_y.max(y),
                ),
            });
        });
        envelope
    }

    /// The bounds as a closed polygon, counter-clockwise from the minimum corner.
    pub fn to_polygon(&self) -> Result<Polygon<XY>> {
        let exterior = LinearRing::try_new(vec![
            Coordinate::<XY>::new(self.min_x, self.min_y),
            Coordinate::<XY>::new(self.max_x, self.min_y),
            Coordinate::<XY>::new(self.max_x, self.max_y),
            Coordinate::<XY>::new(self.min_x, self.max_y),
            Coordinate::<XY>::new(self.min_x, self.min_y),
        ])?;
        Ok(Polygon::new(exterior, vec![]))
    }
}
