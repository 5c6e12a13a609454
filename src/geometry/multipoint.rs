use crate::dimension::{Dimension, NarrowTo};
use crate::error::Result;
use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<D: Dimension> {
    points: Vec<Point<D>>,
}

impl<D: Dimension> MultiPoint<D> {
    pub fn new(points: Vec<Point<D>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point<D>> {
        self.points
    }

    pub fn convert<T: Dimension>(&self) -> MultiPoint<T>
    where
        D: NarrowTo<T>,
    {
        MultiPoint {
            points: self.points.iter().map(|p| p.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<MultiPoint<T>> {
        Ok(MultiPoint {
            points: self
                .points
                .iter()
                .map(|p| p.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
