use crate::coord::Coordinate;
use crate::dimension::{Dimension, NarrowTo};
use crate::error::{GeosError, Result};
use crate::geometry::LineString;

/// A closed line string bounding a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing<D: Dimension> {
    coords: Vec<Coordinate<D>>,
}

impl<D: Dimension> LinearRing<D> {
    /// Needs at least four coordinates with the first equal to the last in x and y.
    pub fn try_new(coords: Vec<Coordinate<D>>) -> Result<Self> {
        if coords.len() < 4 {
            return Err(GeosError::TooFewPoints);
        }
        match (coords.first(), coords.last()) {
            (Some(first), Some(last)) if first.equals_2d(last) => {}
            _ => return Err(GeosError::RingNotClosed),
        }
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[Coordinate<D>] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coordinate<D>> {
        self.coords
    }

    pub fn convert<T: Dimension>(&self) -> LinearRing<T>
    where
        D: NarrowTo<T>,
    {
        LinearRing {
            coords: self.coords.iter().map(|c| c.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<LinearRing<T>> {
        Ok(LinearRing {
            coords: self
                .coords
                .iter()
                .map(|c| c.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}

impl<D: Dimension> From<LinearRing<D>> for LineString<D> {
    fn from(value: LinearRing<D>) -> Self {
        LineString::new_unchecked(value.coords)
    }
}

impl<D: Dimension> TryFrom<LineString<D>> for LinearRing<D> {
    type Error = GeosError;

    fn try_from(value: LineString<D>) -> Result<Self> {
        LinearRing::try_new(value.into_coords())
    }
}
