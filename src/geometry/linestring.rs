use crate::coord::Coordinate;
use crate::dimension::{Dimension, NarrowTo};
use crate::error::{GeosError, Result};
use crate::geometry::Point;

/// An open or closed path of at least two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<D: Dimension> {
    coords: Vec<Coordinate<D>>,
}

impl<D: Dimension> LineString<D> {
    /// Fails with [`GeosError::TooFewPoints`] for fewer than two coordinates.
    pub fn try_new(coords: Vec<Coordinate<D>>) -> Result<Self> {
        if coords.len() < 2 {
            return Err(GeosError::TooFewPoints);
        }
        Ok(Self { coords })
    }

    /// Callers guarantee at least two coordinates.
    pub(crate) fn new_unchecked(coords: Vec<Coordinate<D>>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[Coordinate<D>] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coordinate<D>> {
        self.coords
    }

    pub fn first_point(&self) -> Point<D> {
        Point::new(self.coords[0])
    }

    pub fn last_point(&self) -> Point<D> {
        Point::new(self.coords[self.coords.len() - 1])
    }

    pub fn points(&self) -> impl Iterator<Item = Point<D>> + '_ {
        self.coords.iter().copied().map(Point::new)
    }

    /// First and last coordinates are equal.
    /// First and last coordinates coincide in x and y.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }

    pub fn convert<T: Dimension>(&self) -> LineString<T>
    where
        D: NarrowTo<T>,
    {
        LineString {
            coords: self.coords.iter().map(|c| c.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<LineString<T>> {
        Ok(LineString {
            coords: self
                .coords
                .iter()
                .map(|c| c.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
