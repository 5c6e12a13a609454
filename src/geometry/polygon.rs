use crate::dimension::{Dimension, NarrowTo};
use crate::error::Result;
use crate::geometry::LinearRing;

/// An exterior ring with zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<D: Dimension> {
    exterior: LinearRing<D>,
    holes: Vec<LinearRing<D>>,
}

impl<D: Dimension> Polygon<D> {
    pub fn new(exterior: LinearRing<D>, holes: Vec<LinearRing<D>>) -> Self {
        Self { exterior, holes }
    }

    pub fn exterior(&self) -> &LinearRing<D> {
        &self.exterior
    }

    pub fn holes(&self) -> &[LinearRing<D>] {
        &self.holes
    }

    pub fn into_inner(self) -> (LinearRing<D>, Vec<LinearRing<D>>) {
        (self.exterior, self.holes)
    }

    pub fn convert<T: Dimension>(&self) -> Polygon<T>
    where
        D: NarrowTo<T>,
    {
        Polygon {
            exterior: self.exterior.convert(),
            holes: self.holes.iter().map(|r| r.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<Polygon<T>> {
        Ok(Polygon {
            exterior: self.exterior.try_convert()?,
            holes: self
                .holes
                .iter()
                .map(|r| r.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
