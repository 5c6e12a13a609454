use crate::dimension::{Dimension, NarrowTo};
use crate::error::Result;
use crate::geometry::Geometry;

/// An ordered, possibly nested, sequence of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection<D: Dimension> {
    geometries: Vec<Geometry<D>>,
}

impl<D: Dimension> GeometryCollection<D> {
    pub fn new(geometries: Vec<Geometry<D>>) -> Self {
        Self { geometries }
    }

    pub fn geometries(&self) -> &[Geometry<D>] {
        &self.geometries
    }

    pub fn into_geometries(self) -> Vec<Geometry<D>> {
        self.geometries
    }

    pub fn convert<T: Dimension>(&self) -> GeometryCollection<T>
    where
        D: NarrowTo<T>,
    {
        GeometryCollection {
            geometries: self.geometries.iter().map(|g| g.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<GeometryCollection<T>> {
        Ok(GeometryCollection {
            geometries: self
                .geometries
                .iter()
                .map(|g| g.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
