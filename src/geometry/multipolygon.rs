use crate::dimension::{Dimension, NarrowTo};
use crate::error::Result;
use crate::geometry::Polygon;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon<D: Dimension> {
    polygons: Vec<Polygon<D>>,
}

impl<D: Dimension> MultiPolygon<D> {
    pub fn new(polygons: Vec<Polygon<D>>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon<D>] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon<D>> {
        self.polygons
    }

    pub fn convert<T: Dimension>(&self) -> MultiPolygon<T>
    where
        D: NarrowTo<T>,
    {
        MultiPolygon {
            polygons: self.polygons.iter().map(|p| p.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<MultiPolygon<T>> {
        Ok(MultiPolygon {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
