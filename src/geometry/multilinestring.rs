use crate::dimension::{Dimension, NarrowTo};
use crate::error::Result;
use crate::geometry::LineString;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString<D: Dimension> {
    line_strings: Vec<LineString<D>>,
}

impl<D: Dimension> MultiLineString<D> {
    pub fn new(line_strings: Vec<LineString<D>>) -> Self {
        Self { line_strings }
    }

    pub fn line_strings(&self) -> &[LineString<D>] {
        &self.line_strings
    }

    pub fn into_line_strings(self) -> Vec<LineString<D>> {
        self.line_strings
    }

    pub fn convert<T: Dimension>(&self) -> MultiLineString<T>
    where
        D: NarrowTo<T>,
    {
        MultiLineString {
            line_strings: self.line_strings.iter().map(|l| l.convert()).collect(),
        }
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<MultiLineString<T>> {
        Ok(MultiLineString {
            line_strings: self
                .line_strings
                .iter()
                .map(|l| l.try_convert())
                .collect::<Result<_>>()?,
        })
    }
}
