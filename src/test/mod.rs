pub(crate) mod point;

use crate::dimension::{HasM, HasZ};
use crate::geometry::Geometry;

pub(crate) fn heights<D: HasZ>(geometry: &Geometry<D>) -> Vec<f64> {
    let mut heights = vec![];
    geometry.visit_coords(&mut |c| heights.push(c.z()));
    heights
}

pub(crate) fn measures<D: HasM>(geometry: &Geometry<D>) -> Vec<f64> {
    let mut measures = vec![];
    geometry.visit_coords(&mut |c| measures.push(c.m()));
    measures
}

/// Routes engine notices and error messages to the test output.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
