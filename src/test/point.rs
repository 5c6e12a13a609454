use crate::coord::Coordinate;
use crate::dimension::{XY, XYM};
use crate::geometry::Point;

pub(crate) fn p0() -> Point<XY> {
    Point::new(Coordinate::<XY>::new(0., 1.))
}

pub(crate) fn p_m() -> Point<XYM> {
    Point::new(Coordinate::<XYM>::new(1., 2., 4.))
}
