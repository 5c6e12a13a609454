use crate::coord::Coordinate;
use crate::dimension::{Dimension, HasM, HasZ, NarrowTo};
use crate::error::Result;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<D: Dimension>(Coordinate<D>);

impl<D: Dimension> Point<D> {
    pub fn new(coord: Coordinate<D>) -> Self {
        Self(coord)
    }

    pub fn coord(&self) -> Coordinate<D> {
        self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x()
    }

    pub fn y(&self) -> f64 {
        self.0.y()
    }

    pub fn convert<T: Dimension>(&self) -> Point<T>
    where
        D: NarrowTo<T>,
    {
        Point(self.0.convert())
    }

    pub fn try_convert<T: Dimension>(&self) -> Result<Point<T>> {
        Ok(Point(self.0.try_convert()?))
    }
}

impl<D: HasZ> Point<D> {
    pub fn z(&self) -> f64 {
        self.0.z()
    }
}

impl<D: HasM> Point<D> {
    pub fn m(&self) -> f64 {
        self.0.m()
    }
}

impl<D: Dimension> From<Coordinate<D>> for Point<D> {
    fn from(value: Coordinate<D>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::{XY, XYM, XYZ, XYZM};
    use crate::error::GeosError;

    #[test]
    fn narrow_xyzm_to_xy() {
        let point = Point::new(Coordinate::<XYZM>::new(1., 2., 3., 4.));
        let narrowed: Point<XY> = point.convert();
        assert_eq!(narrowed, Point::new(Coordinate::<XY>::new(1., 2.)));

        let as_xyz: Point<XYZ> = point.try_convert().unwrap();
        assert_eq!(as_xyz.z(), 3.);
    }

    #[test]
    fn promote_xy_to_xym_fails() {
        let point = Point::new(Coordinate::<XY>::new(1., 2.));
        assert!(matches!(
            point.try_convert::<XYM>(),
            Err(GeosError::CannotConvertCoordinateTypes { .. })
        ));
    }
}
