use std::fmt::Debug;
use std::marker::PhantomData;

use crate::dimension::{Dimension, HasM, HasZ, NarrowTo, XY, XYM, XYZ, XYZM};
use crate::error::{GeosError, Result};

/// An immutable coordinate whose fields are selected by the dimension tag `D`.
///
/// Height is only readable when `D: HasZ`, measure only when `D: HasM`.
#[derive(Clone, Copy)]
pub struct Coordinate<D: Dimension> {
    x: f64,
    y: f64,
    z: f64,
    m: f64,
    dim: PhantomData<D>,
}

impl Coordinate<XY> {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_parts(x, y, None, None)
    }
}

impl Coordinate<XYZ> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_parts(x, y, Some(z), None)
    }
}

impl Coordinate<XYM> {
    pub fn new(x: f64, y: f64, m: f64) -> Self {
        Self::from_parts(x, y, None, Some(m))
    }
}

impl Coordinate<XYZM> {
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::from_parts(x, y, Some(z), Some(m))
    }
}

impl<D: Dimension> Coordinate<D> {
    /// Components absent from `D` are discarded; components `D` needs but that are missing
    /// become NaN.
    pub(crate) fn from_parts(x: f64, y: f64, z: Option<f64>, m: Option<f64>) -> Self {
        Self {
            x,
            y,
            z: if D::HAS_Z { z.unwrap_or(f64::NAN) } else { f64::NAN },
            m: if D::HAS_M { m.unwrap_or(f64::NAN) } else { f64::NAN },
            dim: PhantomData,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates sit at the same planar position; height and measure are
    /// ignored.
    pub fn equals_2d(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub(crate) fn z_opt(&self) -> Option<f64> {
        D::HAS_Z.then_some(self.z)
    }

    pub(crate) fn m_opt(&self) -> Option<f64> {
        D::HAS_M.then_some(self.m)
    }

    /// Drops the components `T` does not carry.
    pub fn convert<T: Dimension>(&self) -> Coordinate<T>
    where
        D: NarrowTo<T>,
    {
        Coordinate::from_parts(self.x, self.y, self.z_opt(), self.m_opt())
    }

    /// Converts to `T`, failing when `T` needs a component this coordinate lacks.
    pub fn try_convert<T: Dimension>(&self) -> Result<Coordinate<T>> {
        if !D::DIMENSIONS.contains(T::DIMENSIONS) {
            return Err(GeosError::CannotConvertCoordinateTypes {
                from: D::DIMENSIONS,
                to: T::DIMENSIONS,
            });
        }
        Ok(Coordinate::from_parts(
            self.x,
            self.y,
            self.z_opt(),
            self.m_opt(),
        ))
    }
}

impl<D: HasZ> Coordinate<D> {
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl<D: HasM> Coordinate<D> {
    pub fn m(&self) -> f64 {
        self.m
    }
}

impl<D: Dimension> PartialEq for Coordinate<D> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && (!D::HAS_Z || self.z == other.z)
            && (!D::HAS_M || self.m == other.m)
    }
}

impl<D: Dimension> Debug for Coordinate<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_tuple("Coordinate");
        s.field(&self.x).field(&self.y);
        if let Some(z) = self.z_opt() {
            s.field(&z);
        }
        if let Some(m) = self.m_opt() {
            s.field(&m);
        }
        s.finish()
    }
}

impl From<(f64, f64)> for Coordinate<XY> {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::<XY>::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate<XYZ> {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coordinate::<XYZ>::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Coordinate<XYM> {
    fn from((x, y, m): (f64, f64, f64)) -> Self {
        Coordinate::<XYM>::new(x, y, m)
    }
}

impl From<(f64, f64, f64, f64)> for Coordinate<XYZM> {
    fn from((x, y, z, m): (f64, f64, f64, f64)) -> Self {
        Coordinate::<XYZM>::new(x, y, z, m)
    }
}
