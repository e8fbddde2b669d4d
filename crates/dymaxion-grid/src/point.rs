//! Square-local positions, the common currency between every layer of the grid.

use std::ops::{Add, Div, Mul, Sub};

use glam::{DVec2, IVec2};

/// A position in the local frame of one of the ten squares of the net.
///
/// The representation of the position is generic: [`ScalarPoint`] carries a
/// fractional `DVec2` (the unit square is `[0,1]²`), [`IdPoint`] carries an
/// integral `IVec2` cell coordinate (`[0, side)²`). Values outside those
/// ranges are legal and name a spot across a seam; the projection and
/// indexing layers standardize them back into a canonical square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<V> {
    /// Which square the position is expressed in. Canonically in `0..10`.
    pub square_id: i32,
    /// Coordinates in the square's local frame.
    pub position: V,
}

/// A continuous position within a square.
pub type ScalarPoint = Point<DVec2>;

/// A discrete cell within a square.
pub type IdPoint = Point<IVec2>;

impl<V> Point<V> {
    #[inline]
    pub const fn new(square_id: i32, position: V) -> Self {
        Self {
            square_id,
            position,
        }
    }
}

impl ScalarPoint {
    /// Round to the nearest cell. The square is left untouched.
    #[must_use]
    #[inline]
    pub fn round(self) -> IdPoint {
        Point::new(self.square_id, self.position.round().as_ivec2())
    }
}

impl IdPoint {
    /// Clamp both coordinates into `[lo, hi]`.
    ///
    /// Tolerates `lo > hi` (the upper bound wins), so degenerate one-cell
    /// squares never panic.
    #[must_use]
    #[inline]
    pub fn clamp(self, lo: i32, hi: i32) -> Self {
        Point::new(
            self.square_id,
            self.position.max(IVec2::splat(lo)).min(IVec2::splat(hi)),
        )
    }
}

impl From<IdPoint> for ScalarPoint {
    #[inline]
    fn from(point: IdPoint) -> Self {
        Point::new(point.square_id, point.position.as_dvec2())
    }
}

impl Add<DVec2> for ScalarPoint {
    type Output = Self;

    #[inline]
    fn add(self, offset: DVec2) -> Self {
        Point::new(self.square_id, self.position + offset)
    }
}

impl Sub<DVec2> for ScalarPoint {
    type Output = Self;

    #[inline]
    fn sub(self, offset: DVec2) -> Self {
        Point::new(self.square_id, self.position - offset)
    }
}

impl Mul<f64> for ScalarPoint {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Point::new(self.square_id, self.position * factor)
    }
}

impl Div<f64> for ScalarPoint {
    type Output = Self;

    #[inline]
    fn div(self, divisor: f64) -> Self {
        Point::new(self.square_id, self.position / divisor)
    }
}

impl Add<IVec2> for IdPoint {
    type Output = Self;

    #[inline]
    fn add(self, offset: IVec2) -> Self {
        Point::new(self.square_id, self.position + offset)
    }
}

/// Integer division of both coordinates, used to map a fine cell onto the
/// coarse cell containing it.
impl Div<i32> for IdPoint {
    type Output = Self;

    #[inline]
    fn div(self, divisor: i32) -> Self {
        Point::new(self.square_id, self.position / divisor)
    }
}
