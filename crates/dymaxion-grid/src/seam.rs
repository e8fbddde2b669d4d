//! Seam crossings for positions that leave the unit square.
//!
//! A square has four edges. Two of them run from a ring vertex to the
//! square's pole ("polar" edges): the `x = 0` and `y = 1` edges of a northern
//! square, the `x = 1` and `y = 0` edges of a southern one. Crossing a polar
//! edge lands two squares over with the axes swapped; crossing one of the
//! other two lands one square over with the axes unchanged.

use glam::{DVec2, IVec2};

use crate::point::ScalarPoint;
use crate::squares::Squares;

/// How a continuous position overflows the unit square of its square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeamCrossing {
    /// Per-axis overflow direction: `-1` below 0, `+1` above 1, `0` in range.
    pub nonlocal_sign: IVec2,
    /// Whether the x overflow crosses a polar edge.
    pub is_polar_x: bool,
    /// Whether the y overflow crosses a polar edge.
    pub is_polar_y: bool,
}

/// Overflow direction of a single coordinate.
#[inline]
fn overflow_sign(coordinate: f64) -> i32 {
    if coordinate > 1.0 {
        1
    } else if coordinate < 0.0 {
        -1
    } else {
        0
    }
}

impl SeamCrossing {
    /// Classify the position of `point` against its square's edges.
    #[must_use]
    pub fn classify(point: ScalarPoint) -> Self {
        let polarity = if Squares::is_northern(point.square_id) { 1 } else { -1 };
        let sign = IVec2::new(
            overflow_sign(point.position.x),
            overflow_sign(point.position.y),
        );
        Self {
            nonlocal_sign: sign,
            is_polar_x: sign.x != 0 && sign.x == -polarity,
            is_polar_y: sign.y != 0 && sign.y == polarity,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_nonlocal_x(&self) -> bool {
        self.nonlocal_sign.x != 0
    }

    #[must_use]
    #[inline]
    pub fn is_nonlocal_y(&self) -> bool {
        self.nonlocal_sign.y != 0
    }

    /// The position lies inside (or on the boundary of) its square.
    #[must_use]
    #[inline]
    pub fn is_local(&self) -> bool {
        self.nonlocal_sign == IVec2::ZERO
    }

    #[must_use]
    #[inline]
    pub fn is_polar(&self) -> bool {
        self.is_polar_x || self.is_polar_y
    }

    /// Both axes overflow.
    #[must_use]
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.is_nonlocal_x() && self.is_nonlocal_y()
    }

    /// Both axes overflow across polar edges: the position is beyond the pole
    /// itself, where no single neighboring square is well defined.
    #[must_use]
    #[inline]
    pub fn is_pole(&self) -> bool {
        self.is_polar_x && self.is_polar_y
    }

    /// The same crossing restricted to the x axis.
    #[must_use]
    #[inline]
    pub fn x_only(&self) -> Self {
        Self {
            nonlocal_sign: IVec2::new(self.nonlocal_sign.x, 0),
            is_polar_x: self.is_polar_x,
            is_polar_y: false,
        }
    }

    /// Carry a point across this crossing into the adjacent square.
    ///
    /// A corner past one polar edge wraps both axes in a single step into the
    /// square two over, which is the square sharing that corner cell's
    /// neighborhood. Any other corner resolves the x axis only and leaves the
    /// y overflow for a second crossing. A pole is returned unchanged. The
    /// returned square id is canonical.
    #[must_use]
    pub fn cross(&self, point: ScalarPoint) -> ScalarPoint {
        if self.is_pole() {
            return point;
        }
        if self.is_corner() && self.is_polar() {
            let sign = self.nonlocal_sign;
            let square_shift = if self.is_polar_x { 2 * sign.x } else { 2 * sign.y };
            return ScalarPoint::new(
                Squares::canonical_id(point.square_id + square_shift),
                point.position - sign.as_dvec2(),
            );
        }
        let crossing = if self.is_corner() { self.x_only() } else { *self };
        let sign = crossing.nonlocal_sign;
        let wrapped = point.position - sign.as_dvec2();
        let (square_shift, position) = if crossing.is_polar_x {
            (2 * sign.x, DVec2::new(1.0 - wrapped.y, wrapped.x))
        } else if crossing.is_polar_y {
            (2 * sign.y, DVec2::new(wrapped.y, 1.0 - wrapped.x))
        } else {
            (sign.x + sign.y, wrapped)
        };
        ScalarPoint::new(Squares::canonical_id(point.square_id + square_shift), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(square_id: i32, x: f64, y: f64) -> ScalarPoint {
        ScalarPoint::new(square_id, DVec2::new(x, y))
    }

    #[test]
    fn test_in_range_is_local() {
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.25), (0.0, 1.0)] {
            let crossing = SeamCrossing::classify(point(3, x, y));
            assert!(crossing.is_local(), "({x}, {y}) should be local");
            assert!(!crossing.is_polar());
        }
    }

    #[test]
    fn test_polar_edges_depend_on_polarity() {
        // Northern squares: x < 0 and y > 1 are polar.
        assert!(SeamCrossing::classify(point(0, -0.1, 0.5)).is_polar_x);
        assert!(SeamCrossing::classify(point(0, 0.5, 1.1)).is_polar_y);
        assert!(!SeamCrossing::classify(point(0, 1.1, 0.5)).is_polar());
        assert!(!SeamCrossing::classify(point(0, 0.5, -0.1)).is_polar());

        // Southern squares: x > 1 and y < 0 are polar.
        assert!(SeamCrossing::classify(point(1, 1.1, 0.5)).is_polar_x);
        assert!(SeamCrossing::classify(point(1, 0.5, -0.1)).is_polar_y);
        assert!(!SeamCrossing::classify(point(1, -0.1, 0.5)).is_polar());
        assert!(!SeamCrossing::classify(point(1, 0.5, 1.1)).is_polar());
    }

    #[test]
    fn test_corner_and_pole() {
        let pole = SeamCrossing::classify(point(2, -0.1, 1.1));
        assert!(pole.is_corner());
        assert!(pole.is_pole());

        let corner = SeamCrossing::classify(point(2, 1.1, 1.1));
        assert!(corner.is_corner());
        assert!(!corner.is_pole());
    }

    #[test]
    fn test_equatorial_crossing_shifts_one_square() {
        let crossed = SeamCrossing::classify(point(0, 1.25, 0.5)).cross(point(0, 1.25, 0.5));
        assert_eq!(crossed.square_id, 1);
        assert_eq!(crossed.position, DVec2::new(0.25, 0.5));

        let crossed = SeamCrossing::classify(point(0, 0.5, -0.25)).cross(point(0, 0.5, -0.25));
        assert_eq!(crossed.square_id, 9);
        assert_eq!(crossed.position, DVec2::new(0.5, 0.75));
    }

    #[test]
    fn test_polar_crossing_shifts_two_squares_and_swaps_axes() {
        let p = point(0, -0.25, 0.5);
        let crossed = SeamCrossing::classify(p).cross(p);
        assert_eq!(crossed.square_id, 8);
        assert_eq!(crossed.position, DVec2::new(0.5, 0.75));

        let p = point(1, 0.5, -0.25);
        let crossed = SeamCrossing::classify(p).cross(p);
        assert_eq!(crossed.square_id, 9);
        assert_eq!(crossed.position, DVec2::new(0.75, 0.5));
    }

    #[test]
    fn test_polar_corner_wraps_both_axes_at_once() {
        // Northern square 0: x < 0 is polar, y < 0 is not.
        let p = point(0, -0.25, -0.5);
        let crossed = SeamCrossing::classify(p).cross(p);
        assert_eq!(crossed.square_id, 8);
        assert_eq!(crossed.position, DVec2::new(0.75, 0.5));

        // Southern square 1: x > 1 is polar, y > 1 is not.
        let p = point(1, 1.25, 1.5);
        let crossed = SeamCrossing::classify(p).cross(p);
        assert_eq!(crossed.square_id, 3);
        assert_eq!(crossed.position, DVec2::new(0.25, 0.5));
    }

    #[test]
    fn test_nonpolar_corner_crosses_x_first() {
        // Northern square 0: x > 1 and y < 0 are both equatorial edges.
        let p = point(0, 1.25, -0.5);
        let crossing = SeamCrossing::classify(p);
        assert!(crossing.is_corner() && !crossing.is_polar());
        let crossed = crossing.cross(p);
        assert_eq!(crossed.square_id, 1);
        assert_eq!(crossed.position, DVec2::new(0.25, -0.5));
    }

    #[test]
    fn test_pole_cross_is_identity() {
        let p = point(2, -0.1, 1.1);
        assert_eq!(SeamCrossing::classify(p).cross(p), p);
    }
}
