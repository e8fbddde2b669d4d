//! Cardinal directions between neighboring cells in a square's local frame.

use glam::IVec2;

/// Number of arrows leaving every vertex.
pub const ARROWS_PER_VERTEX: usize = 4;

/// The four grid-axis directions, ordered counterclockwise.
///
/// The names describe the square-local frame (`+x` east, `+y` north), not
/// geographic directions on the sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    /// Increasing x.
    East,
    /// Increasing y.
    North,
    /// Decreasing x.
    West,
    /// Decreasing y.
    South,
}

impl ArrowDirection {
    /// All four directions in offset-id order.
    pub const ALL: [ArrowDirection; ARROWS_PER_VERTEX] = [
        ArrowDirection::East,
        ArrowDirection::North,
        ArrowDirection::West,
        ArrowDirection::South,
    ];

    /// Position within an arrow-id block, in `0..4`.
    #[must_use]
    #[inline]
    pub fn offset_id(self) -> usize {
        self as usize
    }

    /// Wraps modulo 4, so `offset_id ± 1` always names a perpendicular direction.
    #[must_use]
    #[inline]
    pub fn from_offset_id(offset_id: usize) -> Self {
        Self::ALL[offset_id % ARROWS_PER_VERTEX]
    }

    /// Unit step in the square-local grid.
    #[must_use]
    pub fn grid_offset(self) -> IVec2 {
        match self {
            ArrowDirection::East => IVec2::X,
            ArrowDirection::North => IVec2::Y,
            ArrowDirection::West => IVec2::NEG_X,
            ArrowDirection::South => IVec2::NEG_Y,
        }
    }

    /// The direction a grid offset points most strongly along.
    ///
    /// Exact inverse of [`Self::grid_offset`] on unit steps.
    #[must_use]
    pub fn from_grid_offset(offset: IVec2) -> Self {
        let backwards = usize::from(offset.x + offset.y < 0);
        let vertical = usize::from(offset.y.abs() > offset.x.abs());
        Self::ALL[2 * backwards + vertical]
    }

    /// The next direction counterclockwise.
    #[must_use]
    #[inline]
    pub fn next(self) -> Self {
        Self::from_offset_id(self.offset_id() + 1)
    }

    /// The next direction clockwise.
    #[must_use]
    #[inline]
    pub fn previous(self) -> Self {
        Self::from_offset_id(self.offset_id() + ARROWS_PER_VERTEX - 1)
    }

    #[must_use]
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_offset_id(self.offset_id() + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_ids_match_order() {
        for (i, direction) in ArrowDirection::ALL.into_iter().enumerate() {
            assert_eq!(direction.offset_id(), i);
            assert_eq!(ArrowDirection::from_offset_id(i), direction);
            assert_eq!(ArrowDirection::from_offset_id(i + 4), direction);
        }
    }

    #[test]
    fn test_grid_offset_inverse() {
        for direction in ArrowDirection::ALL {
            assert_eq!(
                ArrowDirection::from_grid_offset(direction.grid_offset()),
                direction,
                "{direction:?}"
            );
        }
    }

    #[test]
    fn test_rotation() {
        for direction in ArrowDirection::ALL {
            assert_eq!(direction.next().previous(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().grid_offset(), -direction.grid_offset());
            // Counterclockwise quarter turn: (x, y) -> (-y, x).
            let d = direction.grid_offset();
            assert_eq!(direction.next().grid_offset(), IVec2::new(-d.y, d.x));
        }
    }

    #[test]
    fn test_from_grid_offset_picks_dominant_axis() {
        assert_eq!(ArrowDirection::from_grid_offset(IVec2::new(3, 1)), ArrowDirection::East);
        assert_eq!(ArrowDirection::from_grid_offset(IVec2::new(1, 3)), ArrowDirection::North);
        assert_eq!(ArrowDirection::from_grid_offset(IVec2::new(-3, 1)), ArrowDirection::West);
        assert_eq!(ArrowDirection::from_grid_offset(IVec2::new(1, -3)), ArrowDirection::South);
    }
}
