//! Dense integer addressing of grid cells.
//!
//! Every cell of the ten squares gets a unique memory id in
//! `0..10 · side²`, suitable for indexing flat per-vertex arrays. Ids are
//! laid out square by square, row by row, with both levels interleaved
//! boustrophedon-style so that neighboring cells stay close in memory.

use glam::IVec2;

use crate::error::{self, GridError};
use crate::interleaving::Interleaving;
use crate::point::{IdPoint, ScalarPoint};
use crate::projection::Projection;
use crate::squares::{SQUARE_COUNT, Squares};
use crate::voronoi::HALF_CELL;

/// Bijection between discrete cells and memory ids for one resolution.
#[derive(Clone, Debug)]
pub struct Indexing {
    projection: Projection,
    vertices_per_square_side: i32,
    row_interleave: Interleaving,
    square_interleave: Interleaving,
}

impl Indexing {
    /// # Panics
    ///
    /// Panics if `vertices_per_square_side` is not positive.
    #[must_use]
    pub fn new(vertices_per_square_side: i32) -> Self {
        match Self::try_new(vertices_per_square_side) {
            Ok(indexing) => indexing,
            Err(err) => panic!("invalid Indexing parameters: {err}"),
        }
    }

    pub fn try_new(vertices_per_square_side: i32) -> Result<Self, GridError> {
        error::validate_side(vertices_per_square_side)?;
        let side = vertices_per_square_side as usize;
        Ok(Self {
            projection: Projection::new(),
            vertices_per_square_side,
            row_interleave: Interleaving::new(side),
            square_interleave: Interleaving::new(side * side),
        })
    }

    #[must_use]
    #[inline]
    pub fn vertices_per_square_side(&self) -> i32 {
        self.vertices_per_square_side
    }

    #[must_use]
    #[inline]
    pub fn vertex_count(&self) -> usize {
        SQUARE_COUNT as usize * self.square_interleave.elements_per_block()
    }

    /// Canonicalize a cell that may lie up to one cell outside its square.
    ///
    /// The cell center is standardized as a continuous position, then
    /// rounded and clamped back into `[0, side - 1]²`.
    #[must_use]
    pub fn standardize(&self, grid_id: IdPoint) -> IdPoint {
        let side = f64::from(self.vertices_per_square_side);
        let center = (ScalarPoint::from(grid_id) + HALF_CELL) / side;
        let standard = self.projection.standardize(center) * side - HALF_CELL;
        let rounded = standard.round().clamp(0, self.vertices_per_square_side - 1);
        IdPoint::new(Squares::canonical_id(rounded.square_id), rounded.position)
    }

    /// Memory id of any cell, standardizing it first.
    #[must_use]
    #[inline]
    pub fn memory_id(&self, grid_id: IdPoint) -> usize {
        self.memory_id_when_standard(self.standardize(grid_id))
    }

    /// Memory id of a cell already known to be canonical.
    ///
    /// Cheaper than [`Self::memory_id`]; the result is meaningless for cells
    /// outside `[0,10) × [0, side)²`.
    #[must_use]
    #[inline]
    pub fn memory_id_when_standard(&self, grid_id: IdPoint) -> usize {
        let row = grid_id.position.y as usize;
        let column = grid_id.position.x as usize;
        self.square_interleave.interleaved_id(
            grid_id.square_id as usize,
            self.row_interleave.interleaved_id(row, column),
        )
    }

    /// The canonical cell at a memory id.
    #[must_use]
    pub fn grid_id(&self, memory_id: usize) -> IdPoint {
        let square_id = self.square_interleave.block_id(memory_id);
        let within_square = self.square_interleave.element_id(memory_id);
        let row = self.row_interleave.block_id(within_square);
        let column = self.row_interleave.element_id(within_square);
        IdPoint::new(square_id as i32, IVec2::new(column as i32, row as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip_is_a_bijection() {
        let indexing = Indexing::new(6);
        assert_eq!(indexing.vertex_count(), 360);
        let mut seen = vec![false; indexing.vertex_count()];
        for memory_id in 0..indexing.vertex_count() {
            let grid_id = indexing.grid_id(memory_id);
            assert!((0..SQUARE_COUNT).contains(&grid_id.square_id));
            assert!(grid_id.position.cmpge(IVec2::ZERO).all());
            assert!(grid_id.position.cmplt(IVec2::splat(6)).all());
            assert_eq!(indexing.memory_id(grid_id), memory_id, "{grid_id:?}");
            assert!(!seen[memory_id]);
            seen[memory_id] = true;
        }
    }

    #[test]
    fn test_standardize_in_range_is_identity() {
        let indexing = Indexing::new(5);
        for square_id in 0..SQUARE_COUNT {
            for x in 0..5 {
                for y in 0..5 {
                    let id = IdPoint::new(square_id, IVec2::new(x, y));
                    assert_eq!(indexing.standardize(id), id);
                }
            }
        }
        let wrapped = IdPoint::new(-3, IVec2::new(1, 2));
        assert_eq!(indexing.standardize(wrapped).square_id, 7);
    }

    #[test]
    fn test_neighbors_across_equatorial_seam() {
        let indexing = Indexing::new(4);
        // One cell east of square 0's last column is the first column of square 1.
        let across = indexing.standardize(IdPoint::new(0, IVec2::new(4, 2)));
        assert_eq!(across, IdPoint::new(1, IVec2::new(0, 2)));
        // One cell south of square 0's first row is the last row of square 9.
        let across = indexing.standardize(IdPoint::new(0, IVec2::new(2, -1)));
        assert_eq!(across, IdPoint::new(9, IVec2::new(2, 3)));
    }

    #[test]
    fn test_neighbors_across_polar_seam() {
        let indexing = Indexing::new(4);
        // West of a northern square wraps onto the top row of the square two to the west.
        let across = indexing.standardize(IdPoint::new(0, IVec2::new(-1, 1)));
        assert_eq!(across, IdPoint::new(8, IVec2::new(2, 3)));
    }

    #[test]
    fn test_diagonal_neighbors_across_polar_corner() {
        let indexing = Indexing::new(8);
        // South-west of northern square 0: past the polar x edge and the
        // equatorial y edge, landing in the far corner of square 8.
        let across = indexing.standardize(IdPoint::new(0, IVec2::new(-1, -1)));
        assert_eq!(across, IdPoint::new(8, IVec2::new(7, 7)));
        // North-east of southern square 1 mirrors it into square 3.
        let across = indexing.standardize(IdPoint::new(1, IVec2::new(8, 8)));
        assert_eq!(across, IdPoint::new(3, IVec2::new(0, 0)));
    }

    #[test]
    fn test_adjacent_memory_ids_share_rows() {
        // The boustrophedon layout keeps consecutive ids on neighboring cells.
        let indexing = Indexing::new(4);
        for memory_id in 0..15 {
            let a = indexing.grid_id(memory_id);
            let b = indexing.grid_id(memory_id + 1);
            let step = (a.position - b.position).abs();
            assert_eq!(step.x + step.y, 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_try_new_rejects_nonpositive_side() {
        assert_eq!(Indexing::try_new(0).err(), Some(GridError::InvalidSide(0)));
    }
}
