//! Mapping vertices of a fine grid onto the coarse grid cells containing them.

use crate::error::GridError;
use crate::indexing::Indexing;

/// For every memory id of a fine [`Indexing`], the memory id of the coarse
/// cell it falls inside.
///
/// Requires the fine side to be an exact multiple of the coarse side, so each
/// coarse cell covers a `factor × factor` block of fine cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexDownsamplingIds {
    coarse_ids: Vec<usize>,
    coarse_vertex_count: usize,
    factor: i32,
}

impl VertexDownsamplingIds {
    pub fn new(fine: &Indexing, coarse: &Indexing) -> Result<Self, GridError> {
        let fine_side = fine.vertices_per_square_side();
        let coarse_side = coarse.vertices_per_square_side();
        if fine_side % coarse_side != 0 {
            return Err(GridError::IncompatibleResolutions {
                fine: fine_side,
                coarse: coarse_side,
            });
        }
        let factor = fine_side / coarse_side;
        let coarse_ids = (0..fine.vertex_count())
            .map(|memory_id| coarse.memory_id_when_standard(fine.grid_id(memory_id) / factor))
            .collect();
        Ok(Self {
            coarse_ids,
            coarse_vertex_count: coarse.vertex_count(),
            factor,
        })
    }

    /// Coarse memory id of a fine memory id.
    #[must_use]
    #[inline]
    pub fn get(&self, fine_memory_id: usize) -> usize {
        self.coarse_ids[fine_memory_id]
    }

    /// Fine cells per coarse cell along one axis.
    #[must_use]
    #[inline]
    pub fn factor(&self) -> i32 {
        self.factor
    }

    /// Number of fine vertices.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.coarse_ids.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coarse_ids.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn coarse_vertex_count(&self) -> usize {
        self.coarse_vertex_count
    }

    /// Coarse memory ids in fine memory order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.coarse_ids.iter().copied()
    }

    /// Average fine per-vertex values into their coarse cells.
    ///
    /// # Panics
    ///
    /// Panics if `fine` does not hold one value per fine vertex or `coarse`
    /// one value per coarse vertex.
    pub fn downsample_mean(&self, fine: &[f64], coarse: &mut [f64]) {
        assert_eq!(fine.len(), self.len(), "fine buffer length mismatch");
        assert_eq!(
            coarse.len(),
            self.coarse_vertex_count,
            "coarse buffer length mismatch"
        );
        coarse.fill(0.0);
        for (&coarse_id, &value) in self.coarse_ids.iter().zip(fine) {
            coarse[coarse_id] += value;
        }
        let cells_per_coarse_cell = f64::from(self.factor * self.factor);
        for value in coarse.iter_mut() {
            *value /= cells_per_coarse_cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_stay_in_coarse_range() {
        let fine = Indexing::new(12);
        let coarse = Indexing::new(4);
        let ids = VertexDownsamplingIds::new(&fine, &coarse).unwrap();
        assert_eq!(ids.factor(), 3);
        assert_eq!(ids.len(), fine.vertex_count());
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|id| id < coarse.vertex_count()));
    }

    #[test]
    fn test_each_coarse_cell_covers_factor_squared_fine_cells() {
        let fine = Indexing::new(8);
        let coarse = Indexing::new(4);
        let ids = VertexDownsamplingIds::new(&fine, &coarse).unwrap();
        let mut counts = vec![0; coarse.vertex_count()];
        for id in ids.iter() {
            counts[id] += 1;
        }
        assert!(counts.iter().all(|&c| c == 4), "{counts:?}");
    }

    #[test]
    fn test_coarse_cell_contains_fine_cell() {
        let fine = Indexing::new(6);
        let coarse = Indexing::new(3);
        let ids = VertexDownsamplingIds::new(&fine, &coarse).unwrap();
        for memory_id in 0..fine.vertex_count() {
            let f = fine.grid_id(memory_id);
            let c = coarse.grid_id(ids.get(memory_id));
            assert_eq!(f.square_id, c.square_id);
            assert_eq!(f.position / 2, c.position, "{f:?} -> {c:?}");
        }
    }

    #[test]
    fn test_same_resolution_is_identity() {
        let indexing = Indexing::new(5);
        let ids = VertexDownsamplingIds::new(&indexing, &indexing).unwrap();
        assert_eq!(ids.factor(), 1);
        assert!(ids.iter().enumerate().all(|(fine, coarse)| fine == coarse));
    }

    #[test]
    fn test_incompatible_resolutions() {
        let err = VertexDownsamplingIds::new(&Indexing::new(10), &Indexing::new(4)).unwrap_err();
        assert_eq!(err, GridError::IncompatibleResolutions { fine: 10, coarse: 4 });
    }

    #[test]
    fn test_downsample_mean_of_constant_is_constant() {
        let fine = Indexing::new(8);
        let coarse = Indexing::new(2);
        let ids = VertexDownsamplingIds::new(&fine, &coarse).unwrap();
        let values = vec![3.5; fine.vertex_count()];
        let mut out = vec![0.0; coarse.vertex_count()];
        ids.downsample_mean(&values, &mut out);
        assert!(out.iter().all(|&v| (v - 3.5).abs() < 1e-12), "{out:?}");
    }

    #[test]
    fn test_downsample_mean_averages_blocks() {
        let fine = Indexing::new(2);
        let coarse = Indexing::new(1);
        let ids = VertexDownsamplingIds::new(&fine, &coarse).unwrap();
        let values: Vec<f64> = (0..fine.vertex_count()).map(|m| m as f64).collect();
        let mut out = vec![0.0; coarse.vertex_count()];
        ids.downsample_mean(&values, &mut out);
        // Square s owns fine ids 4s..4s+4 and coarse id s.
        for (square, mean) in out.iter().enumerate() {
            let expected = (4 * square) as f64 + 1.5;
            assert!((mean - expected).abs() < 1e-12, "square {square}: {mean}");
        }
    }

    #[test]
    #[should_panic(expected = "coarse buffer length mismatch")]
    fn test_downsample_mean_checks_lengths() {
        let indexing = Indexing::new(2);
        let ids = VertexDownsamplingIds::new(&indexing, &indexing).unwrap();
        let mut out = vec![0.0; 3];
        ids.downsample_mean(&vec![0.0; indexing.vertex_count()], &mut out);
    }
}
