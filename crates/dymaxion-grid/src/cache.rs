//! Precomputed per-vertex arrays over a [`Grid`].

use std::ops::Deref;

use glam::DVec3;

use crate::grid::{Grid, VertexMetrics};
use crate::point::IdPoint;

/// A [`Grid`] with its most expensive per-vertex queries precomputed.
///
/// Dual areas, positions and normals are computed once in [`GridCache::new`]
/// and served from dense arrays indexed by memory id. Every other query
/// derefs to the wrapped grid.
#[derive(Clone, Debug)]
pub struct GridCache {
    grid: Grid,
    vertex_dual_areas: Vec<f64>,
    vertex_positions: Vec<DVec3>,
    vertex_normals: Vec<DVec3>,
}

impl GridCache {
    /// Precompute the per-vertex arrays of `grid`.
    ///
    /// With the `parallel` feature the arrays are filled on the rayon pool.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let vertex_count = grid.vertex_count();
        let vertex_dual_areas = fill(vertex_count, |v| grid.vertex_dual_area(v));
        let vertex_positions = fill(vertex_count, |v| grid.vertex_position(v));
        let vertex_normals = fill(vertex_count, |v| grid.vertex_normal(v));
        log::debug!(
            "Cached geometry for {vertex_count} vertices (radius {}, {} per square side)",
            grid.radius(),
            grid.vertices_per_square_side()
        );
        Self {
            grid,
            vertex_dual_areas,
            vertex_positions,
            vertex_normals,
        }
    }

    #[must_use]
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[must_use]
    #[inline]
    pub fn vertex_dual_areas(&self) -> &[f64] {
        &self.vertex_dual_areas
    }

    #[must_use]
    #[inline]
    pub fn vertex_positions(&self) -> &[DVec3] {
        &self.vertex_positions
    }

    #[must_use]
    #[inline]
    pub fn vertex_normals(&self) -> &[DVec3] {
        &self.vertex_normals
    }

    #[must_use]
    #[inline]
    pub fn vertex_dual_area(&self, vertex_id: usize) -> f64 {
        self.vertex_dual_areas[vertex_id]
    }

    #[must_use]
    #[inline]
    pub fn vertex_position(&self, vertex_id: usize) -> DVec3 {
        self.vertex_positions[vertex_id]
    }

    #[must_use]
    #[inline]
    pub fn vertex_normal(&self, vertex_id: usize) -> DVec3 {
        self.vertex_normals[vertex_id]
    }
}

#[cfg(feature = "parallel")]
fn fill<T, F>(vertex_count: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    use rayon::prelude::*;
    (0..vertex_count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn fill<T, F>(vertex_count: usize, f: F) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..vertex_count).map(f).collect()
}

impl Deref for GridCache {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.grid
    }
}

impl VertexMetrics for GridCache {
    fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    fn vertex_grid_id(&self, vertex_id: usize) -> IdPoint {
        self.grid.grid_id(vertex_id)
    }

    fn vertex_position(&self, vertex_id: usize) -> DVec3 {
        GridCache::vertex_position(self, vertex_id)
    }

    fn vertex_normal(&self, vertex_id: usize) -> DVec3 {
        GridCache::vertex_normal(self, vertex_id)
    }

    fn vertex_dual_area(&self, vertex_id: usize) -> f64 {
        GridCache::vertex_dual_area(self, vertex_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_area<M: VertexMetrics>(metrics: &M) -> f64 {
        (0..metrics.vertex_count())
            .map(|v| metrics.vertex_dual_area(v))
            .sum()
    }

    #[test]
    fn test_cache_matches_grid() {
        let grid = Grid::new(2.0, 5);
        let cache = GridCache::new(grid.clone());
        assert_eq!(cache.vertex_dual_areas().len(), grid.vertex_count());
        for vertex_id in 0..grid.vertex_count() {
            assert_eq!(cache.vertex_dual_area(vertex_id), grid.vertex_dual_area(vertex_id));
            assert_eq!(cache.vertex_position(vertex_id), grid.vertex_position(vertex_id));
            assert_eq!(cache.vertex_normal(vertex_id), grid.vertex_normal(vertex_id));
        }
    }

    #[test]
    fn test_forwards_other_queries() {
        let grid = Grid::new(2.0, 5);
        let cache = GridCache::new(grid.clone());
        assert_eq!(cache.arrow_count(), grid.arrow_count());
        assert_eq!(cache.arrow_target_id(17, 2), grid.arrow_target_id(17, 2));
        assert_eq!(cache.radius(), 2.0);
        assert_eq!(cache.into_grid().vertex_count(), 250);
    }

    #[test]
    fn test_metrics_agree_through_trait() {
        let grid = Grid::new(1.0, 4);
        let cache = GridCache::new(grid.clone());
        let procedural = total_area(&grid);
        let cached = total_area(&cache);
        assert!((procedural - cached).abs() < 1e-12);
        assert_eq!(VertexMetrics::vertex_count(&cache), 160);
    }
}
