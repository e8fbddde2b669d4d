//! Indexable per-vertex series.
//!
//! Each constructor wraps one [`VertexMetrics`] query as a value that can be
//! sized, indexed and iterated like an array without allocating one. Built
//! over a [`Grid`](crate::Grid) every element is computed on demand; built
//! over a [`GridCache`](crate::GridCache) the cached arrays answer instead.
//! Code that consumes a series works unchanged with either.

use glam::{DMat3, DVec3};

use crate::grid::VertexMetrics;
use crate::point::IdPoint;

/// `len` values produced on demand by a function of the vertex id.
#[derive(Clone, Copy)]
pub struct VertexSeries<F> {
    len: usize,
    value: F,
}

impl<T, F: Fn(usize) -> T> VertexSeries<F> {
    #[must_use]
    pub fn new(len: usize, value: F) -> Self {
        Self { len, value }
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Panics
    ///
    /// Panics if `vertex_id >= self.len()`.
    #[must_use]
    #[inline]
    pub fn get(&self, vertex_id: usize) -> T {
        assert!(
            vertex_id < self.len,
            "vertex id {vertex_id} out of range for {} vertices",
            self.len
        );
        (self.value)(vertex_id)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        (0..self.len).map(&self.value)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

pub fn square_ids<M: VertexMetrics>(metrics: &M) -> VertexSeries<impl Fn(usize) -> i32 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| metrics.square_id(v))
}

pub fn vertex_grid_ids<M: VertexMetrics>(
    metrics: &M,
) -> VertexSeries<impl Fn(usize) -> IdPoint + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| metrics.vertex_grid_id(v))
}

pub fn vertex_positions<M: VertexMetrics>(
    metrics: &M,
) -> VertexSeries<impl Fn(usize) -> DVec3 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| metrics.vertex_position(v))
}

pub fn vertex_normals<M: VertexMetrics>(
    metrics: &M,
) -> VertexSeries<impl Fn(usize) -> DVec3 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| metrics.vertex_normal(v))
}

pub fn vertex_dual_areas<M: VertexMetrics>(
    metrics: &M,
) -> VertexSeries<impl Fn(usize) -> f64 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| metrics.vertex_dual_area(v))
}

pub fn vertex_east<M: VertexMetrics>(
    metrics: &M,
    north_pole: DVec3,
) -> VertexSeries<impl Fn(usize) -> DVec3 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| {
        metrics.vertex_east(v, north_pole)
    })
}

pub fn vertex_north<M: VertexMetrics>(
    metrics: &M,
    north_pole: DVec3,
) -> VertexSeries<impl Fn(usize) -> DVec3 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| {
        metrics.vertex_north(v, north_pole)
    })
}

pub fn vertex_frame<M: VertexMetrics>(
    metrics: &M,
    north_pole: DVec3,
) -> VertexSeries<impl Fn(usize) -> DMat3 + '_> {
    VertexSeries::new(metrics.vertex_count(), move |v| {
        metrics.vertex_frame(v, north_pole)
    })
}
