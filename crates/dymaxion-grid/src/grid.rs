//! The vertex/arrow topology of a grid and its dual-cell geometry.
//!
//! Vertices are cell centers addressed by memory id. Every vertex has four
//! outgoing arrows, one per [`ArrowDirection`], identified by
//! `arrow_id = source_id * 4 + offset_id`. Arrows that leave a square are
//! valid and resolve through [`Indexing::standardize`].
//!
//! The dual cell of a vertex is the quadrilateral whose corners sit midway
//! (on the sphere) between consecutive neighbors. Dual edge lengths and dual
//! cell areas are measured on that quadrilateral.

use std::f64::consts::PI;

use glam::{DMat3, DVec3, IVec2};

use crate::arrow::{ARROWS_PER_VERTEX, ArrowDirection};
use crate::error::GridError;
use crate::indexing::Indexing;
use crate::point::IdPoint;
use crate::voronoi::Voronoi;

/// Per-vertex geometry shared by [`Grid`] and [`GridCache`](crate::GridCache).
///
/// Lets per-vertex computations be written once and run against either the
/// procedural grid or its cached arrays. The frame methods derive from
/// [`vertex_normal`](Self::vertex_normal), so an implementor that caches
/// normals gets cached frames too.
pub trait VertexMetrics {
    fn vertex_count(&self) -> usize;

    /// The canonical cell of a vertex.
    fn vertex_grid_id(&self, vertex_id: usize) -> IdPoint;

    /// Position of a vertex on the sphere of the grid's radius.
    fn vertex_position(&self, vertex_id: usize) -> DVec3;

    /// Outward unit normal at a vertex.
    fn vertex_normal(&self, vertex_id: usize) -> DVec3;

    /// Area of the vertex's dual cell.
    fn vertex_dual_area(&self, vertex_id: usize) -> f64;

    fn square_id(&self, vertex_id: usize) -> i32 {
        self.vertex_grid_id(vertex_id).square_id
    }

    fn vertex_east(&self, vertex_id: usize, north_pole: DVec3) -> DVec3 {
        east_of(self.vertex_normal(vertex_id), north_pole)
    }

    fn vertex_north(&self, vertex_id: usize, north_pole: DVec3) -> DVec3 {
        let up = self.vertex_normal(vertex_id);
        north_of(east_of(up, north_pole), up)
    }

    /// Rows are the east, north and up unit vectors of the vertex.
    fn vertex_frame(&self, vertex_id: usize, north_pole: DVec3) -> DMat3 {
        frame_of(self.vertex_normal(vertex_id), north_pole)
    }
}

fn east_of(up: DVec3, north_pole: DVec3) -> DVec3 {
    north_pole.cross(up).normalize_or_zero()
}

fn north_of(east: DVec3, up: DVec3) -> DVec3 {
    up.cross(east).normalize_or_zero()
}

fn frame_of(up: DVec3, north_pole: DVec3) -> DMat3 {
    let east = east_of(up, north_pole);
    DMat3::from_cols(east, north_of(east, up), up).transpose()
}

/// A discrete global grid of `10 · side²` vertices on a sphere.
#[derive(Clone, Debug)]
pub struct Grid {
    voronoi: Voronoi,
    indexing: Indexing,
}

impl Grid {
    /// Build a grid of `vertices_per_square_side²` cells per square on a
    /// sphere of the given radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not finite and positive or if
    /// `vertices_per_square_side` is not positive. Use [`Self::try_new`] for
    /// caller-supplied parameters.
    #[must_use]
    pub fn new(radius: f64, vertices_per_square_side: i32) -> Self {
        match Self::try_new(radius, vertices_per_square_side) {
            Ok(grid) => grid,
            Err(err) => panic!("invalid grid parameters: {err}"),
        }
    }

    pub fn try_new(radius: f64, vertices_per_square_side: i32) -> Result<Self, GridError> {
        Ok(Self {
            voronoi: Voronoi::try_new(radius, vertices_per_square_side)?,
            indexing: Indexing::try_new(vertices_per_square_side)?,
        })
    }

    #[must_use]
    #[inline]
    pub fn voronoi(&self) -> &Voronoi {
        &self.voronoi
    }

    #[must_use]
    #[inline]
    pub fn indexing(&self) -> &Indexing {
        &self.indexing
    }

    #[must_use]
    #[inline]
    pub fn radius(&self) -> f64 {
        self.voronoi.radius()
    }

    #[must_use]
    #[inline]
    pub fn vertices_per_square_side(&self) -> i32 {
        self.voronoi.vertices_per_square_side()
    }

    #[must_use]
    #[inline]
    pub fn vertices_per_meridian(&self) -> i32 {
        self.voronoi.vertices_per_meridian()
    }

    #[must_use]
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.indexing.vertex_count()
    }

    #[must_use]
    #[inline]
    pub fn arrows_per_vertex(&self) -> usize {
        ARROWS_PER_VERTEX
    }

    #[must_use]
    #[inline]
    pub fn arrow_count(&self) -> usize {
        self.vertex_count() * ARROWS_PER_VERTEX
    }

    /// Surface area of the sphere.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        4.0 * PI * self.radius().powi(2)
    }

    /// Volume enclosed by the sphere.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius().powi(3)
    }

    /// Length of a great circle.
    #[must_use]
    pub fn total_circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    #[must_use]
    #[inline]
    pub fn grid_id(&self, vertex_id: usize) -> IdPoint {
        self.indexing.grid_id(vertex_id)
    }

    #[must_use]
    #[inline]
    pub fn square_id(&self, vertex_id: usize) -> i32 {
        self.indexing.grid_id(vertex_id).square_id
    }

    #[must_use]
    #[inline]
    pub fn arrow_id(&self, source_id: usize, offset_id: usize) -> usize {
        source_id * ARROWS_PER_VERTEX + offset_id % ARROWS_PER_VERTEX
    }

    #[must_use]
    #[inline]
    pub fn arrow_source_id(&self, arrow_id: usize) -> usize {
        arrow_id / ARROWS_PER_VERTEX
    }

    #[must_use]
    #[inline]
    pub fn arrow_offset_id_of_arrow(&self, arrow_id: usize) -> usize {
        arrow_id % ARROWS_PER_VERTEX
    }

    #[must_use]
    #[inline]
    pub fn arrow_target_id_of_arrow(&self, arrow_id: usize) -> usize {
        self.arrow_target_id(
            self.arrow_source_id(arrow_id),
            self.arrow_offset_id_of_arrow(arrow_id),
        )
    }

    /// Unit grid step for an offset id (taken modulo 4).
    #[must_use]
    #[inline]
    pub fn arrow_offset_grid_position(&self, offset_id: usize) -> IVec2 {
        ArrowDirection::from_offset_id(offset_id).grid_offset()
    }

    #[must_use]
    #[inline]
    pub fn arrow_offset_id(&self, offset: IVec2) -> usize {
        ArrowDirection::from_grid_offset(offset).offset_id()
    }

    /// The vertex an arrow points to. Seam-crossing arrows are standardized.
    #[must_use]
    pub fn arrow_target_id(&self, source_id: usize, offset_id: usize) -> usize {
        let source = self.indexing.grid_id(source_id);
        self.indexing
            .memory_id(source + self.arrow_offset_grid_position(offset_id))
    }

    /// Chord from a vertex to its neighbor.
    #[must_use]
    pub fn arrow_offset(&self, source_id: usize, offset_id: usize) -> DVec3 {
        self.neighbor_position(source_id, offset_id) - self.vertex_position(source_id)
    }

    #[must_use]
    pub fn arrow_length(&self, source_id: usize, offset_id: usize) -> f64 {
        self.arrow_offset(source_id, offset_id).length()
    }

    #[must_use]
    pub fn arrow_normal(&self, source_id: usize, offset_id: usize) -> DVec3 {
        self.arrow_offset(source_id, offset_id).normalize()
    }

    /// Length of the dual edge crossed by an arrow.
    ///
    /// The dual edge joins the dual corners on either side of the arrow: the
    /// spherical midpoints between the arrow's target and the source's
    /// neighbors one turn clockwise and counterclockwise.
    #[must_use]
    pub fn arrow_dual_length(&self, source_id: usize, offset_id: usize) -> f64 {
        let a = self.neighbor_position(source_id, offset_id + 1);
        let b = self.neighbor_position(source_id, offset_id);
        let c = self.neighbor_position(source_id, offset_id + ARROWS_PER_VERTEX - 1);
        let radius = self.radius();
        ((a + b).normalize() * radius - (b + c).normalize() * radius).length()
    }

    /// Area of a vertex's dual quadrilateral, as a fan of four triangles
    /// around the vertex.
    #[must_use]
    pub fn vertex_dual_area(&self, vertex_id: usize) -> f64 {
        let center = self.vertex_position(vertex_id);
        let radius = self.radius();
        let neighbors: [DVec3; ARROWS_PER_VERTEX] =
            std::array::from_fn(|k| self.neighbor_position(vertex_id, k));
        let corners: [DVec3; ARROWS_PER_VERTEX] = std::array::from_fn(|k| {
            (neighbors[k] + neighbors[(k + 1) % ARROWS_PER_VERTEX]).normalize() * radius - center
        });
        0.5 * (0..ARROWS_PER_VERTEX)
            .map(|k| corners[k].cross(corners[(k + 1) % ARROWS_PER_VERTEX]).length())
            .sum::<f64>()
    }

    /// The nearest vertex whose four neighbors all lie on its own square.
    #[must_use]
    pub fn vertex_representative(&self, vertex_id: usize) -> usize {
        let grid_id = self.indexing.grid_id(vertex_id);
        let inner = grid_id.clamp(1, self.vertices_per_square_side() - 2);
        self.indexing.memory_id(inner)
    }

    #[must_use]
    pub fn vertex_position(&self, vertex_id: usize) -> DVec3 {
        self.voronoi.sphere_position(self.indexing.grid_id(vertex_id))
    }

    #[must_use]
    pub fn vertex_normal(&self, vertex_id: usize) -> DVec3 {
        self.voronoi.sphere_normal(self.indexing.grid_id(vertex_id))
    }

    /// Unit vector pointing east, perpendicular to `vertex_normal` and to
    /// the rotation axis `north_pole`. Zero where the two are parallel.
    #[must_use]
    pub fn vertex_east(&self, vertex_normal: DVec3, north_pole: DVec3) -> DVec3 {
        east_of(vertex_normal, north_pole)
    }

    /// Unit vector pointing north, completing a right-handed
    /// (east, north, up) frame.
    #[must_use]
    pub fn vertex_north(&self, vertex_east: DVec3, vertex_normal: DVec3) -> DVec3 {
        north_of(vertex_east, vertex_normal)
    }

    /// Rotation from world space into a vertex's local (east, north, up) frame.
    ///
    /// The rows of the returned matrix are the east, north, and up unit vectors.
    #[must_use]
    pub fn vertex_frame(&self, vertex_id: usize, north_pole: DVec3) -> DMat3 {
        frame_of(self.vertex_normal(vertex_id), north_pole)
    }

    /// The vertex whose cell contains a position. The position need not lie
    /// on the sphere but must be nonzero.
    #[must_use]
    pub fn nearest_vertex_id(&self, sphere_position: DVec3) -> usize {
        self.indexing
            .memory_id_when_standard(self.voronoi.grid_id(sphere_position))
    }

    /// Position of the (standardized) neighbor along an arrow.
    fn neighbor_position(&self, source_id: usize, offset_id: usize) -> DVec3 {
        self.vertex_position(self.arrow_target_id(source_id, offset_id))
    }
}

impl VertexMetrics for Grid {
    fn vertex_count(&self) -> usize {
        Grid::vertex_count(self)
    }

    fn vertex_grid_id(&self, vertex_id: usize) -> IdPoint {
        self.indexing.grid_id(vertex_id)
    }

    fn vertex_position(&self, vertex_id: usize) -> DVec3 {
        Grid::vertex_position(self, vertex_id)
    }

    fn vertex_normal(&self, vertex_id: usize) -> DVec3 {
        Grid::vertex_normal(self, vertex_id)
    }

    fn vertex_dual_area(&self, vertex_id: usize) -> f64 {
        Grid::vertex_dual_area(self, vertex_id)
    }

    fn square_id(&self, vertex_id: usize) -> i32 {
        Grid::square_id(self, vertex_id)
    }
}
