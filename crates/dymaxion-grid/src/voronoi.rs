//! Discrete cells of a given resolution on a sphere of a given radius.

use std::f64::consts::SQRT_2;

use glam::{DVec2, DVec3};

use crate::error::{self, GridError};
use crate::point::{IdPoint, ScalarPoint};
use crate::projection::Projection;
use crate::squares::SQUARE_COUNT;

/// Offset from a cell's integer coordinate to its center.
pub(crate) const HALF_CELL: DVec2 = DVec2::splat(0.5);

/// A [`Projection`] scaled to `side × side` cells per square and to a
/// physical radius.
#[derive(Clone, Debug)]
pub struct Voronoi {
    projection: Projection,
    radius: f64,
    vertices_per_square_side: i32,
}

impl Voronoi {
    /// # Panics
    ///
    /// Panics if `radius` is not finite and positive or if
    /// `vertices_per_square_side` is not positive.
    #[must_use]
    pub fn new(radius: f64, vertices_per_square_side: i32) -> Self {
        match Self::try_new(radius, vertices_per_square_side) {
            Ok(voronoi) => voronoi,
            Err(err) => panic!("invalid Voronoi parameters: {err}"),
        }
    }

    pub fn try_new(radius: f64, vertices_per_square_side: i32) -> Result<Self, GridError> {
        error::validate(radius, vertices_per_square_side)?;
        Ok(Self {
            projection: Projection::new(),
            radius,
            vertices_per_square_side,
        })
    }

    #[must_use]
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    #[inline]
    pub fn vertices_per_square_side(&self) -> i32 {
        self.vertices_per_square_side
    }

    /// Number of cells crossed walking from pole to pole.
    ///
    /// A meridian crosses two square diagonals' worth of cells at a shallow
    /// angle, which works out to `side · (1 + √2)`.
    #[must_use]
    pub fn vertices_per_meridian(&self) -> i32 {
        (f64::from(self.vertices_per_square_side) * (1.0 + SQRT_2)).round() as i32
    }

    #[must_use]
    #[inline]
    pub fn vertex_count(&self) -> usize {
        let side = self.vertices_per_square_side as usize;
        SQUARE_COUNT as usize * side * side
    }

    #[must_use]
    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Continuous cell coordinate of a sphere position. Cell `(i, j)` spans
    /// `[i - 0.5, i + 0.5] × [j - 0.5, j + 0.5]`.
    #[must_use]
    pub fn grid_position(&self, sphere_position: DVec3) -> ScalarPoint {
        let side = f64::from(self.vertices_per_square_side);
        self.projection.grid_id(sphere_position.normalize()) * side - HALF_CELL
    }

    /// The cell containing a sphere position.
    #[must_use]
    pub fn grid_id(&self, sphere_position: DVec3) -> IdPoint {
        self.discretize(self.grid_position(sphere_position))
    }

    /// Round a continuous cell coordinate and clamp it into the square.
    #[must_use]
    #[inline]
    pub fn discretize(&self, grid_position: ScalarPoint) -> IdPoint {
        grid_position
            .round()
            .clamp(0, self.vertices_per_square_side - 1)
    }

    /// Center of a cell on the unit sphere.
    #[must_use]
    pub fn unit_sphere_position(&self, grid_id: IdPoint) -> DVec3 {
        let side = f64::from(self.vertices_per_square_side);
        self.projection
            .sphere_position((ScalarPoint::from(grid_id) + HALF_CELL) / side)
    }

    /// Outward unit normal at a cell center.
    #[must_use]
    #[inline]
    pub fn sphere_normal(&self, grid_id: IdPoint) -> DVec3 {
        self.unit_sphere_position(grid_id)
    }

    /// Center of a cell on the sphere of radius [`Self::radius`].
    #[must_use]
    #[inline]
    pub fn sphere_position(&self, grid_id: IdPoint) -> DVec3 {
        self.unit_sphere_position(grid_id) * self.radius
    }
}
