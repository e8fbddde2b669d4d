//! The twenty triangular facets of the net.
//!
//! Each square splits along its diagonal into a polar triangle (the half that
//! touches the square's pole) and an equatorial triangle. Triangle ids are
//! `square_id + 10 * is_polar`.

use glam::{DMat3, DVec2, DVec3};

use crate::squares::{LONGITUDE_STEP, RING_Z, SQUARE_COUNT, cartesian_from_zlon};

/// Number of triangular facets.
pub const TRIANGLE_COUNT: usize = 20;

/// Stateless helpers for the triangles of the net.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triangles;

impl Triangles {
    /// Index of the polar or equatorial triangle of a square, in `0..20`.
    #[must_use]
    #[inline]
    pub fn triangle_id(square_id: i32, is_polar: bool) -> usize {
        square_id.rem_euclid(SQUARE_COUNT) as usize + if is_polar { 10 } else { 0 }
    }

    /// The corner a triangle's basis is anchored at.
    ///
    /// For a polar triangle this is the pole on the square's side; for an
    /// equatorial triangle it is the ring vertex across the equator, at
    /// longitude `origin_id * 36°`.
    #[must_use]
    pub fn origin(origin_id: i32, square_polarity: f64, is_polar: bool) -> DVec3 {
        let z = square_polarity * if is_polar { 1.0 } else { -RING_Z };
        cartesian_from_zlon(z, f64::from(origin_id) * LONGITUDE_STEP)
    }

    /// Whether the triangle's frame is mirrored relative to its square's frame.
    #[must_use]
    #[inline]
    pub fn is_inverted_square_id(square_id: i32, is_polar: bool) -> bool {
        is_polar == (square_id.rem_euclid(2) == 1)
    }

    /// Which side of the square's diagonal `x == y` a position falls on.
    #[must_use]
    #[inline]
    pub fn is_inverted_grid_position(position: DVec2) -> bool {
        position.x > position.y
    }

    /// Whether the triangle on the given side of the diagonal is the polar one.
    #[must_use]
    #[inline]
    pub fn is_polar_square_id(square_id: i32, is_inverted: bool) -> bool {
        is_inverted == (square_id.rem_euclid(2) == 1)
    }

    /// Whether a sphere position lies on the polar side of the great circle
    /// through a square's west and east ring vertices.
    #[must_use]
    #[inline]
    pub fn is_polar_sphere_position(
        sphere_position: DVec3,
        square_polarity: f64,
        west: DVec3,
        east: DVec3,
    ) -> bool {
        sphere_position.dot(square_polarity * west.cross(east)) >= 0.0
    }

    /// Whether a sphere position lies north of the great circle through two
    /// consecutive ring vertices (west to east).
    #[must_use]
    #[inline]
    pub fn is_northern_sphere_position(sphere_position: DVec3, west: DVec3, east: DVec3) -> bool {
        sphere_position.dot(west.cross(east)) >= 0.0
    }

    /// Local basis of a triangle with columns `(edge_a, edge_b, origin)`.
    ///
    /// A local coordinate `(a, b, 1)` maps to `origin + a * edge_a + b * edge_b`
    /// on the triangle's plane. Inverted triangles swap the two edges.
    #[must_use]
    pub fn basis(is_inverted: bool, west: DVec3, east: DVec3, origin: DVec3) -> DMat3 {
        let (edge_a, edge_b) = if is_inverted {
            (east - origin, west - origin)
        } else {
            (west - origin, east - origin)
        };
        DMat3::from_cols(edge_a, edge_b, origin)
    }

    /// Central projection of a direction onto the plane `normal · p = normal_dot_origin`.
    #[must_use]
    #[inline]
    pub fn plane_project(direction: DVec3, normal: DVec3, normal_dot_origin: f64) -> DVec3 {
        direction * (normal_dot_origin / normal.dot(direction))
    }
}
