//! Bijection between the unit sphere and continuous square-local positions.
//!
//! A sphere position is located in two sign tests: a longitude sector plus
//! a test against the great circle through the sector's ring vertices
//! picks the square, and a test against the great circle through the
//! square's west and east vertices picks the polar or equatorial triangle.
//! The position is then centrally projected onto that triangle's plane and
//! expressed in the triangle's basis. The inverse rebuilds the planar point
//! from the basis and renormalizes it onto the sphere.

use std::f64::consts::TAU;

use glam::{DMat3, DVec2, DVec3};

use crate::point::ScalarPoint;
use crate::seam::SeamCrossing;
use crate::squares::{LONGITUDE_STEP, SQUARE_COUNT, Squares};
use crate::triangles::{TRIANGLE_COUNT, Triangles};

/// Precomputed data for one triangular facet.
#[derive(Clone, Copy, Debug)]
struct Facet {
    basis: DMat3,
    inverse_basis: DMat3,
    normal: DVec3,
    normal_dot_origin: f64,
}

impl Facet {
    fn new(triangle_id: usize) -> Self {
        let square_id = (triangle_id % SQUARE_COUNT as usize) as i32;
        let is_polar = triangle_id >= SQUARE_COUNT as usize;
        let west = Squares::westmost(square_id);
        let east = Squares::eastmost(square_id);
        let origin = Triangles::origin(square_id + 1, Squares::polarity(square_id), is_polar);
        let basis = Triangles::basis(
            Triangles::is_inverted_square_id(square_id, is_polar),
            west,
            east,
            origin,
        );
        let normal = basis.x_axis.cross(basis.y_axis).normalize();
        Self {
            basis,
            inverse_basis: basis.inverse(),
            normal,
            normal_dot_origin: normal.dot(origin),
        }
    }
}

/// The core sphere/net projection with its per-facet data cached.
#[derive(Clone, Debug)]
pub struct Projection {
    facets: [Facet; TRIANGLE_COUNT],
    /// Normal of the great circle through ring vertices `k` and `k + 1`.
    sector_normals: [DVec3; SQUARE_COUNT as usize],
    /// Normal of the great circle through a square's west and east vertices,
    /// oriented towards the square's pole.
    polar_normals: [DVec3; SQUARE_COUNT as usize],
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            facets: std::array::from_fn(Facet::new),
            sector_normals: std::array::from_fn(|k| {
                let k = k as i32;
                Squares::westmost(k).cross(Squares::westmost(k + 1))
            }),
            polar_normals: std::array::from_fn(|i| {
                let i = i as i32;
                Squares::polarity(i) * Squares::westmost(i).cross(Squares::eastmost(i))
            }),
        }
    }

    /// Canonicalize a position that may lie outside `[0,1]²`.
    ///
    /// In-range positions keep their coordinates and get a canonical square
    /// id. A position past one edge is carried into the adjacent square. A
    /// position past one polar and one equatorial edge wraps both axes into
    /// the square two over. A position past two equatorial edges is carried
    /// across the x edge first, then across the edge it still overflows. A
    /// position past both polar edges is returned unchanged.
    #[must_use]
    pub fn standardize(&self, point: ScalarPoint) -> ScalarPoint {
        let crossing = SeamCrossing::classify(point);
        if crossing.is_pole() {
            return point;
        }
        if crossing.is_local() {
            return ScalarPoint::new(Squares::canonical_id(point.square_id), point.position);
        }
        let crossed = crossing.cross(point);
        if crossing.is_corner() {
            let remaining = SeamCrossing::classify(crossed);
            if !remaining.is_local() && !remaining.is_pole() {
                return remaining.cross(crossed);
            }
        }
        crossed
    }

    /// The square and position a unit-sphere position falls on.
    ///
    /// The result is clamped into `[0,1]²` and canonical. `sphere_position`
    /// need not be exactly unit length but must be nonzero.
    #[must_use]
    pub fn grid_id(&self, sphere_position: DVec3) -> ScalarPoint {
        let v = sphere_position;
        let longitude = v.y.atan2(v.x).rem_euclid(TAU);
        let sector = ((longitude / LONGITUDE_STEP) as i32).clamp(0, SQUARE_COUNT - 1);

        // The northern half of a sector belongs to the even square among the
        // two candidates, the southern half to the odd one.
        let is_northern = v.dot(self.sector_normals[sector as usize]) >= 0.0;
        let square_id = if is_northern == Squares::is_northern(sector) {
            sector
        } else {
            Squares::canonical_id(sector - 1)
        };

        let is_polar = v.dot(self.polar_normals[square_id as usize]) >= 0.0;
        let facet = &self.facets[Triangles::triangle_id(square_id, is_polar)];
        let local = facet.inverse_basis
            * Triangles::plane_project(v, facet.normal, facet.normal_dot_origin);

        let position = if Triangles::is_inverted_square_id(square_id, is_polar) {
            DVec2::new(1.0 - local.y, local.x)
        } else {
            DVec2::new(local.y, 1.0 - local.x)
        };
        self.standardize(ScalarPoint::new(
            square_id,
            position.clamp(DVec2::ZERO, DVec2::ONE),
        ))
    }

    /// The unit-sphere position of a square-local position.
    ///
    /// Positions slightly outside `[0,1]²` are extrapolated on the plane of
    /// the triangle on their side of the diagonal.
    #[must_use]
    pub fn sphere_position(&self, point: ScalarPoint) -> DVec3 {
        let square_id = Squares::canonical_id(point.square_id);
        let p = point.position;
        let is_inverted = Triangles::is_inverted_grid_position(p);
        let is_polar = Triangles::is_polar_square_id(square_id, is_inverted);
        let local = if is_inverted {
            DVec3::new(p.y, 1.0 - p.x, 1.0)
        } else {
            DVec3::new(1.0 - p.y, p.x, 1.0)
        };
        (self.facets[Triangles::triangle_id(square_id, is_polar)].basis * local).normalize()
    }
}
