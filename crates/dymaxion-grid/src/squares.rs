//! The ten squares of the net and the ring of vertices bounding them.
//!
//! The net is an icosahedron cut into ten rhombi ("squares"). Ten ring
//! vertices zigzag around the globe at `z = ±1/2`, one every 36° of
//! longitude: ring vertex `i` lies north of the equator for even `i` and
//! south of it for odd `i`. Square `i` spans ring vertices `i` (west) and
//! `i + 2` (east), with ring vertex `i + 1` on its equatorial side and the
//! north pole (even `i`) or south pole (odd `i`) on its polar side.

use std::f64::consts::TAU;

use glam::DVec3;

/// Number of squares in the net.
pub const SQUARE_COUNT: i32 = 10;

/// Height of the ring vertices above (or below) the equator on the unit sphere.
pub(crate) const RING_Z: f64 = 0.5;

/// Longitude between consecutive ring vertices.
pub(crate) const LONGITUDE_STEP: f64 = TAU / SQUARE_COUNT as f64;

/// Unit vector at height `z` and longitude `longitude` (radians).
#[inline]
pub(crate) fn cartesian_from_zlon(z: f64, longitude: f64) -> DVec3 {
    let ring_radius = (1.0 - z * z).max(0.0).sqrt();
    DVec3::new(
        ring_radius * longitude.cos(),
        ring_radius * longitude.sin(),
        z,
    )
}

/// Closed-form constant data for the squares of the net.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Squares;

impl Squares {
    /// Canonical form of a square id, wrapped into `0..10`.
    #[must_use]
    #[inline]
    pub fn canonical_id(square_id: i32) -> i32 {
        square_id.rem_euclid(SQUARE_COUNT)
    }

    /// `+1.0` for squares touching the north pole (even ids), `-1.0` otherwise.
    #[must_use]
    #[inline]
    pub fn polarity(square_id: i32) -> f64 {
        if Self::is_northern(square_id) { 1.0 } else { -1.0 }
    }

    /// Whether the square touches the north pole.
    #[must_use]
    #[inline]
    pub fn is_northern(square_id: i32) -> bool {
        square_id.rem_euclid(2) == 0
    }

    /// The ring vertex at the western corner of the square.
    #[must_use]
    pub fn westmost(square_id: i32) -> DVec3 {
        let i = Self::canonical_id(square_id);
        let z = Self::polarity(i) * RING_Z;
        cartesian_from_zlon(z, f64::from(i) * LONGITUDE_STEP)
    }

    /// The ring vertex at the eastern corner of the square.
    #[must_use]
    #[inline]
    pub fn eastmost(square_id: i32) -> DVec3 {
        Self::westmost(square_id + 2)
    }

    /// The pole the square touches.
    #[must_use]
    #[inline]
    pub fn pole(square_id: i32) -> DVec3 {
        DVec3::Z * Self::polarity(square_id)
    }
}
