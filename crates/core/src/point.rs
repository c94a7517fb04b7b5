//! Point value types carried through the projection pipeline

use std::cmp::Ordering;

/// A vertex in the skewed isometric space.
///
/// Produced by the projector; coordinates are continuous until the
/// rasterizer scales and rounds them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A candidate pixel write: integral device coordinates with a fractional
/// depth channel. The depth is resolved to a color only at the very end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
    pub z: f64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lexicographic ordering by (x, y, z).
    ///
    /// Used to orient shallow line endpoints so iteration proceeds in
    /// increasing x. Depth ties are broken with `f64::total_cmp`.
    pub fn cmp_xyz(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then(self.y.cmp(&other.y))
            .then(self.z.total_cmp(&other.z))
    }

    /// Lexicographic ordering by (y, x, z).
    ///
    /// Used to orient steep line endpoints so iteration proceeds in
    /// increasing y.
    pub fn cmp_yxz(&self, other: &Self) -> Ordering {
        self.y
            .cmp(&other.y)
            .then(self.x.cmp(&other.x))
            .then(self.z.total_cmp(&other.z))
    }
}

/// Round half away from zero.
///
/// The placement of `.5` coordinates is a visible part of the output
/// contract, so the rounding mode is fixed here rather than left to the
/// environment. `f64::round` already implements half-away-from-zero; the
/// wrapper names the contract.
pub fn round_half_away(v: f64) -> i64 {
    v.round() as i64
}
