//! Mesh rasterization with depth-interpolated line drawing
//!
//! Scales mesh vertices into pixel space, then connects every cell to its
//! row- and column-predecessor with a digital line that linearly
//! interpolates the depth channel. The output is a flat sequence of pixel
//! candidates whose order is load-bearing: later writes overwrite earlier
//! ones at the same coordinate downstream.

use crate::maybe_rayon::*;
use crate::projector::Mesh;
use ndarray::Array2;
use wiremap_core::point::{round_half_away, PixelPoint};
use wiremap_core::{Error, Result, Stage};

/// Parameters for rasterization
#[derive(Debug, Clone)]
pub struct RasterizeParams {
    /// Scale factor from mesh coordinates to pixels. Must be finite and > 0.
    pub resolution: f64,
}

impl Default for RasterizeParams {
    fn default() -> Self {
        Self { resolution: 1.0 }
    }
}

/// Rasterization stage
#[derive(Debug, Clone, Default)]
pub struct Rasterizer;

impl Stage for Rasterizer {
    type Input = Mesh;
    type Output = Vec<PixelPoint>;
    type Params = RasterizeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Rasterizer"
    }

    fn description(&self) -> &'static str {
        "Rasterize a projected mesh into depth-carrying pixel candidates"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        rasterize(&input, params)
    }
}

/// Rasterize a projected mesh into an ordered pixel candidate sequence.
///
/// Each vertex is scaled by `resolution` and rounded half away from zero.
/// Cells are then traversed row-major; each cell emits the line to its
/// row-predecessor (same column, previous row) first, then the line to its
/// column-predecessor. Duplicate points across edges are retained.
///
/// A degenerate 1x1 mesh has no edges; it still emits its single point so a
/// valid grid never produces an empty sequence.
///
/// Rows are processed in parallel when the `parallel` feature is enabled;
/// the collected output preserves the sequential emission order.
pub fn rasterize(mesh: &Mesh, params: RasterizeParams) -> Result<Vec<PixelPoint>> {
    if !params.resolution.is_finite() || params.resolution <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "resolution",
            value: params.resolution.to_string(),
            reason: "must be finite and > 0".to_string(),
        });
    }

    let (rows, cols) = mesh.dim();
    let scaled: Array2<PixelPoint> = mesh.map(|p| {
        PixelPoint::new(
            round_half_away(p.x * params.resolution),
            round_half_away(p.y * params.resolution),
            p.z,
        )
    });

    if rows == 1 && cols == 1 {
        let p = scaled[(0, 0)];
        return Ok(line(p, p));
    }

    let pixels: Vec<PixelPoint> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut out = Vec::new();
            for col in 0..cols {
                let here = scaled[(row, col)];
                if row > 0 {
                    out.extend(line(scaled[(row - 1, col)], here));
                }
                if col > 0 {
                    out.extend(line(scaled[(row, col - 1)], here));
                }
            }
            out
        })
        .collect();

    Ok(pixels)
}

/// Draw a digital line between two pixel points, interpolating depth.
///
/// A generalization of the classic DDA line: the major axis is stepped one
/// pixel at a time, the minor coordinate is rounded from the slope, and the
/// depth channel is interpolated linearly alongside. Endpoints are first
/// oriented by the documented `(x, y, z)` / `(y, x, z)` orderings so the
/// result is independent of argument order as a point set.
///
/// Always includes both endpoints: `max(|dx|, |dy|) + 1` points, or a single
/// point carrying `max(z1, z2)` when the coordinates coincide.
pub fn line(p1: PixelPoint, p2: PixelPoint) -> Vec<PixelPoint> {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();

    if delta_x == 0 && delta_y == 0 {
        return vec![PixelPoint::new(p1.x, p1.y, p1.z.max(p2.z))];
    }

    if delta_x >= delta_y {
        // shallow: x is the major axis
        let (a, b) = if p1.cmp_xyz(&p2).is_gt() { (p2, p1) } else { (p1, p2) };
        let run = (b.x - a.x) as f64;
        let slope = (b.y - a.y) as f64 / run;
        let delta_z = (b.z - a.z) / run;

        (0..=(b.x - a.x))
            .map(|step| {
                let s = step as f64;
                PixelPoint::new(
                    a.x + step,
                    round_half_away(a.y as f64 + s * slope),
                    a.z + s * delta_z,
                )
            })
            .collect()
    } else {
        // steep: y is the major axis
        let (a, b) = if p1.cmp_yxz(&p2).is_gt() { (p2, p1) } else { (p1, p2) };
        let run = (b.y - a.y) as f64;
        let slope = (b.x - a.x) as f64 / run;
        let delta_z = (b.z - a.z) / run;

        (0..=(b.y - a.y))
            .map(|step| {
                let s = step as f64;
                PixelPoint::new(
                    round_half_away(a.x as f64 + s * slope),
                    a.y + step,
                    a.z + s * delta_z,
                )
            })
            .collect()
    }
}
