//! Bounding-box normalization into device coordinates
//!
//! Remaps the rasterizer's pixel cloud into a non-negative, top-left-origin
//! coordinate space and derives the canvas dimensions from the tight
//! bounding box.

use wiremap_core::point::PixelPoint;
use wiremap_core::{Error, Result, Stage};

/// Normalized pixels plus the extents of their bounding box.
///
/// `width` and `height` are the box extents (`max - min`); every pixel lies
/// in `[0, width] x [0, height]` inclusive, so the canvas to allocate is
/// `canvas_width() x canvas_height()`.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub pixels: Vec<PixelPoint>,
    pub width: i64,
    pub height: i64,
}

impl Normalized {
    /// Canvas width in pixels (inclusive extent + 1)
    pub fn canvas_width(&self) -> u32 {
        (self.width + 1) as u32
    }

    /// Canvas height in pixels (inclusive extent + 1)
    pub fn canvas_height(&self) -> u32 {
        (self.height + 1) as u32
    }
}

/// Normalization stage
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Stage for Normalizer {
    type Input = Vec<PixelPoint>;
    type Output = Normalized;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Normalizer"
    }

    fn description(&self) -> &'static str {
        "Remap pixel candidates into top-left-origin device coordinates"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        normalize(input)
    }
}

/// Normalize a pixel sequence into device coordinates.
///
/// Shifts x by `-min_x` and flips the vertical axis
/// (`y' = height - (y - min_y)`) so that visually higher source points land
/// at smaller device y, matching the top-left-origin, y-down convention of
/// image buffers. Depth passes through unchanged; the emission order is
/// preserved.
///
/// An empty input has no bounding box and fails with
/// [`Error::EmptyPixelSet`].
pub fn normalize(pixels: Vec<PixelPoint>) -> Result<Normalized> {
    if pixels.is_empty() {
        return Err(Error::EmptyPixelSet);
    }

    let mut min_x = i64::MAX;
    let mut max_x = i64::MIN;
    let mut min_y = i64::MAX;
    let mut max_y = i64::MIN;
    for p in &pixels {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;

    let pixels = pixels
        .into_iter()
        .map(|p| PixelPoint::new(p.x - min_x, height - (p.y - min_y), p.z))
        .collect();

    Ok(Normalized {
        pixels,
        width,
        height,
    })
}
