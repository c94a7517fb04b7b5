//! Elevation palette: depth to RGB mapping.

use serde::Deserialize;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, the canvas background.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// Palette parameters for the depth-to-color mapping.
///
/// One channel is active per depth band: blue below sea level, green for
/// land, red at and above the mountain threshold. Channel intensity is
/// `min_color + |z| * step`, clamped to 255.
///
/// Deserializable so a palette can be loaded from a TOML file; omitted
/// fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElevationPalette {
    /// Channel intensity added per unit of depth
    pub step: f64,
    /// Depth at which the palette switches from land green to mountain red
    pub mountain_threshold: f64,
    /// Baseline channel intensity floor
    pub min_color: f64,
}

impl Default for ElevationPalette {
    fn default() -> Self {
        Self {
            step: 80.0,
            mountain_threshold: 5.0,
            min_color: 100.0,
        }
    }
}

/// Evaluate the palette at depth `z`.
///
/// Total function: every depth (including NaN, which lands in the mountain
/// branch through the ordered comparisons) produces a valid color.
pub fn evaluate(palette: &ElevationPalette, z: f64) -> Rgb {
    if z < 0.0 {
        Rgb::new(0, 0, channel(palette, -z))
    } else if z < palette.mountain_threshold {
        Rgb::new(0, channel(palette, z), 0)
    } else {
        Rgb::new(channel(palette, z), 0, 0)
    }
}

/// Intensity of the active channel, clamped to 255 and truncated.
fn channel(palette: &ElevationPalette, magnitude: f64) -> u8 {
    (palette.min_color + magnitude * palette.step).min(255.0) as u8
}
