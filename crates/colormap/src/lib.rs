//! # Wiremap Colormap
//!
//! Depth-to-RGB mapping and canvas replay for the wiremap terrain renderer.
//!
//! The palette maps the depth channel to a color: negative depths (water)
//! ramp through blues, land through greens, and everything at or above the
//! mountain threshold through reds. [`render_pixels`] replays an ordered
//! pixel sequence onto a last-write-wins [`Canvas`].
//!
//! ## Usage
//!
//! ```ignore
//! use wiremap_colormap::{render_pixels, ElevationPalette};
//!
//! let palette = ElevationPalette::default();
//! let canvas = render_pixels(&normalized.pixels, width, height, &palette)?;
//! ```

mod palette;
mod render;

pub use palette::{evaluate, ElevationPalette, Rgb};
pub use render::{render_pixels, Canvas};
