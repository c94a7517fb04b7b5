//! # Wiremap Pipeline
//!
//! The geometry pipeline for the wiremap terrain renderer.
//!
//! ## Stages
//!
//! - **projector**: altitude grid -> mesh of points in skewed isometric space
//! - **rasterizer**: mesh -> ordered pixel candidates via depth-interpolated
//!   line drawing between neighboring mesh vertices
//! - **normalizer**: pixel candidates -> top-left-origin device coordinates
//!   plus canvas dimensions
//!
//! Stages are pure and fail fast on precondition violations; each produces a
//! new collection. The emission order of the rasterizer is part of the
//! contract because downstream canvas writes are last-write-wins.

pub mod maybe_rayon;
pub mod normalizer;
pub mod projector;
pub mod rasterizer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::normalizer::{normalize, Normalized, Normalizer};
    pub use crate::projector::{project, Mesh, ProjectParams, Projector};
    pub use crate::rasterizer::{line, rasterize, RasterizeParams, Rasterizer};
    pub use wiremap_core::prelude::*;
}
