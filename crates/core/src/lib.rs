//! # Wiremap Core
//!
//! Core types, errors and I/O for the wiremap terrain renderer.
//!
//! This crate provides:
//! - `HeightGrid`: rectangular grid of integer altitudes
//! - `Point3` / `PixelPoint`: value types carried through the pipeline
//! - The shared error taxonomy
//! - Map-file parsing for the textual terrain format

pub mod error;
pub mod grid;
pub mod io;
pub mod point;

pub use error::{Error, Result};
pub use grid::{GridStatistics, HeightGrid};
pub use point::{round_half_away, PixelPoint, Point3};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{GridStatistics, HeightGrid};
    pub use crate::point::{round_half_away, PixelPoint, Point3};
    pub use crate::Stage;
}

/// Core trait for pipeline stages.
///
/// Stages are pure functions that transform one immutable collection into
/// another according to parameters, failing fast on precondition violations.
pub trait Stage {
    /// Input type for the stage
    type Input;
    /// Output type for the stage
    type Output;
    /// Parameters controlling stage behavior
    type Params: Default;
    /// Error type for stage execution
    type Error: std::error::Error;

    /// Returns the stage name
    fn name(&self) -> &'static str;

    /// Returns a description of what the stage does
    fn description(&self) -> &'static str;

    /// Execute the stage
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
