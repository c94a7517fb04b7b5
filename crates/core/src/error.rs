//! Error types for wiremap

use thiserror::Error;

/// Main error type for wiremap operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Grid must contain at least one row and one column")]
    EmptyGrid,

    #[error("Ragged grid: row {row} has {actual} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("No pixels to normalize")]
    EmptyPixelSet,

    #[error("Pixel write out of bounds: ({x}, {y}) on canvas {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Result type alias for wiremap operations
pub type Result<T> = std::result::Result<T, Error>;
