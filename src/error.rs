// src/error.rs

use std::io;
use thiserror::Error;

/// Errors raised while building or querying a [`Grid`](crate::map::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("declared size {expected_width}x{expected_height} does not match grid size {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("tile buffer holds {actual} codes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// An [`ExtractionConfig`](crate::extract::ExtractionConfig) value outside
/// its usable range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("search_radius {radius} is outside 0..={max}")]
    SearchRadius { radius: i32, max: i32 },

    #[error("simplify_tolerance must be finite and non-negative, got {0}")]
    Tolerance(f64),
}

/// Errors raised while loading a layout document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed layout json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
