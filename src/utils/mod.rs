// src/utils/mod.rs
pub mod geometry;

pub use geometry::{CellBounds, Line2D, Point2D};
