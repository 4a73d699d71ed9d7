// src/lib.rs

pub mod document;
pub mod error;
pub mod extract;
pub mod map;
pub mod utils;

pub use document::{LayoutDocument, LayoutInput};
pub use error::{ConfigError, DocumentError, GridError};
pub use extract::{ExtractionConfig, Extractor, LayoutOutput};
pub use map::{Door, Grid, GridPoint, Room, RoomRecord, ShapeData};
