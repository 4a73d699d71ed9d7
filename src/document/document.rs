// src/document/document.rs

use std::io::{Read, Write};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DocumentError, GridError};
use crate::extract::{ExtractionConfig, Extractor, LayoutOutput};
use crate::map::{Grid, Room};

/// The generator's hand-off as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    /// `grid[y][x]` tile codes.
    pub grid: Vec<Vec<u8>>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(default)]
    pub config: ExtractionConfig,
}

/// A validated layout ready for extraction.
#[derive(Debug, Clone)]
pub struct LayoutDocument {
    grid: Grid,
    rooms: Vec<Room>,
    config: ExtractionConfig,
}

impl LayoutDocument {
    pub fn new(grid: Grid, rooms: Vec<Room>) -> Self {
        LayoutDocument {
            grid,
            rooms,
            config: ExtractionConfig::default(),
        }
    }

    /// Replaces the default configuration after checking its ranges.
    pub fn with_config(mut self, config: ExtractionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Validates the raw input. Ragged or empty grids are rejected, as is a
    /// declared `width`/`height` that disagrees with the rows or a config
    /// value out of range.
    pub fn from_input(input: LayoutInput) -> Result<Self, DocumentError> {
        let grid = Grid::from_rows(&input.grid)?;

        let expected_width = input.width.unwrap_or(grid.width());
        let expected_height = input.height.unwrap_or(grid.height());
        if expected_width != grid.width() || expected_height != grid.height() {
            warn!(
                "Declared size {}x{} disagrees with grid rows {}x{}",
                expected_width,
                expected_height,
                grid.width(),
                grid.height()
            );
            return Err(GridError::DimensionMismatch {
                expected_width,
                expected_height,
                width: grid.width(),
                height: grid.height(),
            }
            .into());
        }

        let doc = LayoutDocument::new(grid, input.rooms).with_config(input.config)?;
        Ok(doc)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let input: LayoutInput = serde_json::from_str(json)?;
        Self::from_input(input)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let input: LayoutInput = serde_json::from_reader(reader)?;
        let doc = Self::from_input(input)?;
        info!(
            "Loaded {}x{} layout with {} rooms",
            doc.grid.width(),
            doc.grid.height(),
            doc.rooms.len()
        );
        Ok(doc)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn extract(&self) -> LayoutOutput {
        Extractor::new(self.config.clone()).extract(&self.grid, &self.rooms)
    }

    /// Runs the extraction and writes the result as pretty-printed JSON.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<LayoutOutput, DocumentError> {
        let output = self.extract();
        serde_json::to_writer_pretty(writer, &output)?;
        Ok(output)
    }
}
