// src/extract/pipeline.rs

use std::collections::BTreeMap;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::extract::{
    count_boundary_edges, extract_doors, find_room_region, is_rectangular, simplify_outline,
    trace_outline, ExtractionConfig,
};
use crate::map::{Door, Grid, GridPoint, Room, RoomRecord, ShapeData, TileInfo, TileKind};

/// Everything derived from one grid: doors, enriched rooms and the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOutput {
    pub doors: Vec<Door>,
    pub rooms: Vec<RoomRecord>,
    pub grid_key: BTreeMap<String, TileInfo>,
    pub summary: LayoutSummary,
}

/// Room-type tallies over the input rooms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LayoutSummary {
    pub total_rooms: usize,
    pub has_entrance: bool,
    pub entrance_count: usize,
    pub boss_count: usize,
    pub room_type_distribution: BTreeMap<String, usize>,
}

impl LayoutSummary {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
        for room_type in rooms.iter().filter_map(|r| r.room_type.as_deref()) {
            *distribution.entry(room_type.to_string()).or_default() += 1;
        }
        let entrance_count = distribution.get("entrance").copied().unwrap_or(0);
        let boss_count = distribution.get("boss").copied().unwrap_or(0);

        LayoutSummary {
            total_rooms: rooms.len(),
            has_entrance: entrance_count > 0,
            entrance_count,
            boss_count,
            room_type_distribution: distribution,
        }
    }
}

/// The tile-code legend keyed by stringified code, `"0"` to `"7"`.
pub fn grid_key() -> BTreeMap<String, TileInfo> {
    TileKind::all()
        .iter()
        .map(|kind| (kind.code().to_string(), *kind.info()))
        .collect()
}

/// Runs the extraction pipeline over a grid and its rooms.
///
/// Doors are scanned once over the whole grid. Each room then goes through
/// region finding, outline tracing, simplification and shape
/// classification on its own; rooms share nothing but the read-only grid,
/// so the per-room loop runs on the rayon pool when
/// [`ExtractionConfig::parallel`] is set. Output order always matches input
/// order.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Extractor { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn extract(&self, grid: &Grid, rooms: &[Room]) -> LayoutOutput {
        let doors = extract_doors(grid, self.config.max_door_neighbors);

        let records: Vec<RoomRecord> = if self.config.parallel {
            rooms.par_iter().map(|room| self.process_room(grid, room)).collect()
        } else {
            rooms.iter().map(|room| self.process_room(grid, room)).collect()
        };

        info!(
            "Extracted {} doors and {} rooms from {}x{} grid",
            doors.len(),
            records.len(),
            grid.width(),
            grid.height()
        );

        LayoutOutput {
            doors,
            rooms: records,
            grid_key: grid_key(),
            summary: LayoutSummary::from_rooms(rooms),
        }
    }

    /// Enriches one room. Other room fields pass through untouched.
    pub fn process_room(&self, grid: &Grid, room: &Room) -> RoomRecord {
        let shape_data = match room.seed_center() {
            Some(center) => Some(self.shape_at(grid, room.id, center)),
            None => {
                warn!("Room {} has a non-finite center {:?}, skipping", room.id, room.center);
                None
            }
        };

        RoomRecord {
            room: room.clone(),
            shape_data,
        }
    }

    /// Region -> outline -> simplified outline -> classification for the
    /// room anchored at `center`.
    pub fn shape_at(&self, grid: &Grid, room_id: i64, center: GridPoint) -> ShapeData {
        let region = find_room_region(grid, center, self.config.search_radius);
        let outline = trace_outline(grid, &region.cells);
        let simplified_outline = simplify_outline(&outline, self.config.simplify_tolerance);

        debug!(
            "Room {}: seed ({}, {}), {} cells, outline {} -> {} points",
            room_id,
            region.seed.x,
            region.seed.y,
            region.len(),
            outline.len(),
            simplified_outline.len()
        );

        ShapeData {
            perimeter_length: outline.len(),
            is_rectangular: is_rectangular(&region.cells),
            boundary_edges: count_boundary_edges(&region.cells),
            floor_cell_count: region.len(),
            outline,
            simplified_outline,
        }
    }
}
