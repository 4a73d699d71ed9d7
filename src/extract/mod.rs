// src/extract/mod.rs
//! Grid-to-geometry extraction.
//!
//! Takes a finished tile grid plus room anchors and derives doors, per-room
//! floor regions, traced and simplified outlines and a rectangularity flag.
//! Everything here is a pure function of an immutable [`Grid`](crate::map::Grid).

pub mod config;
pub mod doors;
pub mod outline;
pub mod pipeline;
pub mod region;
pub mod shape;
pub mod simplify;

pub use config::ExtractionConfig;
pub use doors::extract_doors;
pub use outline::{count_boundary_edges, perimeter_cells, trace_outline};
pub use pipeline::{grid_key, Extractor, LayoutOutput, LayoutSummary};
pub use region::{find_room_region, find_seed, flood_fill, RoomRegion};
pub use shape::is_rectangular;
pub use simplify::simplify_outline;

/// Half-size of the seed search window (3 => a 7x7 block).
pub const SEED_SEARCH_RADIUS: i32 = 3;
/// Largest `search_radius` a configuration may ask for.
pub const MAX_SEARCH_RADIUS: i32 = 64;
/// Douglas-Peucker tolerance in grid units.
pub const SIMPLIFY_TOLERANCE: f64 = 0.1;
/// Walkable neighbours recorded per door.
pub const MAX_DOOR_NEIGHBORS: usize = 2;
