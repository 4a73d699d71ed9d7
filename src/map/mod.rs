// src/map/mod.rs
pub mod door;
pub mod grid;
pub mod point;
pub mod room;
pub mod tile;

pub use door::Door;
pub use grid::Grid;
pub use point::GridPoint;
pub use room::{Room, RoomRecord, ShapeData};
pub use tile::{TileInfo, TileKind, TILE_LEGEND};
