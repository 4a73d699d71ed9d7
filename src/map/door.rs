// src/map/door.rs
use serde::{Deserialize, Serialize};

use crate::map::GridPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    #[default]
    Standard,
}

/// A door tile found in the grid together with the floor tiles it touches.
///
/// Adjacency is purely geometric; no attempt is made to resolve which room a
/// neighbouring floor tile belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Zero-based index in row-major scan order.
    pub id: usize,
    pub position: GridPoint,
    #[serde(rename = "type")]
    pub kind: DoorKind,
    pub is_locked: bool,
    pub adjacent_positions: Vec<GridPoint>,
}

impl Door {
    pub fn new(id: usize, position: GridPoint, adjacent_positions: Vec<GridPoint>) -> Self {
        Door {
            id,
            position,
            kind: DoorKind::Standard,
            is_locked: false,
            adjacent_positions,
        }
    }
}
