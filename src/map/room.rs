// src/map/room.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::map::GridPoint;

/// A room as handed over by the layout generator.
///
/// Only `id` and `center` drive extraction; `room_type` is read for the
/// layout summary. Every other field (`bounds`, `area`, `shape`,
/// `metadata`, ...) is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub center: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Room {
    pub fn new(id: i64, center_x: f64, center_y: f64) -> Self {
        Room {
            id,
            center: [center_x, center_y],
            room_type: None,
            extra: Map::new(),
        }
    }

    pub fn with_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }

    /// The center truncated toward zero, or `None` when either coordinate is
    /// not a finite number.
    pub fn seed_center(&self) -> Option<GridPoint> {
        let [x, y] = self.center;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        // `as` saturates, so centers far outside the grid stay representable.
        Some(GridPoint::new(x.trunc() as i32, y.trunc() as i32))
    }
}

/// Geometry derived for one room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeData {
    pub outline: Vec<GridPoint>,
    pub simplified_outline: Vec<GridPoint>,
    /// Number of points in `outline`.
    pub perimeter_length: usize,
    pub is_rectangular: bool,
    /// Unit cell edges separating the region from everything else.
    pub boundary_edges: usize,
    pub floor_cell_count: usize,
}

/// An input room enriched with its derived geometry.
///
/// `shape_data` is `None` only when the room could not be processed at all
/// (a non-finite center). An empty region still yields `Some` with an empty
/// outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(flatten)]
    pub room: Room,
    pub shape_data: Option<ShapeData>,
}
