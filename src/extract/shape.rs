// src/extract/shape.rs

use std::collections::BTreeSet;

use crate::map::GridPoint;
use crate::utils::CellBounds;

/// True when `cells` fill their own bounding box exactly. Empty sets are
/// not rectangular.
pub fn is_rectangular(cells: &BTreeSet<GridPoint>) -> bool {
    match CellBounds::from_cells(cells) {
        Some(bounds) => bounds.area() == cells.len() as i64,
        None => false,
    }
}
