// src/extract/doors.rs

use log::trace;

use crate::map::{Door, Grid, GridPoint, TileKind};

/// Probe order for door neighbours: down, up, right, left.
const DOOR_PROBES: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Scans the grid row by row and emits one [`Door`] per door tile.
///
/// Ids follow scan order. Each door keeps at most `max_neighbors` of its
/// floor neighbours, taken in probe order. A door with no floor around it is
/// still reported, with an empty adjacency list.
pub fn extract_doors(grid: &Grid, max_neighbors: usize) -> Vec<Door> {
    let door_code = TileKind::Door.code();

    grid.iter()
        .filter(|&(_, code)| code == door_code)
        .map(|(pos, _)| pos)
        .enumerate()
        .map(|(id, pos)| {
            let adjacent = walkable_neighbors(grid, pos, max_neighbors);
            if adjacent.is_empty() {
                trace!("door {} at ({}, {}) touches no floor", id, pos.x, pos.y);
            }
            Door::new(id, pos, adjacent)
        })
        .collect()
}

fn walkable_neighbors(grid: &Grid, pos: GridPoint, limit: usize) -> Vec<GridPoint> {
    DOOR_PROBES
        .iter()
        .map(|&(dx, dy)| pos.offset(dx, dy))
        .filter(|&p| grid.is_walkable_at(p))
        .take(limit)
        .collect()
}
