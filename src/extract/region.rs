// src/extract/region.rs

use std::collections::{BTreeSet, HashSet, VecDeque};

use log::trace;

use crate::extract::MAX_SEARCH_RADIUS;
use crate::map::{Grid, GridPoint};

/// 4-connected probe offsets used by the flood fill.
const NEIGHBORS_4: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The floor cells recovered for one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRegion {
    /// Cell the fill started from. Not necessarily floor: when the search
    /// window holds no floor this is the room center itself.
    pub seed: GridPoint,
    pub cells: BTreeSet<GridPoint>,
}

impl RoomRegion {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        self.cells.contains(&p)
    }
}

/// First floor cell in the `(2r+1) x (2r+1)` window around `center`,
/// scanned row by row. `radius` is clamped to `0..=MAX_SEARCH_RADIUS`.
pub fn find_seed(grid: &Grid, center: GridPoint, radius: i32) -> Option<GridPoint> {
    let radius = radius.clamp(0, MAX_SEARCH_RADIUS);
    (-radius..=radius)
        .flat_map(|dy| (-radius..=radius).map(move |dx| center.offset(dx, dy)))
        .find(|&p| grid.is_walkable_at(p))
}

/// Maximal 4-connected set of floor cells reachable from `seed`.
///
/// Every probed cell is marked visited exactly once, floor or not, but only
/// floor cells join the region and expand the frontier.
pub fn flood_fill(grid: &Grid, seed: GridPoint) -> BTreeSet<GridPoint> {
    let mut cells = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(p) = queue.pop_front() {
        if !visited.insert(p) {
            continue;
        }
        if !grid.is_walkable_at(p) {
            continue;
        }
        cells.insert(p);
        for &(dx, dy) in &NEIGHBORS_4 {
            let next = p.offset(dx, dy);
            if grid.in_bounds(next.x, next.y) && !visited.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    cells
}

/// Locates a seed near `center` and flood-fills the room around it.
///
/// When the window holds no floor the fill starts from `center` itself and,
/// unless that cell happens to be floor, yields an empty region.
pub fn find_room_region(grid: &Grid, center: GridPoint, radius: i32) -> RoomRegion {
    let seed = match find_seed(grid, center, radius) {
        Some(seed) => seed,
        None => {
            trace!(
                "no floor within {} tiles of ({}, {}), seeding at center",
                radius,
                center.x,
                center.y
            );
            center
        }
    };

    RoomRegion {
        seed,
        cells: flood_fill(grid, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two 2x2 rooms separated by a wall column.
    fn two_rooms() -> Grid {
        Grid::from_rows(&[
            vec![2u8, 2, 2, 2, 2, 2, 2],
            vec![2, 1, 1, 2, 1, 1, 2],
            vec![2, 1, 1, 2, 1, 1, 2],
            vec![2, 2, 2, 2, 2, 2, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_seed_prefers_row_major_first_floor() {
        let grid = two_rooms();
        // Window around (3,1) covers both rooms; the scan starts at dy = -3.
        assert_eq!(find_seed(&grid, GridPoint::new(3, 1), 3), Some(GridPoint::new(1, 1)));
        assert_eq!(find_seed(&grid, GridPoint::new(5, 2), 0), Some(GridPoint::new(5, 2)));
        assert_eq!(find_seed(&grid, GridPoint::new(3, 0), 0), None);
    }

    #[test]
    fn test_fill_stays_in_component() {
        let grid = two_rooms();
        let region = find_room_region(&grid, GridPoint::new(5, 2), 0);
        let expected: BTreeSet<_> = [(4, 1), (5, 1), (4, 2), (5, 2)]
            .into_iter()
            .map(GridPoint::from)
            .collect();
        assert_eq!(region.cells, expected);
        assert_eq!(region.seed, GridPoint::new(5, 2));
    }

    #[test]
    fn test_shared_component_gives_identical_regions() {
        let grid = two_rooms();
        let a = find_room_region(&grid, GridPoint::new(1, 1), 3);
        let b = find_room_region(&grid, GridPoint::new(2, 2), 3);
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn test_no_floor_in_window_is_empty() {
        let grid = Grid::filled(10, 10, 0).unwrap();
        let region = find_room_region(&grid, GridPoint::new(5, 5), 3);
        assert!(region.is_empty());
        assert_eq!(region.seed, GridPoint::new(5, 5));
    }

    #[test]
    fn test_center_outside_grid() {
        let grid = two_rooms();
        let far = find_room_region(&grid, GridPoint::new(100, -40), 3);
        assert!(far.is_empty());

        // Just off the edge, the window still reaches floor.
        let near = find_room_region(&grid, GridPoint::new(-1, 1), 3);
        assert_eq!(near.len(), 4);
        assert!(near.contains(GridPoint::new(1, 1)));
    }

    #[test]
    fn test_center_at_coordinate_limits() {
        let grid = Grid::filled(10, 10, 1).unwrap();
        for center in [GridPoint::new(i32::MAX, 5), GridPoint::new(i32::MIN, i32::MAX)] {
            let region = find_room_region(&grid, center, 3);
            assert!(region.is_empty());
            assert_eq!(region.seed, center);
        }
    }

    #[test]
    fn test_diagonal_floor_is_not_connected() {
        let grid = Grid::from_rows(&[vec![1u8, 2], vec![2, 1]]).unwrap();
        let region = flood_fill(&grid, GridPoint::new(0, 0));
        assert_eq!(region.len(), 1);
    }
}
