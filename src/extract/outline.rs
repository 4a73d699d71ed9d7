// src/extract/outline.rs
//! Perimeter detection, corner classification and outline ordering.
//!
//! The ordering step is a greedy nearest-neighbour tour over the corner
//! cells, not a boundary walk. For concave or multi-lobed rooms it can cross
//! itself; downstream consumers treat the result as an implicitly closed
//! polygon.

use std::collections::BTreeSet;

use log::trace;

use crate::map::{Grid, GridPoint};

const TOP_LEFT: u8 = 1 << 0;
const TOP: u8 = 1 << 1;
const TOP_RIGHT: u8 = 1 << 2;
const LEFT: u8 = 1 << 3;
const RIGHT: u8 = 1 << 4;
const BOTTOM_LEFT: u8 = 1 << 5;
const BOTTOM: u8 = 1 << 6;
const BOTTOM_RIGHT: u8 = 1 << 7;

/// The eight surrounding offsets paired with their direction bit.
const NEIGHBORS_8: [((i32, i32), u8); 8] = [
    ((-1, -1), TOP_LEFT),
    ((0, -1), TOP),
    ((1, -1), TOP_RIGHT),
    ((-1, 0), LEFT),
    ((1, 0), RIGHT),
    ((-1, 1), BOTTOM_LEFT),
    ((0, 1), BOTTOM),
    ((1, 1), BOTTOM_RIGHT),
];

/// L-shaped neighbour pairs that mark a corner.
const CORNER_PATTERNS: [u8; 4] = [TOP | RIGHT, TOP | LEFT, BOTTOM | RIGHT, BOTTOM | LEFT];

/// Region cells with at least one of their 8 neighbours outside the region
/// or off the grid.
pub fn perimeter_cells(grid: &Grid, cells: &BTreeSet<GridPoint>) -> BTreeSet<GridPoint> {
    cells
        .iter()
        .copied()
        .filter(|&cell| {
            NEIGHBORS_8.iter().any(|&((dx, dy), _)| {
                let n = cell.offset(dx, dy);
                !grid.in_bounds(n.x, n.y) || !cells.contains(&n)
            })
        })
        .collect()
}

/// Bitmask of the directions in which `cell` has another perimeter cell.
fn perimeter_mask(cell: GridPoint, perimeter: &BTreeSet<GridPoint>) -> u8 {
    NEIGHBORS_8
        .iter()
        .filter(|&&((dx, dy), _)| perimeter.contains(&cell.offset(dx, dy)))
        .fold(0, |mask, &(_, bit)| mask | bit)
}

fn is_corner(mask: u8) -> bool {
    mask.count_ones() <= 2 || CORNER_PATTERNS.iter().any(|&p| mask & p == p)
}

/// Corners of a single cell, clockwise from the top-left.
fn unit_square(cell: GridPoint) -> Vec<GridPoint> {
    vec![
        cell,
        cell.offset(1, 0),
        cell.offset(1, 1),
        cell.offset(0, 1),
    ]
}

/// Traces an ordered outline around a region's cells.
///
/// * empty region: empty outline
/// * one perimeter cell: the four corners of that cell
/// * otherwise the corner cells (or every perimeter cell if none qualifies),
///   ordered by [`order_nearest_neighbor`] when there are more than two
pub fn trace_outline(grid: &Grid, cells: &BTreeSet<GridPoint>) -> Vec<GridPoint> {
    if cells.is_empty() {
        return Vec::new();
    }

    let perimeter = perimeter_cells(grid, cells);
    if perimeter.is_empty() {
        trace!("region of {} cells has no perimeter, returning all cells", cells.len());
        return cells.iter().copied().collect();
    }

    if perimeter.len() == 1 {
        if let Some(&cell) = perimeter.first() {
            return unit_square(cell);
        }
    }

    let mut candidates: Vec<GridPoint> = perimeter
        .iter()
        .copied()
        .filter(|&cell| is_corner(perimeter_mask(cell, &perimeter)))
        .collect();

    if candidates.is_empty() {
        trace!("no corner among {} perimeter cells, keeping all", perimeter.len());
        candidates = perimeter.iter().copied().collect();
    }

    if candidates.len() > 2 {
        order_nearest_neighbor(candidates)
    } else {
        candidates
    }
}

/// Greedy tour: start at the smallest `(x, y)` and keep hopping to the
/// closest unvisited point. Ties go to the smaller `(x, y)`.
pub fn order_nearest_neighbor(mut points: Vec<GridPoint>) -> Vec<GridPoint> {
    points.sort();
    points.dedup();
    if points.is_empty() {
        return points;
    }

    let mut ordered = Vec::with_capacity(points.len());
    let mut current = points.remove(0);
    ordered.push(current);

    while let Some((index, _)) = points
        .iter()
        .enumerate()
        .min_by_key(|&(_, &p)| current.distance_sq(p))
    {
        current = points.remove(index);
        ordered.push(current);
    }

    ordered
}

/// Unit edges between a region cell and a non-region cell or the border.
pub fn count_boundary_edges(cells: &BTreeSet<GridPoint>) -> usize {
    cells
        .iter()
        .map(|&cell| {
            [(0, -1), (0, 1), (-1, 0), (1, 0)]
                .iter()
                .filter(|&&(dx, dy)| !cells.contains(&cell.offset(dx, dy)))
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<GridPoint> {
        (y0..=y1)
            .flat_map(|y| (x0..=x1).map(move |x| GridPoint::new(x, y)))
            .collect()
    }

    fn pts(list: &[(i32, i32)]) -> Vec<GridPoint> {
        list.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn test_empty_region() {
        let grid = Grid::filled(5, 5, 0).unwrap();
        assert!(trace_outline(&grid, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_single_cell_is_unit_square() {
        let grid = Grid::filled(10, 10, 1).unwrap();
        let cells: BTreeSet<_> = [GridPoint::new(5, 5)].into_iter().collect();
        assert_eq!(trace_outline(&grid, &cells), pts(&[(5, 5), (6, 5), (6, 6), (5, 6)]));
    }

    #[test]
    fn test_rectangle_has_four_corners() {
        let grid = Grid::filled(10, 10, 1).unwrap();
        let cells = rect(4, 2, 7, 4);
        let outline = trace_outline(&grid, &cells);
        assert_eq!(outline, pts(&[(4, 2), (4, 4), (7, 4), (7, 2)]));
    }

    #[test]
    fn test_perimeter_excludes_interior() {
        let grid = Grid::filled(10, 10, 1).unwrap();
        let cells = rect(1, 1, 4, 4);
        let perimeter = perimeter_cells(&grid, &cells);
        assert_eq!(perimeter.len(), 12);
        assert!(!perimeter.contains(&GridPoint::new(2, 2)));
        assert!(!perimeter.contains(&GridPoint::new(3, 3)));
    }

    #[test]
    fn test_grid_edge_counts_as_outside() {
        // A full 3x3 grid: the center touches only region cells but the
        // border ones touch the edge of the grid.
        let grid = Grid::filled(3, 3, 1).unwrap();
        let cells = rect(0, 0, 2, 2);
        let perimeter = perimeter_cells(&grid, &cells);
        assert_eq!(perimeter.len(), 8);
        assert!(!perimeter.contains(&GridPoint::new(1, 1)));
    }

    #[test]
    fn test_thin_strip_keeps_every_cell() {
        let grid = Grid::filled(6, 3, 1).unwrap();
        let cells = rect(1, 1, 4, 1);
        assert_eq!(trace_outline(&grid, &cells), pts(&[(1, 1), (2, 1), (3, 1), (4, 1)]));
    }

    #[test]
    fn test_two_cells_returned_in_order() {
        let grid = Grid::filled(4, 4, 1).unwrap();
        let cells: BTreeSet<_> = pts(&[(2, 1), (1, 1)]).into_iter().collect();
        assert_eq!(trace_outline(&grid, &cells), pts(&[(1, 1), (2, 1)]));
    }

    #[test]
    fn test_l_shape_outline_is_subset_of_perimeter() {
        let grid = Grid::filled(10, 10, 1).unwrap();
        let mut cells = rect(1, 1, 3, 5);
        cells.extend(rect(4, 3, 6, 5));
        let perimeter = perimeter_cells(&grid, &cells);
        let outline = trace_outline(&grid, &cells);

        assert!(outline.len() >= 3);
        assert_eq!(outline[0], GridPoint::new(1, 1));
        for p in &outline {
            assert!(perimeter.contains(p));
        }
        let unique: BTreeSet<_> = outline.iter().collect();
        assert_eq!(unique.len(), outline.len());
        // The outer corners are all present.
        for corner in pts(&[(1, 1), (3, 1), (1, 5), (6, 3), (6, 5)]) {
            assert!(outline.contains(&corner), "missing {:?}", corner);
        }
    }

    #[test]
    fn test_nearest_neighbor_tie_break() {
        // From (0,0) both (0,1) and (1,0) are at distance 1; (0,1) is smaller.
        let ordered = order_nearest_neighbor(pts(&[(1, 0), (0, 1), (0, 0)]));
        assert_eq!(ordered, pts(&[(0, 0), (0, 1), (1, 0)]));
    }

    #[test]
    fn test_boundary_edges() {
        assert_eq!(count_boundary_edges(&rect(0, 0, 0, 0)), 4);
        assert_eq!(count_boundary_edges(&rect(4, 2, 7, 4)), 14);
        assert_eq!(count_boundary_edges(&BTreeSet::new()), 0);
    }

    #[test]
    fn test_corner_patterns() {
        assert!(is_corner(RIGHT | BOTTOM));
        assert!(is_corner(TOP | RIGHT | BOTTOM_LEFT | LEFT));
        assert!(!is_corner(LEFT | RIGHT | BOTTOM_LEFT));
        assert!(!is_corner(TOP | BOTTOM | TOP_RIGHT | BOTTOM_RIGHT));
    }
}
