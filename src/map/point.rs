// src/map/point.rs
use serde::{Deserialize, Serialize};

/// An integer grid coordinate. Serialized as `[x, y]`.
///
/// Ordering is lexicographic on `(x, y)`, which is the order the outline
/// tracer uses to pick its starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        GridPoint { x, y }
    }

    /// Shifts by `(dx, dy)`, saturating at the `i32` range. Saturated
    /// points are never in bounds of a grid.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        GridPoint::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Squared euclidean distance, exact for integer coordinates.
    pub fn distance_sq(self, other: GridPoint) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    /// True when `other` shares an edge with this point.
    pub fn is_adjacent4(self, other: GridPoint) -> bool {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs() == 1
    }
}

impl From<[i32; 2]> for GridPoint {
    fn from([x, y]: [i32; 2]) -> Self {
        GridPoint::new(x, y)
    }
}

impl From<GridPoint> for [i32; 2] {
    fn from(p: GridPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        GridPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_pair() {
        let p = GridPoint::new(4, 3);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[4,3]");
        let back: GridPoint = serde_json::from_str("[4,3]").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut points = vec![
            GridPoint::new(2, 0),
            GridPoint::new(1, 5),
            GridPoint::new(1, 2),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![GridPoint::new(1, 2), GridPoint::new(1, 5), GridPoint::new(2, 0)]
        );
    }

    #[test]
    fn test_adjacency() {
        let p = GridPoint::new(3, 3);
        assert!(p.is_adjacent4(GridPoint::new(4, 3)));
        assert!(p.is_adjacent4(GridPoint::new(3, 2)));
        assert!(!p.is_adjacent4(GridPoint::new(4, 4)));
        assert!(!p.is_adjacent4(p));
    }

    #[test]
    fn test_offset_saturates_at_extremes() {
        let far = GridPoint::new(i32::MAX, i32::MIN);
        assert_eq!(far.offset(3, -3), far);
        assert_eq!(far.offset(-1, 1), GridPoint::new(i32::MAX - 1, i32::MIN + 1));
        assert_eq!(
            far.distance_sq(GridPoint::new(0, 0)),
            (i32::MAX as i64).pow(2) + (i32::MIN as i64).pow(2)
        );
        assert!(!far.is_adjacent4(GridPoint::new(i32::MIN, i32::MIN)));
    }
}
