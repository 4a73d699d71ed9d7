// src/utils/geometry.rs
use crate::map::GridPoint;

/// A position in continuous grid space; cell `(x, y)` sits at its integer
/// corner. Also doubles as a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to this point.
    pub fn relative_to(self, origin: Point2D) -> Point2D {
        Point2D::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// z component of the 2-D cross product.
    pub fn cross(self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        self.relative_to(*other).norm()
    }
}

impl From<GridPoint> for Point2D {
    fn from(p: GridPoint) -> Self {
        Point2D::new(p.x as f64, p.y as f64)
    }
}

/// The chord between two outline vertices.
#[derive(Debug, Clone, Copy)]
pub struct Line2D {
    pub start: Point2D,
    pub end: Point2D,
}

impl Line2D {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn between(a: GridPoint, b: GridPoint) -> Self {
        Self::new(a.into(), b.into())
    }

    pub fn direction(&self) -> Point2D {
        self.end.relative_to(self.start)
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Perpendicular distance from `point` to the infinite line through
    /// `start` and `end`. A closed chord (`start == end`) measures straight
    /// to `start`.
    pub fn distance_to_point(&self, point: &Point2D) -> f64 {
        let direction = self.direction();
        let offset = point.relative_to(self.start);
        let length = direction.norm();
        if length == 0.0 {
            return offset.norm();
        }
        direction.cross(offset).abs() / length
    }
}

/// Inclusive integer bounding box over a set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CellBounds {
    /// Bounds of `cells`, or `None` for an empty set.
    pub fn from_cells<'a, I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GridPoint>,
    {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        let mut bounds = CellBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for cell in iter {
            bounds.expand_point(*cell);
        }
        Some(bounds)
    }

    pub fn expand_point(&mut self, p: GridPoint) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    pub fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }

    /// Number of cells the box covers.
    pub fn area(&self) -> i64 {
        self.width() * self.height()
    }
}
