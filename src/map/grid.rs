// src/map/grid.rs

use crate::error::GridError;
use crate::map::{GridPoint, TileKind};

/// Read-only, row-major field of tile codes produced by the layout generator.
///
/// Coordinates are signed so that neighbour probes may step off the edge;
/// anything outside `[0, width) x [0, height)` is treated as a closed
/// boundary by every query except [`Grid::tile_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl Grid {
    /// Builds a grid from a row-major buffer of `width * height` codes.
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::SizeMismatch { expected: usize::MAX, actual: tiles.len() })?;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch { expected, actual: tiles.len() });
        }
        Ok(Grid { width, height, tiles })
    }

    /// Builds a grid from nested rows (`rows[y][x]`). Every row must have the
    /// same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(GridError::RaggedRow { row, expected: width, actual: cells.len() });
            }
            tiles.extend_from_slice(cells);
        }
        Ok(Grid { width, height, tiles })
    }

    /// A `width x height` grid where every tile has the same code.
    pub fn filled(width: usize, height: usize, code: u8) -> Result<Self, GridError> {
        Self::new(width, height, vec![code; width.saturating_mul(height)])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Code at `(x, y)`, or `None` off the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if self.in_bounds(x, y) {
            Some(self.tiles[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Code at `(x, y)`. Fails with [`GridError::OutOfBounds`] off the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<u8, GridError> {
        self.get(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        self.get(x, y).and_then(TileKind::from_code)
    }

    /// True only for in-bounds floor tiles.
    #[inline]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.kind_at(x, y).is_some_and(TileKind::is_walkable)
    }

    #[inline]
    pub fn is_walkable_at(&self, p: GridPoint) -> bool {
        self.is_walkable(p.x, p.y)
    }

    /// Number of tiles carrying `code`.
    pub fn count_of(&self, code: u8) -> usize {
        self.tiles.iter().filter(|&&c| c == code).count()
    }

    /// Iterates `(point, code)` in row-major order: `y` outer, `x` inner.
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, u8)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, &code)| {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            (GridPoint::new(x, y), code)
        })
    }

    /// Sets a tile. Only used to assemble fixtures; the extraction pipeline
    /// never mutates its grid.
    pub fn set(&mut self, x: i32, y: i32, code: u8) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        self.tiles[y as usize * self.width + x as usize] = code;
        Ok(())
    }
}
