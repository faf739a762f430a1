//! Coordinate types for grid cells and grid extents.

use serde::{Deserialize, Serialize};

/// Position of a cell in the tile grid.
///
/// `x` runs along the grid length (the outer scan axis) and `z` along the
/// grid width (the inner scan axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row coordinate, in `[0, length)`
    pub x: u32,
    /// Column coordinate, in `[0, width)`
    pub z: u32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }

    /// Returns the coordinate shifted by `(dx, dz)`, or `None` if the result
    /// falls outside `size`.
    #[must_use]
    pub fn offset(self, dx: i32, dz: i32, size: GridSize) -> Option<Self> {
        let x = i64::from(self.x) + i64::from(dx);
        let z = i64::from(self.z) + i64::from(dz);
        if size.contains_signed(x, z) {
            Some(Self::new(x as u32, z as u32))
        } else {
            None
        }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Extent of a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of rows (extent of `x`)
    pub length: u32,
    /// Number of columns (extent of `z`)
    pub width: u32,
}

impl GridSize {
    /// Creates a new grid size.
    #[must_use]
    pub const fn new(length: u32, width: u32) -> Self {
        Self { length, width }
    }

    /// Whether both dimensions are at least one.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.length > 0 && self.width > 0
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.length as usize) * (self.width as usize)
    }

    /// Checks whether a coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(self, coord: GridCoord) -> bool {
        coord.x < self.length && coord.z < self.width
    }

    /// Checks signed coordinates, so neighbor offsets can be tested before
    /// they are narrowed back to `u32`.
    #[must_use]
    pub fn contains_signed(self, x: i64, z: i64) -> bool {
        x >= 0 && z >= 0 && x < i64::from(self.length) && z < i64::from(self.width)
    }

    /// Converts a coordinate to its row-major linear index.
    #[must_use]
    pub const fn to_index(self, coord: GridCoord) -> usize {
        (coord.x as usize) * (self.width as usize) + (coord.z as usize)
    }

    /// Creates a coordinate from a row-major linear index.
    #[must_use]
    pub const fn from_index(self, index: usize) -> GridCoord {
        let width = self.width as usize;
        GridCoord {
            x: (index / width) as u32,
            z: (index % width) as u32,
        }
    }

    /// Iterates every coordinate in scan order: `x` outer, `z` inner.
    pub fn scan_order(self) -> impl Iterator<Item = GridCoord> {
        (0..self.length).flat_map(move |x| (0..self.width).map(move |z| GridCoord::new(x, z)))
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.length, self.width)
    }
}
