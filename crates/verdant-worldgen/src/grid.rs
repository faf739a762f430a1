//! Tile grid state.

use verdant_common::{GenerationError, GridCoord, GridSize, TileType};

/// Moore neighborhood offsets `(dx, dz)`, in survey order.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// `length × width` grid of tile assignments, stored row-major.
///
/// Every cell starts as [`TileType::Empty`] and may be assigned exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: GridSize,
    cells: Vec<TileType>,
}

impl TileGrid {
    /// Create an unassigned grid. Both dimensions must be at least one.
    pub fn new(size: GridSize) -> Result<Self, GenerationError> {
        if !size.is_valid() {
            return Err(GenerationError::InvalidDimensions {
                length: size.length,
                width: size.width,
            });
        }
        Ok(Self {
            size,
            cells: vec![TileType::Empty; size.cell_count()],
        })
    }

    /// Grid extent.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Tile at a coordinate, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<TileType> {
        if self.size.contains(coord) {
            Some(self.cells[self.size.to_index(coord)])
        } else {
            None
        }
    }

    /// Assign a tile to an unassigned cell.
    pub fn assign(&mut self, coord: GridCoord, tile: TileType) -> Result<(), GenerationError> {
        if !self.size.contains(coord) {
            return Err(GenerationError::CellOutOfBounds(coord));
        }
        if tile.is_empty() {
            return Err(GenerationError::EmptyAssignment(coord));
        }
        let index = self.size.to_index(coord);
        let existing = self.cells[index];
        if !existing.is_empty() {
            return Err(GenerationError::CellAlreadyAssigned { coord, existing });
        }
        self.cells[index] = tile;
        Ok(())
    }

    /// In-range Moore neighbors of a cell, in survey order.
    pub fn neighbors(&self, coord: GridCoord) -> impl Iterator<Item = GridCoord> + '_ {
        MOORE_OFFSETS
            .iter()
            .filter_map(move |&(dx, dz)| coord.offset(dx, dz, self.size))
    }

    /// Whether every cell holds a real tile.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|t| !t.is_empty())
    }

    /// Whether every cell is still unassigned.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.cells.iter().all(|t| t.is_empty())
    }

    /// Number of cells holding `tile`.
    #[must_use]
    pub fn count(&self, tile: TileType) -> usize {
        self.cells.iter().filter(|t| **t == tile).count()
    }

    /// Raw cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[TileType] {
        &self.cells
    }

    /// Cells with their coordinates, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, TileType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, tile)| (self.size.from_index(i), *tile))
    }

    /// One row of the grid (fixed `x`).
    #[must_use]
    pub fn row(&self, x: u32) -> Option<&[TileType]> {
        if x >= self.size.length {
            return None;
        }
        let width = self.size.width as usize;
        let start = x as usize * width;
        Some(&self.cells[start..start + width])
    }
}

impl std::fmt::Display for TileGrid {
    /// One line per row, one glyph per cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.size.length {
            if let Some(row) = self.row(x) {
                let line: String = row.iter().map(|t| t.glyph()).collect();
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
