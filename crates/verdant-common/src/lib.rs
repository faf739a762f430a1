//! # Verdant Common
//!
//! Shared types for the Verdant tile generator:
//! - Grid coordinates and extents
//! - Tile type definitions
//! - Error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod tile;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::tile::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        let size = GridSize::new(4, 7);
        let coord = GridCoord::new(2, 5);
        let index = size.to_index(coord);

        assert_eq!(index, 2 * 7 + 5);
        assert_eq!(size.from_index(index), coord);
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let size = GridSize::new(2, 3);
        let order: Vec<_> = size.scan_order().collect();

        assert_eq!(order.len(), size.cell_count());
        assert_eq!(order[0], GridCoord::new(0, 0));
        assert_eq!(order[1], GridCoord::new(0, 1));
        assert_eq!(order[3], GridCoord::new(1, 0));
        for (i, coord) in order.iter().enumerate() {
            assert_eq!(size.to_index(*coord), i);
        }
    }

    #[test]
    fn test_offset_bounds() {
        let size = GridSize::new(10, 10);
        let corner = GridCoord::new(0, 0);

        assert_eq!(corner.offset(-1, 0, size), None);
        assert_eq!(corner.offset(0, -1, size), None);
        assert_eq!(corner.offset(1, 1, size), Some(GridCoord::new(1, 1)));
        assert_eq!(GridCoord::new(9, 9).offset(1, 0, size), None);
    }

    #[test]
    fn test_size_validity() {
        assert!(GridSize::new(1, 1).is_valid());
        assert!(!GridSize::new(0, 5).is_valid());
        assert!(!GridSize::new(5, 0).is_valid());
    }
}
