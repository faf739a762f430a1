//! Neighbor surveys: per-cell tallies of already-assigned neighbor tiles.

use std::collections::BTreeMap;

use verdant_common::{GridCoord, TileType};

use crate::grid::TileGrid;

/// Counts of assigned tile types among a cell's Moore neighbors.
///
/// Never contains [`TileType::Empty`]. Only cells visited earlier in scan
/// order can be assigned, so the survey sees exactly the already-generated
/// part of the neighborhood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborSurvey {
    counts: BTreeMap<TileType, u8>,
}

impl NeighborSurvey {
    /// Survey the in-range neighbors of `coord`.
    #[must_use]
    pub fn of(grid: &TileGrid, coord: GridCoord) -> Self {
        let mut survey = Self::default();
        for neighbor in grid.neighbors(coord) {
            if let Some(tile) = grid.get(neighbor) {
                survey.record(tile);
            }
        }
        survey
    }

    /// Build a survey from explicit counts. Zero counts and `Empty` are dropped.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (TileType, u8)>) -> Self {
        let counts = counts
            .into_iter()
            .filter(|(tile, count)| !tile.is_empty() && *count > 0)
            .collect();
        Self { counts }
    }

    fn record(&mut self, tile: TileType) {
        if !tile.is_empty() {
            *self.counts.entry(tile).or_insert(0) += 1;
        }
    }

    /// Occurrences of `tile` among the neighbors.
    #[must_use]
    pub fn count(&self, tile: TileType) -> u32 {
        self.counts.get(&tile).copied().map_or(0, u32::from)
    }

    /// Whether `tile` occurs at least once.
    #[must_use]
    pub fn contains(&self, tile: TileType) -> bool {
        self.counts.contains_key(&tile)
    }

    /// Sum of all occurrence counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().map(|c| u32::from(*c)).sum()
    }

    /// Whether no neighbor is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_common::GridSize;

    fn grid(length: u32, width: u32) -> TileGrid {
        TileGrid::new(GridSize::new(length, width)).expect("grid")
    }

    #[test]
    fn test_empty_neighborhood() {
        let g = grid(10, 10);
        let survey = NeighborSurvey::of(&g, GridCoord::new(5, 5));
        assert!(survey.is_empty());
        assert_eq!(survey.total(), 0);
    }

    #[test]
    fn test_single_forest_neighbor() {
        let mut g = grid(10, 10);
        g.assign(GridCoord::new(4, 4), TileType::Forest).expect("write");

        let survey = NeighborSurvey::of(&g, GridCoord::new(5, 5));
        assert_eq!(survey.total(), 1);
        assert_eq!(survey.count(TileType::Forest), 1);
        assert!(!survey.contains(TileType::Desert));
    }

    #[test]
    fn test_counts_occurrences_not_kinds() {
        let mut g = grid(3, 3);
        g.assign(GridCoord::new(0, 0), TileType::Plains).expect("write");
        g.assign(GridCoord::new(0, 1), TileType::Plains).expect("write");
        g.assign(GridCoord::new(0, 2), TileType::Forest).expect("write");
        g.assign(GridCoord::new(1, 0), TileType::Plains).expect("write");

        let survey = NeighborSurvey::of(&g, GridCoord::new(1, 1));
        assert_eq!(survey.count(TileType::Plains), 3);
        assert_eq!(survey.count(TileType::Forest), 1);
        assert_eq!(survey.total(), 4);
    }

    #[test]
    fn test_center_cell_not_counted() {
        let mut g = grid(3, 3);
        g.assign(GridCoord::new(1, 1), TileType::Desert).expect("write");
        let survey = NeighborSurvey::of(&g, GridCoord::new(1, 1));
        assert!(survey.is_empty());
    }

    #[test]
    fn test_corner_only_sees_in_range_cells() {
        let mut g = grid(10, 10);
        for coord in [
            GridCoord::new(0, 1),
            GridCoord::new(1, 0),
            GridCoord::new(1, 1),
            GridCoord::new(2, 2),
        ] {
            g.assign(coord, TileType::Swamp).expect("write");
        }
        let survey = NeighborSurvey::of(&g, GridCoord::new(0, 0));
        assert_eq!(survey.total(), 3);
    }

    #[test]
    fn test_from_counts_filters() {
        let survey = NeighborSurvey::from_counts([
            (TileType::Forest, 2),
            (TileType::Empty, 3),
            (TileType::Desert, 0),
        ]);
        assert_eq!(survey.total(), 2);
        assert!(!survey.contains(TileType::Desert));
        assert!(!survey.contains(TileType::Empty));
    }
}
