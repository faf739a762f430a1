//! World generator: the sequential scan that fills a tile grid.
//!
//! Cells are visited row by row (`x` outer, `z` inner). Each cell is
//! surveyed, a tile is selected from the catalog, and the tile is written to
//! the grid. Only cells earlier in scan order are assigned when a cell is
//! surveyed, which is what makes the output a function of the seed alone.
//!
//! ## Emission
//!
//! Placements reach the [`PlacementSink`] in scan order, once per cell, and
//! only after the whole grid has been filled. A run that fails part-way emits
//! nothing.

use std::collections::BTreeMap;

use tracing::{info, trace, warn};
use verdant_common::{ConfigError, GenerationError, GridCoord, TileType};

use crate::catalog::TileCatalog;
use crate::config::WorldGenConfig;
use crate::grid::TileGrid;
use crate::rng::{Seed, SeededRng, TileRng};
use crate::selector::{SelectionRule, TileSelector};
use crate::survey::NeighborSurvey;

/// A tile placed at a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Cell coordinate.
    pub coord: GridCoord,
    /// Tile assigned to the cell.
    pub tile: TileType,
}

/// Receiver of generated placements, e.g. a scene builder.
pub trait PlacementSink {
    /// Accept the tile chosen for one cell.
    fn place(&mut self, coord: GridCoord, tile: TileType);
}

impl PlacementSink for Vec<Placement> {
    fn place(&mut self, coord: GridCoord, tile: TileType) {
        self.push(Placement { coord, tile });
    }
}

impl<F> PlacementSink for F
where
    F: FnMut(GridCoord, TileType),
{
    fn place(&mut self, coord: GridCoord, tile: TileType) {
        self(coord, tile);
    }
}

/// Discards placements.
impl PlacementSink for () {
    fn place(&mut self, _coord: GridCoord, _tile: TileType) {}
}

/// Tallies from one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Cells assigned.
    pub cells: usize,
    /// How many cells each rule decided.
    pub by_rule: BTreeMap<SelectionRule, usize>,
    /// How many cells received each tile type.
    pub by_tile: BTreeMap<TileType, usize>,
}

impl GenerationStats {
    /// Cells decided by `rule`.
    #[must_use]
    pub fn rule_count(&self, rule: SelectionRule) -> usize {
        self.by_rule.get(&rule).copied().unwrap_or(0)
    }

    /// Cells holding `tile`.
    #[must_use]
    pub fn tile_count(&self, tile: TileType) -> usize {
        self.by_tile.get(&tile).copied().unwrap_or(0)
    }

    fn record(&mut self, rule: SelectionRule, tile: TileType) {
        self.cells += 1;
        *self.by_rule.entry(rule).or_insert(0) += 1;
        *self.by_tile.entry(tile).or_insert(0) += 1;
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    /// Seed the run used. Replaying it reproduces the grid.
    pub seed: Seed,
    /// Fully assigned grid.
    pub grid: TileGrid,
    /// Run statistics.
    pub stats: GenerationStats,
}

/// Neighbor-weighted tile generator.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    config: WorldGenConfig,
    selector: TileSelector,
}

impl WorldGenerator {
    /// Create a generator from a validated config.
    pub fn new(config: WorldGenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let selector = TileSelector::new(config.weights);
        Ok(Self { config, selector })
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Generate a world, resolving the configured seed (0 = fresh seed).
    pub fn generate<D, S>(
        &self,
        catalog: &TileCatalog<D>,
        sink: &mut S,
    ) -> Result<GeneratedWorld, GenerationError>
    where
        S: PlacementSink + ?Sized,
    {
        let seed = Seed::resolve(self.config.seed);
        let mut rng = SeededRng::new(seed.value());
        self.run(seed, catalog, &mut rng, sink)
    }

    /// Generate a world drawing from a caller-supplied sequence.
    ///
    /// The configured seed is recorded as-is; it is not used to seed `rng`.
    /// A configured seed of `0` is not resolved here, so the recorded seed is
    /// `0` and cannot replay the run. Callers that need replay should seed
    /// `rng` themselves and configure the same non-zero value.
    pub fn generate_with_rng<D, R, S>(
        &self,
        catalog: &TileCatalog<D>,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GeneratedWorld, GenerationError>
    where
        R: TileRng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        self.run(Seed::from_value(self.config.seed), catalog, rng, sink)
    }

    fn run<D, R, S>(
        &self,
        seed: Seed,
        catalog: &TileCatalog<D>,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GeneratedWorld, GenerationError>
    where
        R: TileRng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        let mut grid = TileGrid::new(self.config.size())?;
        info!(
            "Generating {} world: seed={}{}, tiles={}",
            grid.size(),
            seed,
            if seed.was_generated() { " (auto)" } else { "" },
            catalog.len()
        );
        let stats = self.populate(&mut grid, catalog, rng, sink)?;
        Ok(GeneratedWorld { seed, grid, stats })
    }

    /// Fill a caller-owned, unassigned grid and emit every placement.
    ///
    /// Preconditions are checked before any cell is touched: the catalog is
    /// non-empty and registers Plains, and the grid matches the configured
    /// size with no cell assigned. If the scan itself fails, the grid is left
    /// partially filled and nothing has been emitted.
    pub fn populate<D, R, S>(
        &self,
        grid: &mut TileGrid,
        catalog: &TileCatalog<D>,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GenerationStats, GenerationError>
    where
        R: TileRng + ?Sized,
        S: PlacementSink + ?Sized,
    {
        self.check_preconditions(grid, catalog)?;

        let mut stats = GenerationStats::default();
        for coord in grid.size().scan_order() {
            let survey = NeighborSurvey::of(grid, coord);
            let selection = self.selector.select(&survey, catalog, rng)?;
            trace!(
                x = coord.x,
                z = coord.z,
                tile = %selection.tile,
                rule = ?selection.rule,
                neighbors = survey.total(),
                "worldgen.cell"
            );
            grid.assign(coord, selection.tile)?;
            stats.record(selection.rule, selection.tile);
        }

        for (coord, tile) in grid.iter() {
            sink.place(coord, tile);
        }

        info!(
            "Generated {} cells: plains={}, forest={}, desert={}",
            stats.cells,
            stats.tile_count(TileType::Plains),
            stats.tile_count(TileType::Forest),
            stats.tile_count(TileType::Desert)
        );
        Ok(stats)
    }

    fn check_preconditions<D>(
        &self,
        grid: &TileGrid,
        catalog: &TileCatalog<D>,
    ) -> Result<(), GenerationError> {
        if catalog.is_empty() {
            warn!("No tiles found! Generation skipped");
            return Err(GenerationError::EmptyCatalog);
        }
        // Conflicts and weighted misses both resolve to Plains.
        catalog.require(TileType::Plains)?;

        let expected = self.config.size();
        if grid.size() != expected {
            return Err(GenerationError::DimensionMismatch {
                expected,
                actual: grid.size(),
            });
        }
        if let Some((coord, existing)) = grid.iter().find(|(_, tile)| !tile.is_empty()) {
            return Err(GenerationError::CellAlreadyAssigned { coord, existing });
        }
        Ok(())
    }
}
