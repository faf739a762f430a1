//! Neighbor-weighted tile selection.
//!
//! The selector turns a [`NeighborSurvey`] into one tile type. Rules are
//! checked in priority order and the first match wins:
//!
//! 1. No assigned neighbors: uniform draw over the whole catalog.
//! 2. Forest and Desert both present: Plains, with no draw.
//! 3. Forest present: Forest with chance `count(Forest) × forest`, else Plains.
//! 4. Desert present: Desert with chance `count(Desert) × desert`, else Plains.
//! 5. Otherwise: Plains with chance `count(Plains) × plains`, else a uniform
//!    draw over every catalog type except Plains.
//!
//! "With chance `c`" means drawing `r` from `[0, total]`, where `total` is the
//! sum of neighbor counts, and succeeding when `r <= c`.

use serde::{Deserialize, Serialize};
use verdant_common::{ConfigError, GenerationError, RngError, TileType};

use crate::catalog::TileCatalog;
use crate::rng::TileRng;
use crate::survey::NeighborSurvey;

/// How strongly each biome attracts more of itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightFactors {
    /// Forest affinity, conventionally in `[0, 1]`
    pub forest: f32,
    /// Desert affinity, conventionally in `[0, 1]`
    pub desert: f32,
    /// Plains affinity, conventionally in `[0, 1]`
    pub plains: f32,
}

impl Default for WeightFactors {
    fn default() -> Self {
        Self {
            forest: 0.6,
            desert: 0.6,
            plains: 0.5,
        }
    }
}

impl WeightFactors {
    /// Create weight factors.
    #[must_use]
    pub const fn new(forest: f32, desert: f32, plains: f32) -> Self {
        Self {
            forest,
            desert,
            plains,
        }
    }

    /// Reject negative or non-finite weights. Values above one are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("forest", self.forest),
            ("desert", self.desert),
            ("plains", self.plains),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Rule that produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    /// No assigned neighbors; uniform over the catalog.
    Isolated,
    /// Forest and Desert meet; resolved to Plains.
    Conflict,
    /// Weighted Forest-or-Plains draw.
    ForestAffinity,
    /// Weighted Desert-or-Plains draw.
    DesertAffinity,
    /// Weighted Plains-or-other draw.
    PlainsAffinity,
}

impl SelectionRule {
    /// All rules in priority order.
    pub const ALL: [Self; 5] = [
        Self::Isolated,
        Self::Conflict,
        Self::ForestAffinity,
        Self::DesertAffinity,
        Self::PlainsAffinity,
    ];
}

/// Outcome of a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Chosen tile type.
    pub tile: TileType,
    /// Rule that chose it.
    pub rule: SelectionRule,
}

/// Weighted decision procedure for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TileSelector {
    weights: WeightFactors,
}

impl TileSelector {
    /// Create a selector with the given weights.
    #[must_use]
    pub const fn new(weights: WeightFactors) -> Self {
        Self { weights }
    }

    /// Choose a tile type for a cell with the given neighborhood.
    pub fn select<D, R>(
        &self,
        survey: &NeighborSurvey,
        catalog: &TileCatalog<D>,
        rng: &mut R,
    ) -> Result<Selection, GenerationError>
    where
        R: TileRng + ?Sized,
    {
        let rule = Self::rule_for(survey);
        let tile = match rule {
            SelectionRule::Isolated => draw_uniform(catalog, rng, None)?,
            SelectionRule::Conflict => TileType::Plains,
            SelectionRule::ForestAffinity => {
                let hit = weighted_hit(survey, TileType::Forest, self.weights.forest, rng)?;
                if hit { TileType::Forest } else { TileType::Plains }
            },
            SelectionRule::DesertAffinity => {
                let hit = weighted_hit(survey, TileType::Desert, self.weights.desert, rng)?;
                if hit { TileType::Desert } else { TileType::Plains }
            },
            SelectionRule::PlainsAffinity => {
                if weighted_hit(survey, TileType::Plains, self.weights.plains, rng)? {
                    TileType::Plains
                } else {
                    draw_uniform(catalog, rng, Some(TileType::Plains))?
                }
            },
        };

        // Never hand back a tile the catalog cannot place.
        catalog.require(tile)?;
        Ok(Selection { tile, rule })
    }

    /// Which rule applies to a survey.
    #[must_use]
    pub fn rule_for(survey: &NeighborSurvey) -> SelectionRule {
        let forest = survey.contains(TileType::Forest);
        let desert = survey.contains(TileType::Desert);
        match (survey.total(), forest, desert) {
            (0, _, _) => SelectionRule::Isolated,
            (_, true, true) => SelectionRule::Conflict,
            (_, true, false) => SelectionRule::ForestAffinity,
            (_, false, true) => SelectionRule::DesertAffinity,
            (_, false, false) => SelectionRule::PlainsAffinity,
        }
    }
}

/// Draw `r` from `[0, total]` and test it against `count(tile) × weight`.
fn weighted_hit<R>(
    survey: &NeighborSurvey,
    tile: TileType,
    weight: f32,
    rng: &mut R,
) -> Result<bool, RngError>
where
    R: TileRng + ?Sized,
{
    let total = survey.total() as f32;
    let chance = survey.count(tile) as f32 * weight;
    let r = rng.next_float(0.0, total)?;
    Ok(r <= chance)
}

/// Uniform draw over the catalog in catalog order, optionally skipping one type.
fn draw_uniform<D, R>(
    catalog: &TileCatalog<D>,
    rng: &mut R,
    exclude: Option<TileType>,
) -> Result<TileType, GenerationError>
where
    R: TileRng + ?Sized,
{
    let candidates: Vec<TileType> = catalog
        .tile_types()
        .filter(|tile| Some(*tile) != exclude)
        .collect();
    if candidates.is_empty() {
        return Err(if exclude.is_some() {
            GenerationError::NoAlternativeTile
        } else {
            GenerationError::EmptyCatalog
        });
    }

    let hi = i32::try_from(candidates.len()).unwrap_or(i32::MAX);
    let value = rng.next_int(0, hi)?;
    usize::try_from(value)
        .ok()
        .and_then(|i| candidates.get(i).copied())
        .ok_or(GenerationError::Rng(RngError::OutOfRange { value, lo: 0, hi }))
}
