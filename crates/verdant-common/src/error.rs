//! Error types for Verdant.

use thiserror::Error;

use crate::coords::{GridCoord, GridSize};
use crate::tile::TileType;

/// Top-level error type for Verdant operations.
#[derive(Debug, Error)]
pub enum VerdantError {
    /// Tile catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Random sequence errors
    #[error("RNG error: {0}")]
    Rng(#[from] RngError),

    /// Generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Tile catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Attempted to register the unassigned sentinel
    #[error("the Empty tile cannot be registered")]
    EmptyTile,

    /// Tile type registered twice
    #[error("tile type {0} is already registered")]
    Duplicate(TileType),

    /// Lookup of a tile type that was never registered
    #[error("tile type {0} is not registered in the catalog")]
    Unregistered(TileType),
}

/// Random sequence contract violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    /// Integer range with `hi <= lo`
    #[error("invalid integer range [{lo}, {hi})")]
    InvalidIntRange {
        /// Inclusive lower bound
        lo: i32,
        /// Exclusive upper bound
        hi: i32,
    },

    /// Float range with `hi < lo` or a non-finite bound
    #[error("invalid float range [{lo}, {hi}]")]
    InvalidFloatRange {
        /// Lower bound
        lo: f32,
        /// Upper bound
        hi: f32,
    },

    /// A draw landed outside the range it was requested for
    #[error("draw {value} outside [{lo}, {hi})")]
    OutOfRange {
        /// Value produced
        value: i32,
        /// Inclusive lower bound
        lo: i32,
        /// Exclusive upper bound
        hi: i32,
    },

    /// A scripted sequence ran out of values
    #[error("scripted random sequence exhausted")]
    Exhausted,
}

/// World generation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The catalog has no tiles to generate with
    #[error("no tiles found: the catalog is empty")]
    EmptyCatalog,

    /// Grid dimensions below one
    #[error("invalid grid dimensions {length}x{width}")]
    InvalidDimensions {
        /// Requested length
        length: u32,
        /// Requested width
        width: u32,
    },

    /// Grid does not match the configured size
    #[error("grid is {actual} but the generator is configured for {expected}")]
    DimensionMismatch {
        /// Configured size
        expected: GridSize,
        /// Size of the supplied grid
        actual: GridSize,
    },

    /// Coordinate outside the grid
    #[error("cell {0} is outside the grid")]
    CellOutOfBounds(GridCoord),

    /// Cell written a second time
    #[error("cell {coord} already holds {existing}")]
    CellAlreadyAssigned {
        /// Cell coordinate
        coord: GridCoord,
        /// Value already stored
        existing: TileType,
    },

    /// Attempted to write the unassigned sentinel
    #[error("cell {0} cannot be assigned the Empty tile")]
    EmptyAssignment(GridCoord),

    /// Fallback draw had nothing to choose from
    #[error("catalog holds no tile type other than Plains")]
    NoAlternativeTile,

    /// Catalog lookup failed mid-run
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Random sequence failed mid-run
    #[error(transparent)]
    Rng(#[from] RngError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents could not be parsed
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: String,
        /// Parser message
        message: String,
    },

    /// Value could not be serialized
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Grid dimensions below one
    #[error("grid dimensions must be positive, got {length}x{width}")]
    InvalidDimensions {
        /// Configured length
        length: u32,
        /// Configured width
        width: u32,
    },

    /// Weight factor negative or not finite
    #[error("weight factor `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Weight name
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Name that does not match any tile type
    #[error("unknown tile type `{0}`")]
    UnknownTileType(String),

    /// Seed too large to store in a TOML integer
    #[error("seed {0} exceeds the largest storable seed {max}", max = i64::MAX)]
    SeedOutOfRange(u64),
}

/// Result type alias for Verdant operations.
pub type VerdantResult<T> = Result<T, VerdantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::Unregistered(TileType::Plains);
        assert_eq!(err.to_string(), "tile type Plains is not registered in the catalog");

        let err = GenerationError::CellAlreadyAssigned {
            coord: GridCoord::new(1, 2),
            existing: TileType::Forest,
        };
        assert_eq!(err.to_string(), "cell (1, 2) already holds Forest");

        let err = ConfigError::SeedOutOfRange(u64::MAX);
        assert_eq!(
            err.to_string(),
            "seed 18446744073709551615 exceeds the largest storable seed 9223372036854775807"
        );
    }

    #[test]
    fn test_nested_conversion() {
        let err: GenerationError = RngError::Exhausted.into();
        assert_eq!(err, GenerationError::Rng(RngError::Exhausted));

        let top: VerdantError = err.into();
        assert!(matches!(top, VerdantError::Generation(_)));
    }
}
