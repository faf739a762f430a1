//! Generation configuration.
//!
//! Grid dimensions, seed, and weight factors. Configuration can be loaded
//! from and saved to a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use verdant_common::{ConfigError, GridSize};

use crate::rng::MAX_SEED;
use crate::selector::WeightFactors;

/// Configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Number of rows (outer scan axis)
    pub length: u32,
    /// Number of columns (inner scan axis)
    pub width: u32,
    /// World seed (0 = draw a fresh one)
    pub seed: u64,
    /// Per-biome affinity weights
    pub weights: WeightFactors,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            length: 10,
            width: 10,
            seed: 0,
            weights: WeightFactors::default(),
        }
    }
}

impl WorldGenConfig {
    /// Create a config for the given dimensions with default seed and weights.
    #[must_use]
    pub fn with_size(length: u32, width: u32) -> Self {
        Self {
            length,
            width,
            ..Default::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the weight factors.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightFactors) -> Self {
        self.weights = weights;
        self
    }

    /// Grid extent described by this config.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        GridSize::new(self.length, self.width)
    }

    /// Load configuration from a TOML file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, using defaults only when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Save configuration to a TOML file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        self.validate()?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check dimensions, seed range and weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size().is_valid() {
            return Err(ConfigError::InvalidDimensions {
                length: self.length,
                width: self.width,
            });
        }
        if self.seed > MAX_SEED {
            return Err(ConfigError::SeedOutOfRange(self.seed));
        }
        self.weights.validate()
    }
}
