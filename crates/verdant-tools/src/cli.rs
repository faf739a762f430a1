//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use verdant_worldgen::{WorldGenConfig, MAX_SEED};

/// Verdant command-line arguments.
///
/// Values given here override settings loaded from the config file.
#[derive(Parser, Debug)]
#[command(name = "verdant", about = "Generate a neighbor-weighted biome map")]
pub struct CliArgs {
    /// Generation config (TOML). Defaults are used if the file is missing.
    #[arg(long, default_value = "verdant.toml")]
    pub config: PathBuf,

    /// Tile manifest (TOML). Without one, every built-in tile type is used.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// World seed (0 = random).
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    pub seed: Option<u64>,

    /// Grid length (rows).
    #[arg(long)]
    pub length: Option<u32>,

    /// Grid width (columns).
    #[arg(long)]
    pub width: Option<u32>,

    /// Forest weight factor.
    #[arg(long)]
    pub forest_weight: Option<f32>,

    /// Desert weight factor.
    #[arg(long)]
    pub desert_weight: Option<f32>,

    /// Plains weight factor.
    #[arg(long)]
    pub plains_weight: Option<f32>,

    /// Write the effective config back to this path.
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

impl CliArgs {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_overrides(&self, config: &mut WorldGenConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(w) = self.forest_weight {
            config.weights.forest = w;
        }
        if let Some(w) = self.desert_weight {
            config.weights.desert = w;
        }
        if let Some(w) = self.plains_weight {
            config.weights.plains = w;
        }
    }
}
