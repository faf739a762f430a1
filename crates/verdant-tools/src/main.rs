//! # Verdant
//!
//! Command-line front end: loads a generation config and a tile manifest,
//! runs one generation, and prints the map with per-tile counts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verdant_common::TileType;
use verdant_worldgen::{GeneratedWorld, TileCatalog, TileManifest, WorldGenConfig, WorldGenerator};

use crate::cli::CliArgs;

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("verdant=info".parse()?))
        .init();

    let args = CliArgs::parse();
    info!("Verdant {}", env!("CARGO_PKG_VERSION"));

    let mut config = WorldGenConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    args.apply_overrides(&mut config);
    config.validate().context("invalid config")?;

    if let Some(path) = &args.save_config {
        config
            .save_to(path)
            .with_context(|| format!("saving config {}", path.display()))?;
    }

    let world = match &args.manifest {
        Some(path) => {
            let manifest = TileManifest::load_from(path)
                .with_context(|| format!("loading manifest {}", path.display()))?;
            let catalog = TileCatalog::from_supplier(&manifest)?;
            for (tile, asset) in catalog.iter() {
                debug!(%tile, asset = %asset.asset.display(), "catalog.entry");
            }
            generate(config, &catalog)?
        },
        None => {
            let catalog = TileCatalog::try_from_entries(TileType::ASSIGNABLE.map(|t| (t, ())))?;
            generate(config, &catalog)?
        },
    };

    print!("{}", world.grid);
    println!();
    for tile in TileType::ASSIGNABLE {
        let count = world.stats.tile_count(tile);
        if count > 0 {
            println!("{} {:<8} {count}", tile.glyph(), tile.display_name());
        }
    }
    println!("seed {}", world.seed);

    Ok(())
}

fn generate<D>(config: WorldGenConfig, catalog: &TileCatalog<D>) -> Result<GeneratedWorld> {
    let generator = WorldGenerator::new(config)?;
    let world = generator.generate(catalog, &mut ())?;
    Ok(world)
}
