//! TOML tile manifest, a declarative [`CatalogSupplier`].
//!
//! ```toml
//! [[tiles]]
//! name = "forest_01"
//! tile_type = "forest"
//! asset = "prefabs/forest_01.glb"
//! tags = ["tile"]
//! ```
//!
//! Only entries tagged `tile` are registered; anything else in the manifest
//! (props, decorations) is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use verdant_common::{ConfigError, TileType, VerdantError};

use crate::catalog::CatalogSupplier;

/// Tag marking a manifest entry as a placeable tile.
pub const TILE_TAG: &str = "tile";

/// Descriptor handle produced by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileAsset {
    /// Asset name.
    pub name: String,
    /// Path of the visual asset, relative to the asset root.
    pub asset: PathBuf,
}

/// One declared asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Asset name.
    pub name: String,
    /// Declared tile type, by lowercase name.
    pub tile_type: String,
    /// Path of the visual asset.
    #[serde(default)]
    pub asset: PathBuf,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ManifestEntry {
    /// Whether the entry carries the tile tag.
    #[must_use]
    pub fn is_tile(&self) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(TILE_TAG))
    }
}

/// A list of declared assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileManifest {
    /// Declared entries, in file order.
    #[serde(default)]
    pub tiles: Vec<ManifestEntry>,
}

impl TileManifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a manifest file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let manifest: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(
            "Loaded manifest from {} ({} entries)",
            path.display(),
            manifest.tiles.len()
        );
        Ok(manifest)
    }
}

impl CatalogSupplier for TileManifest {
    type Descriptor = TileAsset;
    type Error = VerdantError;

    fn discover(&self) -> Result<Vec<(TileType, TileAsset)>, VerdantError> {
        let mut found = Vec::new();
        for entry in &self.tiles {
            if !entry.is_tile() {
                trace!(name = %entry.name, "manifest.skip_untagged");
                continue;
            }
            let tile: TileType = entry.tile_type.parse()?;
            debug!("{}", entry.name);
            found.push((
                tile,
                TileAsset {
                    name: entry.name.clone(),
                    asset: entry.asset.clone(),
                },
            ));
        }
        Ok(found)
    }
}
