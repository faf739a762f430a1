//! Tile catalog: the registry of tile types available to the generator.
//!
//! The catalog maps each [`TileType`] to an opaque descriptor handle `D`
//! (a prefab, an asset path, a sprite index...). The generator only reads
//! which types are registered and never looks inside a descriptor.

use std::collections::BTreeMap;

use tracing::debug;
use verdant_common::{CatalogError, TileType};

/// Source of tile descriptors, such as an asset scanner or a manifest file.
pub trait CatalogSupplier {
    /// Descriptor handle type produced by this supplier.
    type Descriptor;
    /// Error raised while discovering descriptors.
    type Error: From<CatalogError>;

    /// Enumerate every available descriptor with its declared tile type.
    fn discover(&self) -> Result<Vec<(TileType, Self::Descriptor)>, Self::Error>;
}

/// Mapping from tile type to descriptor handle.
///
/// Entries are kept ordered by tile type so uniform draws over the catalog
/// are reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct TileCatalog<D> {
    entries: BTreeMap<TileType, D>,
}

impl<D> Default for TileCatalog<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> TileCatalog<D> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a catalog from everything a supplier discovers.
    pub fn from_supplier<S>(supplier: &S) -> Result<Self, S::Error>
    where
        S: CatalogSupplier<Descriptor = D>,
    {
        let entries = supplier.discover()?;
        Ok(Self::try_from_entries(entries)?)
    }

    /// Build a catalog from explicit entries, stopping at the first rejected
    /// one.
    pub fn try_from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (TileType, D)>,
    {
        let mut catalog = Self::new();
        for (tile, descriptor) in entries {
            catalog.register(tile, descriptor)?;
        }
        Ok(catalog)
    }

    /// Register a descriptor for a tile type.
    ///
    /// Fails for `Empty` and for a type that is already registered.
    pub fn register(&mut self, tile: TileType, descriptor: D) -> Result<(), CatalogError> {
        if tile.is_empty() {
            return Err(CatalogError::EmptyTile);
        }
        if self.entries.contains_key(&tile) {
            return Err(CatalogError::Duplicate(tile));
        }
        debug!(%tile, "catalog.register");
        self.entries.insert(tile, descriptor);
        Ok(())
    }

    /// Look up the descriptor for a tile type.
    pub fn get(&self, tile: TileType) -> Result<&D, CatalogError> {
        self.entries
            .get(&tile)
            .ok_or(CatalogError::Unregistered(tile))
    }

    /// Require that a tile type is registered.
    pub fn require(&self, tile: TileType) -> Result<(), CatalogError> {
        self.get(tile).map(|_| ())
    }

    /// Check if a tile type is registered.
    #[must_use]
    pub fn contains(&self, tile: TileType) -> bool {
        self.entries.contains_key(&tile)
    }

    /// Number of registered tile types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tile types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tile types in catalog order.
    pub fn tile_types(&self) -> impl Iterator<Item = TileType> + '_ {
        self.entries.keys().copied()
    }

    /// Registered tile types and their descriptors, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (TileType, &D)> + '_ {
        self.entries.iter().map(|(tile, d)| (*tile, d))
    }
}
