//! Tile type definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Terrain category assigned to a grid cell.
///
/// `Empty` is the "not yet assigned" sentinel. It never appears in a tile
/// catalog and is never counted as a neighbor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    /// Unassigned cell.
    #[default]
    Empty,
    /// Open grassland, the neutral filler between biomes.
    Plains,
    /// Dense tree coverage.
    Forest,
    /// Hot and dry sand.
    Desert,
    /// Open water body.
    Lake,
    /// High, rocky terrain.
    Mountain,
    /// Wet, low-lying ground.
    Swamp,
}

impl TileType {
    /// Every assignable tile type, in catalog order.
    pub const ASSIGNABLE: [Self; 6] = [
        Self::Plains,
        Self::Forest,
        Self::Desert,
        Self::Lake,
        Self::Mountain,
        Self::Swamp,
    ];

    /// Get the display name for this tile type.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Plains => "Plains",
            Self::Forest => "Forest",
            Self::Desert => "Desert",
            Self::Lake => "Lake",
            Self::Mountain => "Mountain",
            Self::Swamp => "Swamp",
        }
    }

    /// Single character used when printing a grid.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Plains => '_',
            Self::Forest => 'F',
            Self::Desert => 'D',
            Self::Lake => '~',
            Self::Mountain => '^',
            Self::Swamp => '%',
        }
    }

    /// Check if this is the unassigned sentinel.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TileType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plains" => Ok(Self::Plains),
            "forest" => Ok(Self::Forest),
            "desert" => Ok(Self::Desert),
            "lake" => Ok(Self::Lake),
            "mountain" => Ok(Self::Mountain),
            "swamp" => Ok(Self::Swamp),
            _ => Err(ConfigError::UnknownTileType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_type_display_names() {
        assert_eq!(TileType::Forest.display_name(), "Forest");
        assert_eq!(TileType::Desert.to_string(), "Desert");
        assert_eq!(TileType::Plains.to_string(), "Plains");
    }

    #[test]
    fn test_assignable_excludes_empty() {
        assert!(!TileType::ASSIGNABLE.contains(&TileType::Empty));
        assert_eq!(TileType::ASSIGNABLE.len(), 6);
    }

    #[test]
    fn test_ordering_follows_declaration() {
        let mut tiles = vec![TileType::Desert, TileType::Plains, TileType::Forest];
        tiles.sort();
        assert_eq!(tiles, vec![TileType::Plains, TileType::Forest, TileType::Desert]);
        assert!(TileType::Empty < TileType::Plains);
    }

    #[test]
    fn test_parse_tile_type() {
        assert_eq!("forest".parse::<TileType>().ok(), Some(TileType::Forest));
        assert_eq!(" Desert ".parse::<TileType>().ok(), Some(TileType::Desert));
        // The sentinel is never a valid declared tile.
        assert!("empty".parse::<TileType>().is_err());
        assert!("tundra".parse::<TileType>().is_err());
    }

    #[test]
    fn test_glyphs_unique() {
        let glyphs: std::collections::HashSet<_> =
            TileType::ASSIGNABLE.iter().map(|t| t.glyph()).collect();
        assert_eq!(glyphs.len(), TileType::ASSIGNABLE.len());
    }
}
