//! # Verdant Worldgen
//!
//! Neighbor-weighted biome tile generation.
//!
//! Cells of a rectangular grid are visited in scan order. Each cell looks at
//! the tiles already placed around it and makes a weighted random choice, so
//! forests grow next to forests, deserts next to deserts, and plains fill the
//! gaps and separate the two.
//!
//! This crate handles:
//! - The tile catalog and catalog suppliers (including a TOML manifest)
//! - Seeded random sequences
//! - Grid state and neighbor surveys
//! - Weighted tile selection
//! - The generation scan and placement emission

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod config;
pub mod generator;
pub mod grid;
pub mod manifest;
pub mod rng;
pub mod selector;
pub mod survey;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::config::*;
    pub use crate::generator::*;
    pub use crate::grid::*;
    pub use crate::manifest::*;
    pub use crate::rng::*;
    pub use crate::selector::*;
    pub use crate::survey::*;
    pub use verdant_common::prelude::*;
}

pub use prelude::*;
