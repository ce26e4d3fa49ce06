//! Data-driven map content and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a map host needs:
//! - Level snapshots (levels, sectors and exploration state, via RON)
//! - Theme palettes (via RON)
//! - Map configuration (via TOML)
//!
//! Loaded content is handed to `map-core` as oracles and configuration; the
//! engine itself never touches the filesystem.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult, PaletteLoader};
