//! Map configuration loader.

use std::path::Path;

use map_core::MapConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for map configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their [`MapConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<MapConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MapConfig> {
        let config: MapConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map config TOML: {}", e))?;

        if config.default_zoom.cell_size <= 0.0 || config.centered_zoom.cell_size <= 0.0 {
            anyhow::bail!("Map config cell sizes must be positive");
        }
        if config.grid_size <= 0 {
            anyhow::bail!("Map config grid_size must be positive, got {}", config.grid_size);
        }

        Ok(config)
    }
}
