//! Content factory for loading map content from a data directory.

use std::path::{Path, PathBuf};

use map_core::{LevelSnapshot, MapConfig, PaletteTheme};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult, PaletteLoader};

/// Content factory that loads all map content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── palette.ron
/// └── levels/
///     └── outskirts.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load map configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<MapConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(MapConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the theme palette from `palette.ron`.
    ///
    /// A missing file yields the standard palette.
    pub fn load_palette(&self) -> LoadResult<PaletteTheme> {
        let path = self.data_dir.join("palette.ron");
        if !path.exists() {
            return Ok(PaletteTheme::standard());
        }
        PaletteLoader::load(&path)
    }

    /// Load a level snapshot from `levels/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the level file (without `.ron` extension)
    pub fn load_levels(&self, name: &str) -> LoadResult<LevelSnapshot> {
        let path = self.data_dir.join("levels").join(format!("{}.ron", name));
        LevelLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
