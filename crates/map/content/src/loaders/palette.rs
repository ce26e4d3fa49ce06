//! Theme palette loader.

use std::collections::BTreeMap;
use std::path::Path;

use map_core::{PaletteTheme, ThemeColor, ThemeKey};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Palette structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaletteRon {
    /// Start from the built-in palette and only override the listed keys.
    #[serde(default)]
    extends_standard: bool,
    colors: BTreeMap<ThemeKey, ThemeColor>,
}

/// Loader for theme palettes from RON files.
pub struct PaletteLoader;

impl PaletteLoader {
    /// Load a palette from a RON file.
    pub fn load(path: &Path) -> LoadResult<PaletteTheme> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a palette from RON text.
    ///
    /// Keys missing from a palette that does not extend the standard one are
    /// drawn with the fallback colour.
    pub fn parse(content: &str) -> LoadResult<PaletteTheme> {
        let data: PaletteRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse palette RON: {}", e))?;

        let mut theme = if data.extends_standard {
            PaletteTheme::standard()
        } else {
            PaletteTheme::default()
        };
        for (key, color) in data.colors {
            theme.insert(key, color);
        }

        Ok(theme)
    }
}
