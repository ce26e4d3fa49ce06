//! Viewer configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use map_core::{LevelId, MAX_WINDOW_SIZE, ViewMode};

/// Level file loaded when `MAP_LEVEL_FILE` is unset.
pub const DEFAULT_LEVEL_FILE: &str = "outskirts";

/// What to load and how to look at it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Content directory; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    pub level_file: String,
    /// Level to show; the ground level when unset.
    pub level: Option<LevelId>,
    pub view_x: i32,
    pub view_y: i32,
    pub mode: ViewMode,
    pub window_size: Option<u32>,
    pub reveal_all: bool,
    pub daylight: bool,
    /// Host container width for the main map surface.
    pub main_map_width: Option<f64>,
    pub session_id: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            level_file: DEFAULT_LEVEL_FILE.to_string(),
            level: None,
            view_x: 0,
            view_y: 0,
            mode: ViewMode::Default,
            window_size: None,
            reveal_all: false,
            daylight: false,
            main_map_width: None,
            session_id: None,
        }
    }
}

impl ViewerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAP_DATA_DIR` - Content directory (default: bundled data)
    /// - `MAP_LEVEL_FILE` - Level file name without extension (default: outskirts)
    /// - `MAP_LEVEL` - Level id to show (default: ground level)
    /// - `MAP_VIEW_X`, `MAP_VIEW_Y` - Player / view position (default: 0, 0)
    /// - `MAP_MODE` - `default` or `centered` (default: default)
    /// - `MAP_WINDOW_SIZE` - Centered window size in cells, 1 to 255 (default: level span)
    /// - `MAP_REVEAL` - Reveal every sector (default: false)
    /// - `MAP_DAYLIGHT` - Daylight theme (default: false)
    /// - `MAP_MAIN_WIDTH` - Main map container width in pixels (default: 0)
    /// - `MAP_SESSION_ID` - Session identifier for the log file (default: auto-generated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ViewerConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("MAP_DATA_DIR").map(PathBuf::from);
        if let Some(file) = lookup("MAP_LEVEL_FILE").filter(|file| !file.is_empty()) {
            config.level_file = file;
        }
        config.level = parse(&lookup, "MAP_LEVEL");

        if let Some(x) = parse(&lookup, "MAP_VIEW_X") {
            config.view_x = x;
        }
        if let Some(y) = parse(&lookup, "MAP_VIEW_Y") {
            config.view_y = y;
        }
        if let Some(mode) = parse(&lookup, "MAP_MODE") {
            config.mode = mode;
        }
        config.window_size =
            parse(&lookup, "MAP_WINDOW_SIZE").filter(|size| (1..=MAX_WINDOW_SIZE).contains(size));

        if let Some(reveal) = parse_bool(&lookup, "MAP_REVEAL") {
            config.reveal_all = reveal;
        }
        if let Some(daylight) = parse_bool(&lookup, "MAP_DAYLIGHT") {
            config.daylight = daylight;
        }
        config.main_map_width = parse::<f64>(&lookup, "MAP_MAIN_WIDTH").filter(|w| *w >= 0.0);

        config.session_id = lookup("MAP_SESSION_ID");

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ViewerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ViewerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ViewerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("MAP_DATA_DIR", "/srv/map"),
            ("MAP_LEVEL_FILE", "depths"),
            ("MAP_LEVEL", "3"),
            ("MAP_VIEW_X", "-2"),
            ("MAP_VIEW_Y", "5"),
            ("MAP_MODE", "Centered"),
            ("MAP_WINDOW_SIZE", "7"),
            ("MAP_REVEAL", "yes"),
            ("MAP_DAYLIGHT", "1"),
            ("MAP_MAIN_WIDTH", "640"),
            ("MAP_SESSION_ID", "demo"),
        ]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/map")));
        assert_eq!(config.level_file, "depths");
        assert_eq!(config.level, Some(3));
        assert_eq!((config.view_x, config.view_y), (-2, 5));
        assert_eq!(config.mode, ViewMode::Centered);
        assert_eq!(config.window_size, Some(7));
        assert!(config.reveal_all);
        assert!(config.daylight);
        assert_eq!(config.main_map_width, Some(640.0));
        assert_eq!(config.session_id.as_deref(), Some("demo"));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = config_from(&[
            ("MAP_MODE", "sideways"),
            ("MAP_REVEAL", "maybe"),
            ("MAP_MAIN_WIDTH", "-10"),
            ("MAP_VIEW_X", "x"),
            ("MAP_WINDOW_SIZE", "4000000000"),
        ]);
        assert_eq!(config.mode, ViewMode::Default);
        assert!(!config.reveal_all);
        assert_eq!(config.main_map_width, None);
        assert_eq!(config.view_x, 0);
        assert_eq!(config.window_size, None);
    }

    #[test]
    fn window_size_must_fit_the_centered_window() {
        assert_eq!(config_from(&[("MAP_WINDOW_SIZE", "0")]).window_size, None);
        assert_eq!(config_from(&[("MAP_WINDOW_SIZE", "255")]).window_size, Some(255));
        assert_eq!(config_from(&[("MAP_WINDOW_SIZE", "256")]).window_size, None);
    }
}
