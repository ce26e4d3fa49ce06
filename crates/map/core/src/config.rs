use crate::geometry::PixelSize;

/// Which of the two map layouts is being drawn.
///
/// `Default` sizes the viewport to the whole level; `Centered` is the fixed
/// window that follows the player (the minimap).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    Default,
    Centered,
}

impl ViewMode {
    pub const fn is_centered(self) -> bool {
        matches!(self, ViewMode::Centered)
    }
}

/// Cell geometry for one view mode, in pixels and cell-size multiples.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomParams {
    /// Side length of one cell in pixels.
    pub cell_size: f64,
    /// Gap between neighbouring cells, as a fraction of `cell_size`.
    pub padding: f64,
    /// Empty border around the whole map, as a multiple of `cell_size`.
    pub margin: f64,
}

impl ZoomParams {
    pub const DEFAULT: Self = Self::new(10.0, 0.8, 1.0);
    pub const CENTERED: Self = Self::new(16.0, 0.75, 0.5);

    pub const fn new(cell_size: f64, padding: f64, margin: f64) -> Self {
        Self {
            cell_size,
            padding,
            margin,
        }
    }

    /// Distance in pixels between the top-left corners of adjacent cells.
    pub fn step(&self) -> f64 {
        self.cell_size * (1.0 + self.padding)
    }
}

/// Identifies the drawing surface a viewport is computed for.
///
/// The surface only matters for its minimum pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SurfaceId {
    MainMap,
    Minimap,
    Other,
}

/// Minimum canvas sizes per surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceMinimums {
    pub minimap: PixelSize,
    /// Width of the host container of the main map.
    pub main_map_width: f64,
    pub main_map_height: f64,
}

impl Default for SurfaceMinimums {
    fn default() -> Self {
        Self {
            minimap: PixelSize::new(208.0, 208.0),
            main_map_width: 0.0,
            main_map_height: 10.0,
        }
    }
}

impl SurfaceMinimums {
    pub fn for_surface(&self, surface: SurfaceId) -> PixelSize {
        match surface {
            SurfaceId::MainMap => PixelSize::new(self.main_map_width, self.main_map_height),
            SurfaceId::Minimap => self.minimap,
            SurfaceId::Other => PixelSize::ZERO,
        }
    }
}

/// Map configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub default_zoom: ZoomParams,
    pub centered_zoom: ZoomParams,
    /// Spacing of the background lattice, in cells.
    pub grid_size: i32,
    /// Beacon reach in cells; the ring is drawn at `(radius - 1) * 2` cells.
    pub beacon_radius: u32,
    /// Side length of glyph images in pixels.
    pub icon_size: f64,
    pub surfaces: SurfaceMinimums,
}

impl MapConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: i32 = 10;
    pub const DEFAULT_BEACON_RADIUS: u32 = 5;
    pub const DEFAULT_ICON_SIZE: f64 = 10.0;

    pub fn new() -> Self {
        Self {
            default_zoom: ZoomParams::DEFAULT,
            centered_zoom: ZoomParams::CENTERED,
            grid_size: Self::DEFAULT_GRID_SIZE,
            beacon_radius: Self::DEFAULT_BEACON_RADIUS,
            icon_size: Self::DEFAULT_ICON_SIZE,
            surfaces: SurfaceMinimums::default(),
        }
    }

    #[must_use]
    pub fn with_main_map_width(mut self, width: f64) -> Self {
        self.surfaces.main_map_width = width;
        self
    }

    pub fn zoom(&self, mode: ViewMode) -> ZoomParams {
        match mode {
            ViewMode::Default => self.default_zoom,
            ViewMode::Centered => self.centered_zoom,
        }
    }

    pub fn cell_size(&self, mode: ViewMode) -> f64 {
        self.zoom(mode).cell_size
    }

    pub fn padding(&self, mode: ViewMode) -> f64 {
        self.zoom(mode).padding
    }

    pub fn margin(&self, mode: ViewMode) -> f64 {
        self.zoom(mode).margin
    }

    /// Big cells fit a glyph and a resource row at the same time.
    pub fn is_big_cell(&self, cell_size: f64) -> bool {
        cell_size >= self.centered_zoom.cell_size
    }

    pub fn surface_minimum(&self, surface: SurfaceId) -> PixelSize {
        self.surfaces.for_surface(surface)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
