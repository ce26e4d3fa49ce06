//! Map viewport and visibility-culling engine.
//!
//! `map-core` turns per-sector exploration state into a drawable map: it
//! computes the window of grid cells to show and their pixel geometry
//! ([`viewport`], [`geometry`]), applies fog-of-war ([`visibility`]), runs the
//! layered render passes into a [`render::Canvas`], builds the matching pick
//! layer ([`overlay`]) and can dump a level as text ([`text_dump`]).
//!
//! World data is only ever read through the oracle traits in [`env`]. The
//! [`MapEngine`] ties everything together for hosts.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod icons;
pub mod overlay;
pub mod render;
pub mod state;
pub mod text_dump;
pub mod viewport;
pub mod visibility;

pub use config::{MapConfig, SurfaceId, SurfaceMinimums, ViewMode, ZoomParams};
pub use engine::MapEngine;
pub use env::{
    Color, DetectionOracle, DetectorKind, ExplorationOracle, HazardOracle, HazardState,
    LevelOracle, LevelSnapshot, MapEnv, MovementOracle, OracleError, PaletteTheme, SectorRecord,
    ThemeColor, ThemeKey, ThemeOracle,
};
pub use error::{ErrorSeverity, MapError, ViewportError};
pub use geometry::{PixelPos, PixelRect, PixelSize, pixel_center, pixel_pos, pixel_rect};
pub use icons::{GlyphId, IconCache, IconKey};
pub use overlay::{HitRegion, InteractionOverlay, SelectCallback};
pub use render::{Canvas, DrawCommand, DrawList, RenderOptions, RenderPass};
pub use state::{
    Blocker, BlockerKind, CellStatus, Direction, GridBounds, GridKey, HazardKind, ImprovementKind,
    Improvements, Level, LevelId, Passages, ResourceKind, Sector, SectorFeatures, SectorPosition,
    Vertical, Workshop,
};
pub use text_dump::{LEGEND, render_as_text};
pub use viewport::{
    Dimensions, MAX_WINDOW_SIZE, Viewport, ViewportCalculator, ViewportRequest, scroll_to_center,
};
pub use visibility::{SectorMaps, VisibilityResolver};
