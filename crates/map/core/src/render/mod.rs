//! Layered map compositing.
//!
//! A render is a fixed sequence of passes over one [`Viewport`]. Every pass
//! is an independent function of the same [`RenderFrame`]; passes only read
//! world data and emit draw commands.
mod background;
mod beacons;
mod canvas;
mod connectors;
mod districts;
mod glyphs;
mod grid;
mod marker;
mod resources;
mod sectors;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use glyphs::{GLYPH_RULES, GlyphFacts, GlyphKind, GlyphRule, select_glyph};
pub use resources::{MAP_RESOURCES, ResourceAvailability, ResourceMark, resource_marks};

use crate::config::MapConfig;
use crate::env::{Color, MapEnv, ThemeKey};
use crate::geometry::{PixelPos, pixel_pos};
use crate::icons::IconCache;
use crate::state::{CellStatus, GridKey, Sector, SectorPosition};
use crate::viewport::{Dimensions, Viewport};
use crate::visibility::{SectorMaps, VisibilityResolver};

/// Per-render display settings supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Daylight theme; also selects the sunlit glyph images.
    pub daylight: bool,
    /// Player position, for the position marker.
    pub player: Option<SectorPosition>,
}

/// A cell that passes the visibility rule inside the render window.
#[derive(Clone, Copy, Debug)]
pub struct ShownCell<'a> {
    pub sector: &'a Sector,
    pub status: CellStatus,
    pub key: GridKey,
    /// Top-left pixel of the cell.
    pub origin: PixelPos,
}

impl ShownCell<'_> {
    pub fn center(&self, cell_size: f64) -> PixelPos {
        self.origin.offset(cell_size / 2.0, cell_size / 2.0)
    }
}

/// Everything a render pass reads.
#[derive(Clone, Copy)]
pub struct RenderFrame<'f, 'a> {
    pub env: MapEnv<'a>,
    pub dimensions: &'f Dimensions,
    pub maps: &'f SectorMaps<'a>,
    pub config: &'f MapConfig,
    pub resolver: &'f VisibilityResolver,
    pub icons: &'f IconCache,
    pub options: RenderOptions,
}

impl<'f, 'a> RenderFrame<'f, 'a> {
    pub fn new(
        env: MapEnv<'a>,
        viewport: &'f Viewport<'a>,
        config: &'f MapConfig,
        resolver: &'f VisibilityResolver,
        icons: &'f IconCache,
        options: RenderOptions,
    ) -> Self {
        Self {
            env,
            dimensions: &viewport.dimensions,
            maps: &viewport.maps,
            config,
            resolver,
            icons,
            options,
        }
    }

    pub fn color(&self, key: ThemeKey) -> Color {
        self.env.theme().color(self.options.daylight, key)
    }

    pub fn cell_size(&self) -> f64 {
        self.dimensions.zoom.cell_size
    }

    pub fn padding(&self) -> f64 {
        self.dimensions.zoom.padding
    }

    pub fn is_centered(&self) -> bool {
        self.dimensions.mode.is_centered()
    }

    pub fn is_big_cell(&self) -> bool {
        self.config.is_big_cell(self.cell_size())
    }

    pub fn reveal_all(&self) -> bool {
        self.resolver.reveal_override()
    }

    pub fn is_surface_level(&self) -> bool {
        self.dimensions.level == self.env.levels().surface_level()
    }

    /// Fill colour for a status.
    pub fn status_fill(&self, status: CellStatus) -> Color {
        let key = match status {
            CellStatus::UnvisitedInvisible | CellStatus::UnvisitedVisible => {
                ThemeKey::MapFillSectorUnvisited
            }
            CellStatus::VisitedUnscouted | CellStatus::RevealedByMap => {
                ThemeKey::MapFillSectorUnscouted
            }
            CellStatus::VisitedScouted => ThemeKey::MapFillSectorScouted,
            CellStatus::VisitedCleared => ThemeKey::MapFillSectorCleared,
        };
        self.color(key)
    }

    /// Whether a sector of the level passes the visibility rule.
    pub fn is_showable(&self, sector: &Sector) -> bool {
        self.resolver.is_visible_in(&self.env, Some(sector))
    }

    /// Showable cells of the visible window, row by row.
    pub fn shown_cells(&self) -> Vec<ShownCell<'a>> {
        self.dimensions
            .visible
            .cells()
            .filter_map(|key| {
                let sector = self.maps.visible_sector(key)?;
                let status = self.env.exploration().status(sector);
                self.resolver
                    .is_cell_visible(Some(sector), Some(status))
                    .then(|| ShownCell {
                        sector,
                        status,
                        key,
                        origin: pixel_pos(self.dimensions, key.x, key.y),
                    })
            })
            .collect()
    }
}

/// Compositing passes in drawing order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum RenderPass {
    Background,
    Grid,
    Districts,
    Beacons,
    Connectors,
    Sectors,
    Glyphs,
    Resources,
    PlayerMarker,
}

impl RenderPass {
    pub fn draw(self, frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
        match self {
            RenderPass::Background => background::draw(frame, canvas),
            RenderPass::Grid => grid::draw(frame, canvas),
            RenderPass::Districts => districts::draw(frame, canvas),
            RenderPass::Beacons => beacons::draw(frame, canvas),
            RenderPass::Connectors => connectors::draw(frame, canvas),
            RenderPass::Sectors => sectors::draw(frame, canvas),
            RenderPass::Glyphs => glyphs::draw(frame, canvas),
            RenderPass::Resources => resources::draw(frame, canvas),
            RenderPass::PlayerMarker => marker::draw(frame, canvas),
        }
    }
}

/// Runs every pass in order on a freshly sized canvas.
pub fn render(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    use strum::IntoEnumIterator;

    canvas.begin(frame.dimensions.canvas_size);
    for pass in RenderPass::iter() {
        tracing::trace!(%pass, "render pass");
        pass.draw(frame, canvas);
    }
}
