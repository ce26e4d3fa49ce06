//! Host-facing entry point.
//!
//! [`MapEngine`] owns the only state that outlives a render call: the reveal
//! override and the icon cache. Everything else (dimensions, sector maps) is
//! computed fresh per call, so one engine can serve several surfaces, and
//! independent engines keep independent override state.
use crate::config::MapConfig;
use crate::env::MapEnv;
use crate::error::ViewportError;
use crate::geometry::{PixelPos, PixelSize};
use crate::icons::{IconCache, IconKey};
use crate::overlay::{InteractionOverlay, SelectCallback};
use crate::render::{self, Canvas, RenderFrame, RenderOptions};
use crate::state::SectorPosition;
use crate::text_dump;
use crate::viewport::{
    Dimensions, Viewport, ViewportCalculator, ViewportRequest, scroll_to_center,
};
use crate::visibility::VisibilityResolver;

/// Map viewport, renderer and pick layer behind one API.
#[derive(Clone, Debug, Default)]
pub struct MapEngine {
    config: MapConfig,
    resolver: VisibilityResolver,
    icons: IconCache,
}

impl MapEngine {
    /// Creates an engine with the reveal override unset and every icon pending.
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            resolver: VisibilityResolver::new(),
            icons: IconCache::new(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn resolver(&self) -> &VisibilityResolver {
        &self.resolver
    }

    // ===== reveal override =====

    pub fn set_reveal_override(&mut self, reveal_all: bool) {
        if self.resolver.reveal_override() != reveal_all {
            tracing::info!(reveal_all, "map reveal override changed");
        }
        self.resolver.set_reveal_override(reveal_all);
    }

    pub fn reveal_override(&self) -> bool {
        self.resolver.reveal_override()
    }

    // ===== icons =====

    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    /// Icons the host has not reported as loaded yet.
    pub fn pending_assets(&self) -> Vec<IconKey> {
        self.icons.pending_assets()
    }

    pub fn mark_icon_ready(&mut self, key: IconKey) -> bool {
        self.icons.mark_ready(key)
    }

    pub fn mark_all_icons_ready(&mut self) {
        self.icons.mark_all_ready();
    }

    // ===== viewport & rendering =====

    /// Computes the drawing window and sector maps for `request`.
    ///
    /// # Errors
    ///
    /// Fails when the requested level was never generated.
    pub fn compute_viewport<'a>(
        &self,
        env: &MapEnv<'a>,
        request: &ViewportRequest,
    ) -> Result<Viewport<'a>, ViewportError> {
        ViewportCalculator::new(&self.config).compute(env, &self.resolver, request)
    }

    /// Draws `viewport` onto `canvas`.
    pub fn render(
        &self,
        env: &MapEnv<'_>,
        viewport: &Viewport<'_>,
        options: RenderOptions,
        canvas: &mut dyn Canvas,
    ) {
        let frame = RenderFrame::new(
            *env,
            viewport,
            &self.config,
            &self.resolver,
            &self.icons,
            options,
        );
        render::render(&frame, canvas);
    }

    /// Registers hit regions for `viewport` and returns the overlay generation.
    pub fn build_overlay(
        &self,
        env: &MapEnv<'_>,
        viewport: &Viewport<'_>,
        overlay: &mut InteractionOverlay,
        on_select: Option<SelectCallback>,
    ) -> u64 {
        overlay.rebuild(env, &self.resolver, viewport, on_select)
    }

    /// Moves the selection mark of `overlay` to `position`, or clears it.
    pub fn set_selection(
        &self,
        overlay: &mut InteractionOverlay,
        position: Option<SectorPosition>,
    ) {
        overlay.set_selected(position);
    }

    /// Computes the viewport, renders it and rebuilds the overlay in one go.
    ///
    /// # Errors
    ///
    /// Fails when the requested level was never generated; nothing is drawn
    /// in that case.
    pub fn rebuild_map<'a>(
        &self,
        env: &MapEnv<'a>,
        request: &ViewportRequest,
        options: RenderOptions,
        canvas: &mut dyn Canvas,
        overlay: Option<(&mut InteractionOverlay, Option<SelectCallback>)>,
    ) -> Result<Viewport<'a>, ViewportError> {
        tracing::info!(mode = %request.mode, position = %request.position, "rebuild map");
        let viewport = self.compute_viewport(env, request)?;
        self.render(env, &viewport, options, canvas);
        if let Some((overlay, on_select)) = overlay {
            self.build_overlay(env, &viewport, overlay, on_select);
        }
        Ok(viewport)
    }

    /// Scroll offset centring a host container of `viewport_size` on `position`.
    pub fn scroll_to_center(
        &self,
        dimensions: &Dimensions,
        position: SectorPosition,
        viewport_size: PixelSize,
    ) -> PixelPos {
        scroll_to_center(dimensions, position, viewport_size)
    }

    // ===== text =====

    /// Text dump of the level `position` is on.
    ///
    /// # Errors
    ///
    /// Fails when the level was never generated.
    pub fn render_as_text(
        &self,
        env: &MapEnv<'_>,
        position: SectorPosition,
    ) -> Result<String, ViewportError> {
        text_dump::render_as_text(env, &self.resolver, position)
    }

    pub fn legend_text(&self) -> &'static str {
        text_dump::LEGEND
    }
}
