//! Drawing window computation.
//!
//! Given a level, a view mode and the player position, the calculator works
//! out which grid cells are drawn (`visible`), which cells the window may
//! cover at most (`canvas`), and the pixel size of the resulting canvas.
use std::fmt;

use crate::config::{MapConfig, SurfaceId, ViewMode, ZoomParams};
use crate::env::MapEnv;
use crate::error::ViewportError;
use crate::geometry::{PixelPos, PixelSize};
use crate::state::{GridBounds, GridKey, LevelId, SectorPosition};
use crate::visibility::{SectorMaps, VisibilityResolver};

/// Geometry of one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub level: LevelId,
    pub mode: ViewMode,
    pub zoom: ZoomParams,
    /// Native bounds of the level.
    pub map_bounds: GridBounds,
    /// Largest window the render may cover.
    pub canvas_bounds: GridBounds,
    /// Cells actually drawn; always inside `canvas_bounds`.
    pub visible: GridBounds,
    /// Pixel size of the drawn content.
    pub map_size: PixelSize,
    /// Pixel size of the canvas, never below the surface minimum.
    pub canvas_size: PixelSize,
}

impl Dimensions {
    pub fn cell_size(&self) -> f64 {
        self.zoom.cell_size
    }

    pub fn contains_visible(&self, key: GridKey) -> bool {
        self.visible.contains(key.x, key.y)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {} {} visible {} canvas {} ({}x{} px)",
            self.level,
            self.mode,
            self.visible,
            self.canvas_bounds,
            self.canvas_size.width,
            self.canvas_size.height
        )
    }
}

/// Inputs of a viewport computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportRequest {
    pub surface: SurfaceId,
    /// Cell the view is centred on, normally the player.
    pub position: SectorPosition,
    pub mode: ViewMode,
    /// Window diameter in cells for centered mode. Even sizes are rounded up.
    pub window_size: Option<u32>,
}

impl ViewportRequest {
    pub fn new(surface: SurfaceId, position: SectorPosition, mode: ViewMode) -> Self {
        Self {
            surface,
            position,
            mode,
            window_size: None,
        }
    }

    #[must_use]
    pub fn with_window_size(mut self, size: u32) -> Self {
        self.window_size = Some(size);
        self
    }
}

/// Result of a viewport computation.
#[derive(Clone, Debug)]
pub struct Viewport<'a> {
    pub dimensions: Dimensions,
    pub maps: SectorMaps<'a>,
}

/// Largest centered window diameter, in cells.
pub const MAX_WINDOW_SIZE: u32 = 255;

/// Odd window diameter for centered mode.
///
/// Unset or zero sizes fall back to the level's larger span. Requested sizes
/// are capped at [`MAX_WINDOW_SIZE`].
pub fn window_diameter(requested: Option<u32>, level_span: i32) -> i32 {
    let size = match requested {
        Some(size) if size > 0 => i32::try_from(size.min(MAX_WINDOW_SIZE)).unwrap_or(1),
        _ => level_span.max(0),
    };
    if size % 2 == 0 { size + 1 } else { size }
}

/// Computes drawing windows and pixel dimensions.
#[derive(Clone, Debug)]
pub struct ViewportCalculator<'c> {
    config: &'c MapConfig,
}

impl<'c> ViewportCalculator<'c> {
    pub fn new(config: &'c MapConfig) -> Self {
        Self { config }
    }

    /// Builds the dimensions and sector maps for `request`.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`ViewportError`] if the requested level does not exist.
    pub fn compute<'a>(
        &self,
        env: &MapEnv<'a>,
        resolver: &VisibilityResolver,
        request: &ViewportRequest,
    ) -> Result<Viewport<'a>, ViewportError> {
        let position = request.position;
        let level = env
            .level(position.level)
            .map_err(|source| ViewportError::oracle(position, source))?;
        let zoom = self.config.zoom(request.mode);

        let map_bounds = level.bounds;
        let canvas_bounds = match request.mode {
            ViewMode::Default => map_bounds,
            ViewMode::Centered => {
                let size = window_diameter(request.window_size, map_bounds.larger_span());
                GridBounds::around(position.x, position.y, (size - 1) / 2)
            }
        };

        let (mut maps, shown) = resolver.build_sector_maps(env, level, request.mode);

        let mut visible = match (request.mode, shown) {
            (ViewMode::Centered, Some(shown)) => shown.union(&canvas_bounds),
            (ViewMode::Centered, None) => canvas_bounds,
            (ViewMode::Default, Some(shown)) => shown,
            (ViewMode::Default, None) => GridBounds::point(position.x, position.y),
        };
        visible = clamp_to(&visible, &canvas_bounds, position);

        maps.retain_within(&visible);
        if request.mode.is_centered() {
            for key in visible.cells() {
                maps.visible.entry(key).or_insert(None);
            }
        }

        let map_size = PixelSize::new(
            content_extent(visible.span_x(), &zoom),
            content_extent(visible.span_y(), &zoom),
        );
        let canvas_size = map_size.max(self.config.surface_minimum(request.surface));

        let dimensions = Dimensions {
            level: level.id,
            mode: request.mode,
            zoom,
            map_bounds,
            canvas_bounds,
            visible,
            map_size,
            canvas_size,
        };
        tracing::debug!(
            mode = %request.mode,
            position = %position,
            visible = %dimensions.visible,
            canvas = %dimensions.canvas_bounds,
            cells = maps.visible.len(),
            "viewport rebuilt"
        );

        Ok(Viewport { dimensions, maps })
    }
}

/// Pixel extent of `span + 1` cells including the margins on both sides.
fn content_extent(span: i32, zoom: &ZoomParams) -> f64 {
    (f64::from(span) + 1.5) * zoom.step() + 2.0 * zoom.cell_size * zoom.margin
}

/// Intersects `bounds` with `canvas`. An empty intersection collapses to the
/// cell nearest to `anchor` inside the canvas.
fn clamp_to(bounds: &GridBounds, canvas: &GridBounds, anchor: SectorPosition) -> GridBounds {
    let clamped = GridBounds::new(
        bounds.min_x.max(canvas.min_x),
        bounds.max_x.min(canvas.max_x),
        bounds.min_y.max(canvas.min_y),
        bounds.max_y.min(canvas.max_y),
    );
    if clamped.min_x <= clamped.max_x && clamped.min_y <= clamped.max_y {
        return clamped;
    }
    GridBounds::point(
        anchor.x.clamp(canvas.min_x, canvas.max_x),
        anchor.y.clamp(canvas.min_y, canvas.max_y),
    )
}

/// Scroll offset that centres a host scroll container of `viewport` pixels
/// on the cell at `position`. Offsets never go negative.
pub fn scroll_to_center(
    dimensions: &Dimensions,
    position: SectorPosition,
    viewport: PixelSize,
) -> PixelPos {
    let zoom = dimensions.zoom;
    let along = |coord: i32, min_visible: i32, extent: f64| {
        let cell = zoom.cell_size + f64::from(coord - min_visible) * zoom.step();
        (cell - extent / 2.0).max(0.0)
    };
    PixelPos::new(
        along(position.x, dimensions.visible.min_x, viewport.width),
        along(position.y, dimensions.visible.min_y, viewport.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_diameter_is_odd() {
        assert_eq!(window_diameter(Some(4), 10), 5);
        assert_eq!(window_diameter(Some(3), 10), 3);
        assert_eq!(window_diameter(None, 6), 7);
        assert_eq!(window_diameter(Some(0), 0), 1);
    }

    #[test]
    fn huge_window_requests_are_capped() {
        assert_eq!(window_diameter(Some(4_000_000_000), 10), 255);
        assert_eq!(window_diameter(Some(u32::MAX), 10), 255);
        assert_eq!(window_diameter(Some(MAX_WINDOW_SIZE + 1), 10), 255);
    }

    #[test]
    fn clamp_collapses_to_anchor() {
        let canvas = GridBounds::new(0, 4, 0, 2);
        let outside = GridBounds::new(6, 8, 0, 1);
        let anchor = SectorPosition::new(0, 2, 1);
        assert_eq!(clamp_to(&outside, &canvas, anchor), GridBounds::point(2, 1));
        assert_eq!(
            clamp_to(&GridBounds::new(-2, 2, 1, 5), &canvas, anchor),
            GridBounds::new(0, 2, 1, 2)
        );
    }

    #[test]
    fn content_extent_includes_margins() {
        let zoom = ZoomParams::new(10.0, 1.0, 1.0);
        // (0 + 1.5) * 20 + 20
        assert_eq!(content_extent(0, &zoom), 50.0);
    }
}
