//! Map viewer binary.
//!
//! Composition root that loads map content, runs the engine once for the
//! configured view and prints what a host would display: the frame summary,
//! the text dump of the level and its legend.
//!
//! All settings come from environment variables (see [`ViewerConfig`]); a
//! `.env` file in the working directory is honoured.
//!
//! # Examples
//!
//! ```bash
//! MAP_MODE=centered MAP_WINDOW_SIZE=5 MAP_VIEW_X=1 MAP_VIEW_Y=1 cargo run -p map-viewer
//! ```

mod config;
mod logging;
mod report;

use anyhow::{Context, Result};
use map_content::ContentFactory;
use map_core::{
    DrawList, InteractionOverlay, LevelOracle, MapEngine, MapEnv, PixelSize, RenderOptions,
    SectorPosition, SelectCallback, SurfaceId, ViewMode, ViewportRequest,
};

use crate::config::ViewerConfig;

/// Host scroll container the scroll offset is computed for.
const SCROLL_CONTAINER: PixelSize = PixelSize::new(320.0, 240.0);

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ViewerConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    run(&config)
}

fn run(config: &ViewerConfig) -> Result<()> {
    // 1. Load content
    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Loading content from {}", factory.data_dir().display());

    let mut map_config = factory.load_config().context("Failed to load map config")?;
    if let Some(width) = config.main_map_width {
        map_config = map_config.with_main_map_width(width);
    }
    let palette = factory.load_palette().context("Failed to load palette")?;
    let snapshot = factory
        .load_levels(&config.level_file)
        .with_context(|| format!("Failed to load level file '{}'", config.level_file))?;
    tracing::info!(
        sectors = snapshot.sector_count(),
        surface = snapshot.surface_level(),
        ground = snapshot.ground_level(),
        "Level snapshot loaded"
    );

    // 2. Engine
    let env = MapEnv::from_snapshot(&snapshot, &palette);
    let mut engine = MapEngine::new(map_config);
    engine.set_reveal_override(config.reveal_all);

    // The viewer draws no images; treat every icon as loaded.
    for icon in engine.pending_assets() {
        tracing::debug!(asset = %icon.asset_path(), "icon ready");
    }
    engine.mark_all_icons_ready();

    // 3. Render
    let level = config.level.unwrap_or_else(|| snapshot.ground_level());
    let position = SectorPosition::new(level, config.view_x, config.view_y);
    let surface = match config.mode {
        ViewMode::Default => SurfaceId::MainMap,
        ViewMode::Centered => SurfaceId::Minimap,
    };
    let mut request = ViewportRequest::new(surface, position, config.mode);
    request.window_size = config.window_size;
    let options = RenderOptions {
        daylight: config.daylight,
        player: Some(position),
    };

    let mut canvas = DrawList::new();
    let mut overlay = InteractionOverlay::new();
    let on_select: SelectCallback =
        Box::new(|selected| tracing::info!("Sector selected: {}", selected));
    let viewport = engine
        .rebuild_map(
            &env,
            &request,
            options,
            &mut canvas,
            Some((&mut overlay, Some(on_select))),
        )
        .with_context(|| format!("Failed to build map view at {}", position))?;

    // 4. Simulate a click on the player's cell
    let target = overlay.region(position).map(|region| region.rect.center());
    match target {
        Some(point) if overlay.click(point) => {
            tracing::debug!(selected = ?overlay.selected(), "player cell selected");
        }
        _ => tracing::warn!("Player cell {} is not shown on the map", position),
    }

    // 5. Report
    print!("{}", report::frame_summary(&viewport, &canvas, &overlay));
    let scroll = engine.scroll_to_center(&viewport.dimensions, position, SCROLL_CONTAINER);
    println!("scroll:   {}", scroll);
    println!();

    let text = engine
        .render_as_text(&env, position)
        .with_context(|| format!("Failed to dump level {}", level))?;
    print!("{}", text);
    println!();
    println!("{}", engine.legend_text());

    Ok(())
}
