use map_core::{
    CellStatus, ErrorSeverity, GridBounds, GridKey, Level, LevelSnapshot, MAX_WINDOW_SIZE,
    MapConfig, MapEngine, MapEnv, MapError, OracleError, PaletteTheme, PixelPos, PixelSize,
    Sector, SectorPosition, SectorRecord, SurfaceId, ViewMode, ViewportError, ViewportRequest,
    pixel_pos, scroll_to_center,
};

const LEVEL: i32 = 2;

/// 5x3 level, everything hidden except `(2,1)` scouted and `(3,1)` seen.
fn scenario() -> LevelSnapshot {
    let mut snapshot =
        LevelSnapshot::new(LEVEL, 0).with_level(Level::new(LEVEL, GridBounds::new(0, 4, 0, 2)));
    for y in 0..=2 {
        for x in 0..=4 {
            let status = match (x, y) {
                (2, 1) => CellStatus::VisitedScouted,
                (3, 1) => CellStatus::UnvisitedVisible,
                _ => CellStatus::UnvisitedInvisible,
            };
            snapshot.insert(SectorRecord::new(
                Sector::new(SectorPosition::new(LEVEL, x, y)),
                status,
            ));
        }
    }
    snapshot
}

fn player() -> SectorPosition {
    SectorPosition::new(LEVEL, 2, 1)
}

#[test]
fn default_mode_shows_only_known_sectors() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let viewport = engine.compute_viewport(&env, &request).unwrap();

    let keys: Vec<GridKey> = viewport.maps.visible.keys().copied().collect();
    assert_eq!(keys, vec![GridKey::new(2, 1), GridKey::new(3, 1)]);
    assert_eq!(viewport.maps.all.len(), 15);
    assert_eq!(viewport.dimensions.visible, GridBounds::new(2, 3, 1, 1));
    assert_eq!(viewport.dimensions.canvas_bounds, GridBounds::new(0, 4, 0, 2));
}

#[test]
fn default_mode_pixel_geometry() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let dimensions = engine.compute_viewport(&env, &request).unwrap().dimensions;

    // cell 10, padding 0.8, margin 1: step 18, inset 18
    assert_eq!(dimensions.map_size, PixelSize::new(65.0, 47.0));
    assert_eq!(dimensions.canvas_size, dimensions.map_size);
    assert_eq!(pixel_pos(&dimensions, 2, 1), PixelPos::new(18.0, 18.0));
    assert_eq!(pixel_pos(&dimensions, 3, 1), PixelPos::new(36.0, 18.0));
}

#[test]
fn wide_surface_centres_small_maps_horizontally() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::new(MapConfig::default().with_main_map_width(200.0));

    let request = ViewportRequest::new(SurfaceId::MainMap, player(), ViewMode::Default);
    let dimensions = engine.compute_viewport(&env, &request).unwrap().dimensions;

    assert_eq!(dimensions.canvas_size, PixelSize::new(200.0, 47.0));
    assert_eq!(pixel_pos(&dimensions, 2, 1), PixelPos::new(85.5, 18.0));
}

#[test]
fn minimap_never_smaller_than_its_minimum() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Minimap, player(), ViewMode::Centered)
        .with_window_size(3);
    let dimensions = engine.compute_viewport(&env, &request).unwrap().dimensions;
    assert!(dimensions.canvas_size.width >= 208.0);
    assert!(dimensions.canvas_size.height >= 208.0);
}

#[test]
fn centered_window_at_level_edge_gets_placeholders() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let edge = SectorPosition::new(LEVEL, 4, 1);
    let request =
        ViewportRequest::new(SurfaceId::Other, edge, ViewMode::Centered).with_window_size(3);
    let viewport = engine.compute_viewport(&env, &request).unwrap();
    let dimensions = viewport.dimensions;

    assert_eq!(dimensions.canvas_bounds, GridBounds::new(3, 5, 0, 2));
    assert_eq!(dimensions.canvas_bounds.max_x, dimensions.map_bounds.max_x + 1);
    assert_eq!(dimensions.visible, GridBounds::new(3, 5, 0, 2));

    for y in 0..=2 {
        let key = GridKey::new(5, y);
        assert!(viewport.maps.contains_visible(key));
        assert_eq!(viewport.maps.visible_sector(key), None);
        assert_eq!(viewport.maps.sector(key), None);
    }
    // every window cell has an entry, nothing outside it
    assert_eq!(viewport.maps.visible.len(), 9);
}

#[test]
fn even_window_sizes_round_up_around_the_player() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request =
        ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Centered).with_window_size(4);
    let canvas = engine
        .compute_viewport(&env, &request)
        .unwrap()
        .dimensions
        .canvas_bounds;

    assert_eq!(canvas, GridBounds::new(0, 4, -1, 3));
    assert_eq!(canvas.span_x() + 1, 5);
    assert_eq!(2 - canvas.min_x, canvas.max_x - 2);
    assert_eq!(1 - canvas.min_y, canvas.max_y - 1);
}

#[test]
fn oversized_windows_are_capped() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Centered)
        .with_window_size(4_000_000_000);
    let viewport = engine.compute_viewport(&env, &request).unwrap();

    let radius = (MAX_WINDOW_SIZE as i32 - 1) / 2;
    assert_eq!(
        viewport.dimensions.canvas_bounds,
        GridBounds::around(2, 1, radius)
    );
    assert_eq!(viewport.maps.visible.len(), 255 * 255);
}

#[test]
fn centered_window_defaults_to_level_span() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Centered);
    let canvas = engine
        .compute_viewport(&env, &request)
        .unwrap()
        .dimensions
        .canvas_bounds;
    // larger span is 4, rounded up to 5 cells
    assert_eq!(canvas, GridBounds::new(0, 4, -1, 3));
}

#[test]
fn visible_keys_stay_inside_visible_bounds() {
    let mut snapshot = scenario();
    snapshot.set_status(SectorPosition::new(LEVEL, 0, 0), CellStatus::VisitedCleared);
    snapshot.set_status(SectorPosition::new(LEVEL, 4, 2), CellStatus::RevealedByMap);
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    for (mode, size) in [
        (ViewMode::Default, None),
        (ViewMode::Centered, Some(1)),
        (ViewMode::Centered, Some(3)),
        (ViewMode::Centered, Some(9)),
    ] {
        let mut request = ViewportRequest::new(SurfaceId::Other, player(), mode);
        request.window_size = size;
        let viewport = engine.compute_viewport(&env, &request).unwrap();
        let dimensions = viewport.dimensions;

        assert!(dimensions.canvas_bounds.contains_bounds(&dimensions.visible));
        for key in viewport.maps.visible.keys() {
            assert!(dimensions.contains_visible(*key), "{key} outside {dimensions}");
        }
    }
}

#[test]
fn compute_is_deterministic() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request =
        ViewportRequest::new(SurfaceId::Minimap, player(), ViewMode::Centered).with_window_size(5);
    let first = engine.compute_viewport(&env, &request).unwrap();
    let second = engine.compute_viewport(&env, &request).unwrap();
    assert_eq!(first.dimensions, second.dimensions);
    assert_eq!(first.maps.visible, second.maps.visible);
}

#[test]
fn upgraded_sectors_stay_visible() {
    let mut snapshot = scenario();
    let theme = PaletteTheme::standard();
    let engine = MapEngine::default();
    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let seen = GridKey::new(3, 1);

    let before = {
        let env = MapEnv::from_snapshot(&snapshot, &theme);
        engine
            .compute_viewport(&env, &request)
            .unwrap()
            .maps
            .visible_sector(seen)
            .is_some()
    };
    assert!(before);

    for status in [
        CellStatus::VisitedUnscouted,
        CellStatus::VisitedScouted,
        CellStatus::VisitedCleared,
    ] {
        snapshot.set_status(SectorPosition::new(LEVEL, 3, 1), status);
        let env = MapEnv::from_snapshot(&snapshot, &theme);
        let viewport = engine.compute_viewport(&env, &request).unwrap();
        assert!(viewport.maps.visible_sector(seen).is_some(), "{status}");
    }
}

#[test]
fn reveal_override_shows_everything_and_resets_cleanly() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let mut engine = MapEngine::default();
    assert!(!engine.reveal_override());

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let baseline = engine.compute_viewport(&env, &request).unwrap();

    engine.set_reveal_override(true);
    let revealed = engine.compute_viewport(&env, &request).unwrap();
    assert_eq!(revealed.maps.visible.len(), 15);
    assert_eq!(revealed.dimensions.visible, GridBounds::new(0, 4, 0, 2));

    engine.set_reveal_override(false);
    let restored = engine.compute_viewport(&env, &request).unwrap();
    assert_eq!(restored.dimensions, baseline.dimensions);
    assert_eq!(restored.maps.visible, baseline.maps.visible);
}

#[test]
fn empty_level_collapses_to_player_cell() {
    let snapshot =
        LevelSnapshot::new(LEVEL, 0).with_level(Level::new(LEVEL, GridBounds::new(0, 4, 0, 2)));
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let viewport = engine.compute_viewport(&env, &request).unwrap();
    assert_eq!(viewport.dimensions.visible, GridBounds::point(2, 1));
    assert!(viewport.maps.visible.is_empty());
    assert!(viewport.dimensions.map_size.width > 0.0);
}

#[test]
fn unknown_level_is_a_fatal_error() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let nowhere = SectorPosition::new(99, 0, 0);
    let request = ViewportRequest::new(SurfaceId::Other, nowhere, ViewMode::Default);
    let error = engine.compute_viewport(&env, &request).unwrap_err();
    assert_eq!(error.severity(), ErrorSeverity::Fatal);
    assert_eq!(
        error,
        ViewportError::Oracle {
            position: nowhere,
            source: OracleError::LevelNotFound(99),
        }
    );

    let error = engine.render_as_text(&env, nowhere).unwrap_err();
    assert_eq!(error.error_code(), "ORACLE_LEVEL_NOT_FOUND");
}

#[test]
fn scroll_offset_centres_on_cell_and_clamps() {
    let snapshot = scenario();
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(&snapshot, &theme);
    let engine = MapEngine::default();

    let mut revealing = engine.clone();
    revealing.set_reveal_override(true);
    let request = ViewportRequest::new(SurfaceId::Other, player(), ViewMode::Default);
    let dimensions = revealing.compute_viewport(&env, &request).unwrap().dimensions;

    // 10 + 4 * 18 - 20 = 62
    let offset = scroll_to_center(
        &dimensions,
        SectorPosition::new(LEVEL, 4, 0),
        PixelSize::new(40.0, 40.0),
    );
    assert_eq!(offset, PixelPos::new(62.0, 0.0));
}
