use std::f64::consts::FRAC_PI_4;

use map_core::{
    CellStatus, Color, DetectorKind, Dimensions, DrawCommand, DrawList, GridBounds, HazardKind,
    ImprovementKind, Level, LevelId, LevelSnapshot, MapEngine, MapEnv, PaletteTheme, PixelPos,
    PixelRect, RenderOptions, Sector, SectorFeatures, SectorPosition, SectorRecord, SurfaceId,
    ThemeKey, ThemeOracle, ViewMode, ViewportRequest, pixel_center, pixel_rect,
};

const LEVEL: LevelId = 1;
const OTHER_LEVEL: LevelId = 9;

fn at(x: i32, y: i32) -> SectorPosition {
    SectorPosition::new(LEVEL, x, y)
}

fn scouted(sector: Sector) -> SectorRecord {
    SectorRecord::new(sector, CellStatus::VisitedScouted)
}

fn early(x: i32, y: i32) -> Sector {
    Sector::new(at(x, y)).with_features(SectorFeatures::EARLY_ZONE)
}

fn level(surface: LevelId, bounds: GridBounds, records: Vec<SectorRecord>) -> LevelSnapshot {
    let mut snapshot =
        LevelSnapshot::new(surface, OTHER_LEVEL).with_level(Level::new(LEVEL, bounds));
    for record in records {
        snapshot.insert(record);
    }
    snapshot
}

/// Single-cell underground level.
fn single(record: SectorRecord) -> LevelSnapshot {
    level(OTHER_LEVEL, GridBounds::new(0, 0, 0, 0), vec![record])
}

fn draw(
    snapshot: &LevelSnapshot,
    request: ViewportRequest,
    options: RenderOptions,
) -> (Dimensions, DrawList) {
    let theme = PaletteTheme::standard();
    let env = MapEnv::from_snapshot(snapshot, &theme);
    let mut canvas = DrawList::new();
    let viewport = MapEngine::default()
        .rebuild_map(&env, &request, options, &mut canvas, None)
        .unwrap();
    (viewport.dimensions, canvas)
}

fn draw_at(
    snapshot: &LevelSnapshot,
    mode: ViewMode,
    options: RenderOptions,
) -> (Dimensions, DrawList) {
    draw(snapshot, ViewportRequest::new(SurfaceId::Other, at(0, 0), mode), options)
}

fn color(daylight: bool, key: ThemeKey) -> Color {
    PaletteTheme::standard().color(daylight, key)
}

fn filled_rects(canvas: &DrawList, wanted: Color) -> Vec<PixelRect> {
    canvas
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } if *color == wanted => Some(*rect),
            _ => None,
        })
        .collect()
}

/// Square of side `cell + 2 * width` around the cell at `(x, y)`.
fn border(dimensions: &Dimensions, x: i32, y: i32, width: f64) -> PixelRect {
    let cell = pixel_rect(dimensions, x, y);
    PixelRect::new(
        cell.x - width,
        cell.y - width,
        cell.width + 2.0 * width,
        cell.height + 2.0 * width,
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Districts
// ============================================================================

/// `(side, radius, rotation)` of the district blob centred on `(x, y)`.
fn blob(canvas: &DrawList, dimensions: &Dimensions, x: i32, y: i32) -> Option<(f64, f64, f64)> {
    let wanted = pixel_center(dimensions, x, y);
    canvas.commands().iter().find_map(|command| match command {
        DrawCommand::FillRoundedSquare {
            center,
            side,
            radius,
            rotation,
            ..
        } if *center == wanted => Some((*side, *radius, *rotation)),
        _ => None,
    })
}

fn assert_blob(found: Option<(f64, f64, f64)>, padding: f64, radius: f64, rotation: f64) {
    let (side, found_radius, found_rotation) = found.expect("district blob");
    let cell = 10.0;
    assert!(close(side, cell + 2.0 * cell * padding), "side {side}");
    assert!(close(found_radius, cell * radius), "radius {found_radius}");
    assert!(close(found_rotation, rotation), "rotation {found_rotation}");
}

#[test]
fn district_blobs_shrink_at_zone_edges() {
    let snapshot = level(
        OTHER_LEVEL,
        GridBounds::new(0, 2, 0, 0),
        vec![
            scouted(early(0, 0)),
            scouted(early(1, 0)),
            scouted(Sector::new(at(2, 0))),
        ],
    );
    let (dimensions, canvas) = draw_at(&snapshot, ViewMode::Default, RenderOptions::default());

    assert_blob(blob(&canvas, &dimensions, 0, 0), 2.25, 3.15, 0.0);
    assert_blob(blob(&canvas, &dimensions, 1, 0), 0.53, 0.75, 0.0);
    assert_eq!(blob(&canvas, &dimensions, 2, 0), None);

    let district = color(false, ThemeKey::MapBackground2Default);
    assert!(canvas.commands().iter().all(|command| match command {
        DrawCommand::FillRoundedSquare { color, .. } => *color == district,
        _ => true,
    }));
}

#[test]
fn barely_seen_district_cell_is_an_edge() {
    let snapshot = level(
        OTHER_LEVEL,
        GridBounds::new(0, 1, 0, 0),
        vec![
            scouted(early(0, 0)),
            SectorRecord::new(early(1, 0), CellStatus::UnvisitedVisible),
        ],
    );
    let (dimensions, canvas) = draw_at(&snapshot, ViewMode::Default, RenderOptions::default());

    assert_blob(blob(&canvas, &dimensions, 0, 0), 2.25, 3.15, 0.0);
    assert_blob(blob(&canvas, &dimensions, 1, 0), 0.53, 0.75, 0.0);
}

#[test]
fn diagonal_only_district_cells_are_turned() {
    let snapshot = level(
        OTHER_LEVEL,
        GridBounds::new(0, 1, 0, 1),
        vec![scouted(early(0, 0)), scouted(early(1, 1))],
    );
    let (dimensions, canvas) = draw_at(&snapshot, ViewMode::Default, RenderOptions::default());

    assert_blob(blob(&canvas, &dimensions, 0, 0), 2.25, 3.15, FRAC_PI_4);
    assert_blob(blob(&canvas, &dimensions, 1, 1), 2.25, 3.15, FRAC_PI_4);
}

#[test]
fn district_colour_follows_the_level_kind() {
    let snapshot = level(LEVEL, GridBounds::new(0, 0, 0, 0), vec![scouted(early(0, 0))]);
    let (_, canvas) = draw_at(&snapshot, ViewMode::Default, RenderOptions::default());

    let surface = color(false, ThemeKey::MapBackground2Surface);
    assert!(canvas.commands().iter().any(|command| matches!(
        command,
        DrawCommand::FillRoundedSquare { color, .. } if *color == surface
    )));
}

// ============================================================================
// Hazard and sunlit borders
// ============================================================================

#[test]
fn hazard_kinds_pick_their_border_colour() {
    for (kind, key) in [
        (HazardKind::Cold, ThemeKey::MapStrokeSectorCold),
        (HazardKind::Debris, ThemeKey::MapStrokeSectorDebris),
        (HazardKind::Radiation, ThemeKey::MapStrokeSectorHazard),
        (HazardKind::Flooded, ThemeKey::MapStrokeSectorHazard),
    ] {
        let snapshot = single(scouted(Sector::new(at(0, 0))).with_hazard(kind, false));
        let (dimensions, canvas) =
            draw_at(&snapshot, ViewMode::Default, RenderOptions::default());
        assert_eq!(
            filled_rects(&canvas, color(false, key)),
            vec![border(&dimensions, 0, 0, 1.0)],
            "{kind}"
        );
    }
}

#[test]
fn active_hazards_get_heavier_borders() {
    let cold = color(false, ThemeKey::MapStrokeSectorCold);
    for (mode, active, width) in [
        (ViewMode::Default, false, 1.0),
        (ViewMode::Default, true, 2.0),
        (ViewMode::Centered, false, 2.0),
        (ViewMode::Centered, true, 4.0),
    ] {
        let snapshot =
            single(scouted(Sector::new(at(0, 0))).with_hazard(HazardKind::Cold, active));
        let (dimensions, canvas) = draw_at(&snapshot, mode, RenderOptions::default());
        assert_eq!(
            filled_rects(&canvas, cold),
            vec![border(&dimensions, 0, 0, width)],
            "{mode} active={active}"
        );
    }
}

#[test]
fn hidden_hazard_has_no_border_until_detected() {
    let record = SectorRecord::new(Sector::new(at(0, 0)), CellStatus::UnvisitedVisible)
        .with_hazard(HazardKind::Cold, true);
    let cold = color(false, ThemeKey::MapStrokeSectorCold);

    let (_, canvas) = draw_at(&single(record.clone()), ViewMode::Default, RenderOptions::default());
    assert!(filled_rects(&canvas, cold).is_empty());

    let detected = record.with_detector(DetectorKind::Hazards);
    let (dimensions, canvas) =
        draw_at(&single(detected), ViewMode::Default, RenderOptions::default());
    assert_eq!(filled_rects(&canvas, cold), vec![border(&dimensions, 0, 0, 2.0)]);
}

#[test]
fn sunlit_border_is_skipped_on_the_surface_in_daylight() {
    let sunlit = || scouted(Sector::new(at(0, 0)).with_features(SectorFeatures::SUNLIT));
    let day = RenderOptions {
        daylight: true,
        player: None,
    };

    let surface = level(LEVEL, GridBounds::new(0, 0, 0, 0), vec![sunlit()]);
    let (_, canvas) = draw_at(&surface, ViewMode::Default, day);
    assert!(filled_rects(&canvas, color(true, ThemeKey::MapStrokeSectorSunlit)).is_empty());

    let (dimensions, canvas) = draw_at(&surface, ViewMode::Default, RenderOptions::default());
    assert_eq!(
        filled_rects(&canvas, color(false, ThemeKey::MapStrokeSectorSunlit)),
        vec![border(&dimensions, 0, 0, 2.0)]
    );

    let underground = single(sunlit());
    let (dimensions, canvas) = draw_at(&underground, ViewMode::Default, day);
    assert_eq!(
        filled_rects(&canvas, color(true, ThemeKey::MapStrokeSectorSunlit)),
        vec![border(&dimensions, 0, 0, 2.0)]
    );
}

#[test]
fn sunlit_border_splits_into_corners_next_to_a_hazard_border() {
    let record = scouted(Sector::new(at(0, 0)).with_features(SectorFeatures::SUNLIT))
        .with_hazard(HazardKind::Cold, false);
    let snapshot = single(record);
    let sunlit = color(false, ThemeKey::MapStrokeSectorSunlit);

    for (mode, hazard_width, corner_width) in [
        (ViewMode::Default, 1.0, 2.0),
        (ViewMode::Centered, 2.0, 4.0),
    ] {
        let (dimensions, canvas) = draw_at(&snapshot, mode, RenderOptions::default());
        let cell = pixel_rect(&dimensions, 0, 0);
        let half = cell.width / 2.0;
        let side = half + corner_width;

        assert_eq!(
            filled_rects(&canvas, color(false, ThemeKey::MapStrokeSectorCold)),
            vec![border(&dimensions, 0, 0, hazard_width)],
            "{mode}"
        );
        assert_eq!(
            filled_rects(&canvas, sunlit),
            vec![
                PixelRect::new(cell.x + half, cell.y - corner_width, side, side),
                PixelRect::new(cell.x - corner_width, cell.y + half, side, side),
            ],
            "{mode}"
        );
    }
}

// ============================================================================
// Beacons
// ============================================================================

fn beacon_rings(canvas: &DrawList) -> Vec<(PixelPos, f64, f64)> {
    let lit = color(false, ThemeKey::MapStrokeSectorLit);
    canvas
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                line_width,
            } if *color == lit => Some((*center, *radius, *line_width)),
            _ => None,
        })
        .collect()
}

#[test]
fn beacon_ring_scales_with_mode() {
    let snapshot = single(scouted(
        Sector::new(at(0, 0)).with_improvement(ImprovementKind::Beacon, 1),
    ));
    for (mode, cell, line_width) in [
        (ViewMode::Default, 10.0, 2.0),
        (ViewMode::Centered, 16.0, 4.0),
    ] {
        let (dimensions, canvas) = draw_at(&snapshot, mode, RenderOptions::default());
        // beacon radius 5 reaches (5 - 1) * 2 cells
        assert_eq!(
            beacon_rings(&canvas),
            vec![(pixel_center(&dimensions, 0, 0), cell * 8.0, line_width)],
            "{mode}"
        );
    }
}

#[test]
fn beacon_outside_the_window_still_rings() {
    let snapshot = level(
        OTHER_LEVEL,
        GridBounds::new(0, 2, 0, 0),
        vec![
            scouted(Sector::new(at(0, 0))),
            scouted(Sector::new(at(2, 0)).with_improvement(ImprovementKind::Beacon, 1)),
        ],
    );
    let request =
        ViewportRequest::new(SurfaceId::Other, at(0, 0), ViewMode::Centered).with_window_size(1);
    let (dimensions, canvas) = draw(&snapshot, request, RenderOptions::default());

    assert!(!dimensions.visible.contains(2, 0));
    assert_eq!(
        beacon_rings(&canvas),
        vec![(pixel_center(&dimensions, 2, 0), 128.0, 4.0)]
    );
}

#[test]
fn hidden_beacon_has_no_ring() {
    let snapshot = single(SectorRecord::new(
        Sector::new(at(0, 0)).with_improvement(ImprovementKind::Beacon, 1),
        CellStatus::UnvisitedInvisible,
    ));
    let (_, canvas) = draw_at(&snapshot, ViewMode::Default, RenderOptions::default());
    assert!(beacon_rings(&canvas).is_empty());
}

// ============================================================================
// Resource badges
// ============================================================================

fn water_collector() -> Sector {
    Sector::new(at(0, 0)).with_improvement(ImprovementKind::CollectorWater, 1)
}

#[test]
fn small_cells_show_badges_only_without_a_glyph() {
    let water = color(false, ThemeKey::ResWater);

    let (dimensions, canvas) = draw_at(
        &single(scouted(water_collector())),
        ViewMode::Default,
        RenderOptions::default(),
    );
    let cell = pixel_rect(&dimensions, 0, 0);
    assert_eq!(
        filled_rects(&canvas, water),
        vec![PixelRect::new(cell.x + 2.5, cell.y + 3.0, 5.0, 5.0)]
    );

    let (_, canvas) = draw_at(
        &single(scouted(water_collector().with_passage(false, true))),
        ViewMode::Default,
        RenderOptions::default(),
    );
    assert!(filled_rects(&canvas, water).is_empty());
}

#[test]
fn big_cells_show_badges_below_the_glyph() {
    let (dimensions, canvas) = draw_at(
        &single(scouted(water_collector().with_passage(false, true))),
        ViewMode::Centered,
        RenderOptions::default(),
    );
    let cell = pixel_rect(&dimensions, 0, 0);
    assert_eq!(
        filled_rects(&canvas, color(false, ThemeKey::ResWater)),
        vec![PixelRect::new(cell.x + 5.5, cell.y + 10.0, 5.0, 5.0)]
    );
}

#[test]
fn unscouted_cells_hide_badges_until_supplies_are_detected() {
    let water = color(false, ThemeKey::ResWater);
    let record = SectorRecord::new(water_collector(), CellStatus::VisitedUnscouted);

    let (_, canvas) = draw_at(&single(record.clone()), ViewMode::Centered, RenderOptions::default());
    assert!(filled_rects(&canvas, water).is_empty());

    let detected = record.with_detector(DetectorKind::Supplies);
    let (_, canvas) = draw_at(&single(detected), ViewMode::Centered, RenderOptions::default());
    assert_eq!(filled_rects(&canvas, water).len(), 1);
}
