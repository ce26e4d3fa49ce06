//! Sector fill and hazard / sunlight borders.
use super::{Canvas, DrawCommand, RenderFrame, ShownCell};
use crate::env::{Color, DetectorKind, ThemeKey};
use crate::geometry::PixelRect;
use crate::state::HazardKind;

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    for cell in frame.shown_cells() {
        if shows_borders(frame, &cell) {
            draw_borders(frame, canvas, &cell);
        }
        draw_shape(frame, canvas, &cell, frame.status_fill(cell.status), frame.cell_size());
    }
}

fn shows_borders(frame: &RenderFrame<'_, '_>, cell: &ShownCell<'_>) -> bool {
    cell.status.is_basic_info_visible()
        || frame.reveal_all()
        || frame
            .env
            .detection()
            .is_in_detection_range(cell.sector, DetectorKind::Hazards)
}

/// Border colour for the sector's main hazard.
fn hazard_color(frame: &RenderFrame<'_, '_>, hazard: Option<HazardKind>) -> Color {
    let key = match hazard {
        Some(HazardKind::Cold) => ThemeKey::MapStrokeSectorCold,
        Some(HazardKind::Debris) => ThemeKey::MapStrokeSectorDebris,
        Some(_) => ThemeKey::MapStrokeSectorHazard,
        None => ThemeKey::MapStrokeSector,
    };
    frame.color(key)
}

fn draw_borders(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas, cell: &ShownCell<'_>) {
    let hazards = frame.env.hazards();
    // surface sectors in daylight are all sunlit
    let sunlit_is_distinctive = !frame.is_surface_level() || !frame.options.daylight;
    let has_hazard_border = hazards.has_hazard(cell.sector);
    let has_sunlit_border = cell.sector.is_sunlit() && sunlit_is_distinctive;

    if has_hazard_border {
        let color = hazard_color(frame, hazards.main_hazard(cell.sector));
        let affected = hazards.is_hazard_active(cell.sector);
        draw_border(frame, canvas, cell, color, affected, false);
    }

    if has_sunlit_border {
        let color = frame.color(ThemeKey::MapStrokeSectorSunlit);
        draw_border(frame, canvas, cell, color, true, has_hazard_border);
    }
}

/// Border width in pixels: heavier when the hazard affects the player and on
/// big cells.
fn border_width(affected: bool, big: bool) -> f64 {
    let width = if affected { 2.0 } else { 1.0 };
    if big { width * 2.0 } else { width }
}

fn draw_border(
    frame: &RenderFrame<'_, '_>,
    canvas: &mut dyn Canvas,
    cell: &ShownCell<'_>,
    color: Color,
    affected: bool,
    partial: bool,
) {
    let size = frame.cell_size();
    let p = border_width(affected, frame.is_big_cell());
    if partial {
        // top-right and bottom-left corners only
        let origin = cell.origin;
        let half = size / 2.0;
        canvas.draw(DrawCommand::FillRect {
            rect: PixelRect::new(origin.x + half, origin.y - p, half + p, half + p),
            color,
        });
        canvas.draw(DrawCommand::FillRect {
            rect: PixelRect::new(origin.x - p, origin.y + half, half + p, half + p),
            color,
        });
    } else {
        draw_shape(frame, canvas, cell, color, size + p * 2.0);
    }
}

/// Graph nodes (camps and level exits) are round, other sectors square.
fn draw_shape(
    frame: &RenderFrame<'_, '_>,
    canvas: &mut dyn Canvas,
    cell: &ShownCell<'_>,
    color: Color,
    side: f64,
) {
    let size = frame.cell_size();
    if cell.sector.is_graph_node() {
        canvas.draw(DrawCommand::FillCircle {
            center: cell.center(size),
            radius: side / 2.0 + 1.0,
            color,
        });
    } else {
        let inset = (side - size) / 2.0;
        canvas.draw(DrawCommand::FillRect {
            rect: PixelRect::new(cell.origin.x - inset, cell.origin.y - inset, side, side),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::border_width;

    #[test]
    fn border_width_doubles_on_big_cells() {
        assert_eq!(border_width(false, false), 1.0);
        assert_eq!(border_width(true, false), 2.0);
        assert_eq!(border_width(true, true), 4.0);
    }
}
