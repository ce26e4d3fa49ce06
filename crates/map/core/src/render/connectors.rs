//! Movement lines between neighbouring sectors, with blocker marks.
use super::{Canvas, DrawCommand, RenderFrame, ShownCell};
use crate::env::ThemeKey;
use crate::geometry::PixelPos;
use crate::state::{CellStatus, Direction};

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    for cell in frame.shown_cells() {
        if cell.status.is_basic_info_visible() {
            draw_cell(frame, canvas, &cell);
        }
    }
}

fn draw_cell(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas, cell: &ShownCell<'_>) {
    let size = frame.cell_size();
    let padding = frame.padding();
    let middle = cell.center(size);
    let line_color = frame.color(ThemeKey::MapStrokeMovementlines);

    for direction in Direction::ALL {
        let (step_x, step_y) = direction.offset();
        if frame.env.sector(cell.sector.position.offset(step_x, step_y)).is_none() {
            continue;
        }
        let (dx, dy) = (f64::from(step_x), f64::from(step_y));

        canvas.draw(DrawCommand::Line {
            from: middle.offset(0.5 * size * dx, 0.5 * size * dy),
            to: middle.offset((0.5 + padding) * size * dx, (0.5 + padding) * size * dy),
            color: line_color,
            line_width: (size / 6.0).ceil(),
        });

        if let Some(blocker) = cell.sector.passages.blocker(direction) {
            let at = middle.offset(
                size * (1.0 + padding) / 2.0 * dx,
                size * (1.0 + padding) / 2.0 * dy,
            );
            let blocked = frame.env.movement().is_blocked(cell.sector, direction);
            if blocker.kind.is_hostile() {
                if blocked {
                    draw_ring(frame, canvas, at);
                }
            } else if blocker.kind.leaves_trace() {
                draw_cross(frame, canvas, at, blocked);
            }
        }
    }
}

/// Hostile group still holding the passage.
fn draw_ring(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas, at: PixelPos) {
    let size = frame.cell_size();
    canvas.draw(DrawCommand::StrokeCircle {
        center: at,
        radius: size * 0.2,
        color: frame.color(ThemeKey::MapStrokeGang),
        line_width: (size / 9.0).ceil(),
    });
}

/// Physical obstruction; cleared ones fade to the scouted fill colour.
fn draw_cross(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas, at: PixelPos, blocked: bool) {
    let size = frame.cell_size();
    let arm = (size / 5.0).max(3.0);
    let color = if blocked {
        frame.color(ThemeKey::MapStrokeBlocker)
    } else {
        frame.status_fill(CellStatus::VisitedScouted)
    };
    let line_width = (size / 9.0).ceil();

    canvas.draw(DrawCommand::Line {
        from: at.offset(-arm, -arm),
        to: at.offset(arm, arm),
        color,
        line_width,
    });
    canvas.draw(DrawCommand::Line {
        from: at.offset(arm, -arm),
        to: at.offset(-arm, arm),
        color,
        line_width,
    });
}
