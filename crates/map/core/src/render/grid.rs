//! Background lattice, one square every `grid_size` cells.
use super::{Canvas, DrawCommand, RenderFrame};
use crate::env::ThemeKey;
use crate::geometry::{PixelRect, pixel_pos_f};

const LINE_WIDTH: f64 = 2.0;

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let grid = frame.config.grid_size.max(1);
    let bounds = frame.dimensions.map_bounds;
    let cell_size = frame.cell_size();
    let side = cell_size * (1.0 + frame.padding()) * f64::from(grid);
    let color = frame.color(ThemeKey::MapStrokeGrid);

    let start_x = (bounds.min_x.div_euclid(grid) - 1) * grid;
    let end_x = (ceil_div(bounds.max_x, grid) + 2) * grid;
    let start_y = (bounds.min_y.div_euclid(grid) - 1) * grid;
    let end_y = (ceil_div(bounds.max_y, grid) + 1) * grid;

    // squares are anchored half a cell before the grid line
    let shift = f64::from(grid) - 0.5;
    for y in (start_y..=end_y).step_by(grid as usize) {
        for x in (start_x..=end_x).step_by(grid as usize) {
            let corner = pixel_pos_f(frame.dimensions, f64::from(x) - shift, f64::from(y) - shift);
            canvas.draw(DrawCommand::StrokeRect {
                rect: PixelRect::new(
                    corner.x - cell_size * 0.5 + 2.0,
                    corner.y - cell_size * 0.5 + 2.0,
                    side,
                    side,
                ),
                color,
                line_width: LINE_WIDTH,
            });
        }
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    -((-value).div_euclid(divisor))
}
