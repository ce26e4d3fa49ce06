use super::{Canvas, DrawCommand, RenderFrame};
use crate::env::ThemeKey;
use crate::geometry::pixel_center;

/// Ring around the player's sector when the player is on the rendered level.
pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let Some(player) = frame.options.player else {
        return;
    };
    if player.level != frame.dimensions.level {
        return;
    }
    canvas.draw(DrawCommand::StrokeCircle {
        center: pixel_center(frame.dimensions, player.x, player.y),
        radius: frame.cell_size(),
        color: frame.color(ThemeKey::BorderHighlight),
        line_width: if frame.is_centered() { 3.0 } else { 2.0 },
    });
}
