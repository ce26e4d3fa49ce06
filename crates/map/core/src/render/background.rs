use super::{Canvas, DrawCommand, RenderFrame};
use crate::env::ThemeKey;
use crate::geometry::PixelRect;

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let key = if frame.is_surface_level() {
        ThemeKey::MapBackgroundSurface
    } else {
        ThemeKey::MapBackgroundDefault
    };
    let size = frame.dimensions.canvas_size;
    canvas.draw(DrawCommand::FillRect {
        rect: PixelRect::new(0.0, 0.0, size.width, size.height),
        color: frame.color(key),
    });
}
