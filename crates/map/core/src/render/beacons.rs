use super::{Canvas, DrawCommand, RenderFrame};
use crate::env::ThemeKey;
use crate::geometry::pixel_center;
use crate::state::ImprovementKind;

/// Rings around beacons. Every beacon on the level is considered, not only
/// those inside the window, since a ring can reach into it from outside.
pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let size = frame.cell_size();
    let reach = f64::from(frame.config.beacon_radius.saturating_sub(1));
    let color = frame.color(ThemeKey::MapStrokeSectorLit);
    let line_width = if frame.is_centered() { 4.0 } else { 2.0 };

    for (key, sector) in &frame.maps.all {
        if !sector.improvements.has(ImprovementKind::Beacon) || !frame.is_showable(sector) {
            continue;
        }
        canvas.draw(DrawCommand::StrokeCircle {
            center: pixel_center(frame.dimensions, key.x, key.y),
            radius: size * reach * 2.0,
            color,
            line_width,
        });
    }
}
