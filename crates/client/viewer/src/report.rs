//! Plain-text summary of one rendered frame.
use std::collections::BTreeMap;
use std::fmt::Write;

use map_core::{DrawList, InteractionOverlay, Viewport};

/// Number of draw commands per kind, in name order.
pub fn command_counts(canvas: &DrawList) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for command in canvas.commands() {
        let name: &'static str = command.into();
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

/// Summary printed by the viewer after a render.
pub fn frame_summary(
    viewport: &Viewport<'_>,
    canvas: &DrawList,
    overlay: &InteractionOverlay,
) -> String {
    let dimensions = &viewport.dimensions;
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "view:     {}", dimensions);
    let _ = writeln!(
        out,
        "canvas:   {}x{} px ({} cells shown)",
        dimensions.canvas_size.width,
        dimensions.canvas_size.height,
        overlay.regions().len()
    );
    let _ = writeln!(out, "commands: {}", canvas.len());
    for (name, count) in command_counts(canvas) {
        let _ = writeln!(out, "  {:<22}{}", name, count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_core::{Canvas, Color, DrawCommand, PixelPos, PixelSize};

    #[test]
    fn counts_by_kind() {
        let mut canvas = DrawList::new();
        canvas.begin(PixelSize::new(10.0, 10.0));
        let color = Color::rgb(0, 0, 0);
        for _ in 0..2 {
            canvas.draw(DrawCommand::FillCircle {
                center: PixelPos::new(1.0, 1.0),
                radius: 1.0,
                color,
            });
        }
        canvas.draw(DrawCommand::Line {
            from: PixelPos::new(0.0, 0.0),
            to: PixelPos::new(1.0, 1.0),
            color,
            line_width: 1.0,
        });

        let counts = command_counts(&canvas);
        assert_eq!(counts.get("fill_circle"), Some(&2));
        assert_eq!(counts.get("line"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
