//! Drawing target abstraction.
//!
//! Render passes emit [`DrawCommand`]s into a [`Canvas`]. Hosts forward them to
//! their real 2D backend; [`DrawList`] records them for tests and tooling.
use crate::env::Color;
use crate::geometry::{PixelPos, PixelRect, PixelSize};
use crate::icons::IconKey;

/// One primitive drawing operation.
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: Color,
    },
    StrokeRect {
        rect: PixelRect,
        color: Color,
        line_width: f64,
    },
    FillCircle {
        center: PixelPos,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: PixelPos,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    Line {
        from: PixelPos,
        to: PixelPos,
        color: Color,
        line_width: f64,
    },
    /// Square of side `side` centred on `center`, with rounded corners,
    /// rotated by `rotation` radians around its centre.
    FillRoundedSquare {
        center: PixelPos,
        side: f64,
        radius: f64,
        rotation: f64,
        color: Color,
    },
    Icon {
        icon: IconKey,
        at: PixelPos,
    },
}

/// Target surface for render passes.
pub trait Canvas {
    /// Resizes and clears the surface before a new frame.
    fn begin(&mut self, size: PixelSize);

    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that records every command in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    size: PixelSize,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn icons(&self) -> impl Iterator<Item = (IconKey, PixelPos)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Icon { icon, at } => Some((*icon, *at)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn begin(&mut self, size: PixelSize) {
        self.size = size;
        self.commands.clear();
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
