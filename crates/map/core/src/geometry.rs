//! Grid cell to pixel conversion.
//!
//! [`pixel_pos`] is the single place where a cell's rectangle is computed.
//! Every render pass and every overlay hit region goes through it, so a
//! cell is drawn and picked at exactly the same pixels.
use std::fmt;

use crate::viewport::Dimensions;

/// Pixel coordinate on a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    pub fn max(self, other: PixelSize) -> PixelSize {
        PixelSize::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(origin: PixelPos, side: f64) -> Self {
        Self::new(origin.x, origin.y, side, side)
    }

    pub const fn origin(&self) -> PixelPos {
        PixelPos::new(self.x, self.y)
    }

    pub fn center(&self) -> PixelPos {
        PixelPos::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// next rectangle.
    pub fn contains(&self, point: PixelPos) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Rounds to one decimal, with halves rounded up.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Top-left pixel of cell `(x, y)`.
pub fn pixel_pos(dimensions: &Dimensions, x: i32, y: i32) -> PixelPos {
    pixel_pos_f(dimensions, f64::from(x), f64::from(y))
}

/// [`pixel_pos`] for fractional grid coordinates, used by the background
/// lattice which is offset by half a cell.
pub fn pixel_pos_f(dimensions: &Dimensions, x: f64, y: f64) -> PixelPos {
    let zoom = dimensions.zoom;
    let size = zoom.cell_size;
    let inset = size * zoom.margin + size * zoom.padding;
    let small_map_offset_x = ((dimensions.canvas_size.width - dimensions.map_size.width) / 2.0).max(0.0);

    PixelPos::new(
        round1(
            inset
                + (x - f64::from(dimensions.visible.min_x)) * zoom.step()
                + small_map_offset_x,
        ),
        round1(inset + (y - f64::from(dimensions.visible.min_y)) * zoom.step()),
    )
}

/// Centre pixel of cell `(x, y)`.
pub fn pixel_center(dimensions: &Dimensions, x: i32, y: i32) -> PixelPos {
    let half = dimensions.zoom.cell_size / 2.0;
    pixel_pos(dimensions, x, y).offset(half, half)
}

/// Rectangle covered by cell `(x, y)`.
pub fn pixel_rect(dimensions: &Dimensions, x: i32, y: i32) -> PixelRect {
    PixelRect::square(pixel_pos(dimensions, x, y), dimensions.zoom.cell_size)
}
