use std::fmt;

/// Identifier of a generated level. Levels are stacked vertically, so the id
/// doubles as the level's depth index.
pub type LevelId = i32;

/// Grid position of a sector, including the level it lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorPosition {
    pub level: LevelId,
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    pub const fn new(level: LevelId, x: i32, y: i32) -> Self {
        Self { level, x, y }
    }

    /// Grid key of this position on its level.
    pub const fn key(self) -> GridKey {
        GridKey::new(self.x, self.y)
    }

    /// Position shifted by `(dx, dy)` on the same level.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.level, self.x + dx, self.y + dy)
    }
}

impl fmt::Display for SectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.level, self.x, self.y)
    }
}

/// Level-local cell key, displayed as `"x.y"`.
///
/// Ordered row-major (`y` first) so map iteration follows drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
}

impl GridKey {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for GridKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for GridKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.x, self.y)
    }
}

/// Inclusive rectangle of grid cells.
///
/// Used both for a level's native extent and for the drawing windows computed
/// by the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Single-cell bounds around `(x, y)`.
    pub const fn point(x: i32, y: i32) -> Self {
        Self::new(x, x, y, y)
    }

    /// Square window of `radius` cells around `(x, y)`.
    pub const fn around(x: i32, y: i32, radius: i32) -> Self {
        Self::new(x - radius, x + radius, y - radius, y + radius)
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn contains_bounds(&self, other: &GridBounds) -> bool {
        self.contains(other.min_x, other.min_y) && self.contains(other.max_x, other.max_y)
    }

    /// Number of cells minus one along X (zero for a single column).
    pub const fn span_x(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Number of cells minus one along Y (zero for a single row).
    pub const fn span_y(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Larger of the two spans.
    pub fn larger_span(&self) -> i32 {
        self.span_x().abs().max(self.span_y().abs())
    }

    /// Smallest bounds covering both rectangles.
    pub fn union(&self, other: &GridBounds) -> GridBounds {
        GridBounds::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }

    /// Extends the bounds to cover `(x, y)`.
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Bounds grown by `margin` cells on every side.
    pub const fn expanded(&self, margin: i32) -> GridBounds {
        GridBounds::new(
            self.min_x - margin,
            self.max_x + margin,
            self.min_y - margin,
            self.max_y + margin,
        )
    }

    /// Iterates all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridKey> + '_ {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| GridKey::new(x, y)))
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x[{}..={}] y[{}..={}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
