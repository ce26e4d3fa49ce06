//! Colour lookup for map drawing.
use std::collections::BTreeMap;
use std::fmt;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default = "Color::opaque_alpha"))]
    pub a: u8,
}

impl Color {
    /// Drawn for palette keys the theme does not define.
    pub const MISSING: Self = Self::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[cfg(feature = "serde")]
    const fn opaque_alpha() -> u8 {
        255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Named colour slots used by the map.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ThemeKey {
    MapBackgroundSurface,
    MapBackgroundDefault,
    #[strum(serialize = "map_background_2_surface")]
    #[cfg_attr(feature = "serde", serde(rename = "map_background_2_surface"))]
    MapBackground2Surface,
    #[strum(serialize = "map_background_2_ground")]
    #[cfg_attr(feature = "serde", serde(rename = "map_background_2_ground"))]
    MapBackground2Ground,
    #[strum(serialize = "map_background_2_default")]
    #[cfg_attr(feature = "serde", serde(rename = "map_background_2_default"))]
    MapBackground2Default,
    MapStrokeGrid,
    MapStrokeSectorLit,
    MapStrokeMovementlines,
    MapStrokeGang,
    MapStrokeBlocker,
    MapStrokeSector,
    MapStrokeSectorSunlit,
    MapStrokeSectorCold,
    MapStrokeSectorDebris,
    MapStrokeSectorHazard,
    MapFillSectorUnvisited,
    MapFillSectorUnscouted,
    MapFillSectorScouted,
    MapFillSectorCleared,
    BorderHighlight,
    ResWater,
    ResFood,
    ResMetal,
    ResFuel,
    ResRubber,
}

/// Read-only colour source, keyed by time of day.
pub trait ThemeOracle: Send + Sync {
    fn color(&self, daylight: bool, key: ThemeKey) -> Color;
}

/// Day and night variants of one palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColor {
    pub day: Color,
    pub night: Color,
}

impl ThemeColor {
    pub const fn new(day: Color, night: Color) -> Self {
        Self { day, night }
    }

    /// Same colour regardless of time of day.
    pub const fn fixed(color: Color) -> Self {
        Self::new(color, color)
    }
}

/// Table-backed theme.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PaletteTheme {
    colors: BTreeMap<ThemeKey, ThemeColor>,
}

impl PaletteTheme {
    pub fn new(colors: BTreeMap<ThemeKey, ThemeColor>) -> Self {
        Self { colors }
    }

    pub fn insert(&mut self, key: ThemeKey, color: ThemeColor) {
        self.colors.insert(key, color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Built-in palette covering every [`ThemeKey`].
    pub fn standard() -> Self {
        use ThemeKey::*;
        let entries = [
            (MapBackgroundSurface, Color::rgb(0xd8, 0xd4, 0xc8), Color::rgb(0x2a, 0x2d, 0x33)),
            (MapBackgroundDefault, Color::rgb(0xc8, 0xc8, 0xc8), Color::rgb(0x20, 0x20, 0x20)),
            (MapBackground2Surface, Color::rgb(0xe6, 0xe2, 0xd6), Color::rgb(0x33, 0x37, 0x3d)),
            (MapBackground2Ground, Color::rgb(0xd2, 0xcc, 0xbc), Color::rgb(0x30, 0x2c, 0x28)),
            (MapBackground2Default, Color::rgb(0xd6, 0xd6, 0xd6), Color::rgb(0x2b, 0x2b, 0x2b)),
            (MapStrokeGrid, Color::rgb(0xbe, 0xbe, 0xbe), Color::rgb(0x28, 0x28, 0x28)),
            (MapStrokeSectorLit, Color::rgb(0xf0, 0xd8, 0x6c), Color::rgb(0xc8, 0xb0, 0x48)),
            (MapStrokeMovementlines, Color::rgb(0x9a, 0x9a, 0x9a), Color::rgb(0x55, 0x55, 0x55)),
            (MapStrokeGang, Color::rgb(0xc0, 0x30, 0x30), Color::rgb(0xd0, 0x40, 0x40)),
            (MapStrokeBlocker, Color::rgb(0xa0, 0x30, 0x30), Color::rgb(0xb8, 0x38, 0x38)),
            (MapStrokeSector, Color::rgb(0x70, 0x70, 0x70), Color::rgb(0x90, 0x90, 0x90)),
            (MapStrokeSectorSunlit, Color::rgb(0xf8, 0xe0, 0x60), Color::rgb(0xe8, 0xc8, 0x40)),
            (MapStrokeSectorCold, Color::rgb(0x6c, 0xb4, 0xe4), Color::rgb(0x58, 0xa0, 0xd0)),
            (MapStrokeSectorDebris, Color::rgb(0x8c, 0x74, 0x58), Color::rgb(0x9c, 0x84, 0x68)),
            (MapStrokeSectorHazard, Color::rgb(0xd8, 0x88, 0x20), Color::rgb(0xe0, 0x90, 0x28)),
            (MapFillSectorUnvisited, Color::rgb(0xa8, 0xa8, 0xa8), Color::rgb(0x44, 0x44, 0x44)),
            (MapFillSectorUnscouted, Color::rgb(0x88, 0x88, 0x88), Color::rgb(0x6a, 0x6a, 0x6a)),
            (MapFillSectorScouted, Color::rgb(0x5a, 0x5a, 0x5a), Color::rgb(0x9c, 0x9c, 0x9c)),
            (MapFillSectorCleared, Color::rgb(0x3c, 0x3c, 0x3c), Color::rgb(0xc4, 0xc4, 0xc4)),
            (BorderHighlight, Color::rgb(0x20, 0x20, 0x20), Color::rgb(0xf0, 0xf0, 0xf0)),
        ];

        let mut theme = Self::default();
        for (key, day, night) in entries {
            theme.insert(key, ThemeColor::new(day, night));
        }

        // Resource colours are global and ignore the time of day.
        theme.insert(ResWater, ThemeColor::fixed(Color::rgb(0x3c, 0x8c, 0xdc)));
        theme.insert(ResFood, ThemeColor::fixed(Color::rgb(0x6c, 0xb4, 0x3c)));
        theme.insert(ResMetal, ThemeColor::fixed(Color::rgb(0x9c, 0x9c, 0xa8)));
        theme.insert(ResFuel, ThemeColor::fixed(Color::rgb(0xc8, 0x78, 0x28)));
        theme.insert(ResRubber, ThemeColor::fixed(Color::rgb(0x50, 0x50, 0x50)));
        theme
    }
}

impl ThemeOracle for PaletteTheme {
    fn color(&self, daylight: bool, key: ThemeKey) -> Color {
        match self.colors.get(&key) {
            Some(entry) if daylight => entry.day,
            Some(entry) => entry.night,
            None => {
                tracing::warn!(%key, "palette has no entry, using fallback colour");
                Color::MISSING
            }
        }
    }
}
