//! Glyph images and their load state.
//!
//! The engine never loads images itself. It registers every icon it may draw
//! and the host reports which ones have finished loading. Drawing an icon that
//! is not ready yet is skipped; the next render tries again.
use std::collections::BTreeMap;
use std::fmt;

use strum::IntoEnumIterator;

/// Glyph images drawn on map cells.
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
#[strum(serialize_all = "kebab-case")]
pub enum GlyphId {
    Camp,
    Campable,
    PassageUp,
    PassageUpDisabled,
    PassageDown,
    PassageDownDisabled,
    Interest,
    Unknown,
    Workshop,
    Water,
    Beacon,
    Ingredient,
}

impl GlyphId {
    /// Base file name of the image, without the sunlit suffix.
    pub fn asset_name(self) -> &'static str {
        match self {
            GlyphId::Unknown => "map-unvisited",
            GlyphId::Camp => "map-camp",
            GlyphId::Campable => "map-campable",
            GlyphId::PassageUp => "map-passage-up",
            GlyphId::PassageUpDisabled => "map-passage-up-disabled",
            GlyphId::PassageDown => "map-passage-down",
            GlyphId::PassageDownDisabled => "map-passage-down-disabled",
            GlyphId::Interest => "map-interest",
            GlyphId::Workshop => "map-workshop",
            GlyphId::Water => "map-water",
            GlyphId::Beacon => "map-beacon",
            GlyphId::Ingredient => "map-ingredient",
        }
    }
}

/// One image: a glyph in its normal or sunlit variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconKey {
    pub glyph: GlyphId,
    pub sunlit: bool,
}

impl IconKey {
    pub const fn new(glyph: GlyphId, sunlit: bool) -> Self {
        Self { glyph, sunlit }
    }

    /// Path of the image relative to the asset root.
    pub fn asset_path(&self) -> String {
        let suffix = if self.sunlit { "-sunlit" } else { "" };
        format!("img/{}{}.png", self.glyph.asset_name(), suffix)
    }

    pub fn all() -> impl Iterator<Item = IconKey> {
        GlyphId::iter().flat_map(|glyph| [IconKey::new(glyph, false), IconKey::new(glyph, true)])
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sunlit {
            write!(f, "{}-sunlit", self.glyph)
        } else {
            write!(f, "{}", self.glyph)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IconState {
    Pending,
    Ready,
}

/// Load state of every registered icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconCache {
    states: BTreeMap<IconKey, IconState>,
}

impl IconCache {
    /// Registers every glyph in both variants as pending.
    pub fn new() -> Self {
        Self {
            states: IconKey::all().map(|key| (key, IconState::Pending)).collect(),
        }
    }

    /// Icons the host still has to load.
    pub fn pending_assets(&self) -> Vec<IconKey> {
        self.states
            .iter()
            .filter(|(_, state)| **state == IconState::Pending)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Marks an icon as loaded. Returns `false` for unknown or already ready keys.
    pub fn mark_ready(&mut self, key: IconKey) -> bool {
        match self.states.get_mut(&key) {
            Some(state) if *state == IconState::Pending => {
                *state = IconState::Ready;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_ready(&mut self) {
        for state in self.states.values_mut() {
            *state = IconState::Ready;
        }
    }

    pub fn is_ready(&self, key: IconKey) -> bool {
        self.states.get(&key) == Some(&IconState::Ready)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}
