//! Content glyph selection and placement.
//!
//! Each cell shows at most one glyph. The candidates are kept in
//! [`GLYPH_RULES`] in priority order and the first rule that applies wins.
use super::{Canvas, DrawCommand, RenderFrame, ShownCell};
use crate::env::{DetectorKind, MapEnv};
use crate::geometry::PixelPos;
use crate::icons::{GlyphId, IconKey};
use crate::state::{ImprovementKind, ResourceKind, Sector, Vertical};

/// What the glyph rules know about a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphFacts {
    pub scouted: bool,
    pub reveal_all: bool,
    pub supplies_detected: bool,
    pub ingredients_detected: bool,
    /// Water or food is known to be found here.
    pub knows_map_resources: bool,
    pub known_items: u32,
    pub clearable_workshop: bool,
    pub greenhouse: bool,
    pub camp: bool,
    pub camp_on_level: bool,
    pub can_have_camp: bool,
    pub unscouted_locales: u32,
    /// `Some(available)` when a passage up exists.
    pub passage_up: Option<bool>,
    /// `Some(available)` when a passage down exists.
    pub passage_down: Option<bool>,
    pub beacon: bool,
}

impl GlyphFacts {
    pub fn gather(
        env: &MapEnv<'_>,
        sector: &Sector,
        reveal_all: bool,
        camp_on_level: bool,
    ) -> Self {
        let exploration = env.exploration();
        let detection = env.detection();
        let movement = env.movement();
        let known = exploration.known_resources(sector);
        let passage = |exists: bool, vertical: Vertical| {
            exists.then(|| movement.is_passage_available(sector, vertical))
        };

        Self {
            scouted: exploration.is_scouted(sector),
            reveal_all,
            supplies_detected: detection.is_in_detection_range(sector, DetectorKind::Supplies),
            ingredients_detected: detection
                .is_in_detection_range(sector, DetectorKind::Ingredients),
            knows_map_resources: known.contains(&ResourceKind::Water)
                || known.contains(&ResourceKind::Food),
            known_items: exploration.known_items(sector),
            clearable_workshop: sector.has_clearable_workshop(),
            greenhouse: sector.improvements.has(ImprovementKind::Greenhouse),
            camp: sector.has_camp,
            camp_on_level,
            can_have_camp: sector.can_have_camp(),
            unscouted_locales: exploration.unscouted_locales(sector),
            passage_up: passage(sector.passages.up, Vertical::Up),
            passage_down: passage(sector.passages.down, Vertical::Down),
            beacon: sector.improvements.has(ImprovementKind::Beacon),
        }
    }

    /// Scouted, or everything is revealed.
    pub fn is_revealed(&self) -> bool {
        self.scouted || self.reveal_all
    }

    /// Resource badges may be drawn.
    pub fn shows_resource_icons(&self) -> bool {
        self.is_revealed() || self.supplies_detected
    }

    pub fn shows_ingredients(&self) -> bool {
        (self.is_revealed() || self.ingredients_detected) && self.known_items > 0
    }

    /// Nothing about the cell's contents is known.
    pub fn is_unknown(&self) -> bool {
        let shows_resources = self.shows_resource_icons() && self.knows_map_resources;
        !self.is_revealed() && !(shows_resources || self.shows_ingredients())
    }
}

/// Glyph categories in priority order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum GlyphKind {
    Unknown,
    Workshop,
    Greenhouse,
    Camp,
    Campable,
    Interest,
    PassageUp,
    PassageDown,
    Beacon,
    Ingredient,
}

impl GlyphKind {
    /// Image drawn for this glyph; passages pick their disabled variant when
    /// they cannot be used.
    pub fn image(self, facts: &GlyphFacts) -> GlyphId {
        match self {
            GlyphKind::Unknown => GlyphId::Unknown,
            GlyphKind::Workshop | GlyphKind::Greenhouse => GlyphId::Workshop,
            GlyphKind::Camp => GlyphId::Camp,
            GlyphKind::Campable => GlyphId::Campable,
            GlyphKind::Interest => GlyphId::Interest,
            GlyphKind::PassageUp if facts.passage_up == Some(true) => GlyphId::PassageUp,
            GlyphKind::PassageUp => GlyphId::PassageUpDisabled,
            GlyphKind::PassageDown if facts.passage_down == Some(true) => GlyphId::PassageDown,
            GlyphKind::PassageDown => GlyphId::PassageDownDisabled,
            GlyphKind::Beacon => GlyphId::Beacon,
            GlyphKind::Ingredient => GlyphId::Ingredient,
        }
    }
}

/// A glyph and the condition under which it is shown.
#[derive(Clone, Copy)]
pub struct GlyphRule {
    pub kind: GlyphKind,
    pub applies: fn(&GlyphFacts) -> bool,
}

impl std::fmt::Debug for GlyphRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GlyphRule").field(&self.kind).finish()
    }
}

pub const GLYPH_RULES: [GlyphRule; 10] = [
    GlyphRule {
        kind: GlyphKind::Unknown,
        applies: GlyphFacts::is_unknown,
    },
    GlyphRule {
        kind: GlyphKind::Workshop,
        applies: |facts| facts.clearable_workshop,
    },
    GlyphRule {
        kind: GlyphKind::Greenhouse,
        applies: |facts| facts.greenhouse,
    },
    GlyphRule {
        kind: GlyphKind::Camp,
        applies: |facts| facts.camp,
    },
    GlyphRule {
        kind: GlyphKind::Campable,
        applies: |facts| !facts.camp_on_level && facts.can_have_camp,
    },
    GlyphRule {
        kind: GlyphKind::Interest,
        applies: |facts| facts.unscouted_locales > 0,
    },
    GlyphRule {
        kind: GlyphKind::PassageUp,
        applies: |facts| facts.passage_up.is_some(),
    },
    GlyphRule {
        kind: GlyphKind::PassageDown,
        applies: |facts| facts.passage_down.is_some(),
    },
    GlyphRule {
        kind: GlyphKind::Beacon,
        applies: |facts| facts.beacon,
    },
    GlyphRule {
        kind: GlyphKind::Ingredient,
        applies: |facts| facts.known_items > 0,
    },
];

/// First glyph whose rule applies, if any.
pub fn select_glyph(facts: &GlyphFacts) -> Option<GlyphKind> {
    GLYPH_RULES
        .iter()
        .find(|rule| (rule.applies)(facts))
        .map(|rule| rule.kind)
}

/// Facts for a shown cell in this frame.
pub(super) fn facts_for(frame: &RenderFrame<'_, '_>, cell: &ShownCell<'_>) -> GlyphFacts {
    let camp_on_level = frame
        .env
        .level(frame.dimensions.level)
        .is_ok_and(|level| level.has_camp);
    GlyphFacts::gather(&frame.env, cell.sector, frame.reveal_all(), camp_on_level)
}

/// Top-left pixel of the glyph image.
///
/// Glyphs sit at the top of big cells to leave room for resource badges. The
/// fog glyph is always vertically centred.
pub(super) fn glyph_origin(
    frame: &RenderFrame<'_, '_>,
    cell: &ShownCell<'_>,
    kind: GlyphKind,
) -> PixelPos {
    let size = frame.cell_size();
    let icon = frame.config.icon_size;
    let x = cell.origin.x + (size - icon) / 2.0;
    let centered_y = cell.origin.y + size / 2.0 - icon / 2.0;
    let y = if kind != GlyphKind::Unknown && frame.is_big_cell() {
        cell.origin.y
    } else {
        centered_y
    };
    PixelPos::new(x, y)
}

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    for cell in frame.shown_cells() {
        let facts = facts_for(frame, &cell);
        let Some(kind) = select_glyph(&facts) else {
            continue;
        };
        let icon = IconKey::new(kind.image(&facts), frame.options.daylight);
        if !frame.icons.is_ready(icon) {
            tracing::trace!(%icon, key = %cell.key, "icon not loaded yet");
            continue;
        }
        canvas.draw(DrawCommand::Icon {
            icon,
            at: glyph_origin(frame, &cell, kind),
        });
    }
}
