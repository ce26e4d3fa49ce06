//! Sector and level descriptors as handed out by the level oracle.
//!
//! These are immutable views from the renderer's point of view; the exploration
//! subsystem owns and mutates them between renders.
use std::collections::BTreeMap;

use bitflags::bitflags;

use super::{Direction, GridBounds, LevelId, SectorPosition};

/// A generated level and its native grid extent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub id: LevelId,
    pub bounds: GridBounds,
    /// Whether a camp has been built anywhere on this level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_camp: bool,
}

impl Level {
    pub fn new(id: LevelId, bounds: GridBounds) -> Self {
        Self {
            id,
            bounds,
            has_camp: false,
        }
    }

    #[must_use]
    pub fn with_camp(mut self) -> Self {
        self.has_camp = true;
        self
    }
}

bitflags! {
    /// Static features rolled when the level was generated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SectorFeatures: u8 {
        const CAN_HAVE_CAMP = 1 << 0;
        const SUNLIT        = 1 << 1;
        const EARLY_ZONE    = 1 << 2;
        const HAS_SPRING    = 1 << 3;
    }
}

/// Resources a sector can provide.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    Water,
    Food,
    Metal,
    Fuel,
    Rubber,
}

/// Player-built improvements that matter to the map.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImprovementKind {
    Beacon,
    Greenhouse,
    CollectorWater,
    CollectorFood,
}

/// Obstruction kinds that can sit on a connector between two sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BlockerKind {
    /// Hostile group holding the passage.
    Gang,
    Debris,
    Gap,
    Waste,
}

impl BlockerKind {
    /// Blocker manned by enemies rather than a physical obstruction.
    ///
    /// Hostile blockers vanish once defeated; physical ones leave a cleared
    /// mark behind.
    pub const fn is_hostile(self) -> bool {
        matches!(self, BlockerKind::Gang)
    }

    /// Whether the map keeps a trace of the blocker after it is cleared.
    pub const fn leaves_trace(self) -> bool {
        !self.is_hostile()
    }
}

/// Obstruction on the connector leaving a sector in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blocker {
    pub kind: BlockerKind,
}

impl Blocker {
    pub const fn new(kind: BlockerKind) -> Self {
        Self { kind }
    }
}

/// Dominant environmental hazard of a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HazardKind {
    Cold,
    Debris,
    Radiation,
    Poison,
    Flooded,
}

/// Workshop building found in a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workshop {
    /// The workshop is still occupied and can be cleared.
    pub is_clearable: bool,
}

/// Improvement counts for one sector.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Improvements(BTreeMap<ImprovementKind, u32>);

impl Improvements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: ImprovementKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn has(&self, kind: ImprovementKind) -> bool {
        self.count(kind) > 0
    }

    pub fn add(&mut self, kind: ImprovementKind, count: u32) {
        *self.0.entry(kind).or_default() += count;
    }
}

/// Passages leaving the sector: vertical exits and per-direction blockers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passages {
    #[cfg_attr(feature = "serde", serde(default))]
    pub up: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub down: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blockers: BTreeMap<Direction, Blocker>,
}

impl Passages {
    pub fn blocker(&self, direction: Direction) -> Option<Blocker> {
        self.blockers.get(&direction).copied()
    }
}

/// One grid cell of an explorable level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    pub position: SectorPosition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: SectorFeatures,
    /// Natural resource amounts collectable here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources_collectable: BTreeMap<ResourceKind, u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_camp: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passages: Passages,
    #[cfg_attr(feature = "serde", serde(default))]
    pub improvements: Improvements,
    #[cfg_attr(feature = "serde", serde(default))]
    pub workshop: Option<Workshop>,
    /// Number of points of interest (locales) in the sector.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_locales: u32,
}

impl Sector {
    pub fn new(position: SectorPosition) -> Self {
        Self {
            position,
            features: SectorFeatures::empty(),
            resources_collectable: BTreeMap::new(),
            has_camp: false,
            passages: Passages::default(),
            improvements: Improvements::new(),
            workshop: None,
            total_locales: 0,
        }
    }

    pub fn is_early_zone(&self) -> bool {
        self.features.contains(SectorFeatures::EARLY_ZONE)
    }

    pub fn is_sunlit(&self) -> bool {
        self.features.contains(SectorFeatures::SUNLIT)
    }

    pub fn can_have_camp(&self) -> bool {
        self.features.contains(SectorFeatures::CAN_HAVE_CAMP)
    }

    pub fn has_spring(&self) -> bool {
        self.features.contains(SectorFeatures::HAS_SPRING)
    }

    pub fn collectable(&self, resource: ResourceKind) -> u32 {
        self.resources_collectable
            .get(&resource)
            .copied()
            .unwrap_or(0)
    }

    /// Nodes of the connectivity graph (camps and level exits) are drawn round.
    pub fn is_graph_node(&self) -> bool {
        self.has_camp || self.passages.up || self.passages.down
    }

    pub fn has_clearable_workshop(&self) -> bool {
        self.workshop.is_some_and(|workshop| workshop.is_clearable)
    }

    // ===== builder helpers =====

    #[must_use]
    pub fn with_features(mut self, features: SectorFeatures) -> Self {
        self.features |= features;
        self
    }

    #[must_use]
    pub fn with_camp(mut self) -> Self {
        self.has_camp = true;
        self
    }

    #[must_use]
    pub fn with_passage(mut self, up: bool, down: bool) -> Self {
        self.passages.up |= up;
        self.passages.down |= down;
        self
    }

    #[must_use]
    pub fn with_blocker(mut self, direction: Direction, kind: BlockerKind) -> Self {
        self.passages.blockers.insert(direction, Blocker::new(kind));
        self
    }

    #[must_use]
    pub fn with_improvement(mut self, kind: ImprovementKind, count: u32) -> Self {
        self.improvements.add(kind, count);
        self
    }

    #[must_use]
    pub fn with_workshop(mut self, is_clearable: bool) -> Self {
        self.workshop = Some(Workshop { is_clearable });
        self
    }

    #[must_use]
    pub fn with_locales(mut self, total: u32) -> Self {
        self.total_locales = total;
        self
    }

    #[must_use]
    pub fn with_collectable(mut self, resource: ResourceKind, amount: u32) -> Self {
        self.resources_collectable.insert(resource, amount);
        self
    }
}
