//! In-memory oracle backed by plain sector records.
//!
//! Hosts that do not run the full exploration subsystem (tools, tests, the
//! viewer binary) describe a level as a list of [`SectorRecord`]s and hand the
//! resulting [`LevelSnapshot`] to the engine as every non-theme oracle.
use std::collections::{BTreeMap, BTreeSet};

use super::{
    DetectionOracle, DetectorKind, ExplorationOracle, HazardOracle, LevelOracle, MovementOracle,
};
use crate::state::{
    CellStatus, Direction, HazardKind, Level, LevelId, ResourceKind, Sector, SectorPosition,
    Vertical,
};

// ============================================================================
// Records
// ============================================================================

/// Hazard present in a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardState {
    pub kind: HazardKind,
    /// The player's gear does not protect against it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub active: bool,
}

/// A sector together with everything the player knows about it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorRecord {
    pub sector: Sector,
    pub status: CellStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scouted_locales: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_resources: Vec<ResourceKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_items: u32,
    /// Detectors whose range covers this sector.
    #[cfg_attr(feature = "serde", serde(default))]
    pub detected_by: Vec<DetectorKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hazard: Option<HazardState>,
    /// Vertical passages that exist but cannot currently be used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled_passages: Vec<Vertical>,
    /// Directions whose blocker is still in place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: BTreeSet<Direction>,
}

impl SectorRecord {
    pub fn new(sector: Sector, status: CellStatus) -> Self {
        Self {
            sector,
            status,
            scouted_locales: 0,
            known_resources: Vec::new(),
            known_items: 0,
            detected_by: Vec::new(),
            hazard: None,
            disabled_passages: Vec::new(),
            blocked: BTreeSet::new(),
        }
    }

    /// Scouted once the status reaches [`CellStatus::VisitedScouted`].
    pub fn is_scouted(&self) -> bool {
        self.status.is_at_least(CellStatus::VisitedScouted)
    }

    // ===== builder helpers =====

    #[must_use]
    pub fn with_scouted_locales(mut self, count: u32) -> Self {
        self.scouted_locales = count;
        self
    }

    #[must_use]
    pub fn with_known_resource(mut self, resource: ResourceKind) -> Self {
        if !self.known_resources.contains(&resource) {
            self.known_resources.push(resource);
        }
        self
    }

    #[must_use]
    pub fn with_known_items(mut self, count: u32) -> Self {
        self.known_items = count;
        self
    }

    #[must_use]
    pub fn with_detector(mut self, detector: DetectorKind) -> Self {
        if !self.detected_by.contains(&detector) {
            self.detected_by.push(detector);
        }
        self
    }

    #[must_use]
    pub fn with_hazard(mut self, kind: HazardKind, active: bool) -> Self {
        self.hazard = Some(HazardState { kind, active });
        self
    }

    #[must_use]
    pub fn with_disabled_passage(mut self, vertical: Vertical) -> Self {
        if !self.disabled_passages.contains(&vertical) {
            self.disabled_passages.push(vertical);
        }
        self
    }

    /// Marks the blocker toward `direction` as still in place.
    #[must_use]
    pub fn with_blocked(mut self, direction: Direction) -> Self {
        self.blocked.insert(direction);
        self
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Levels and sector records for one or more generated levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSnapshot {
    levels: BTreeMap<LevelId, Level>,
    records: BTreeMap<SectorPosition, SectorRecord>,
    surface_level: LevelId,
    ground_level: LevelId,
}

impl LevelSnapshot {
    pub fn new(surface_level: LevelId, ground_level: LevelId) -> Self {
        Self {
            levels: BTreeMap::new(),
            records: BTreeMap::new(),
            surface_level,
            ground_level,
        }
    }

    pub fn insert_level(&mut self, level: Level) {
        self.levels.insert(level.id, level);
    }

    /// Adds or replaces the record at the sector's position.
    pub fn insert(&mut self, record: SectorRecord) {
        self.records.insert(record.sector.position, record);
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.insert_level(level);
        self
    }

    #[must_use]
    pub fn with_record(mut self, record: SectorRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn record(&self, position: SectorPosition) -> Option<&SectorRecord> {
        self.records.get(&position)
    }

    pub fn record_mut(&mut self, position: SectorPosition) -> Option<&mut SectorRecord> {
        self.records.get_mut(&position)
    }

    /// Updates the exploration status of an existing sector.
    ///
    /// Returns `false` when no sector exists at `position`.
    pub fn set_status(&mut self, position: SectorPosition, status: CellStatus) -> bool {
        match self.records.get_mut(&position) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &SectorRecord> {
        self.records.values()
    }

    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.values()
    }

    pub fn sector_count(&self) -> usize {
        self.records.len()
    }

    fn record_of(&self, sector: &Sector) -> Option<&SectorRecord> {
        self.records.get(&sector.position)
    }
}

// ============================================================================
// Oracle implementations
// ============================================================================

impl LevelOracle for LevelSnapshot {
    fn level(&self, id: LevelId) -> Option<&Level> {
        self.levels.get(&id)
    }

    fn sector(&self, position: SectorPosition) -> Option<&Sector> {
        self.records.get(&position).map(|record| &record.sector)
    }

    fn surface_level(&self) -> LevelId {
        self.surface_level
    }

    fn ground_level(&self) -> LevelId {
        self.ground_level
    }
}

impl ExplorationOracle for LevelSnapshot {
    fn status(&self, sector: &Sector) -> CellStatus {
        self.record_of(sector)
            .map_or(CellStatus::UnvisitedInvisible, |record| record.status)
    }

    fn is_scouted(&self, sector: &Sector) -> bool {
        self.record_of(sector)
            .is_some_and(SectorRecord::is_scouted)
    }

    fn scouted_locales(&self, sector: &Sector) -> u32 {
        self.record_of(sector)
            .map_or(0, |record| record.scouted_locales)
    }

    fn known_resources(&self, sector: &Sector) -> Vec<ResourceKind> {
        self.record_of(sector)
            .map(|record| record.known_resources.clone())
            .unwrap_or_default()
    }

    fn known_items(&self, sector: &Sector) -> u32 {
        self.record_of(sector).map_or(0, |record| record.known_items)
    }
}

impl DetectionOracle for LevelSnapshot {
    fn is_in_detection_range(&self, sector: &Sector, detector: DetectorKind) -> bool {
        self.record_of(sector)
            .is_some_and(|record| record.detected_by.contains(&detector))
    }
}

impl HazardOracle for LevelSnapshot {
    fn has_hazard(&self, sector: &Sector) -> bool {
        self.record_of(sector)
            .is_some_and(|record| record.hazard.is_some())
    }

    fn is_hazard_active(&self, sector: &Sector) -> bool {
        self.record_of(sector)
            .and_then(|record| record.hazard)
            .is_some_and(|hazard| hazard.active)
    }

    fn main_hazard(&self, sector: &Sector) -> Option<HazardKind> {
        self.record_of(sector)
            .and_then(|record| record.hazard)
            .map(|hazard| hazard.kind)
    }
}

impl MovementOracle for LevelSnapshot {
    fn is_passage_available(&self, sector: &Sector, vertical: Vertical) -> bool {
        let exists = match vertical {
            Vertical::Up => sector.passages.up,
            Vertical::Down => sector.passages.down,
        };
        exists
            && !self
                .record_of(sector)
                .is_some_and(|record| record.disabled_passages.contains(&vertical))
    }

    fn is_blocked(&self, sector: &Sector, direction: Direction) -> bool {
        sector.passages.blocker(direction).is_some()
            && self
                .record_of(sector)
                .is_some_and(|record| record.blocked.contains(&direction))
    }
}
