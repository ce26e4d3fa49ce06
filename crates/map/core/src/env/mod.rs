//! Traits describing the read-only world data the map consumes.
//!
//! Oracles expose level geometry, exploration knowledge, detector coverage,
//! hazards, movement rules and colours. The [`MapEnv`] aggregate bundles them
//! so the viewport and render passes can pull what they need without hard
//! coupling to the game's exploration subsystem.
mod error;
mod snapshot;
mod theme;

use arrayvec::ArrayVec;

pub use error::OracleError;
pub use snapshot::{HazardState, LevelSnapshot, SectorRecord};
pub use theme::{Color, PaletteTheme, ThemeColor, ThemeKey, ThemeOracle};

use crate::state::{
    CellStatus, Direction, HazardKind, Level, LevelId, ResourceKind, Sector, SectorPosition,
    Vertical,
};

/// Existing planar neighbours of a sector, in [`Direction::ALL`] order.
pub type Neighbours<'a> = ArrayVec<(Direction, &'a Sector), 8>;

/// Level layout: which levels and sectors exist.
pub trait LevelOracle: Send + Sync {
    fn level(&self, id: LevelId) -> Option<&Level>;

    fn sector(&self, position: SectorPosition) -> Option<&Sector>;

    /// Level open to the sky. Its map uses the surface background.
    fn surface_level(&self) -> LevelId;

    /// Bottom-most level.
    fn ground_level(&self) -> LevelId;

    /// Planar neighbours of `sector` that exist on its level.
    fn neighbours(&self, sector: &Sector) -> Neighbours<'_> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let (dx, dy) = direction.offset();
                self.sector(sector.position.offset(dx, dy))
                    .map(|neighbour| (direction, neighbour))
            })
            .collect()
    }
}

/// What the player has learned about each sector.
pub trait ExplorationOracle: Send + Sync {
    fn status(&self, sector: &Sector) -> CellStatus;

    fn is_scouted(&self, sector: &Sector) -> bool;

    fn scouted_locales(&self, sector: &Sector) -> u32;

    /// Resources the player knows can be found here.
    fn known_resources(&self, sector: &Sector) -> Vec<ResourceKind>;

    /// Number of distinct ingredients known to be found here.
    fn known_items(&self, sector: &Sector) -> u32;

    fn unscouted_locales(&self, sector: &Sector) -> u32 {
        sector
            .total_locales
            .saturating_sub(self.scouted_locales(sector))
    }
}

/// Detector equipment the player may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DetectorKind {
    Hazards,
    Supplies,
    Ingredients,
}

/// Coverage of the player's detectors.
pub trait DetectionOracle: Send + Sync {
    fn is_in_detection_range(&self, sector: &Sector, detector: DetectorKind) -> bool;
}

/// Environmental hazards.
pub trait HazardOracle: Send + Sync {
    fn has_hazard(&self, sector: &Sector) -> bool;

    /// The hazard currently affects the player (not mitigated by gear).
    fn is_hazard_active(&self, sector: &Sector) -> bool;

    fn main_hazard(&self, sector: &Sector) -> Option<HazardKind>;
}

/// Reachability of passages and connectors.
pub trait MovementOracle: Send + Sync {
    fn is_passage_available(&self, sector: &Sector, vertical: Vertical) -> bool;

    /// The connector leaving `sector` toward `direction` is currently blocked.
    fn is_blocked(&self, sector: &Sector, direction: Direction) -> bool;
}

/// Aggregates the read-only oracles required by the viewport and renderer.
#[derive(Clone, Copy)]
pub struct MapEnv<'a> {
    levels: &'a dyn LevelOracle,
    exploration: &'a dyn ExplorationOracle,
    detection: &'a dyn DetectionOracle,
    hazards: &'a dyn HazardOracle,
    movement: &'a dyn MovementOracle,
    theme: &'a dyn ThemeOracle,
}

impl<'a> MapEnv<'a> {
    pub fn new(
        levels: &'a dyn LevelOracle,
        exploration: &'a dyn ExplorationOracle,
        detection: &'a dyn DetectionOracle,
        hazards: &'a dyn HazardOracle,
        movement: &'a dyn MovementOracle,
        theme: &'a dyn ThemeOracle,
    ) -> Self {
        Self {
            levels,
            exploration,
            detection,
            hazards,
            movement,
            theme,
        }
    }

    /// Uses one snapshot for every oracle except the theme.
    pub fn from_snapshot(snapshot: &'a LevelSnapshot, theme: &'a dyn ThemeOracle) -> Self {
        Self::new(snapshot, snapshot, snapshot, snapshot, snapshot, theme)
    }

    pub fn levels(&self) -> &'a dyn LevelOracle {
        self.levels
    }

    pub fn exploration(&self) -> &'a dyn ExplorationOracle {
        self.exploration
    }

    pub fn detection(&self) -> &'a dyn DetectionOracle {
        self.detection
    }

    pub fn hazards(&self) -> &'a dyn HazardOracle {
        self.hazards
    }

    pub fn movement(&self) -> &'a dyn MovementOracle {
        self.movement
    }

    pub fn theme(&self) -> &'a dyn ThemeOracle {
        self.theme
    }

    /// Looks up a level, treating a missing one as a fatal precondition failure.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::LevelNotFound` if the level was never generated.
    pub fn level(&self, id: LevelId) -> Result<&'a Level, OracleError> {
        self.levels.level(id).ok_or(OracleError::LevelNotFound(id))
    }

    pub fn sector(&self, position: SectorPosition) -> Option<&'a Sector> {
        self.levels.sector(position)
    }

    /// Exploration status of a possibly absent sector.
    pub fn status(&self, sector: Option<&Sector>) -> Option<CellStatus> {
        sector.map(|sector| self.exploration.status(sector))
    }
}

impl core::fmt::Debug for MapEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapEnv")
            .field("surface_level", &self.levels.surface_level())
            .field("ground_level", &self.levels.ground_level())
            .finish_non_exhaustive()
    }
}
