//! Plain data describing levels and sectors as the map sees them.
mod direction;
mod position;
mod sector;
mod status;

pub use direction::{Direction, Vertical};
pub use position::{GridBounds, GridKey, LevelId, SectorPosition};
pub use sector::{
    Blocker, BlockerKind, HazardKind, ImprovementKind, Improvements, Level, Passages,
    ResourceKind, Sector, SectorFeatures, Workshop,
};
pub use status::CellStatus;
