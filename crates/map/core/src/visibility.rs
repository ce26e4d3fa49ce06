//! Fog-of-war decisions and per-render sector maps.
use std::collections::BTreeMap;

use crate::config::ViewMode;
use crate::env::MapEnv;
use crate::state::{CellStatus, GridBounds, GridKey, Level, Sector, SectorPosition};

/// Cells collected for one render call.
///
/// `visible` maps every cell that should appear in the render window to its
/// sector. In centered mode it also holds `None` placeholders for window
/// cells that lie outside the level. `all` maps every existing sector of the
/// level regardless of fog.
#[derive(Clone, Debug, Default)]
pub struct SectorMaps<'a> {
    pub visible: BTreeMap<GridKey, Option<&'a Sector>>,
    pub all: BTreeMap<GridKey, &'a Sector>,
}

impl<'a> SectorMaps<'a> {
    /// Sector shown at `key`, if any. Placeholders and hidden cells yield `None`.
    pub fn visible_sector(&self, key: GridKey) -> Option<&'a Sector> {
        self.visible.get(&key).copied().flatten()
    }

    pub fn contains_visible(&self, key: GridKey) -> bool {
        self.visible.contains_key(&key)
    }

    pub fn sector(&self, key: GridKey) -> Option<&'a Sector> {
        self.all.get(&key).copied()
    }

    /// Drops visible entries outside `bounds`.
    pub(crate) fn retain_within(&mut self, bounds: &GridBounds) {
        self.visible.retain(|key, _| bounds.contains(key.x, key.y));
    }
}

/// Decides which cells are shown, honouring the reveal override.
///
/// The override starts unset and only changes through
/// [`VisibilityResolver::set_reveal_override`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityResolver {
    reveal_all: bool,
}

impl VisibilityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reveal_override(&mut self, reveal_all: bool) {
        self.reveal_all = reveal_all;
    }

    pub fn reveal_override(&self) -> bool {
        self.reveal_all
    }

    /// An existing sector is visible under the override, otherwise once its
    /// status is above [`CellStatus::UnvisitedInvisible`].
    pub fn is_cell_visible(&self, sector: Option<&Sector>, status: Option<CellStatus>) -> bool {
        match (sector, status) {
            (None, _) => false,
            (Some(_), _) if self.reveal_all => true,
            (Some(_), Some(status)) => status.is_visible(),
            (Some(_), None) => false,
        }
    }

    /// Visibility of a sector looked up through the exploration oracle.
    pub fn is_visible_in(&self, env: &MapEnv<'_>, sector: Option<&Sector>) -> bool {
        self.is_cell_visible(sector, env.status(sector))
    }

    /// Scans the level's native bounds and collects the sector maps.
    ///
    /// Returns the maps together with the bounding box of the cells that were
    /// put into the visible map, or `None` when no cell qualified.
    pub fn build_sector_maps<'a>(
        &self,
        env: &MapEnv<'a>,
        level: &Level,
        mode: ViewMode,
    ) -> (SectorMaps<'a>, Option<GridBounds>) {
        let mut maps = SectorMaps::default();
        let mut shown: Option<GridBounds> = None;

        for key in level.bounds.cells() {
            let sector = env.sector(SectorPosition::new(level.id, key.x, key.y));
            if let Some(sector) = sector {
                maps.all.insert(key, sector);
            }

            // the centered window keeps empty cells too so it can stay on the player
            if mode.is_centered() || self.is_visible_in(env, sector) {
                maps.visible.insert(key, sector);
                match shown.as_mut() {
                    Some(bounds) => bounds.include(key.x, key.y),
                    None => shown = Some(GridBounds::point(key.x, key.y)),
                }
            }
        }

        (maps, shown)
    }
}
