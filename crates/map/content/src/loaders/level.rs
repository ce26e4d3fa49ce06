//! Level snapshot loader.
//!
//! A level file lists the generated levels and one record per sector with the
//! player's current knowledge of it.

use std::collections::BTreeSet;
use std::path::Path;

use map_core::{Level, LevelId, LevelSnapshot, SectorRecord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Level snapshot structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelFileRon {
    surface_level: LevelId,
    ground_level: LevelId,
    levels: Vec<Level>,
    #[serde(default)]
    sectors: Vec<SectorRecord>,
}

/// Loader for level snapshots from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level snapshot from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, on duplicate level ids, and on
    /// sectors that lie outside the bounds of their level.
    pub fn load(path: &Path) -> LoadResult<LevelSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level file {}: {}", path.display(), e))
    }

    /// Parse a level snapshot from RON text.
    pub fn parse(content: &str) -> LoadResult<LevelSnapshot> {
        let data: LevelFileRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let mut snapshot = LevelSnapshot::new(data.surface_level, data.ground_level);
        let mut seen = BTreeSet::new();
        for level in &data.levels {
            if !seen.insert(level.id) {
                anyhow::bail!("Level {} is defined twice", level.id);
            }
            snapshot.insert_level(level.clone());
        }

        for record in data.sectors {
            let position = record.sector.position;
            let level = data
                .levels
                .iter()
                .find(|level| level.id == position.level)
                .ok_or_else(|| anyhow::anyhow!("Sector {} is on an unknown level", position))?;
            if !level.bounds.contains(position.x, position.y) {
                anyhow::bail!("Sector {} lies outside level bounds {}", position, level.bounds);
            }
            if snapshot.record(position).is_some() {
                anyhow::bail!("Sector {} is defined twice", position);
            }
            snapshot.insert(record);
        }

        Ok(snapshot)
    }
}
