//! Plain-text rendering of a level for logs and tests.
//!
//! One character per cell, covering the level bounds plus one cell of margin
//! on every side. Rows without any visible cell are left out.
use crate::env::MapEnv;
use crate::error::ViewportError;
use crate::state::{CellStatus, Sector, SectorPosition};
use crate::visibility::VisibilityResolver;

/// Meaning of the characters produced by [`render_as_text`].
pub const LEGEND: &str = "? = unvisited, 0 = visited, X = cleared, C = camp, U = passage up, D = passage down, ! = point of interest";

/// Character code for one cell.
pub fn sector_code(
    env: &MapEnv<'_>,
    resolver: &VisibilityResolver,
    sector: Option<&Sector>,
) -> char {
    let Some(sector) = sector else {
        return ' ';
    };
    if !resolver.is_visible_in(env, Some(sector)) {
        return ' ';
    }

    let status = env.exploration().status(sector);
    match status {
        CellStatus::UnvisitedVisible => return '?',
        _ if sector.has_camp => return 'C',
        CellStatus::VisitedUnscouted | CellStatus::RevealedByMap => return '0',
        _ => {}
    }

    if sector.passages.up {
        'U'
    } else if sector.passages.down {
        'D'
    } else if env.exploration().unscouted_locales(sector) > 0 {
        '!'
    } else {
        match status {
            CellStatus::VisitedScouted => '0',
            CellStatus::VisitedCleared => 'X',
            _ => '?',
        }
    }
}

/// Renders the level of `position` as text, one line per non-blank row.
///
/// # Errors
///
/// Returns a fatal [`ViewportError`] if the level does not exist.
pub fn render_as_text(
    env: &MapEnv<'_>,
    resolver: &VisibilityResolver,
    position: SectorPosition,
) -> Result<String, ViewportError> {
    let level = env
        .level(position.level)
        .map_err(|source| ViewportError::oracle(position, source))?;
    let bounds = level.bounds.expanded(1);

    let mut result = String::new();
    for y in bounds.min_y..=bounds.max_y {
        let row: String = (bounds.min_x..=bounds.max_x)
            .map(|x| sector_code(env, resolver, env.sector(SectorPosition::new(level.id, x, y))))
            .collect();
        if !row.trim().is_empty() {
            result.push_str(&row);
            result.push('\n');
        }
    }
    Ok(result)
}
