//! Resource badges along the bottom of a cell.
use super::glyphs::{facts_for, select_glyph};
use super::{Canvas, DrawCommand, RenderFrame, ShownCell};
use crate::env::ThemeKey;
use crate::geometry::{PixelPos, PixelRect};
use crate::state::{ImprovementKind, ResourceKind};

/// Resources shown on the map, left to right.
pub const MAP_RESOURCES: [ResourceKind; 2] = [ResourceKind::Water, ResourceKind::Food];

const BIG_MARK: f64 = 5.0;
const SMALL_MARK: f64 = 3.0;
const MARK_PADDING: f64 = 1.0;

/// One badge: a big mark for resources obtainable right here, a small one
/// for resources merely known to be collectable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceMark {
    pub resource: ResourceKind,
    pub direct: bool,
    pub rect: PixelRect,
}

/// Availability of one resource in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceAvailability {
    pub direct: bool,
    pub potential: bool,
}

/// Lays out the badges for a cell whose top-left pixel is `origin`.
///
/// Badges form one row centred horizontally on the cell, near the bottom of
/// big cells and around the middle of small ones.
pub fn resource_marks(
    origin: PixelPos,
    cell_size: f64,
    big: bool,
    availability: &[(ResourceKind, ResourceAvailability)],
) -> Vec<ResourceMark> {
    let mark_size = |available: &ResourceAvailability| {
        if available.direct {
            Some((BIG_MARK, -1.0))
        } else if available.potential {
            Some((SMALL_MARK, 0.0))
        } else {
            None
        }
    };

    let total: f64 = availability
        .iter()
        .filter_map(|(_, available)| mark_size(available))
        .map(|(size, _)| size + MARK_PADDING)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut x = origin.x + cell_size / 2.0 - (total - MARK_PADDING) / 2.0;
    let y = if big {
        origin.y + cell_size - 5.0
    } else {
        origin.y + cell_size / 2.0 - 1.0
    };

    let mut marks = Vec::with_capacity(availability.len());
    for (resource, available) in availability {
        let Some((size, y_offset)) = mark_size(available) else {
            continue;
        };
        marks.push(ResourceMark {
            resource: *resource,
            direct: available.direct,
            rect: PixelRect::new(x, y + y_offset, size, size),
        });
        x += size + MARK_PADDING;
    }
    marks
}

fn availability(
    cell: &ShownCell<'_>,
    known: &[ResourceKind],
) -> Vec<(ResourceKind, ResourceAvailability)> {
    let sector = cell.sector;
    MAP_RESOURCES
        .iter()
        .map(|&resource| {
            let direct = match resource {
                ResourceKind::Water => {
                    sector.improvements.has(ImprovementKind::CollectorWater) || sector.has_spring()
                }
                ResourceKind::Food => sector.improvements.has(ImprovementKind::CollectorFood),
                _ => false,
            };
            let potential = sector.collectable(resource) > 0 || known.contains(&resource);
            (resource, ResourceAvailability { direct, potential })
        })
        .collect()
}

fn resource_key(resource: ResourceKind) -> ThemeKey {
    match resource {
        ResourceKind::Water => ThemeKey::ResWater,
        ResourceKind::Food => ThemeKey::ResFood,
        ResourceKind::Metal => ThemeKey::ResMetal,
        ResourceKind::Fuel => ThemeKey::ResFuel,
        ResourceKind::Rubber => ThemeKey::ResRubber,
    }
}

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let big = frame.is_big_cell();
    for cell in frame.shown_cells() {
        let facts = facts_for(frame, &cell);
        let fits = big || select_glyph(&facts).is_none();
        if !facts.shows_resource_icons() || !fits {
            continue;
        }

        let known = frame.env.exploration().known_resources(cell.sector);
        let available = availability(&cell, &known);
        for mark in resource_marks(cell.origin, frame.cell_size(), big, &available) {
            canvas.draw(DrawCommand::FillRect {
                rect: mark.rect,
                color: frame.color(resource_key(mark.resource)),
            });
        }
    }
}
