//! Early-zone silhouette.
//!
//! Interior cells get a large rounded square that merges with its neighbours;
//! edge cells (barely seen, or bordering the other zone) get a small one.
//! Interior cells touching the zone only diagonally are turned by 45 degrees.
use std::f64::consts::FRAC_PI_4;

use super::{Canvas, DrawCommand, RenderFrame, ShownCell};
use crate::env::ThemeKey;
use crate::state::CellStatus;

const RADIUS_DEFAULT: f64 = 3.15;
const RADIUS_SMALL: f64 = 0.75;
const PADDING_DEFAULT: f64 = 2.25;
const PADDING_SMALL: f64 = 0.53;
const PADDING_SMALL_DIAGONAL: f64 = 0.65;

/// Shape of one district blob, in cell-size multiples.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Blob {
    padding: f64,
    radius: f64,
    rotated: bool,
}

fn blob_for(frame: &RenderFrame<'_, '_>, cell: &ShownCell<'_>) -> Blob {
    let is_early = cell.sector.is_early_zone();
    let mut different_zone = false;
    let mut orthogonal = false;
    for (direction, neighbour) in frame.env.levels().neighbours(cell.sector) {
        different_zone |= neighbour.is_early_zone() != is_early;
        orthogonal |= !direction.is_diagonal();
    }

    let is_edge = cell.status == CellStatus::UnvisitedVisible || different_zone;
    match (is_edge, orthogonal) {
        (true, true) => Blob {
            padding: PADDING_SMALL,
            radius: RADIUS_SMALL,
            rotated: false,
        },
        (true, false) => Blob {
            padding: PADDING_SMALL_DIAGONAL,
            radius: RADIUS_SMALL,
            rotated: false,
        },
        (false, orthogonal) => Blob {
            padding: PADDING_DEFAULT,
            radius: RADIUS_DEFAULT,
            rotated: !orthogonal,
        },
    }
}

pub(super) fn draw(frame: &RenderFrame<'_, '_>, canvas: &mut dyn Canvas) {
    let level = frame.dimensions.level;
    let levels = frame.env.levels();
    let key = if level == levels.surface_level() {
        ThemeKey::MapBackground2Surface
    } else if level == levels.ground_level() {
        ThemeKey::MapBackground2Ground
    } else {
        ThemeKey::MapBackground2Default
    };
    let color = frame.color(key);
    let size = frame.cell_size();

    for cell in frame.shown_cells() {
        if !cell.sector.is_early_zone() {
            continue;
        }
        let blob = blob_for(frame, &cell);
        canvas.draw(DrawCommand::FillRoundedSquare {
            center: cell.center(size),
            side: size + 2.0 * size * blob.padding,
            radius: size * blob.radius,
            rotation: if blob.rotated { FRAC_PI_4 } else { 0.0 },
            color,
        });
    }
}
