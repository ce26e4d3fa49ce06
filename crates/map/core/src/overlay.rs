//! Pick layer over a rendered map.
//!
//! One hit region per shown cell, at exactly the rectangle the render passes
//! draw the cell at. Regions belong to a generation; rebuilding the overlay
//! starts a new generation and events carrying an older one are ignored.
use std::fmt;

use crate::env::MapEnv;
use crate::geometry::{PixelPos, PixelRect, PixelSize, pixel_rect};
use crate::state::SectorPosition;
use crate::viewport::Viewport;
use crate::visibility::VisibilityResolver;

/// Invoked with the position of the activated cell.
pub type SelectCallback = Box<dyn FnMut(SectorPosition)>;

/// Clickable area of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    pub position: SectorPosition,
    pub rect: PixelRect,
    pub generation: u64,
}

/// Hit regions of the most recent render, plus the selection mark.
#[derive(Default)]
pub struct InteractionOverlay {
    generation: u64,
    size: PixelSize,
    regions: Vec<HitRegion>,
    selected: Option<SectorPosition>,
    on_select: Option<SelectCallback>,
}

impl InteractionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all regions with those of `viewport` and returns the new
    /// generation.
    ///
    /// Without a callback the regions are still registered but activating
    /// them does nothing.
    pub fn rebuild(
        &mut self,
        env: &MapEnv<'_>,
        resolver: &VisibilityResolver,
        viewport: &Viewport<'_>,
        on_select: Option<SelectCallback>,
    ) -> u64 {
        let dimensions = &viewport.dimensions;
        self.generation += 1;
        let generation = self.generation;
        self.size = dimensions.canvas_size;
        self.selected = None;
        self.on_select = on_select;
        self.regions = dimensions
            .visible
            .cells()
            .filter(|key| resolver.is_visible_in(env, viewport.maps.visible_sector(*key)))
            .map(|key| HitRegion {
                position: SectorPosition::new(dimensions.level, key.x, key.y),
                rect: pixel_rect(dimensions, key.x, key.y),
                generation,
            })
            .collect();

        tracing::debug!(generation, regions = self.regions.len(), "overlay rebuilt");
        generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    pub fn region(&self, position: SectorPosition) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.position == position)
    }

    pub fn region_at(&self, point: PixelPos) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.rect.contains(point))
    }

    pub fn selected(&self) -> Option<SectorPosition> {
        self.selected
    }

    /// Activates the region at `position` if it belongs to `generation`.
    ///
    /// Returns `true` when the selection moved and the callback ran.
    pub fn activate(&mut self, generation: u64, position: SectorPosition) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                %position,
                "ignoring stale overlay event"
            );
            return false;
        }
        if self.region(position).is_none() {
            return false;
        }
        let Some(on_select) = self.on_select.as_mut() else {
            return false;
        };
        self.selected = Some(position);
        on_select(position);
        true
    }

    /// Activates the region under `point`, if any.
    pub fn click(&mut self, point: PixelPos) -> bool {
        match self.region_at(point) {
            Some(region) => {
                let (generation, position) = (region.generation, region.position);
                self.activate(generation, position)
            }
            None => false,
        }
    }

    /// Moves the selection mark without invoking the callback.
    ///
    /// A position without a region clears the selection.
    pub fn set_selected(&mut self, position: Option<SectorPosition>) {
        self.selected = position.filter(|position| self.region(*position).is_some());
    }
}

impl fmt::Debug for InteractionOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionOverlay")
            .field("generation", &self.generation)
            .field("regions", &self.regions.len())
            .field("selected", &self.selected)
            .field("has_callback", &self.on_select.is_some())
            .finish()
    }
}
