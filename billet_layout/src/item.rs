// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::catalog::{Archetype, Catalog};
use crate::footprint::Footprint;

/// One piece of furniture in a layout.
///
/// Collision state is not stored here; see [`Collisions`](crate::Collisions).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// Catalog type id.
    pub archetype_id: String,
    /// Room-centered center position (`y` is the room's `z`).
    pub position: Point,
    /// Rotation about the vertical axis in radians, not normalized.
    pub rotation: f64,
}

impl PlacedItem {
    /// Create an item.
    pub fn new(archetype_id: impl Into<String>, position: Point, rotation: f64) -> Self {
        Self {
            archetype_id: archetype_id.into(),
            position,
            rotation,
        }
    }

    /// Footprint of this item given its archetype.
    pub fn footprint(&self, archetype: &Archetype) -> Footprint {
        Footprint::new(self.position, archetype.width, archetype.depth, self.rotation)
    }

    /// Footprint resolved through `catalog`, or `None` for an unknown type.
    pub fn resolve(&self, catalog: &Catalog) -> Option<Footprint> {
        catalog.get(&self.archetype_id).map(|a| self.footprint(a))
    }
}
