// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Furniture archetypes and the registry that maps type ids to them.

use std::collections::BTreeMap;

/// Errors raised while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Width, depth and height must all be positive.
    #[error("archetype {id:?} has non-positive dimensions {width}x{depth}x{height}")]
    InvalidDimensions {
        /// Offending type id.
        id: String,
        /// Requested width.
        width: f64,
        /// Requested depth.
        depth: f64,
        /// Requested height.
        height: f64,
    },
}

/// Furniture family, used by the auto-arranger to pick canonical slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Bed-like items, including bed-frame drawer units, stacked along the left wall.
    Bed,
    /// Wall lockers, stacked along the right wall facing inward.
    Locker,
    /// Desks, lined up along the back wall.
    Desk,
    /// Chairs, paired with desks.
    Chair,
    /// Footlockers, paired with the foot of a bed.
    Footlocker,
    /// Dressers, paired beside a bed.
    Dresser,
    /// Everything else; placed by free-position search.
    Other,
}

/// Hint for a renderer choosing how to build an archetype's mesh.
///
/// Placement and collision never read this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Frame with a mattress and pillow.
    Bed,
    /// Two stacked beds with a ladder.
    BunkBed,
    /// Four legs and a seat or top.
    Seat,
    /// A chest of `n` drawers.
    Drawers(u8),
    /// A tall cabinet with a door.
    Cabinet,
    /// A plain box.
    Box,
}

/// Immutable catalog entry for one kind of furniture.
#[derive(Clone, Debug, PartialEq)]
pub struct Archetype {
    /// Unrotated extent along x, in meters.
    pub width: f64,
    /// Unrotated extent along z, in meters.
    pub depth: f64,
    /// Height in meters; unused by placement.
    pub height: f64,
    /// Human-readable name.
    pub display_name: String,
    /// Family used by the auto-arranger.
    pub category: Category,
    /// Mesh hint for renderers.
    pub shape: Shape,
}

impl Archetype {
    /// Create an archetype.
    pub fn new(
        display_name: impl Into<String>,
        (width, depth, height): (f64, f64, f64),
        category: Category,
        shape: Shape,
    ) -> Self {
        Self {
            width,
            depth,
            height,
            display_name: display_name.into(),
            category,
            shape,
        }
    }

    /// Unrotated floor area.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

/// Registry of archetypes keyed by type id.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Archetype>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in barracks furniture set.
    pub fn barracks() -> Self {
        use Category as C;
        let builtin = [
            ("single-bed", Archetype::new("Single Bed", (1.0, 2.15, 0.5), C::Bed, Shape::Bed)),
            ("bunk-bed", Archetype::new("Bunk Bed", (0.9, 2.0, 1.8), C::Bed, Shape::BunkBed)),
            ("desk", Archetype::new("Desk", (1.2, 0.6, 0.75), C::Desk, Shape::Seat)),
            ("chair", Archetype::new("Chair", (0.45, 0.45, 0.9), C::Chair, Shape::Seat)),
            ("dresser", Archetype::new("Dresser", (0.8, 0.45, 1.0), C::Dresser, Shape::Drawers(4))),
            (
                "dresser-5",
                Archetype::new("5-Drawer Dresser", (0.8, 0.45, 1.2), C::Dresser, Shape::Drawers(5)),
            ),
            (
                "bed-drawer-2",
                Archetype::new(
                    "2-Drawer Bedside Chest",
                    (0.9, 0.45, 0.5),
                    C::Bed,
                    Shape::Drawers(2),
                ),
            ),
            ("locker", Archetype::new("Locker", (0.6, 0.6, 1.8), C::Locker, Shape::Cabinet)),
            (
                "footlocker",
                Archetype::new("Footlocker", (0.9, 0.45, 0.4), C::Footlocker, Shape::Box),
            ),
            ("nightstand", Archetype::new("Nightstand", (0.4, 0.4, 0.5), C::Other, Shape::Drawers(1))),
            ("trash-bin", Archetype::new("Trash Bin", (0.3, 0.3, 0.4), C::Other, Shape::Box)),
        ];
        let entries = builtin
            .into_iter()
            .map(|(id, archetype)| (id.to_string(), archetype))
            .collect();
        Self { entries }
    }

    /// Register `archetype` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, archetype: Archetype) -> Result<(), CatalogError> {
        let id = id.into();
        let positive = archetype.width > 0.0 && archetype.depth > 0.0 && archetype.height > 0.0;
        if !positive {
            return Err(CatalogError::InvalidDimensions {
                id,
                width: archetype.width,
                depth: archetype.depth,
                height: archetype.height,
            });
        }
        self.entries.insert(id, archetype);
        Ok(())
    }

    /// Look up an archetype by type id.
    pub fn get(&self, id: &str) -> Option<&Archetype> {
        self.entries.get(id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered archetypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, archetype)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Archetype)> + '_ {
        self.entries.iter().map(|(id, a)| (id.as_str(), a))
    }
}
