// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Billet Layout: a Kurbo-native placement and collision core for room planners.
//!
//! Billet Layout turns raw cursor positions into grid-aligned, in-bounds furniture
//! placements and reports overlaps among rotated rectangular footprints.
//!
//! - [`rotated_bounds`] computes the conservative AABB of a rotated footprint, and
//!   [`Footprint::contains_point`] does exact hit testing for selection.
//! - [`GridSnapper`] quantizes positions so item *edges* land on a room-anchored grid.
//! - [`CollisionDetector`] reports overlapping pairs with a small tolerance, sums used
//!   area, and searches for free positions.
//! - [`FloorPlan::constrain`] clamps positions into the legal floor region, which may be
//!   L-shaped when a corner of the room is off limits.
//! - [`Arranger`] produces a one-shot, category-driven layout of a whole room.
//!
//! Everything is synchronous and works on borrowed snapshots. Collision state is never
//! stored on items: a [`Collisions`] report is recomputed after each change.
//!
//! Coordinates are room-centered meters. The room's depth axis `z` is carried in the
//! `y` component of Kurbo types.
//!
//! # Example
//!
//! ```rust
//! use billet_layout::{Catalog, CollisionDetector, FloorPlan, GridSnapper, PlacedItem};
//! use kurbo::Point;
//!
//! let catalog = Catalog::barracks();
//! let plan = FloorPlan::barracks(3.5, 5.05);
//! let grid = GridSnapper::for_room(0.1, 3.5, 5.05);
//!
//! // Drop a bed near the cursor: snap the edges to the grid, then clamp into the room.
//! let bed = catalog.get("single-bed").unwrap();
//! let snapped = grid.snap(Point::new(1.25, -0.08), bed.width, bed.depth, 0.0);
//! let position = plan.constrain(snapped, bed.width, bed.depth);
//! let item = PlacedItem::new("single-bed", position, 0.0);
//!
//! let mut detector = CollisionDetector::new();
//! detector.set_footprints(vec![item.footprint(bed)]);
//! assert!(detector.all_collisions().is_empty());
//! assert!(detector.space_utilization(3.5, 5.05) > 12.0);
//! ```
//!
//! Auto-arrangement returns placements for the caller to apply:
//!
//! ```rust
//! use billet_layout::{Arranger, Catalog, FloorPlan, PlacedItem};
//! use kurbo::Point;
//!
//! let catalog = Catalog::barracks();
//! let bounds = FloorPlan::barracks(3.5, 5.05).main_room_bounds();
//! let mut items: Vec<_> = ["single-bed", "desk", "chair", "trash-bin"]
//!     .into_iter()
//!     .map(|id| PlacedItem::new(id, Point::ZERO, 0.0))
//!     .collect();
//!
//! let placements = Arranger::new(bounds, &catalog).arrange(&items);
//! assert_eq!(placements.len(), items.len());
//! for placement in &placements {
//!     placement.apply(&mut items[placement.index]);
//! }
//! ```

mod arrange;
mod bounds;
mod catalog;
mod collision;
mod floor;
mod footprint;
mod item;
mod snap;

pub use arrange::{ArrangePolicy, Arranger, Placement};
pub use bounds::{OVERLAP_MARGIN, RoomBounds, RotatedBounds, bounds_overlap};
pub use catalog::{Archetype, Catalog, CatalogError, Category, Shape};
pub use collision::{
    CollisionDetector, Collisions, SearchPolicy, all_collisions, find_optimal_position,
    is_colliding, space_utilization, used_area,
};
pub use floor::{BARRACKS_FRONT_BAND, BARRACKS_PARTITION_OFFSET, FloorPlan};
pub use footprint::{Footprint, quarter_turn_extent, rotated_bounds};
pub use item::PlacedItem;
pub use snap::{GridSnapper, SNAP_EPSILON, snap};
