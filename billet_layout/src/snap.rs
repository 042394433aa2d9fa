// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-aware grid snapping.
//!
//! The grid is anchored at a room corner rather than at the room center, and
//! what lands on grid lines is an item's edge, not its center. For a footprint
//! whose half extent is not a multiple of the grid, the snap target is shifted
//! by the remainder so the back/left edge stays on a line.
//!
//! Snapping depends on the item's effective extent, which changes with rotation,
//! so callers must snap again after every rotation step.

use kurbo::Point;

use crate::footprint::quarter_turn_extent;

/// Remainders this close to `0` or to the grid size count as aligned.
pub const SNAP_EPSILON: f64 = 0.001;

/// Snap a raw position so the item's edges align to a grid anchored at `origin`.
///
/// Items with `|sin(rotation)| > 0.5` are treated as quarter-turned and their
/// width and depth swap. A non-positive `grid_size` disables snapping.
pub fn snap(
    raw: Point,
    item_width: f64,
    item_depth: f64,
    rotation: f64,
    grid_size: f64,
    origin: Point,
) -> Point {
    if grid_size <= 0.0 {
        return raw;
    }
    let (width, depth) = quarter_turn_extent(item_width, item_depth, rotation);
    let offset_x = edge_offset(width / 2.0, grid_size);
    let offset_z = edge_offset(depth / 2.0, grid_size);
    log::trace!("snap offsets ({offset_x}, {offset_z}) for {width}x{depth}");
    Point::new(
        snap_axis(raw.x, origin.x + offset_x, grid_size),
        snap_axis(raw.y, origin.y + offset_z, grid_size),
    )
}

/// Offset from a grid line that places an edge `half` away from the center on a line.
fn edge_offset(half: f64, grid_size: f64) -> f64 {
    let rem = half.rem_euclid(grid_size);
    if rem < SNAP_EPSILON || grid_size - rem < SNAP_EPSILON {
        0.0
    } else {
        rem
    }
}

fn snap_axis(raw: f64, anchor: f64, grid_size: f64) -> f64 {
    anchor + ((raw - anchor) / grid_size).round() * grid_size
}

/// A room-anchored grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSnapper {
    /// Spacing between grid lines, in meters.
    pub grid_size: f64,
    /// Grid anchor, usually the room's back-left corner.
    pub origin: Point,
}

impl GridSnapper {
    /// Create a grid with the given spacing and anchor.
    pub const fn new(grid_size: f64, origin: Point) -> Self {
        Self { grid_size, origin }
    }

    /// Grid anchored at the back-left corner of a centered `width` × `depth` room.
    pub fn for_room(grid_size: f64, width: f64, depth: f64) -> Self {
        Self::new(grid_size, Point::new(-width / 2.0, -depth / 2.0))
    }

    /// See [`snap`].
    pub fn snap(&self, raw: Point, item_width: f64, item_depth: f64, rotation: f64) -> Point {
        snap(
            raw,
            item_width,
            item_depth,
            rotation,
            self.grid_size,
            self.origin,
        )
    }

    /// Whether `value` lies on a grid line along the axis anchored at `anchor`.
    pub fn is_on_line(&self, value: f64, anchor: f64) -> bool {
        let steps = (value - anchor) / self.grid_size;
        (steps - steps.round()).abs() * self.grid_size < 1e-6
    }
}
