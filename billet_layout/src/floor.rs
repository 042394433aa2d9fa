// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Room floor plans and the usable-area constraint.

use kurbo::Point;

use crate::bounds::{OVERLAP_MARGIN, RoomBounds, RotatedBounds, bounds_overlap};

/// Depth of the band along the front wall that holds the bathroom and dressing room.
pub const BARRACKS_FRONT_BAND: f64 = 1.5;

/// Distance of the bathroom/dressing-room partition from the left wall.
pub const BARRACKS_PARTITION_OFFSET: f64 = 1.16;

/// Horizontal layout of a room: its outer rectangle, the main room used by
/// automatic placement, and an optional forbidden corner.
///
/// The legal placement region is the outer rectangle minus `forbidden`. With a
/// forbidden corner that region is L-shaped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloorPlan {
    /// Outer width along x, in meters.
    pub width: f64,
    /// Outer depth along z, in meters.
    pub depth: f64,
    /// Depth of the main room measured from the back wall.
    pub main_depth: f64,
    /// Region no furniture may overlap, such as a dressing room.
    pub forbidden: Option<RoomBounds>,
}

impl FloorPlan {
    /// A plain rectangular room with no forbidden region.
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self {
            width,
            depth,
            main_depth: depth,
            forbidden: None,
        }
    }

    /// The barracks room: a front band split into a bathroom on the left, which
    /// stays usable, and a dressing room on the right, which is forbidden.
    ///
    /// Rooms too small to hold the band fall back to [`FloorPlan::rectangular`].
    pub fn barracks(width: f64, depth: f64) -> Self {
        if depth <= BARRACKS_FRONT_BAND || width <= BARRACKS_PARTITION_OFFSET {
            return Self::rectangular(width, depth);
        }
        let partition_x = -width / 2.0 + BARRACKS_PARTITION_OFFSET;
        Self {
            width,
            depth,
            main_depth: depth - BARRACKS_FRONT_BAND,
            forbidden: Some(RoomBounds::new(
                partition_x,
                width / 2.0,
                depth / 2.0 - BARRACKS_FRONT_BAND,
                depth / 2.0,
            )),
        }
    }

    /// The full room rectangle.
    pub fn outer_bounds(&self) -> RoomBounds {
        RoomBounds::centered(self.width, self.depth)
    }

    /// The main room, used by the optimal-position search and the arranger.
    pub fn main_room_bounds(&self) -> RoomBounds {
        let outer = self.outer_bounds();
        RoomBounds::new(
            outer.min_x,
            outer.max_x,
            outer.min_z,
            outer.min_z + self.main_depth,
        )
    }

    /// Whether `bounds` lies inside the room without touching the forbidden region.
    pub fn contains_footprint(&self, bounds: &RotatedBounds) -> bool {
        if !self.outer_bounds().contains_bounds(bounds) {
            return false;
        }
        match self.forbidden {
            Some(f) => {
                let zone = RotatedBounds {
                    min_x: f.min_x,
                    max_x: f.max_x,
                    min_z: f.min_z,
                    max_z: f.max_z,
                    width: f.width(),
                    depth: f.depth(),
                };
                !bounds_overlap(bounds, &zone)
            }
            None => true,
        }
    }

    /// Clamp a candidate center into the legal region for an item whose
    /// axis-aligned extent is `item_width` × `item_depth`.
    ///
    /// Each axis is first clamped into the outer rectangle shrunk by half the
    /// item. If the footprint then still overlaps the forbidden region by more than
    /// [`OVERLAP_MARGIN`](crate::OVERLAP_MARGIN), the point is
    /// pushed out along the axis that needs the smaller correction, using only exits
    /// that keep it inside the outer rectangle. An axis on which the item is larger
    /// than the room is centered.
    pub fn constrain(&self, p: Point, item_width: f64, item_depth: f64) -> Point {
        let outer = self.outer_bounds();
        let (hw, hd) = (item_width / 2.0, item_depth / 2.0);
        let (lo_x, hi_x) = (outer.min_x + hw, outer.max_x - hw);
        let (lo_z, hi_z) = (outer.min_z + hd, outer.max_z - hd);
        let Point { x: mut x, y: mut z } = outer.clamp_center(p, item_width, item_depth);

        let Some(f) = self.forbidden else {
            return Point::new(x, z);
        };
        let (ex0, ex1) = (f.min_x - hw, f.max_x + hw);
        let (ez0, ez1) = (f.min_z - hd, f.max_z + hd);
        // Same tolerance as the collision test, so touching the zone is not inside it.
        let m = OVERLAP_MARGIN;
        let inside = x > ex0 + m && x < ex1 - m && z > ez0 + m && z < ez1 - m;
        if !inside {
            return Point::new(x, z);
        }
        let exit_x = nearest_exit(x, ex0, ex1, lo_x, hi_x);
        let exit_z = nearest_exit(z, ez0, ez1, lo_z, hi_z);
        match (exit_x, exit_z) {
            (Some(nx), Some(nz)) => {
                if (nx - x).abs() <= (nz - z).abs() {
                    x = nx;
                } else {
                    z = nz;
                }
            }
            (Some(nx), None) => x = nx,
            (None, Some(nz)) => z = nz,
            (None, None) => {
                log::trace!("item {item_width}x{item_depth} cannot clear the forbidden region");
            }
        }
        Point::new(x, z)
    }
}

/// Closest of `exit_lo`/`exit_hi` to `v` that lies within `[lo, hi]`.
fn nearest_exit(v: f64, exit_lo: f64, exit_hi: f64, lo: f64, hi: f64) -> Option<f64> {
    [exit_lo, exit_hi]
        .into_iter()
        .filter(|&e| e >= lo && e <= hi)
        .min_by(|a, b| (a - v).abs().total_cmp(&(b - v).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barracks() -> FloorPlan {
        FloorPlan::barracks(3.5, 5.05)
    }

    fn footprint_inside_outer(plan: &FloorPlan, p: Point, w: f64, d: f64) -> bool {
        let b = RotatedBounds::from_center(p, w, d);
        plan.outer_bounds().contains_bounds(&b)
    }

    #[test]
    fn barracks_regions() {
        let plan = barracks();
        let main = plan.main_room_bounds();
        assert!((main.max_z - (-2.525 + 3.55)).abs() < 1e-9);
        let f = plan.forbidden.unwrap();
        assert!((f.min_x - (-1.75 + 1.16)).abs() < 1e-9);
        assert_eq!(f.max_x, 1.75);
        assert!((f.min_z - 1.025).abs() < 1e-9);
        assert_eq!(f.max_z, 2.525);
    }

    #[test]
    fn small_rooms_have_no_band() {
        let plan = FloorPlan::barracks(3.0, 1.2);
        assert_eq!(plan.forbidden, None);
        assert_eq!(plan.main_room_bounds(), plan.outer_bounds());
    }

    #[test]
    fn baseline_clamp_into_room() {
        let plan = FloorPlan::rectangular(4.0, 3.0);
        let p = plan.constrain(Point::new(10.0, -10.0), 1.0, 0.5);
        assert_eq!(p, Point::new(1.5, -1.25));
        let inside = Point::new(0.3, 0.2);
        assert_eq!(plan.constrain(inside, 1.0, 0.5), inside);
    }

    #[test]
    fn oversized_items_are_centered() {
        let plan = FloorPlan::rectangular(1.0, 3.0);
        let p = plan.constrain(Point::new(0.4, 0.0), 2.0, 1.0);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn forbidden_corner_pushes_along_smaller_correction() {
        let plan = barracks();
        // Just inside the dressing room's left edge: pushing left is cheapest.
        let p = plan.constrain(Point::new(-0.5, 2.0), 0.4, 0.4);
        assert!((p.x - (-0.59 - 0.2)).abs() < 1e-9, "{p:?}");
        assert_eq!(p.y, 2.0);
        // Just below the partition in the middle of the room: pushing back is cheapest.
        let p = plan.constrain(Point::new(0.8, 1.1), 0.4, 0.4);
        assert!((p.y - (1.025 - 0.2)).abs() < 1e-9, "{p:?}");
        assert_eq!(p.x, 0.8);
    }

    #[test]
    fn pushed_points_clear_the_forbidden_region() {
        let plan = barracks();
        for &(x, z) in &[(1.0, 2.0), (0.0, 1.5), (1.7, 1.1), (-0.3, 2.4), (5.0, 5.0)] {
            let p = plan.constrain(Point::new(x, z), 0.6, 0.6);
            let b = RotatedBounds::from_center(p, 0.6, 0.6);
            assert!(plan.contains_footprint(&b), "({x}, {z}) -> {p:?}");
        }
    }

    #[test]
    fn constrained_footprint_never_leaves_outer_room() {
        let plan = barracks();
        let sizes = [(1.0, 2.15), (0.45, 0.45), (1.2, 0.6), (3.5, 0.3)];
        for &(w, d) in &sizes {
            for ix in -6..=6 {
                for iz in -6..=6 {
                    let raw = Point::new(f64::from(ix) * 1.7, f64::from(iz) * 1.3);
                    let p = plan.constrain(raw, w, d);
                    assert!(footprint_inside_outer(&plan, p, w, d), "{w}x{d} at {raw:?} -> {p:?}");
                }
            }
        }
    }

    #[test]
    fn contains_footprint_checks_both_regions() {
        let plan = barracks();
        let ok = RotatedBounds::from_center(Point::new(-1.2, 1.8), 0.6, 0.6);
        assert!(plan.contains_footprint(&ok), "bathroom is usable");
        let in_closet = RotatedBounds::from_center(Point::new(1.0, 2.0), 0.6, 0.6);
        assert!(!plan.contains_footprint(&in_closet));
        let outside = RotatedBounds::from_center(Point::new(1.6, 0.0), 0.6, 0.6);
        assert!(!plan.contains_footprint(&outside));
    }
}
