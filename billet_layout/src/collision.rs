// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise collision reports, space utilization, and free-position search.
//!
//! Collision state is advisory. Nothing here refuses a placement; callers get an
//! ephemeral [`Collisions`] value and decide how to present it. Reports are
//! recomputed from scratch with an all-pairs scan, which is fine for the tens of
//! items a room holds.

use std::collections::BTreeSet;

use kurbo::{Point, Rect};

use crate::bounds::{RoomBounds, RotatedBounds, bounds_overlap};
use crate::footprint::Footprint;

/// Result of an all-pairs collision scan.
///
/// Indices refer to the slice the scan ran over. The report is a snapshot: it is
/// stale as soon as that slice is reordered or shrinks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Overlapping pairs `(i, j)` with `i < j`, in scan order.
    pub pairs: Vec<(usize, usize)>,
}

impl Collisions {
    /// True if no pair overlaps.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of overlapping pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Every index that takes part in at least one overlap, sorted.
    pub fn colliding(&self) -> BTreeSet<usize> {
        self.pairs.iter().flat_map(|&(a, b)| [a, b]).collect()
    }

    /// Whether item `index` overlaps anything.
    pub fn is_colliding(&self, index: usize) -> bool {
        self.pairs.iter().any(|&(a, b)| a == index || b == index)
    }

    /// Rectangle covering every colliding item's bounds. Returns `None` if empty.
    pub fn union_rect(&self, footprints: &[Footprint]) -> Option<Rect> {
        let mut it = self
            .colliding()
            .into_iter()
            .filter_map(|i| footprints.get(i))
            .map(Footprint::bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, b| acc.union(&b)).to_rect())
    }
}

/// All overlapping pairs among `footprints`.
pub fn all_collisions(footprints: &[Footprint]) -> Collisions {
    let bounds: Vec<RotatedBounds> = footprints.iter().map(Footprint::bounds).collect();
    let mut pairs = Vec::new();
    for (i, a) in bounds.iter().enumerate() {
        for (j, b) in bounds.iter().enumerate().skip(i + 1) {
            if bounds_overlap(a, b) {
                pairs.push((i, j));
            }
        }
    }
    Collisions { pairs }
}

/// Whether `candidate` overlaps any of `footprints`, skipping `exclude`.
pub fn is_colliding(candidate: &Footprint, footprints: &[Footprint], exclude: Option<usize>) -> bool {
    let target = candidate.bounds();
    footprints
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .any(|(_, other)| bounds_overlap(&target, &other.bounds()))
}

/// Sum of true (unrotated) footprint areas.
///
/// Rotation does not change how much floor an item covers, so the inflated
/// rotated AABB is deliberately not used here.
pub fn used_area(footprints: &[Footprint]) -> f64 {
    footprints.iter().map(Footprint::area).sum()
}

/// Used area as a percentage of the room area, clamped to `[0, 100]`.
///
/// Overlapping items are counted twice, hence the upper clamp. A room with no
/// area reports `0`.
pub fn space_utilization(footprints: &[Footprint], room_width: f64, room_depth: f64) -> f64 {
    let room_area = room_width * room_depth;
    if room_area <= 0.0 {
        return 0.0;
    }
    (100.0 * used_area(footprints) / room_area).clamp(0.0, 100.0)
}

/// Tunable constants of [`find_optimal_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchPolicy {
    /// Spacing between candidate centers, in meters.
    pub step: f64,
    /// Flat bonus for candidates close to a wall.
    pub wall_bonus: f64,
    /// Candidates whose center is closer than this to a wall get the wall bonus.
    pub wall_distance: f64,
    /// Bonus per existing item at a moderate distance.
    pub cluster_bonus: f64,
    /// Exclusive lower bound of the moderate distance window.
    pub cluster_min: f64,
    /// Exclusive upper bound of the moderate distance window.
    pub cluster_max: f64,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            step: 0.1,
            wall_bonus: 10.0,
            wall_distance: 0.5,
            cluster_bonus: 5.0,
            cluster_min: 0.5,
            cluster_max: 2.0,
        }
    }
}

impl SearchPolicy {
    fn score(&self, candidate: Point, room: &RoomBounds, existing: &[Footprint]) -> f64 {
        let wall = if room.distance_to_nearest_wall(candidate) < self.wall_distance {
            self.wall_bonus
        } else {
            0.0
        };
        let cluster: f64 = existing
            .iter()
            .map(|f| candidate.distance(f.center))
            .filter(|&d| d > self.cluster_min && d < self.cluster_max)
            .map(|_| self.cluster_bonus)
            .sum();
        wall + cluster
    }
}

/// Best free center for an unrotated `width` × `depth` item inside `room`.
///
/// Candidates are scanned on a `policy.step` grid over the room shrunk by the
/// item's half extent, x in the outer loop and z in the inner loop. A candidate is
/// valid when its footprint overlaps none of `existing`. The highest score wins and
/// the first candidate in scan order wins ties. Returns `None` when nothing fits.
pub fn find_optimal_position(
    width: f64,
    depth: f64,
    room: &RoomBounds,
    existing: &[Footprint],
    policy: &SearchPolicy,
) -> Option<Point> {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let (x0, x1) = (room.min_x + hw, room.max_x - hw);
    let (z0, z1) = (room.min_z + hd, room.max_z - hd);
    if room.is_degenerate() || x1 < x0 || z1 < z0 || policy.step <= 0.0 {
        log::debug!("no room for a {width}x{depth} item in {room:?}");
        return None;
    }
    let existing_bounds: Vec<RotatedBounds> = existing.iter().map(Footprint::bounds).collect();
    let x_steps = steps_within(x1 - x0, policy.step);
    let z_steps = steps_within(z1 - z0, policy.step);

    let mut best: Option<(Point, f64)> = None;
    for i in 0..=x_steps {
        let x = x0 + f64::from(i) * policy.step;
        for j in 0..=z_steps {
            let z = z0 + f64::from(j) * policy.step;
            let candidate = Point::new(x, z);
            let test = RotatedBounds::from_center(candidate, width, depth);
            if existing_bounds.iter().any(|b| bounds_overlap(&test, b)) {
                continue;
            }
            let score = policy.score(candidate, room, existing);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
    }
    if best.is_none() {
        log::debug!("optimal search exhausted for a {width}x{depth} item");
    }
    best.map(|(p, _)| p)
}

/// Number of whole steps that fit in `span`, tolerating float error at the end.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "span and step are non-negative and rooms are a few meters across."
)]
fn steps_within(span: f64, step: f64) -> u32 {
    (span / step + 1e-9)
        .floor()
        .clamp(0.0, f64::from(u32::MAX - 1)) as u32
}

/// A replaceable snapshot of footprints with collision queries over it.
#[derive(Clone, Debug, Default)]
pub struct CollisionDetector {
    footprints: Vec<Footprint>,
    policy: SearchPolicy,
}

impl CollisionDetector {
    /// Create an empty detector with the default search policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty detector with a custom search policy.
    pub fn with_policy(policy: SearchPolicy) -> Self {
        Self {
            footprints: Vec::new(),
            policy,
        }
    }

    /// Replace the snapshot wholesale.
    pub fn set_footprints(&mut self, footprints: Vec<Footprint>) {
        self.footprints = footprints;
    }

    /// Current snapshot.
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Search policy used by [`CollisionDetector::find_optimal_position`].
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// See [`all_collisions`].
    pub fn all_collisions(&self) -> Collisions {
        all_collisions(&self.footprints)
    }

    /// See [`is_colliding`].
    pub fn is_colliding(&self, candidate: &Footprint, exclude: Option<usize>) -> bool {
        is_colliding(candidate, &self.footprints, exclude)
    }

    /// See [`used_area`].
    pub fn used_area(&self) -> f64 {
        used_area(&self.footprints)
    }

    /// See [`space_utilization`].
    pub fn space_utilization(&self, room_width: f64, room_depth: f64) -> f64 {
        space_utilization(&self.footprints, room_width, room_depth)
    }

    /// Free position for a new item among the current snapshot.
    pub fn find_optimal_position(&self, width: f64, depth: f64, room: &RoomBounds) -> Option<Point> {
        find_optimal_position(width, depth, room, &self.footprints, &self.policy)
    }
}
