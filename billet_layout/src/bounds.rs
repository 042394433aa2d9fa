// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounds in the room's horizontal plane.
//!
//! All coordinates are room-centered meters. The room's depth axis is called `z`
//! here and maps onto the `y` component of Kurbo types.

use kurbo::{Point, Rect};

/// Tolerance applied by [`bounds_overlap`], in meters.
///
/// Boxes that merely touch, or that interpenetrate by less than this amount
/// because of floating-point or snap jitter, are not reported as overlapping.
pub const OVERLAP_MARGIN: f64 = 0.005;

/// Axis-aligned bounding box of a (possibly rotated) footprint.
///
/// Derived on demand from a position, a footprint size and a rotation; never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotatedBounds {
    /// Minimum x (left).
    pub min_x: f64,
    /// Maximum x (right).
    pub max_x: f64,
    /// Minimum z (back).
    pub min_z: f64,
    /// Maximum z (front).
    pub max_z: f64,
    /// Extent along x (`max_x - min_x`).
    pub width: f64,
    /// Extent along z (`max_z - min_z`).
    pub depth: f64,
}

impl RotatedBounds {
    /// Bounds of a `width` × `depth` box centered on `center`.
    pub fn from_center(center: Point, width: f64, depth: f64) -> Self {
        Self {
            min_x: center.x - width / 2.0,
            max_x: center.x + width / 2.0,
            min_z: center.y - depth / 2.0,
            max_z: center.y + depth / 2.0,
            width,
            depth,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// The same box as a Kurbo rectangle (`z` on the `y` axis).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_z, self.max_x, self.max_z)
    }

    /// Whether this box overlaps `other` beyond [`OVERLAP_MARGIN`].
    pub fn overlaps(&self, other: &Self) -> bool {
        bounds_overlap(self, other)
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x.min(other.min_x);
        let max_x = self.max_x.max(other.max_x);
        let min_z = self.min_z.min(other.min_z);
        let max_z = self.max_z.max(other.max_z);
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
            width: max_x - min_x,
            depth: max_z - min_z,
        }
    }
}

/// Two boxes overlap unless they are separated on some axis.
///
/// "Separated" means the gap between them on that axis is at least
/// `-OVERLAP_MARGIN`. Both gaps per axis are evaluated, so the result is
/// exactly symmetric in `a` and `b`.
pub fn bounds_overlap(a: &RotatedBounds, b: &RotatedBounds) -> bool {
    let separated = |gap: f64| gap >= -OVERLAP_MARGIN;
    !(separated(b.min_x - a.max_x)
        || separated(a.min_x - b.max_x)
        || separated(b.min_z - a.max_z)
        || separated(a.min_z - b.max_z))
}

/// A rectangular floor region, room-centered, in meters.
///
/// Invariant: `min_x < max_x` and `min_z < max_z` for a usable room. Degenerate
/// bounds are accepted and simply produce no placement candidates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomBounds {
    /// Minimum x (left wall).
    pub min_x: f64,
    /// Maximum x (right wall).
    pub max_x: f64,
    /// Minimum z (back wall).
    pub min_z: f64,
    /// Maximum z (front wall).
    pub max_z: f64,
}

impl RoomBounds {
    /// Create bounds from min/max on each axis.
    pub const fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Bounds of a `width` × `depth` room centered on the origin.
    pub fn centered(width: f64, depth: f64) -> Self {
        Self::new(-width / 2.0, width / 2.0, -depth / 2.0, depth / 2.0)
    }

    /// Convert from a Kurbo rectangle (`y` is the room's `z`).
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.x0, r.x1, r.y0, r.y1)
    }

    /// The same region as a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_z, self.max_x, self.max_z)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along z.
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// True when the region has no positive area.
    pub fn is_degenerate(&self) -> bool {
        !(self.min_x < self.max_x && self.min_z < self.max_z)
    }

    /// Whether `bounds` lies entirely inside this region.
    ///
    /// Edges may touch; clamping round-off up to `1e-9` is tolerated.
    pub fn contains_bounds(&self, bounds: &RotatedBounds) -> bool {
        const EPS: f64 = 1e-9;
        bounds.min_x >= self.min_x - EPS
            && bounds.max_x <= self.max_x + EPS
            && bounds.min_z >= self.min_z - EPS
            && bounds.max_z <= self.max_z + EPS
    }

    /// Clamp the center of a `width` × `depth` box so the box stays inside.
    ///
    /// An axis on which the box is larger than the region is centered instead.
    pub fn clamp_center(&self, p: Point, width: f64, depth: f64) -> Point {
        let (hw, hd) = (width / 2.0, depth / 2.0);
        Point::new(
            clamp_or_center(p.x, self.min_x + hw, self.max_x - hw),
            clamp_or_center(p.y, self.min_z + hd, self.max_z - hd),
        )
    }

    /// Distance from `p` to the nearest of the four walls.
    ///
    /// Negative when `p` lies outside the region.
    pub fn distance_to_nearest_wall(&self, p: Point) -> f64 {
        (p.x - self.min_x)
            .min(self.max_x - p.x)
            .min(p.y - self.min_z)
            .min(self.max_z - p.y)
    }
}

fn clamp_or_center(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi { (lo + hi) / 2.0 } else { v.clamp(lo, hi) }
}
