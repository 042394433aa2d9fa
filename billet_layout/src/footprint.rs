// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotated rectangular footprints: conservative AABBs and exact hit testing.

use kurbo::{Affine, Point};

use crate::bounds::RotatedBounds;

/// Horizontal extent of one placed item.
///
/// `width` and `depth` are the unrotated footprint; `rotation` is in radians and
/// is not normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Room-centered position of the item's center (`y` is the room's `z`).
    pub center: Point,
    /// Unrotated extent along the item's local x axis.
    pub width: f64,
    /// Unrotated extent along the item's local z axis.
    pub depth: f64,
    /// Rotation about the vertical axis, in radians.
    pub rotation: f64,
}

impl Footprint {
    /// Create a footprint.
    pub const fn new(center: Point, width: f64, depth: f64, rotation: f64) -> Self {
        Self {
            center,
            width,
            depth,
            rotation,
        }
    }

    /// Conservative axis-aligned bounds, see [`rotated_bounds`].
    pub fn bounds(&self) -> RotatedBounds {
        rotated_bounds(self.center, self.width, self.depth, self.rotation)
    }

    /// True (unrotated) floor area.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// Transform from the item's local frame (origin at its center) to room space.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(self.rotation)
    }

    /// The four corners of the rotated rectangle in room space.
    pub fn corners(&self) -> [Point; 4] {
        let tf = self.transform();
        let (hw, hd) = (self.width / 2.0, self.depth / 2.0);
        [
            tf * Point::new(-hw, -hd),
            tf * Point::new(hw, -hd),
            tf * Point::new(hw, hd),
            tf * Point::new(-hw, hd),
        ]
    }

    /// Exact point-in-rotated-rectangle test, used for click selection.
    ///
    /// The vector from the center to `p` is inverse-rotated into the item's local
    /// frame and compared against the half extents. Edges count as inside.
    pub fn contains_point(&self, p: Point) -> bool {
        let local = Affine::rotate(-self.rotation) * (p - self.center).to_point();
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.depth / 2.0
    }
}

/// Axis-aligned bounds of a `width` × `depth` rectangle rotated by `rotation`
/// and centered on `position`.
///
/// The box is `width·|cos θ| + depth·|sin θ|` wide and `width·|sin θ| + depth·|cos θ|`
/// deep. It is exact for quarter turns and increasingly loose towards 45°.
pub fn rotated_bounds(position: Point, width: f64, depth: f64, rotation: f64) -> RotatedBounds {
    let (sin, cos) = rotation.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let rotated_width = width * cos + depth * sin;
    let rotated_depth = width * sin + depth * cos;
    RotatedBounds::from_center(position, rotated_width, rotated_depth)
}

/// Effective `(width, depth)` after a rotation, treating anything with
/// `|sin θ| > 0.5` as a quarter turn.
pub fn quarter_turn_extent(width: f64, depth: f64, rotation: f64) -> (f64, f64) {
    if rotation.sin().abs() > 0.5 {
        (depth, width)
    } else {
        (width, depth)
    }
}
