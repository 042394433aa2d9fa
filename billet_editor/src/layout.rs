// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted layout document.
//!
//! ```json
//! {
//!   "room": { "width": 3.5, "depth": 5.05, "height": 2.8 },
//!   "furniture": [
//!     { "type": "single-bed", "x": -1.15, "z": -1.325, "rotation": 0.0 }
//!   ]
//! }
//! ```
//!
//! Positions are room-centered meters and rotations are radians. Loading never
//! re-validates positions against the room.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Room height used when a document omits it.
pub const DEFAULT_ROOM_HEIGHT: f64 = 2.8;

fn default_room_height() -> f64 {
    DEFAULT_ROOM_HEIGHT
}

/// Room dimensions in meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Extent along x.
    pub width: f64,
    /// Extent along z.
    pub depth: f64,
    /// Wall height; not used by placement.
    #[serde(default = "default_room_height")]
    pub height: f64,
}

/// One saved furniture entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FurnitureEntry {
    /// Catalog type id.
    #[serde(rename = "type")]
    pub kind: String,
    /// Center x.
    pub x: f64,
    /// Center z.
    pub z: f64,
    /// Rotation in radians.
    #[serde(default)]
    pub rotation: f64,
}

/// A saved room and its furniture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Room dimensions.
    pub room: RoomSpec,
    /// Furniture in drawing order.
    #[serde(default)]
    pub furniture: Vec<FurnitureEntry>,
}

impl Layout {
    /// Parse a layout and check that the room has positive width and depth.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the room dimensions.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let RoomSpec { width, depth, .. } = self.room;
        if width > 0.0 && depth > 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidRoom { width, depth })
        }
    }
}
