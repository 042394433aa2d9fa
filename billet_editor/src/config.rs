// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor configuration.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Editor toggles.
    ///
    /// Serialized as a `|`-separated list of flag names, e.g. `"SNAP_TO_GRID | SHOW_GRID"`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EditorOptions: u8 {
        /// Snap placements and drags to the room grid.
        const SNAP_TO_GRID        = 0b0000_0001;
        /// Recompute collisions after each change.
        const COLLISION_DETECTION = 0b0000_0010;
        /// Draw the floor grid.
        const SHOW_GRID           = 0b0000_0100;
        /// Draw the walls in the 3D view.
        const SHOW_WALLS          = 0b0000_1000;
        /// Label the selected item's dimensions.
        const SHOW_DIMENSIONS     = 0b0001_0000;
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::SNAP_TO_GRID | Self::COLLISION_DETECTION | Self::SHOW_GRID | Self::SHOW_WALLS
    }
}

/// Bounds and starting value of the top-down view scale, in pixels per meter.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    /// Smallest scale.
    pub min_scale: f64,
    /// Largest scale.
    pub max_scale: f64,
    /// Scale of a fresh view.
    pub initial_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 50.0,
            max_scale: 200.0,
            initial_scale: 100.0,
        }
    }
}

impl ZoomLimits {
    /// Clamp `scale` into `[min_scale, max_scale]`.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Settings for an [`EditorSession`](crate::EditorSession).
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing in meters.
    pub grid_size: f64,
    /// Distance moved by one arrow-key nudge, in meters.
    pub nudge_step: f64,
    /// Rotation applied by one rotate keystroke, in degrees.
    pub rotate_step_degrees: f64,
    /// Feature toggles.
    pub options: EditorOptions,
    /// View scale limits.
    pub zoom: ZoomLimits,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 0.1,
            nudge_step: 0.1,
            rotate_step_degrees: 15.0,
            options: EditorOptions::default(),
            zoom: ZoomLimits::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether grid snapping is on.
    pub fn snap_enabled(&self) -> bool {
        self.options.contains(EditorOptions::SNAP_TO_GRID)
    }

    /// Whether collisions should be refreshed after each change.
    pub fn collisions_enabled(&self) -> bool {
        self.options.contains(EditorOptions::COLLISION_DETECTION)
    }
}
