// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from reading or validating a persisted [`Layout`](crate::Layout).
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The document is not valid layout JSON.
    #[error("malformed layout: {0}")]
    Json(#[from] serde_json::Error),
    /// The room has a non-positive width or depth.
    #[error("invalid room size {width} x {depth}")]
    InvalidRoom {
        /// Room width in meters.
        width: f64,
        /// Room depth in meters.
        depth: f64,
    },
}

/// Errors from [`EditorSession`](crate::EditorSession) operations.
///
/// Overlapping placements are never an error.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The type id is not in the session's catalog.
    #[error("unknown furniture type {0:?}")]
    UnknownArchetype(String),
    /// No item at this index.
    #[error("no item at index {0}")]
    NoSuchItem(usize),
    /// Reading or writing a layout failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
