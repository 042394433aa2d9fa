// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Billet Editor: the editing surface over [`billet_layout`].
//!
//! An [`EditorSession`] owns the room, the furniture list, the selection and the
//! view. UI events map onto its methods:
//!
//! - dropping from a palette → [`EditorSession::place_item`] (snap, then clamp);
//! - dragging → [`EditorSession::move_item`] (snap only), then
//!   [`EditorSession::finalize_placement`] on release (clamp);
//! - rotate keys and double clicks → [`EditorSession::rotate_item`];
//! - arrow keys → [`EditorSession::nudge_item`];
//! - clicks → [`EditorSession::select_at`], which returns [`SelectionEvent`]s.
//!
//! [`EditorSession::drop_item`], [`EditorSession::drag_item`] and
//! [`EditorSession::rotate_steps`] take snapping and the rotate step from the
//! session's [`EditorConfig`]. Removal returns the selection transitions too.
//!
//! After any change the UI asks for a fresh [`Collisions`](billet_layout::Collisions)
//! report and the utilization figure; nothing is pushed.
//!
//! Layouts persist as the JSON [`Layout`] document. Loading keeps saved positions
//! verbatim and skips furniture types the catalog does not know.
//!
//! # Example
//!
//! ```rust
//! use billet_editor::EditorSession;
//! use kurbo::Point;
//!
//! let mut session = EditorSession::default();
//! let bed = session.place_item("single-bed", Point::new(1.25, -0.08), true)?;
//! let desk = session.place_item("desk", Point::new(0.4, -2.0), true)?;
//! session.rotate_item(desk, 90.0, true)?;
//!
//! let collisions = session.recompute_collisions();
//! assert!(!collisions.is_colliding(bed));
//! println!("{:.1}% of the floor used", session.utilization_percent());
//!
//! let json = session.to_json()?;
//! let (restored, report) = EditorSession::from_json(
//!     &json,
//!     session.catalog().clone(),
//!     session.config().clone(),
//! )?;
//! assert!(report.is_complete());
//! assert_eq!(restored.items(), session.items());
//! # Ok::<(), billet_editor::EditorError>(())
//! ```

mod config;
mod error;
mod layout;
mod selection;
mod session;
mod view;

pub use config::{EditorConfig, EditorOptions, ZoomLimits};
pub use error::{EditorError, LayoutError};
pub use layout::{DEFAULT_ROOM_HEIGHT, FurnitureEntry, Layout, RoomSpec};
pub use selection::{Selection, SelectionEvent};
pub use session::{EditorSession, LoadReport, Room};
pub use view::{TWEEN_EPSILON, Tween, Viewport, ZOOM_RATE};
