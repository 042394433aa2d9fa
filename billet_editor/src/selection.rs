// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state: compute deselect/select transitions from index changes.
//!
//! ```
//! use billet_editor::{Selection, SelectionEvent};
//! let mut s = Selection::new();
//! assert_eq!(s.select(Some(2)), vec![SelectionEvent::Selected(2)]);
//! assert_eq!(
//!     s.select(Some(0)),
//!     vec![SelectionEvent::Deselected(2), SelectionEvent::Selected(0)]
//! );
//! assert!(s.select(Some(0)).is_empty());
//! ```

/// The selected item, tracked by index into the session's item list.
///
/// Transitions are returned as events so a UI can update outlines without
/// storing a flag on each item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<usize>,
}

/// A selection transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The item stopped being selected. Always precedes the matching `Selected`.
    Deselected(usize),
    /// The item became selected.
    Selected(usize),
}

impl Selection {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Select `index`, or nothing, and return the transitions.
    pub fn select(&mut self, index: Option<usize>) -> Vec<SelectionEvent> {
        if index == self.current {
            return Vec::new();
        }
        let mut out = Vec::new();
        if let Some(old) = self.current {
            out.push(SelectionEvent::Deselected(old));
        }
        if let Some(new) = index {
            out.push(SelectionEvent::Selected(new));
        }
        self.current = index;
        out
    }

    /// Deselect, returning the transition if something was selected.
    pub fn clear(&mut self) -> Vec<SelectionEvent> {
        self.select(None)
    }

    /// Keep the selection consistent after the item at `removed` was deleted.
    ///
    /// Deselects if it was the selected item; shifts the index down if the
    /// selected item came after it.
    pub fn on_removed(&mut self, removed: usize) -> Vec<SelectionEvent> {
        match self.current {
            Some(i) if i == removed => self.clear(),
            Some(i) if i > removed => {
                self.current = Some(i - 1);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
