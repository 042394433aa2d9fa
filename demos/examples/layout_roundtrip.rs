// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save and load a layout document.
//!
//! Unknown furniture types are skipped on load; everything else comes back
//! exactly where it was saved.
//!
//! Run:
//! - `cargo run -p billet_demos --example layout_roundtrip`

use billet_editor::{EditorConfig, EditorError, EditorSession, Layout};
use billet_layout::Catalog;

const SAVED: &str = r#"{
  "room": { "width": 3.5, "depth": 5.05, "height": 2.8 },
  "furniture": [
    { "type": "single-bed", "x": -1.15, "z": -1.325, "rotation": 0 },
    { "type": "locker", "x": 1.35, "z": -2.025, "rotation": 3.141592653589793 },
    { "type": "sofa", "x": 0.0, "z": 0.0, "rotation": 0 }
  ]
}"#;

fn main() -> Result<(), EditorError> {
    let (mut session, report) =
        EditorSession::from_json(SAVED, Catalog::barracks(), EditorConfig::default())?;
    println!("loaded {} items, skipped {:?}", session.items().len(), report.skipped);

    session.nudge_item(0, 0, 2)?;
    let json = session.to_json()?;
    println!("{json}");

    let layout = Layout::from_json(&json)?;
    assert_eq!(layout.furniture.len(), 2);
    Ok(())
}
