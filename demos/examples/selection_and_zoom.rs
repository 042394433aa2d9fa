// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click selection and eased wheel zoom.
//!
//! Selection changes come back as deselect/select events; the zoom is eased
//! by ticking the viewport once per frame.
//!
//! Run:
//! - `cargo run -p billet_demos --example selection_and_zoom`

use billet_editor::{EditorError, EditorSession, SelectionEvent};
use kurbo::Point;

fn main() -> Result<(), EditorError> {
    let mut session = EditorSession::default();
    let desk = session.place_item("desk", Point::new(0.0, -1.0), false)?;
    let chair = session.place_item("chair", Point::new(0.3, -1.0), false)?;

    // The chair is drawn last, so it wins where the two overlap.
    let events = session.select_at(Point::new(0.3, -1.0));
    println!("click on chair: {events:?}");
    let events = session.select_at(Point::new(-0.4, -1.0));
    assert_eq!(
        events,
        vec![SelectionEvent::Deselected(chair), SelectionEvent::Selected(desk)]
    );
    println!("click on desk: {events:?}");

    // Double click: a quarter turn.
    session.rotate_item(desk, 90.0, true)?;

    // Two wheel notches towards the user, then let the zoom settle at 60 fps.
    let view = session.viewport_mut();
    view.zoom(-120.0);
    view.zoom(-120.0);
    let mut frames = 0;
    while view.tick(1.0 / 60.0) {
        frames += 1;
    }
    println!("scale {:.1} px/m after {frames} frames", view.scale());
    Ok(())
}
