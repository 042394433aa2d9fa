// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Drop furniture from screen coordinates, drag, rotate, and read back the
//! collision report and floor utilization.
//!
//! Run:
//! - `cargo run -p billet_demos --example placement_basics`

use billet_editor::{EditorError, EditorSession};
use kurbo::{Point, Size, Vec2};

fn main() -> Result<(), EditorError> {
    let mut session = EditorSession::default();
    session.viewport_mut().center_in(Size::new(800.0, 600.0));

    // A palette drop at a canvas position becomes a room position.
    let drop = session.viewport().to_world(Point::new(525.0, 292.0));
    let bed = session.drop_item("single-bed", drop)?;
    println!("bed at {:?}", session.item(bed).unwrap().position);

    // A desk dropped on top of the bed collides; collisions are advisory.
    let desk = session.place_item("desk", drop, true)?;
    let report = session.recompute_collisions();
    println!("colliding pairs: {:?}", report.pairs);

    // Drag the desk away, release, and turn it a quarter.
    let delta = session.viewport().drag_delta(Vec2::new(-260.0, -200.0));
    let start = session.item(desk).unwrap().position;
    session.drag_item(desk, start + delta)?;
    session.finalize_placement(desk)?;
    // Six rotate keystrokes of 15 degrees.
    session.rotate_steps(desk, 6)?;
    println!("desk at {:?}", session.item(desk).unwrap().position);

    let report = session.highlighted_collisions();
    println!("colliding pairs after drag: {:?}", report.pairs);
    println!("floor used: {:.1}%", session.utilization_percent());
    Ok(())
}
