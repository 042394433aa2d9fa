// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-arrange a barracks room.
//!
//! Run:
//! - `cargo run -p billet_demos --example auto_arrange`

use billet_layout::{Arranger, Catalog, FloorPlan, PlacedItem, all_collisions};
use kurbo::Point;

fn main() {
    let catalog = Catalog::barracks();
    let plan = FloorPlan::barracks(3.5, 5.05);
    let mut items: Vec<PlacedItem> = [
        "single-bed",
        "desk",
        "dresser-5",
        "bed-drawer-2",
        "trash-bin",
        "chair",
        "locker",
        "footlocker",
    ]
    .into_iter()
    .map(|id| PlacedItem::new(id, Point::ZERO, 0.0))
    .collect();

    let arranger = Arranger::new(plan.main_room_bounds(), &catalog);
    for placement in arranger.arrange(&items) {
        let item = &mut items[placement.index];
        placement.apply(item);
        println!(
            "{:>14} -> ({:6.3}, {:6.3}) rot {:5.1} deg",
            item.archetype_id,
            item.position.x,
            item.position.y,
            item.rotation.to_degrees()
        );
    }

    let footprints: Vec<_> = items
        .iter()
        .filter_map(|item| item.resolve(&catalog))
        .collect();
    let report = all_collisions(&footprints);
    if report.is_empty() {
        println!("no collisions");
    } else {
        println!("canonical slots overlap: {:?}", report.pairs);
    }
}
