// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use billet_layout::{
    Arranger, Catalog, FloorPlan, Footprint, GridSnapper, PlacedItem, RoomBounds, SearchPolicy,
    find_optimal_position,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn barracks_items() -> Vec<PlacedItem> {
    [
        "single-bed",
        "single-bed",
        "locker",
        "locker",
        "desk",
        "chair",
        "footlocker",
        "dresser",
        "bed-drawer-2",
        "nightstand",
        "trash-bin",
    ]
    .into_iter()
    .map(|id| PlacedItem::new(id, Point::ZERO, 0.0))
    .collect()
}

fn bench_optimal_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_optimal_position");
    let policy = SearchPolicy::default();
    for &(w, d) in &[(3.5, 3.55), (6.0, 4.0), (10.0, 8.0)] {
        let room = RoomBounds::centered(w, d);
        let existing = vec![
            Footprint::new(Point::new(room.min_x + 0.6, 0.0), 1.0, 2.15, 0.0),
            Footprint::new(Point::new(0.0, room.min_z + 0.5), 1.2, 0.6, 0.0),
        ];
        group.bench_function(format!("room_{}x{}", w, d), |b| {
            b.iter(|| find_optimal_position(0.45, 0.45, black_box(&room), &existing, &policy))
        });
    }
    let full = RoomBounds::centered(2.0, 2.0);
    let blocker = [Footprint::new(Point::ZERO, 2.0, 2.0, 0.0)];
    group.bench_function("exhausted_2x2", |b| {
        b.iter(|| find_optimal_position(0.3, 0.3, black_box(&full), &blocker, &policy))
    });
    group.finish();
}

fn bench_arrange(c: &mut Criterion) {
    let catalog = Catalog::barracks();
    let bounds = FloorPlan::barracks(3.5, 5.05).main_room_bounds();
    let items = barracks_items();
    c.bench_function("arrange_barracks", |b| {
        b.iter_batched(
            || Arranger::new(bounds, &catalog),
            |arranger| black_box(arranger.arrange(&items)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_snap(c: &mut Criterion) {
    let grid = GridSnapper::for_room(0.1, 3.5, 5.05);
    c.bench_function("snap_drag_path", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..100 {
                let raw = Point::new(f64::from(i) * 0.013 - 0.6, f64::from(i) * -0.021);
                acc += grid.snap(black_box(raw), 1.0, 2.15, 0.0).x;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_optimal_position, bench_arrange, bench_snap);
criterion_main!(benches);
