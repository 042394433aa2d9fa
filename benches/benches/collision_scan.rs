// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use billet_layout::{Footprint, all_collisions, is_colliding, space_utilization};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `count` furniture-sized footprints scattered over a `side` × `side` room,
/// with arbitrary rotations.
fn gen_room(count: usize, side: f64) -> Vec<Footprint> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let center = Point::new(
                (rng.next_f64() - 0.5) * side,
                (rng.next_f64() - 0.5) * side,
            );
            let width = 0.3 + rng.next_f64() * 1.0;
            let depth = 0.3 + rng.next_f64() * 1.9;
            let rotation = rng.next_f64() * core::f64::consts::TAU;
            Footprint::new(center, width, depth, rotation)
        })
        .collect()
}

fn bench_all_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_collisions");
    for &n in &[10usize, 40, 160] {
        let room = gen_room(n, 8.0);
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_function(format!("pairs_n{}", n), |b| {
            b.iter(|| black_box(all_collisions(black_box(&room))).len())
        });
    }
    group.finish();
}

fn bench_single_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_item");
    let room = gen_room(40, 8.0);
    let candidate = Footprint::new(Point::new(0.1, -0.2), 1.2, 0.6, 0.3);
    group.bench_function("is_colliding_n40", |b| {
        b.iter(|| is_colliding(black_box(&candidate), black_box(&room), Some(0)))
    });
    group.bench_function("space_utilization_n40", |b| {
        b.iter(|| space_utilization(black_box(&room), 8.0, 8.0))
    });
    group.finish();
}

criterion_group!(benches, bench_all_collisions, bench_single_item);
criterion_main!(benches);
