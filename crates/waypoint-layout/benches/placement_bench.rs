//! Benchmarks for the tooltip orientation resolver.
//!
//! Run with: cargo bench -p waypoint-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use waypoint_core::{Size, Viewport, ViewportRect};
use waypoint_layout::{CardinalOrientation, PlacementRequest, mask_rect, resolve_placement};

fn request_at(left: f64, top: f64) -> PlacementRequest {
    PlacementRequest::new(ViewportRect::new(left, top, 120.0, 40.0)).tooltip(Size::new(280.0, 140.0))
}

fn bench_first_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/first_fit");
    let viewport = Viewport::new(1280.0, 800.0).scrolled(0.0, 2400.0);

    // Positions where the first, a middle, and no candidate fits.
    let cases = [
        ("center", request_at(560.0, 300.0)),
        ("bottom_right", request_at(1150.0, 760.0)),
        ("oversized", request_at(0.0, 0.0).tooltip(Size::new(2000.0, 2000.0))),
    ];

    for (name, req) in &cases {
        group.bench_with_input(BenchmarkId::new("default_order", name), req, |b, req| {
            b.iter(|| black_box(resolve_placement(black_box(req), &viewport)))
        });
    }

    group.finish();
}

fn bench_preference_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/preferences");
    let viewport = Viewport::new(1280.0, 800.0);

    for n in [1usize, 4, 12] {
        let req = request_at(1150.0, 760.0)
            .preferences(CardinalOrientation::ALL.into_iter().cycle().take(n));
        group.bench_with_input(BenchmarkId::new("fallback_scan", n), &req, |b, req| {
            b.iter(|| black_box(resolve_placement(black_box(req), &viewport)))
        });
    }

    group.finish();
}

fn bench_mask(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 800.0).scrolled(13.5, 977.25);
    let target = ViewportRect::new(333.3, 121.7, 98.6, 31.2);
    c.bench_function("placement/mask_rect", |b| {
        b.iter(|| black_box(mask_rect(black_box(&target), 5.0, &viewport)))
    });
}

criterion_group!(benches, bench_first_fit, bench_preference_lengths, bench_mask);
criterion_main!(benches);
