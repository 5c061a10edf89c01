use criterion::{criterion_group, criterion_main, Criterion};

use mandelscope_core::{compute, Explorer, ViewBounds};
use mandelscope_render::{Blue, RenderBuffer};

fn bench_full_grid(c: &mut Criterion) {
    let bounds = ViewBounds::INITIAL;

    c.bench_function("compute_640x480_50iter", |b| {
        b.iter(|| compute(640, 480, &bounds, 50, 4.0));
    });
}

fn bench_iteration_throughput(c: &mut Criterion) {
    let bounds = ViewBounds::new(-0.75, -0.74, 0.1, 0.11).unwrap();

    c.bench_function("compute_256x256_1000iter", |b| {
        b.iter(|| compute(256, 256, &bounds, 1000, 4.0));
    });
}

fn bench_pan_round_trip(c: &mut Criterion) {
    let mut explorer = Explorer::new(320, 240).unwrap();

    c.bench_function("explorer_pan_undo_320x240", |b| {
        b.iter(|| {
            explorer.pan(0.01, 0.0).unwrap();
            explorer.undo().unwrap();
        });
    });
}

fn bench_colorize(c: &mut Criterion) {
    let grid = compute(640, 480, &ViewBounds::INITIAL, 50, 4.0);

    c.bench_function("colorize_640x480", |b| {
        b.iter(|| RenderBuffer::colorize(&grid, &Blue));
    });
}

criterion_group!(
    benches,
    bench_full_grid,
    bench_iteration_throughput,
    bench_pan_round_trip,
    bench_colorize
);
criterion_main!(benches);
