#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for adaptive signal rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waveplot::prelude::*;

fn noisy_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.001;
            t.sin() * 50.0 + (t * 10.0).sin() * 10.0 + (t * 100.0).sin() * 2.0
        })
        .collect()
}

fn high_density_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("high_density_render");

    for size in [10_000, 100_000, 1_000_000] {
        let values = noisy_signal(size);
        let viewport = Viewport::new((0.0, size as f64), (-70.0, 70.0), 800, 600)
            .expect("viewport should be valid");

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let series = Series::new(black_box(values.clone()), 1.0)
                    .expect("series should be valid");
                SignalPlot::new(series)
                    .to_framebuffer(&viewport)
                    .expect("render should succeed")
            });
        });
    }

    group.finish();
}

fn low_density_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("low_density_render");

    let values = noisy_signal(1_000_000);
    let series = Series::new(values, 1.0).expect("series should be valid");
    // 200 visible samples across 800 px
    let viewport = Viewport::new((500_000.0, 500_200.0), (-70.0, 70.0), 800, 600)
        .expect("viewport should be valid");
    let plot = SignalPlot::new(series);

    group.bench_function("pan_200_samples", |b| {
        b.iter(|| {
            plot.to_framebuffer(black_box(&viewport))
                .expect("render should succeed")
        });
    });

    group.finish();
}

fn reducer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_reducer");

    let values = noisy_signal(1_000_000);
    let viewport = Viewport::new((0.0, 1_000_000.0), (-70.0, 70.0), 800, 600)
        .expect("viewport should be valid");

    group.bench_function("linear_scan", |b| {
        let series = Series::new(values.clone(), 1.0).expect("series should be valid");
        let plot = SignalPlot::new(series);
        b.iter(|| {
            plot.to_framebuffer(black_box(&viewport))
                .expect("render should succeed")
        });
    });

    group.bench_function("blocked", |b| {
        let series = Series::new(values.clone(), 1.0).expect("series should be valid");
        let reducer = BlockedReducer::new(&values).expect("build should succeed");
        let plot = SignalPlot::new(series).reducer(reducer);
        b.iter(|| {
            plot.to_framebuffer(black_box(&viewport))
                .expect("render should succeed")
        });
    });

    group.bench_function("blocked_build", |b| {
        b.iter(|| BlockedReducer::new(black_box(&values)).expect("build should succeed"));
    });

    group.finish();
}

criterion_group!(
    benches,
    high_density_benchmark,
    low_density_benchmark,
    reducer_benchmark
);
criterion_main!(benches);
