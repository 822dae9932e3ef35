//! Curve Evaluation Benchmarks
//!
//! Benchmarks for per-sample evaluation through the dispatch table, the
//! derivative path, and catalog sampling.
//!
//! Run with: `cargo bench --bench curve_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curvekit::prelude::*;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for curve in [
        EasingType::Linear,
        EasingType::QuadInOut,
        EasingType::ExpoOut,
        EasingType::ElasticInOut,
        EasingType::BounceOut,
        EasingType::Spring,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(curve), &curve, |bench, &curve| {
            bench.iter(|| evaluate(black_box(curve), black_box(0.37), 0.0, 100.0));
        });
    }

    group.finish();
}

fn bench_derivative(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivative");

    for curve in [
        EasingType::QuadInOut,
        EasingType::ElasticIn,
        EasingType::BounceInOut,
        EasingType::Spring,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(curve), &curve, |bench, &curve| {
            bench.iter(|| evaluate_derivative(black_box(curve), black_box(0.37), 0.0, 100.0));
        });
    }

    group.finish();
}

fn bench_cached_function(c: &mut Criterion) {
    let f = lookup_value_function(EasingType::CubicInOut.index()).unwrap();
    c.bench_function("cached_fn_frame_sweep", |bench| {
        bench.iter(|| {
            let mut acc = 0.0;
            for frame in 1..60 {
                acc += f(black_box(f64::from(frame) / 60.0), 0.0, 1.0);
            }
            black_box(acc)
        });
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for samples in [10usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |bench, &samples| {
                bench.iter(|| sample_curve(EasingType::BackInOut, black_box(samples), Range::UNIT));
            },
        );
    }

    group.finish();
}

fn bench_check_catalog(c: &mut Criterion) {
    c.bench_function("check_catalog", |bench| {
        bench.iter(|| check_catalog(black_box(DEFAULT_STEP), DEFAULT_SLOPE_TOLERANCE));
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_derivative,
    bench_cached_function,
    bench_sampling,
    bench_check_catalog
);
criterion_main!(benches);
