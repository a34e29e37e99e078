//! Core microbenchmarks with 95% confidence intervals.
//!
//! The physics, classifier and scaler run once per animation frame in
//! every front end; these benchmarks catch a regression that would turn
//! a sub-microsecond call into a frame-budget problem.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use satorb::orbit::classify::classify_orbit;
use satorb::orbit::physics::{OrbitRequest, OrbitalParameters};
use satorb::orbit::scale::{scale_for_display, ScaleConfig};

/// Full parameter computation across representative altitudes.
fn bench_compute_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_compute");
    group.sample_size(100);
    group.confidence_level(0.95);

    for altitude_km in [400.0, 20_200.0, 35_786.0] {
        let request = OrbitRequest::new(1000.0, altitude_km).expect("valid request");
        group.bench_with_input(
            BenchmarkId::new("parameters", altitude_km as u64),
            &request,
            |b, request| b.iter(|| OrbitalParameters::compute(black_box(request))),
        );
    }

    group.finish();
}

/// Band classification across all five bands.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_classify");
    group.sample_size(100);

    let altitudes = [100.0, 400.0, 20_200.0, 35_786.0, 80_000.0];
    group.bench_function("classify_all_bands", |b| {
        b.iter(|| {
            for altitude_km in altitudes {
                black_box(classify_orbit(black_box(altitude_km)));
            }
        });
    });

    group.finish();
}

/// Display scaling in both regimes plus the clamped tail.
fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_scale");
    group.sample_size(100);

    let config = ScaleConfig::default();
    let altitudes = [200.0, 900.0, 5000.0, 35_786.0, 1e8];
    group.bench_function("scale_for_display", |b| {
        b.iter(|| {
            for altitude_km in altitudes {
                black_box(scale_for_display(black_box(altitude_km), &config));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_parameters, bench_classify, bench_scale);
criterion_main!(benches);
