//! Benchmarks for the sliding-window transform.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ridecast_features::frame::TsFrame;
use ridecast_features::synthetic::{SyntheticConfig, SyntheticDemand};
use ridecast_features::windowing::{make_features, make_features_and_target, WindowConfig};

fn month_of_data(num_locations: u32) -> TsFrame {
    let config = SyntheticConfig {
        num_locations,
        ..Default::default()
    };
    let mut gen = SyntheticDemand::with_seed(config, 7);
    TsFrame::from_records(gen.generate(24 * 35))
}

fn bench_windowing(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing");

    let frame = month_of_data(50);
    let config = WindowConfig::new(24 * 28, 23);

    group.bench_function("make_features_50_locations", |b| {
        b.iter(|| {
            black_box(make_features(&frame, &config).unwrap());
        });
    });

    group.bench_function("make_features_and_target_50_locations", |b| {
        b.iter(|| {
            black_box(make_features_and_target(&frame, &config).unwrap());
        });
    });

    let dense = WindowConfig::new(168, 1);
    group.bench_function("dense_step_1_week_window", |b| {
        b.iter(|| {
            black_box(make_features_and_target(&frame, &dense).unwrap());
        });
    });

    group.finish();
}

fn bench_frame_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let config = SyntheticConfig {
        num_locations: 50,
        ..Default::default()
    };
    let records = SyntheticDemand::with_seed(config, 7).generate(24 * 35);

    group.bench_function("from_records_sort_dedup", |b| {
        b.iter(|| {
            black_box(TsFrame::from_records(records.clone()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_windowing, bench_frame_construction);
criterion_main!(benches);
