//! Benchmarks for pipeline fitting and batch prediction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ridecast_features::frame::TsFrame;
use ridecast_features::synthetic::{SyntheticConfig, SyntheticDemand};
use ridecast_features::windowing::{make_features_and_target, WindowConfig};
use ridecast_model::{DemandPipeline, PipelineConfig, RegressorConfig};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let config = SyntheticConfig {
        num_locations: 20,
        ..Default::default()
    };
    let frame = TsFrame::from_records(SyntheticDemand::with_seed(config, 11).generate(24 * 30));
    let (features, target) =
        make_features_and_target(&frame, &WindowConfig::new(168, 23)).unwrap();

    let pipeline_config = PipelineConfig {
        regressor: RegressorConfig {
            epochs: 200,
            ..Default::default()
        },
    };

    group.bench_function("fit_200_epochs", |b| {
        b.iter(|| {
            let mut pipeline = DemandPipeline::new(pipeline_config);
            pipeline
                .fit(black_box(features.matrix()), black_box(&target))
                .unwrap();
            black_box(pipeline);
        });
    });

    let mut fitted = DemandPipeline::new(pipeline_config);
    fitted.fit(features.matrix(), &target).unwrap();

    group.bench_function("predict_batch", |b| {
        b.iter(|| {
            black_box(fitted.predict(black_box(features.matrix())).unwrap());
        });
    });

    group.bench_function("artifact_encode", |b| {
        b.iter(|| {
            black_box(fitted.to_bytes().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
