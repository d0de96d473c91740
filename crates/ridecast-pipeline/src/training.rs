//! Training workflow: fetch, window, fit, score, conditionally register.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use ridecast_core::constants::TEST_MAE_KEY;
use ridecast_core::error::{Error, Result};
use ridecast_core::traits::{FeatureStore, ModelRegistry};
use ridecast_core::types::PickupHour;
use ridecast_features::windowing::make_features_and_target;
use ridecast_model::{mean_absolute_error, root_mean_squared_error, DemandPipeline};

use crate::config::AppConfig;
use crate::fetch::fetch_frame;

/// How a training run ended
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingOutcome {
    /// The candidate improved on the incumbent (or there was none) and
    /// was registered under the returned version
    Registered {
        /// Version assigned by the registry
        version: u32,
        /// Candidate MAE
        mae: f64,
        /// Incumbent MAE, if one existed
        previous_mae: Option<f64>,
    },
    /// The candidate did not strictly improve; nothing was registered
    Skipped {
        /// Candidate MAE
        mae: f64,
        /// Incumbent MAE
        previous_mae: f64,
    },
}

/// Run the training workflow once.
///
/// Every failure mode surfaces as a distinct error: `NoData` (fetch),
/// `EmptyTransform` (windowing), `Fit` (pipeline), `Registry` /
/// `ModelNotFound` (registry I/O). The caller decides process exit; no
/// partial failure registers a model.
pub fn run_training(
    store: &dyn FeatureStore,
    registry: &dyn ModelRegistry,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<TrainingOutcome> {
    let fetch_to = PickupHour::floor_from(now).sub_hours(1);
    let fetch_from = fetch_to.sub_days(config.training.fetch_days);

    tracing::info!("Fetching training data: [{} .. {}]", fetch_from, fetch_to);
    let frame = fetch_frame(store, &config.feature_view.view(), fetch_from, fetch_to)?;

    tracing::info!(
        "Transforming {} rows across {} locations into features and targets",
        frame.len(),
        frame.num_locations()
    );
    let (features, target) = make_features_and_target(&frame, &config.window)?;
    tracing::info!(
        "Transform complete: {} rows x {} columns",
        features.num_rows(),
        features.width()
    );

    tracing::info!("Fitting pipeline ({} epochs)", config.training.epochs);
    let mut pipeline = DemandPipeline::new(config.training.pipeline_config());
    pipeline.fit(features.matrix(), &target)?;

    let predictions = pipeline.predict(features.matrix())?;
    let mae = mean_absolute_error(&target, &predictions)?;
    let rmse = root_mean_squared_error(&target, &predictions)?;
    tracing::info!("Candidate in-sample MAE {:.4}, RMSE {:.4}", mae, rmse);

    let previous_mae = match registry.latest_metrics(&config.model_name) {
        Ok(metrics) => Some(metrics.get(TEST_MAE_KEY).copied().ok_or_else(|| {
            Error::Registry(format!(
                "registered metrics for {} lack {TEST_MAE_KEY}",
                config.model_name
            ))
        })?),
        Err(Error::ModelNotFound(_)) => {
            tracing::info!("No model registered as {} yet", config.model_name);
            None
        }
        Err(e) => return Err(e),
    };

    match previous_mae {
        Some(prev) if mae >= prev => {
            tracing::info!(
                "Skipping registration: candidate MAE {:.4} does not beat {:.4}",
                mae,
                prev
            );
            Ok(TrainingOutcome::Skipped {
                mae,
                previous_mae: prev,
            })
        }
        _ => {
            if let Some(prev) = previous_mae {
                tracing::info!("Registering: MAE improved {:.4} -> {:.4}", prev, mae);
            }
            let artifact = pipeline.to_bytes()?;
            let metrics = HashMap::from([(TEST_MAE_KEY.to_string(), mae)]);
            let version = registry.register(
                &config.model_name,
                &artifact,
                &config.window.schema(),
                &metrics,
                &features.sample_row(0),
            )?;
            tracing::info!("Registered {} v{}", config.model_name, version);
            Ok(TrainingOutcome::Registered {
                version,
                mae,
                previous_mae,
            })
        }
    }
}
