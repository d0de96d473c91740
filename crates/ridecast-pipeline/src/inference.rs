//! Inference workflow: fetch, window, predict, publish.

use chrono::{DateTime, Utc};

use ridecast_core::error::Result;
use ridecast_core::traits::{FeatureStore, ModelRegistry};
use ridecast_core::types::{PickupHour, PredictedDemand};
use ridecast_features::windowing::make_features;
use ridecast_model::DemandPipeline;

use crate::config::AppConfig;
use crate::fetch::fetch_frame;

/// Run the inference workflow once and return the published rows.
///
/// Predictions are made from the most recent feature row of every
/// location with enough history, stamped with `now` ceiled to the next
/// hour boundary, and upserted into the predictions group keyed by
/// `(location, hour)`. Values are rounded to whole rides and floored at
/// zero.
pub fn run_inference(
    store: &dyn FeatureStore,
    registry: &dyn ModelRegistry,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<Vec<PredictedDemand>> {
    let fetch_to = PickupHour::floor_from(now).sub_hours(1);
    let fetch_from = fetch_to.sub_days(config.inference.fetch_days);

    tracing::info!("Fetching inference history: [{} .. {}]", fetch_from, fetch_to);
    let frame = fetch_frame(store, &config.feature_view.view(), fetch_from, fetch_to)?;

    let features = make_features(&frame, &config.window)?;
    tracing::info!(
        "Built {} feature rows across {} locations",
        features.num_rows(),
        frame.num_locations()
    );

    let artifact = registry.latest_artifact(&config.model_name)?;
    let pipeline = DemandPipeline::from_bytes(&artifact)?;
    let predicted = pipeline.predict(features.matrix())?;

    let prediction_hour = PickupHour::ceil_from(now);
    let rows: Vec<PredictedDemand> = features
        .latest_per_location()
        .into_iter()
        .map(|idx| {
            PredictedDemand::new(
                features.locations()[idx],
                prediction_hour,
                predicted[idx].round().max(0.0),
            )
        })
        .collect();

    log_top_predictions(&rows, config.inference.log_top);

    store.upsert_predictions(&config.predictions.view(), &rows)?;
    tracing::info!(
        "Published {} predictions for {} to {}",
        rows.len(),
        prediction_hour,
        config.predictions.view()
    );
    Ok(rows)
}

fn log_top_predictions(rows: &[PredictedDemand], top: usize) {
    let mut ranked: Vec<&PredictedDemand> = rows.iter().collect();
    ranked.sort_by(|a, b| b.rides.total_cmp(&a.rides));
    for (rank, row) in ranked.iter().take(top).enumerate() {
        tracing::info!(
            "#{:<3} location {} -> {:.0} rides",
            rank + 1,
            row.location,
            row.rides
        );
    }
}
