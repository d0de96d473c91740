//! Collaborator traits for the forecasting pipelines.
//!
//! The feature store and model registry are external managed services;
//! the workflows only ever touch them through these narrow seams, so tests
//! and local runs can substitute file-backed or in-memory implementations.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{FeatureView, ModelSchema, PickupHour, PredictedDemand, TsRecord};

/// Trait for feature-store access
pub trait FeatureStore: Send + Sync {
    /// Fetch the rows of a feature view within an inclusive hour range.
    ///
    /// Rows may come back unordered and may extend past the requested
    /// range on stores with coarse partitioning; callers filter and sort.
    fn fetch(
        &self,
        view: &FeatureView,
        start: PickupHour,
        end: PickupHour,
    ) -> Result<Vec<TsRecord>>;

    /// Upsert prediction rows into a feature group, keyed by
    /// `(location_id, pickup_hour)` with event time = pickup_hour.
    fn upsert_predictions(&self, view: &FeatureView, rows: &[PredictedDemand]) -> Result<()>;
}

/// Trait for model-registry access
pub trait ModelRegistry: Send + Sync {
    /// Fetch the most recently registered artifact for a model name
    fn latest_artifact(&self, name: &str) -> Result<Vec<u8>>;

    /// Fetch the metrics recorded with the most recent registration.
    ///
    /// Returns `Error::ModelNotFound` when nothing is registered under
    /// `name`.
    fn latest_metrics(&self, name: &str) -> Result<HashMap<String, f64>>;

    /// Register a new model version; returns the version number assigned.
    ///
    /// Versions increment from 1. Registered artifacts are immutable.
    fn register(
        &self,
        name: &str,
        artifact: &[u8],
        schema: &ModelSchema,
        metrics: &HashMap<String, f64>,
        sample_input: &[f64],
    ) -> Result<u32>;
}
