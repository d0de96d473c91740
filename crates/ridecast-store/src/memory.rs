//! In-memory store and registry for tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use ridecast_core::error::{Error, Result};
use ridecast_core::traits::{FeatureStore, ModelRegistry};
use ridecast_core::types::{
    FeatureView, ModelSchema, PickupHour, PredictedDemand, TsRecord,
};

/// In-memory feature store.
///
/// Same contract as `LocalFeatureStore` without the filesystem; the
/// workflow tests run against this.
#[derive(Debug, Default)]
pub struct MemoryFeatureStore {
    series: RwLock<HashMap<FeatureView, BTreeMap<(u32, i64), TsRecord>>>,
    predictions: RwLock<HashMap<FeatureView, BTreeMap<(u32, i64), PredictedDemand>>>,
}

fn sort_key(location: ridecast_core::types::LocationId, hour: PickupHour) -> (u32, i64) {
    (location.as_u32(), hour.as_hours())
}

impl MemoryFeatureStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert time-series rows into a view
    pub fn insert_series(&self, view: &FeatureView, rows: &[TsRecord]) -> Result<()> {
        let mut series = self
            .series
            .write()
            .map_err(|_| Error::Store("series lock poisoned".to_string()))?;
        let table = series.entry(view.clone()).or_default();
        for row in rows {
            table.insert(sort_key(row.location, row.hour), *row);
        }
        Ok(())
    }

    /// Read back a prediction group, sorted by key
    pub fn predictions(&self, view: &FeatureView) -> Result<Vec<PredictedDemand>> {
        let predictions = self
            .predictions
            .read()
            .map_err(|_| Error::Store("predictions lock poisoned".to_string()))?;
        Ok(predictions
            .get(view)
            .map(|t| t.values().copied().collect())
            .unwrap_or_default())
    }
}

impl FeatureStore for MemoryFeatureStore {
    fn fetch(
        &self,
        view: &FeatureView,
        start: PickupHour,
        end: PickupHour,
    ) -> Result<Vec<TsRecord>> {
        let series = self
            .series
            .read()
            .map_err(|_| Error::Store("series lock poisoned".to_string()))?;
        let table = series
            .get(view)
            .ok_or_else(|| Error::Store(format!("feature view {view} does not exist")))?;
        Ok(table
            .values()
            .filter(|r| r.hour >= start && r.hour <= end)
            .copied()
            .collect())
    }

    fn upsert_predictions(&self, view: &FeatureView, rows: &[PredictedDemand]) -> Result<()> {
        let mut predictions = self
            .predictions
            .write()
            .map_err(|_| Error::Store("predictions lock poisoned".to_string()))?;
        let table = predictions.entry(view.clone()).or_default();
        for row in rows {
            table.insert(sort_key(row.location, row.hour), *row);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct StoredModel {
    artifact: Vec<u8>,
    metrics: HashMap<String, f64>,
    schema: ModelSchema,
    sample_input: Vec<f64>,
}

/// In-memory model registry
#[derive(Debug, Default)]
pub struct MemoryModelRegistry {
    models: RwLock<HashMap<String, Vec<StoredModel>>>,
}

impl MemoryModelRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of versions registered under a name
    pub fn version_count(&self, name: &str) -> Result<usize> {
        let models = self
            .models
            .read()
            .map_err(|_| Error::Registry("registry lock poisoned".to_string()))?;
        Ok(models.get(name).map_or(0, Vec::len))
    }

    /// Schema and sample input recorded with the latest version
    pub fn latest_schema(&self, name: &str) -> Result<(ModelSchema, Vec<f64>)> {
        let models = self
            .models
            .read()
            .map_err(|_| Error::Registry("registry lock poisoned".to_string()))?;
        models
            .get(name)
            .and_then(|v| v.last())
            .map(|m| (m.schema.clone(), m.sample_input.clone()))
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }
}

impl ModelRegistry for MemoryModelRegistry {
    fn latest_artifact(&self, name: &str) -> Result<Vec<u8>> {
        let models = self
            .models
            .read()
            .map_err(|_| Error::Registry("registry lock poisoned".to_string()))?;
        models
            .get(name)
            .and_then(|v| v.last())
            .map(|m| m.artifact.clone())
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    fn latest_metrics(&self, name: &str) -> Result<HashMap<String, f64>> {
        let models = self
            .models
            .read()
            .map_err(|_| Error::Registry("registry lock poisoned".to_string()))?;
        models
            .get(name)
            .and_then(|v| v.last())
            .map(|m| m.metrics.clone())
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    fn register(
        &self,
        name: &str,
        artifact: &[u8],
        schema: &ModelSchema,
        metrics: &HashMap<String, f64>,
        sample_input: &[f64],
    ) -> Result<u32> {
        let mut models = self
            .models
            .write()
            .map_err(|_| Error::Registry("registry lock poisoned".to_string()))?;
        let versions = models.entry(name.to_string()).or_default();
        versions.push(StoredModel {
            artifact: artifact.to_vec(),
            metrics: metrics.clone(),
            schema: schema.clone(),
            sample_input: sample_input.to_vec(),
        });
        Ok(u32::try_from(versions.len()).unwrap_or(u32::MAX))
    }
}
