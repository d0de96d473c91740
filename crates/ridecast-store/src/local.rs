//! File-backed feature store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ridecast_core::error::{Error, Result};
use ridecast_core::traits::FeatureStore;
use ridecast_core::types::{FeatureView, PickupHour, PredictedDemand, TsRecord};

/// Feature store backed by bincode tables under a root directory.
///
/// One file per feature view: `<name>_v<version>.bin` for time-series
/// views, `<name>_v<version>.pred.bin` for prediction groups. Writes
/// rewrite the whole table; tables here are a few MB of hourly rows, not
/// an event log.
#[derive(Debug, Clone)]
pub struct LocalFeatureStore {
    root: PathBuf,
}

impl LocalFeatureStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn series_path(&self, view: &FeatureView) -> PathBuf {
        self.root.join(format!("{}_v{}.bin", view.name, view.version))
    }

    fn predictions_path(&self, view: &FeatureView) -> PathBuf {
        self.root
            .join(format!("{}_v{}.pred.bin", view.name, view.version))
    }

    /// Upsert time-series rows into a view, keyed by `(location, hour)`
    pub fn insert_series(&self, view: &FeatureView, rows: &[TsRecord]) -> Result<()> {
        let path = self.series_path(view);
        let mut table: BTreeMap<_, _> = if path.exists() {
            read_table::<TsRecord>(&path)?
                .into_iter()
                .map(|r| (r.key(), r))
                .collect()
        } else {
            BTreeMap::new()
        };

        for row in rows {
            table.insert(row.key(), *row);
        }

        write_table(&path, &table.into_values().collect::<Vec<_>>())
    }

    /// Read back the rows of a prediction group, sorted by key
    pub fn read_predictions(&self, view: &FeatureView) -> Result<Vec<PredictedDemand>> {
        let path = self.predictions_path(view);
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_table(&path)
    }
}

impl FeatureStore for LocalFeatureStore {
    fn fetch(
        &self,
        view: &FeatureView,
        start: PickupHour,
        end: PickupHour,
    ) -> Result<Vec<TsRecord>> {
        let path = self.series_path(view);
        if !path.exists() {
            return Err(Error::Store(format!("feature view {view} does not exist")));
        }

        let rows: Vec<TsRecord> = read_table(&path)?;
        Ok(rows
            .into_iter()
            .filter(|r| r.hour >= start && r.hour <= end)
            .collect())
    }

    fn upsert_predictions(&self, view: &FeatureView, rows: &[PredictedDemand]) -> Result<()> {
        let path = self.predictions_path(view);
        let mut table: BTreeMap<_, _> = if path.exists() {
            read_table::<PredictedDemand>(&path)?
                .into_iter()
                .map(|r| (r.key(), r))
                .collect()
        } else {
            BTreeMap::new()
        };

        for row in rows {
            table.insert(row.key(), *row);
        }

        write_table(&path, &table.into_values().collect::<Vec<_>>())
    }
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}

fn write_table<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let bytes = bincode::serialize(rows)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridecast_core::types::LocationId;

    fn rec(loc: u32, hour: i64, rides: u32) -> TsRecord {
        TsRecord::new(LocationId::new(loc), PickupHour::from_hours(hour), rides)
    }

    #[test]
    fn test_series_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::open(dir.path()).unwrap();
        let view = FeatureView::new("hourly_rides", 1);

        store
            .insert_series(&view, &[rec(1, 10, 5), rec(1, 11, 6), rec(2, 10, 7)])
            .unwrap();

        let rows = store
            .fetch(&view, PickupHour::from_hours(10), PickupHour::from_hours(10))
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_series_upsert_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::open(dir.path()).unwrap();
        let view = FeatureView::new("hourly_rides", 1);

        store.insert_series(&view, &[rec(1, 10, 5)]).unwrap();
        store.insert_series(&view, &[rec(1, 10, 9)]).unwrap();

        let rows = store
            .fetch(&view, PickupHour::EPOCH, PickupHour::from_hours(100))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rides, 9);
    }

    #[test]
    fn test_missing_view_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::open(dir.path()).unwrap();
        let view = FeatureView::new("nope", 1);

        let err = store
            .fetch(&view, PickupHour::EPOCH, PickupHour::from_hours(1))
            .unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn test_prediction_upsert_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFeatureStore::open(dir.path()).unwrap();
        let view = FeatureView::new("demand_predictions", 1);

        let hour = PickupHour::from_hours(500);
        store
            .upsert_predictions(
                &view,
                &[PredictedDemand::new(LocationId::new(1), hour, 12.0)],
            )
            .unwrap();
        store
            .upsert_predictions(
                &view,
                &[
                    PredictedDemand::new(LocationId::new(1), hour, 14.5),
                    PredictedDemand::new(LocationId::new(2), hour, 3.0),
                ],
            )
            .unwrap();

        let rows = store.read_predictions(&view).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rides, 14.5);
    }
}
