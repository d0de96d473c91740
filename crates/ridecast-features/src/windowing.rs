//! Sliding-window transform from hourly series to supervised tables.

use ndarray::{Array1, Array2, ArrayView1};
use ridecast_core::constants::{DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZE};
use ridecast_core::error::{Error, Result};
use ridecast_core::types::{LocationId, ModelSchema, PickupHour};

use crate::frame::TsFrame;

/// Name of the training target column
pub const TARGET_COLUMN: &str = "rides_next_hour";

/// Sliding-window parameters.
///
/// `window_size` and `step_size` must match between training and
/// inference; predictions computed against a different feature shape are
/// garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WindowConfig {
    /// Trailing hours forming one feature vector
    pub window_size: usize,
    /// Hours the anchor advances between samples
    pub step_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl WindowConfig {
    /// Create a config
    #[must_use]
    pub const fn new(window_size: usize, step_size: usize) -> Self {
        Self {
            window_size,
            step_size,
        }
    }

    /// Reject degenerate parameters
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.step_size == 0 {
            return Err(Error::InvalidWindow {
                window_size: self.window_size,
                step_size: self.step_size,
            });
        }
        Ok(())
    }

    /// Feature column names in matrix order:
    /// `rides_t-<window_size>` .. `rides_t-1`, then `location_id`
    #[must_use]
    pub fn feature_columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = (1..=self.window_size)
            .rev()
            .map(|k| format!("rides_t-{k}"))
            .collect();
        cols.push("location_id".to_string());
        cols
    }

    /// Schema of the supervised table this config produces
    #[must_use]
    pub fn schema(&self) -> ModelSchema {
        ModelSchema::new(self.feature_columns(), vec![TARGET_COLUMN.to_string()])
    }
}

/// Feature rows produced by the windowing transform.
///
/// The matrix has one column per trailing hour (oldest first) plus a
/// final `location_id` column; side vectors carry each row's location and
/// anchor hour. Row order is location ascending, anchor ascending.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    window_size: usize,
    data: Array2<f64>,
    locations: Vec<LocationId>,
    anchor_hours: Vec<PickupHour>,
}

impl FeatureTable {
    /// Number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.locations.len()
    }

    /// Number of matrix columns (`window_size + 1`)
    #[must_use]
    pub fn width(&self) -> usize {
        self.window_size + 1
    }

    /// The window width the table was built with
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The full feature matrix
    #[must_use]
    pub fn matrix(&self) -> &Array2<f64> {
        &self.data
    }

    /// One feature row
    #[must_use]
    pub fn row(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.data.row(idx)
    }

    /// Per-row locations
    #[must_use]
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Per-row anchor hours
    #[must_use]
    pub fn anchor_hours(&self) -> &[PickupHour] {
        &self.anchor_hours
    }

    /// Row indices of the most recent anchor per location.
    ///
    /// Rows are grouped by location with anchors ascending, so this is the
    /// last row of each group.
    #[must_use]
    pub fn latest_per_location(&self) -> Vec<usize> {
        let mut latest = Vec::new();
        for (idx, loc) in self.locations.iter().enumerate() {
            match self.locations.get(idx + 1) {
                Some(next) if next == loc => {}
                _ => latest.push(idx),
            }
        }
        latest
    }

    /// Copy out one row, e.g. as a registration sample input
    #[must_use]
    pub fn sample_row(&self, idx: usize) -> Vec<f64> {
        self.data.row(idx).to_vec()
    }
}

/// Transform a frame into feature rows only (inference).
///
/// Anchors run from index `window_size` through `len` inclusive: the final
/// window may end at the last observed row, in which case the anchor hour
/// is the first unobserved hour.
pub fn make_features(frame: &TsFrame, config: &WindowConfig) -> Result<FeatureTable> {
    let (table, _) = build(frame, config, false)?;
    Ok(table)
}

/// Transform a frame into feature rows plus a target vector (training).
///
/// Anchors stop at `len - 1`: the anchor row itself supplies the target,
/// and its hour is the prediction timestamp.
pub fn make_features_and_target(
    frame: &TsFrame,
    config: &WindowConfig,
) -> Result<(FeatureTable, Array1<f64>)> {
    let (table, target) = build(frame, config, true)?;
    Ok((table, target.unwrap_or_else(|| Array1::zeros(0))))
}

fn build(
    frame: &TsFrame,
    config: &WindowConfig,
    with_target: bool,
) -> Result<(FeatureTable, Option<Array1<f64>>)> {
    config.validate()?;

    let w = config.window_size;
    let mut flat: Vec<f64> = Vec::new();
    let mut locations: Vec<LocationId> = Vec::new();
    let mut anchor_hours: Vec<PickupHour> = Vec::new();
    let mut target: Vec<f64> = Vec::new();

    for series in frame.locations() {
        let len = series.len();
        let max_anchor = if with_target {
            match len.checked_sub(1) {
                Some(m) => m,
                None => continue,
            }
        } else {
            len
        };

        let mut anchor = w;
        while anchor <= max_anchor {
            for rec in &series[anchor - w..anchor] {
                flat.push(f64::from(rec.rides));
            }
            flat.push(series[0].location.as_f64());
            locations.push(series[0].location);

            let anchor_hour = if anchor < len {
                series[anchor].hour
            } else {
                series[len - 1].hour.add_hours(1)
            };
            anchor_hours.push(anchor_hour);

            if with_target {
                target.push(f64::from(series[anchor].rides));
            }
            anchor += config.step_size;
        }
    }

    if locations.is_empty() {
        return Err(Error::EmptyTransform(format!(
            "no location in {} rows has {} contiguous hours of history",
            frame.len(),
            w + usize::from(with_target)
        )));
    }

    let data = Array2::from_shape_vec((locations.len(), w + 1), flat)
        .map_err(|e| Error::EmptyTransform(e.to_string()))?;

    let table = FeatureTable {
        window_size: w,
        data,
        locations,
        anchor_hours,
    };
    let target = with_target.then(|| Array1::from_vec(target));
    Ok((table, target))
}
