//! The scaler + regressor pipeline registered as one artifact.

use ndarray::{Array1, Array2};
use ridecast_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::regressor::{LinearRegressor, RegressorConfig};
use crate::scaling::StandardScaler;

/// Pipeline hyperparameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Regressor hyperparameters
    pub regressor: RegressorConfig,
}

/// The demand-forecasting pipeline: z-score scaling followed by linear
/// regression.
///
/// Serialized whole with bincode, so the registry artifact carries the
/// scaler statistics alongside the fitted weights and inference cannot
/// normalize with the wrong statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandPipeline {
    scaler: StandardScaler,
    regressor: LinearRegressor,
}

impl DemandPipeline {
    /// Create an unfitted pipeline
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            scaler: StandardScaler::new(),
            regressor: LinearRegressor::new(config.regressor),
        }
    }

    /// Whether `fit` has run
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.regressor.is_fitted()
    }

    /// Fit scaler and regressor on a feature matrix and target vector
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        let z = self.scaler.fit_transform(x)?;
        self.regressor.fit(&z, y)
    }

    /// Predict targets for a feature matrix
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if !self.is_fitted() {
            return Err(Error::Fit("pipeline is not fitted".to_string()));
        }
        let z = self.scaler.transform(x)?;
        self.regressor.predict(&z)
    }

    /// Number of feature columns the pipeline was fitted on
    #[must_use]
    pub fn input_width(&self) -> usize {
        self.regressor.weights().len()
    }

    /// Serialize the fitted pipeline for registration
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if !self.is_fitted() {
            return Err(Error::Fit(
                "refusing to serialize an unfitted pipeline".to_string(),
            ));
        }
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a registered artifact
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
