//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ridecast_core::constants::{
    DEFAULT_INFERENCE_FETCH_DAYS, DEFAULT_TRAINING_FETCH_DAYS,
};
use ridecast_core::error::Result;
use ridecast_core::types::FeatureView;
use ridecast_features::windowing::WindowConfig;
use ridecast_model::{PipelineConfig, RegressorConfig};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feature store root directory
    pub store_dir: PathBuf,
    /// Model registry root directory
    pub registry_dir: PathBuf,
    /// Registered model name
    pub model_name: String,
    /// Source feature view (hourly ride counts)
    pub feature_view: ViewConfig,
    /// Destination feature group for predictions
    pub predictions: ViewConfig,
    /// Sliding-window parameters, shared by training and inference
    pub window: WindowConfig,
    /// Training workflow settings
    pub training: TrainingConfig,
    /// Inference workflow settings
    pub inference: InferenceConfig,
}

/// Name + version of a feature view or group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name
    pub name: String,
    /// View version
    pub version: u32,
}

impl ViewConfig {
    /// Convert to the core view reference
    #[must_use]
    pub fn view(&self) -> FeatureView {
        FeatureView::new(self.name.clone(), self.version)
    }
}

/// Training workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Trailing days of history to fetch
    pub fetch_days: i64,
    /// Gradient-descent epochs
    pub epochs: usize,
    /// Learning rate
    pub learning_rate: f64,
    /// L2 penalty
    pub l2: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        let regressor = RegressorConfig::default();
        Self {
            fetch_days: DEFAULT_TRAINING_FETCH_DAYS,
            epochs: regressor.epochs,
            learning_rate: regressor.learning_rate,
            l2: regressor.l2,
        }
    }
}

impl TrainingConfig {
    /// Pipeline hyperparameters from these settings
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            regressor: RegressorConfig {
                epochs: self.epochs,
                learning_rate: self.learning_rate,
                l2: self.l2,
            },
        }
    }
}

/// Inference workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Trailing days of history to fetch
    pub fetch_days: i64,
    /// How many of the largest predictions to log
    pub log_top: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            fetch_days: DEFAULT_INFERENCE_FETCH_DAYS,
            log_top: 30,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("data/store"),
            registry_dir: PathBuf::from("data/registry"),
            model_name: "taxi_demand_next_hour".to_string(),
            feature_view: ViewConfig {
                name: "hourly_rides".to_string(),
                version: 1,
            },
            predictions: ViewConfig {
                name: "demand_predictions".to_string(),
                version: 1,
            },
            window: WindowConfig::default(),
            training: TrainingConfig::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ridecast_core::Error::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load from the `RIDECAST_CONFIG` env var, falling back to defaults
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var("RIDECAST_CONFIG") {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ridecast_core::Error::ConfigError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window.window_size, 672);
        assert_eq!(config.training.fetch_days, 180);
        assert_eq!(config.inference.fetch_days, 29);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ridecast.toml");

        let mut config = AppConfig::default();
        config.window.step_size = 11;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.window.step_size, 11);
        assert_eq!(loaded.model_name, config.model_name);
    }
}
