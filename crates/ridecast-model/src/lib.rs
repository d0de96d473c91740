//! # ridecast-model
//!
//! The demand-forecasting regression pipeline.
//!
//! This crate provides:
//! - `StandardScaler`: per-column z-score normalization
//! - `LinearRegressor`: gradient-descent linear regression with L2
//! - `DemandPipeline`: the scaler + regressor behind one fit/predict
//!   surface, serializable with bincode for registration
//! - Regression metrics (MAE, RMSE)
//!
//! ## Example
//!
//! ```rust,ignore
//! use ridecast_model::DemandPipeline;
//!
//! let mut pipeline = DemandPipeline::default();
//! pipeline.fit(features.matrix(), &target)?;
//! let predictions = pipeline.predict(features.matrix())?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod metrics;
pub mod pipeline;
pub mod regressor;
pub mod scaling;

pub use metrics::{mean_absolute_error, root_mean_squared_error};
pub use pipeline::{DemandPipeline, PipelineConfig};
pub use regressor::{LinearRegressor, RegressorConfig};
pub use scaling::StandardScaler;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::metrics::{mean_absolute_error, root_mean_squared_error};
    pub use crate::pipeline::{DemandPipeline, PipelineConfig};
    pub use crate::regressor::{LinearRegressor, RegressorConfig};
    pub use crate::scaling::StandardScaler;
}
