//! # ridecast-features
//!
//! Sliding-window feature engineering for per-location hourly demand
//! series.
//!
//! This crate provides:
//! - `TsFrame`: a sorted, key-unique view of raw time-series records
//! - The windowing transform: feature-only and feature+target variants
//! - A seeded synthetic demand generator for tests and bootstrap
//!
//! ## Example
//!
//! ```rust,ignore
//! use ridecast_features::{make_features_and_target, TsFrame, WindowConfig};
//!
//! let frame = TsFrame::from_records(records);
//! let (features, target) = make_features_and_target(&frame, &WindowConfig::default())?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod frame;
pub mod synthetic;
pub mod windowing;

pub use frame::TsFrame;
pub use synthetic::{SyntheticConfig, SyntheticDemand};
pub use windowing::{make_features, make_features_and_target, FeatureTable, WindowConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::frame::TsFrame;
    pub use crate::synthetic::{SyntheticConfig, SyntheticDemand};
    pub use crate::windowing::{
        make_features, make_features_and_target, FeatureTable, WindowConfig,
    };
}
