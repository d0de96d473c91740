//! # ridecast-pipeline
//!
//! The two batch workflows: train-and-maybe-register, and
//! fetch-predict-publish. Both are linear, synchronous, run-to-completion
//! sequences over the `FeatureStore` / `ModelRegistry` seams.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
mod fetch;
pub mod inference;
pub mod training;

pub use config::AppConfig;
pub use inference::run_inference;
pub use training::{run_training, TrainingOutcome};
