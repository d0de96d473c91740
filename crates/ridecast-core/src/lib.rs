//! # ridecast-core
//!
//! Core types, traits, and utilities for the ridecast taxi-demand
//! forecasting pipelines.
//!
//! This crate provides:
//! - Domain types: `LocationId`, `PickupHour`, `TsRecord`, `PredictedDemand`
//! - The workspace error type and `Result` alias
//! - Collaborator traits for the feature store and model registry
//!
//! ## Example
//!
//! ```rust
//! use ridecast_core::types::{LocationId, PickupHour, TsRecord};
//!
//! let rec = TsRecord::new(LocationId::new(43), PickupHour::from_hours(480_000), 12);
//! assert_eq!(rec.location, LocationId::new(43));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{Error, Result};
pub use traits::*;
pub use types::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::error::{Error, Result};
    pub use crate::traits::*;
    pub use crate::types::*;
}
