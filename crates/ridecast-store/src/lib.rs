//! # ridecast-store
//!
//! Concrete backends for the `FeatureStore` and `ModelRegistry` seams.
//!
//! This crate provides:
//! - `LocalFeatureStore` / `LocalModelRegistry`: file-backed stores
//!   (bincode tables, versioned artifact directories with JSON metadata)
//!   so the pipelines run end-to-end without a managed service
//! - `MemoryFeatureStore` / `MemoryModelRegistry`: in-memory doubles for
//!   workflow tests

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod local;
pub mod memory;
pub mod registry;

pub use local::LocalFeatureStore;
pub use memory::{MemoryFeatureStore, MemoryModelRegistry};
pub use registry::{LocalModelRegistry, ModelMeta};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::local::LocalFeatureStore;
    pub use crate::memory::{MemoryFeatureStore, MemoryModelRegistry};
    pub use crate::registry::{LocalModelRegistry, ModelMeta};
}
