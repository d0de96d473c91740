//! Domain types for the forecasting pipelines.

pub mod hour;
pub mod location;
pub mod record;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use hour::PickupHour;
pub use location::LocationId;
pub use record::{PredictedDemand, TsRecord};

/// Named, versioned logical dataset within the feature store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureView {
    /// View name
    pub name: String,
    /// View version
    pub version: u32,
}

impl FeatureView {
    /// Create a feature view reference
    #[must_use]
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for FeatureView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/v{}", self.name, self.version)
    }
}

/// Input/output column schema recorded alongside a registered model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Feature column names, in matrix order
    pub input_columns: Vec<String>,
    /// Output column names
    pub output_columns: Vec<String>,
}

impl ModelSchema {
    /// Create a schema
    #[must_use]
    pub const fn new(input_columns: Vec<String>, output_columns: Vec<String>) -> Self {
        Self {
            input_columns,
            output_columns,
        }
    }

    /// Number of input columns
    #[must_use]
    pub fn input_width(&self) -> usize {
        self.input_columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_view_display() {
        let view = FeatureView::new("hourly_rides", 1);
        assert_eq!(view.to_string(), "hourly_rides/v1");
    }

    #[test]
    fn test_schema_width() {
        let schema = ModelSchema::new(
            vec!["rides_t-2".into(), "rides_t-1".into(), "location_id".into()],
            vec!["rides_next_hour".into()],
        );
        assert_eq!(schema.input_width(), 3);
    }
}
