//! Time-series and prediction records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hour::PickupHour;
use super::location::LocationId;

/// One observed hour of demand at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsRecord {
    /// Pickup location
    pub location: LocationId,
    /// Hour of the observation
    pub hour: PickupHour,
    /// Rides that started in this hour at this location
    pub rides: u32,
}

impl TsRecord {
    /// Create a record
    #[must_use]
    pub const fn new(location: LocationId, hour: PickupHour, rides: u32) -> Self {
        Self {
            location,
            hour,
            rides,
        }
    }

    /// Primary key: (location, hour)
    #[inline]
    #[must_use]
    pub const fn key(&self) -> (LocationId, PickupHour) {
        (self.location, self.hour)
    }
}

impl fmt::Display for TsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {} rides", self.location, self.hour, self.rides)
    }
}

/// One predicted hour of demand at one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedDemand {
    /// Pickup location
    pub location: LocationId,
    /// Hour the prediction is for
    pub hour: PickupHour,
    /// Predicted ride count
    pub rides: f64,
}

impl PredictedDemand {
    /// Create a prediction record
    #[must_use]
    pub const fn new(location: LocationId, hour: PickupHour, rides: f64) -> Self {
        Self {
            location,
            hour,
            rides,
        }
    }

    /// Primary key: (location, hour)
    #[inline]
    #[must_use]
    pub const fn key(&self) -> (LocationId, PickupHour) {
        (self.location, self.hour)
    }
}

impl fmt::Display for PredictedDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {}: {:.2} rides predicted",
            self.location, self.hour, self.rides
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key() {
        let rec = TsRecord::new(LocationId::new(7), PickupHour::from_hours(100), 3);
        assert_eq!(rec.key(), (LocationId::new(7), PickupHour::from_hours(100)));
    }

    #[test]
    fn test_prediction_display() {
        let pred = PredictedDemand::new(LocationId::new(7), PickupHour::from_hours(0), 4.25);
        assert!(pred.to_string().contains("4.25"));
    }
}
