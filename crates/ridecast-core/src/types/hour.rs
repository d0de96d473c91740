//! Hour-precision timestamp for hourly demand series.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, SECS_PER_HOUR};

/// Hour-precision timestamp since the Unix epoch.
///
/// The demand series is hourly, so an `i64` count of whole hours is the
/// whole representation: ordering, hashing, and range filtering are plain
/// integer operations, and off-by-one windowing bugs cannot hide in
/// sub-hour precision. Conversion to calendar time goes through chrono and
/// is always UTC.
///
/// # Example
///
/// ```rust
/// use ridecast_core::types::PickupHour;
///
/// let h = PickupHour::from_hours(480_000);
/// assert_eq!(h.add_hours(24) - h, 24);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickupHour(i64);

impl PickupHour {
    /// Unix epoch
    pub const EPOCH: Self = Self(0);

    /// Create from whole hours since epoch
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours)
    }

    /// Whole hours since epoch
    #[inline]
    #[must_use]
    pub const fn as_hours(self) -> i64 {
        self.0
    }

    /// Seconds since epoch (start of the hour)
    #[inline]
    #[must_use]
    pub const fn as_secs(self) -> i64 {
        self.0 * SECS_PER_HOUR
    }

    /// The current hour, floored from wall-clock UTC time
    #[must_use]
    pub fn now() -> Self {
        Self::floor_from(Utc::now())
    }

    /// Floor a UTC datetime to its hour
    #[inline]
    #[must_use]
    pub fn floor_from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp().div_euclid(SECS_PER_HOUR))
    }

    /// Ceil a UTC datetime to the next hour boundary (exact hours stay put)
    #[inline]
    #[must_use]
    pub fn ceil_from(dt: DateTime<Utc>) -> Self {
        let secs = dt.timestamp();
        let floored = secs.div_euclid(SECS_PER_HOUR);
        if secs.rem_euclid(SECS_PER_HOUR) == 0 && dt.timestamp_subsec_nanos() == 0 {
            Self(floored)
        } else {
            Self(floored + 1)
        }
    }

    /// Add hours
    #[inline]
    #[must_use]
    pub const fn add_hours(self, hours: i64) -> Self {
        Self(self.0 + hours)
    }

    /// Subtract hours
    #[inline]
    #[must_use]
    pub const fn sub_hours(self, hours: i64) -> Self {
        Self(self.0 - hours)
    }

    /// Add days
    #[inline]
    #[must_use]
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0 + days * HOURS_PER_DAY)
    }

    /// Subtract days
    #[inline]
    #[must_use]
    pub const fn sub_days(self, days: i64) -> Self {
        Self(self.0 - days * HOURS_PER_DAY)
    }

    /// Hours elapsed since an earlier timestamp
    #[inline]
    #[must_use]
    pub const fn hours_since(self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }

    /// Convert to a chrono UTC datetime at the start of the hour
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.as_secs(), 0)
            .single()
            .unwrap_or_default()
    }
}

impl PartialOrd for PickupHour {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PickupHour {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add<i64> for PickupHour {
    type Output = Self;

    #[inline]
    fn add(self, hours: i64) -> Self {
        Self(self.0 + hours)
    }
}

impl Sub<i64> for PickupHour {
    type Output = Self;

    #[inline]
    fn sub(self, hours: i64) -> Self {
        Self(self.0 - hours)
    }
}

impl Sub for PickupHour {
    type Output = i64;

    #[inline]
    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

impl fmt::Debug for PickupHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PickupHour({}h)", self.0)
    }
}

impl fmt::Display for PickupHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%m-%d %H:00"))
    }
}

impl From<DateTime<Utc>> for PickupHour {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::floor_from(dt)
    }
}
