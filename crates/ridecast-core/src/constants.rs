//! Constants shared across the forecasting pipelines.

/// Seconds per hour
pub const SECS_PER_HOUR: i64 = 3600;

/// Hours per day
pub const HOURS_PER_DAY: i64 = 24;

/// Default feature window: 28 days of trailing hourly counts
pub const DEFAULT_WINDOW_SIZE: usize = 24 * 28;

/// Default step between successive anchors, in hours
pub const DEFAULT_STEP_SIZE: usize = 23;

/// Default trailing fetch window for inference, in days
pub const DEFAULT_INFERENCE_FETCH_DAYS: i64 = 29;

/// Default trailing fetch window for training, in days
pub const DEFAULT_TRAINING_FETCH_DAYS: i64 = 180;

/// Padding applied to each side of a store fetch, in days.
/// Tolerates store ingestion latency and clock skew; rows outside the
/// intended window are filtered out after the fetch.
pub const FETCH_PAD_DAYS: i64 = 1;

/// Metrics-map key under which a model's registered MAE is stored
pub const TEST_MAE_KEY: &str = "test_mae";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults() {
        assert_eq!(DEFAULT_WINDOW_SIZE, 672);
        assert!(DEFAULT_STEP_SIZE < DEFAULT_WINDOW_SIZE);
    }
}
