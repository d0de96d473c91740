//! Error types for the forecasting pipelines.

use thiserror::Error;

/// Workspace error type.
///
/// Training failure classes are distinct variants so a run's outcome can
/// state exactly which stage failed: fetch (`NoData`), transform
/// (`EmptyTransform`), fit (`Fit`), or registry I/O (`Registry`).
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Invalid location identifier
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Invalid timestamp or hour value
    #[error("Invalid hour: {0}")]
    InvalidHour(String),

    /// Invalid windowing parameters
    #[error("Invalid window parameters: window_size={window_size}, step_size={step_size} (both must be >= 1)")]
    InvalidWindow {
        /// Requested feature window width in hours
        window_size: usize,
        /// Requested anchor step in hours
        step_size: usize,
    },

    /// A fetch returned no rows
    #[error("No data: {0}")]
    NoData(String),

    /// The windowing transform produced no rows
    #[error("Empty transform result: {0}")]
    EmptyTransform(String),

    /// Model fitting failed
    #[error("Fit error: {0}")]
    Fit(String),

    /// No model registered under the requested name
    #[error("Model not found in registry: {0}")]
    ModelNotFound(String),

    /// Model registry I/O failed
    #[error("Registry error: {0}")]
    Registry(String),

    /// Feature store I/O failed
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoData("empty fetch window".to_string());
        assert_eq!(err.to_string(), "No data: empty fetch window");
    }

    #[test]
    fn test_invalid_window_display() {
        let err = Error::InvalidWindow {
            window_size: 0,
            step_size: 23,
        };
        assert!(err.to_string().contains("window_size=0"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
