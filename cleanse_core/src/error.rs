//! Error types for the cleanse_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for cleanse_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A calibration table has too few points to bracket any value
    #[error("Insufficient data: interpolation needs at least 2 points, got {points}")]
    InsufficientData { points: usize },

    /// A calibration table is malformed (unordered or non-finite values)
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// An input would divide by zero or is not a finite number
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Reject divisors that are zero, negative, or not finite.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid_argument(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_argument(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}
