//! Error types for reading intake and configuration.
//!
//! The limit calculator and the out-of-control detector are total and never
//! return these; they only surface at the edges where readings are recorded
//! and settings are loaded.

use thiserror::Error;

/// A reading was rejected before it entered the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    #[error("reading value must be finite, got {0}")]
    NonFinite(f64),

    #[error("reading value {value} is below the minimum of {min}")]
    ValueTooSmall { value: f64, min: f64 },

    #[error("reading value {value} is above the maximum of {max}")]
    ValueTooLarge { value: f64, max: f64 },

    #[error("operator name is required")]
    EmptyOperatorName,

    #[error("operator name is {len} characters long, the limit is {max}")]
    OperatorNameTooLong { len: usize, max: usize },
}

/// Monitor settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
