//! Monitor settings: input bounds for recorded readings and an optional target.
//!
//! Loaded from TOML. Every key is optional; missing keys fall back to the
//! defaults of the reading entry form.
//!
//! ```toml
//! target_value = 12.5
//!
//! [bounds]
//! min_value = -10000.0
//! max_value = 10000.0
//! max_operator_name_len = 50
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Accepted range for a recorded reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Smallest accepted value (inclusive).
    pub min_value: f64,
    /// Largest accepted value (inclusive).
    pub max_value: f64,
    /// Longest accepted operator name, in characters.
    pub max_operator_name_len: usize,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_value: -10_000.0,
            max_value: 10_000.0,
            max_operator_name_len: 50,
        }
    }
}

/// Settings for one monitoring session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub bounds: InputBounds,
    /// Target value set by the operator, forwarded to the suggestion request.
    pub target_value: Option<f64>,
}

impl MonitorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MonitorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded monitor config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        if !b.min_value.is_finite() || !b.max_value.is_finite() {
            return Err(ConfigError::Invalid("bounds must be finite".into()));
        }
        if b.min_value > b.max_value {
            return Err(ConfigError::Invalid(format!(
                "min_value {} exceeds max_value {}",
                b.min_value, b.max_value
            )));
        }
        if let Some(target) = self.target_value {
            if !target.is_finite() {
                return Err(ConfigError::Invalid("target_value must be finite".into()));
            }
        }
        Ok(())
    }
}
