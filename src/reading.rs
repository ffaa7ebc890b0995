//! Instrument readings and the append-only log that holds them.
//!
//! A [`Reading`] is immutable once created. A [`ReadingLog`] is owned by the
//! caller for the lifetime of a monitoring session; the chart functions take
//! `log.as_slice()` on every recomputation and keep no state of their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::InputBounds;
use crate::error::ReadingError;

/// A single measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    id: Uuid,
    value: f64,
    timestamp: DateTime<Utc>,
    operator_name: String,
}

impl Reading {
    /// Create a reading stamped with the current time and a fresh id.
    pub fn new(value: f64, operator_name: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now(), operator_name)
    }

    /// Create a reading with an explicit instant.
    pub fn with_timestamp(
        value: f64,
        timestamp: DateTime<Utc>,
        operator_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            timestamp,
            operator_name: operator_name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }
}

/// Check a candidate value and operator name against the entry bounds.
///
/// The operator name is checked after trimming surrounding whitespace;
/// its length is counted in characters.
pub fn validate(value: f64, operator_name: &str, bounds: &InputBounds) -> Result<(), ReadingError> {
    if !value.is_finite() {
        return Err(ReadingError::NonFinite(value));
    }
    if value < bounds.min_value {
        return Err(ReadingError::ValueTooSmall {
            value,
            min: bounds.min_value,
        });
    }
    if value > bounds.max_value {
        return Err(ReadingError::ValueTooLarge {
            value,
            max: bounds.max_value,
        });
    }

    let name = operator_name.trim();
    if name.is_empty() {
        return Err(ReadingError::EmptyOperatorName);
    }
    let len = name.chars().count();
    if len > bounds.max_operator_name_len {
        return Err(ReadingError::OperatorNameTooLong {
            len,
            max: bounds.max_operator_name_len,
        });
    }
    Ok(())
}

/// Ordered, append-only collection of readings for one session.
///
/// Insertion order is the chart order. Readings are never removed or
/// modified.
#[derive(Debug, Clone, Default)]
pub struct ReadingLog {
    readings: Vec<Reading>,
    bounds: InputBounds,
}

impl ReadingLog {
    /// Create an empty log with the default entry bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log that validates against `bounds`.
    pub fn with_bounds(bounds: InputBounds) -> Self {
        Self {
            readings: Vec::new(),
            bounds,
        }
    }

    /// Validate and append a new reading stamped with the current time.
    ///
    /// Returns a reference to the stored reading.
    pub fn record(
        &mut self,
        value: f64,
        operator_name: &str,
    ) -> Result<&Reading, ReadingError> {
        self.record_at(value, Utc::now(), operator_name)
    }

    /// Validate and append a new reading with an explicit instant.
    pub fn record_at(
        &mut self,
        value: f64,
        timestamp: DateTime<Utc>,
        operator_name: &str,
    ) -> Result<&Reading, ReadingError> {
        if let Err(e) = validate(value, operator_name, &self.bounds) {
            tracing::warn!(value, error = %e, "reading rejected");
            return Err(e);
        }
        let reading = Reading::with_timestamp(value, timestamp, operator_name.trim());
        Ok(self.push(reading))
    }

    /// Append an already-built reading without validation.
    pub fn push(&mut self, reading: Reading) -> &Reading {
        self.readings.push(reading);
        let idx = self.readings.len() - 1;
        tracing::trace!(index = idx, value = self.readings[idx].value(), "reading appended");
        &self.readings[idx]
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    /// The readings in insertion order.
    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }
}

impl<'a> IntoIterator for &'a ReadingLog {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
