//! Input for the external cause-suggestion service.
//!
//! When the detector reports out-of-control points, the surrounding
//! application asks a language model for possible causes. This module only
//! assembles the data for that request; it never performs the call.

use std::fmt::Display;

use chrono::{SecondsFormat, TimeZone};
use serde::Serialize;
use serde_json::json;

use crate::reading::Reading;
use crate::spc::OutOfControlPoint;

/// Fields of a cause-suggestion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionInput {
    /// JSON array of `{ "value", "timestamp" }` in reading order.
    pub control_chart_data: String,
    /// One human-readable line per out-of-control point.
    pub out_of_control_points: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
}

impl SuggestionInput {
    /// Build the request for `readings` and the `points` detected on them.
    ///
    /// Returns `None` when there are no points, since there is nothing to
    /// explain. Times in the point descriptions are rendered in `tz`.
    pub fn build<Tz>(
        readings: &[Reading],
        points: &[OutOfControlPoint],
        target_value: Option<f64>,
        tz: &Tz,
    ) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if points.is_empty() {
            return None;
        }

        let input = Self {
            control_chart_data: chart_data_json(readings),
            out_of_control_points: points
                .iter()
                .map(|p| describe_point(p, tz))
                .collect::<Vec<_>>()
                .join("\n"),
            target_value,
        };
        tracing::debug!(
            readings = readings.len(),
            points = points.len(),
            "assembled suggestion input"
        );
        Some(input)
    }
}

/// Readings as a compact JSON array with RFC 3339 millisecond timestamps.
pub fn chart_data_json(readings: &[Reading]) -> String {
    let rows: Vec<_> = readings
        .iter()
        .map(|r| {
            json!({
                "value": r.value(),
                "timestamp": r.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
            })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}

/// One-line description of an out-of-control point.
///
/// The index is reported 1-based; values are given to 4 decimal places.
pub fn describe_point<Tz>(point: &OutOfControlPoint, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "Point at index {} (value: {:.4}) on {} violated {} ({:.4}) at {}",
        point.index + 1,
        point.value,
        point.chart,
        point.limit_violated,
        point.limit_value,
        point.timestamp.with_timezone(tz).format("%H:%M:%S"),
    )
}
