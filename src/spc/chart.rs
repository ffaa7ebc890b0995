//! Core chart types shared by the limit calculator and the detector.
//!
//! Defines the I-MR control limits, the chart and limit tags, and the
//! out-of-control point record handed to rendering and suggestion consumers.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Control limits for the Individuals and Moving Range charts.
///
/// Every field is `None` when fewer than two readings are available. A
/// computed value of `0.0` (for example a zero-width band when all readings
/// are identical) is always `Some(0.0)`, never `None`.
///
/// # Invariants
///
/// - `lcl_x <= mean_x <= ucl_x` when all three are present
/// - `lcl_mr <= mean_mr <= ucl_mr` when all three are present
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    /// I chart center line (mean of the readings).
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "meanX")]
    pub mean_x: Option<f64>,
    /// I chart upper control limit.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "uclX")]
    pub ucl_x: Option<f64>,
    /// I chart lower control limit.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "lclX")]
    pub lcl_x: Option<f64>,
    /// MR chart center line (mean moving range).
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "meanMR")]
    pub mean_mr: Option<f64>,
    /// MR chart upper control limit.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "uclMR")]
    pub ucl_mr: Option<f64>,
    /// MR chart lower control limit (0 for n=2).
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "lclMR")]
    pub lcl_mr: Option<f64>,
}

impl ControlLimits {
    /// Limits with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when no field has been computed.
    pub fn is_empty(&self) -> bool {
        self.mean_x.is_none()
            && self.ucl_x.is_none()
            && self.lcl_x.is_none()
            && self.mean_mr.is_none()
            && self.ucl_mr.is_none()
            && self.lcl_mr.is_none()
    }

    /// Width of the I chart band (`ucl_x - lcl_x`), if both limits exist.
    pub fn i_band_width(&self) -> Option<f64> {
        Some(self.ucl_x? - self.lcl_x?)
    }
}

/// Which chart an out-of-control point was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Individuals chart: the raw reading value.
    #[serde(rename = "I-Chart")]
    Individuals,
    /// Moving range chart: `|x_i - x_{i-1}|`.
    #[serde(rename = "MR-Chart")]
    MovingRange,
}

impl ChartKind {
    /// Display label used by consumers (`"I-Chart"` / `"MR-Chart"`).
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Individuals => "I-Chart",
            ChartKind::MovingRange => "MR-Chart",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which control limit was breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitKind {
    /// Upper control limit.
    #[serde(rename = "UCL")]
    Upper,
    /// Lower control limit.
    #[serde(rename = "LCL")]
    Lower,
}

impl LimitKind {
    pub fn label(self) -> &'static str {
        match self {
            LimitKind::Upper => "UCL",
            LimitKind::Lower => "LCL",
        }
    }
}

impl std::fmt::Display for LimitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A reading (or moving range) that fell outside a control limit.
///
/// For the I chart `value` is the raw reading; for the MR chart it is the
/// absolute difference between the reading at `index` and the one before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfControlPoint {
    /// Zero-based position of the offending reading in the sequence.
    pub index: usize,
    /// The charted value.
    pub value: f64,
    /// Chart the violation was found on.
    #[serde(rename = "type")]
    pub chart: ChartKind,
    /// Limit that was breached.
    pub limit_violated: LimitKind,
    /// Numeric value of the breached limit.
    pub limit_value: f64,
    /// Instant of the offending reading.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_limits_have_no_fields() {
        let limits = ControlLimits::empty();
        assert!(limits.is_empty());
        assert!(limits.i_band_width().is_none());
    }

    #[test]
    fn test_zero_is_not_absent() {
        let limits = ControlLimits {
            lcl_mr: Some(0.0),
            ..ControlLimits::empty()
        };
        assert!(!limits.is_empty());
    }

    #[test]
    fn test_band_width() {
        let limits = ControlLimits {
            mean_x: Some(25.0),
            ucl_x: Some(30.0),
            lcl_x: Some(20.0),
            ..ControlLimits::empty()
        };
        assert!((limits.i_band_width().unwrap() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limits_serialize_camel_case_and_skip_absent() {
        let limits = ControlLimits {
            mean_x: Some(6.0),
            lcl_mr: Some(0.0),
            ..ControlLimits::empty()
        };
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"meanX":6.0,"lclMR":0.0}"#);

        let empty = serde_json::to_string(&ControlLimits::empty()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ChartKind::Individuals.to_string(), "I-Chart");
        assert_eq!(ChartKind::MovingRange.to_string(), "MR-Chart");
        assert_eq!(LimitKind::Upper.to_string(), "UCL");
        assert_eq!(LimitKind::Lower.to_string(), "LCL");
    }

    #[test]
    fn test_point_serialization_field_names() {
        let point = OutOfControlPoint {
            index: 4,
            value: 99.0,
            chart: ChartKind::MovingRange,
            limit_violated: LimitKind::Upper,
            limit_value: 10.5,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
        };
        let v: serde_json::Value = serde_json::to_value(&point).unwrap();
        assert_eq!(v["index"], 4);
        assert_eq!(v["type"], "MR-Chart");
        assert_eq!(v["limitViolated"], "UCL");
        assert_eq!(v["limitValue"], 10.5);
        assert_eq!(v["timestamp"], "2024-03-01T08:30:00Z");
    }
}
