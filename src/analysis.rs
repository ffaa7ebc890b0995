//! One-call I-MR snapshot of a reading sequence.
//!
//! Bundles the control limits with the violations they produce so that a
//! renderer can draw reference lines and flag points from a single value.
//! A snapshot is rebuilt from scratch whenever the readings change.

use serde::Serialize;

use crate::reading::Reading;
use crate::spc::{self, ChartKind, ControlLimits, OutOfControlPoint};

/// Limits and violations computed from one reading sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImrAnalysis {
    limits: ControlLimits,
    moving_ranges: Vec<f64>,
    violations: Vec<OutOfControlPoint>,
}

impl ImrAnalysis {
    /// Run limit calculation and detection over `readings`.
    pub fn compute(readings: &[Reading]) -> Self {
        let limits = spc::calculate_limits(readings);
        let violations = spc::detect_out_of_control(readings, &limits);
        Self {
            limits,
            moving_ranges: spc::moving_ranges(readings),
            violations,
        }
    }

    pub fn limits(&self) -> &ControlLimits {
        &self.limits
    }

    /// Moving ranges; element `k` belongs to reading index `k + 1`.
    pub fn moving_ranges(&self) -> &[f64] {
        &self.moving_ranges
    }

    /// All violations: I chart first, then MR chart, each in index order.
    pub fn violations(&self) -> &[OutOfControlPoint] {
        &self.violations
    }

    /// `true` when no violation was found.
    ///
    /// Also `true` when there were too few readings to compute limits.
    pub fn is_in_control(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations recorded at reading `index` (zero, one or several).
    pub fn violations_at(&self, index: usize) -> impl Iterator<Item = &OutOfControlPoint> {
        self.violations.iter().filter(move |p| p.index == index)
    }

    pub fn has_violation_at(&self, index: usize, chart: ChartKind) -> bool {
        self.violations_at(index).any(|p| p.chart == chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn readings(values: &[f64]) -> Vec<Reading> {
        let now = Utc::now();
        values
            .iter()
            .map(|&v| Reading::with_timestamp(v, now, "op"))
            .collect()
    }

    #[test]
    fn test_insufficient_data_is_in_control() {
        let analysis = ImrAnalysis::compute(&readings(&[42.0]));
        assert!(analysis.limits().is_empty());
        assert!(analysis.moving_ranges().is_empty());
        assert!(analysis.is_in_control());
    }

    #[test]
    fn test_spike_has_two_violations_at_same_index() {
        let analysis = ImrAnalysis::compute(&readings(&[1.0, 1.0, 1.0, 1.0, 100.0]));
        assert!(!analysis.is_in_control());
        assert_eq!(analysis.violations_at(4).count(), 2);
        assert!(analysis.has_violation_at(4, ChartKind::Individuals));
        assert!(analysis.has_violation_at(4, ChartKind::MovingRange));
        assert_eq!(analysis.violations_at(3).count(), 0);
    }

    #[test]
    fn test_stable_process_in_control() {
        let data: Vec<f64> = (0..10).map(|i| 50.0 + (i % 3) as f64 * 0.5).collect();
        let analysis = ImrAnalysis::compute(&readings(&data));
        assert!(analysis.is_in_control());
        assert_eq!(analysis.moving_ranges().len(), 9);
    }

    #[test]
    fn test_serializes_for_renderer() {
        let analysis = ImrAnalysis::compute(&readings(&[5.0, 7.0]));
        let v = serde_json::to_value(&analysis).unwrap();
        assert_eq!(v["limits"]["meanX"], 6.0);
        assert_eq!(v["movingRanges"][0], 2.0);
        assert!(v["violations"].as_array().unwrap().is_empty());
    }
}
