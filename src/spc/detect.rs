//! Out-of-control detection against I-MR control limits.
//!
//! Flags every reading outside the I chart limits and every moving range
//! outside the MR chart limits (Nelson Rule 1 applied to both charts).
//!
//! # Output order
//!
//! All I chart violations in index order, then all MR chart violations in
//! index order. The same index may appear more than once.
//!
//! # Reference
//!
//! Nelson, L.S. (1984). "The Shewhart Control Chart — Tests for Special Causes",
//! *Journal of Quality Technology* 16(4), pp. 237-239.

use super::chart::{ChartKind, ControlLimits, LimitKind, OutOfControlPoint};
use crate::reading::Reading;

/// Find the readings that breach the given limits.
///
/// Returns an empty list when `readings` is empty or when any of `ucl_x`,
/// `lcl_x`, `ucl_mr` is absent. Comparisons are strict: a value equal to a
/// limit is in control.
///
/// A moving range is reported at the index of the later reading of its
/// pair. The MR lower limit is only checked when it is present and
/// strictly positive.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use u_spc::reading::Reading;
/// use u_spc::spc::{calculate_limits, detect_out_of_control, ChartKind};
///
/// let now = Utc::now();
/// let readings: Vec<Reading> = [1.0, 1.0, 1.0, 1.0, 100.0]
///     .iter()
///     .map(|&v| Reading::with_timestamp(v, now, "op"))
///     .collect();
///
/// let limits = calculate_limits(&readings);
/// let points = detect_out_of_control(&readings, &limits);
/// assert!(points
///     .iter()
///     .any(|p| p.index == 4 && p.chart == ChartKind::MovingRange));
/// ```
pub fn detect_out_of_control(
    readings: &[Reading],
    limits: &ControlLimits,
) -> Vec<OutOfControlPoint> {
    let (Some(ucl_x), Some(lcl_x), Some(ucl_mr)) = (limits.ucl_x, limits.lcl_x, limits.ucl_mr)
    else {
        tracing::trace!("limits incomplete, skipping detection");
        return Vec::new();
    };
    if readings.is_empty() {
        return Vec::new();
    }

    let mut points = check_individuals(readings, ucl_x, lcl_x);
    if readings.len() > 1 && limits.mean_mr.is_some() {
        points.extend(check_moving_ranges(readings, ucl_mr, limits.lcl_mr));
    }

    tracing::debug!(
        n = readings.len(),
        violations = points.len(),
        "out-of-control detection complete"
    );
    points
}

fn check_individuals(readings: &[Reading], ucl: f64, lcl: f64) -> Vec<OutOfControlPoint> {
    let mut points = Vec::new();
    for (index, reading) in readings.iter().enumerate() {
        let value = reading.value();
        let breach = if value > ucl {
            Some((LimitKind::Upper, ucl))
        } else if value < lcl {
            Some((LimitKind::Lower, lcl))
        } else {
            None
        };
        if let Some((limit_violated, limit_value)) = breach {
            points.push(OutOfControlPoint {
                index,
                value,
                chart: ChartKind::Individuals,
                limit_violated,
                limit_value,
                timestamp: reading.timestamp(),
            });
        }
    }
    points
}

fn check_moving_ranges(
    readings: &[Reading],
    ucl: f64,
    lcl: Option<f64>,
) -> Vec<OutOfControlPoint> {
    let lcl = lcl.filter(|&l| l > 0.0);
    let mut points = Vec::new();
    for (offset, pair) in readings.windows(2).enumerate() {
        let index = offset + 1;
        let mr = (pair[1].value() - pair[0].value()).abs();
        let timestamp = pair[1].timestamp();

        if mr > ucl {
            points.push(OutOfControlPoint {
                index,
                value: mr,
                chart: ChartKind::MovingRange,
                limit_violated: LimitKind::Upper,
                limit_value: ucl,
                timestamp,
            });
        }
        if let Some(lcl) = lcl {
            if mr < lcl {
                points.push(OutOfControlPoint {
                    index,
                    value: mr,
                    chart: ChartKind::MovingRange,
                    limit_violated: LimitKind::Lower,
                    limit_value: lcl,
                    timestamp,
                });
            }
        }
    }
    points
}
