//! Individuals / Moving Range (I-MR) control limits.
//!
//! Each reading is its own subgroup; the absolute difference between
//! consecutive readings (a subgroup of size 2) estimates short-term
//! process variation.
//!
//! # Algorithm
//!
//! 1. Moving ranges: MR_i = |x_i - x_{i-1}| for i = 1..n-1.
//! 2. X-bar = mean of readings, MR-bar = mean of moving ranges.
//! 3. sigma-hat = MR-bar / d2.
//! 4. I chart: CL = X-bar, UCL/LCL = X-bar +/- 3 * sigma-hat.
//! 5. MR chart: CL = MR-bar, UCL = D4 * MR-bar, LCL = D3 * MR-bar.
//!
//! # Control Chart Factors
//!
//! d2, D3 and D4 for n=2 are sourced from ASTM E2587.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 6: Control Charts for Variables.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use statrs::statistics::Statistics;

use super::chart::ControlLimits;
use crate::reading::Reading;

/// d2 for n=2: mean of the range distribution, sigma-hat = MR-bar / d2.
pub const D2: f64 = 1.128;

/// D3 for n=2: LCL_MR = D3 * MR-bar.
pub const D3: f64 = 0.0;

/// D4 for n=2: UCL_MR = D4 * MR-bar.
pub const D4: f64 = 3.267;

/// Width of the I chart limits in multiples of sigma-hat.
const SIGMA_MULTIPLIER: f64 = 3.0;

/// Moving ranges of consecutive readings.
///
/// Element `k` is `|x_{k+1} - x_k|`, i.e. the range charted at reading
/// index `k + 1`. Empty for fewer than two readings.
pub fn moving_ranges(readings: &[Reading]) -> Vec<f64> {
    readings
        .windows(2)
        .map(|w| (w[1].value() - w[0].value()).abs())
        .collect()
}

/// Compute I-MR control limits for an ordered reading sequence.
///
/// Returns [`ControlLimits::empty`] for fewer than two readings. The result
/// depends on reading order: the moving ranges are taken between neighbours
/// in the slice as given.
///
/// Identical readings give `MR-bar = 0` and a zero-width band
/// (`ucl_x == lcl_x == mean_x`); this is returned as computed.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use u_spc::reading::Reading;
/// use u_spc::spc::calculate_limits;
///
/// let now = Utc::now();
/// let readings = [
///     Reading::with_timestamp(5.0, now, "op"),
///     Reading::with_timestamp(7.0, now, "op"),
/// ];
/// let limits = calculate_limits(&readings);
/// assert_eq!(limits.mean_x, Some(6.0));
/// assert_eq!(limits.mean_mr, Some(2.0));
/// assert_eq!(limits.lcl_mr, Some(0.0));
/// ```
pub fn calculate_limits(readings: &[Reading]) -> ControlLimits {
    if readings.len() < 2 {
        tracing::trace!(n = readings.len(), "too few readings for I-MR limits");
        return ControlLimits::empty();
    }

    let mr_values = moving_ranges(readings);

    let x_bar = readings.iter().map(Reading::value).mean();
    let mr_bar = mr_values.iter().mean();

    let sigma_hat = mr_bar / D2;

    let limits = ControlLimits {
        mean_x: Some(x_bar),
        ucl_x: Some(x_bar + SIGMA_MULTIPLIER * sigma_hat),
        lcl_x: Some(x_bar - SIGMA_MULTIPLIER * sigma_hat),
        mean_mr: Some(mr_bar),
        ucl_mr: Some(D4 * mr_bar),
        lcl_mr: Some(D3 * mr_bar),
    };

    tracing::debug!(
        n = readings.len(),
        mean_x = x_bar,
        mean_mr = mr_bar,
        "computed I-MR limits"
    );
    limits
}
