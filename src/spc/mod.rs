//! Statistical Process Control (SPC) for individual readings.
//!
//! Two pure functions, applied in order on every change to the reading
//! sequence:
//!
//! - [`calculate_limits`] — I chart and MR chart center lines and limits
//! - [`detect_out_of_control`] — readings and moving ranges outside those limits
//!
//! Neither function holds state; callers own the reading sequence and pass
//! it in whole each time.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

mod chart;
mod detect;
mod imr;

pub use chart::{ChartKind, ControlLimits, LimitKind, OutOfControlPoint};
pub use detect::detect_out_of_control;
pub use imr::{calculate_limits, moving_ranges, D2, D3, D4};
