//! # u-spc
//!
//! Statistical process control for single-value instrument readings using
//! the Individuals / Moving Range (I-MR) method.
//!
//! The core is two pure functions applied in sequence whenever the reading
//! sequence changes: [`spc::calculate_limits`] then
//! [`spc::detect_out_of_control`]. Everything else is plumbing around them.
//!
//! ## Modules
//!
//! - [`spc`] — I-MR control limits and out-of-control detection
//! - [`reading`] — Readings and the caller-owned append-only log
//! - [`analysis`] — Limits plus violations in one snapshot
//! - [`suggestion`] — Data handed to an external cause-suggestion service
//! - [`config`] — Entry bounds and target value, loaded from TOML
//! - [`error`] — Errors raised when recording readings or loading settings
//!
//! ## Example
//!
//! ```
//! use u_spc::analysis::ImrAnalysis;
//! use u_spc::reading::ReadingLog;
//!
//! let mut log = ReadingLog::new();
//! for v in [10.1, 10.3, 9.9, 10.0, 10.2] {
//!     log.record(v, "operator").unwrap();
//! }
//!
//! let analysis = ImrAnalysis::compute(log.as_slice());
//! assert!(analysis.limits().ucl_x.is_some());
//! assert!(analysis.is_in_control());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod reading;
pub mod spc;
pub mod suggestion;

pub use analysis::ImrAnalysis;
pub use error::{ConfigError, ReadingError};
pub use reading::{Reading, ReadingLog};
pub use spc::{calculate_limits, detect_out_of_control, ControlLimits, OutOfControlPoint};
