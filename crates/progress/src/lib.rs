//! Progress tracking.
//!
//! Progress report generation from student task records.

#![warn(missing_docs)]

pub mod analytics;

pub use analytics::ProgressAnalytics;
