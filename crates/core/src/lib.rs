//! onTrack core data models.
//!
//! This crate defines the data structures shared by the task search,
//! progress, and recommendation services.

#![warn(missing_docs)]

// Core identities
mod id;

// Task tracking
mod task;
mod student;

// Computed values
mod report;
mod resource;

// Errors
mod error;

// Re-exports
pub use id::{StudentId, TaskId};
pub use task::Task;
pub use student::Student;
pub use report::ProgressReport;
pub use resource::Resource;
pub use error::{Error, Result};
