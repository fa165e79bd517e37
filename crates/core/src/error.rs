//! Error types shared by the onTrack services.

use crate::id::TaskId;

/// Error type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the task services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A task had no description where one was required
    #[error("task {id} has no description")]
    MissingDescription {
        /// The offending task
        id: TaskId,
    },

    /// A student record counted more completed than assigned tasks
    #[error("completed tasks ({completed}) cannot exceed total tasks ({total})")]
    InvalidProgress {
        /// Completed task count
        completed: usize,
        /// Total task count
        total: usize,
    },
}
