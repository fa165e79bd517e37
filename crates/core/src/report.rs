//! Progress report - completed versus total task counts.

use serde::{Deserialize, Serialize};

/// Summary of a student's task completion.
///
/// Only `ProgressAnalytics` builds these, and it refuses records where
/// the completed count exceeds the total count; the type itself does
/// not re-check the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Completed tasks
    pub completed_tasks: usize,

    /// Total assigned tasks
    pub total_tasks: usize,
}

impl ProgressReport {
    /// Percentage of assigned tasks completed (0-100).
    pub fn percentage(&self) -> f32 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        (self.completed_tasks as f32 / self.total_tasks as f32) * 100.0
    }
}
