//! Progress report generation.

use ontrack_core::{Error, ProgressReport, Result, Student};
use tracing::debug;

/// Progress analytics service.
pub struct ProgressAnalytics;

impl ProgressAnalytics {
    /// Create a new progress analytics service.
    pub fn new() -> Self {
        Self
    }

    /// Compute a progress report for `student`.
    ///
    /// The completed and total counts are the lengths of the student's
    /// task lists. A record with more completed than assigned tasks is
    /// inconsistent and rejected without a report.
    pub fn generate_report(&self, student: &Student) -> Result<ProgressReport> {
        let completed_tasks = student.completed_tasks.len();
        let total_tasks = student.total_tasks.len();

        if completed_tasks > total_tasks {
            return Err(Error::InvalidProgress {
                completed: completed_tasks,
                total: total_tasks,
            });
        }

        debug!(
            "Student {} completed {} of {} tasks",
            student.id, completed_tasks, total_tasks
        );

        Ok(ProgressReport {
            completed_tasks,
            total_tasks,
        })
    }
}

impl Default for ProgressAnalytics {
    fn default() -> Self {
        Self::new()
    }
}
