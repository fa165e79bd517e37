//! Student model - learner with completed and assigned tasks.

use serde::{Deserialize, Serialize};
use crate::id::StudentId;
use crate::task::Task;

/// A student tracked by the system.
///
/// Nothing is validated at construction; a record where the completed
/// list outgrows the total list is only rejected when a progress
/// report is generated from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: StudentId,

    /// Display name
    pub name: String,

    /// Tasks the student has completed, in completion order
    pub completed_tasks: Vec<Task>,

    /// All tasks assigned to the student, in assignment order
    pub total_tasks: Vec<Task>,
}

impl Student {
    /// Create a student record.
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        completed_tasks: Vec<Task>,
        total_tasks: Vec<Task>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed_tasks,
            total_tasks,
        }
    }
}
