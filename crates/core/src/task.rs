//! Task model - the unit of work students complete.

use serde::{Deserialize, Serialize};
use crate::id::TaskId;

/// A task assigned to a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Short content line
    pub content: String,

    /// Detailed description, absent on bare tasks
    #[serde(default)]
    pub description: Option<String>,
}

impl Task {
    /// Create a task without a description.
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            description: None,
        }
    }

    /// Create a task with a description.
    pub fn with_description(
        id: impl Into<TaskId>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            description: Some(description.into()),
        }
    }
}
