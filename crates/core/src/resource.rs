//! Resource model - a recommended learning reference.

use serde::{Deserialize, Serialize};

/// A learning resource recommended for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name
    pub name: String,
}

impl Resource {
    /// Create a resource.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
