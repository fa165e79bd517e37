//! Resource recommendation from task descriptions.

use ontrack_core::{Error, Resource, Result, Task};
use tracing::debug;

use crate::catalog::ResourceCatalog;

/// Resource recommendation service.
pub struct ResourceRecommendation {
    catalog: ResourceCatalog,
}

impl ResourceRecommendation {
    /// Create a recommendation service over the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: ResourceCatalog::default(),
        }
    }

    /// Create a recommendation service over a custom catalog.
    pub fn with_catalog(catalog: ResourceCatalog) -> Self {
        Self { catalog }
    }

    /// Recommend resources for the keywords present in `task`'s description.
    ///
    /// Keywords match case-sensitively as substrings. Each catalog entry
    /// contributes at most one resource however often its keyword occurs,
    /// and results follow catalog order, not text order.
    pub fn recommend_resources(&self, task: &Task) -> Result<Vec<Resource>> {
        let description = task.description.as_deref().ok_or_else(|| {
            Error::MissingDescription {
                id: task.id.clone(),
            }
        })?;

        let resources: Vec<Resource> = self
            .catalog
            .mappings()
            .iter()
            .filter(|mapping| description.contains(mapping.keyword.as_str()))
            .map(|mapping| Resource::new(mapping.resource.clone()))
            .collect();

        debug!(
            "Recommended {} resources for task {}",
            resources.len(),
            task.id
        );

        Ok(resources)
    }
}

impl Default for ResourceRecommendation {
    fn default() -> Self {
        Self::new()
    }
}
