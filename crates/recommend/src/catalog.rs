//! Keyword to resource catalog.

/// A keyword paired with the resource recommended for it.
#[derive(Debug, Clone)]
pub struct KeywordMapping {
    /// Keyword looked for in task descriptions
    pub keyword: String,

    /// Name of the resource to recommend
    pub resource: String,
}

/// Ordered table of keyword to resource mappings.
///
/// Recommendations come out in table order, not in the order keywords
/// appear in a description.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    mappings: Vec<KeywordMapping>,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Append a mapping to the end of the table.
    pub fn add_mapping(&mut self, keyword: impl Into<String>, resource: impl Into<String>) {
        self.mappings.push(KeywordMapping {
            keyword: keyword.into(),
            resource: resource.into(),
        });
    }

    /// Mappings in declaration order.
    pub fn mappings(&self) -> &[KeywordMapping] {
        &self.mappings
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        let mut catalog = Self::new();
        catalog.add_mapping("Java", "Java Programming Guide");
        catalog.add_mapping("Python", "Python Programming Guide");
        catalog
    }
}
