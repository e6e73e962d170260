//! Loaded catalog and substring suggestions.

use crate::config::{MIN_QUERY_CHARS, SUGGESTION_LIMIT};

/// Font family names available for suggestions.
///
/// An empty catalog is valid: suggestions are simply never offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    families: Vec<String>,
}

impl Catalog {
    pub fn new(families: Vec<String>) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Families containing `query`, ignoring case, in catalog order.
    ///
    /// Returns nothing for queries shorter than [`MIN_QUERY_CHARS`] and at most
    /// [`SUGGESTION_LIMIT`] names.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.families
            .iter()
            .filter(|family| family.to_lowercase().contains(&needle))
            .take(SUGGESTION_LIMIT)
            .map(String::as_str)
            .collect()
    }
}
