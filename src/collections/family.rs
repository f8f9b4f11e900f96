//! Family registry
//!
//! This module provides a specialized collection implementation for Family records.

use crate::collections::GenericCollection;
use crate::models::family::Family;

/// Specialized collection for Family records
#[derive(Debug, Clone, Default)]
pub struct FamilyCollection {
    /// Base generic collection implementation
    inner: GenericCollection<Family>,
}

impl FamilyCollection {
    /// Create a new empty family collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a collection from a vector of families
    #[must_use]
    pub fn from_families(families: Vec<Family>) -> Self {
        Self {
            inner: GenericCollection::from_models(families),
        }
    }

    /// Add a family, returning the record it replaced (if any)
    pub fn add(&mut self, family: Family) -> Option<Family> {
        self.inner.add(family)
    }

    /// Get a family by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Family> {
        self.inner.get(id)
    }

    /// Iterate over families in file order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Family> {
        self.inner.iter()
    }

    /// Number of families
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<Family> for FamilyCollection {
    fn from_iter<I: IntoIterator<Item = Family>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
