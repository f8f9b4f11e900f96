//! Individual registry
//!
//! This module provides a specialized collection for Individual records,
//! with the name lookups rules use when formatting findings.

use crate::collections::GenericCollection;
use crate::models::individual::Individual;

/// Specialized collection for Individual records
#[derive(Debug, Clone, Default)]
pub struct IndividualCollection {
    /// Base generic collection implementation
    inner: GenericCollection<Individual>,
}

impl IndividualCollection {
    /// Create a new empty individual collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a collection from a vector of individuals
    #[must_use]
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            inner: GenericCollection::from_models(individuals),
        }
    }

    /// Add an individual, returning the record it replaced (if any)
    pub fn add(&mut self, individual: Individual) -> Option<Individual> {
        self.inner.add(individual)
    }

    /// Get an individual by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.inner.get(id)
    }

    /// Display name for an id; empty when the id does not resolve
    #[must_use]
    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map_or("", |individual| individual.name.as_str())
    }

    /// Iterate over individuals in file order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Individual> {
        self.inner.iter()
    }

    /// Number of individuals
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

impl FromIterator<Individual> for IndividualCollection {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
