//! Record registries
//!
//! This module provides the keyed collections the parser fills and every
//! rule reads. Records are kept in first-seen order so that rule output is
//! deterministic for a given input file.

pub mod family;
pub mod individual;

pub use family::FamilyCollection;
pub use individual::IndividualCollection;

use crate::models::EntityModel;
use indexmap::IndexMap;

/// Generic record collection implementation
///
/// Stores records in an `IndexMap` keyed by their id. Adding a record whose
/// id is already present replaces the earlier record but keeps its position.
#[derive(Debug, Clone)]
pub struct GenericCollection<T: EntityModel> {
    /// Records indexed by ID
    items: IndexMap<String, T>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Create a collection from a vector of records
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        for model in models {
            collection.add(model);
        }
        collection
    }

    /// Add a record, returning the record it replaced (if any)
    pub fn add(&mut self, model: T) -> Option<T> {
        self.items.insert(model.id().to_string(), model)
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.items.values()
    }


    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> FromIterator<T> for GenericCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for model in iter {
            collection.add(model);
        }
        collection
    }
}
