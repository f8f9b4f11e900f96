//! Shared traits for record models

/// A record that is registered under a unique string key.
///
/// Both registries store their records by this key, so the id must not
/// change once a record has been added to a collection.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// Get the unique identifier for this record (e.g. `@I1@`)
    fn id(&self) -> &str;
}
