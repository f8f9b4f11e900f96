//! Tests for the record registries
//!
//! This module tests the generic collection and the individual and family
//! registries built on top of it.

use gedcheck::collections::GenericCollection;
use gedcheck::models::{EntityModel, Family, Individual};
use gedcheck::{FamilyCollection, IndividualCollection};

#[test]
fn test_generic_collection_basic_functions() {
    let mut collection = GenericCollection::<Family>::new();
    assert!(collection.is_empty());

    collection.add(Family::new("@F1@").with_husband("@I1@"));
    collection.add(Family::new("@F2@").with_wife("@I2@"));

    assert_eq!(collection.len(), 2);
    assert!(collection.get("@F1@").is_some());
    assert!(collection.get("@F3@").is_none());
    assert_eq!(collection.get("@F2@").map(EntityModel::id), Some("@F2@"));

    let ids: Vec<_> = collection.iter().map(EntityModel::id).collect();
    assert_eq!(ids, vec!["@F1@", "@F2@"]);
}

#[test]
fn test_individual_names() {
    let individuals = IndividualCollection::from_individuals(vec![
        Individual::new("@I1@").with_name("Emma Davis"),
        Individual::new("@I2@"),
    ]);

    assert_eq!(individuals.name_of("@I1@"), "Emma Davis");
    assert_eq!(individuals.name_of("@I2@"), "");
    assert_eq!(individuals.name_of("@I99@"), "");
}

#[test]
fn test_family_registry_replaces_duplicates() {
    let mut families = FamilyCollection::from_families(vec![
        Family::new("@F1@").with_marriage("01/01/2000"),
        Family::new("@F2@"),
    ]);

    let replaced = families.add(Family::new("@F1@").with_marriage("02/02/2002"));

    assert_eq!(replaced.and_then(|f| f.marriage).as_deref(), Some("01/01/2000"));
    assert_eq!(families.len(), 2);
    assert_eq!(
        families.get("@F1@").and_then(|f| f.marriage.as_deref()),
        Some("02/02/2002")
    );
    assert_eq!(families.iter().next().map(|f| f.id.as_str()), Some("@F1@"));
}
