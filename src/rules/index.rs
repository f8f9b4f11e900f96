//! Relationship lookups
//!
//! Family records only point downwards (a family lists its spouses and
//! children). Rules that walk up or sideways in the tree use these indices,
//! built once per run, instead of rescanning the family registry for every
//! person.

use crate::collections::FamilyCollection;
use crate::models::Family;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

type FamilyList<'a> = SmallVec<[&'a Family; 2]>;

/// Child → parent families and spouse → own families
#[derive(Debug, Default)]
pub struct RelationshipIndex<'a> {
    parent_families: FxHashMap<&'a str, FamilyList<'a>>,
    spouse_families: FxHashMap<&'a str, FamilyList<'a>>,
}

impl<'a> RelationshipIndex<'a> {
    /// Index every family in the registry
    #[must_use]
    pub fn build(families: &'a FamilyCollection) -> Self {
        let mut index = Self::default();
        for family in families.iter() {
            for child in &family.children {
                index
                    .parent_families
                    .entry(child.as_str())
                    .or_default()
                    .push(family);
            }
            for spouse in family.parents() {
                let list = index.spouse_families.entry(spouse).or_default();
                // A family that names the same person as husband and wife is listed once
                if !list.iter().any(|f| std::ptr::eq(*f, family)) {
                    list.push(family);
                }
            }
        }
        index
    }

    /// Families in which `id` is a child
    #[must_use]
    pub fn parent_families(&self, id: &str) -> &[&'a Family] {
        self.parent_families
            .get(id)
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    /// Families in which `id` is husband or wife
    #[must_use]
    pub fn spouse_families(&self, id: &str) -> &[&'a Family] {
        self.spouse_families
            .get(id)
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    /// Husbands and wives of every family `id` is a child of
    pub fn parents_of(&self, id: &str) -> impl Iterator<Item = &'a str> {
        self.parent_families(id)
            .iter()
            .copied()
            .flat_map(Family::parents)
    }

    /// Whether `a` and `b` are distinct co-children of some family
    #[must_use]
    pub fn are_siblings(&self, a: &str, b: &str) -> bool {
        a != b
            && self
                .parent_families(a)
                .iter()
                .any(|family| family.children.iter().any(|child| child == b))
    }

    /// Whether `id` is recorded as the husband of any family
    #[must_use]
    pub fn is_husband(&self, id: &str) -> bool {
        self.spouse_families(id)
            .iter()
            .any(|family| family.husband.as_deref() == Some(id))
    }
}
