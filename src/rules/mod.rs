//! Consistency rules
//!
//! Every rule reads the frozen registries through a [`RuleContext`] and
//! reports what it finds in a [`RuleOutcome`]. Rules never see each other's
//! results; the engine only fixes the order in which their output is
//! written.

pub mod duplicates;
pub mod engine;
pub mod index;
pub mod lifespan;
pub mod lineage;
pub mod marriage;
pub mod statistics;

pub use duplicates::UniqueFamiliesBySpouses;
pub use engine::RuleEngine;
pub use index::RelationshipIndex;
pub use lifespan::BirthBeforeDeath;
pub use lineage::{AuntsAndUncles, MaleLastNames};
pub use marriage::{BirthDuringMarriage, MarriageBeforeDivorce};
pub use statistics::RunSummary;

use crate::collections::{FamilyCollection, IndividualCollection};
use crate::error::GedcomError;
use crate::report::{Diagnostic, Finding};
use std::fmt;
use std::str::FromStr;

/// Identifies one rule; the declaration order is the output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    /// US03
    BirthBeforeDeath,
    /// US04
    MarriageBeforeDivorce,
    /// US08
    BirthDuringMarriage,
    /// US16
    MaleLastNames,
    /// US20
    AuntsAndUncles,
    /// US24
    UniqueFamiliesBySpouses,
}

impl RuleId {
    /// All rules in output order
    pub const ALL: [Self; 6] = [
        Self::BirthBeforeDeath,
        Self::MarriageBeforeDivorce,
        Self::BirthDuringMarriage,
        Self::MaleLastNames,
        Self::AuntsAndUncles,
        Self::UniqueFamiliesBySpouses,
    ];

    /// User-story reference printed in finding headers
    #[must_use]
    pub const fn user_story(self) -> &'static str {
        match self {
            Self::BirthBeforeDeath => "US03",
            Self::MarriageBeforeDivorce => "US04",
            Self::BirthDuringMarriage => "US08",
            Self::MaleLastNames => "US16",
            Self::AuntsAndUncles => "US20",
            Self::UniqueFamiliesBySpouses => "US24",
        }
    }

    /// Short human-readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BirthBeforeDeath => "Birth Before Death",
            Self::MarriageBeforeDivorce => "Marriage Before Divorce",
            Self::BirthDuringMarriage => "Birth Before Marriage / After Divorce",
            Self::MaleLastNames => "Male Last Names",
            Self::AuntsAndUncles => "Aunts and Uncles",
            Self::UniqueFamiliesBySpouses => "Unique Families By Spouse",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.user_story(), self.title())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.user_story().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown rule '{s}', expected one of US03, US04, US08, US16, US20, US24")
            })
    }
}

/// Read-only inputs shared by every rule
#[derive(Debug)]
pub struct RuleContext<'a> {
    /// Individual registry
    pub individuals: &'a IndividualCollection,
    /// Family registry
    pub families: &'a FamilyCollection,
    /// Relationship lookups built once from the family registry
    pub index: RelationshipIndex<'a>,
}

impl<'a> RuleContext<'a> {
    /// Build the context, including the relationship index
    #[must_use]
    pub fn new(individuals: &'a IndividualCollection, families: &'a FamilyCollection) -> Self {
        Self {
            individuals,
            families,
            index: RelationshipIndex::build(families),
        }
    }
}

/// Everything one rule produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// The rule that ran
    pub rule: RuleId,
    /// Findings in discovery order
    pub findings: Vec<Finding>,
    /// Records skipped because a date could not be parsed
    pub diagnostics: Vec<Diagnostic>,
}

impl RuleOutcome {
    /// Create an empty outcome for a rule
    #[must_use]
    pub const fn new(rule: RuleId) -> Self {
        Self {
            rule,
            findings: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Add a finding produced by this outcome's rule
    pub fn push(&mut self, finding: Finding) {
        debug_assert_eq!(finding.rule(), self.rule, "finding pushed to another rule's outcome");
        self.findings.push(finding);
    }

    /// Note that a record was skipped because of `error`
    pub fn diagnose(&mut self, record_id: &str, error: &GedcomError) {
        log::debug!(
            "{}: skipping {record_id}: {error}",
            self.rule.user_story()
        );
        self.diagnostics.push(Diagnostic {
            rule: self.rule,
            record_id: record_id.to_string(),
            message: error.to_string(),
        });
    }

    /// The finding blocks as one string
    #[must_use]
    pub fn text(&self) -> String {
        self.findings.iter().map(ToString::to_string).collect()
    }
}

/// A single consistency check
pub trait Rule: Send + Sync {
    /// Which rule this is
    fn id(&self) -> RuleId;

    /// Inspect the registries and record findings
    fn check(&self, ctx: &RuleContext<'_>, outcome: &mut RuleOutcome);

    /// Run the check into a fresh outcome
    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        let mut outcome = RuleOutcome::new(self.id());
        self.check(ctx, &mut outcome);
        outcome
    }
}

/// Run one rule against a pair of registries
#[must_use]
pub fn check_rule(
    rule: &dyn Rule,
    individuals: &IndividualCollection,
    families: &FamilyCollection,
) -> RuleOutcome {
    rule.evaluate(&RuleContext::new(individuals, families))
}
