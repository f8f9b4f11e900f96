//! Findings and diagnostics
//!
//! Each finding renders to a fixed multi-line block. Downstream tools match
//! on this text literally, so the layout (including the trailing spaces on
//! some headers and the number of blank lines after each block) must not
//! change.

use crate::collections::IndividualCollection;
use crate::rules::RuleId;
use std::fmt;

/// An individual referenced by a finding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Party {
    /// Individual id
    pub id: String,
    /// Display name, empty when the id is not registered
    pub name: String,
}

impl Party {
    /// Create a party from an id and name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Look up the name for an optional id
    #[must_use]
    pub fn resolve(individuals: &IndividualCollection, id: Option<&str>) -> Self {
        let id = id.unwrap_or_default();
        Self::new(id, individuals.name_of(id))
    }
}

/// One detected inconsistency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Birth date strictly after death date
    BirthAfterDeath {
        individual: Party,
        birth: String,
        death: String,
    },
    /// Divorce date strictly before marriage date
    DivorceBeforeMarriage {
        family_id: String,
        husband: Party,
        wife: Party,
        marriage: String,
        divorce: String,
    },
    /// Child born strictly before the parents' marriage
    BornBeforeMarriage {
        family_id: String,
        child: Party,
        birth: String,
        marriage: String,
    },
    /// Child born strictly after the parents' divorce
    BornAfterDivorce {
        family_id: String,
        child: Party,
        birth: String,
        divorce: String,
    },
    /// Male child whose surname differs from the husband's
    MaleSurnameMismatch {
        family_id: String,
        child: Party,
        expected: String,
        actual: String,
    },
    /// Someone married to a sibling of one of their parents
    AuntUncleMarriage { nephew: Party, relative: Party },
    /// Two family records with the same spouses and marriage date
    DuplicateFamily {
        family_id: String,
        other_family_id: String,
        husband_name: String,
        wife_name: String,
        marriage: String,
    },
}

impl Finding {
    /// The rule that produces this kind of finding
    #[must_use]
    pub const fn rule(&self) -> RuleId {
        match self {
            Self::BirthAfterDeath { .. } => RuleId::BirthBeforeDeath,
            Self::DivorceBeforeMarriage { .. } => RuleId::MarriageBeforeDivorce,
            Self::BornBeforeMarriage { .. } | Self::BornAfterDivorce { .. } => {
                RuleId::BirthDuringMarriage
            }
            Self::MaleSurnameMismatch { .. } => RuleId::MaleLastNames,
            Self::AuntUncleMarriage { .. } => RuleId::AuntsAndUncles,
            Self::DuplicateFamily { .. } => RuleId::UniqueFamiliesBySpouses,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BirthAfterDeath {
                individual,
                birth,
                death,
            } => {
                writeln!(f, "ERROR:INDIVIDUAL: User Story US03: Birth Before Death ")?;
                writeln!(
                    f,
                    "Individual: {} - {} was born after death",
                    individual.id, individual.name
                )?;
                writeln!(f, "DOB: {birth} DOD: {death}")?;
                writeln!(f)
            }
            Self::DivorceBeforeMarriage {
                family_id,
                husband,
                wife,
                marriage,
                divorce,
            } => {
                writeln!(f, "ERROR:FAMILY: User Story US04: Marriage Before Divorce ")?;
                writeln!(f, "Family: {family_id}")?;
                writeln!(
                    f,
                    "Individual: {}: {}{}: {} marriage date is before divorce date.",
                    husband.id, husband.name, wife.id, wife.name
                )?;
                writeln!(f, "Marriage Date: {marriage} Divorce Date: {divorce}")?;
                writeln!(f)
            }
            Self::BornBeforeMarriage {
                family_id,
                child,
                birth,
                marriage,
            } => {
                writeln!(f, "ERROR: User Story US08: Birth Before Marriage Date ")?;
                writeln!(f, "Family ID: {family_id}")?;
                writeln!(
                    f,
                    "Individual: {}: {} Has been born before parents' marriage",
                    child.id, child.name
                )?;
                writeln!(f, "DOB: {birth} Parents Marriage Date: {marriage}")?;
                writeln!(f)?;
                writeln!(f)
            }
            Self::BornAfterDivorce {
                family_id,
                child,
                birth,
                divorce,
            } => {
                writeln!(f, "ERROR: User Story US08: Birth After Divorce Date")?;
                writeln!(f, "Family ID: {family_id}")?;
                writeln!(
                    f,
                    "Individual: {}: {} Has been born after parents' divorce",
                    child.id, child.name
                )?;
                writeln!(f, "DOB: {birth} Parents Divorce Date: {divorce}")?;
                writeln!(f)?;
                writeln!(f)
            }
            Self::MaleSurnameMismatch {
                family_id,
                child,
                expected,
                actual,
            } => {
                writeln!(f, "ERROR: User Story US16: Male Last Names")?;
                writeln!(f, "Family ID: {family_id}")?;
                writeln!(
                    f,
                    "Individual: {}: {} does not carry the family surname",
                    child.id, child.name
                )?;
                writeln!(f, "Expected Surname: {expected} Actual Surname: {actual}")?;
                writeln!(f)
            }
            Self::AuntUncleMarriage { nephew, relative } => {
                writeln!(f, "ERROR: User Story US20: Aunts and Uncles")?;
                writeln!(
                    f,
                    "Individual: {} - {} is married to either their aunt or uncle {} - {}",
                    nephew.id, nephew.name, relative.id, relative.name
                )?;
                writeln!(f)?;
                writeln!(f)
            }
            Self::DuplicateFamily {
                family_id,
                other_family_id,
                husband_name,
                wife_name,
                marriage,
            } => {
                writeln!(f, "ERROR: User Story US24: Unique Families By Spouse :")?;
                writeln!(
                    f,
                    "{family_id}: Husbund Name: {husband_name},Wife Name: {wife_name} and \
                     {other_family_id}: Husbund Name: {husband_name},Wife Name: {wife_name}"
                )?;
                writeln!(f, "have same spouses and marriage dates :{marriage}")?;
                writeln!(f)
            }
        }
    }
}

/// A date that could not be parsed while checking one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Rule that was checking the record
    pub rule: RuleId,
    /// Individual or family id whose check was skipped
    pub record_id: String,
    /// Failure text, e.g. `Unparseable date: "test"`
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.rule.user_story(),
            self.record_id,
            self.message
        )
    }
}
