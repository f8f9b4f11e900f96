//! Run statistics
//!
//! Counts what each rule produced so the binary can print a short summary
//! once the report has been written.

use crate::rules::{RuleId, RuleOutcome};
use indexmap::IndexMap;
use std::fmt;

/// Per-rule totals for one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Findings per rule, in the order the rules ran
    pub findings_by_rule: IndexMap<RuleId, usize>,
    /// Records skipped because of unparseable dates, across all rules
    pub diagnostic_count: usize,
    /// Individuals checked
    pub individual_count: usize,
    /// Families checked
    pub family_count: usize,
}

impl RunSummary {
    /// Tally a set of rule outcomes
    #[must_use]
    pub fn from_outcomes(
        outcomes: &[RuleOutcome],
        individual_count: usize,
        family_count: usize,
    ) -> Self {
        Self {
            findings_by_rule: outcomes
                .iter()
                .map(|outcome| (outcome.rule, outcome.findings.len()))
                .collect(),
            diagnostic_count: outcomes.iter().map(|o| o.diagnostics.len()).sum(),
            individual_count,
            family_count,
        }
    }

    /// Total findings across all rules
    #[must_use]
    pub fn total_findings(&self) -> usize {
        self.findings_by_rule.values().sum()
    }

    /// Findings for one rule; zero when the rule did not run
    #[must_use]
    pub fn findings_for(&self, rule: RuleId) -> usize {
        self.findings_by_rule.get(&rule).copied().unwrap_or(0)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Summary:")?;
        writeln!(f, "  Individuals: {}", self.individual_count)?;
        writeln!(f, "  Families: {}", self.family_count)?;
        for (rule, count) in &self.findings_by_rule {
            writeln!(f, "  {rule}: {count}")?;
        }
        writeln!(f, "  Total Findings: {}", self.total_findings())?;
        write!(f, "  Skipped (unparseable dates): {}", self.diagnostic_count)
    }
}
