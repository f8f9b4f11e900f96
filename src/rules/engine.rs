//! Rule engine
//!
//! Runs the configured rules against frozen registries and writes their
//! findings to a sink, always in rule order. With parallel evaluation the
//! rules run on the rayon pool, but the collected outcomes keep their
//! original order, so the report is byte-identical either way.

use crate::collections::{FamilyCollection, IndividualCollection};
use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::report::ReportSink;
use crate::rules::{
    AuntsAndUncles, BirthBeforeDeath, BirthDuringMarriage, MaleLastNames, MarriageBeforeDivorce,
    Rule, RuleContext, RuleId, RuleOutcome, RunSummary, UniqueFamiliesBySpouses,
};
use crate::utils::logging::log_run_complete;
use rayon::prelude::*;
use std::time::Instant;

fn standard_rule(id: RuleId) -> Box<dyn Rule> {
    match id {
        RuleId::BirthBeforeDeath => Box::new(BirthBeforeDeath),
        RuleId::MarriageBeforeDivorce => Box::new(MarriageBeforeDivorce),
        RuleId::BirthDuringMarriage => Box::new(BirthDuringMarriage),
        RuleId::MaleLastNames => Box::new(MaleLastNames),
        RuleId::AuntsAndUncles => Box::new(AuntsAndUncles),
        RuleId::UniqueFamiliesBySpouses => Box::new(UniqueFamiliesBySpouses),
    }
}

/// Ordered set of rules plus evaluation strategy
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
    parallel: bool,
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_ids())
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleEngine {
    /// Engine running exactly `rules`, in the given order
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            parallel: false,
        }
    }

    /// All six rules in report order
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RuleId::ALL.into_iter().map(standard_rule).collect())
    }

    /// Standard rules minus the disabled ones, with the configured strategy
    #[must_use]
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let rules = RuleId::ALL
            .into_iter()
            .filter(|&id| config.is_enabled(id))
            .map(standard_rule)
            .collect();
        Self::new(rules).with_parallel(config.parallel_rules)
    }

    /// Choose between sequential and rayon evaluation
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Ids of the rules that will run, in order
    #[must_use]
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Evaluate every rule; outcomes come back in rule order
    #[must_use]
    pub fn evaluate(
        &self,
        individuals: &IndividualCollection,
        families: &FamilyCollection,
    ) -> Vec<RuleOutcome> {
        let ctx = RuleContext::new(individuals, families);

        if self.parallel {
            log::debug!("Evaluating {} rules in parallel", self.rules.len());
            self.rules.par_iter().map(|rule| rule.evaluate(&ctx)).collect()
        } else {
            self.rules.iter().map(|rule| rule.evaluate(&ctx)).collect()
        }
    }

    /// Evaluate every rule and write the results to `sink`
    ///
    /// Findings are written in rule-then-record order; diagnostics follow on
    /// the sink's separate channel.
    pub fn run<S: ReportSink + ?Sized>(
        &self,
        individuals: &IndividualCollection,
        families: &FamilyCollection,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let outcomes = self.evaluate(individuals, families);

        for outcome in &outcomes {
            log::debug!(
                "{}: {} findings, {} skipped",
                outcome.rule,
                outcome.findings.len(),
                outcome.diagnostics.len()
            );
            for finding in &outcome.findings {
                sink.write_finding(&finding.to_string())?;
            }
        }
        for diagnostic in outcomes.iter().flat_map(|o| &o.diagnostics) {
            sink.write_diagnostic(&diagnostic.to_string())?;
        }
        sink.finish()?;

        let summary = RunSummary::from_outcomes(&outcomes, individuals.len(), families.len());
        log_run_complete(&summary, start.elapsed());
        Ok(summary)
    }
}
