//! A Rust library for parsing GEDCOM genealogy records and checking them for
//! consistency errors such as births after deaths or marriages to aunts and
//! uncles.
//!
//! The pipeline has three stages: the [`parser`] fills the individual and
//! family registries, the [`rules::RuleEngine`] runs each consistency rule
//! against them, and a [`report::ReportSink`] receives the finding blocks.

pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod rules;
pub mod utils;

// Re-export the most common types for easier use
pub use collections::{FamilyCollection, IndividualCollection};
pub use config::ValidatorConfig;
pub use error::{GedcomError, Result};
pub use models::{Family, Individual};
pub use parser::{ParsedRecords, RecordParser, parse_file, parse_str};
pub use report::{Finding, MemorySink, ReportSink, TeeSink};
pub use rules::{RuleEngine, RuleId, RunSummary};

use std::path::Path;

/// Run the configured rules against already-built registries
pub fn check_records<S: ReportSink + ?Sized>(
    individuals: &IndividualCollection,
    families: &FamilyCollection,
    config: &ValidatorConfig,
    sink: &mut S,
) -> Result<RunSummary> {
    RuleEngine::from_config(config).run(individuals, families, sink)
}

/// Parse `path` and run the configured rules, writing findings to `sink`
pub fn check_file<S: ReportSink + ?Sized>(
    path: &Path,
    config: &ValidatorConfig,
    sink: &mut S,
) -> Result<RunSummary> {
    let records = parse_file(path)?;
    check_records(&records.individuals, &records.families, config, sink)
}
