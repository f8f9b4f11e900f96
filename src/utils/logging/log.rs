//! Stage logging
//!
//! One place for the lines the parse and check stages emit, so the binary's
//! `RUST_LOG` output reads the same from run to run.

use crate::parser::ParseSummary;
use crate::rules::RunSummary;
use std::path::Path;
use std::time::Duration;

/// Log that a record file is about to be read
pub fn log_parse_start(path: &Path) {
    ::log::info!("Parsing records from {}", path.display());
}

/// Log the registries built from `path`; warns when none were found
pub fn log_parse_complete(path: &Path, summary: &ParseSummary, elapsed: Duration) {
    ::log::info!(
        "Parsed {} individuals and {} families from {} in {elapsed:?}",
        summary.individuals,
        summary.families,
        path.display()
    );
    ::log::debug!(
        "{}: {} lines read, {} skipped, {} ignored",
        path.display(),
        summary.lines,
        summary.skipped,
        summary.ignored
    );

    if summary.records() == 0 {
        ::log::warn!(
            "No individual or family records found in {} ({} lines, {} skipped)",
            path.display(),
            summary.lines,
            summary.skipped
        );
    }
}

/// Log that `path` held bytes that are not UTF-8 and were replaced
pub fn log_lossy_decode(path: &Path, invalid_at: usize) {
    ::log::warn!(
        "{} is not valid UTF-8 (first bad byte at offset {invalid_at}); invalid bytes replaced",
        path.display()
    );
}

/// Log a record id that appeared twice; the later record wins
pub fn log_duplicate_record(kind: &str, id: &str) {
    ::log::warn!("Duplicate {kind} id {id}; keeping the later record");
}

/// Log the totals of a finished rule run
pub fn log_run_complete(summary: &RunSummary, elapsed: Duration) {
    ::log::info!(
        "Checked {} rules over {} individuals and {} families in {elapsed:?}: {} findings, {} skipped records",
        summary.findings_by_rule.len(),
        summary.individual_count,
        summary.family_count,
        summary.total_findings(),
        summary.diagnostic_count
    );
}
