//! Record parser
//!
//! Reads record lines into the individual and family registries. Parsing
//! is best-effort: a line that cannot be tied to an open record is counted
//! and skipped, and the rest of the file is still read.

pub mod date;
pub mod line;

pub use date::{month_number, normalize_date_value, parse_stored_date};
pub use line::GedcomLine;

use crate::collections::{FamilyCollection, IndividualCollection};
use crate::error::Result;
use crate::error::util::safe_read_text;
use crate::models::{Family, Individual};
use crate::utils::logging::{log_duplicate_record, log_parse_complete, log_parse_start};
use itertools::Itertools;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

/// The record currently being assembled
#[derive(Debug, Default)]
enum OpenRecord {
    #[default]
    None,
    Individual(Individual),
    Family(Family),
}

/// The level-1 field whose nested lines are being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenField {
    Name,
    Birth,
    Death,
    Marriage,
    Divorce,
}

/// Parser state carried from one line to the next
#[derive(Debug, Default)]
struct ParseState {
    record: OpenRecord,
    field: Option<OpenField>,
}

/// Line counts from one parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines read, including blank ones
    pub lines: usize,
    /// Lines that could not be tokenized or had no open record/field
    pub skipped: usize,
    /// Lines with a tag this parser does not use
    pub ignored: usize,
    /// Individuals registered
    pub individuals: usize,
    /// Families registered
    pub families: usize,
}

impl ParseSummary {
    /// Total records registered
    #[must_use]
    pub const fn records(&self) -> usize {
        self.individuals + self.families
    }
}

impl fmt::Display for ParseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines ({} skipped, {} ignored): {} individuals, {} families",
            self.lines, self.skipped, self.ignored, self.individuals, self.families
        )
    }
}

/// Registries produced by a parse
#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    /// Individual registry
    pub individuals: IndividualCollection,
    /// Family registry
    pub families: FamilyCollection,
    /// Line counts
    pub summary: ParseSummary,
}

/// Builds the registries from record lines
#[derive(Debug, Default)]
pub struct RecordParser {
    individuals: IndividualCollection,
    families: FamilyCollection,
    summary: ParseSummary,
}

impl RecordParser {
    /// Create a parser with empty registries
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every line and return the finished registries
    pub fn parse_lines<'a, I>(mut self, lines: I) -> ParsedRecords
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ParseState::default();
        for raw in lines {
            self.step(&mut state, raw);
        }
        self.commit(state.record);
        self.finish()
    }

    /// Parse lines from a reader
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    pub fn parse_reader<R: BufRead>(mut self, mut reader: R) -> Result<ParsedRecords> {
        let mut state = ParseState::default();
        let mut buf = Vec::new();
        while reader.read_until(b'\n', &mut buf)? > 0 {
            self.step(
                &mut state,
                String::from_utf8_lossy(&buf).trim_end_matches(['\n', '\r']),
            );
            buf.clear();
        }
        self.commit(state.record);
        Ok(self.finish())
    }

    fn finish(mut self) -> ParsedRecords {
        self.summary.individuals = self.individuals.len();
        self.summary.families = self.families.len();
        ParsedRecords {
            individuals: self.individuals,
            families: self.families,
            summary: self.summary,
        }
    }

    fn step(&mut self, state: &mut ParseState, raw: &str) {
        self.summary.lines += 1;
        if raw.trim().is_empty() {
            return;
        }

        let Some(line) = GedcomLine::parse(raw) else {
            self.skip(raw, "not a record line");
            return;
        };

        match line.level {
            0 => self.start_record(state, &line),
            1 => self.apply_field(state, &line),
            2 if line.tag == "DATE" => self.apply_date(state, &line, raw),
            _ => self.summary.ignored += 1,
        }
    }

    fn start_record(&mut self, state: &mut ParseState, line: &GedcomLine<'_>) {
        let finished = std::mem::take(&mut state.record);
        self.commit(finished);
        state.field = None;

        state.record = match (line.tag, line.xref) {
            ("INDI", Some(id)) => OpenRecord::Individual(Individual::new(id)),
            ("FAM", Some(id)) => OpenRecord::Family(Family::new(id)),
            _ => OpenRecord::None,
        };
    }

    fn apply_field(&mut self, state: &mut ParseState, line: &GedcomLine<'_>) {
        state.field = None;
        let value = line.value.unwrap_or_default();

        match (&mut state.record, line.tag) {
            (OpenRecord::None, tag) => {
                self.skip(tag, "no open record");
                return;
            }
            (OpenRecord::Individual(individual), "NAME") => {
                individual.name = normalize_name(value);
                state.field = Some(OpenField::Name);
            }
            (OpenRecord::Individual(_), "BIRT") => state.field = Some(OpenField::Birth),
            (OpenRecord::Individual(_), "DEAT") => state.field = Some(OpenField::Death),
            (OpenRecord::Family(_), "MARR") => state.field = Some(OpenField::Marriage),
            (OpenRecord::Family(_), "DIV") => state.field = Some(OpenField::Divorce),
            (OpenRecord::Family(family), "HUSB") if !value.is_empty() => {
                family.husband = Some(value.to_string());
            }
            (OpenRecord::Family(family), "WIFE") if !value.is_empty() => {
                family.wife = Some(value.to_string());
            }
            (OpenRecord::Family(family), "CHIL") if !value.is_empty() => family.add_child(value),
            _ => self.summary.ignored += 1,
        }
    }

    fn apply_date(&mut self, state: &mut ParseState, line: &GedcomLine<'_>, raw: &str) {
        let Some(field) = state.field else {
            self.skip(raw, "date outside a date field");
            return;
        };

        let value = line.value.unwrap_or_default();
        let Some(date) = normalize_date_value(value) else {
            log::debug!("Leaving unrecognized date '{value}' unset");
            return;
        };

        match (&mut state.record, field) {
            (OpenRecord::Individual(individual), OpenField::Birth) => individual.birth = Some(date),
            (OpenRecord::Individual(individual), OpenField::Death) => individual.death = Some(date),
            (OpenRecord::Family(family), OpenField::Marriage) => family.marriage = Some(date),
            (OpenRecord::Family(family), OpenField::Divorce) => family.divorce = Some(date),
            _ => self.summary.ignored += 1,
        }
    }

    fn commit(&mut self, record: OpenRecord) {
        match record {
            OpenRecord::None => {}
            OpenRecord::Individual(individual) => {
                if let Some(previous) = self.individuals.add(individual) {
                    log_duplicate_record("individual", &previous.id);
                }
            }
            OpenRecord::Family(family) => {
                if let Some(previous) = self.families.add(family) {
                    log_duplicate_record("family", &previous.id);
                }
            }
        }
    }

    fn skip(&mut self, what: &str, reason: &str) {
        self.summary.skipped += 1;
        log::debug!("Skipping line '{}': {reason}", what.trim());
    }
}

/// Strip surname slashes and collapse whitespace: `Emma /Davis/` becomes `Emma Davis`
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
        .join(" ")
}

/// Parse records from text
#[must_use]
pub fn parse_str(input: &str) -> ParsedRecords {
    RecordParser::new().parse_lines(input.lines())
}

/// Parse records from a file on disk
///
/// Only a missing or unreadable file is an error. Text that is not valid
/// UTF-8 is decoded lossily and parsed like any other input.
pub fn parse_file(path: &Path) -> Result<ParsedRecords> {
    let start = Instant::now();
    log_parse_start(path);

    let content = safe_read_text(path, "record input")?;
    let records = parse_str(&content);

    log_parse_complete(path, &records.summary, start.elapsed());
    Ok(records)
}
