//! Report destinations
//!
//! A sink receives finished finding blocks and diagnostic lines. The
//! standard sink writes every block identically to the report file and the
//! console, and sends diagnostics to a separate stream.

use crate::error::util::safe_create_file;
use crate::error::{GedcomError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for findings and diagnostics
pub trait ReportSink {
    /// Write one finished finding block
    fn write_finding(&mut self, block: &str) -> Result<()>;

    /// Record a diagnostic, kept apart from the findings stream
    fn write_diagnostic(&mut self, message: &str) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes findings to a file and, optionally, echoes them to a console
#[derive(Debug)]
pub struct TeeSink<F: Write, C: Write, D: Write> {
    file: F,
    console: Option<C>,
    diagnostics: D,
}

impl TeeSink<BufWriter<File>, io::Stdout, io::Stderr> {
    /// Create the report file at `path`, echoing to stdout when `echo` is set
    pub fn create(path: &Path, echo: bool) -> Result<Self> {
        let file = safe_create_file(path, "report output")?;
        let console = echo.then(io::stdout);
        Ok(Self::new(BufWriter::new(file), console, io::stderr()))
    }
}

impl<F: Write, C: Write, D: Write> TeeSink<F, C, D> {
    /// Assemble a sink from its three writers
    pub const fn new(file: F, console: Option<C>, diagnostics: D) -> Self {
        Self {
            file,
            console,
            diagnostics,
        }
    }

    /// Take the writers back, e.g. to inspect in-memory buffers
    pub fn into_parts(self) -> (F, Option<C>, D) {
        (self.file, self.console, self.diagnostics)
    }
}

fn report_err(destination: &str, e: &io::Error) -> GedcomError {
    GedcomError::Report(format!("failed writing to {destination}: {e}"))
}

impl<F: Write, C: Write, D: Write> ReportSink for TeeSink<F, C, D> {
    fn write_finding(&mut self, block: &str) -> Result<()> {
        self.file
            .write_all(block.as_bytes())
            .map_err(|e| report_err("report file", &e))?;
        if let Some(console) = self.console.as_mut() {
            console
                .write_all(block.as_bytes())
                .map_err(|e| report_err("console", &e))?;
        }
        Ok(())
    }

    fn write_diagnostic(&mut self, message: &str) -> Result<()> {
        writeln!(self.diagnostics, "{message}").map_err(|e| report_err("diagnostics", &e))
    }

    fn finish(&mut self) -> Result<()> {
        self.file.flush().map_err(|e| report_err("report file", &e))?;
        if let Some(console) = self.console.as_mut() {
            console.flush().map_err(|e| report_err("console", &e))?;
        }
        self.diagnostics
            .flush()
            .map_err(|e| report_err("diagnostics", &e))
    }
}

/// Collects findings and diagnostics in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Finding blocks in the order they were written
    pub findings: Vec<String>,
    /// Diagnostic messages in the order they were written
    pub diagnostics: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All finding blocks concatenated, as they would appear in a report file
    #[must_use]
    pub fn text(&self) -> String {
        self.findings.concat()
    }
}

impl ReportSink for MemorySink {
    fn write_finding(&mut self, block: &str) -> Result<()> {
        self.findings.push(block.to_string());
        Ok(())
    }

    fn write_diagnostic(&mut self, message: &str) -> Result<()> {
        self.diagnostics.push(message.to_string());
        Ok(())
    }
}
