//! Error handling for the record parser and rule engine.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for `gedcheck`
#[derive(Debug, thiserror::Error)]
pub enum GedcomError {
    /// Error opening, reading or writing a file
    #[error("IO error: {context}{}", path_suffix(.path.as_deref()))]
    Io {
        /// What was being attempted
        context: String,
        /// The file involved, if known
        path: Option<PathBuf>,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// A stored date that does not parse as `mm/dd/yyyy`
    #[error("Unparseable date: \"{0}\"")]
    UnparseableDate(String),

    /// Error writing a finding to a report destination
    #[error("Report error: {0}")]
    Report(String),
}

fn path_suffix(path: Option<&Path>) -> String {
    path.map(|p| format!(" ({})", p.display())).unwrap_or_default()
}

impl GedcomError {
    /// Create an IO error with context and an optional path
    pub fn io(context: impl Into<String>, path: Option<&Path>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.map(Path::to_path_buf),
            source,
        }
    }
}

impl From<io::Error> for GedcomError {
    fn from(error: io::Error) -> Self {
        Self::io("unexpected failure", None, error)
    }
}

/// Result type for `gedcheck` operations
pub type Result<T> = std::result::Result<T, GedcomError>;
