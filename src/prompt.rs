//! Interactive path prompts
//!
//! Used by the binary when a path is not given on the command line. Both
//! prompts keep asking until they get a usable answer; end of input is an
//! error.

use crate::config::DEFAULT_OUTPUT_FILE;
use crate::error::{GedcomError, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompt shown for the input file
pub const INPUT_PROMPT: &str = "Please Enter the Input File Path with filename: ";
/// Shown when the input file does not exist
pub const INPUT_RETRY: &str = "File Not Found. Please reenter path";
/// Prompt shown for the report location
pub const OUTPUT_PROMPT: &str = "Please Enter Output File Path: ";
/// Shown when the report's directory does not exist
pub const OUTPUT_RETRY: &str = "The Path You Entered Does Not Exist.Reenter path";

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GedcomError::io(
            "Input closed while waiting for a path",
            None,
            io::Error::from(io::ErrorKind::UnexpectedEof),
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask for an existing input file until one is given
pub fn prompt_input_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    loop {
        let answer = read_answer(input, output, INPUT_PROMPT)?;
        let path = PathBuf::from(&answer);
        if !answer.is_empty() && path.is_file() {
            return Ok(path);
        }
        log::debug!("Input path '{answer}' is not a file");
        writeln!(output)?;
        writeln!(output, "{INPUT_RETRY}")?;
    }
}

/// Resolve an answer to the report prompt
///
/// An empty answer means the default file in the working directory; an
/// existing directory gets the default file name appended. Anything else
/// is taken as a file path whose directory must exist.
#[must_use]
pub fn resolve_output_path(answer: &str) -> Option<PathBuf> {
    if answer.is_empty() {
        return Some(PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    let path = PathBuf::from(answer);
    if path.is_dir() {
        return Some(path.join(DEFAULT_OUTPUT_FILE));
    }
    output_location_exists(&path).then_some(path)
}

/// Ask for the report location until a writable place is given
pub fn prompt_output_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    loop {
        let answer = read_answer(input, output, OUTPUT_PROMPT)?;
        if let Some(path) = resolve_output_path(&answer) {
            return Ok(path);
        }
        log::debug!("Output directory for '{answer}' does not exist");
        writeln!(output)?;
        writeln!(output, "{OUTPUT_RETRY}")?;
    }
}

/// Whether `path` could be created as a report file
#[must_use]
pub fn output_location_exists(path: &Path) -> bool {
    path.parent()
        .is_none_or(|parent| parent.as_os_str().is_empty() || parent.is_dir())
}
