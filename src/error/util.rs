//! Utility functions for error handling
//!
//! Thin wrappers around file operations that attach the path and purpose
//! to any failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GedcomError, Result};
use crate::utils::logging::log_lossy_decode;

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(GedcomError::io(
            format!("File not found, needed for: {purpose}"),
            Some(path),
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        GedcomError::io(context, Some(path), e)
    })
}

/// Read a text file, replacing any bytes that are not valid UTF-8
///
/// Older record files are often Latin-1 or another 8-bit encoding.
pub fn safe_read_text(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut bytes = Vec::new();
    io::Read::read_to_end(&mut file, &mut bytes).map_err(|e| {
        GedcomError::io(format!("Failed to read file content for: {purpose}"), Some(path), e)
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log_lossy_decode(path, e.utf8_error().valid_up_to());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Create (or truncate) a file for writing, checking that its directory exists
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(GedcomError::io(
                format!("Directory not found, needed for: {purpose}"),
                Some(parent),
                io::Error::from(io::ErrorKind::NotFound),
            ));
        }
    }

    fs::File::create(path)
        .map_err(|e| GedcomError::io(format!("Failed to create file for: {purpose}"), Some(path), e))
}
