//! Module for handling date normalization and parsing.
//!
//! Source dates look like `19 OCT 1997`. The parser stores them as
//! `10/19/1997` (month from the code, day and year verbatim) and rules parse
//! that form with chrono when they need to compare.

use crate::error::{GedcomError, Result};
use chrono::NaiveDate;

/// Format of dates stored on records
pub const STORED_DATE_FORMAT: &str = "%m/%d/%Y";

/// Map a 3-letter upper-case month code to its 2-digit number
#[must_use]
pub fn month_number(code: &str) -> Option<&'static str> {
    let number = match code {
        "JAN" => "01",
        "FEB" => "02",
        "MAR" => "03",
        "APR" => "04",
        "MAY" => "05",
        "JUN" => "06",
        "JUL" => "07",
        "AUG" => "08",
        "SEP" => "09",
        "OCT" => "10",
        "NOV" => "11",
        "DEC" => "12",
        _ => return None,
    };
    Some(number)
}

/// Convert a `D MON YYYY` date value to the stored `MM/D/YYYY` form
///
/// Returns `None` unless the value has exactly three parts and a known
/// month code, so a record never carries a half-normalized date.
#[must_use]
pub fn normalize_date_value(value: &str) -> Option<String> {
    let mut parts = value.split_whitespace();
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let month = month_number(month)?;
    Some(format!("{month}/{day}/{year}"))
}

/// Parse a stored `mm/dd/yyyy` date
pub fn parse_stored_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), STORED_DATE_FORMAT)
        .map_err(|_| GedcomError::UnparseableDate(value.to_string()))
}
