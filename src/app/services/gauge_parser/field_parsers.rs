//! Field parsing utilities for gauge file records
//!
//! This module provides helper functions for parsing the individual fields of
//! a data row, distinguishing three outcomes per measurement field: a valid
//! number, a recognized quality-flagged (missing) reading, and a malformed
//! value which is a fatal error for the whole file.

use crate::constants::{DATE_FORMAT, TIME_FORMAT};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a reading suffixed with one of the BODC quality flags (`T`, `N`,
/// `M`). The flag is a literal trailing character, not part of the number.
static FLAGGED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[TNM]$").expect("flag suffix regex is valid"));

/// Parse a height or residual field into an explicit optional value
///
/// A flagged reading yields `Ok(None)` (recognized missing). A plain number
/// yields `Ok(Some(value))`. Anything else is a malformed-value error with
/// file and line context.
pub fn parse_measurement(
    raw: &str,
    file: &str,
    line: usize,
    field: &str,
) -> Result<Option<f64>> {
    if FLAGGED_VALUE.is_match(raw) {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| Error::malformed_value(file, line, field, raw))
}

/// Parse the `Date` column (`YYYY/MM/DD`)
pub fn parse_date(raw: &str, file: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
        Error::datetime_parsing(file, line, format!("invalid date '{}'", raw), source)
    })
}

/// Parse the `Time` column (`HH:MM:SS`)
pub fn parse_time(raw: &str, file: &str, line: usize) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|source| {
        Error::datetime_parsing(file, line, format!("invalid time '{}'", raw), source)
    })
}
