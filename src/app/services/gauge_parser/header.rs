//! Station header handling for gauge files
//!
//! Every gauge file opens with a fixed 9-line station metadata block,
//! followed by a column-name row and a units row. The metadata block is
//! discarded apart from the station name, which is kept for logging; the
//! column row is checked for the expected layout; the units row is skipped.

use crate::constants::HEADER_LINE_COUNT;
use crate::{Error, Result};
use std::io::BufRead;

/// Parsed gauge file header
#[derive(Debug, Clone)]
pub struct GaugeHeader {
    /// Station (site) name, when the metadata block carries one
    pub station: Option<String>,

    /// Column names from the column-name row, in file order
    pub columns: Vec<String>,
}

/// Read and validate the header block from a gauge file
///
/// Consumes `HEADER_LINE_COUNT` metadata lines, the column-name row and the
/// units row, leaving the reader positioned at the first data row. A file
/// that ends inside the header is a fatal format error.
pub fn read_header<R: BufRead>(lines: &mut std::io::Lines<R>, file: &str) -> Result<GaugeHeader> {
    let mut station = None;

    for index in 0..HEADER_LINE_COUNT {
        let line = next_header_line(lines, file, index + 1)?;

        // Metadata lines look like "Site:   Aberdeen"; only the site name
        // is worth keeping.
        if let Some(value) = line.strip_prefix("Site:") {
            let value = value.trim();
            if !value.is_empty() {
                station = Some(value.to_string());
            }
        }
    }

    let column_line = next_header_line(lines, file, HEADER_LINE_COUNT + 1)?;
    let columns: Vec<String> = column_line
        .split_whitespace()
        .map(|name| name.to_string())
        .collect();

    if !columns.iter().any(|name| name == "Date") || !columns.iter().any(|name| name == "Time") {
        return Err(Error::gauge_format(
            file,
            format!(
                "column row must include 'Date' and 'Time' columns, found: '{}'",
                column_line.trim()
            ),
        ));
    }

    // Units row carries no data
    next_header_line(lines, file, HEADER_LINE_COUNT + 2)?;

    Ok(GaugeHeader { station, columns })
}

/// Pull the next header line, treating early EOF as a format error
fn next_header_line<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    file: &str,
    line_number: usize,
) -> Result<String> {
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(source)) => Err(Error::io(
            format!("failed reading header line {} of '{}'", line_number, file),
            source,
        )),
        None => Err(Error::gauge_format(
            file,
            format!(
                "file ended at line {} before the {}-line header, column row and units row",
                line_number,
                HEADER_LINE_COUNT
            ),
        )),
    }
}
