//! Core parsing orchestration for gauge files
//!
//! Reads one fixed-width gauge file end to end: station header, column row,
//! units row, then data rows. Parsing is all-or-nothing per file: a
//! malformed date, time or measurement aborts the parse with a fatal error
//! rather than silently skipping the row.

use crate::constants::HEADER_LINE_COUNT;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::header::read_header;
use super::record_parser::parse_data_row;
use super::stats::{ParseResult, ParseStats};

/// Parse a gauge file from disk
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    let file_label = path.display().to_string();
    let file = File::open(path)
        .map_err(|source| Error::io(format!("failed to open gauge file '{}'", file_label), source))?;

    parse_reader(BufReader::new(file), &file_label)
}

/// Parse a gauge file from any buffered reader
///
/// `file_label` is used in error messages and logging; pass the path for
/// disk files or a descriptive name in tests.
pub fn parse_reader<R: BufRead>(reader: R, file_label: &str) -> Result<ParseResult> {
    let mut lines = reader.lines();

    let header = read_header(&mut lines, file_label)?;
    debug!(
        file = file_label,
        station = header.station.as_deref().unwrap_or("unknown"),
        columns = header.columns.len(),
        "parsed gauge file header"
    );

    let mut result = ParseResult {
        table: Default::default(),
        station: header.station,
        stats: ParseStats::default(),
    };

    // Data starts after the metadata block, column row and units row
    let first_data_line = HEADER_LINE_COUNT + 3;

    for (offset, line) in lines.enumerate() {
        let line_number = first_data_line + offset;
        let row = line.map_err(|source| {
            Error::io(
                format!("failed reading line {} of '{}'", line_number, file_label),
                source,
            )
        })?;

        // Trailing blank lines are tolerated
        if row.trim().is_empty() {
            continue;
        }

        let observation = parse_data_row(&row, file_label, line_number)?;
        result.stats.record(
            observation.sea_level.is_none(),
            observation.residual.is_none(),
        );
        result.table.push(observation);
    }

    result.table.sort_by_timestamp();

    debug!(
        file = file_label,
        rows = result.stats.rows_read,
        missing_sea_levels = result.stats.missing_sea_levels,
        missing_residuals = result.stats.missing_residuals,
        "parsed gauge file"
    );

    Ok(result)
}
