//! Individual data row parsing for gauge files
//!
//! Each data row carries five whitespace-delimited fields in fixed order:
//! cycle index, date, time, sea level, residual. The cycle index is
//! discarded; date and time combine into the observation timestamp.

use crate::app::models::Observation;
use crate::constants::DATA_ROW_FIELD_COUNT;
use crate::{Error, Result};

use super::field_parsers::{parse_date, parse_measurement, parse_time};

/// Parse a single observation row
///
/// `line` is the 1-based line number within the file, used for error context.
pub fn parse_data_row(row: &str, file: &str, line: usize) -> Result<Observation> {
    let fields: Vec<&str> = row.split_whitespace().collect();

    if fields.len() != DATA_ROW_FIELD_COUNT {
        return Err(Error::gauge_format(
            file,
            format!(
                "line {}: expected {} fields (cycle, Date, Time, Sea Level, Residual), found {}",
                line,
                DATA_ROW_FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    // fields[0] is the cycle index, discarded
    let date = parse_date(fields[1], file, line)?;
    let time = parse_time(fields[2], file, line)?;
    let sea_level = parse_measurement(fields[3], file, line, "sea level")?;
    let residual = parse_measurement(fields[4], file, line, "residual")?;

    Ok(Observation::new(date, time, sea_level, residual))
}
