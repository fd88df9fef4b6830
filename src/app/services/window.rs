//! Window extraction for year- and range-scoped sub-analyses
//!
//! Both entry points share one filter-then-recenter step: surviving rows are
//! copied into a new table and the sea level column is re-centred on the
//! filtered subset's own mean, never the original table's. `None` is the
//! defined "window absent" outcome; callers branch on it without any
//! exception-style control flow.

use crate::app::models::{Observation, ObservationTable};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Extract all observations from one calendar year, re-centred to zero mean
///
/// Returns `None` when no observation falls in the requested year.
pub fn extract_year(year: i32, table: &ObservationTable) -> Option<ObservationTable> {
    let extracted = filter_and_recenter(table, |obs| obs.date.year() == year);
    if extracted.is_none() {
        debug!(year, "requested year not present in table");
    }
    extracted
}

/// Extract all observations between two calendar dates, re-centred to zero
/// mean
///
/// Both boundary dates are inclusive, and the comparison is by calendar date
/// only: every observation on `end` is included regardless of its
/// time-of-day. Returns `None` when no observation falls inside the range.
pub fn extract_range(
    start: NaiveDate,
    end: NaiveDate,
    table: &ObservationTable,
) -> Option<ObservationTable> {
    let extracted = filter_and_recenter(table, |obs| obs.date >= start && obs.date <= end);
    if extracted.is_none() {
        debug!(%start, %end, "requested date range not present in table");
    }
    extracted
}

/// Shared filter-then-recenter step
///
/// Copies the rows matching `predicate` into a working table and subtracts
/// the copy's own mean sea level (missing values excluded from the mean,
/// left missing afterwards). The caller's table is never mutated.
fn filter_and_recenter<F>(table: &ObservationTable, predicate: F) -> Option<ObservationTable>
where
    F: Fn(&Observation) -> bool,
{
    let filtered: Vec<Observation> = table.iter().filter(|obs| predicate(obs)).cloned().collect();

    if filtered.is_empty() {
        return None;
    }

    let mut window = ObservationTable::from_observations(filtered);
    window.recenter_sea_level();
    Some(window)
}
