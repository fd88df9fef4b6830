//! Vertical merging of observation tables
//!
//! Concatenates tables from multiple gauge files and restores chronological
//! order. Merging never deduplicates: duplicate timestamps are resolved once
//! by the top-level pipeline after every file has been merged, so that
//! "first occurrence wins" is defined relative to the file iteration order
//! rather than any pairwise merge order.

use crate::app::models::ObservationTable;
use tracing::debug;

/// Merge two tables into a new chronologically ordered table
///
/// The inputs are read by reference and never mutated. The sort is stable:
/// rows sharing a timestamp keep the order in which they were concatenated,
/// with all of `a`'s rows ahead of `b`'s.
pub fn merge(a: &ObservationTable, b: &ObservationTable) -> ObservationTable {
    let mut combined = Vec::with_capacity(a.len() + b.len());
    combined.extend(a.iter().cloned());
    combined.extend(b.iter().cloned());

    let mut table = ObservationTable::from_observations(combined);
    table.sort_by_timestamp();

    debug!(
        left = a.len(),
        right = b.len(),
        merged = table.len(),
        "merged observation tables"
    );

    table
}
