//! Contiguity segmentation of cleaned observation tables
//!
//! Partitions a table into maximal runs of valid, evenly-spaced samples and
//! reports the longest. A row breaks contiguity when its sea level is
//! missing or when the gap from the immediately preceding row exceeds the
//! threshold; a break row belongs to no run, neither the one before it nor
//! the one after. The scan is a single linear pass over the sorted rows.

use crate::app::models::{ObservationTable, Segment};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Find the longest contiguous run of valid, evenly-spaced observations
///
/// Returns `None` for an empty table or a table where every row is a break.
/// Ties between equal-length runs resolve to the earliest run in timestamp
/// order. The input is re-sorted defensively; the caller's table is not
/// mutated.
pub fn longest_segment(table: &ObservationTable, max_gap: Duration) -> Option<Segment> {
    // Sorted view; stable, so deduplicated tables pass through unchanged
    let mut rows: Vec<(DateTime<Utc>, bool)> = table
        .iter()
        .map(|obs| (obs.timestamp, obs.sea_level.is_some()))
        .collect();
    rows.sort_by_key(|(timestamp, _)| *timestamp);

    let mut best: Option<Segment> = None;
    let mut current: Option<Segment> = None;
    let mut previous_timestamp: Option<DateTime<Utc>> = None;
    let mut run_count = 0usize;

    for (timestamp, valid) in rows {
        // The first row never gap-breaks: there is no preceding sample
        let gap_exceeded = previous_timestamp
            .is_some_and(|previous| timestamp - previous > max_gap);

        if !valid || gap_exceeded {
            // Break row: close the current run, start nothing
            take_if_longer(&mut best, current.take());
        } else {
            match current.as_mut() {
                Some(segment) => {
                    segment.end = timestamp;
                    segment.count += 1;
                }
                None => {
                    run_count += 1;
                    current = Some(Segment {
                        start: timestamp,
                        end: timestamp,
                        count: 1,
                    });
                }
            }
        }

        previous_timestamp = Some(timestamp);
    }
    take_if_longer(&mut best, current);

    debug!(
        runs = run_count,
        longest = best.map_or(0, |segment| segment.count),
        "segmented observation table"
    );

    best
}

/// Keep the candidate only when strictly longer, so the earliest run wins
/// ties
fn take_if_longer(best: &mut Option<Segment>, candidate: Option<Segment>) {
    if let Some(candidate) = candidate {
        let improves = best.is_none_or(|current| candidate.count > current.count);
        if improves {
            *best = Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Observation;
    use chrono::{NaiveDate, NaiveTime, TimeZone};

    fn one_hour() -> Duration {
        Duration::hours(1)
    }

    fn obs(day: u32, hour: u32, minute: u32, sea_level: Option<f64>) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(1947, 1, day).unwrap(),
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            sea_level,
            None,
        )
    }

    fn hourly_table(day: u32, hours: std::ops::Range<u32>) -> Vec<Observation> {
        hours.map(|h| obs(day, h, 0, Some(1.0))).collect()
    }

    #[test]
    fn test_empty_table() {
        let table = ObservationTable::new();
        assert_eq!(longest_segment(&table, one_hour()), None);
    }

    #[test]
    fn test_all_missing_table() {
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, None),
            obs(1, 1, 0, None),
            obs(1, 2, 0, None),
        ]);
        assert_eq!(longest_segment(&table, one_hour()), None);
    }

    #[test]
    fn test_unbroken_table_is_one_segment() {
        let table = ObservationTable::from_observations(hourly_table(1, 0..10));
        let segment = longest_segment(&table, one_hour()).unwrap();

        assert_eq!(segment.count, 10);
        assert_eq!(segment.start, Utc.with_ymd_and_hms(1947, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(segment.end, Utc.with_ymd_and_hms(1947, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_two_hour_gap_splits_and_larger_half_wins() {
        // 4 rows at hours 0..4, then a 2-hour jump, then 6 rows at 6..12.
        let mut rows = hourly_table(1, 0..4);
        rows.extend(hourly_table(1, 6..12));
        let table = ObservationTable::from_observations(rows);

        let segment = longest_segment(&table, one_hour()).unwrap();
        // The row at 06:00 is itself a break (gap from 03:00 exceeds the
        // threshold), so the trailing run starts at 07:00
        assert_eq!(segment.count, 5);
        assert_eq!(segment.start, Utc.with_ymd_and_hms(1947, 1, 1, 7, 0, 0).unwrap());
        assert_eq!(segment.end, Utc.with_ymd_and_hms(1947, 1, 1, 11, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_row_breaks_without_merging_neighbours() {
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, Some(1.0)),
            obs(1, 1, 0, Some(1.0)),
            obs(1, 2, 0, None),
            obs(1, 3, 0, Some(1.0)),
        ]);

        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 2);
        assert_eq!(segment.start, Utc.with_ymd_and_hms(1947, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_tie_resolves_to_earliest_segment() {
        // Two runs of 3, separated by a missing row
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, Some(1.0)),
            obs(1, 1, 0, Some(1.0)),
            obs(1, 2, 0, Some(1.0)),
            obs(1, 3, 0, None),
            obs(1, 4, 0, Some(1.0)),
            obs(1, 5, 0, Some(1.0)),
            obs(1, 6, 0, Some(1.0)),
        ]);

        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 3);
        assert_eq!(segment.start, Utc.with_ymd_and_hms(1947, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_single_valid_row_between_breaks_can_win() {
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, None),
            obs(1, 1, 0, Some(1.0)),
            obs(1, 2, 0, None),
        ]);

        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 1);
        assert_eq!(segment.start, segment.end);
    }

    #[test]
    fn test_exact_one_hour_gap_is_contiguous() {
        // Gap equal to the threshold does not break; only exceeding it does
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, Some(1.0)),
            obs(1, 1, 0, Some(1.0)),
        ]);
        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 2);
    }

    #[test]
    fn test_sixty_one_minute_gap_breaks() {
        let table = ObservationTable::from_observations(vec![
            obs(1, 0, 0, Some(1.0)),
            obs(1, 1, 1, Some(1.0)),
        ]);
        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 1);
        assert_eq!(segment.start, Utc.with_ymd_and_hms(1947, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_unsorted_input_is_sorted_defensively() {
        let mut rows = hourly_table(1, 0..5);
        rows.reverse();
        let table = ObservationTable::from_observations(rows);

        let segment = longest_segment(&table, one_hour()).unwrap();
        assert_eq!(segment.count, 5);
    }

    #[test]
    fn test_wider_threshold_bridges_gap() {
        let mut rows = hourly_table(1, 0..4);
        rows.extend(hourly_table(1, 6..12));
        let table = ObservationTable::from_observations(rows);

        let segment = longest_segment(&table, Duration::hours(2)).unwrap();
        assert_eq!(segment.count, 10);
    }
}
