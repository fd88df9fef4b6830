//! Data models for tide-gauge processing
//!
//! This module contains the core data structures for representing cleaned
//! tide-gauge observations and the derived products of the analysis pipeline.

use crate::constants::{DAYS_PER_YEAR, SECONDS_PER_HOUR};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

// =============================================================================
// Observation Structure
// =============================================================================

/// A single cleaned tide-gauge observation
///
/// Missing readings are represented as `None`, never as a numeric sentinel,
/// so that downstream means and regressions cannot be silently corrupted.
/// Sea level and residual carry independent missingness: a quality flag on
/// one field does not affect the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Absolute observation time; the table's ordering and unique key
    pub timestamp: DateTime<Utc>,

    /// Original `Date` column, retained for downstream consumers
    pub date: NaiveDate,

    /// Original `Time` column, retained for downstream consumers
    pub time: NaiveTime,

    /// Observed sea level height, or missing
    pub sea_level: Option<f64>,

    /// Meteorological residual, or missing
    pub residual: Option<f64>,
}

impl Observation {
    /// Create an observation from the parsed date and time columns
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        sea_level: Option<f64>,
        residual: Option<f64>,
    ) -> Self {
        let timestamp = DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(time), Utc);
        Self {
            timestamp,
            date,
            time,
            sea_level,
            residual,
        }
    }

    /// Check whether the sea level reading is usable
    pub fn has_sea_level(&self) -> bool {
        self.sea_level.is_some()
    }
}

// =============================================================================
// Observation Table
// =============================================================================

/// An ordered sequence of observations, ascending by timestamp
///
/// The timestamp is the logical unique key once the pipeline-level
/// deduplication has run. Components never mutate a caller's table: the
/// merger and window extractor build working copies before any edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    observations: Vec<Observation>,
}

impl ObservationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from pre-built observations (order is preserved)
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Append an observation
    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Number of observations in the table
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterate over observations in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Access the underlying observations as a slice
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// First observation, if any
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Last observation, if any
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Sort observations ascending by timestamp
    ///
    /// The sort is stable, so rows sharing a timestamp keep their relative
    /// insertion order. First-occurrence-wins deduplication depends on this.
    pub fn sort_by_timestamp(&mut self) {
        self.observations.sort_by_key(|obs| obs.timestamp);
    }

    /// Remove duplicate timestamps, keeping the first occurrence
    ///
    /// Requires the table sorted ascending by timestamp. Returns the number
    /// of duplicate rows removed.
    pub fn dedup_by_timestamp(&mut self) -> usize {
        let before = self.observations.len();
        self.observations
            .dedup_by(|current, retained| current.timestamp == retained.timestamp);
        before - self.observations.len()
    }

    /// Timestamp/height pairs for every observation with a valid sea level
    pub fn valid_sea_levels(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.observations
            .iter()
            .filter_map(|obs| obs.sea_level.map(|height| (obs.timestamp, height)))
    }

    /// Count of observations with a valid sea level
    pub fn valid_sea_level_count(&self) -> usize {
        self.observations
            .iter()
            .filter(|obs| obs.has_sea_level())
            .count()
    }

    /// Arithmetic mean of the valid sea levels, or `None` if there are none
    pub fn mean_sea_level(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for obs in &self.observations {
            if let Some(height) = obs.sea_level {
                sum += height;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Subtract the table's own mean sea level from every valid reading
    ///
    /// Missing readings stay missing. A table with no valid readings is left
    /// unchanged.
    pub fn recenter_sea_level(&mut self) {
        if let Some(mean) = self.mean_sea_level() {
            for obs in &mut self.observations {
                if let Some(height) = obs.sea_level.as_mut() {
                    *height -= mean;
                }
            }
        }
    }
}

impl IntoIterator for ObservationTable {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

// =============================================================================
// Derived Products
// =============================================================================

/// A maximal run of valid, evenly-spaced observations
///
/// Computed transiently by the segmenter; the empty result is represented as
/// `Option::<Segment>::None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Timestamp of the first observation in the run
    pub start: DateTime<Utc>,

    /// Timestamp of the last observation in the run
    pub end: DateTime<Utc>,

    /// Number of observations in the run
    pub count: usize,
}

impl Segment {
    /// Span of the segment in hours
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / SECONDS_PER_HOUR
    }
}

/// Linear sea-level trend estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    /// Slope in height units per day
    pub slope: f64,

    /// Two-sided p-value of the slope
    pub p_value: f64,
}

impl TrendResult {
    /// Slope converted to millimetres per year, assuming heights in metres
    pub fn slope_mm_per_year(&self) -> f64 {
        self.slope * DAYS_PER_YEAR * 1_000.0
    }
}

/// Amplitude and phase fitted for one tidal constituent
#[derive(Debug, Clone, PartialEq)]
pub struct ConstituentFit {
    /// Constituent name (e.g. "M2")
    pub name: String,

    /// Fitted amplitude in height units
    pub amplitude: f64,

    /// Fitted phase in radians, relative to the reference epoch
    pub phase: f64,
}

/// Fitted constituents, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarmonicResult {
    fits: Vec<ConstituentFit>,
}

impl HarmonicResult {
    /// Build a result from fits in request order
    pub fn from_fits(fits: Vec<ConstituentFit>) -> Self {
        Self { fits }
    }

    /// Iterate over fits in request order
    pub fn iter(&self) -> std::slice::Iter<'_, ConstituentFit> {
        self.fits.iter()
    }

    /// Look up a fit by constituent name
    pub fn get(&self, name: &str) -> Option<&ConstituentFit> {
        self.fits.iter().find(|fit| fit.name == name)
    }

    /// Number of fitted constituents
    pub fn len(&self) -> usize {
        self.fits.len()
    }

    /// Check whether any constituents were fitted
    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: (i32, u32, u32), time: (u32, u32, u32), sea_level: Option<f64>) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap(),
            sea_level,
            None,
        )
    }

    mod observation_tests {
        use super::*;

        #[test]
        fn test_timestamp_combines_date_and_time() {
            let observation = obs((1946, 1, 1), (15, 0, 0), Some(3.6));
            assert_eq!(
                observation.timestamp.to_rfc3339(),
                "1946-01-01T15:00:00+00:00"
            );
            assert_eq!(observation.date.to_string(), "1946-01-01");
            assert_eq!(observation.time.to_string(), "15:00:00");
        }

        #[test]
        fn test_independent_missingness() {
            let observation = Observation::new(
                NaiveDate::from_ymd_opt(1946, 1, 1).unwrap(),
                NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                None,
                Some(0.12),
            );
            assert!(!observation.has_sea_level());
            assert_eq!(observation.residual, Some(0.12));
        }
    }

    mod table_tests {
        use super::*;

        #[test]
        fn test_mean_ignores_missing() {
            let table = ObservationTable::from_observations(vec![
                obs((2000, 1, 1), (0, 0, 0), Some(1.0)),
                obs((2000, 1, 1), (1, 0, 0), None),
                obs((2000, 1, 1), (2, 0, 0), Some(3.0)),
            ]);
            assert_eq!(table.mean_sea_level(), Some(2.0));
            assert_eq!(table.valid_sea_level_count(), 2);
        }

        #[test]
        fn test_mean_of_all_missing_is_none() {
            let table = ObservationTable::from_observations(vec![
                obs((2000, 1, 1), (0, 0, 0), None),
                obs((2000, 1, 1), (1, 0, 0), None),
            ]);
            assert_eq!(table.mean_sea_level(), None);
        }

        #[test]
        fn test_recenter_leaves_missing_untouched() {
            let mut table = ObservationTable::from_observations(vec![
                obs((2000, 1, 1), (0, 0, 0), Some(1.0)),
                obs((2000, 1, 1), (1, 0, 0), None),
                obs((2000, 1, 1), (2, 0, 0), Some(3.0)),
            ]);
            table.recenter_sea_level();
            assert_eq!(table.observations()[0].sea_level, Some(-1.0));
            assert_eq!(table.observations()[1].sea_level, None);
            assert_eq!(table.observations()[2].sea_level, Some(1.0));
            assert!(table.mean_sea_level().unwrap().abs() < 1e-12);
        }

        #[test]
        fn test_dedup_keeps_first_occurrence() {
            let mut first = obs((2000, 1, 1), (0, 0, 0), Some(1.0));
            first.residual = Some(0.1);
            let mut second = obs((2000, 1, 1), (0, 0, 0), Some(2.0));
            second.residual = Some(0.2);

            let mut table = ObservationTable::from_observations(vec![
                first.clone(),
                second,
                obs((2000, 1, 1), (1, 0, 0), Some(3.0)),
            ]);
            table.sort_by_timestamp();
            let removed = table.dedup_by_timestamp();

            assert_eq!(removed, 1);
            assert_eq!(table.len(), 2);
            assert_eq!(table.observations()[0], first);
        }

        #[test]
        fn test_sort_is_stable_for_equal_timestamps() {
            let mut early = obs((2000, 1, 1), (0, 0, 0), Some(1.0));
            early.residual = Some(0.1);
            let mut late = obs((2000, 1, 1), (0, 0, 0), Some(2.0));
            late.residual = Some(0.2);

            let mut table = ObservationTable::from_observations(vec![
                obs((2000, 1, 2), (0, 0, 0), Some(9.0)),
                early.clone(),
                late.clone(),
            ]);
            table.sort_by_timestamp();

            assert_eq!(table.observations()[0], early);
            assert_eq!(table.observations()[1], late);
        }
    }

    mod derived_tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_segment_duration() {
            let segment = Segment {
                start: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2000, 1, 1, 6, 0, 0).unwrap(),
                count: 7,
            };
            assert_eq!(segment.duration_hours(), 6.0);
        }

        #[test]
        fn test_trend_unit_conversion() {
            let trend = TrendResult {
                slope: 1.0e-6,
                p_value: 0.01,
            };
            assert!((trend.slope_mm_per_year() - 0.36525).abs() < 1e-9);
        }

        #[test]
        fn test_harmonic_result_lookup_preserves_order() {
            let result = HarmonicResult::from_fits(vec![
                ConstituentFit {
                    name: "M2".to_string(),
                    amplitude: 1.3,
                    phase: 0.5,
                },
                ConstituentFit {
                    name: "S2".to_string(),
                    amplitude: 0.4,
                    phase: -0.2,
                },
            ]);
            assert_eq!(result.len(), 2);
            assert_eq!(result.get("S2").unwrap().amplitude, 0.4);
            assert!(result.get("K1").is_none());
            let names: Vec<&str> = result.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["M2", "S2"]);
        }
    }
}
