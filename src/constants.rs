//! Application constants for the tidal processor
//!
//! This module contains the file-format constants, quality-flag definitions,
//! contiguity thresholds, and the tidal constituent catalogue used throughout
//! the application.

// =============================================================================
// Gauge File Format
// =============================================================================

/// Number of station metadata lines at the top of every gauge file
pub const HEADER_LINE_COUNT: usize = 9;

/// Glob pattern for observation data files within an input directory
pub const GAUGE_FILE_PATTERN: &str = "*.txt";

/// Fields expected on every data row: cycle, Date, Time, Sea Level, Residual
pub const DATA_ROW_FIELD_COUNT: usize = 5;

/// Date column format (e.g. `1946/01/01`)
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Time column format (e.g. `15:00:00`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Quality Control Constants
// =============================================================================

/// Trailing quality-flag characters marking a reading as unusable
///
/// The BODC convention suffixes a flagged reading with a single letter:
/// `T` (interpolated), `N` (null) or `M` (missing). A flagged reading is
/// treated as missing for that field only; the sister field on the same row
/// is unaffected.
pub mod quality_flags {
    /// Value derived by interpolation
    pub const INTERPOLATED: char = 'T';

    /// Null measurement
    pub const NULL: char = 'N';

    /// Missing measurement
    pub const MISSING: char = 'M';

    /// All recognized flag suffixes
    pub const SUFFIXES: &[char] = &[INTERPOLATED, NULL, MISSING];
}

// =============================================================================
// Contiguity Constants
// =============================================================================

/// Maximum inter-sample gap, in hours, inside a contiguous segment
pub const DEFAULT_MAX_GAP_HOURS: f64 = 1.0;

/// Seconds per hour, for gap arithmetic
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Seconds per day, for the regression time axis
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian year, for reporting slopes in per-year units
pub const DAYS_PER_YEAR: f64 = 365.25;

// =============================================================================
// Tidal Constituent Catalogue
// =============================================================================

/// Constituents fitted when none are requested explicitly
pub const DEFAULT_CONSTITUENTS: &[&str] = &["M2", "S2"];

/// Angular speeds of the supported tidal constituents
///
/// Speeds are the standard Doodson values in degrees per mean solar hour.
pub mod constituent_speeds {
    /// Principal lunar semi-diurnal
    pub const M2: f64 = 28.984_104_2;

    /// Principal solar semi-diurnal
    pub const S2: f64 = 30.0;

    /// Larger lunar elliptic semi-diurnal
    pub const N2: f64 = 28.439_729_5;

    /// Lunisolar semi-diurnal
    pub const K2: f64 = 30.082_137_3;

    /// Lunisolar diurnal
    pub const K1: f64 = 15.041_068_6;

    /// Principal lunar diurnal
    pub const O1: f64 = 13.943_035_6;

    /// Principal solar diurnal
    pub const P1: f64 = 14.958_931_4;

    /// Larger lunar elliptic diurnal
    pub const Q1: f64 = 13.398_660_9;

    /// Names of every supported constituent
    pub const NAMES: &[&str] = &["M2", "S2", "N2", "K2", "K1", "O1", "P1", "Q1"];
}

/// Look up a constituent's angular speed in degrees per hour
pub fn constituent_speed_deg_per_hour(name: &str) -> Option<f64> {
    use constituent_speeds::*;
    match name {
        "M2" => Some(M2),
        "S2" => Some(S2),
        "N2" => Some(N2),
        "K2" => Some(K2),
        "K1" => Some(K1),
        "O1" => Some(O1),
        "P1" => Some(P1),
        "Q1" => Some(Q1),
        _ => None,
    }
}

/// Look up a constituent's angular frequency in radians per second
pub fn constituent_angular_frequency(name: &str) -> Option<f64> {
    constituent_speed_deg_per_hour(name)
        .map(|speed| speed.to_radians() / SECONDS_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_constituents_resolve() {
        for name in constituent_speeds::NAMES {
            assert!(constituent_speed_deg_per_hour(name).is_some());
            assert!(constituent_angular_frequency(name).is_some());
        }
    }

    #[test]
    fn test_unknown_constituent_is_none() {
        assert!(constituent_speed_deg_per_hour("Z9").is_none());
        assert!(constituent_angular_frequency("m2").is_none());
    }

    #[test]
    fn test_m2_period_is_about_12_hours_25_minutes() {
        let omega = constituent_angular_frequency("M2").unwrap();
        let period_hours = (2.0 * std::f64::consts::PI / omega) / SECONDS_PER_HOUR;
        assert!((period_hours - 12.4206).abs() < 1e-3);
    }

    #[test]
    fn test_s2_period_is_exactly_12_hours() {
        let omega = constituent_angular_frequency("S2").unwrap();
        let period_hours = (2.0 * std::f64::consts::PI / omega) / SECONDS_PER_HOUR;
        assert!((period_hours - 12.0).abs() < 1e-9);
    }
}
