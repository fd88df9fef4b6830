//! Command-line argument definitions for the tidal processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_MAX_GAP_HOURS, constituent_speeds};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the tide-gauge analysis tool
///
/// Calculates tidal constituents and relative sea-level rise from a
/// directory of tide-gauge data files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tidal-processor",
    version,
    about = "Calculate tidal constituents and sea-level rise from tide-gauge data",
    long_about = "Parses every fixed-width gauge file in a directory, merges them into one \
                  quality-screened record, and reports the longest contiguous run of valid \
                  hourly observations, the linear sea-level-rise rate with its significance, \
                  and fitted amplitudes for the requested tidal constituents."
)]
pub struct Args {
    /// Directory containing txt files with gauge data
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Print progress (repeat for more detail: -v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and non-error logging
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Tidal constituents to fit (comma-separated list)
    ///
    /// Defaults to M2,S2. Available constituents: M2, S2, N2, K2, K1, O1,
    /// P1, Q1.
    #[arg(
        short = 'c',
        long = "constituents",
        value_name = "LIST",
        help = "Comma-separated list of tidal constituents to fit"
    )]
    pub constituents: Option<ConstituentList>,

    /// Maximum inter-sample gap, in hours, inside a contiguous window
    #[arg(
        long = "gap-hours",
        value_name = "HOURS",
        help = "Contiguity threshold in hours (default 1)"
    )]
    pub gap_hours: Option<f64>,

    /// Reference epoch for harmonic phases (YYYY-MM-DD HH:MM:SS)
    ///
    /// Defaults to the first observation in the merged record.
    #[arg(
        long = "epoch",
        value_name = "DATETIME",
        value_parser = parse_epoch,
        help = "Reference epoch for harmonic phases"
    )]
    pub epoch: Option<DateTime<Utc>>,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Contiguity threshold, falling back to the default
    pub fn max_gap_hours(&self) -> f64 {
        self.gap_hours.unwrap_or(DEFAULT_MAX_GAP_HOURS)
    }
}

/// Wrapper for parsing comma-separated constituent lists
#[derive(Debug, Clone)]
pub struct ConstituentList {
    pub constituents: Vec<String>,
}

impl FromStr for ConstituentList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let constituents: Vec<String> = s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if constituents.is_empty() {
            return Err(Error::configuration(
                "Constituent list cannot be empty".to_string(),
            ));
        }

        // Validate each constituent name against the catalogue
        for name in &constituents {
            if !constituent_speeds::NAMES.contains(&name.as_str()) {
                return Err(Error::configuration(format!(
                    "Unknown constituent '{}'. Available constituents: {}",
                    name,
                    constituent_speeds::NAMES.join(", ")
                )));
            }
        }

        Ok(ConstituentList { constituents })
    }
}

/// Parse the reference epoch argument
fn parse_epoch(s: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .map_err(|source| {
            Error::datetime_parsing(
                "<epoch argument>",
                0,
                format!("invalid epoch '{}' (expected 'YYYY-MM-DD HH:MM:SS')", s),
                source,
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_constituent_list_parsing() {
        let list = ConstituentList::from_str("M2,S2").unwrap();
        assert_eq!(list.constituents, vec!["M2", "S2"]);

        let list = ConstituentList::from_str(" M2 , K1 ").unwrap();
        assert_eq!(list.constituents, vec!["M2", "K1"]);
    }

    #[test]
    fn test_constituent_list_rejects_unknown() {
        assert!(ConstituentList::from_str("M2,XX").is_err());
        assert!(ConstituentList::from_str("").is_err());
        assert!(ConstituentList::from_str(",,").is_err());
    }

    #[test]
    fn test_epoch_parsing() {
        let epoch = parse_epoch("1947-01-01 00:00:00").unwrap();
        assert_eq!(epoch, Utc.with_ymd_and_hms(1947, 1, 1, 0, 0, 0).unwrap());

        assert!(parse_epoch("01/01/1947").is_err());
    }

    #[test]
    fn test_log_level_from_flags() {
        let mut args = Args::parse_from(["tidal-processor", "data"]);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_progress());

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_argument_parsing() {
        let args = Args::parse_from([
            "tidal-processor",
            "data/aberdeen",
            "-v",
            "--constituents",
            "M2,S2,K1",
            "--gap-hours",
            "2",
        ]);

        assert_eq!(args.directory, PathBuf::from("data/aberdeen"));
        assert_eq!(args.verbose, 1);
        assert_eq!(
            args.constituents.clone().unwrap().constituents,
            vec!["M2", "S2", "K1"]
        );
        assert_eq!(args.max_gap_hours(), 2.0);
    }

    #[test]
    fn test_default_gap_hours() {
        let args = Args::parse_from(["tidal-processor", "data"]);
        assert_eq!(args.max_gap_hours(), 1.0);
        assert!(args.constituents.is_none());
    }
}
