//! Configuration management and validation.
//!
//! Provides the configuration structure for processing parameters with
//! sensible defaults. The CLI layer applies argument overrides on top of the
//! defaults before validation.

use crate::constants::{
    DEFAULT_CONSTITUENTS, DEFAULT_MAX_GAP_HOURS, GAUGE_FILE_PATTERN,
    constituent_speed_deg_per_hour,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data processing settings
    pub processing: ProcessingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Data processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Directory containing the gauge files to ingest
    pub input_dir: PathBuf,

    /// Glob pattern selecting observation files within the input directory
    pub file_pattern: String,

    /// Maximum inter-sample gap, in hours, tolerated inside a contiguous
    /// segment
    pub max_gap_hours: f64,

    /// Tidal constituents to fit
    pub constituents: Vec<String>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter level ("error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                input_dir: PathBuf::new(),
                file_pattern: GAUGE_FILE_PATTERN.to_string(),
                max_gap_hours: DEFAULT_MAX_GAP_HOURS,
                constituents: DEFAULT_CONSTITUENTS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.processing.file_pattern.trim().is_empty() {
            return Err(Error::configuration(
                "File pattern cannot be empty".to_string(),
            ));
        }

        if self.processing.max_gap_hours <= 0.0 || !self.processing.max_gap_hours.is_finite() {
            return Err(Error::configuration(format!(
                "Maximum gap must be a positive number of hours, got {}",
                self.processing.max_gap_hours
            )));
        }

        if self.processing.constituents.is_empty() {
            return Err(Error::configuration(
                "At least one tidal constituent must be requested".to_string(),
            ));
        }

        for name in &self.processing.constituents {
            if constituent_speed_deg_per_hour(name).is_none() {
                return Err(Error::unknown_constituent(name.clone()));
            }
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': must be one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
