//! Tidal Processor Library
//!
//! A Rust library for cleaning UK tide-gauge observation records and deriving
//! sea-level statistics from them.
//!
//! This library provides tools for:
//! - Parsing fixed-width gauge files with proper header/units-row handling
//! - Converting quality-flagged readings into explicit missing values
//! - Merging multi-file records into one chronologically ordered table with
//!   first-occurrence-wins deduplication
//! - Locating the longest contiguous run of valid, evenly-spaced observations
//! - Estimating the linear sea-level-rise rate and its significance
//! - Fitting amplitude and phase for named tidal harmonic constituents
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod gauge_parser;
        pub mod merger;
        pub mod segmenter;
        pub mod window;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HarmonicResult, Observation, ObservationTable, Segment, TrendResult};
pub use config::Config;

/// Result type alias for the tidal processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for tide-gauge processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixed-width gauge file format error
    #[error("Gauge format error in file '{file}': {message}")]
    GaugeFormat { file: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error in file '{file}' line {line}: {message}")]
    DateTimeParsing {
        file: String,
        line: usize,
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Unexpected non-numeric, non-flagged field value
    #[error(
        "Malformed value in file '{file}' line {line}: {field} '{value}' is \
         neither numeric nor a recognized quality flag"
    )]
    MalformedValue {
        file: String,
        line: usize,
        field: String,
        value: String,
    },

    /// No input files matched the ingestion pattern
    #[error("No gauge files matching '{pattern}' found in directory: {path}")]
    NoInputFiles { pattern: String, path: String },

    /// Glob pattern construction error
    #[error("Glob pattern error: {message}")]
    GlobPattern {
        message: String,
        #[source]
        source: glob::PatternError,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: glob::GlobError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Requested tidal constituent is not in the known catalogue
    #[error("Unknown tidal constituent: '{name}'")]
    UnknownConstituent { name: String },

    /// Too few valid samples for a statistical operation
    #[error("Insufficient data: {required} valid samples required, {actual} available")]
    InsufficientData { required: usize, actual: usize },

    /// Numeric solve failed (degenerate or singular system)
    #[error("Numeric solve failed: {message}")]
    NumericSolve { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a gauge format error
    pub fn gauge_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GaugeFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error with file context
    pub fn datetime_parsing(
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::DateTimeParsing {
            file: file.into(),
            line,
            message: message.into(),
            source,
        }
    }

    /// Create a malformed value error
    pub fn malformed_value(
        file: impl Into<String>,
        line: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedValue {
            file: file.into(),
            line,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a no-input-files error
    pub fn no_input_files(pattern: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NoInputFiles {
            pattern: pattern.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown constituent error
    pub fn unknown_constituent(name: impl Into<String>) -> Self {
        Self::UnknownConstituent { name: name.into() }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Create a numeric solve error
    pub fn numeric_solve(message: impl Into<String>) -> Self {
        Self::NumericSolve {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::GlobPattern {
            message: "Invalid file matching pattern".to_string(),
            source: error,
        }
    }
}

impl From<glob::GlobError> for Error {
    fn from(error: glob::GlobError) -> Self {
        Self::DirectoryTraversal {
            message: "Failed to read directory entry".to_string(),
            source: error,
        }
    }
}
