//! Fixed-width parser for tide-gauge observation files
//!
//! This module provides a streamlined parser for BODC-style gauge files
//! focused on robust extraction of sea level and residual readings with
//! explicit missing-value handling.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`header`] - Station header and column-row handling
//! - [`record_parser`] - Individual data row processing
//! - [`field_parsers`] - Utility functions for field parsing and validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tidal_processor::app::services::gauge_parser;
//!
//! # fn example() -> tidal_processor::Result<()> {
//! let result = gauge_parser::parse_file(std::path::Path::new("1946ABE.txt"))?;
//!
//! println!(
//!     "Parsed {} observations ({} missing sea levels)",
//!     result.table.len(),
//!     result.stats.missing_sea_levels
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::GaugeHeader;
pub use parser::{parse_file, parse_reader};
pub use stats::{ParseResult, ParseStats};
