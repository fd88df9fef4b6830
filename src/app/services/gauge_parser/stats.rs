//! Parsing statistics and result structures

use crate::app::models::ObservationTable;

/// Statistics gathered while parsing one gauge file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    /// Data rows read from the file
    pub rows_read: usize,

    /// Rows whose sea level carried a quality flag
    pub missing_sea_levels: usize,

    /// Rows whose residual carried a quality flag
    pub missing_residuals: usize,
}

impl ParseStats {
    /// Record one parsed observation
    pub fn record(&mut self, sea_level_missing: bool, residual_missing: bool) {
        self.rows_read += 1;
        if sea_level_missing {
            self.missing_sea_levels += 1;
        }
        if residual_missing {
            self.missing_residuals += 1;
        }
    }
}

/// Result of parsing one gauge file
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Cleaned, time-ordered observations
    pub table: ObservationTable,

    /// Station name from the file header, if present
    pub station: Option<String>,

    /// Parsing statistics
    pub stats: ParseStats,
}
