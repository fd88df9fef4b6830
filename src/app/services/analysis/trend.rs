//! Linear sea-level trend estimation
//!
//! Thin adapter over the least-squares primitive: drops missing sea levels,
//! converts timestamps to fractional days since the first valid observation,
//! and regresses height against that axis. The primitive's own
//! insufficient-data error propagates unchanged when fewer than 2 valid
//! points remain.

use crate::app::models::{ObservationTable, TrendResult};
use crate::constants::SECONDS_PER_DAY;
use crate::Result;
use tracing::debug;

use super::stats::linear_regression;

/// Estimate the linear sea-level trend over the table's valid observations
///
/// The slope is in height units per day; divide out further for other time
/// units. The time axis is relative to the first valid observation, so the
/// slope (unlike the intercept) is invariant to the epoch choice.
pub fn sea_level_trend(table: &ObservationTable) -> Result<TrendResult> {
    let mut times = Vec::new();
    let mut heights = Vec::new();

    let mut origin = None;
    for (timestamp, height) in table.valid_sea_levels() {
        let origin = *origin.get_or_insert(timestamp);
        times.push((timestamp - origin).num_seconds() as f64 / SECONDS_PER_DAY);
        heights.push(height);
    }

    let fit = linear_regression(&times, &heights)?;
    debug!(
        samples = times.len(),
        slope = fit.slope,
        p_value = fit.p_value,
        "fitted sea-level trend"
    );

    Ok(TrendResult {
        slope: fit.slope,
        p_value: fit.p_value,
    })
}
