//! Tidal constituent amplitude/phase estimation
//!
//! The adapter drops missing sea levels and converts timestamps to elapsed
//! seconds since the reference epoch (negative for observations preceding
//! it), then hands the arrays to the least-squares solve. The solve fits a
//! mean term plus a cosine/sine pair per constituent at its catalogued
//! angular frequency, via SVD for numerical robustness.

use crate::app::models::{ConstituentFit, HarmonicResult, ObservationTable};
use crate::constants::constituent_angular_frequency;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Fit amplitude and phase for the named constituents
///
/// `reference_time` is the epoch against which phases are reported; the
/// fitted model per constituent is `A * cos(omega * t - phi)` with `t` in
/// seconds since the epoch.
pub fn tidal_harmonics(
    table: &ObservationTable,
    constituent_names: &[String],
    reference_time: DateTime<Utc>,
) -> Result<HarmonicResult> {
    let omegas = constituent_names
        .iter()
        .map(|name| {
            constituent_angular_frequency(name)
                .ok_or_else(|| Error::unknown_constituent(name.clone()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let mut elapsed_seconds = Vec::new();
    let mut heights = Vec::new();
    for (timestamp, height) in table.valid_sea_levels() {
        elapsed_seconds.push((timestamp - reference_time).num_seconds() as f64);
        heights.push(height);
    }

    let coefficient_pairs = harmonic_fit(&omegas, &elapsed_seconds, &heights)?;

    debug!(
        samples = heights.len(),
        constituents = constituent_names.len(),
        "fitted tidal harmonics"
    );

    let fits = constituent_names
        .iter()
        .zip(coefficient_pairs)
        .map(|(name, (amplitude, phase))| ConstituentFit {
            name: name.clone(),
            amplitude,
            phase,
        })
        .collect();

    Ok(HarmonicResult::from_fits(fits))
}

/// Least-squares harmonic solve
///
/// Input arrays carry no missing values. Returns one (amplitude, phase)
/// pair per angular frequency, aligned to the input order. The design
/// matrix is a constant column plus `cos(omega * t)` and `sin(omega * t)`
/// columns per frequency; amplitude and phase come from the fitted pair as
/// `A = hypot(a, b)`, `phi = atan2(b, a)`.
pub fn harmonic_fit(
    omegas: &[f64],
    elapsed_seconds: &[f64],
    heights: &[f64],
) -> Result<Vec<(f64, f64)>> {
    if elapsed_seconds.len() != heights.len() {
        return Err(Error::numeric_solve(format!(
            "paired samples required, got {} times and {} heights",
            elapsed_seconds.len(),
            heights.len()
        )));
    }

    let unknowns = 1 + 2 * omegas.len();
    if heights.len() < unknowns {
        return Err(Error::insufficient_data(unknowns, heights.len()));
    }

    let design = DMatrix::from_fn(heights.len(), unknowns, |row, column| {
        if column == 0 {
            1.0
        } else {
            let omega = omegas[(column - 1) / 2];
            let angle = omega * elapsed_seconds[row];
            if column % 2 == 1 { angle.cos() } else { angle.sin() }
        }
    });
    let observed = DVector::from_column_slice(heights);

    let coefficients = design
        .svd(true, true)
        .solve(&observed, 1.0e-12)
        .map_err(Error::numeric_solve)?;

    let pairs = (0..omegas.len())
        .map(|index| {
            let cos_coefficient = coefficients[1 + 2 * index];
            let sin_coefficient = coefficients[2 + 2 * index];
            let amplitude = cos_coefficient.hypot(sin_coefficient);
            let phase = sin_coefficient.atan2(cos_coefficient);
            (amplitude, phase)
        })
        .collect();

    Ok(pairs)
}
