//! Ordinary least-squares regression primitive
//!
//! Takes paired (x, y) samples with no missing values and returns slope,
//! intercept, correlation coefficient, two-sided p-value and standard error.
//! The p-value comes from a Student's t test on the slope with n - 2 degrees
//! of freedom.

use crate::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Full output of the least-squares fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    /// Slope of y against x
    pub slope: f64,

    /// Intercept at x = 0
    pub intercept: f64,

    /// Pearson correlation coefficient
    pub r_value: f64,

    /// Two-sided p-value for a slope-is-zero null hypothesis
    pub p_value: f64,

    /// Standard error of the slope estimate
    pub std_err: f64,
}

/// Fit y = intercept + slope * x by ordinary least squares
///
/// Fewer than 2 samples is an [`Error::InsufficientData`]; a degenerate x
/// axis (zero variance) is an [`Error::NumericSolve`]. An exact fit reports
/// a p-value of 0 and a standard error of 0.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression> {
    if x.len() != y.len() {
        return Err(Error::numeric_solve(format!(
            "paired samples required, got {} x values and {} y values",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(Error::insufficient_data(2, x.len()));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(Error::numeric_solve(
            "zero variance in the x axis, slope is undefined",
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_value = if syy == 0.0 {
        0.0
    } else {
        sxy / (sxx * syy).sqrt()
    };

    // Residual sum of squares; clamp tiny negative rounding artefacts
    let ss_res = (syy - slope * sxy).max(0.0);
    let degrees_of_freedom = n - 2.0;

    let (std_err, p_value) = if degrees_of_freedom > 0.0 && ss_res > 0.0 {
        let std_err = (ss_res / (degrees_of_freedom * sxx)).sqrt();
        let t_statistic = slope / std_err;
        let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
            .map_err(|e| Error::numeric_solve(format!("t-distribution setup failed: {}", e)))?;
        (std_err, 2.0 * distribution.cdf(-t_statistic.abs()))
    } else {
        // Exact fit (or n = 2): the slope is determined with no residual
        (0.0, 0.0)
    };

    Ok(Regression {
        slope,
        intercept,
        r_value,
        p_value,
        std_err,
    })
}
