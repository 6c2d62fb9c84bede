// =============================================================================
// Ordinary Least Squares — simple linear regression y = slope * x + intercept
// =============================================================================
//
//   slope     = Σ((x - x̄)(y - ȳ)) / Σ((x - x̄)²)
//   intercept = ȳ - slope * x̄

use serde::Serialize;

use crate::error::HurstError;

/// Fitted line through a set of `(x, y)` points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points the line was fitted through.
    pub points: usize,
}

/// Fit an ordinary least-squares line through `points`.
///
/// Fails with [`HurstError::DegenerateRegression`] when fewer than two points
/// are given or every `x` is identical.
pub fn fit_ols(points: &[(f64, f64)]) -> Result<LinearFit, HurstError> {
    if points.len() < 2 {
        return Err(HurstError::DegenerateRegression);
    }

    let n = points.len() as f64;
    let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0_f64;
    let mut denominator = 0.0_f64;
    for &(x, y) in points {
        let dx = x - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    if denominator.abs() < f64::EPSILON {
        return Err(HurstError::DegenerateRegression);
    }

    let slope = numerator / denominator;
    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        points: points.len(),
    })
}
