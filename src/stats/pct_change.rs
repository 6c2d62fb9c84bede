// =============================================================================
// Percent Change — period-to-period fractional returns
// =============================================================================
//
//   out[i] = series[i + 1] / series[i] - 1
//
// Unlike a percentage ROC the result is a plain fraction (0.10 == +10 %).

/// Convert `series` into `series.len() - 1` fractional returns.
///
/// Inputs shorter than two values yield an empty vector. Zero values are not
/// guarded here; the estimator rejects non-positive prices before calling in.
pub fn pct_change(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|pair| pair[1] / pair[0] - 1.0).collect()
}
