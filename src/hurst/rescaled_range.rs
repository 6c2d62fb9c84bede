// =============================================================================
// Simplified Rescaled Range (R/S) — one window
// =============================================================================
//
// The classical R/S statistic takes R as the range of cumulative deviations
// from the window mean. This simplified variant measures the range as the
// fractional distance between the window extremes instead:
//
//   R = max(window) / min(window) - 1
//   S = sample σ of the window's fractional returns (ddof = 1)
//
// A degenerate window (R == 0 or S == 0) yields the sentinel 0.0, which the
// estimator drops before averaging.

use crate::error::HurstError;
use crate::stats::{pct_change, std_dev};

/// Value returned for windows whose range or dispersion is zero.
pub const DEGENERATE_RS: f64 = 0.0;

/// Compute the simplified R/S statistic of a single window of prices.
///
/// `ddof` is the degrees-of-freedom adjustment applied to the returns'
/// standard deviation. Fails when the window is too short to leave any
/// degrees of freedom.
pub fn simplified_rs(window: &[f64], ddof: usize) -> Result<f64, HurstError> {
    let s = std_dev(&pct_change(window), ddof)?;

    let (min, max) = window
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let r = max / min - 1.0;

    if r == 0.0 || s == 0.0 {
        return Ok(DEGENERATE_RS);
    }
    Ok(r / s)
}
