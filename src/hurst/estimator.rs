// =============================================================================
// Hurst Exponent — simplified Rescaled Range (R/S) estimation
// =============================================================================
//
// Algorithm:
//   1. Generate log-spaced window sizes (see `window_sizes`), ending with the
//      full series length.
//   2. For each window size w:
//      a. Split the series into consecutive non-overlapping blocks of length
//         w; a trailing remainder shorter than w is discarded.
//      b. Compute the simplified R/S statistic of every block.
//      c. Drop degenerate (sentinel 0) values and average the rest. A window
//         size with no usable block is a fatal error.
//   3. Fit an ordinary least-squares line of log10(mean R/S) on log10(w).
//      The slope is the Hurst exponent H and 10^intercept the constant c.
//
// The estimation is a pure function of the input: no state survives a call.

use serde::Serialize;
use tracing::{debug, trace};

use super::rescaled_range::{simplified_rs, DEGENERATE_RS};
use super::window_sizes::window_sizes;
use crate::config::HurstParams;
use crate::error::HurstError;
use crate::stats::{fit_ols, mean};
use crate::types::HurstRegime;

/// Outcome of one Hurst estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HurstResult {
    /// Hurst exponent: slope of the log-log regression.
    pub h: f64,
    /// Scaling constant: 10^intercept of the log-log regression.
    pub c: f64,
    /// Window sizes in generation order; the last one is the series length.
    pub window_sizes: Vec<usize>,
    /// Mean R/S per window size, index-aligned with `window_sizes`.
    pub rs_means: Vec<f64>,
}

impl HurstResult {
    /// `(window size, mean R/S)` pairs in generation order.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.window_sizes
            .iter()
            .copied()
            .zip(self.rs_means.iter().copied())
    }

    pub fn regime(&self) -> HurstRegime {
        HurstRegime::classify(self.h)
    }
}

/// Estimate the Hurst exponent of `series` with the default parameters.
pub fn estimate_hurst(series: &[f64]) -> Result<HurstResult, HurstError> {
    estimate_hurst_with(series, &HurstParams::default())
}

/// Estimate the Hurst exponent of `series` with explicit parameters.
///
/// Fails when:
/// - the parameters are invalid ([`HurstParams::validate`]),
/// - the series is shorter than `params.min_series_len`,
/// - any value is non-finite or not strictly positive,
/// - a window size yields no usable R/S sample.
pub fn estimate_hurst_with(
    series: &[f64],
    params: &HurstParams,
) -> Result<HurstResult, HurstError> {
    params.validate()?;

    if series.len() < params.min_series_len {
        trace!(
            len = series.len(),
            min = params.min_series_len,
            "Hurst: insufficient data"
        );
        return Err(HurstError::InvalidInput {
            len: series.len(),
            min: params.min_series_len,
        });
    }
    check_values(series)?;

    let sizes = window_sizes(series.len(), params)?;

    let mut rs_means = Vec::with_capacity(sizes.len());
    let mut points = Vec::with_capacity(sizes.len());

    for &window in &sizes {
        let blocks = series.len() / window;
        let mut samples = Vec::with_capacity(blocks);

        for block in series.chunks_exact(window) {
            let rs = simplified_rs(block, params.ddof)?;
            if rs != DEGENERATE_RS {
                samples.push(rs);
            }
        }

        let rs_mean = mean(&samples).ok_or(HurstError::UndefinedWindowMean { window })?;

        trace!(
            window,
            blocks,
            retained = samples.len(),
            rs_mean = format!("{:.6}", rs_mean),
            "Hurst: window aggregated"
        );

        rs_means.push(rs_mean);
        points.push(((window as f64).log10(), rs_mean.log10()));
    }

    let fit = fit_ols(&points)?;
    let h = fit.slope;
    let c = 10f64.powf(fit.intercept);

    debug!(
        hurst = format!("{:.4}", h),
        c = format!("{:.4}", c),
        points = fit.points,
        "Hurst exponent computed"
    );

    Ok(HurstResult {
        h,
        c,
        window_sizes: sizes,
        rs_means,
    })
}

/// Every value must be finite and strictly positive: returns divide by the
/// previous price and the range divides by the window minimum.
fn check_values(series: &[f64]) -> Result<(), HurstError> {
    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(HurstError::NonFiniteValue { index });
        }
        if value <= 0.0 {
            return Err(HurstError::NonPositiveValue { index, value });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: random-walk-like series from a xorshift64 PRNG so the test is
    /// reproducible. Steps are uniform in [-0.5, 0.5] around a start of 100,
    /// which keeps short walks strictly positive.
    fn pseudorandom_walk(len: usize, seed: u64) -> Vec<f64> {
        let mut v = Vec::with_capacity(len);
        let mut price = 100.0;
        let mut state = seed;
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let r = (state as f64 / u64::MAX as f64) - 0.5;
            price += r;
            v.push(price);
        }
        v
    }

    /// Helper: steadily rising series with a small wobble in the step size.
    fn trending_series(len: usize) -> Vec<f64> {
        let mut v = Vec::with_capacity(len);
        let mut price = 100.0;
        for i in 0..len {
            price += 0.5 + 0.1 * (i as f64).sin().abs();
            v.push(price);
        }
        v
    }

    /// Helper: high-amplitude oscillation around a slowly drifting mean.
    fn mean_reverting_series(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| {
                let oscillation = if i % 2 == 0 { -5.0 } else { 5.0 };
                100.0 + oscillation + 0.01 * i as f64
            })
            .collect()
    }

    #[test]
    fn test_random_walk_near_half() {
        let series = pseudorandom_walk(150, 2024);
        let result = estimate_hurst(&series).expect("should produce a value");
        assert!(
            (0.3..=0.7).contains(&result.h),
            "Random walk Hurst should be broadly near 0.5, got {:.4}",
            result.h
        );
        assert_eq!(result.window_sizes, vec![10, 17, 31, 56, 100, 150]);
    }

    #[test]
    fn test_arithmetic_series_means_increase() {
        let series: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
        let result = estimate_hurst(&series).unwrap();

        assert_eq!(result.window_sizes, vec![10, 17, 31, 56, 100, 177, 200]);
        assert_eq!(result.rs_means.len(), result.window_sizes.len());
        assert!(result.rs_means.iter().all(|rs| rs.is_finite() && *rs > 0.0));
        assert!(
            result.rs_means.windows(2).all(|p| p[0] < p[1]),
            "rs_means should strictly increase: {:?}",
            result.rs_means
        );
        assert!(result.h.is_finite());
        assert!(result.c.is_finite() && result.c > 0.0);
    }

    #[test]
    fn test_every_block_of_arithmetic_series_has_a_range() {
        let series: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
        for window in window_sizes(series.len(), &HurstParams::default()).unwrap() {
            for block in series.chunks_exact(window) {
                let rs = simplified_rs(block, 1).unwrap();
                assert!(rs.is_finite() && rs > 0.0, "window={} rs={}", window, rs);
            }
        }
    }

    #[test]
    fn test_trending_series_is_persistent() {
        let result = estimate_hurst(&trending_series(256)).unwrap();
        assert_eq!(result.regime(), HurstRegime::Persistent, "h={:.4}", result.h);
    }

    #[test]
    fn test_mean_reverting_series_is_mean_reverting() {
        let result = estimate_hurst(&mean_reverting_series(256)).unwrap();
        assert_eq!(result.regime(), HurstRegime::MeanReverting, "h={:.4}", result.h);
    }

    #[test]
    fn test_determinism() {
        let series = pseudorandom_walk(512, 99);
        let a = estimate_hurst(&series).unwrap();
        let b = estimate_hurst(&series).unwrap();
        assert_eq!(a.h.to_bits(), b.h.to_bits());
        assert_eq!(a.c.to_bits(), b.c.to_bits());
        assert_eq!(a, b, "Hurst estimation should be deterministic");
    }

    #[test]
    fn test_exact_min_data() {
        let series = pseudorandom_walk(100, 2024);
        let result = estimate_hurst(&series).unwrap();
        assert_eq!(*result.window_sizes.last().unwrap(), 100);
    }

    #[test]
    fn test_insufficient_data() {
        let series = pseudorandom_walk(99, 2024);
        assert_eq!(
            estimate_hurst(&series),
            Err(HurstError::InvalidInput { len: 99, min: 100 })
        );
    }

    #[test]
    fn test_flat_series_has_undefined_mean() {
        // Every block has R == 0, so the first window size has no samples.
        let series = vec![42.0; 128];
        assert_eq!(
            estimate_hurst(&series),
            Err(HurstError::UndefinedWindowMean { window: 10 })
        );
    }

    #[test]
    fn test_non_positive_and_non_finite_values_are_rejected() {
        let mut series = pseudorandom_walk(120, 7);
        series[30] = 0.0;
        assert_eq!(
            estimate_hurst(&series),
            Err(HurstError::NonPositiveValue { index: 30, value: 0.0 })
        );

        series[30] = f64::NAN;
        assert_eq!(
            estimate_hurst(&series),
            Err(HurstError::NonFiniteValue { index: 30 })
        );

        series[30] = -1.0;
        assert!(matches!(
            estimate_hurst(&series),
            Err(HurstError::NonPositiveValue { index: 30, .. })
        ));
    }

    #[test]
    fn test_invalid_params_are_rejected_before_input() {
        let params = HurstParams {
            min_window: 1,
            ..HurstParams::default()
        };
        assert!(matches!(
            estimate_hurst_with(&[], &params),
            Err(HurstError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_insufficient_degrees_of_freedom_aborts_estimation() {
        let params = HurstParams {
            ddof: 9,
            ..HurstParams::default()
        };
        let series: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
        // A 10-price window leaves 9 returns, which cannot carry 9 degrees of freedom.
        assert_eq!(
            estimate_hurst_with(&series, &params),
            Err(HurstError::InsufficientDegreesOfFreedom { len: 9, ddof: 9 })
        );
    }

    #[test]
    fn test_empty_window_range_aborts_estimation() {
        let params = HurstParams {
            min_series_len: 11,
            min_window: 10,
            ..HurstParams::default()
        };
        let series: Vec<f64> = (0..11).map(|i| 100.0 + i as f64).collect();
        assert_eq!(
            estimate_hurst_with(&series, &params),
            Err(HurstError::DegenerateRange {
                min_window: 10,
                max_window: 10,
            })
        );
    }

    #[test]
    fn test_tiny_log_step_is_rejected() {
        let params = HurstParams {
            log_step: 1e-15,
            ..HurstParams::default()
        };
        let series: Vec<f64> = (0..200).map(|i| 100.0 + i as f64).collect();
        assert!(matches!(
            estimate_hurst_with(&series, &params),
            Err(HurstError::InvalidParameter { name: "log_step", .. })
        ));
    }

    #[test]
    fn test_custom_params() {
        let params = HurstParams {
            min_series_len: 50,
            min_window: 10,
            log_step: 0.5,
            ddof: 1,
        };
        let series = pseudorandom_walk(64, 2024);
        let result = estimate_hurst_with(&series, &params).unwrap();
        // (log10(63) - 1) / 0.5 + 1 = 2.6 => 2 log-spaced sizes (10, 31) plus 64
        assert_eq!(result.window_sizes, vec![10, 31, 64]);
        assert!(result.h.is_finite());
    }

    #[test]
    fn test_points_pair_windows_with_means() {
        let result = estimate_hurst(&pseudorandom_walk(300, 31)).unwrap();
        let points: Vec<(usize, f64)> = result.points().collect();
        assert_eq!(points.len(), result.window_sizes.len());
        for (i, (w, rs)) in points.into_iter().enumerate() {
            assert_eq!(w, result.window_sizes[i]);
            assert_eq!(rs.to_bits(), result.rs_means[i].to_bits());
        }
    }

    #[test]
    fn test_c_is_ten_to_the_intercept() {
        let result = estimate_hurst(&pseudorandom_walk(400, 5)).unwrap();
        let points: Vec<(f64, f64)> = result
            .points()
            .map(|(w, rs)| ((w as f64).log10(), rs.log10()))
            .collect();
        let fit = fit_ols(&points).unwrap();
        assert!((result.h - fit.slope).abs() < 1e-12);
        assert!((result.c.log10() - fit.intercept).abs() < 1e-9);
    }
}
