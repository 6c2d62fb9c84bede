// =============================================================================
// Window Sizes — logarithmically spaced R/S scales
// =============================================================================
//
// Window sizes are spaced `log_step` apart in log10-space, starting at
// `min_window` and stopping before `series_len - 1`:
//
//   count  = floor((log10(max) - log10(min)) / step + 1)
//   size_i = floor(10^(log10(min) + step * i)),  i in [0, count)
//
// When the ratio is an exact integer the last step would land on `max`
// itself, so it is dropped (open range). The full series length is always
// appended as the final window. Consecutive duplicates at small scales are
// kept as-is.

use tracing::debug;

use crate::config::HurstParams;
use crate::error::HurstError;

/// Generate the window sizes for a series of `series_len` observations.
///
/// The returned vector is non-decreasing, every entry is `<= series_len`, and
/// the last entry is always `series_len`.
pub fn window_sizes(series_len: usize, params: &HurstParams) -> Result<Vec<usize>, HurstError> {
    params.validate()?;

    if series_len < params.min_series_len {
        return Err(HurstError::InvalidInput {
            len: series_len,
            min: params.min_series_len,
        });
    }

    let min_window = params.min_window;
    let max_window = series_len.saturating_sub(1);

    let log1 = (min_window as f64).log10();
    let log2 = (max_window as f64).log10();
    let count_exact = (log2 - log1) / params.log_step + 1.0;
    let mut count = count_exact.floor();
    if count == count_exact {
        count -= 1.0;
    }

    if count < 1.0 {
        return Err(HurstError::DegenerateRange {
            min_window,
            max_window,
        });
    }
    if count > series_len as f64 {
        return Err(HurstError::InvalidParameter {
            name: "log_step",
            reason: format!(
                "{} yields {} window sizes for a series of length {}",
                params.log_step, count, series_len
            ),
        });
    }
    let count = count as usize;

    // +1 for the full-series window.
    let mut sizes = Vec::with_capacity(count + 1);
    for i in 0..count {
        let exponent = log1 + params.log_step * i as f64;
        sizes.push(10f64.powf(exponent).floor() as usize);
    }
    sizes.push(series_len);

    debug!(series_len, count = sizes.len(), sizes = ?sizes, "window sizes generated");
    Ok(sizes)
}
