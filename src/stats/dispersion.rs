// =============================================================================
// Dispersion — mean and standard deviation with a ddof adjustment
// =============================================================================
//
//   σ = sqrt( Σ(x - x̄)² / (n - ddof) )
//
// ddof = 0 gives the population σ, ddof = 1 the sample σ.

use crate::error::HurstError;

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation of `values` with `ddof` delta degrees of freedom.
///
/// Fails with [`HurstError::InsufficientDegreesOfFreedom`] when
/// `values.len() <= ddof`.
pub fn std_dev(values: &[f64], ddof: usize) -> Result<f64, HurstError> {
    let mean = match mean(values) {
        Some(mean) if values.len() > ddof => mean,
        _ => {
            return Err(HurstError::InsufficientDegreesOfFreedom {
                len: values.len(),
                ddof,
            })
        }
    };

    let squares = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    Ok((squares / (values.len() - ddof) as f64).sqrt())
}
