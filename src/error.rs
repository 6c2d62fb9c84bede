// =============================================================================
// Estimator Errors
// =============================================================================
//
// Every failure is fatal for the estimation that raised it: no partial
// `HurstResult` is ever returned.

use thiserror::Error;

/// Errors produced while estimating the Hurst exponent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HurstError {
    #[error("series length must be greater or equal to {min}, got {len}")]
    InvalidInput { len: usize, min: usize },

    #[error("series value at index {index} is not finite")]
    NonFiniteValue { index: usize },

    #[error("series value at index {index} must be positive, got {value}")]
    NonPositiveValue { index: usize, value: f64 },

    #[error("window sizes range between {min_window} and {max_window} would be empty")]
    DegenerateRange { min_window: usize, max_window: usize },

    #[error("can't set {ddof} degrees of freedom for series of length {len}")]
    InsufficientDegreesOfFreedom { len: usize, ddof: usize },

    #[error("window size {window} produced no usable R/S samples")]
    UndefinedWindowMean { window: usize },

    #[error("log-log regression is degenerate (zero variance in window sizes)")]
    DegenerateRegression,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
