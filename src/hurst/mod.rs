// =============================================================================
// Hurst Estimation Module
// =============================================================================
//
// Simplified rescaled-range analysis over log-spaced window sizes:
// - window sizes (quarter-decade scales ending at the series length)
// - per-window simplified R/S statistic
// - aggregation and log-log regression into (H, c)

pub mod estimator;
pub mod rescaled_range;
pub mod window_sizes;

pub use estimator::{estimate_hurst, estimate_hurst_with, HurstResult};
pub use rescaled_range::simplified_rs;
pub use window_sizes::window_sizes;
