// =============================================================================
// Statistics Module
// =============================================================================
//
// Pure, side-effect-free numeric building blocks used by the Hurst estimator.
// Anything that can fail on short input returns `Result<_, HurstError>` so the
// estimator can propagate the failure instead of producing NaN.

pub mod dispersion;
pub mod pct_change;
pub mod regression;

pub use dispersion::{mean, std_dev};
pub use pct_change::pct_change;
pub use regression::{fit_ols, LinearFit};
