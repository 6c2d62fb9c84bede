// =============================================================================
// hurst-rs — Hurst exponent estimation by simplified rescaled-range analysis
// =============================================================================
//
// Library layout:
// - `stats`        percent change, dispersion, OLS regression
// - `hurst`        window sizes, per-window R/S, estimator
// - `data_source`  CSV close-price reader
// - `report`       text / JSON rendering
// =============================================================================

pub mod cli;
pub mod config;
pub mod data_source;
pub mod error;
pub mod hurst;
pub mod report;
pub mod stats;
pub mod types;

pub use config::{AppConfig, HurstParams};
pub use error::HurstError;
pub use hurst::{estimate_hurst, estimate_hurst_with, HurstResult};
pub use report::HurstReport;
pub use types::{HurstRegime, OutputFormat};
