// =============================================================================
// Configuration — estimator parameters and application settings
// =============================================================================
//
// `HurstParams` drives the estimator; its defaults are the canonical
// quarter-decade R/S setup (windows from 10, series of at least 100 values,
// sample σ). `AppConfig` wraps it with the input/output settings used by the
// `hurst` binary and round-trips through JSON.
//
// All fields carry `#[serde(default)]` so a partial config file still loads.
//
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::HurstError;
use crate::types::OutputFormat;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_min_series_len() -> usize {
    100
}

fn default_min_window() -> usize {
    10
}

fn default_log_step() -> f64 {
    0.25
}

fn default_ddof() -> usize {
    1
}

fn default_input_path() -> PathBuf {
    PathBuf::from("1min_ETHUSDT.csv")
}

fn default_close_column() -> usize {
    4
}

// =============================================================================
// HurstParams
// =============================================================================

/// Tunable parameters of the R/S estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurstParams {
    /// Shortest series accepted by the estimator.
    #[serde(default = "default_min_series_len")]
    pub min_series_len: usize,

    /// Smallest window size; the first log-spaced scale.
    #[serde(default = "default_min_window")]
    pub min_window: usize,

    /// Spacing between consecutive window sizes in log10-space.
    #[serde(default = "default_log_step")]
    pub log_step: f64,

    /// Degrees-of-freedom adjustment for the returns' standard deviation.
    #[serde(default = "default_ddof")]
    pub ddof: usize,
}

impl Default for HurstParams {
    fn default() -> Self {
        Self {
            min_series_len: default_min_series_len(),
            min_window: default_min_window(),
            log_step: default_log_step(),
            ddof: default_ddof(),
        }
    }
}

impl HurstParams {
    /// Reject parameter combinations the estimator cannot run with.
    pub fn validate(&self) -> Result<(), HurstError> {
        if self.min_window < 2 {
            return Err(HurstError::InvalidParameter {
                name: "min_window",
                reason: format!("must be at least 2, got {}", self.min_window),
            });
        }
        if !self.log_step.is_finite() || self.log_step <= 0.0 {
            return Err(HurstError::InvalidParameter {
                name: "log_step",
                reason: format!("must be a positive finite number, got {}", self.log_step),
            });
        }
        if self.min_series_len <= self.min_window {
            return Err(HurstError::InvalidParameter {
                name: "min_series_len",
                reason: format!(
                    "must exceed min_window ({}), got {}",
                    self.min_window, self.min_series_len
                ),
            });
        }
        Ok(())
    }
}

// =============================================================================
// InputConfig / OutputConfig
// =============================================================================

/// Where the closing prices come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// CSV file holding one record per candle.
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Zero-based index of the close column (4 in an OHLCV export).
    #[serde(default = "default_close_column")]
    pub close_column: usize,

    /// Whether the first record is a header row.
    #[serde(default = "default_true")]
    pub has_headers: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            close_column: default_close_column(),
            has_headers: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// =============================================================================
// AppConfig
// =============================================================================

/// Top-level configuration of the `hurst` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub estimator: HurstParams,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// A missing file is an error so the caller can fall back to defaults
    /// with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;

        info!(
            path = %path.display(),
            input = %config.input.path.display(),
            min_window = config.estimator.min_window,
            "config loaded"
        );

        Ok(config)
    }

    /// Persist the configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "config saved (atomic)");
        Ok(())
    }
}
