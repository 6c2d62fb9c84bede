// =============================================================================
// Report — human-readable and JSON rendering of a Hurst estimation
// =============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::hurst::HurstResult;
use crate::types::{HurstRegime, OutputFormat};

impl fmt::Display for HurstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H: {}, c: {}, \nwindow sizes: {:?}, RS: {:?}",
            self.h, self.c, self.window_sizes, self.rs_means
        )
    }
}

/// A result together with the context it was computed in.
#[derive(Debug, Clone, Serialize)]
pub struct HurstReport {
    pub input: PathBuf,
    pub observations: usize,
    pub regime: HurstRegime,
    #[serde(flatten)]
    pub result: HurstResult,
}

impl HurstReport {
    pub fn new(input: impl AsRef<Path>, observations: usize, result: HurstResult) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            observations,
            regime: result.regime(),
            result,
        }
    }

    /// Render the report in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!("{} ({})", self.result, self.regime)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialise report to JSON")
            }
        }
    }
}
