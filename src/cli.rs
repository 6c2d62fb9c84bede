//! Command-line interface of the `hurst` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::types::OutputFormat;

/// Estimate the Hurst exponent of a price series with simplified R/S analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file holding the price series (overrides config and HURST_INPUT)
    pub input: Option<PathBuf>,

    /// Zero-based index of the close column
    #[arg(long)]
    pub column: Option<usize>,

    /// Treat the first record as data instead of a header row
    #[arg(long, default_value_t = false)]
    pub no_headers: bool,

    /// JSON configuration file
    #[arg(long, default_value = "hurst_config.json")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(column) = self.column {
            config.input.close_column = column;
        }
        if self.no_headers {
            config.input.has_headers = false;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}
