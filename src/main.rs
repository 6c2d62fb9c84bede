// =============================================================================
// hurst — Main Entry Point
// =============================================================================
//
// Reads closing prices from a CSV file and prints the estimated Hurst
// exponent. Settings resolve in order: defaults, config file, HURST_INPUT,
// command-line flags.
// =============================================================================

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hurst_rs::cli::Cli;
use hurst_rs::data_source::read_closes;
use hurst_rs::{estimate_hurst_with, AppConfig, HurstReport};

fn main() -> anyhow::Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 2. Config ────────────────────────────────────────────────────────
    let mut config = AppConfig::load(&cli.config).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Ok(input) = std::env::var("HURST_INPUT") {
        if !input.trim().is_empty() {
            config.input.path = input.trim().into();
        }
    }
    cli.apply(&mut config);

    // ── 3. Load & estimate ───────────────────────────────────────────────
    println!("Input file: {}", config.input.path.display());

    let closes = read_closes(
        &config.input.path,
        config.input.close_column,
        config.input.has_headers,
    )?;

    let result = estimate_hurst_with(&closes, &config.estimator)
        .with_context(|| format!("Hurst estimation failed for {}", config.input.path.display()))?;

    info!(
        hurst = format!("{:.4}", result.h),
        regime = %result.regime(),
        observations = closes.len(),
        "estimation complete"
    );

    // ── 4. Report ────────────────────────────────────────────────────────
    let report = HurstReport::new(&config.input.path, closes.len(), result);
    println!("{}", report.render(config.output.format)?);

    Ok(())
}
