// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Two output channels:
// - stdout: the progress lines and the report (plain println!)
// - stderr: diagnostics from `tracing` (cache hits, probe fallbacks, warnings)
//
// Keeping them apart means `--json` output on stdout stays parseable.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. RUST_LOG wins over `-v` when set.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}
