//! Logging initialization for the migration tools.
//!
//! Standard output belongs to the progress report, so diagnostics go to
//! STDERR, colored only when STDERR is a terminal. `RUST_LOG` is honoured;
//! without it only warnings and errors are shown. Progress lines are mirrored
//! at `debug`, so they only reach STDERR with `--verbose` (which switches to
//! `debug` regardless of `RUST_LOG`).

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("Logging initialized");
    Ok(())
}
