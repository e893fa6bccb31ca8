//! Subcommand implementations

mod keys;
mod stats;

pub use keys::run_keys;
pub use stats::run_stats;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use esvisit_core::{VisitConfig, VisitOptions};

use crate::cli::Cli;

/// Builds traversal options from `--config` (or a discovered config file) and
/// `--fallback`.
pub fn load_options(cli: &Cli) -> Result<VisitOptions> {
    let mut config = if let Some(ref path) = cli.config {
        VisitConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if let Some(fallback) = cli.fallback {
        config.fallback = fallback.into();
    }

    Ok(VisitOptions::from(&config))
}

pub fn find_config() -> Result<VisitConfig> {
    if let Some(path) = VisitConfig::discover(".") {
        info!("Using config: {}", path.display());
        return VisitConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(VisitConfig::new())
}
