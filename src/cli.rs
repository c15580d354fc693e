//! CLI argument parsing module for depscout

use crate::classify::DEFAULT_STALE_AFTER_MONTHS;
use crate::output::OutputConfig;
use crate::pipeline::DEFAULT_CONCURRENCY;
use crate::registry::NPM_REGISTRY_URL;
use clap::Parser;
use std::path::PathBuf;

/// Dependency update and risk analyzer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depscout",
    version,
    about = "Analyzes package.json dependencies for updates, breaking changes, and stale upstreams"
)]
pub struct CliArgs {
    /// Path to the manifest to analyze (default: package.json in the current directory)
    #[arg(default_value = "package.json")]
    pub manifest: PathBuf,

    // Classification options
    /// Months without a release before a package counts as outdated
    #[arg(long, value_name = "MONTHS", default_value_t = DEFAULT_STALE_AFTER_MONTHS)]
    pub stale_after: f64,

    /// Maximum number of registry requests in flight
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// npm registry base URL
    #[arg(long, value_name = "URL", default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - summary only
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the output configuration from the parsed flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.json, self.verbose, self.quiet, self.stale_after)
    }
}
