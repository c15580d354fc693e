//! depscout - dependency update risk analyzer CLI tool
//!
//! Reads a package.json, queries the npm registry for every declared
//! dependency, and reports which packages are current, which have updates
//! available (and whether those look breaking), and which upstreams appear
//! abandoned.

use clap::Parser;
use depscout::cli::CliArgs;
use depscout::manifest::read_manifest;
use depscout::output::create_formatter;
use depscout::pipeline::Pipeline;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Diagnostics go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depscout v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", args.manifest.display());
        eprintln!("Registry: {}", args.registry);
    }

    // A missing or malformed manifest aborts before any dependency processing
    let declarations = read_manifest(&args.manifest)?;

    let pipeline = Pipeline::new(&args.registry, args.stale_after, args.concurrency)?;
    let show_progress = !args.quiet && !args.json;
    let report = pipeline.run(&declarations, show_progress).await;

    let formatter = create_formatter(args.output_config());
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    // Per-dependency failures are part of the report, not the exit code
    Ok(ExitCode::SUCCESS)
}
