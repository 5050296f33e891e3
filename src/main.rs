//! Crystal buildpack CLI
//!
//! Entry point for the staging binary. The platform invokes one stage per
//! call: detect, supply, or finalize.

use std::process::ExitCode;

use clap::Parser;

use crystalpack::cli::Cli;
use crystalpack::infra::log::StagingLog;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v raises the level per occurrence
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            StagingLog::default().error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
