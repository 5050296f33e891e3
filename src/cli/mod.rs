//! Command-line interface module
//!
//! This module handles argument parsing and stage dispatch.
//! It contains no staging logic - that belongs in the [`crate::core`] module.

pub mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::infra::log::StagingLog;
use commands::Commands;

/// Crystal buildpack staging tool
///
/// Supplies a Crystal runtime, installs shards, and compiles the
/// application during platform staging.
#[derive(Parser, Debug)]
#[command(name = "crystalpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the selected stage
    pub fn run(self) -> Result<ExitCode> {
        let log = StagingLog::new(self.quiet);
        if let Some(cmd) = self.command {
            cmd.run(&log)
        } else {
            // No stage given, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
