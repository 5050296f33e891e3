//! CLI command implementations
//!
//! Each staging stage is implemented in its own submodule.

pub mod detect;
pub mod finalize;
pub mod supply;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults;
use crate::infra::log::StagingLog;
use crate::infra::stager::Stager;

/// Staging stages the platform can invoke
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether this buildpack recognizes the app
    Detect {
        /// The app's build directory
        build_dir: PathBuf,
    },

    /// Install the runtime, fetch shards, and compile the app
    Supply {
        /// The app's build directory
        build_dir: PathBuf,

        /// Cache directory persisting across builds of the same app
        cache_dir: PathBuf,

        /// Shared deps directory
        deps_dir: PathBuf,

        /// This buildpack's index within the deps directory
        deps_idx: String,

        /// Buildpack root holding manifest.yml and bundled archives
        #[arg(long, env = defaults::BUILDPACK_DIR_ENV)]
        buildpack_dir: Option<PathBuf>,
    },

    /// Write the release descriptor for the platform's release step
    Finalize {
        /// The app's build directory
        build_dir: PathBuf,

        /// Cache directory persisting across builds of the same app
        cache_dir: PathBuf,

        /// Shared deps directory
        deps_dir: PathBuf,

        /// This buildpack's index within the deps directory
        deps_idx: String,
    },
}

impl Commands {
    /// Execute the stage
    pub fn run(self, log: &StagingLog) -> Result<ExitCode> {
        match self {
            Self::Detect { build_dir } => Ok(detect::execute(&build_dir)),
            Self::Supply {
                build_dir,
                cache_dir,
                deps_dir,
                deps_idx,
                buildpack_dir,
            } => {
                let stager = Stager::new(build_dir, cache_dir, deps_dir, deps_idx);
                supply::execute(&stager, buildpack_dir, log)?;
                Ok(ExitCode::SUCCESS)
            }
            Self::Finalize {
                build_dir,
                cache_dir,
                deps_dir,
                deps_idx,
            } => {
                let stager = Stager::new(build_dir, cache_dir, deps_dir, deps_idx);
                finalize::execute(&stager, log)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
