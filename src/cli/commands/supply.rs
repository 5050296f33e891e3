//! Supply stage command
//!
//! Wires the real collaborators (file catalog, system command runner) into
//! the supply orchestrator.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::supply::Supplier;
use crate::infra::catalog::FileCatalog;
use crate::infra::command::SystemCommand;
use crate::infra::log::StagingLog;
use crate::infra::stager::Stager;

/// Execute the supply stage
pub fn execute(stager: &Stager, buildpack_dir: Option<PathBuf>, log: &StagingLog) -> Result<()> {
    let buildpack_dir = resolve_buildpack_dir(buildpack_dir)?;
    tracing::debug!("loading catalog from {}", buildpack_dir.display());

    let catalog = FileCatalog::load(&buildpack_dir)?;
    let command = SystemCommand;

    Supplier::new(&catalog, stager, &command, log).run()?;
    Ok(())
}

/// Buildpack root holding manifest.yml
///
/// The explicit flag and the BUILDPACK_DIR variable are handled by clap;
/// when neither is given the root is derived from the running executable,
/// which the platform places under `<root>/bin/`.
fn resolve_buildpack_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = arg {
        return Ok(dir);
    }
    let exe = std::env::current_exe().context("cannot determine the executable path")?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .context("executable is not inside a buildpack bin/ directory")
}
