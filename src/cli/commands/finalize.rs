//! Finalize stage command

use std::path::Path;

use anyhow::Result;

use crate::config::defaults;
use crate::core::release::Finalizer;
use crate::infra::log::StagingLog;
use crate::infra::stager::Stager;

/// Execute the finalize stage
pub fn execute(stager: &Stager, log: &StagingLog) -> Result<()> {
    Finalizer::new(stager, log).run(Path::new(defaults::RELEASE_YAML_PATH))?;
    Ok(())
}
