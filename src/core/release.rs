//! Release descriptor (finalize stage)
//!
//! The finalize stage tells the platform how to start the app: a YAML
//! document mapping process types to start commands. The binary compiled
//! during supply always sits at `$DEPS_DIR/<idx>/app`, so the descriptor
//! is fully determined by the deps index.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::defaults;
use crate::error::StagingError;
use crate::infra::filesystem;
use crate::infra::log::StagingLog;
use crate::infra::stager::Stager;

/// Start commands by process type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDescriptor {
    pub default_process_types: BTreeMap<String, String>,
}

/// Build the descriptor for a finished build
///
/// `$DEPS_DIR` and `$PORT` are left for the platform's runtime shell to
/// expand; the deps tree moves between staging and run time, so the path
/// cannot be resolved here.
pub fn release_descriptor(deps_idx: &str) -> ReleaseDescriptor {
    let mut types = BTreeMap::new();
    types.insert(
        "web".to_string(),
        format!("$DEPS_DIR/{deps_idx}/{} --port $PORT", defaults::APP_BINARY),
    );
    ReleaseDescriptor {
        default_process_types: types,
    }
}

/// Orchestrates the finalize stage
pub struct Finalizer<'a> {
    stager: &'a Stager,
    log: &'a StagingLog,
}

impl<'a> Finalizer<'a> {
    /// Wire up a finalizer for one staging run
    pub fn new(stager: &'a Stager, log: &'a StagingLog) -> Self {
        Self { stager, log }
    }

    /// Write the release descriptor to `output`
    ///
    /// The platform's release step reads it from a fixed path
    /// ([`defaults::RELEASE_YAML_PATH`]); callers pass the path so tests
    /// can redirect it.
    pub fn run(&self, output: &Path) -> Result<(), StagingError> {
        self.log.step("Configuring Crystal");

        let descriptor = release_descriptor(self.stager.deps_idx());
        let yaml = serde_yaml::to_string(&descriptor)
            .map_err(|e| StagingError::Release {
                error: e.to_string(),
            })?;
        filesystem::write_file(output, &yaml)?;
        Ok(())
    }
}
