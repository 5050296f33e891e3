//! Detect stage
//!
//! The platform asks every buildpack whether it recognizes the app. A
//! Crystal app is recognized by a shard.yml in its root; on a match the
//! language name goes to stdout and the stage exits zero, otherwise it
//! exits non-zero without output.

use std::path::Path;
use std::process::ExitCode;

use crate::config::defaults;

/// Execute the detect stage
pub fn execute(build_dir: &Path) -> ExitCode {
    if build_dir.join(defaults::SHARD_MANIFEST).is_file() {
        println!("{}", defaults::DEP_NAME);
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
