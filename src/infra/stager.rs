//! Staging session directories
//!
//! The platform invokes each stage with four positional values: the app's
//! build directory, a cache directory that survives rebuilds of the same
//! app, the shared deps directory, and this buildpack's index into it.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Directory layout for one staging run
#[derive(Debug, Clone)]
pub struct Stager {
    build_dir: PathBuf,
    cache_dir: PathBuf,
    deps_dir: PathBuf,
    deps_idx: String,
}

impl Stager {
    /// Create a stager from the platform's positional arguments
    pub fn new(build_dir: PathBuf, cache_dir: PathBuf, deps_dir: PathBuf, deps_idx: String) -> Self {
        Self {
            build_dir,
            cache_dir,
            deps_dir,
            deps_idx,
        }
    }

    /// The app's mutable source tree
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Cache directory persisting across builds of the same app
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Index assigned to this buildpack within the deps directory
    pub fn deps_idx(&self) -> &str {
        &self.deps_idx
    }

    /// This buildpack's output directory, `<deps_dir>/<deps_idx>`
    pub fn dep_dir(&self) -> PathBuf {
        self.deps_dir.join(&self.deps_idx)
    }

    /// Link a directory into the dep dir under the given name
    ///
    /// The link is directory-level and relative whenever the target sits
    /// inside the dep dir, because the platform relocates the whole deps
    /// tree between staging and run time. An existing entry at the link
    /// path is replaced.
    pub fn link_directory_in_dep_dir(
        &self,
        target: &Path,
        name: &str,
    ) -> Result<(), FilesystemError> {
        let dep_dir = self.dep_dir();
        filesystem::create_dir_all(&dep_dir)?;

        let link_target = target
            .strip_prefix(&dep_dir)
            .map_or_else(|_| target.to_path_buf(), Path::to_path_buf);
        filesystem::symlink(&link_target, &dep_dir.join(name))
    }
}
