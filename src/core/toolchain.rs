//! Installed runtime distribution
//!
//! The catalog unpacks a runtime distribution into the dep dir under a
//! single top-level directory whose name varies between releases. Nothing
//! here assumes that name; the installed root is rediscovered from the
//! filesystem each time it is needed.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::InstallError;

/// An installed runtime distribution inside the dep dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrystalDist {
    /// Top-level directory the archive unpacked to
    root: PathBuf,
}

impl CrystalDist {
    /// Discover the installed distribution under the dep dir
    ///
    /// The dep dir also accumulates the `bin`/`lib` links and the compiled
    /// `app` binary over the course of a build, so discovery counts only
    /// real directories (symlinks excluded). Exactly one must exist.
    pub fn locate(dep_dir: &Path) -> Result<Self, InstallError> {
        let discovery = |e: std::io::Error| InstallError::Discovery {
            dir: dep_dir.to_path_buf(),
            error: e.to_string(),
        };

        let mut dirs: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dep_dir).map_err(discovery)? {
            let entry = entry.map_err(discovery)?;
            let meta = std::fs::symlink_metadata(entry.path()).map_err(discovery)?;
            if meta.is_dir() {
                dirs.push(entry.path());
            }
        }

        match dirs.len() {
            0 => Err(InstallError::DistributionNotFound {
                dir: dep_dir.to_path_buf(),
            }),
            1 => Ok(Self {
                root: dirs.remove(0),
            }),
            n => Err(InstallError::DistributionAmbiguous {
                dir: dep_dir.to_path_buf(),
                count: n,
            }),
        }
    }

    /// Top-level directory of the distribution
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Executable directory inside the distribution, if present
    pub fn bin_dir(&self) -> Option<PathBuf> {
        self.subtree("bin")
    }

    /// Shared-library directory inside the distribution, if present
    pub fn lib_dir(&self) -> Option<PathBuf> {
        self.subtree("lib")
    }

    /// Compiler source path for CRYSTAL_PATH
    ///
    /// Self-contained releases keep the standard library under
    /// `share/crystal/src`; older layouts use a top-level `src`. When
    /// neither probe hits, the top-level variant is returned anyway and the
    /// compiler reports the real problem.
    pub fn source_dir(&self) -> PathBuf {
        let stdlib = self.root.join(defaults::DIST_STDLIB_DIR);
        if stdlib.is_dir() {
            stdlib
        } else {
            self.root.join("src")
        }
    }

    fn subtree(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.is_dir().then_some(path)
    }
}
