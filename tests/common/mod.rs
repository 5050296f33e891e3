//! Common test utilities and helpers
//!
//! This module provides shared fixtures for integration tests: the staging
//! directory layout the platform hands to a stage, a catalog stub that
//! unpacks a canned distribution layout, and a command runner that records
//! invocations instead of spawning processes.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crystalpack::error::{CommandError, InstallError};
use crystalpack::infra::catalog::VersionCatalog;
use crystalpack::infra::command::CommandRunner;
use crystalpack::infra::stager::Stager;

/// Staging directory layout for one test
///
/// Mirrors what the platform passes to a stage: a build directory holding
/// the app source, a cache directory, and a deps directory with this
/// buildpack's index already created.
pub struct StagingDirs {
    root: TempDir,
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub deps_dir: PathBuf,
    pub deps_idx: String,
}

impl StagingDirs {
    /// Create a fresh staging layout under a temp directory
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let build_dir = root.path().join("build");
        let cache_dir = root.path().join("cache");
        let deps_dir = root.path().join("deps");
        let deps_idx = "9".to_string();

        std::fs::create_dir_all(&build_dir).expect("Failed to create build dir");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create cache dir");
        std::fs::create_dir_all(deps_dir.join(&deps_idx)).expect("Failed to create dep dir");

        Self {
            root,
            build_dir,
            cache_dir,
            deps_dir,
            deps_idx,
        }
    }

    /// Root of the temp layout
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// A stager over this layout
    pub fn stager(&self) -> Stager {
        Stager::new(
            self.build_dir.clone(),
            self.cache_dir.clone(),
            self.deps_dir.clone(),
            self.deps_idx.clone(),
        )
    }

    /// This buildpack's output directory
    pub fn dep_dir(&self) -> PathBuf {
        self.deps_dir.join(&self.deps_idx)
    }

    /// Write the app's shard.yml
    pub fn write_shard_yml(&self, content: &str) {
        std::fs::write(self.build_dir.join("shard.yml"), content)
            .expect("Failed to write shard.yml");
    }
}

/// Catalog stub that unpacks a canned distribution layout
///
/// `install_dependency` creates a single top-level directory under the
/// destination and fills it with the configured files, matching how a
/// bundled archive unpacks.
pub struct StubCatalog {
    versions: Vec<String>,
    dist_root: String,
    dist_files: Vec<(String, String)>,
}

impl StubCatalog {
    pub fn new(versions: &[&str]) -> Self {
        Self {
            versions: versions.iter().map(|v| (*v).to_string()).collect(),
            dist_root: "crystal-0.23.4-1".to_string(),
            dist_files: Vec::new(),
        }
    }

    /// Name of the top-level directory the stub unpacks
    pub fn dist_root(&self) -> &str {
        &self.dist_root
    }

    /// Files created under the distribution root on install
    pub fn with_dist_files(mut self, files: &[(&str, &str)]) -> Self {
        self.dist_files = files
            .iter()
            .map(|(path, content)| ((*path).to_string(), (*content).to_string()))
            .collect();
        self
    }
}

impl VersionCatalog for StubCatalog {
    fn all_dependency_versions(&self, name: &str) -> Vec<String> {
        if name == "crystal" {
            self.versions.clone()
        } else {
            Vec::new()
        }
    }

    fn install_dependency(
        &self,
        name: &str,
        version: &str,
        dest: &Path,
    ) -> Result<(), InstallError> {
        if !self.versions.iter().any(|v| v == version) {
            return Err(InstallError::UnknownDependency {
                name: name.to_string(),
                version: version.to_string(),
            });
        }

        let root = dest.join(&self.dist_root);
        std::fs::create_dir_all(&root).expect("Failed to create distribution root");
        for (path, content) in &self.dist_files {
            let file = root.join(path);
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create distribution dir");
            }
            std::fs::write(file, content).expect("Failed to write distribution file");
        }
        Ok(())
    }
}

/// One invocation seen by [`RecordingRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub dir: PathBuf,
    pub env: Vec<(String, String)>,
    pub argv: Vec<String>,
}

/// Command runner that records invocations instead of spawning processes
///
/// When `fail_with` is set, every `run` call fails after recording.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<RecordedCall>>,
    pub fail_with: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        dir: &Path,
        env: &[(String, String)],
        argv: &[String],
    ) -> Result<(), CommandError> {
        self.calls.borrow_mut().push(RecordedCall {
            dir: dir.to_path_buf(),
            env: env.to_vec(),
            argv: argv.to_vec(),
        });
        match &self.fail_with {
            Some(reason) => Err(CommandError::Failed {
                program: argv.first().cloned().unwrap_or_default(),
                status: "exit status: 1".to_string(),
                output: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn output(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().map(|a| (*a).to_string()));
        self.calls.borrow_mut().push(RecordedCall {
            dir: dir.to_path_buf(),
            env: Vec::new(),
            argv,
        });
        Ok(String::new())
    }
}
