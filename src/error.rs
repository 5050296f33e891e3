//! Error types for crystalpack
//!
//! Domain-specific error types using thiserror. Staging is all-or-nothing:
//! every error propagates unchanged to the top-level driver, which logs it
//! and exits non-zero. No stage retries or cleans up after itself.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or parsing the project's shard.yml
#[derive(Error, Debug)]
pub enum ShardError {
    /// shard.yml exists but could not be read
    #[error("Failed to read {path}: {error}")]
    Read { path: PathBuf, error: String },

    /// shard.yml is not a valid YAML document
    #[error("Failed to parse {path}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Version resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No available version satisfies the requested spec
    #[error("No version of '{dependency}' matches '{requested}'")]
    NoMatch {
        dependency: String,
        requested: String,
    },

    /// Requested version spec cannot be parsed
    #[error("Invalid version requirement '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// The catalog advertises a version string that is not a version
    #[error("Invalid version '{version}' in catalog: {reason}")]
    InvalidVersion { version: String, reason: String },
}

/// Runtime installation errors (catalog and installed-root discovery)
#[derive(Error, Debug)]
pub enum InstallError {
    /// Requested name/version pair is not in the buildpack manifest
    #[error("Dependency '{name}' {version} is not in the buildpack manifest")]
    UnknownDependency { name: String, version: String },

    /// Buildpack manifest could not be read
    #[error("Failed to read buildpack manifest at {path}: {error}")]
    ManifestRead { path: PathBuf, error: String },

    /// Buildpack manifest is not valid YAML
    #[error("Failed to parse buildpack manifest at {path}: {error}")]
    ManifestParse { path: PathBuf, error: String },

    /// Bundled archive for the dependency is missing
    #[error("Missing bundled archive {path} for '{name}' {version}")]
    MissingArchive {
        name: String,
        version: String,
        path: PathBuf,
    },

    /// Archive could not be unpacked
    #[error("Failed to extract {archive}: {error}")]
    Extract { archive: PathBuf, error: String },

    /// An archive entry points outside the install directory
    #[error("Archive entry '{path}' escapes the install directory")]
    PathTraversal { path: String },

    /// Dep dir could not be listed while discovering the installed root
    #[error("Failed to inspect {dir}: {error}")]
    Discovery { dir: PathBuf, error: String },

    /// No installed distribution directory was found after install
    #[error("No installed distribution found under {dir}")]
    DistributionNotFound { dir: PathBuf },

    /// More than one candidate distribution directory was found
    #[error("Expected one distribution directory under {dir}, found {count}")]
    DistributionAmbiguous { dir: PathBuf, count: usize },

    /// Install failed for a catalog-specific reason
    #[error("Install failed for '{name}' {version}: {reason}")]
    Failed {
        name: String,
        version: String,
        reason: String,
    },
}

/// External command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Program could not be spawned at all
    #[error("Failed to start '{program}': {error}")]
    Spawn { program: String, error: String },

    /// Program ran but exited unsuccessfully
    #[error("'{program}' exited with {status}")]
    Failed {
        program: String,
        status: String,
        output: String,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove an existing entry
    #[error("Failed to remove '{path}': {error}")]
    Remove { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to create a symbolic link
    #[error("Failed to link '{link}' -> '{target}': {error}")]
    Symlink {
        link: PathBuf,
        target: PathBuf,
        error: String,
    },
}

/// Top-level staging error type
#[derive(Error, Debug)]
pub enum StagingError {
    /// shard.yml error
    #[error("Shard manifest error: {0}")]
    Shard(#[from] ShardError),

    /// Version resolution error
    #[error("Version resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Runtime install error
    #[error("Install error: {0}")]
    Install(#[from] InstallError),

    /// External command error
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Release descriptor serialization error
    #[error("Failed to serialize release descriptor: {error}")]
    Release { error: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
