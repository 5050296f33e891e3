//! Buildpack manifest catalog
//!
//! The buildpack ships a manifest.yml naming every runtime version it can
//! supply, plus the bundled `.tar.gz` distribution archives themselves.
//! [`FileCatalog`] serves version queries from the manifest and installs a
//! distribution by unpacking its archive, with path traversal protection
//! on every entry.

use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::config::defaults;
use crate::error::InstallError;

/// Source of installable runtime versions
pub trait VersionCatalog {
    /// All versions of the named dependency this buildpack ships
    fn all_dependency_versions(&self, name: &str) -> Vec<String>;

    /// Install the named version into `dest`
    ///
    /// The distribution lands under a single archive-chosen top-level
    /// directory inside `dest`; callers discover it by listing `dest`.
    fn install_dependency(
        &self,
        name: &str,
        version: &str,
        dest: &Path,
    ) -> Result<(), InstallError>;
}

/// One dependency row in manifest.yml
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    pub version: String,
    /// Upstream location; only its basename matters for bundled archives
    #[serde(default)]
    pub uri: String,
    /// Explicit archive path relative to the buildpack root
    #[serde(default)]
    pub file: Option<String>,
}

/// Parsed manifest.yml
#[derive(Debug, Clone, Deserialize)]
pub struct BuildpackManifest {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

impl BuildpackManifest {
    /// Parse manifest.yml content
    ///
    /// Unknown keys (checksums, stack lists) are ignored.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

/// Catalog backed by the buildpack's own directory
pub struct FileCatalog {
    root: PathBuf,
    manifest: BuildpackManifest,
}

impl FileCatalog {
    /// Load the catalog from a buildpack root containing manifest.yml
    pub fn load(buildpack_dir: &Path) -> Result<Self, InstallError> {
        let path = buildpack_dir.join(defaults::BUILDPACK_MANIFEST);
        let content = std::fs::read_to_string(&path).map_err(|e| InstallError::ManifestRead {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let manifest =
            BuildpackManifest::from_yaml(&content).map_err(|e| InstallError::ManifestParse {
                path,
                error: e.to_string(),
            })?;
        Ok(Self {
            root: buildpack_dir.to_path_buf(),
            manifest,
        })
    }

    /// The parsed manifest
    pub fn manifest(&self) -> &BuildpackManifest {
        &self.manifest
    }

    fn find(&self, name: &str, version: &str) -> Option<&DependencyEntry> {
        self.manifest
            .dependencies
            .iter()
            .find(|dep| dep.name == name && dep.version == version)
    }

    /// Where the bundled archive for an entry lives
    ///
    /// An explicit `file` wins; otherwise the archive is expected under
    /// `dependencies/` named after the URI's basename.
    fn archive_path(&self, entry: &DependencyEntry) -> PathBuf {
        if let Some(file) = &entry.file {
            return self.root.join(file);
        }
        let basename = entry.uri.rsplit('/').next().unwrap_or(&entry.uri);
        self.root.join(defaults::DEPENDENCIES_DIR).join(basename)
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), InstallError> {
        let io_err = |e: std::io::Error| InstallError::Extract {
            archive: archive.to_path_buf(),
            error: e.to_string(),
        };

        let file = std::fs::File::open(archive).map_err(io_err)?;
        let decoder = GzDecoder::new(file);
        let mut tar = tar::Archive::new(decoder);

        std::fs::create_dir_all(dest).map_err(io_err)?;
        for entry_result in tar.entries().map_err(io_err)? {
            let mut entry = entry_result.map_err(io_err)?;
            let entry_path = entry.path().map_err(io_err)?.into_owned();

            validate_entry_path(&entry_path)?;

            let dest_path = dest.join(&entry_path);
            if let Some(parent) = dest_path.parent() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
            entry.unpack(&dest_path).map_err(io_err)?;
        }
        Ok(())
    }
}

impl VersionCatalog for FileCatalog {
    fn all_dependency_versions(&self, name: &str) -> Vec<String> {
        self.manifest
            .dependencies
            .iter()
            .filter(|dep| dep.name == name)
            .map(|dep| dep.version.clone())
            .collect()
    }

    fn install_dependency(
        &self,
        name: &str,
        version: &str,
        dest: &Path,
    ) -> Result<(), InstallError> {
        let entry = self
            .find(name, version)
            .ok_or_else(|| InstallError::UnknownDependency {
                name: name.to_string(),
                version: version.to_string(),
            })?;

        let archive = self.archive_path(entry);
        if !archive.is_file() {
            return Err(InstallError::MissingArchive {
                name: name.to_string(),
                version: version.to_string(),
                path: archive,
            });
        }

        self.extract(&archive, dest)
    }
}

/// Validate that a tar entry path cannot escape the destination directory
/// via `..` components or absolute paths
fn validate_entry_path(path: &Path) -> Result<(), InstallError> {
    if path.is_absolute() {
        return Err(InstallError::PathTraversal {
            path: path.display().to_string(),
        });
    }
    for component in path.components() {
        if matches!(component, Component::ParentDir) {
            return Err(InstallError::PathTraversal {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}
