//! Project manifest (shard.yml)
//!
//! The application describes itself with an optional shard.yml in its build
//! directory. Staging only reads two keys: the project name, which names the
//! entry point under src/, and the requested runtime version.

use std::path::Path;

use serde::Deserialize;

use crate::config::defaults;
use crate::error::ShardError;

/// Parsed shard.yml from the application's build directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShardDescriptor {
    /// Project name; empty when shard.yml is absent or has no `name` key
    #[serde(default)]
    pub name: String,

    /// Requested runtime version; empty means latest
    #[serde(default, rename = "crystal")]
    pub crystal_version: String,
}

impl ShardDescriptor {
    /// Load shard.yml from the build directory
    ///
    /// A missing file is not an error; it yields the default descriptor and
    /// staging continues with the latest runtime version.
    pub fn load(build_dir: &Path) -> Result<Self, ShardError> {
        let path = build_dir.join(defaults::SHARD_MANIFEST);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ShardError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|e| ShardError::Parse {
            path,
            error: e.to_string(),
        })
    }

    /// Parse shard.yml content
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_name_and_version() {
        let shard = ShardDescriptor::from_yaml("name: appname\ncrystal: 0.22.x\n").unwrap();
        assert_eq!(shard.name, "appname");
        assert_eq!(shard.crystal_version, "0.22.x");
    }

    #[test]
    fn test_parse_flow_style_mapping() {
        // YAML is a JSON superset, so flow-style manifests parse too
        let shard = ShardDescriptor::from_yaml(r#"{"name":"appname"}"#).unwrap();
        assert_eq!(shard.name, "appname");
        assert_eq!(shard.crystal_version, "");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let content = "name: appname\ndependencies:\n  kemal:\n    github: kemalcr/kemal\n";
        let shard = ShardDescriptor::from_yaml(content).unwrap();
        assert_eq!(shard.name, "appname");
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(ShardDescriptor::from_yaml("name: [unclosed").is_err());
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let shard = ShardDescriptor::load(dir.path()).unwrap();
        assert_eq!(shard, ShardDescriptor::default());
    }

    #[test]
    fn test_load_reads_build_dir_manifest() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shard.yml"), "name: web-app\n").unwrap();

        let shard = ShardDescriptor::load(dir.path()).unwrap();
        assert_eq!(shard.name, "web-app");
    }

    #[test]
    fn test_load_surfaces_parse_errors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shard.yml"), "name: [unclosed").unwrap();

        let result = ShardDescriptor::load(dir.path());
        assert!(matches!(result, Err(ShardError::Parse { .. })));
    }
}
