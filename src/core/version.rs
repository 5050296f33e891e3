//! Runtime version resolution
//!
//! This module handles:
//! - Parsing the version requirement from shard.yml
//! - Matching requirements against the buildpack manifest's versions
//! - Semver comparison and highest-match selection

use semver::Version;

use crate::error::ResolveError;

/// Parsed form of the version requirement from shard.yml
///
/// Requirements come in three shapes: absent, a numeric prefix with a
/// trailing `x` segment, or a full concrete version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// No requirement given; any available version qualifies
    Latest,
    /// Numeric prefix with a trailing wildcard segment (`1.x`, `0.22.x`)
    Wildcard { major: u64, minor: Option<u64> },
    /// Full concrete version that must exist in the catalog
    Exact(Version),
}

impl VersionSpec {
    /// Parse a raw requirement string
    ///
    /// # Arguments
    /// * `raw` - The requirement as written in shard.yml (may be empty)
    ///
    /// # Returns
    /// * `Ok(VersionSpec)` for an empty, wildcard, or concrete requirement
    /// * `Err(ResolveError::InvalidSpec)` for anything else
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Latest);
        }

        let segments: Vec<&str> = trimmed.split('.').collect();
        if segments.last().copied() == Some("x") {
            return Self::parse_wildcard(trimmed, &segments[..segments.len() - 1]);
        }

        let version = Version::parse(trimmed).map_err(|e| ResolveError::InvalidSpec {
            spec: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Exact(version))
    }

    fn parse_wildcard(raw: &str, prefix: &[&str]) -> Result<Self, ResolveError> {
        let invalid = |reason: &str| ResolveError::InvalidSpec {
            spec: raw.to_string(),
            reason: reason.to_string(),
        };

        match prefix {
            [major] => Ok(Self::Wildcard {
                major: parse_segment(major).ok_or_else(|| invalid("major is not a number"))?,
                minor: None,
            }),
            [major, minor] => Ok(Self::Wildcard {
                major: parse_segment(major).ok_or_else(|| invalid("major is not a number"))?,
                minor: Some(
                    parse_segment(minor).ok_or_else(|| invalid("minor is not a number"))?,
                ),
            }),
            [] => Err(invalid("wildcard needs a numeric prefix")),
            _ => Err(invalid("too many segments before wildcard")),
        }
    }

    /// Whether a concrete version satisfies this requirement
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::Latest => true,
            Self::Wildcard { major, minor } => {
                version.major == *major && minor.map_or(true, |m| version.minor == m)
            }
            Self::Exact(exact) => version == exact,
        }
    }
}

fn parse_segment(segment: &str) -> Option<u64> {
    segment.parse().ok()
}

/// Parse and validate a version string from the catalog
pub fn parse_version(raw: &str) -> Result<Version, ResolveError> {
    Version::parse(raw).map_err(|e| ResolveError::InvalidVersion {
        version: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve a requirement against the catalog's available versions
///
/// Returns the original catalog string of the highest matching version, so
/// the caller can hand the result straight back to the catalog. The result
/// is always a member of `available`.
///
/// # Arguments
/// * `dependency` - Dependency name, used only in error messages
/// * `requested` - Raw requirement from shard.yml (may be empty)
/// * `available` - Version strings the buildpack manifest ships
pub fn resolve(
    dependency: &str,
    requested: &str,
    available: &[String],
) -> Result<String, ResolveError> {
    let spec = VersionSpec::parse(requested)?;

    let mut best: Option<(Version, &str)> = None;
    for raw in available {
        let version = parse_version(raw)?;
        if !spec.matches(&version) {
            continue;
        }
        if best
            .as_ref()
            .map_or(true, |(current, _)| version > *current)
        {
            best = Some((version, raw));
        }
    }

    match best {
        Some((_, raw)) => Ok(raw.to_string()),
        None => Err(ResolveError::NoMatch {
            dependency: dependency.to_string(),
            requested: requested.to_string(),
        }),
    }
}
