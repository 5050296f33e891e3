//! Shared test utilities
//!
//! Proptest strategies for staging-domain values. Only compiled for tests.

use proptest::prelude::*;

/// Strategy for concrete semver version strings
pub fn version_string() -> impl Strategy<Value = String> {
    (0u64..50, 0u64..50, 0u64..50)
        .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
}

/// Strategy for non-empty catalogs of distinct versions
pub fn version_catalog() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(version_string(), 1..8)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for wildcard requirement strings (`N.x`, `N.M.x`)
pub fn wildcard_spec() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..50).prop_map(|major| format!("{major}.x")),
        (0u64..50, 0u64..50).prop_map(|(major, minor)| format!("{major}.{minor}.x")),
    ]
}
