//! Crystalpack - Cloud Foundry buildpack staging for Crystal apps
//!
//! This library implements the buildpack's staging stages: detecting a
//! Crystal app, supplying a runtime and compiled binary into the deps
//! directory, and finalizing the release descriptor.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and stage dispatch
//! - [`core`] - Staging logic (version resolution, supply, release)
//! - [`infra`] - Infrastructure layer (catalog, filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
