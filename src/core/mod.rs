//! Core staging logic
//!
//! Everything a staging run decides lives here; the collaborators that
//! touch the outside world (catalog, command runner, stager) come from
//! [`crate::infra`] and are injected so tests can substitute them.
//!
//! # Submodules
//!
//! - [`shard`] - Project manifest (shard.yml) parsing
//! - [`version`] - Runtime version resolution
//! - [`shards`] - Package manager invocation forms
//! - [`toolchain`] - Installed runtime distribution discovery
//! - [`supply`] - Supply stage orchestration
//! - [`release`] - Release descriptor generation (finalize stage)

pub mod release;
pub mod shard;
pub mod shards;
pub mod supply;
pub mod toolchain;
pub mod version;
