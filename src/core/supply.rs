//! Supply stage orchestration
//!
//! Runs the staging pipeline for one build: read shard.yml, resolve the
//! runtime version, unpack the runtime into the dep dir, install project
//! dependencies, compile the application. Stages run strictly in order and
//! the first failure aborts the build; cleanup of a failed build directory
//! is the platform's job, not ours.

use std::path::PathBuf;

use crate::config::defaults;
use crate::core::shard::ShardDescriptor;
use crate::core::toolchain::CrystalDist;
use crate::core::{shards, version};
use crate::error::StagingError;
use crate::infra::catalog::VersionCatalog;
use crate::infra::command::CommandRunner;
use crate::infra::log::StagingLog;
use crate::infra::stager::Stager;

/// Orchestrates the supply stage
pub struct Supplier<'a> {
    catalog: &'a dyn VersionCatalog,
    stager: &'a Stager,
    command: &'a dyn CommandRunner,
    log: &'a StagingLog,
    shard: ShardDescriptor,
}

impl<'a> Supplier<'a> {
    /// Wire up a supplier for one staging run
    pub fn new(
        catalog: &'a dyn VersionCatalog,
        stager: &'a Stager,
        command: &'a dyn CommandRunner,
        log: &'a StagingLog,
    ) -> Self {
        Self {
            catalog,
            stager,
            command,
            log,
            shard: ShardDescriptor::default(),
        }
    }

    /// Run the full supply pipeline
    pub fn run(&mut self) -> Result<(), StagingError> {
        self.log.step("Supplying Crystal");
        self.setup()?;
        self.install_crystal()?;
        self.install_shards()?;
        self.build_app()?;
        Ok(())
    }

    /// Read shard.yml and pin the runtime version
    ///
    /// After this returns, the descriptor's version field holds a concrete
    /// member of the catalog's version set, never a wildcard.
    pub fn setup(&mut self) -> Result<(), StagingError> {
        self.shard = ShardDescriptor::load(self.stager.build_dir())?;

        let available = self.catalog.all_dependency_versions(defaults::DEP_NAME);
        let resolved =
            version::resolve(defaults::DEP_NAME, &self.shard.crystal_version, &available)?;
        self.log.info(&format!("Using crystal {resolved}"));
        self.shard.crystal_version = resolved;
        Ok(())
    }

    /// Unpack the resolved runtime and publish its bin/lib subtrees
    pub fn install_crystal(&self) -> Result<(), StagingError> {
        self.log
            .step(&format!("Installing crystal {}", self.shard.crystal_version));

        let dep_dir = self.stager.dep_dir();
        self.catalog
            .install_dependency(defaults::DEP_NAME, &self.shard.crystal_version, &dep_dir)?;

        let dist = CrystalDist::locate(&dep_dir)?;
        if let Some(bin) = dist.bin_dir() {
            self.stager.link_directory_in_dep_dir(&bin, "bin")?;
        }
        if let Some(lib) = dist.lib_dir() {
            self.stager.link_directory_in_dep_dir(&lib, "lib")?;
        }
        Ok(())
    }

    /// Install the project's third-party packages in production mode
    pub fn install_shards(&self) -> Result<(), StagingError> {
        self.log.step("Installing shards");

        let runtime = version::parse_version(&self.shard.crystal_version)?;
        let argv = shards::install_argv(&runtime);
        let env = vec![(
            defaults::SHARDS_INSTALL_PATH_ENV.to_string(),
            self.shards_cache_dir().display().to_string(),
        )];

        self.command.run(self.stager.build_dir(), &env, &argv)?;
        Ok(())
    }

    /// Compile the application to `<dep_dir>/app`
    pub fn build_app(&self) -> Result<(), StagingError> {
        self.log.step("Compiling application");

        let dep_dir = self.stager.dep_dir();
        let dist = CrystalDist::locate(&dep_dir)?;

        let crystal_path = format!(
            "{}:{}:{}",
            dist.source_dir().display(),
            self.shards_cache_dir().display(),
            defaults::PROJECT_SRC_DIR,
        );
        let entry = format!(
            "{}/{}.{}",
            defaults::PROJECT_SRC_DIR,
            self.shard.name,
            defaults::SOURCE_EXT,
        );

        let env = vec![(defaults::CRYSTAL_PATH_ENV.to_string(), crystal_path)];
        let argv = vec![
            defaults::COMPILER.to_string(),
            "build".to_string(),
            entry,
            "--release".to_string(),
            "-o".to_string(),
            dep_dir.join(defaults::APP_BINARY).display().to_string(),
        ];

        self.command.run(self.stager.build_dir(), &env, &argv)?;
        Ok(())
    }

    /// The descriptor as of the last `setup` call
    pub fn shard(&self) -> &ShardDescriptor {
        &self.shard
    }

    fn shards_cache_dir(&self) -> PathBuf {
        self.stager.cache_dir().join(defaults::SHARDS_CACHE_DIR)
    }
}
