//! Default configuration values

/// Name of the runtime dependency in the buildpack manifest
pub const DEP_NAME: &str = "crystal";

/// Compiler binary name inside the installed distribution
pub const COMPILER: &str = "crystal";

/// Cache subdirectory where shards installs project dependencies
pub const SHARDS_CACHE_DIR: &str = "shards_lib";

/// Environment variable read by shards for its install target
pub const SHARDS_INSTALL_PATH_ENV: &str = "SHARDS_INSTALL_PATH";

/// Environment variable holding the compiler's source search path
pub const CRYSTAL_PATH_ENV: &str = "CRYSTAL_PATH";

/// Environment variable overriding the buildpack root directory
pub const BUILDPACK_DIR_ENV: &str = "BUILDPACK_DIR";

/// Source file extension of the runtime language
pub const SOURCE_EXT: &str = "cr";

/// Project source directory, relative to the build directory
pub const PROJECT_SRC_DIR: &str = "src";

/// Name of the compiled application binary placed in the dep dir
pub const APP_BINARY: &str = "app";

/// Project manifest filename, looked up in the application root
pub const SHARD_MANIFEST: &str = "shard.yml";

/// Buildpack manifest filename, looked up in the buildpack root
pub const BUILDPACK_MANIFEST: &str = "manifest.yml";

/// Subdirectory of the buildpack root holding bundled dependency archives
pub const DEPENDENCIES_DIR: &str = "dependencies";

/// Standard-library directory inside self-contained distributions
pub const DIST_STDLIB_DIR: &str = "share/crystal/src";

/// Fixed path where finalize writes the release descriptor
pub const RELEASE_YAML_PATH: &str = "/tmp/crystal-buildpack-release-step.yml";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
