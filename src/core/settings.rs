//! Run configuration
//!
//! [`RunConfig`] is built once at startup from the parsed command line and
//! the process environment, then handed to the invoker. Nothing below the
//! CLI layer reads the environment directly.

use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DEFAULT_BUILD_DIR, DEFAULT_PRESET, TOOLCHAIN_FILE_SUBPATH, TOOLCHAIN_ROOT_ENV,
};
use crate::config::urls::VCPKG_INSTALL;
use crate::core::toolchain::CompilerFamily;
use crate::error::ConfigError;

/// Settings for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Selected compiler family
    pub compiler: CompilerFamily,
    /// vcpkg root as captured from the environment, validated later
    pub toolchain_root: Option<PathBuf>,
    /// CMake preset name
    pub preset: String,
    /// Output directory the build driver runs in
    pub build_dir: PathBuf,
    /// Whether to run the build driver after configuring
    pub run_build: bool,
    /// Assemble and report the plan without executing anything
    pub dry_run: bool,
}

impl RunConfig {
    /// Configuration with default preset and build directory
    pub fn new(compiler: CompilerFamily, toolchain_root: Option<PathBuf>) -> Self {
        Self {
            compiler,
            toolchain_root,
            preset: DEFAULT_PRESET.to_string(),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            run_build: true,
            dry_run: false,
        }
    }

    /// Use a different CMake preset
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = preset.into();
        self
    }

    /// Use a different output directory
    pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
        self.build_dir = build_dir.into();
        self
    }

    /// Stop after the configure step
    pub fn configure_only(mut self) -> Self {
        self.run_build = false;
        self
    }

    /// Only assemble the plan
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// The vcpkg root, or a configuration error with install guidance
///
/// An empty value counts as unset.
pub fn require_toolchain_root(config: &RunConfig) -> Result<&Path, ConfigError> {
    match config.toolchain_root.as_deref() {
        Some(root) if !root.as_os_str().is_empty() => Ok(root),
        _ => Err(ConfigError::MissingEnv {
            var: TOOLCHAIN_ROOT_ENV.to_string(),
            hint: format!("either set it or install vcpkg at: {VCPKG_INSTALL}"),
        }),
    }
}

/// Path of vcpkg's CMake toolchain file under `root`
pub fn toolchain_file(root: &Path) -> PathBuf {
    root.join(TOOLCHAIN_FILE_SUBPATH)
}
