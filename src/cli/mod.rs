//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{DEFAULT_BUILD_DIR, DEFAULT_PRESET, TOOLCHAIN_ROOT_ENV};
use crate::core::invoker::{RunOutcome, ToolchainInvoker};
use crate::core::settings::RunConfig;
use crate::core::toolchain::CompilerFamily;
use crate::infra::locator::PathLocator;
use crate::infra::process::SystemRunner;
use output::{print_detail, print_info, print_plan, print_success};

/// Utility to build the project
///
/// Locates the requested compilers and Ninja, then runs CMake with the
/// vcpkg preset and builds the result in ./build.
#[derive(Parser, Debug)]
#[command(name = "vcbuild")]
#[command(author, version, long_version = long_version(), about, long_about = None)]
pub struct Cli {
    /// The compiler you want to use, gcc or clang
    #[arg(short, long, value_enum)]
    pub compiler_name: CompilerFamily,

    /// vcpkg installation root
    // Raw OS string: an empty value must reach the root check, not fail the parse
    #[arg(
        long,
        env = TOOLCHAIN_ROOT_ENV,
        hide_env_values = true,
        value_parser = clap::builder::ValueParser::os_string()
    )]
    pub vcpkg_root: Option<OsString>,

    /// CMake preset to configure with
    #[arg(long, default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// Directory Ninja runs in
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Run CMake only, skip the Ninja build
    #[arg(long)]
    pub configure_only: bool,

    /// Print the commands that would run instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
            version.push_str(&format!("\ncommit: {sha}"));
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            version.push_str(&format!("\ntarget: {target}"));
        }
        version
    })
}

impl Cli {
    /// Settings for this run
    pub fn run_config(&self) -> RunConfig {
        let root = self.vcpkg_root.clone().map(PathBuf::from);
        let mut config = RunConfig::new(self.compiler_name, root)
            .with_preset(self.preset.clone())
            .with_build_dir(self.build_dir.clone());
        if self.configure_only {
            config = config.configure_only();
        }
        if self.dry_run {
            config = config.dry_run();
        }
        config
    }

    /// Execute the run against the host system
    pub fn run(self) -> Result<()> {
        let config = self.run_config();
        tracing::info!("Using {} toolchain", config.compiler);

        let mut invoker = ToolchainInvoker::new(config, PathLocator::new(), SystemRunner::new());
        let outcome = invoker.run()?;
        let plan = outcome.plan();
        if matches!(outcome, RunOutcome::Planned(_)) {
            return print_plan(plan);
        }

        print_success(&format!("Completed {} step(s)", plan.invocations.len()));
        if self.configure_only {
            print_info("Build skipped (--configure-only)");
        } else {
            print_detail(&format!("Output in {}", self.build_dir.display()));
        }
        Ok(())
    }
}
