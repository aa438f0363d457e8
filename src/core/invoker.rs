//! Toolchain discovery and CMake/Ninja invocation
//!
//! [`ToolchainInvoker`] drives one run through a fixed sequence:
//!
//! ```text
//! Start -> CompilersResolved -> EnvironmentValidated -> DirectoryEnsured
//!       -> Configured -> Built -> Success
//! ```
//!
//! Any failing step moves the run to [`RunState::Failed`] and returns the
//! error; later steps never execute. Tool lookup and process execution go
//! through the [`ToolLocator`] and [`CommandRunner`] traits so the whole
//! sequence can be exercised without spawning processes.

use std::path::Path;

use crate::core::plan::{Invocation, InvocationPlan, Stage};
use crate::core::settings::{require_toolchain_root, RunConfig};
use crate::core::toolchain::{resolve_build_driver, resolve_compilers, ResolvedPaths, ToolLocator};
use crate::error::{InvokerError, ToolError};
use crate::infra::filesystem;

/// Executes external commands
pub trait CommandRunner {
    /// Run `invocation` to completion; `Ok` only on exit status zero
    fn run(&self, invocation: &Invocation) -> Result<(), ToolError>;
}

/// Progress of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing done yet
    Start,
    /// Compiler paths known
    CompilersResolved,
    /// Build driver known and vcpkg root present
    EnvironmentValidated,
    /// Output directory exists
    DirectoryEnsured,
    /// CMake succeeded
    Configured,
    /// Ninja succeeded
    Built,
    /// Every requested stage completed
    Success,
    /// A step failed; terminal
    Failed,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Plan was executed
    Executed(InvocationPlan),
    /// Plan was assembled but not executed
    Planned(InvocationPlan),
}

impl RunOutcome {
    /// The plan, executed or not
    pub fn plan(&self) -> &InvocationPlan {
        match self {
            RunOutcome::Executed(plan) | RunOutcome::Planned(plan) => plan,
        }
    }
}

/// Runs the configure and build stages for one compiler selection
#[derive(Debug)]
pub struct ToolchainInvoker<L, R> {
    config: RunConfig,
    locator: L,
    runner: R,
    state: RunState,
}

impl<L: ToolLocator, R: CommandRunner> ToolchainInvoker<L, R> {
    /// Create an invoker in the [`RunState::Start`] state
    pub fn new(config: RunConfig, locator: L, runner: R) -> Self {
        Self {
            config,
            locator,
            runner,
            state: RunState::Start,
        }
    }

    /// Current state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The command runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run every stage, stopping at the first failure
    pub fn run(&mut self) -> Result<RunOutcome, InvokerError> {
        let result = self.drive();
        match &result {
            Ok(RunOutcome::Executed(_)) => self.state = RunState::Success,
            Ok(RunOutcome::Planned(_)) => {}
            Err(e) => {
                tracing::debug!("Run failed in state {:?}: {e}", self.state);
                self.state = RunState::Failed;
            }
        }
        result
    }

    fn drive(&mut self) -> Result<RunOutcome, InvokerError> {
        let compilers = resolve_compilers(&self.locator, self.config.compiler)?;
        self.advance(RunState::CompilersResolved);

        let make_program = resolve_build_driver(&self.locator)?;
        let paths = ResolvedPaths::new(compilers, make_program);
        let root = require_toolchain_root(&self.config)?.to_path_buf();
        self.advance(RunState::EnvironmentValidated);

        let build_dir = self.config.build_dir.clone();
        let plan = InvocationPlan::assemble(
            &paths,
            &root,
            &self.config.preset,
            self.config.run_build.then_some(build_dir.as_path()),
        );

        if self.config.dry_run {
            tracing::info!("Dry run: {} command(s) planned", plan.invocations.len());
            return Ok(RunOutcome::Planned(plan));
        }

        ensure_output_directory(&build_dir)?;
        self.advance(RunState::DirectoryEnsured);

        for invocation in plan.iter() {
            match invocation.stage {
                Stage::Configure => {
                    self.run_configuration(invocation)?;
                    self.advance(RunState::Configured);
                }
                Stage::Build => {
                    self.run_build(invocation)?;
                    self.advance(RunState::Built);
                }
            }
        }

        Ok(RunOutcome::Executed(plan))
    }

    fn advance(&mut self, next: RunState) {
        tracing::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Run the planned `cmake` configure command
    pub fn run_configuration(&self, invocation: &Invocation) -> Result<(), InvokerError> {
        tracing::info!("Configuring: {invocation}");
        self.runner.run(invocation)?;
        Ok(())
    }

    /// Run the planned build driver command inside the output directory
    pub fn run_build(&self, invocation: &Invocation) -> Result<(), InvokerError> {
        tracing::info!("Building: {invocation}");
        self.runner.run(invocation)?;
        Ok(())
    }
}

/// Create `path` if it does not exist yet
pub fn ensure_output_directory(path: &Path) -> Result<(), InvokerError> {
    filesystem::ensure_dir(path)?;
    Ok(())
}
