//! Test doubles for tool lookup and command execution
//!
//! [`StaticLocator`] answers lookups from a fixed table and
//! [`RecordingRunner`] records every invocation instead of spawning it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::invoker::CommandRunner;
use crate::core::plan::{Invocation, Stage};
use crate::core::toolchain::ToolLocator;
use crate::error::ToolError;

/// Locator backed by a name -> path table
#[derive(Debug, Default, Clone)]
pub struct StaticLocator {
    tools: HashMap<String, PathBuf>,
}

impl StaticLocator {
    /// Locator that finds nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator that finds each of `names` under `/usr/bin`
    pub fn usr_bin(names: &[&str]) -> Self {
        names.iter().fold(Self::new(), |locator, name| {
            locator.with(name, &format!("/usr/bin/{name}"))
        })
    }

    /// Add a tool
    pub fn with(mut self, name: &str, path: &str) -> Self {
        self.tools.insert(name.to_string(), PathBuf::from(path));
        self
    }
}

impl ToolLocator for StaticLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.tools.get(name).cloned()
    }
}

/// Runner that records invocations and optionally fails one stage
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    fail_at: Option<Stage>,
}

impl RecordingRunner {
    /// Runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose `stage` command exits with status 1
    pub fn failing_at(stage: Stage) -> Self {
        Self {
            calls: RefCell::default(),
            fail_at: Some(stage),
        }
    }

    /// Invocations seen so far
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.fail_at == Some(invocation.stage) {
            return Err(ToolError::Failed {
                stage: invocation.stage,
                program: invocation.program_name(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_locator() {
        let locator = StaticLocator::usr_bin(&["gcc"]).with("ninja", "/opt/ninja/bin/ninja");
        assert_eq!(locator.locate("gcc"), Some(PathBuf::from("/usr/bin/gcc")));
        assert_eq!(
            locator.locate("ninja"),
            Some(PathBuf::from("/opt/ninja/bin/ninja"))
        );
        assert_eq!(locator.locate("clang"), None);
    }

    #[test]
    fn test_recording_runner_fails_only_requested_stage() {
        let runner = RecordingRunner::failing_at(Stage::Build);
        let configure = Invocation::new(Stage::Configure, "cmake");
        let build = Invocation::new(Stage::Build, "ninja");

        assert!(runner.run(&configure).is_ok());
        assert!(runner.run(&build).is_err());
        assert_eq!(runner.calls().len(), 2);
    }
}
