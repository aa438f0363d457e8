//! External process execution
//!
//! Blocking execution of an [`Invocation`] with inherited stdio, so CMake
//! and Ninja output reaches the terminal as it is produced.

use std::process::Command;

use crate::core::invoker::CommandRunner;
use crate::core::plan::Invocation;
use crate::error::ToolError;

/// Spawns real processes and waits for them
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ToolError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("Spawning: {invocation}");
        let status = cmd.status().map_err(|e| ToolError::Spawn {
            stage: invocation.stage,
            program: invocation.program_name(),
            error: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                stage: invocation.stage,
                program: invocation.program_name(),
                code: status.code(),
            })
        }
    }
}
