//! Error types for vcbuild
//!
//! Domain-specific error types using thiserror. Every failure is terminal:
//! the invoker stops at the first error and hands it back to `main`, which
//! alone decides the process exit code.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::core::plan::Stage;

/// A required executable could not be located
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Tool is not on PATH
    #[error("Error: {tool} not found.")]
    ToolNotFound { tool: String },
}

/// Required configuration is missing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable is unset or empty
    #[error("{var} is not set, {hint}")]
    MissingEnv { var: String, hint: String },
}

/// An invoked external tool did not succeed
#[derive(Error, Debug)]
pub enum ToolError {
    /// The process could not be started at all
    #[error("Error during {stage} execution: failed to run '{program}': {error}")]
    Spawn {
        stage: Stage,
        program: String,
        error: String,
    },

    /// The process ran and exited unsuccessfully
    #[error("Error during {stage} execution: '{program}' {}", describe_exit(.code))]
    Failed {
        stage: Stage,
        program: String,
        code: Option<i32>,
    },
}

impl ToolError {
    /// Stage the failure happened in
    pub fn stage(&self) -> Stage {
        match self {
            ToolError::Spawn { stage, .. } | ToolError::Failed { stage, .. } => *stage,
        }
    }
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("returned non-zero exit status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Path exists but is something other than a directory
    #[error("'{path}' exists but is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Top-level error for a single toolchain run
///
/// Every variant is transparent: the message is the inner error's, and the
/// inner error is not repeated as a cause.
#[derive(Error, Debug)]
pub enum InvokerError {
    /// Discovery error
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Tool error
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
