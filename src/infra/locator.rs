//! Host command lookup
//!
//! Resolves executable names against `PATH`, the same search `which <name>`
//! performs.

use std::path::PathBuf;

use crate::core::toolchain::ToolLocator;

/// Looks tools up on the process `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl PathLocator {
    /// Create a PATH locator
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("Lookup of '{name}' failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_is_not_found() {
        let locator = PathLocator::new();
        assert!(locator
            .locate("vcbuild-definitely-not-a-real-tool-3f9a")
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_is_found_as_absolute_path() {
        let locator = PathLocator::new();
        if let Some(path) = locator.locate("sh") {
            assert!(path.is_absolute());
        }
    }
}
