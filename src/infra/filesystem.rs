//! Filesystem operations
//!
//! Handles directory preparation for the build stage.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory (and any missing parents) unless it already exists
///
/// An existing directory is left untouched. An existing non-directory at
/// `path` is an error.
pub fn ensure_dir(path: &Path) -> Result<(), FilesystemError> {
    if path.is_dir() {
        tracing::debug!("Directory already exists: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        return Err(FilesystemError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Creating directory: {}", path.display());
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
