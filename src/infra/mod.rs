//! Infrastructure layer
//!
//! Handles all I/O operations: PATH lookup, filesystem, and external processes.
//! This module is the only place where side effects occur.

pub mod filesystem;
pub mod locator;
pub mod process;
