//! vcbuild - toolchain discovery front-end for vcpkg CMake projects
//!
//! Resolves a C/C++ compiler pair and Ninja on `PATH`, checks `VCPKG_ROOT`,
//! then runs `cmake --preset=vcpkg` followed by `ninja` in `./build`.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Toolchain selection, command assembly and run orchestration
//! - [`infra`] - Infrastructure layer (PATH lookup, filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
