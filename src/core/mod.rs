//! Core business logic module
//!
//! Tool selection, run configuration, command assembly and the staged
//! invoker. Process spawning and PATH lookup live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`toolchain`] - Compiler families and tool discovery
//! - [`settings`] - Run configuration and vcpkg root validation
//! - [`plan`] - Typed external command invocations
//! - [`invoker`] - Configure/build orchestration

pub mod invoker;
pub mod plan;
pub mod settings;
pub mod toolchain;
