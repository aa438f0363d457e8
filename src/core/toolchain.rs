//! Compiler family selection and tool discovery
//!
//! Maps a [`CompilerFamily`] onto concrete executable names and resolves
//! those names to absolute paths through a [`ToolLocator`]. The locator is
//! a trait so tests can substitute a fixed table for the real PATH search
//! in [`crate::infra::locator`].

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::defaults::BUILD_DRIVER;
use crate::error::DiscoveryError;

/// Supported compiler families
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompilerFamily {
    /// GNU toolchain: gcc / g++
    Gcc,
    /// LLVM toolchain: clang / clang++
    Clang,
}

impl CompilerFamily {
    /// Executable names for this family
    pub fn compilers(self) -> CompilerPair {
        match self {
            CompilerFamily::Gcc => CompilerPair {
                c: "gcc",
                cxx: "g++",
            },
            CompilerFamily::Clang => CompilerPair {
                c: "clang",
                cxx: "clang++",
            },
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerFamily::Gcc => write!(f, "gcc"),
            CompilerFamily::Clang => write!(f, "clang"),
        }
    }
}

/// C and C++ compiler executable names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerPair {
    /// C compiler name
    pub c: &'static str,
    /// C++ compiler name
    pub cxx: &'static str,
}

/// Absolute paths of the compilers for one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompilers {
    /// C compiler path
    pub c: PathBuf,
    /// C++ compiler path
    pub cxx: PathBuf,
}

/// Every tool path the configure and build stages need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// C compiler path
    pub c_compiler: PathBuf,
    /// C++ compiler path
    pub cxx_compiler: PathBuf,
    /// Build driver path
    pub make_program: PathBuf,
}

impl ResolvedPaths {
    /// Combine resolved compilers with the resolved build driver
    pub fn new(compilers: ResolvedCompilers, make_program: PathBuf) -> Self {
        Self {
            c_compiler: compilers.c,
            cxx_compiler: compilers.cxx,
            make_program,
        }
    }
}

/// Host command lookup
pub trait ToolLocator {
    /// Absolute path of the executable `name`, or `None` if it cannot be found
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Resolve a single tool, treating an empty path the same as a missing one
pub fn resolve_tool(locator: &impl ToolLocator, name: &str) -> Result<PathBuf, DiscoveryError> {
    match locator.locate(name) {
        Some(path) if !is_empty(&path) => {
            tracing::debug!("Resolved {name} -> {}", path.display());
            Ok(path)
        }
        _ => Err(DiscoveryError::ToolNotFound {
            tool: name.to_string(),
        }),
    }
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Resolve the C++ and then the C compiler of `family`
pub fn resolve_compilers(
    locator: &impl ToolLocator,
    family: CompilerFamily,
) -> Result<ResolvedCompilers, DiscoveryError> {
    let names = family.compilers();
    let cxx = resolve_tool(locator, names.cxx)?;
    let c = resolve_tool(locator, names.c)?;
    Ok(ResolvedCompilers { c, cxx })
}

/// Resolve the build driver
pub fn resolve_build_driver(locator: &impl ToolLocator) -> Result<PathBuf, DiscoveryError> {
    resolve_tool(locator, BUILD_DRIVER)
}
