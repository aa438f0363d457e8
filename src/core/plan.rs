//! Command assembly
//!
//! An [`Invocation`] is a typed description of one external command:
//! program, ordered arguments and an optional working directory. The
//! invoker builds an [`InvocationPlan`] from resolved tool paths and hands
//! each invocation to a [`crate::core::invoker::CommandRunner`].
//!
//! Program and arguments are kept as OS strings so resolved paths reach the
//! child byte for byte. Only `Display` and JSON output are lossy.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::config::defaults::CONFIGURE_TOOL;
use crate::core::settings::toolchain_file;
use crate::core::toolchain::ResolvedPaths;

/// External stage an invocation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// CMake configure step
    Configure,
    /// Ninja build step
    Build,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Configure => write!(f, "CMake"),
            Stage::Build => write!(f, "ninja"),
        }
    }
}

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Stage this command implements
    pub stage: Stage,
    /// Program name or absolute path
    #[serde(serialize_with = "lossy")]
    pub program: OsString,
    /// Arguments, in order
    #[serde(serialize_with = "lossy_seq")]
    pub args: Vec<OsString>,
    /// Working directory override; `None` runs in the current directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation with no arguments
    pub fn new(stage: Stage, program: impl Into<OsString>) -> Self {
        Self {
            stage,
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a `-D NAME=VALUE` cache definition as two arguments
    pub fn define(self, name: &str, value: &Path) -> Self {
        let mut definition = OsString::from(format!("{name}="));
        definition.push(value);
        self.arg("-D").arg(definition)
    }

    /// Program as text, for messages
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Run in `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        if let Some(dir) = &self.current_dir {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}

/// Commands of one run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationPlan {
    /// Invocations to execute
    pub invocations: Vec<Invocation>,
}

impl InvocationPlan {
    /// Assemble the configure step and, when `build_dir` is given, the build step
    pub fn assemble(
        paths: &ResolvedPaths,
        toolchain_root: &Path,
        preset: &str,
        build_dir: Option<&Path>,
    ) -> Self {
        let mut invocations = vec![configure_invocation(paths, toolchain_root, preset)];
        if let Some(dir) = build_dir {
            invocations.push(build_invocation(paths, dir));
        }
        Self { invocations }
    }

    /// Iterate the invocations in order
    pub fn iter(&self) -> impl Iterator<Item = &Invocation> {
        self.invocations.iter()
    }
}

#[allow(clippy::ptr_arg)]
fn lossy<S: Serializer>(value: &OsString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string_lossy())
}

#[allow(clippy::ptr_arg)]
fn lossy_seq<S: Serializer>(values: &Vec<OsString>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|v| v.to_string_lossy()))
}

/// `cmake --preset=<preset> -D ...` with the resolved toolchain
pub fn configure_invocation(
    paths: &ResolvedPaths,
    toolchain_root: &Path,
    preset: &str,
) -> Invocation {
    Invocation::new(Stage::Configure, CONFIGURE_TOOL)
        .arg(format!("--preset={preset}"))
        .define("CMAKE_MAKE_PROGRAM", &paths.make_program)
        .define("CMAKE_CXX_COMPILER", &paths.cxx_compiler)
        .define("CMAKE_C_COMPILER", &paths.c_compiler)
        .define("CMAKE_TOOLCHAIN_FILE", &toolchain_file(toolchain_root))
}

/// The build driver with no arguments, run inside `build_dir`
pub fn build_invocation(paths: &ResolvedPaths, build_dir: &Path) -> Invocation {
    Invocation::new(Stage::Build, paths.make_program.as_os_str()).in_dir(build_dir)
}
