//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! project directory with a private `bin/` holding fake tools, and a helper
//! that runs the vcbuild binary with `PATH` restricted to that directory.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Fake tool that succeeds without doing anything
pub const NOOP_TOOL: &str = "#!/bin/sh\nexit 0\n";

/// Test project context
///
/// Creates a temporary directory for the project and a `bin/` directory
/// that becomes the only entry on `PATH` when vcbuild is run.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding fake tools, the only `PATH` entry
    bin: PathBuf,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self::with_bin_name(OsStr::new("bin"))
    }

    /// Create a test project whose fake tool directory is called `name`
    pub fn with_bin_name(name: &OsStr) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let bin = dir.path().join(name);
        std::fs::create_dir(&bin).expect("Failed to create bin directory");
        Self { dir, bin }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Directory holding fake tools
    pub fn bin_dir(&self) -> PathBuf {
        self.bin.clone()
    }

    /// File fake tools append their invocations to
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Install an executable shell script as `bin/<name>`
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        std::fs::write(&path, script).expect("Failed to write fake tool");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to make fake tool executable");
    }

    /// Install a fake tool that logs its arguments and exits with `code`
    #[cfg(unix)]
    pub fn install_recording_tool(&self, name: &str, code: i32) {
        let script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> '{}'\nexit {code}\n",
            self.log_path().display()
        );
        self.install_tool(name, &script);
    }

    /// Install a fake build driver that logs its working directory
    #[cfg(unix)]
    pub fn install_build_driver(&self, code: i32) {
        let script = format!(
            "#!/bin/sh\necho \"ninja cwd=$(pwd) args=$#\" >> '{}'\nexit {code}\n",
            self.log_path().display()
        );
        self.install_tool("ninja", &script);
    }

    /// Install compilers for both families
    #[cfg(unix)]
    pub fn install_compilers(&self) {
        for name in ["gcc", "g++", "clang", "clang++"] {
            self.install_tool(name, NOOP_TOOL);
        }
    }

    /// Raw bytes of the call log, empty if nothing ran
    pub fn calls_raw(&self) -> Vec<u8> {
        std::fs::read(self.log_path()).unwrap_or_default()
    }

    /// Recorded tool invocations, one per line
    pub fn calls(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.calls_raw())
            .lines()
            .map(String::from)
            .collect()
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Run vcbuild in the project with PATH set to the fake `bin/`
    pub fn run(&self, args: &[&str], vcpkg_root: Option<&str>) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vcbuild"));
        cmd.current_dir(self.path());
        cmd.env("PATH", self.bin_dir());
        cmd.env_remove("RUST_LOG");
        match vcpkg_root {
            Some(root) => cmd.env("VCPKG_ROOT", root),
            None => cmd.env_remove("VCPKG_ROOT"),
        };
        cmd.args(args);
        cmd.output().expect("Failed to execute vcbuild")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
