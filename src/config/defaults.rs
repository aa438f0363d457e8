//! Default configuration values

/// Environment variable holding the vcpkg installation root
pub const TOOLCHAIN_ROOT_ENV: &str = "VCPKG_ROOT";

/// vcpkg's CMake integration script, relative to the vcpkg root
pub const TOOLCHAIN_FILE_SUBPATH: &str = "scripts/buildsystems/vcpkg.cmake";

/// Configuration tool, invoked by name
pub const CONFIGURE_TOOL: &str = "cmake";

/// Build driver, resolved to an absolute path before use
pub const BUILD_DRIVER: &str = "ninja";

/// CMake preset passed to the configure step
pub const DEFAULT_PRESET: &str = "vcpkg";

/// Output directory, relative to the working directory
pub const DEFAULT_BUILD_DIR: &str = "build";
