//! External URLs shown in user guidance

/// Where to get vcpkg when `VCPKG_ROOT` is missing
pub const VCPKG_INSTALL: &str = "https://vcpkg.io/en/";
