//! Immutable run settings

use std::path::PathBuf;

use crate::platform::Platform;

use super::AllowedPaths;

/// Default RSA key size
pub const DEFAULT_BITS: u32 = 4096;

/// Executable name searched on `PATH`
pub const KEYGEN_PROGRAM: &str = "ssh-keygen";

/// Suffix `ssh-keygen` appends for the public half
pub const PUBLIC_KEY_SUFFIX: &str = ".pub";

/// Settings for one key generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit `ssh-keygen` path, skips the `PATH` search
    pub executable: Option<PathBuf>,
    /// Key size; `0` leaves it to `ssh-keygen`
    pub bits: u32,
    /// Private key destination
    pub output: PathBuf,
    /// Reject outputs outside `allowed_paths`
    pub enforce_path_check: bool,
    pub allowed_paths: AllowedPaths,
    pub platform: Platform,
}

impl Config {
    /// Settings with defaults for the current host
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            executable: None,
            bits: DEFAULT_BITS,
            output: output.into(),
            enforce_path_check: true,
            allowed_paths: AllowedPaths::platform_default(),
            platform: crate::platform::detect(),
        }
    }

    pub fn with_executable(mut self, executable: Option<PathBuf>) -> Self {
        self.executable = executable;
        self
    }

    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    pub fn with_path_check(mut self, enforce: bool) -> Self {
        self.enforce_path_check = enforce;
        self
    }

    pub fn with_allowed_paths(mut self, allowed_paths: AllowedPaths) -> Self {
        self.allowed_paths = allowed_paths;
        self
    }
}
