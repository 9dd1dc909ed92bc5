//! Locating the `ssh-keygen` executable

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::KEYGEN_PROGRAM;
use crate::error::{DeployKeyError, Result};
use crate::platform::{self, Platform};

/// Resolve the executable to run.
///
/// An explicit path is returned as-is; whether it exists is only discovered
/// when it is launched. Otherwise `PATH` is searched.
pub fn resolve_executable(explicit: Option<&Path>, platform: Platform) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Using explicit ssh-keygen");
        return Ok(path.to_path_buf());
    }

    let search_path = std::env::var_os("PATH");
    find_executable(search_path.as_deref(), platform)
}

/// Search `search_path` (a `PATH`-style list) for `ssh-keygen`
pub fn find_executable(search_path: Option<&OsStr>, platform: Platform) -> Result<PathBuf> {
    // Only consulted for names containing a separator
    let cwd = std::env::current_dir().unwrap_or_default();

    if let Ok(path) = which::which_in(KEYGEN_PROGRAM, search_path, cwd) {
        debug!(path = %path.display(), "Found ssh-keygen");
        return Ok(path);
    }

    // GUI and service sessions can have a trimmed PATH; the system
    // OpenSSH install still lives under System32.
    #[cfg(windows)]
    if let Some(root) = std::env::var_os("SystemRoot") {
        let path = Path::new(&root)
            .join("System32")
            .join("OpenSSH")
            .join("ssh-keygen.exe");
        if path.is_file() {
            debug!(path = %path.display(), "Found ssh-keygen in System32");
            return Ok(path);
        }
    }

    Err(DeployKeyError::ExecutableNotFound {
        hint: platform::install_hint(platform),
    })
}
