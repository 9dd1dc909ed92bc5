//! Output path validation against external-storage prefixes

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::AllowedPaths;
use crate::error::{DeployKeyError, Result};

/// Symlink hops followed before giving up (matches Linux `MAXSYMLINKS`)
const MAX_SYMLINK_HOPS: u32 = 40;

/// Canonicalize `path` and require it to be under an allowed prefix.
///
/// Returns the canonical path, which is what should be handed to
/// `ssh-keygen`.
pub fn validate_output_path(path: &Path, allowed: &AllowedPaths) -> Result<PathBuf> {
    let real = canonicalize(path)?;

    match allowed.matching_prefix(&real) {
        Some(prefix) => {
            debug!(path = %real.display(), prefix, "Output path allowed");
            Ok(real)
        }
        None => Err(DeployKeyError::DisallowedPath { path: real }),
    }
}

/// Absolute, symlink-free form of `path`.
///
/// Works like `realpath(3)` without requiring the final components to
/// exist: existing components are resolved through the filesystem, the rest
/// are appended with `.` dropped and `..` removing the previous component.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(strip_verbatim(resolve(&absolute, 0)?))
}

fn resolve(path: &Path, hops: u32) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                match fs::canonicalize(&resolved) {
                    Ok(real) => resolved = real,
                    // Dangling symlink: the tool would write through it, so
                    // its target is what has to be checked
                    Err(_) => {
                        if let Ok(target) = fs::read_link(&resolved) {
                            if hops >= MAX_SYMLINK_HOPS {
                                return Err(io::Error::new(
                                    io::ErrorKind::Other,
                                    "too many levels of symbolic links",
                                ));
                            }
                            let base = resolved.parent().map(Path::to_path_buf).unwrap_or_default();
                            resolved = resolve(&base.join(target), hops + 1)?;
                        }
                    }
                }
            }
        }
    }

    Ok(resolved)
}

/// `fs::canonicalize` on Windows returns `\\?\E:\...`, which would never
/// match a drive-root prefix
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        if !rest.starts_with(r"UNC\") {
            return PathBuf::from(rest);
        }
    }
    path
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}
