use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeployKeyError>;

#[derive(Debug, Error)]
pub enum DeployKeyError {
    #[error("`ssh-keygen` not found. {hint}")]
    ExecutableNotFound { hint: &'static str },

    #[error(
        "`{}` is not on external storage. Key must be generated in-place on the SD card or USB drive (or pass --no-check-path).",
        .path.display()
    )]
    DisallowedPath { path: PathBuf },

    #[error("Failed to run `{}`: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` failed ({status})", .program.display())]
    SubprocessFailure { program: PathBuf, status: ExitStatus },

    #[error("Public key `{}` was not produced: {source}", .path.display())]
    MissingOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Public key `{}` is empty", .path.display())]
    EmptyOutput { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
