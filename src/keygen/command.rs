//! Assembling and running the `ssh-keygen` invocation

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{DeployKeyError, Result};

/// A fully assembled `ssh-keygen` call.
///
/// Always: output file, empty passphrase, empty comment. The bit size is
/// only passed when non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl KeygenCommand {
    pub fn new(program: &Path, output: &Path, bits: u32) -> Self {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            output.as_os_str().to_os_string(),
            "-N".into(),
            "".into(),
            "-C".into(),
            "".into(),
        ];
        if bits != 0 {
            args.push("-b".into());
            args.push(bits.to_string().into());
        }

        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    /// Run to completion with inherited stdio.
    ///
    /// `ssh-keygen` reports its own diagnostics on the console, so only the
    /// exit status is inspected here.
    pub fn run(&self) -> Result<()> {
        debug!(command = %self, "Spawning ssh-keygen");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| DeployKeyError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(DeployKeyError::SubprocessFailure {
                program: self.program.clone(),
                status,
            });
        }

        info!(%status, "ssh-keygen finished");
        Ok(())
    }
}

/// Program and arguments joined with single spaces
impl fmt::Display for KeygenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
