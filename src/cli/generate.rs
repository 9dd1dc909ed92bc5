//! Deploy key generation: Resolve → Validate → Invoke → Report

use std::io::Write;

use colored::Colorize;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::keygen::{self, KeygenCommand, PublicKeyInfo};

/// Instruction printed above the public key
pub const DEPLOY_KEY_INSTRUCTIONS: &str =
    "Add this public key to github deploy keys with customer name:";

/// Generate the key pair described by `config`, writing progress to `out`.
///
/// Every failure ends the run. Files `ssh-keygen` already wrote are left
/// in place.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<PublicKeyInfo> {
    let program = keygen::resolve_executable(config.executable.as_deref(), config.platform)?;

    let output = if config.enforce_path_check {
        keygen::validate_output_path(&config.output, &config.allowed_paths)?
    } else {
        warn!(path = %config.output.display(), "Path check disabled");
        config.output.clone()
    };

    let command = KeygenCommand::new(&program, &output, config.bits);
    writeln!(out, "{} {}", "Running:".cyan(), command)?;
    // ssh-keygen shares the terminal
    out.flush()?;

    command.run()?;

    let public_key = keygen::read_public_key(&output)?;

    writeln!(out)?;
    writeln!(out, "{}", DEPLOY_KEY_INSTRUCTIONS.bold())?;
    writeln!(out)?;
    writeln!(out, "{}", public_key.line)?;

    if let (Some(algorithm), Some(fingerprint)) = (&public_key.algorithm, &public_key.fingerprint) {
        writeln!(out)?;
        writeln!(out, "{}", format!("{algorithm} {fingerprint}").dimmed())?;
    }

    Ok(public_key)
}
