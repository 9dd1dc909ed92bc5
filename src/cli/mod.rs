//! Command-line surface

pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{AllowedPaths, Config, DEFAULT_BITS};

/// Generate a deploy key on an external drive
#[derive(Parser, Debug)]
#[command(name = "deploy-keygen", version, about, long_about = None)]
pub struct Args {
    /// Deploy key filename
    pub id_rsa: PathBuf,

    /// Allow generating keys in any path
    #[arg(long = "no-check-path", action = ArgAction::SetFalse)]
    pub check_path: bool,

    /// Key size in bits (0 lets ssh-keygen decide)
    #[arg(short, long, default_value_t = DEFAULT_BITS)]
    pub bits: u32,

    /// Custom ssh-keygen executable
    #[arg(long = "ssh-keygen", value_name = "PATH", env = "DEPLOY_KEYGEN_SSH_KEYGEN")]
    pub ssh_keygen: Option<PathBuf>,

    /// Extra mount prefix treated as external storage (repeatable)
    #[arg(long = "allow-prefix", value_name = "PREFIX")]
    pub allow_prefix: Vec<String>,
}

impl Args {
    /// Build the run configuration for the current host
    pub fn into_config(self) -> Config {
        let mut allowed = AllowedPaths::platform_default();
        allowed.extend(self.allow_prefix);

        Config::new(self.id_rsa)
            .with_executable(self.ssh_keygen)
            .with_bits(self.bits)
            .with_path_check(self.check_path)
            .with_allowed_paths(allowed)
    }
}
