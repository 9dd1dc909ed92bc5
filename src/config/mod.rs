//! Run configuration for deploy-keygen
//!
//! Everything a run needs is collected once at startup into a [`Config`]
//! and passed by reference to each step:
//! - where to find `ssh-keygen`
//! - key size and output location
//! - which mount prefixes count as external storage

mod allowed;
mod settings;

pub use allowed::AllowedPaths;
pub use settings::{Config, DEFAULT_BITS, KEYGEN_PROGRAM, PUBLIC_KEY_SUFFIX};
