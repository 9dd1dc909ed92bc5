//! Deploy keygen - SSH deploy keys generated in place on external storage
//!
//! This crate wraps `ssh-keygen` so that deploy private keys:
//! - Are only written under removable-media mount points
//! - Have no passphrase and an empty comment
//! - Never touch the system disk by accident

pub mod cli;
pub mod config;
pub mod error;
pub mod keygen;
pub mod platform;

pub use error::{DeployKeyError, Result};
