//! The four steps of a deploy key run
//!
//! Resolve → Validate (optional) → Invoke → Report. Each step takes its
//! inputs explicitly so it can be exercised on its own.

mod command;
mod report;
mod resolve;
mod validate;

pub use command::KeygenCommand;
pub use report::{public_key_path, read_public_key, PublicKeyInfo};
pub use resolve::{find_executable, resolve_executable};
pub use validate::{canonicalize, validate_output_path};
