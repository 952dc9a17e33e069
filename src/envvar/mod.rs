// ABOUTME: Environment variable access module
// ABOUTME: Exports the whitelist model and the gated accessor used by templates

pub mod access;
pub mod error;

pub use access::{EnvAccess, Whitelist};
pub use error::EnvError;
