// ABOUTME: Error types for whitelist-gated environment variable access
// ABOUTME: Defines the policy violations raised by the env template function

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("no environment variable has been whitelisted (use --env=name1,name2)")]
    WhitelistRequired,

    #[error("environment variable {name:?} is not whitelisted (use --env=name1,name2)")]
    NotWhitelisted { name: String },
}

pub type Result<T> = std::result::Result<T, EnvError>;
