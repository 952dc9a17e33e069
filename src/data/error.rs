// ABOUTME: Error types for data loading and normalization
// ABOUTME: Defines failures for JSON/YAML decoding, format detection, and pointer resolution

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data source: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported data file extension: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Duplicate mapping key after normalization: {key:?}")]
    DuplicateKey { key: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("Invalid JSON pointer syntax: {pointer:?}")]
    Syntax { pointer: String },

    #[error("JSON pointer not found: {pointer:?}")]
    NotFound { pointer: String },
}

pub type Result<T> = std::result::Result<T, DataError>;
