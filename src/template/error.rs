// ABOUTME: Error types for template assembly and execution
// ABOUTME: Defines failures for reading, parsing, and rendering templates

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse template {name:?}: {source}")]
    ParseError {
        name: String,
        source: handlebars::TemplateError,
    },

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
