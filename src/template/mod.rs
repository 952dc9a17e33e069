// ABOUTME: Template module combining the function library and the executor
// ABOUTME: Exports the engine, helper registration, and template error types

pub mod engine;
pub mod error;
pub mod helpers;

pub use engine::{TemplateEngine, ROOT_TEMPLATE};
pub use error::{Result, TemplateError};
