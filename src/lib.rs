// ABOUTME: Library crate for the stencil template renderer
// ABOUTME: Exports the CLI, data loading, env access, and template modules

pub mod cli;
pub mod data;
pub mod envvar;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config, DataSource};
pub use data::{DataFormat, DataLoader};
pub use envvar::{EnvAccess, Whitelist};
pub use template::TemplateEngine;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
