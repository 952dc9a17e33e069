// ABOUTME: Template assembly and execution on top of Handlebars
// ABOUTME: Collects inline and file template sources and streams the entry template

use std::io::Write;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::helpers;
use crate::envvar::Whitelist;

/// Name under which inline template sources are registered.
pub const ROOT_TEMPLATE: &str = "";

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    entry: Option<String>,
}

impl TemplateEngine {
    /// Create an engine with the function library bound. `env` carries the
    /// whitelist when environment access is enabled; `None` leaves the env
    /// function unregistered entirely.
    pub fn new(env: Option<Whitelist>) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Plain text output, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars, env);

        Self {
            handlebars,
            entry: None,
        }
    }

    /// Register an inline template source under the anonymous root name. A
    /// later inline source replaces an earlier one.
    pub fn add_inline(&mut self, source: &str) -> Result<()> {
        self.handlebars
            .register_template_string(ROOT_TEMPLATE, source)
            .map_err(|e| TemplateError::ParseError {
                name: "inline template".to_string(),
                source: e,
            })
    }

    /// Register a file template source under its base filename. The first
    /// file registered becomes the entry template; any registered template
    /// can be referenced from another as a partial, by name.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.handlebars
            .register_template_string(&name, source)
            .map_err(|e| TemplateError::ParseError {
                name: name.clone(),
                source: e,
            })?;

        debug!("Registered template {:?} from {}", name, path.display());
        if self.entry.is_none() {
            self.entry = Some(name);
        }
        Ok(())
    }

    /// Name of the template selected for execution: the base filename of the
    /// first file source, or the anonymous root when only inline sources were
    /// given.
    pub fn entry_template(&self) -> &str {
        self.entry.as_deref().unwrap_or(ROOT_TEMPLATE)
    }

    /// Execute the entry template against `data`, streaming output into
    /// `writer` as it is produced. Output already written stays written when
    /// rendering fails partway through.
    pub fn render_to<W: Write>(&self, data: &JsonValue, writer: W) -> Result<()> {
        self.handlebars
            .render_to_write(self.entry_template(), data, writer)?;
        Ok(())
    }

    /// Execute the entry template against `data` and return the full result.
    pub fn render(&self, data: &JsonValue) -> Result<String> {
        let rendered = self.handlebars.render(self.entry_template(), data)?;
        Ok(rendered)
    }
}
