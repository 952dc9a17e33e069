// ABOUTME: Main application orchestration for the stencil CLI
// ABOUTME: Coordinates logging, template assembly, data loading, and rendering

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::config::DataSource;
use super::{Args, Config};
use crate::data::DataLoader;
use crate::template::TemplateEngine;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create the application from command line arguments.
    pub fn from_args() -> Result<Self> {
        let args = Args::parse_args();
        let config = Config::from_args(args)?;
        Ok(Self::new(config))
    }

    /// Initialize logging. Diagnostics go to stderr; stdout carries only the
    /// rendered document.
    fn init_logging(&self) {
        let default_level = if self.config.verbose { "debug" } else { "warn" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Run the render pipeline: assemble templates, load the data document,
    /// and stream the entry template to standard output.
    pub fn run(&self) -> Result<()> {
        self.init_logging();
        debug!("stencil v{} starting", crate::VERSION);

        let mut engine = TemplateEngine::new(self.config.env.clone());

        for source in &self.config.inline_templates {
            engine.add_inline(source)?;
        }
        for path in &self.config.template_files {
            engine.add_file(path)?;
        }
        debug!("Entry template: {:?}", engine.entry_template());

        let loader = DataLoader::new(self.config.strict);
        let data = match &self.config.data {
            DataSource::File(path) => loader.load_file(path)?,
            DataSource::Stdin(format) => {
                debug!("Reading {:?} data from stdin", format);
                let stdin = io::stdin();
                loader.load_reader(stdin.lock(), *format)?
            }
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        engine.render_to(&data, &mut out)?;
        out.flush()
            .map_err(|e| anyhow!("Failed to flush standard output: {e}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_app_creation_from_config() {
        let args = Args::try_parse_from(["stencil", "-e", "{{name}}"]).unwrap();
        let config = Config::from_args(args).unwrap();
        let app = App::new(config);
        assert!(app.config.template_files.is_empty());
        assert_eq!(app.config.inline_templates, vec!["{{name}}".to_string()]);
    }
}
