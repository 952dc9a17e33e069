// ABOUTME: Immutable run configuration assembled from command line arguments
// ABOUTME: Applies the positional-argument rules and the env whitelist states

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::warn;

use super::args::Args;
use crate::data::DataFormat;
use crate::envvar::Whitelist;

/// Where the data document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read from standard input in the given format.
    Stdin(DataFormat),
    /// Read from a file; the format is inferred from its extension.
    File(PathBuf),
}

/// Frozen configuration for one run, built from the arguments before any
/// loading or parsing begins.
#[derive(Debug, Clone)]
pub struct Config {
    pub template_files: Vec<PathBuf>,
    pub inline_templates: Vec<String>,
    /// `None` disables the env function entirely; `Some` enables it with the
    /// given (possibly empty) whitelist.
    pub env: Option<Whitelist>,
    pub data: DataSource,
    pub strict: bool,
    pub verbose: bool,
}

impl Config {
    /// Build the run configuration from parsed arguments. With no -i/-e the
    /// first positional argument is consumed as the single template file and
    /// the rest shift down; the next positional, if any, names the data file.
    pub fn from_args(args: Args) -> Result<Self> {
        let env = if args.env_enabled() {
            Some(Whitelist::new(args.env_names()))
        } else {
            None
        };

        let mut template_files = args.template_files;
        let mut positional = args.args.into_iter();

        if template_files.is_empty() && args.inline_templates.is_empty() {
            match positional.next() {
                Some(path) => template_files.push(PathBuf::from(path)),
                None => bail!("missing input template arguments"),
            }
        }

        let data = match positional.next() {
            Some(path) => DataSource::File(PathBuf::from(path)),
            None => {
                let format = if args.yaml {
                    DataFormat::Yaml
                } else {
                    DataFormat::Json
                };
                DataSource::Stdin(format)
            }
        };

        let extra = positional.count();
        if extra > 0 {
            warn!("Ignoring {} extra positional argument(s)", extra);
        }

        Ok(Self {
            template_files,
            inline_templates: args.inline_templates,
            env,
            data,
            strict: args.strict,
            verbose: args.verbose,
        })
    }
}
