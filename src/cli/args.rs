// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flag surface for template sources, env access, and data format

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Render Handlebars templates against JSON or YAML data")]
#[command(version)]
pub struct Args {
    /// Template file to load (repeatable; the first becomes the entry template)
    #[arg(short = 'i', long = "template", value_name = "FILE")]
    pub template_files: Vec<PathBuf>,

    /// Inline template source (repeatable; a later source replaces an earlier one)
    #[arg(short = 'e', long = "inline", value_name = "TEMPLATE")]
    pub inline_templates: Vec<String>,

    /// Enable the env template function, optionally whitelisting variable names
    #[arg(
        long = "env",
        value_name = "NAME1,NAME2",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        action = ArgAction::Append
    )]
    pub env: Vec<String>,

    /// Parse standard-input data as YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,

    /// Treat duplicate mapping keys in YAML data as an error
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Template file (when no -i/-e was given), then the data file; data is
    /// read from standard input when no data file is given
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether the env function was enabled at all.
    pub fn env_enabled(&self) -> bool {
        !self.env.is_empty()
    }

    /// Whitelisted names accumulated across --env occurrences. A bare --env
    /// contributes no names.
    pub fn env_names(&self) -> Vec<String> {
        self.env
            .iter()
            .flat_map(|value| value.split(','))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}
