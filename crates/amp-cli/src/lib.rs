//! amp-template CLI library

pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::OutputFormat;

/// amp-template - compose the platform's deployment template
#[derive(Parser, Debug)]
#[command(name = "amp-template")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Resolved values file (default: $AMP_TEMPLATE_CONFIG, else placeholders)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose every component into one template
    Template(commands::template::TemplateArgs),
    /// Print one component's objects as a List
    Objects(commands::objects::ObjectsArgs),
    /// List registered components in composition order
    Components,
}

impl Cli {
    /// Run the CLI command, writing results to `out`
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        match self.command {
            Commands::Template(args) => {
                let config = config::resolve_config(self.config.as_deref())?;
                commands::template::run(args, config, self.output, out)
            }
            Commands::Objects(args) => {
                let config = config::resolve_config(self.config.as_deref())?;
                commands::objects::run(args, config, self.output, out)
            }
            Commands::Components => commands::components::run(out),
        }
    }
}
