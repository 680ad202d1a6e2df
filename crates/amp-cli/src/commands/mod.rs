//! CLI commands

use std::io::Write;
use std::sync::Arc;

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use amp_component::{
    platform_registry, CompositionDriver, ResolvedConfig, ResolvedOptionsProvider,
    TemplateOptionsProvider,
};

use crate::Result;

pub mod components;
pub mod objects;
pub mod template;

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Serialize a value in the requested format and write it out
pub fn emit<T: Serialize>(value: &T, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, value)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Driver over the platform registry, in resolved mode when a config is
/// given and template mode otherwise
pub fn platform_driver(config: Option<ResolvedConfig>) -> Result<CompositionDriver> {
    let registry = match config {
        Some(config) => {
            info!("composing with resolved values");
            platform_registry(Arc::new(ResolvedOptionsProvider::new(config)))?
        }
        None => {
            info!("composing with parameter placeholders");
            platform_registry(Arc::new(TemplateOptionsProvider))?
        }
    };
    Ok(CompositionDriver::new(registry))
}
