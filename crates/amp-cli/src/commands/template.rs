//! Template command: compose every component into one template

use std::io::Write;

use clap::Args;

use amp_common::Template;
use amp_component::ResolvedConfig;

use super::{emit, platform_driver, OutputFormat};
use crate::Result;

const DISPLAY_NAME_ANNOTATION: &str = "openshift.io/display-name";

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template name
    #[arg(long, default_value = "3scale-api-management")]
    pub name: String,

    /// Human readable name shown in the catalog
    #[arg(long)]
    pub display_name: Option<String>,

    /// Message shown after the template is instantiated
    #[arg(long)]
    pub message: Option<String>,
}

pub fn run(
    args: TemplateArgs,
    config: Option<ResolvedConfig>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut template = Template::new(&args.name);
    if let Some(display_name) = args.display_name {
        template = template.with_annotation(DISPLAY_NAME_ANNOTATION, display_name);
    }
    if let Some(message) = args.message {
        template = template.with_message(message);
    }

    platform_driver(config)?.run_into(&mut template)?;
    emit(&template, format, out)
}
