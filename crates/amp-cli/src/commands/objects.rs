//! Objects command: one component's objects as a List

use std::io::Write;

use clap::Args;

use amp_common::ObjectList;
use amp_component::ResolvedConfig;

use super::{emit, platform_driver, OutputFormat};
use crate::{Error, Result};

#[derive(Args, Debug)]
pub struct ObjectsArgs {
    /// Component whose objects to print
    pub component: String,
}

pub fn run(
    args: ObjectsArgs,
    config: Option<ResolvedConfig>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let driver = platform_driver(config)?;
    let objects = driver
        .get_objects(&args.component)
        .ok_or_else(|| Error::unknown_component(&args.component, &driver.component_names()))??;

    emit(&ObjectList::new(objects), format, out)
}
