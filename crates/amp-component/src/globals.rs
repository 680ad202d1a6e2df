//! Template-wide parameters shared by every component

use amp_common::{Object, Parameter, Result, Template};

use crate::component::{Component, Siblings};

/// Component name
pub const GLOBALS_COMPONENT: &str = "globals";

/// Parameter every component's `app` label points at
pub const APP_LABEL_PARAMETER: &str = "APP_LABEL";

/// Value `APP_LABEL` takes unless overridden at deployment time
pub const DEFAULT_APP_LABEL: &str = "3scale-api-management";

/// Declares the template-wide parameters. Contributes no objects.
#[derive(Debug, Default)]
pub struct Globals;

impl Globals {
    /// Create the component
    pub fn new() -> Self {
        Self
    }

    /// Parameters this component declares
    pub fn parameters() -> Vec<Parameter> {
        vec![Parameter::literal(APP_LABEL_PARAMETER, DEFAULT_APP_LABEL).required()]
    }
}

impl Component for Globals {
    fn name(&self) -> &'static str {
        GLOBALS_COMPONENT
    }

    fn assemble(&mut self, template: &mut Template, _siblings: &Siblings<'_>) -> Result<()> {
        template.add_parameters(Self::parameters());
        Ok(())
    }

    fn get_objects(&self) -> Result<Vec<Object>> {
        Ok(Vec::new())
    }
}
