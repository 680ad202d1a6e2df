//! Ordered component registry
//!
//! Components are registered explicitly at process start. Registration order
//! is composition order.

use std::sync::Arc;

use amp_common::{Error, Result};

use crate::component::Component;
use crate::globals::Globals;
use crate::zync::{Zync, ZyncOptionsProvider};
use crate::zync_cron::{ZyncCron, ZyncCronOptionsProvider};

/// Components in composition order, unique by name
#[derive(Default)]
pub struct ComponentRegistry {
    components: Vec<Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component, rejecting a name that is already registered
    pub fn register<C: Component + 'static>(mut self, component: C) -> Result<Self> {
        if self.get(component.name()).is_some() {
            return Err(Error::registration(component.name()));
        }
        self.components.push(Box::new(component));
        Ok(self)
    }

    /// Registered names in composition order
    pub fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Look up a component by name
    pub fn get(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn components_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut self.components
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.names())
            .finish()
    }
}

/// The platform's components in their default order: globals, zync,
/// zync-cron
pub fn platform_registry<P>(provider: Arc<P>) -> Result<ComponentRegistry>
where
    P: ZyncOptionsProvider + ZyncCronOptionsProvider + 'static,
{
    ComponentRegistry::new()
        .register(Globals::new())?
        .register(Zync::new(provider.clone()))?
        .register(ZyncCron::new(provider))
}
