//! The component contract
//!
//! Composition runs in two passes over every registered component:
//!
//! 1. `assemble`: obtain options, append parameters, then append objects.
//! 2. `post_process`: decorate objects already in the template. Runs only
//!    after every component has assembled, so all sibling objects exist.

use amp_common::{Object, Result, Template};

/// A deployable piece of the platform.
///
/// Components own their options and resource factories. They borrow the
/// template for the duration of a pass and see other components only through
/// [`Siblings`], which never grants mutable access.
pub trait Component {
    /// Unique component name used for registration and sibling lookup
    fn name(&self) -> &'static str;

    /// Obtain options, then append this component's parameters followed by
    /// its objects.
    fn assemble(&mut self, template: &mut Template, siblings: &Siblings<'_>) -> Result<()>;

    /// Decorate objects already in the template once every component has
    /// assembled. Most components have nothing to do here.
    fn post_process(&mut self, _template: &mut Template, _siblings: &Siblings<'_>) -> Result<()> {
        Ok(())
    }

    /// Build this component's objects from freshly obtained options without
    /// touching a template.
    fn get_objects(&self) -> Result<Vec<Object>>;

    /// Names of the secret objects this component publishes for its peers
    fn provided_secrets(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Read-only, name-based view of the other components in a composition run
#[derive(Clone, Copy)]
pub struct Siblings<'a> {
    before: &'a [Box<dyn Component>],
    after: &'a [Box<dyn Component>],
}

impl<'a> Siblings<'a> {
    /// View over the components registered before and after the current one
    pub fn new(before: &'a [Box<dyn Component>], after: &'a [Box<dyn Component>]) -> Self {
        Self { before, after }
    }

    /// A view with no siblings
    pub fn none() -> Self {
        Self {
            before: &[],
            after: &[],
        }
    }

    /// Look up a sibling by component name
    pub fn get(&self, name: &str) -> Option<&'a dyn Component> {
        self.iter().find(|c| c.name() == name)
    }

    /// Whether a sibling with the given name is visible
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Visible siblings in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Component> + 'a {
        self.before
            .iter()
            .chain(self.after.iter())
            .map(|c| c.as_ref() as &'a dyn Component)
    }

    /// Number of visible siblings
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    /// Whether no siblings are visible
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
