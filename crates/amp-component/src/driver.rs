//! Composition driver
//!
//! Runs every registered component through assemble, then every component
//! through post-process, against one template. The first failure aborts the
//! run and is returned unchanged.

use tracing::{debug, info, instrument, warn};

use amp_common::{Object, Result, Template};

use crate::component::Siblings;
use crate::registry::ComponentRegistry;

/// Drives a registry of components into a template
#[derive(Debug)]
pub struct CompositionDriver {
    registry: ComponentRegistry,
}

impl CompositionDriver {
    /// Create a driver over an ordered registry
    pub fn new(registry: ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Component names in composition order
    pub fn component_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Objects of a single component, built without a template
    pub fn get_objects(&self, component: &str) -> Option<Result<Vec<Object>>> {
        self.registry.get(component).map(|c| c.get_objects())
    }

    /// Compose a fresh template with the given name
    pub fn run(&mut self, name: &str) -> Result<Template> {
        let mut template = Template::new(name);
        self.run_into(&mut template)?;
        Ok(template)
    }

    /// Compose into an existing template.
    ///
    /// Every assemble completes before the first post-process starts. During
    /// assemble a component sees only the components before it; during
    /// post-process it sees all the others.
    #[instrument(skip_all, fields(template = %template.name()))]
    pub fn run_into(&mut self, template: &mut Template) -> Result<()> {
        let components = self.registry.components_mut();

        for index in 0..components.len() {
            let (before, rest) = components.split_at_mut(index);
            let Some((component, _)) = rest.split_first_mut() else {
                break;
            };
            let siblings = Siblings::new(before, &[]);

            let (params, objects) = (template.parameters().len(), template.objects().len());
            component.assemble(template, &siblings)?;
            debug!(
                component = component.name(),
                parameters = template.parameters().len() - params,
                objects = template.objects().len() - objects,
                "assembled component"
            );
        }

        for index in 0..components.len() {
            let (before, rest) = components.split_at_mut(index);
            let Some((component, after)) = rest.split_first_mut() else {
                break;
            };
            let siblings = Siblings::new(before, after);
            component.post_process(template, &siblings)?;
        }

        for name in template.duplicate_parameter_names() {
            warn!(parameter = name, "parameter declared more than once");
        }

        info!(
            components = components.len(),
            parameters = template.parameters().len(),
            objects = template.objects().len(),
            "template composed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use amp_common::k8s::{ObjectMeta, Secret};
    use amp_common::{Error, Parameter};

    use crate::component::Component;

    type Journal = Arc<Mutex<Vec<String>>>;

    /// Records pass calls, contributes one parameter and one secret
    struct Recorder {
        name: &'static str,
        journal: Journal,
        fail_assemble: bool,
    }

    impl Recorder {
        fn new(name: &'static str, journal: &Journal) -> Self {
            Self {
                name,
                journal: journal.clone(),
                fail_assemble: false,
            }
        }

        fn failing(mut self) -> Self {
            self.fail_assemble = true;
            self
        }

        fn log(&self, event: String) {
            self.journal.lock().unwrap().push(event);
        }
    }

    impl Component for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn assemble(&mut self, template: &mut Template, siblings: &Siblings<'_>) -> Result<()> {
            let seen: Vec<&str> = siblings.iter().map(|c| c.name()).collect();
            self.log(format!("assemble {} {:?}", self.name, seen));
            if self.fail_assemble {
                return Err(Error::missing_option(self.name, "app_label"));
            }
            template.add_parameters([Parameter::literal("SHARED", self.name)]);
            template.add_objects(self.get_objects()?);
            Ok(())
        }

        fn post_process(&mut self, _template: &mut Template, siblings: &Siblings<'_>) -> Result<()> {
            let seen: Vec<&str> = siblings.iter().map(|c| c.name()).collect();
            self.log(format!("post {} {:?}", self.name, seen));
            Ok(())
        }

        fn get_objects(&self) -> Result<Vec<Object>> {
            Ok(vec![Object::Secret(Secret::new(ObjectMeta::new(self.name)))])
        }
    }

    fn driver(components: Vec<Recorder>) -> CompositionDriver {
        let registry = components
            .into_iter()
            .try_fold(ComponentRegistry::new(), |registry, c| registry.register(c))
            .unwrap();
        CompositionDriver::new(registry)
    }

    #[test]
    fn post_process_runs_after_every_assemble() {
        let journal = Journal::default();
        let mut driver = driver(vec![
            Recorder::new("a", &journal),
            Recorder::new("b", &journal),
            Recorder::new("c", &journal),
        ]);

        driver.run("amp").unwrap();

        assert_eq!(
            *journal.lock().unwrap(),
            vec![
                r#"assemble a []"#,
                r#"assemble b ["a"]"#,
                r#"assemble c ["a", "b"]"#,
                r#"post a ["b", "c"]"#,
                r#"post b ["a", "c"]"#,
                r#"post c ["a", "b"]"#,
            ]
        );
    }

    #[test]
    fn contributions_keep_order_and_duplicates() {
        let journal = Journal::default();
        let mut driver = driver(vec![
            Recorder::new("a", &journal),
            Recorder::new("b", &journal),
        ]);

        let template = driver.run("amp").unwrap();

        let names: Vec<&str> = template.objects().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(template.parameters().len(), 2);
        assert_eq!(template.duplicate_parameter_names(), vec!["SHARED"]);
        assert_eq!(template.name(), "amp");
    }

    #[test]
    fn first_failure_aborts_the_run() {
        let journal = Journal::default();
        let mut driver = driver(vec![
            Recorder::new("a", &journal),
            Recorder::new("b", &journal).failing(),
            Recorder::new("c", &journal),
        ]);

        let mut template = Template::new("amp");
        let err = driver.run_into(&mut template).unwrap_err();

        assert_eq!(err, Error::missing_option("b", "app_label"));
        assert_eq!(journal.lock().unwrap().len(), 2);
        // contributions made before the failure are left as they were
        assert_eq!(template.objects().len(), 1);
    }

    #[test]
    fn objects_for_a_single_component() {
        let journal = Journal::default();
        let driver = driver(vec![Recorder::new("a", &journal)]);

        let objects = driver.get_objects("a").unwrap().unwrap();
        assert_eq!(objects.len(), 1);
        assert!(driver.get_objects("missing").is_none());
        assert!(journal.lock().unwrap().is_empty());
        assert_eq!(driver.component_names(), vec!["a"]);
    }
}
