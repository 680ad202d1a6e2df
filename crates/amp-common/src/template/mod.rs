//! Template accumulator
//!
//! A [`Template`] collects the parameters and objects contributed by every
//! component of one composition run. Both sequences are append-only and keep
//! contribution order; nothing is deduplicated. Objects can be looked up by
//! role and name so a second pass can decorate what the first pass produced.

mod object;
mod parameter;

use std::collections::HashSet;

use serde::Serialize;

use crate::k8s::{ObjectMeta, Secret};
use crate::openshift::DeploymentConfig;

pub use object::{Object, ObjectKind};
pub use parameter::{placeholder, GenerateKind, Generation, Parameter, ALPHANUMERIC_16};

/// Parameterised bundle of objects (`template.openshift.io/v1` Template)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    api_version: String,
    kind: String,
    metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    objects: Vec<Object>,
    parameters: Vec<Parameter>,
}

impl Template {
    /// API version of the Template resource
    pub const API_VERSION: &'static str = "template.openshift.io/v1";
    /// Kind of the Template resource
    pub const KIND: &'static str = "Template";

    /// Create an empty template
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: Self::API_VERSION.to_string(),
            kind: Self::KIND.to_string(),
            metadata: ObjectMeta::new(name),
            message: None,
            objects: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Add a metadata annotation (e.g. `openshift.io/display-name`)
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata = self.metadata.with_annotation(key, value);
        self
    }

    /// Set the message shown after instantiation
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Template metadata
    pub fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    /// Append parameters in order
    pub fn add_parameters(&mut self, parameters: impl IntoIterator<Item = Parameter>) {
        self.parameters.extend(parameters);
    }

    /// Append objects in order
    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = Object>) {
        self.objects.extend(objects);
    }

    /// Parameters in contribution order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Objects in contribution order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// First parameter with the given name
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// First object with the given role and name
    pub fn object(&self, kind: ObjectKind, name: &str) -> Option<&Object> {
        self.objects
            .iter()
            .find(|o| o.kind() == kind && o.name() == name)
    }

    /// First object with the given role and name, for mutation
    pub fn object_mut(&mut self, kind: ObjectKind, name: &str) -> Option<&mut Object> {
        self.objects
            .iter_mut()
            .find(|o| o.kind() == kind && o.name() == name)
    }

    /// Secret with the given name
    pub fn secret(&self, name: &str) -> Option<&Secret> {
        self.object(ObjectKind::Secret, name)
            .and_then(Object::as_secret)
    }

    /// Workload (main or auxiliary) with the given name, for mutation
    pub fn workload_mut(&mut self, name: &str) -> Option<&mut DeploymentConfig> {
        self.objects
            .iter_mut()
            .filter_map(Object::as_workload_mut)
            .find(|dc| dc.metadata.name == name)
    }

    /// Parameter names declared more than once, in first-seen order.
    ///
    /// The template keeps every declaration; this only reports them.
    pub fn duplicate_parameter_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for param in &self.parameters {
            let name = param.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

/// Plain list of objects (`v1` List), for handing over a single component's
/// resources without a template
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectList {
    api_version: String,
    kind: String,
    items: Vec<Object>,
}

impl ObjectList {
    /// Wrap objects in a List
    pub fn new(items: Vec<Object>) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "List".to_string(),
            items,
        }
    }

    /// Listed objects
    pub fn items(&self) -> &[Object] {
        &self.items
    }
}
