//! Common types for amp-template: resource descriptors, errors, and the
//! template accumulator that components assemble into.

#![deny(missing_docs)]

pub mod error;
pub mod k8s;
pub mod openshift;
pub mod template;

pub use error::Error;
pub use template::{Generation, Object, ObjectKind, ObjectList, Parameter, Template};

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Label key carrying the application label shared by every object
pub const LABEL_APP: &str = "app";

/// Label key naming the platform component an object belongs to
pub const LABEL_COMPONENT: &str = "3scale.component";

/// Label key naming the element within a component (e.g. "database")
pub const LABEL_COMPONENT_ELEMENT: &str = "3scale.component-element";

/// Label key used by DeploymentConfig selectors
pub const LABEL_DEPLOYMENT_CONFIG: &str = "deploymentConfig";

/// Service account every platform workload runs under
pub const PLATFORM_SERVICE_ACCOUNT: &str = "amp";
