//! Error types for template assembly
//!
//! Errors carry the component that produced them so an operator running a
//! full composition can tell which piece of the deployment failed.

use thiserror::Error;

/// Main error type for template assembly
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required option was absent or empty when building component options.
    ///
    /// Reported for the first missing field in the builder's declared check
    /// order only.
    #[error("no {field} has been provided for component {component}")]
    MissingOption {
        /// Component whose options failed to build
        component: String,
        /// Name of the first missing required field
        field: &'static str,
    },

    /// A resource factory or post-processing step could not produce a valid
    /// object from otherwise valid options
    #[error("failed to construct objects for component {component}: {message}")]
    Construction {
        /// Component being assembled
        component: String,
        /// Description of what failed
        message: String,
    },

    /// Two components were registered under the same name
    #[error("component {component} is already registered")]
    Registration {
        /// The duplicated component name
        component: String,
    },

    /// Serialization of an assembled template failed
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of what failed
        message: String,
        /// The resource kind being serialized (if known)
        kind: Option<String>,
    },
}

impl Error {
    /// Create a missing-option error for a component
    pub fn missing_option(component: impl Into<String>, field: &'static str) -> Self {
        Self::MissingOption {
            component: component.into(),
            field,
        }
    }

    /// Create a construction error for a component
    pub fn construction(component: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Construction {
            component: component.into(),
            message: msg.into(),
        }
    }

    /// Create a registration error for a duplicated component name
    pub fn registration(component: impl Into<String>) -> Self {
        Self::Registration {
            component: component.into(),
        }
    }

    /// Create a serialization error with the resource kind that failed
    pub fn serialization_for(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: Some(kind.into()),
        }
    }

    /// Name of the component the error belongs to, if any
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::MissingOption { component, .. }
            | Self::Construction { component, .. }
            | Self::Registration { component } => Some(component),
            Self::Serialization { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
            kind: None,
        }
    }
}
