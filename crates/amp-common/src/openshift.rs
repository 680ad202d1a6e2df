//! OpenShift workload types
//!
//! Typed representation of `apps.openshift.io/v1` DeploymentConfig resources,
//! the workload kind the downstream template engine rolls out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::k8s::{Container, HasApiResource, ObjectMeta, ObjectReference, Volume};

/// OpenShift DeploymentConfig
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// API version
    pub api_version: String,
    /// Kind
    pub kind: String,
    /// Metadata
    pub metadata: ObjectMeta,
    /// Spec
    pub spec: DeploymentConfigSpec,
}

impl HasApiResource for DeploymentConfig {
    const API_VERSION: &'static str = "apps.openshift.io/v1";
    const KIND: &'static str = "DeploymentConfig";
}

impl DeploymentConfig {
    /// Create a DeploymentConfig from metadata and spec
    pub fn new(metadata: ObjectMeta, spec: DeploymentConfigSpec) -> Self {
        Self {
            api_version: Self::API_VERSION.to_string(),
            kind: Self::KIND.to_string(),
            metadata,
            spec,
        }
    }

    /// Find a main container by name
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.spec
            .template
            .spec
            .containers
            .iter()
            .find(|c| c.name == name)
    }

    /// Find a main container by name for mutation
    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.spec
            .template
            .spec
            .containers
            .iter_mut()
            .find(|c| c.name == name)
    }
}

/// DeploymentConfig spec
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfigSpec {
    /// Rollout strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DeploymentStrategy>,
    /// Events that trigger a new rollout
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<DeploymentTriggerPolicy>,
    /// Number of replicas
    pub replicas: u32,
    /// Label selector
    pub selector: BTreeMap<String, String>,
    /// Pod template
    pub template: PodTemplateSpec,
}

/// Rollout strategy
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStrategy {
    /// Strategy type: Rolling or Recreate
    #[serde(rename = "type")]
    pub type_: String,
    /// Rolling strategy parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_params: Option<RollingParams>,
}

impl DeploymentStrategy {
    /// Kill all pods before starting new ones
    pub fn recreate() -> Self {
        Self {
            type_: "Recreate".to_string(),
            rolling_params: None,
        }
    }

    /// Rolling rollout with the given parameters
    pub fn rolling(params: RollingParams) -> Self {
        Self {
            type_: "Rolling".to_string(),
            rolling_params: Some(params),
        }
    }
}

/// Rolling strategy parameters
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RollingParams {
    /// Seconds to wait between individual pod updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_period_seconds: Option<i64>,
    /// Seconds to wait between polling deployment status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<i64>,
    /// Seconds to wait for a scaling event before giving up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    /// Max unavailable pods during the rollout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<String>,
    /// Max pods above the desired count during the rollout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<String>,
}

/// A rollout trigger
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTriggerPolicy {
    /// Trigger type: ConfigChange or ImageChange
    #[serde(rename = "type")]
    pub type_: String,
    /// Image change parameters (ImageChange triggers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_change_params: Option<ImageChangeParams>,
}

impl DeploymentTriggerPolicy {
    /// Roll out whenever the pod template changes
    pub fn config_change() -> Self {
        Self {
            type_: "ConfigChange".to_string(),
            image_change_params: None,
        }
    }

    /// Roll out whenever the given image stream tag moves
    pub fn image_change(container_names: &[&str], image_stream_tag: impl Into<String>) -> Self {
        Self {
            type_: "ImageChange".to_string(),
            image_change_params: Some(ImageChangeParams {
                automatic: true,
                container_names: container_names.iter().map(|c| c.to_string()).collect(),
                from: ObjectReference {
                    kind: "ImageStreamTag".to_string(),
                    name: image_stream_tag.into(),
                },
            }),
        }
    }
}

/// Image change trigger parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageChangeParams {
    /// Whether the trigger fires automatically
    pub automatic: bool,
    /// Containers whose image is replaced
    pub container_names: Vec<String>,
    /// Image stream tag to follow
    pub from: ObjectReference,
}

/// Pod template spec
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplateSpec {
    /// Pod metadata
    pub metadata: PodMeta,
    /// Pod spec
    pub spec: PodSpec,
}

/// Pod metadata (labels only)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodMeta {
    /// Labels
    pub labels: BTreeMap<String, String>,
}

/// Pod spec
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    /// Service account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    /// Restart policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<String>,
    /// Init containers (run before main containers)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_containers: Vec<Container>,
    /// Containers
    pub containers: Vec<Container>,
    /// Volumes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}
