//! Template object descriptors

use serde::Serialize;

use crate::k8s::{Secret, Service};
use crate::openshift::DeploymentConfig;

/// Role an object plays within its component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The component's main workload
    Workload,
    /// A supporting workload (e.g. the component's database)
    AuxiliaryWorkload,
    /// A Service exposing one of the workloads
    NetworkEndpoint,
    /// Key-value secret material
    Secret,
}

/// A resource descriptor contributed to a template.
///
/// Serializes as the wrapped resource, so the downstream engine sees plain
/// Kubernetes/OpenShift objects.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Object {
    /// Main workload
    Workload(DeploymentConfig),
    /// Supporting workload
    AuxiliaryWorkload(DeploymentConfig),
    /// Network endpoint
    NetworkEndpoint(Service),
    /// Secret
    Secret(Secret),
}

impl Object {
    /// Role of this object
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Workload(_) => ObjectKind::Workload,
            Self::AuxiliaryWorkload(_) => ObjectKind::AuxiliaryWorkload,
            Self::NetworkEndpoint(_) => ObjectKind::NetworkEndpoint,
            Self::Secret(_) => ObjectKind::Secret,
        }
    }

    /// Resource name from metadata
    pub fn name(&self) -> &str {
        match self {
            Self::Workload(dc) | Self::AuxiliaryWorkload(dc) => &dc.metadata.name,
            Self::NetworkEndpoint(svc) => &svc.metadata.name,
            Self::Secret(secret) => &secret.metadata.name,
        }
    }

    /// Kubernetes kind of the wrapped resource
    pub fn resource_kind(&self) -> &str {
        match self {
            Self::Workload(dc) | Self::AuxiliaryWorkload(dc) => &dc.kind,
            Self::NetworkEndpoint(svc) => &svc.kind,
            Self::Secret(secret) => &secret.kind,
        }
    }

    /// The DeploymentConfig of either workload variant
    pub fn as_workload(&self) -> Option<&DeploymentConfig> {
        match self {
            Self::Workload(dc) | Self::AuxiliaryWorkload(dc) => Some(dc),
            _ => None,
        }
    }

    /// The DeploymentConfig of either workload variant, for mutation
    pub fn as_workload_mut(&mut self) -> Option<&mut DeploymentConfig> {
        match self {
            Self::Workload(dc) | Self::AuxiliaryWorkload(dc) => Some(dc),
            _ => None,
        }
    }

    /// The wrapped Service
    pub fn as_service(&self) -> Option<&Service> {
        match self {
            Self::NetworkEndpoint(svc) => Some(svc),
            _ => None,
        }
    }

    /// The wrapped Secret
    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            Self::Secret(secret) => Some(secret),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::k8s::{ObjectMeta, ServicePort};

    #[test]
    fn object_serializes_as_wrapped_resource() {
        let object = Object::Secret(Secret::new(ObjectMeta::new("zync")).with_data("K", "V"));
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["kind"], "Secret");
        assert_eq!(json["metadata"]["name"], "zync");
        assert!(json.get("Secret").is_none());
    }

    #[test]
    fn accessors_match_variant() {
        let svc = Object::NetworkEndpoint(Service::new(
            ObjectMeta::new("zync"),
            BTreeMap::new(),
            vec![ServicePort::tcp("8080-tcp", 8080)],
        ));
        assert_eq!(svc.kind(), ObjectKind::NetworkEndpoint);
        assert_eq!(svc.name(), "zync");
        assert_eq!(svc.resource_kind(), "Service");
        assert!(svc.as_service().is_some());
        assert!(svc.as_workload().is_none());
        assert!(svc.as_secret().is_none());
    }
}
