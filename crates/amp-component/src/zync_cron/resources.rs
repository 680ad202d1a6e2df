//! Zync cron resource factory

use amp_common::k8s::{string_map, Container, EnvVar, ObjectMeta, ResourceQuantity, ResourceRequirements};
use amp_common::openshift::{
    DeploymentConfig, DeploymentConfigSpec, DeploymentStrategy, DeploymentTriggerPolicy, PodMeta,
    PodSpec, PodTemplateSpec, RollingParams,
};
use amp_common::{
    Object, LABEL_APP, LABEL_COMPONENT, LABEL_COMPONENT_ELEMENT, LABEL_DEPLOYMENT_CONFIG,
    PLATFORM_SERVICE_ACCOUNT,
};

use crate::zync::{ZYNC_COMPONENT, ZYNC_IMAGE};

use super::options::ZyncCronOptions;
use super::ZYNC_CRON_NAME;

/// Objects zync cron contributes: its single workload
pub fn objects(options: &ZyncCronOptions) -> Vec<Object> {
    vec![Object::Workload(deployment_config(options))]
}

/// The cron worker workload.
///
/// Database and secret key bindings are added later, once the shared zync
/// secret is known.
pub fn deployment_config(options: &ZyncCronOptions) -> DeploymentConfig {
    let labels = string_map([
        (LABEL_APP, options.app_label()),
        (LABEL_COMPONENT, ZYNC_COMPONENT),
        (LABEL_COMPONENT_ELEMENT, "cron"),
    ]);
    let mut pod_labels = labels.clone();
    pod_labels.insert(
        LABEL_DEPLOYMENT_CONFIG.to_string(),
        ZYNC_CRON_NAME.to_string(),
    );

    let cron = Container {
        name: ZYNC_CRON_NAME.to_string(),
        image: ZYNC_IMAGE.to_string(),
        image_pull_policy: Some("IfNotPresent".to_string()),
        args: Some(vec![ZYNC_CRON_NAME.to_string()]),
        env: vec![
            EnvVar::literal("CONFIG_REDIS_PROXY", options.redis_url()),
            EnvVar::empty("CONFIG_REDIS_SENTINEL_HOSTS"),
            EnvVar::empty("CONFIG_REDIS_SENTINEL_ROLE"),
            EnvVar::literal("CONFIG_QUEUES_MASTER_NAME", options.queues_url()),
            EnvVar::empty("CONFIG_QUEUES_SENTINEL_HOSTS"),
            EnvVar::empty("CONFIG_QUEUES_SENTINEL_ROLE"),
            EnvVar::literal("RACK_ENV", "production"),
        ],
        resources: Some(ResourceRequirements {
            requests: Some(ResourceQuantity::cpu("50m")),
            limits: Some(ResourceQuantity::cpu("150m")),
        }),
        ..Default::default()
    };

    DeploymentConfig::new(
        ObjectMeta::new(ZYNC_CRON_NAME).with_labels(labels),
        DeploymentConfigSpec {
            strategy: Some(DeploymentStrategy::rolling(RollingParams {
                update_period_seconds: Some(1),
                interval_seconds: Some(1),
                timeout_seconds: Some(600),
                max_unavailable: Some("25%".to_string()),
                max_surge: Some("25%".to_string()),
            })),
            triggers: vec![
                DeploymentTriggerPolicy::config_change(),
                DeploymentTriggerPolicy::image_change(&[ZYNC_CRON_NAME], ZYNC_IMAGE),
            ],
            replicas: 1,
            selector: string_map([(LABEL_DEPLOYMENT_CONFIG, ZYNC_CRON_NAME)]),
            template: PodTemplateSpec {
                metadata: PodMeta { labels: pod_labels },
                spec: PodSpec {
                    service_account_name: Some(PLATFORM_SERVICE_ACCOUNT.to_string()),
                    containers: vec![cron],
                    ..Default::default()
                },
            },
        },
    )
}
