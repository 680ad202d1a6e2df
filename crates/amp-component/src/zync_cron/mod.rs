//! Zync cron: the periodic worker that runs alongside zync
//!
//! Assembles a single workload. Its database and secret key bindings live in
//! the secret zync publishes, so they are wired in during post-processing
//! once every component has assembled.

mod options;
pub mod resources;

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use amp_common::k8s::EnvVar;
use amp_common::{Error, Object, Result, Template};

use crate::component::{Component, Siblings};
use crate::zync::{secret_keys, ZYNC_COMPONENT};

pub use options::{
    ZyncCronOptions, ZyncCronOptionsBuilder, DEFAULT_QUEUES_URL, DEFAULT_REDIS_URL,
};

/// Component name
pub const ZYNC_CRON_COMPONENT: &str = "zync-cron";

/// Name of the cron workload and its container
pub const ZYNC_CRON_NAME: &str = "zync-cron";

/// Secret keys the cron worker binds, paired with the env var each feeds
const SHARED_BINDINGS: [(&str, &str); 2] = [
    ("DATABASE_URL", secret_keys::DATABASE_URL),
    ("SECRET_KEY_BASE", secret_keys::SECRET_KEY_BASE),
];

/// Source of validated zync cron options
#[cfg_attr(test, automock)]
pub trait ZyncCronOptionsProvider {
    /// Produce options, or the builder's first missing-field error
    fn zync_cron_options(&self) -> Result<ZyncCronOptions>;
}

/// The zync cron component
pub struct ZyncCron {
    provider: Arc<dyn ZyncCronOptionsProvider>,
    options: Option<ZyncCronOptions>,
}

impl ZyncCron {
    /// Create the component around an options provider
    pub fn new(provider: Arc<dyn ZyncCronOptionsProvider>) -> Self {
        Self {
            provider,
            options: None,
        }
    }

    /// Options obtained during the last successful assemble
    pub fn options(&self) -> Option<&ZyncCronOptions> {
        self.options.as_ref()
    }
}

impl Component for ZyncCron {
    fn name(&self) -> &'static str {
        ZYNC_CRON_COMPONENT
    }

    fn assemble(&mut self, template: &mut Template, _siblings: &Siblings<'_>) -> Result<()> {
        let options = self.provider.zync_cron_options()?;
        template.add_objects(resources::objects(&options));
        self.options = Some(options);
        Ok(())
    }

    fn post_process(&mut self, template: &mut Template, siblings: &Siblings<'_>) -> Result<()> {
        let peer = siblings.get(ZYNC_COMPONENT).ok_or_else(|| {
            Error::construction(
                ZYNC_CRON_COMPONENT,
                format!("requires the {ZYNC_COMPONENT} component"),
            )
        })?;
        let secret_name = peer.provided_secrets().first().copied().ok_or_else(|| {
            Error::construction(
                ZYNC_CRON_COMPONENT,
                format!("component {ZYNC_COMPONENT} publishes no secret"),
            )
        })?;

        let secret = template.secret(secret_name).ok_or_else(|| {
            Error::construction(
                ZYNC_CRON_COMPONENT,
                format!("secret {secret_name} not found in template"),
            )
        })?;
        if let Some((_, key)) = SHARED_BINDINGS.iter().find(|(_, key)| !secret.has_key(key)) {
            return Err(Error::construction(
                ZYNC_CRON_COMPONENT,
                format!("secret {secret_name} has no key {key}"),
            ));
        }

        let container = template
            .workload_mut(ZYNC_CRON_NAME)
            .and_then(|dc| dc.container_mut(ZYNC_CRON_NAME))
            .ok_or_else(|| {
                Error::construction(
                    ZYNC_CRON_COMPONENT,
                    format!("workload {ZYNC_CRON_NAME} not found in template"),
                )
            })?;
        for (var, key) in SHARED_BINDINGS {
            container.set_env(EnvVar::from_secret(var, secret_name, key));
        }

        debug!(secret = secret_name, "wired zync cron to shared secret");
        Ok(())
    }

    fn get_objects(&self) -> Result<Vec<Object>> {
        let options = self.provider.zync_cron_options()?;
        Ok(resources::objects(&options))
    }
}
