//! Zync cron options and their builder

use amp_common::Result;

use crate::options::{or_default, required};

use super::ZYNC_CRON_COMPONENT;

/// Redis endpoint used when no override is given
pub const DEFAULT_REDIS_URL: &str = "redis://zync-redis:6379/0";

/// Queue store endpoint used when no override is given
pub const DEFAULT_QUEUES_URL: &str = "redis://zync-redis:6379/1";

/// Validated zync cron configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZyncCronOptions {
    app_label: String,
    redis_url: String,
    queues_url: String,
}

impl ZyncCronOptions {
    /// Value of the `app` label on the cron workload
    pub fn app_label(&self) -> &str {
        &self.app_label
    }

    /// Redis proxy endpoint
    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    /// Queue store endpoint
    pub fn queues_url(&self) -> &str {
        &self.queues_url
    }
}

/// Staged construction of [`ZyncCronOptions`]
#[derive(Clone, Debug, Default)]
pub struct ZyncCronOptionsBuilder {
    app_label: Option<String>,
    redis_url: Option<String>,
    queues_url: Option<String>,
}

impl ZyncCronOptionsBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application label (required)
    pub fn app_label(&mut self, app_label: impl Into<String>) -> &mut Self {
        self.app_label = Some(app_label.into());
        self
    }

    /// Override the redis endpoint
    pub fn redis_url(&mut self, redis_url: impl Into<String>) -> &mut Self {
        self.redis_url = Some(redis_url.into());
        self
    }

    /// Override the queue store endpoint
    pub fn queues_url(&mut self, queues_url: impl Into<String>) -> &mut Self {
        self.queues_url = Some(queues_url.into());
        self
    }

    /// Validate and fill defaults
    pub fn build(&self) -> Result<ZyncCronOptions> {
        let app_label = required(ZYNC_CRON_COMPONENT, "app_label", self.app_label.as_deref())?;

        Ok(ZyncCronOptions {
            app_label,
            redis_url: or_default(self.redis_url.as_deref(), || DEFAULT_REDIS_URL.to_string()),
            queues_url: or_default(self.queues_url.as_deref(), || {
                DEFAULT_QUEUES_URL.to_string()
            }),
        })
    }
}
