//! Zync: the synchronization service and its PostgreSQL database
//!
//! Contributes three generated parameters and five objects: the zync
//! workload, the database workload, a service for each, and the `zync`
//! secret that carries every sensitive value. Workload env vars reference
//! the secret by key and never embed the values.

mod options;
pub mod resources;

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use amp_common::{Object, Result, Template};

use crate::component::{Component, Siblings};

pub use options::{default_database_url, ZyncOptions, ZyncOptionsBuilder, REQUIRED_FIELDS};

/// Component name
pub const ZYNC_COMPONENT: &str = "zync";

/// Name of the zync workload and service
pub const ZYNC_NAME: &str = "zync";

/// Name of the database workload and service
pub const ZYNC_DATABASE_NAME: &str = "zync-database";

/// Name of the secret zync publishes
pub const ZYNC_SECRET_NAME: &str = "zync";

/// Image stream tag every zync container follows
pub const ZYNC_IMAGE: &str = "amp-zync:latest";

/// Parameter holding the database password
pub const DATABASE_PASSWORD_PARAMETER: &str = "ZYNC_DATABASE_PASSWORD";

/// Parameter holding the Rails secret key base
pub const SECRET_KEY_BASE_PARAMETER: &str = "ZYNC_SECRET_KEY_BASE";

/// Parameter holding the authentication token
pub const AUTHENTICATION_TOKEN_PARAMETER: &str = "ZYNC_AUTHENTICATION_TOKEN";

/// Keys of the `zync` secret
pub mod secret_keys {
    /// Rails secret key base
    pub const SECRET_KEY_BASE: &str = "SECRET_KEY_BASE";
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Database user password
    pub const DATABASE_PASSWORD: &str = "ZYNC_DATABASE_PASSWORD";
    /// Token for calls into zync
    pub const AUTHENTICATION_TOKEN: &str = "ZYNC_AUTHENTICATION_TOKEN";
}

/// Source of validated zync options
#[cfg_attr(test, automock)]
pub trait ZyncOptionsProvider {
    /// Produce options, or the builder's first missing-field error
    fn zync_options(&self) -> Result<ZyncOptions>;
}

/// The zync component
pub struct Zync {
    provider: Arc<dyn ZyncOptionsProvider>,
    options: Option<ZyncOptions>,
}

impl Zync {
    /// Create the component around an options provider
    pub fn new(provider: Arc<dyn ZyncOptionsProvider>) -> Self {
        Self {
            provider,
            options: None,
        }
    }

    /// Options obtained during the last successful assemble
    pub fn options(&self) -> Option<&ZyncOptions> {
        self.options.as_ref()
    }
}

impl Component for Zync {
    fn name(&self) -> &'static str {
        ZYNC_COMPONENT
    }

    fn assemble(&mut self, template: &mut Template, _siblings: &Siblings<'_>) -> Result<()> {
        let options = self.provider.zync_options()?;

        let parameters = resources::parameters();
        let objects = resources::objects(&options);
        debug!(
            parameters = parameters.len(),
            objects = objects.len(),
            "assembling zync"
        );

        template.add_parameters(parameters);
        template.add_objects(objects);
        self.options = Some(options);
        Ok(())
    }

    fn get_objects(&self) -> Result<Vec<Object>> {
        let options = self.provider.zync_options()?;
        Ok(resources::objects(&options))
    }

    fn provided_secrets(&self) -> &'static [&'static str] {
        &[ZYNC_SECRET_NAME]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amp_common::{Error, ObjectKind};

    fn options() -> ZyncOptions {
        ZyncOptionsBuilder::new()
            .app_label("myapp")
            .authentication_token("tok0000000000000")
            .database_password("pw000000000000000")
            .secret_key_base("sk00000000000000")
            .build()
            .unwrap()
    }

    fn zync_with(result: Result<ZyncOptions>) -> Zync {
        let mut provider = MockZyncOptionsProvider::new();
        provider
            .expect_zync_options()
            .returning(move || result.clone());
        Zync::new(Arc::new(provider))
    }

    #[test]
    fn assemble_appends_parameters_then_objects() {
        let mut zync = zync_with(Ok(options()));
        let mut template = Template::new("amp");

        zync.assemble(&mut template, &Siblings::none()).unwrap();

        assert_eq!(template.parameters().len(), 3);
        assert_eq!(template.objects().len(), 5);
        assert_eq!(zync.options(), Some(&options()));
        assert!(template.secret("zync").is_some());
        assert!(template.object(ObjectKind::Workload, "zync").is_some());
    }

    #[test]
    fn assemble_appends_to_existing_content() {
        let mut zync = zync_with(Ok(options()));
        let mut template = Template::new("amp");
        template.add_parameters(resources::parameters());

        zync.assemble(&mut template, &Siblings::none()).unwrap();

        // no dedup: the earlier declarations stay and zync's are appended
        assert_eq!(template.parameters().len(), 6);
        assert_eq!(
            template.duplicate_parameter_names(),
            vec![
                "ZYNC_DATABASE_PASSWORD",
                "ZYNC_SECRET_KEY_BASE",
                "ZYNC_AUTHENTICATION_TOKEN"
            ]
        );
    }

    #[test]
    fn provider_failure_leaves_template_untouched() {
        let missing = Error::missing_option(ZYNC_COMPONENT, "authentication_token");
        let mut zync = zync_with(Err(missing.clone()));
        let mut template = Template::new("amp");

        let err = zync.assemble(&mut template, &Siblings::none()).unwrap_err();

        assert_eq!(err, missing);
        assert!(template.parameters().is_empty());
        assert!(template.objects().is_empty());
        assert!(zync.options().is_none());
    }

    #[test]
    fn get_objects_matches_assembled_objects() {
        let mut zync = zync_with(Ok(options()));
        let mut template = Template::new("amp");
        zync.assemble(&mut template, &Siblings::none()).unwrap();

        assert_eq!(zync.get_objects().unwrap(), template.objects().to_vec());
    }

    #[test]
    fn get_objects_propagates_provider_errors() {
        let zync = zync_with(Err(Error::missing_option(ZYNC_COMPONENT, "app_label")));
        assert_eq!(
            zync.get_objects().unwrap_err(),
            Error::missing_option(ZYNC_COMPONENT, "app_label")
        );
    }

    #[test]
    fn publishes_its_secret() {
        let zync = zync_with(Ok(options()));
        assert_eq!(zync.provided_secrets(), &["zync"]);
        assert_eq!(zync.name(), "zync");
    }
}
