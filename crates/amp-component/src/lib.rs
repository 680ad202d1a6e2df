//! Deployable components and template composition
//!
//! Every deployable piece of the platform implements [`Component`]. A
//! component obtains validated options from an options provider, turns them
//! into parameters and objects with pure resource factories, and appends
//! those to a shared [`Template`](amp_common::Template).
//!
//! # Usage
//!
//! ```rust,ignore
//! let provider = Arc::new(TemplateOptionsProvider);
//! let mut driver = CompositionDriver::new(platform_registry(provider)?);
//! let template = driver.run("3scale-api-management")?;
//! ```

mod component;
mod driver;
pub mod globals;
mod options;
pub mod providers;
mod registry;
pub mod zync;
pub mod zync_cron;

pub use component::{Component, Siblings};
pub use driver::CompositionDriver;
pub use providers::{ResolvedConfig, ResolvedOptionsProvider, TemplateOptionsProvider};
pub use registry::{platform_registry, ComponentRegistry};
