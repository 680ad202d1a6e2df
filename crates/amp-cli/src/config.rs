//! Resolved configuration loading
//!
//! The config path resolution chain (highest priority first):
//! 1. Explicit `--config` flag
//! 2. `AMP_TEMPLATE_CONFIG` environment variable
//! 3. None: compose in template mode with parameter placeholders

use std::path::{Path, PathBuf};

use amp_component::ResolvedConfig;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "AMP_TEMPLATE_CONFIG";

/// Resolve the config path from the flag, then the environment
pub fn resolve_config_path(flag: Option<&Path>) -> Option<PathBuf> {
    resolve_from(flag, std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

fn resolve_from(flag: Option<&Path>, env: Option<PathBuf>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env.filter(|p| !p.as_os_str().is_empty()))
}

/// Load a YAML config document
pub fn load_config(path: &Path) -> Result<ResolvedConfig> {
    debug!(path = %path.display(), "loading config");
    let data = std::fs::read_to_string(path)
        .map_err(|e| Error::config(path, format!("failed to read: {}", e)))?;
    serde_yaml::from_str(&data).map_err(|e| Error::config(path, e.to_string()))
}

/// Resolve and load the config, if any
pub fn resolve_config(flag: Option<&Path>) -> Result<Option<ResolvedConfig>> {
    resolve_config_path(flag)
        .map(|path| load_config(&path))
        .transpose()
}
