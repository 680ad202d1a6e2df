//! Error types for the CLI

use std::path::PathBuf;

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] amp_common::Error),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("unknown component: {name} (known: {known})")]
    UnknownComponent { name: String, known: String },
}

impl Error {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unknown_component(name: impl Into<String>, known: &[&str]) -> Self {
        Error::UnknownComponent {
            name: name.into(),
            known: known.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_display_unchanged() {
        let engine = amp_common::Error::missing_option("zync", "authentication_token");
        let err = Error::from(engine.clone());
        assert_eq!(err.to_string(), engine.to_string());
    }

    #[test]
    fn unknown_component_lists_known_names() {
        let err = Error::unknown_component("apicast", &["globals", "zync"]);
        assert_eq!(
            err.to_string(),
            "unknown component: apicast (known: globals, zync)"
        );
    }
}
