use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the fallible edges of the hub: loading catalog and
/// config files and persisting the current page. Filtering itself never fails.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog kind '{0}', expected 'Catalog'")]
    InvalidKind(String),

    #[error("Duplicate {domain} entry '{name}'")]
    DuplicateEntry { domain: &'static str, name: String },

    #[error("{domain} entry #{index} has an empty {field}")]
    EmptyField {
        domain: &'static str,
        field: &'static str,
        index: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HubError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HubError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
