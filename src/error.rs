//! Error types.

use thiserror::Error;

/// Redirect rules could not be deserialized into a sequence of entries.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    /// Invalid YAML, or YAML that is not a sequence of `path`/`url` mappings
    #[error("invalid YAML redirect rules: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid JSON, or JSON that is not an array of `path`/`url` objects
    #[error("invalid JSON redirect rules: {0}")]
    Json(#[from] serde_json::Error),
}

/// An inline rule was not of the form `path=url`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid redirect rule {0:?}, expected 'path=url'")]
pub struct InvalidRule(pub String);
