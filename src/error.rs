//! Library error type.

use thiserror::Error;

/// Errors surfaced by settings, code handler resolution and output formats.
///
/// Markdown rendering itself never fails: absent tags are omissions, not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown code handler: {0}")]
    UnknownCodeHandler(String),

    #[error("invalid code handler pattern '{pattern}': {source}")]
    InvalidHandlerPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("malformed settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to serialize comments: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("unknown format: {0}. Use markdown or json")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
