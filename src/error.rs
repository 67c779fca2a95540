//! Error types for key extraction and comparison.
//!
//! Only configuration defects are errors. Irregular data (a match without the
//! requested capture group, a file with an unexpected name shape) is skipped
//! with a diagnostic trace instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required setting is missing or inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The wordings source is neither a URL nor a supported file type.
    #[error("unsupported wordings format: {source_name} (only .arb, .json and http(s) URLs are supported)")]
    UnsupportedFormat { source_name: String },

    /// A rule pattern or the wildcard token is not a valid regular expression.
    #[error("invalid pattern \"{pattern}\"")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A filesystem read failed.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote wordings fetch failed.
    #[error("failed to fetch {url}: {reason}")]
    Http { url: String, reason: String },

    /// A wordings resource is not valid JSON.
    #[error("failed to parse {source_name} as JSON")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
