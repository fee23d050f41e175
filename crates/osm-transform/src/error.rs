//! Error types for street configuration and element shaping.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a street configuration.
#[derive(Debug, Error)]
pub enum StreetConfigError {
    #[error("failed to read street config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse street config: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    /// Abbreviation keys are single whitespace-free tokens.
    #[error("invalid abbreviation token '{token}': must be a non-empty token without whitespace")]
    InvalidToken { token: String },

    #[error("abbreviation '{token}' maps to itself")]
    SelfMapping { token: String },

    /// Canonical values may not also be keys.
    #[error("abbreviation '{token}' maps to '{canonical}', which is itself an abbreviation")]
    ChainedMapping { token: String, canonical: String },
}

/// Fatal errors for a single element. No partial record is produced.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("cannot shape <{tag}> element: only node and way are supported")]
    UnsupportedElement { tag: String },

    #[error("{element} {} is missing required attribute '{attribute}'", .id.as_deref().unwrap_or("<unknown id>"))]
    MissingAttribute {
        element: &'static str,
        id: Option<String>,
        attribute: String,
    },
}

/// Result type for shaping operations.
pub type Result<T> = std::result::Result<T, ShapeError>;
