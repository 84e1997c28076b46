//! OSS-prefixed error types with structured error codes.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, OssError>;

/// Top-level error type for the zone advisor.
#[derive(Debug, Error)]
pub enum OssError {
    #[error("[OSS-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[OSS-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[OSS-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[OSS-2001] invalid zone catalog: {details}")]
    InvalidCatalog { details: String },

    #[error("[OSS-2002] invalid investor identifier: {bbid:?}")]
    InvalidBbid { bbid: String },

    #[error("[OSS-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[OSS-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[OSS-3002] store failure for key {key:?}: {details}")]
    Store { key: String, details: String },
}

impl OssError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "OSS-1001",
            Self::MissingConfig { .. } => "OSS-1002",
            Self::ConfigParse { .. } => "OSS-1003",
            Self::InvalidCatalog { .. } => "OSS-2001",
            Self::InvalidBbid { .. } => "OSS-2002",
            Self::Serialization { .. } => "OSS-2101",
            Self::Io { .. } => "OSS-3001",
            Self::Store { .. } => "OSS-3002",
        }
    }

    /// Whether retrying might resolve the failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Store { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for OssError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for OssError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
