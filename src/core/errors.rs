//! TV-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, TvError>;

/// Top-level error type for the TV-set simulator.
///
/// Every variant is an invalid-argument class failure raised synchronously
/// at the call that violates a precondition; nothing is recovered
/// internally.
#[derive(Debug, Error)]
pub enum TvError {
    #[error("[TV-1001] channel capacity must be greater than zero")]
    InvalidCapacity,

    #[error("[TV-1002] channel name cannot be empty or whitespace: {name:?}")]
    InvalidChannelName { name: String },

    #[error("[TV-1003] channel number must be greater than zero, got {requested}")]
    InvalidChannelNumber { requested: usize },

    #[error("[TV-2001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[TV-2002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[TV-2003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[TV-2004] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TvError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCapacity => "TV-1001",
            Self::InvalidChannelName { .. } => "TV-1002",
            Self::InvalidChannelNumber { .. } => "TV-1003",
            Self::InvalidConfig { .. } => "TV-2001",
            Self::MissingConfig { .. } => "TV-2002",
            Self::ConfigParse { .. } => "TV-2003",
            Self::Io { .. } => "TV-2004",
        }
    }

    /// Name of the offending parameter, for caller-facing diagnostics.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidCapacity => "channel_capacity",
            Self::InvalidChannelName { .. } => "name",
            Self::InvalidChannelNumber { .. } => "channel_number",
            Self::InvalidConfig { .. } | Self::MissingConfig { .. } | Self::ConfigParse { .. } => {
                "config"
            }
            Self::Io { .. } => "path",
        }
    }
}

impl From<toml::de::Error> for TvError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
