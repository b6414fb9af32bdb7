//! Core error types for rpki

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to the daemon API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Could not establish a connection
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on an established connection
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frame could not be encoded or decoded
    #[error("malformed message: {0}")]
    Decode(#[from] serde_json::Error),

    /// The daemon reported an error
    #[error("{0}")]
    Remote(String),

    /// The connection closed before the end-of-stream frame arrived
    #[error("connection closed before end of stream")]
    PrematureEnd,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Route family resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
    /// The token names no known family
    #[error("unsupported address family: {0}")]
    Unsupported(String),
}
