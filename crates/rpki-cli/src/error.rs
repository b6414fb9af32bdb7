//! CLI error types

use rpki_core::{ClientError, FamilyError};
use thiserror::Error;

/// Usage line of the `server` command
pub const SERVER_USAGE: &str = "usage: rpki server <ip address> [reset|softreset|enable]";

/// Invalid input detected before any call is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `server` was given neither zero nor two arguments
    #[error("usage: rpki server <ip address> [reset|softreset|enable]")]
    ServerArgs,

    /// The target is not an IP literal
    #[error("invalid ip address: {0}")]
    InvalidAddress(String),

    /// The operation token is not recognized
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The address family token is not recognized
    #[error(transparent)]
    AddressFamily(#[from] FamilyError),
}

/// Errors returned by command handlers
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid invocation
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Failure talking to the daemon
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// Failure writing output
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
