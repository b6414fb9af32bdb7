//! Wire protocol between the CLI and the BGP daemon API
//!
//! Uses JSON-encoded messages, one per line, over TCP. A call writes a
//! single [`ApiRequest`] line. Unary calls are answered with one
//! [`ApiResponse`] line; streamed calls with a sequence of [`StreamFrame`]
//! lines closed by either `end` or `error`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::family::RouteFamily;

/// Port the daemon uses to reach RPKI validators (RFC 6810)
pub const RPKI_CONTROL_PORT: u16 = 323;

/// Default port of the daemon API
pub const DEFAULT_API_PORT: u16 = 50051;

/// Default host of the daemon API
pub const DEFAULT_API_HOST: &str = "127.0.0.1";

/// Request from the CLI to the daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiRequest {
    /// Stream the status of every validator session
    ListSessionStatus,

    /// Stream the ROA table for a family
    ListRoa {
        family: RouteFamily,
        /// Server-side scoping hint (validator address)
        name: Option<String>,
    },

    /// Apply a control operation to one validator session
    ApplyControlOperation(ControlRequest),
}

/// Response to a unary request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiResponse {
    /// Generic success
    Ok,

    /// Error response
    Error { message: String },
}

/// One frame of a streamed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StreamFrame<T> {
    /// A single record
    Record(T),

    /// No more records follow
    End,

    /// The stream failed; no more frames follow
    Error { message: String },
}

/// Status of one validator session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    /// Validator address
    pub address: String,
    /// Unix time (seconds) the session came up, 0 if it never did
    pub uptime: i64,
    /// IPv4 records received from the validator
    pub received_ipv4: u64,
    /// IPv6 records received from the validator
    pub received_ipv6: u64,
}

impl SessionStatus {
    /// Whether the session has ever been established
    pub fn is_up(&self) -> bool {
        self.uptime != 0
    }
}

/// One Route Origin Authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoaEntry {
    pub prefix: String,
    pub prefix_len: u8,
    pub max_len: u8,
    /// Authorized origin AS
    pub asn: u32,
    /// Validator the ROA was learned from
    pub server_address: String,
    pub server_port: u16,
}

/// Control operation on a validator session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Reset,
    SoftReset,
    Enable,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Reset => "reset",
            Operation::SoftReset => "softreset",
            Operation::Enable => "enable",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is not one of `reset`, `softreset` or `enable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(Operation::Reset),
            "softreset" => Ok(Operation::SoftReset),
            "enable" => Ok(Operation::Enable),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Arguments of a control call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRequest {
    pub operation: Operation,
    /// Canonical textual form of the validator IP
    pub address: String,
    pub port: u16,
}

impl ControlRequest {
    /// Build a request against the standard RPKI port
    pub fn new(operation: Operation, address: impl Into<String>) -> Self {
        Self {
            operation,
            address: address.into(),
            port: RPKI_CONTROL_PORT,
        }
    }
}

/// Join a host and port, bracketing hosts that contain a colon (IPv6)
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
