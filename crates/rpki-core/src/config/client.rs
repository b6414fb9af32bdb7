//! Client configuration

use serde::{Deserialize, Serialize};

use crate::ipc::{join_host_port, DEFAULT_API_HOST, DEFAULT_API_PORT};

/// On-disk layout of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub client: ClientConfig,
}

/// Where to reach the daemon API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Daemon API host
    pub host: String,

    /// Daemon API port
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
        }
    }
}

impl ClientConfig {
    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Get the API address (host:port)
    pub fn api_address(&self) -> String {
        join_host_port(&self.host, self.port)
    }
}
