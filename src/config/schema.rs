//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Chain ID used by local test nodes.
pub const DEFAULT_CHAIN_ID: &str = "test-chain-z0QKeL";

/// Root configuration for a Lino client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Node endpoint and chain settings.
    pub node: NodeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Node connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Tendermint RPC endpoint URL.
    pub url: String,

    /// Chain ID mixed into every signature.
    pub chain_id: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:26657".to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            rpc_timeout_secs: 10,
        }
    }
}

impl NodeConfig {
    pub fn new(url: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            chain_id: chain_id.into(),
            ..Default::default()
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
