//! Error taxonomy for the SDK.
//!
//! # Categories
//! - Transport: HTTP failures, non-JSON bodies, JSON-RPC `error` objects, timeouts
//! - Query-empty: the node has no data at the requested key
//! - Broadcast: the node rejected a transaction in CheckTx or DeliverTx
//! - Client-side validation: rejected before any network call
//! - Decode: malformed base64/hex/JSON coming back from the node
//!
//! Nothing is retried internally. Whether a failure is fatal is up to the caller.

use thiserror::Error;

use crate::crypto::keys::KeyError;
use crate::transport::types::RpcErrorObject;

/// Phase of Tendermint's two-step transaction admission that rejected a tx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastPhase {
    /// Mempool check. The tx never entered a block; the same sequence can be reused.
    CheckTx,
    /// In-block execution. The sequence has advanced and must be re-fetched.
    DeliverTx,
}

impl BroadcastPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastPhase::CheckTx => "check_tx",
            BroadcastPhase::DeliverTx => "deliver_tx",
        }
    }
}

impl std::fmt::Display for BroadcastPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-level rejection reported by `broadcast_tx_commit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("broadcast rejected in {phase} with code {code}: {log}")]
pub struct BroadcastError {
    pub phase: BroadcastPhase,
    pub code: u32,
    pub log: String,
}

impl BroadcastError {
    pub fn new(phase: BroadcastPhase, code: u32, log: impl Into<String>) -> Self {
        Self {
            phase,
            code,
            log: log.into(),
        }
    }

    pub fn is_check_tx(&self) -> bool {
        self.phase == BroadcastPhase::CheckTx
    }

    pub fn is_deliver_tx(&self) -> bool {
        self.phase == BroadcastPhase::DeliverTx
    }
}

/// Errors that can occur while talking to a Lino node.
#[derive(Debug, Error)]
pub enum LinoError {
    /// HTTP connection or request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status and a body that is not JSON-RPC.
    #[error("node returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// JSON-RPC level failure, carrying the node's `error` object verbatim.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(RpcErrorObject),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node has no value stored at the queried key or subspace.
    #[error("query failed: empty result for key {key} in store {store}")]
    EmptyResult { store: String, key: String },

    /// The node answered the ABCI query with a non-zero code.
    #[error("query rejected by node with code {code}: {log}")]
    QueryRejected { code: u32, log: String },

    /// The transaction was rejected by the node.
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),

    /// Arguments rejected before any network call was made.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// An `amount` field could not be rescaled.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid node URL or other configuration problem.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A stored value decoded but holds something the chain never writes.
    #[error("unexpected stored value: {0}")]
    UnexpectedValue(String),
}

impl LinoError {
    /// True when the node simply had nothing stored at the key.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, LinoError::EmptyResult { .. })
    }

    /// The broadcast rejection, if this error is one.
    pub fn as_broadcast(&self) -> Option<&BroadcastError> {
        match self {
            LinoError::Broadcast(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for SDK operations.
pub type LinoResult<T> = Result<T, LinoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_error_display() {
        let err = BroadcastError::new(BroadcastPhase::CheckTx, 1, "insufficient funds");
        assert_eq!(
            err.to_string(),
            "broadcast rejected in check_tx with code 1: insufficient funds"
        );
        assert!(err.is_check_tx());
        assert!(!err.is_deliver_tx());
    }

    #[test]
    fn test_error_helpers() {
        let err = LinoError::EmptyResult {
            store: "account".into(),
            key: "00616c696365".into(),
        };
        assert!(err.is_empty_result());
        assert!(err.as_broadcast().is_none());
        assert!(err.to_string().contains("00616c696365"));

        let err: LinoError = BroadcastError::new(BroadcastPhase::DeliverTx, 7, "bad").into();
        assert_eq!(err.as_broadcast().map(|b| b.code), Some(7));
    }

    #[test]
    fn test_query_rejected_keeps_node_log() {
        let err = LinoError::QueryRejected {
            code: 1,
            log: "unknown store".into(),
        };
        assert!(!err.is_empty_result());
        assert_eq!(
            err.to_string(),
            "query rejected by node with code 1: unknown store"
        );
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(LinoError::Timeout(10).to_string(), "RPC timeout after 10 seconds");
    }
}
