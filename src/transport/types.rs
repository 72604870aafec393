//! JSON-RPC envelopes and Tendermint result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::common::int;

/// JSON-RPC 2.0 request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: &'a str,
    pub params: P,
}

/// JSON-RPC 2.0 response; exactly one of `result` / `error` is expected.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<R> {
    pub result: Option<R>,
    pub error: Option<RpcErrorObject>,
}

/// The node's JSON-RPC `error` object, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AbciQueryParams<'a> {
    pub path: String,
    pub data: &'a str,
    pub height: String,
    pub trusted: bool,
}

#[derive(Debug, Serialize)]
pub struct BroadcastTxParams<'a> {
    pub tx: &'a str,
}

#[derive(Debug, Serialize)]
pub struct BlockParams {
    pub height: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbciQueryResult {
    #[serde(default)]
    pub response: AbciQueryResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbciQueryResponse {
    pub code: Option<u32>,
    pub log: String,
    /// Base64 of the stored JSON document; absent or empty when nothing is stored.
    pub value: Option<String>,
}

/// One raw entry of a `subspace-js` query.
#[derive(Debug, Clone, Deserialize)]
pub struct RawKv {
    pub key: String,
    pub value: String,
}

/// Outcome of one admission phase. A missing or zero `code` means success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxResult {
    pub code: Option<u32>,
    pub log: String,
    pub data: Option<String>,
}

impl TxResult {
    /// Non-zero code, if the phase failed.
    pub fn failure_code(&self) -> Option<u32> {
        self.code.filter(|c| *c != 0)
    }
}

/// Result of `broadcast_tx_commit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastResult {
    pub check_tx: TxResult,
    pub deliver_tx: TxResult,
    pub hash: String,
    #[serde(deserialize_with = "int")]
    pub height: i64,
}

/// How the on-chain key of a subspace entry is trimmed before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetKeyBy {
    /// Text after the first `/`.
    SubstringAfterSeparator,
    /// Hex of the bytes after the first `/`.
    HexSubstringAfterSeparator,
    /// Text after the one-byte substore tag.
    SubstringAfterSubstore,
}
