//! Tendermint JSON-RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - POST JSON-RPC 2.0 requests to a single node URL
//! - Bound every call by the configured timeout
//! - Surface the node's `error` object unchanged
//! - Record per-method latency and outcome metrics

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::schema::NodeConfig;
use crate::error::{LinoError, LinoResult};
use crate::observability::metrics;
use crate::transport::types::{
    AbciQueryParams, AbciQueryResult, BlockParams, BroadcastResult, BroadcastTxParams,
    RpcRequest, RpcResponse,
};

/// Thin JSON-RPC client for one Tendermint node.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: url::Url,
    timeout_secs: u64,
}

impl RpcClient {
    pub fn new(config: &NodeConfig) -> LinoResult<Self> {
        let url: url::Url = config.url.parse().map_err(|e| {
            LinoError::Config(format!("Invalid node URL '{}': {}", config.url, e))
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            url,
            timeout_secs: config.rpc_timeout_secs,
        })
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    async fn call<P, R>(&self, method: &'static str, params: P) -> LinoResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let started = Instant::now();
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: uuid::Uuid::new_v4().to_string(),
            method,
            params,
        };

        let result = match timeout(
            Duration::from_secs(self.timeout_secs),
            self.send(&request),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(LinoError::Timeout(self.timeout_secs)),
        };

        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::record_rpc_call(method, outcome, started);
        tracing::debug!(
            method,
            request_id = %request.id,
            outcome,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "RPC call finished"
        );
        result
    }

    async fn send<P, R>(&self, request: &RpcRequest<'_, P>) -> LinoResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let resp = self.http.post(self.url.clone()).json(request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        // Tendermint reports RPC errors with HTTP 500 and a JSON-RPC body.
        let parsed: RpcResponse<R> = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(LinoError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(error) = parsed.error {
            return Err(LinoError::Rpc(error));
        }
        match parsed.result {
            Some(result) => Ok(result),
            None if !status.is_success() => Err(LinoError::HttpStatus {
                status: status.as_u16(),
                body,
            }),
            None => Err(LinoError::Config(format!(
                "node response to {} carried neither result nor error",
                request.method
            ))),
        }
    }

    /// `abci_query` against a store path with a hex-encoded key.
    pub async fn abci_query(&self, path: String, data_hex: &str) -> LinoResult<AbciQueryResult> {
        let params = AbciQueryParams {
            path,
            data: data_hex,
            height: "0".to_string(),
            trusted: false,
        };
        self.call("abci_query", params).await
    }

    /// `broadcast_tx_commit` with a base64 wire transaction.
    pub async fn broadcast_tx_commit(&self, tx: &str) -> LinoResult<BroadcastResult> {
        self.call("broadcast_tx_commit", BroadcastTxParams { tx }).await
    }

    pub async fn block(&self, height: u64) -> LinoResult<Value> {
        let params = BlockParams {
            height: height.to_string(),
        };
        self.call("block", params).await
    }

    pub async fn status(&self) -> LinoResult<Value> {
        self.call("status", serde_json::json!({})).await
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &self.url.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
