//! Shared utilities for integration testing: a programmable mock Tendermint node.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use lino_sdk::{LinoClient, NodeConfig};

/// What the mock node answers to one JSON-RPC call.
pub enum MockReply {
    /// `{"result": value}`
    Result(Value),
    /// `{"error": {code, message}}` with HTTP 500, as Tendermint does.
    Error(i64, &'static str),
    /// A bare HTTP status with a non-JSON body.
    Status(u16, &'static str),
}

type Handler = dyn Fn(&str, &Value) -> MockReply + Send + Sync;

struct NodeState {
    handler: Box<Handler>,
    requests: Mutex<Vec<Value>>,
}

pub struct MockNode {
    pub addr: SocketAddr,
    state: Arc<NodeState>,
}

impl MockNode {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> LinoClient {
        let mut config = NodeConfig::new(self.url(), "test-chain-z0QKeL");
        config.rpc_timeout_secs = 5;
        LinoClient::new(&config).unwrap()
    }

    /// Every JSON-RPC request body received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, method: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r["method"] == method)
            .collect()
    }
}

async fn rpc(State(state): State<Arc<NodeState>>, Json(req): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(req.clone());
    let method = req["method"].as_str().unwrap_or_default().to_string();
    let id = req["id"].clone();

    match (state.handler)(&method, &req["params"]) {
        MockReply::Result(result) => {
            Json(json!({"jsonrpc": "2.0", "id": id, "result": result})).into_response()
        }
        MockReply::Error(code, message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": code, "message": message, "data": ""}
            })),
        )
            .into_response(),
        MockReply::Status(status, body) => (
            StatusCode::from_u16(status).unwrap(),
            body.to_string(),
        )
            .into_response(),
    }
}

/// Start a mock node on an ephemeral port.
pub async fn start_mock_node<F>(handler: F) -> MockNode
where
    F: Fn(&str, &Value) -> MockReply + Send + Sync + 'static,
{
    let state = Arc::new(NodeState {
        handler: Box::new(handler),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/", post(rpc))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockNode { addr, state }
}

/// `abci_query` result carrying `doc` as the stored value.
pub fn stored(doc: Value) -> MockReply {
    MockReply::Result(json!({
        "response": {"code": 0, "log": "", "value": BASE64.encode(doc.to_string())}
    }))
}

/// `abci_query` result for a key with nothing stored.
pub fn nothing_stored() -> MockReply {
    MockReply::Result(json!({"response": {"code": 0, "log": "", "value": null}}))
}

/// `abci_query` subspace result; keys are raw on-chain key bytes.
pub fn subspace(entries: Vec<(Vec<u8>, Value)>) -> MockReply {
    let entries: Vec<Value> = entries
        .into_iter()
        .map(|(key, value)| {
            json!({
                "key": BASE64.encode(key),
                "value": BASE64.encode(value.to_string()),
            })
        })
        .collect();
    stored(Value::Array(entries))
}

/// `broadcast_tx_commit` result with the given phase outcomes.
pub fn committed(check_tx: Value, deliver_tx: Value) -> MockReply {
    MockReply::Result(json!({
        "check_tx": check_tx,
        "deliver_tx": deliver_tx,
        "hash": "9F86D081884C7D659A2FEAA0C55AD015A3BF4F1B2B0B822CD15D6C15B0F00A08",
        "height": "42"
    }))
}

/// The hex key an `abci_query` asked for.
pub fn query_key(params: &Value) -> String {
    params["data"].as_str().unwrap_or_default().to_string()
}

pub fn query_path(params: &Value) -> String {
    params["path"].as_str().unwrap_or_default().to_string()
}

/// Raw on-chain key bytes for a hex key builder's output.
pub fn raw_key(hex_key: &str) -> Vec<u8> {
    hex::decode(hex_key).unwrap()
}
