//! Metrics collection.
//!
//! # Metrics
//! - `lino_rpc_requests_total` (counter): RPC calls by method, outcome
//! - `lino_rpc_duration_seconds` (histogram): RPC latency by method
//! - `lino_broadcast_rejected_total` (counter): rejected transactions by phase
//! - `lino_query_empty_total` (counter): queries with no stored value, by store
//!
//! # Design Decisions
//! - Emits through the `metrics` facade only; no exporter in the library
//! - Labels stay low-cardinality (never usernames or keys)

use std::time::Instant;

use metrics::{counter, histogram};

pub fn record_rpc_call(method: &'static str, outcome: &'static str, started: Instant) {
    counter!("lino_rpc_requests_total", "method" => method, "outcome" => outcome).increment(1);
    histogram!("lino_rpc_duration_seconds", "method" => method)
        .record(started.elapsed().as_secs_f64());
}

pub fn record_broadcast_rejected(phase: &'static str) {
    counter!("lino_broadcast_rejected_total", "phase" => phase).increment(1);
}

pub fn record_query_empty(store: &str) {
    counter!("lino_query_empty_total", "store" => store.to_string()).increment(1);
}
