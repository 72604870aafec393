//! Read accessors over the node's stores.
//!
//! # Responsibilities
//! - One method per logical record: build the key, query, decode
//! - Bucketed history reads with client-side range checks (`history`)
//! - List-then-fetch aggregates issued concurrently
//!
//! # Data Flow
//! ```text
//! identifiers → store::keys → Transport::query / query_subspace → types::*
//! ```
//!
//! # Design Decisions
//! - Every accessor is a thin async method; nothing is cached
//! - An absent record is `LinoError::EmptyResult`, except in key-match checks

mod account;
mod block;
mod developer;
mod global;
mod history;
mod param;
mod post;
mod proposal;
mod validator;

use std::sync::Arc;

use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;

use crate::error::LinoResult;
use crate::transport::Transport;

pub use history::HISTORY_BUCKET_SIZE;

/// Read access to chain state.
#[derive(Debug, Clone)]
pub struct Query {
    transport: Arc<Transport>,
}

impl Query {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch one record per key concurrently, preserving input order.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        keys: Vec<String>,
        store: &str,
    ) -> LinoResult<Vec<T>> {
        try_join_all(keys.iter().map(|key| self.transport.query::<T>(key, store))).await
    }
}
