//! Write accessors: build one message, sign it, broadcast it.
//!
//! # Responsibilities
//! - One method per message type, taking typed parameters
//! - Delegate signing and admission checks to the transport
//!
//! # Design Decisions
//! - No local validation; the node accepts or rejects
//! - Callers supply the sequence number; see `LinoClient::send_with_fresh_sequence`

mod account;
mod post;
mod proposal;
mod stake;

use std::sync::Arc;

use crate::error::LinoResult;
use crate::message::Msg;
use crate::transport::{BroadcastResult, Transport};

pub use post::NewPost;

/// Signed write access to the chain.
#[derive(Debug, Clone)]
pub struct Broadcast {
    transport: Arc<Transport>,
}

impl Broadcast {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Sign and broadcast a pre-built message.
    pub async fn send(
        &self,
        msg: impl Into<Msg>,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        self.transport
            .sign_build_broadcast(msg.into(), priv_key_hex, seq)
            .await
    }
}
