//! The SDK entry point.

use std::sync::Arc;

use crate::broadcast::Broadcast;
use crate::config::schema::NodeConfig;
use crate::error::LinoResult;
use crate::message::Msg;
use crate::query::Query;
use crate::transport::{BroadcastResult, Transport};

/// Query and broadcast handles sharing one transport.
#[derive(Debug, Clone)]
pub struct LinoClient {
    pub query: Query,
    pub broadcast: Broadcast,
    transport: Arc<Transport>,
}

impl LinoClient {
    pub fn new(config: &NodeConfig) -> LinoResult<Self> {
        let transport = Arc::new(Transport::new(config)?);
        tracing::debug!(
            url = %transport.rpc().url(),
            chain_id = transport.chain_id(),
            "Lino client created"
        );
        Ok(Self {
            query: Query::new(Arc::clone(&transport)),
            broadcast: Broadcast::new(Arc::clone(&transport)),
            transport,
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Read `username`'s sequence immediately before signing and broadcasting.
    ///
    /// Concurrent senders on the same account can still race between the read
    /// and the broadcast; a `CheckTx` rejection is the signal to retry.
    pub async fn send_with_fresh_sequence(
        &self,
        username: &str,
        msg: impl Into<Msg>,
        priv_key_hex: &str,
    ) -> LinoResult<BroadcastResult> {
        let seq = self.query.get_seq_number(username).await?;
        self.broadcast.send(msg, priv_key_hex, seq).await
    }
}
