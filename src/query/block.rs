//! Raw chain reads: blocks and node status.

use serde_json::Value;

use crate::codec::canonical::{decode_tx, StdTx};
use crate::error::LinoResult;
use crate::query::Query;

impl Query {
    /// The node's `block` result, passed through untouched.
    pub async fn get_block(&self, height: u64) -> LinoResult<Value> {
        self.transport.block(height).await
    }

    /// Decoded transactions of the block at `height`, in block order.
    pub async fn get_txs_in_block(&self, height: u64) -> LinoResult<Vec<StdTx>> {
        let block = self.get_block(height).await?;
        txs_of(&block)
    }

    pub async fn get_status(&self) -> LinoResult<Value> {
        self.transport.status().await
    }
}

fn txs_of(block: &Value) -> LinoResult<Vec<StdTx>> {
    match block.pointer("/block/data/txs").and_then(Value::as_array) {
        Some(txs) => txs
            .iter()
            .filter_map(Value::as_str)
            .map(decode_tx)
            .collect(),
        None => Ok(Vec::new()),
    }
}
