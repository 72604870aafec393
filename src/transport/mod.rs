//! Transport to a Tendermint node.
//!
//! # Data Flow
//! ```text
//! read path:
//!     store key (hex) → rpc.rs abci_query → base64 JSON document
//!         → decode_object (base unit → LNO) → typed record
//!
//! write path:
//!     Msg → encode() → canonical sign bytes → SHA-256 → low-S DER signature
//!         → StdTx (base64) → rpc.rs broadcast_tx_commit
//!         → check_tx / deliver_tx code inspection → BroadcastResult
//! ```
//!
//! # Design Decisions
//! - No retries: every failure surfaces to the caller
//! - An absent value is `EmptyResult`, distinct from transport failures
//! - A non-zero ABCI query code is `QueryRejected`, carrying the node's log
//! - A present-but-zero result code is success

pub mod rpc;
pub mod types;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::amount::decode_object;
use crate::codec::canonical::{encode_sign_msg, encode_tx};
use crate::codec::pubkey::{InternalPubKey, SECP256K1_PUB_KEY_TYPE};
use crate::config::schema::NodeConfig;
use crate::crypto::keys::KeyPair;
use crate::crypto::signing::sign_digest;
use crate::error::{BroadcastError, BroadcastPhase, LinoError, LinoResult};
use crate::message::Msg;
use crate::observability::metrics;
use crate::store::KEY_SEPARATOR;
use crate::types::ResultKv;

pub use rpc::RpcClient;
pub use types::{BroadcastResult, GetKeyBy, RawKv, RpcErrorObject, TxResult};

/// Query and broadcast access to one node on one chain.
#[derive(Debug, Clone)]
pub struct Transport {
    rpc: RpcClient,
    chain_id: String,
}

impl Transport {
    pub fn new(config: &NodeConfig) -> LinoResult<Self> {
        Ok(Self {
            rpc: RpcClient::new(config)?,
            chain_id: config.chain_id.clone(),
        })
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Fetch the raw JSON document stored at `key`, before any rescale.
    async fn query_raw(&self, key: &str, store: &str, path: String) -> LinoResult<Value> {
        let response = self.rpc.abci_query(path, key).await?.response;
        if let Some(code) = response.code.filter(|code| *code != 0) {
            tracing::warn!(store, key, code, log = %response.log, "Query rejected by node");
            return Err(LinoError::QueryRejected {
                code,
                log: response.log,
            });
        }
        let value = response.value.unwrap_or_default();
        if value.is_empty() {
            metrics::record_query_empty(store);
            tracing::debug!(store, key, "Query returned no value");
            return Err(LinoError::EmptyResult {
                store: store.to_string(),
                key: key.to_string(),
            });
        }
        let bytes = BASE64.decode(value.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Read and decode the value stored at `key` in `store`.
    pub async fn query<T: DeserializeOwned>(&self, key: &str, store: &str) -> LinoResult<T> {
        let doc = self
            .query_raw(key, store, format!("/store/{store}/key"))
            .await?;
        Ok(serde_json::from_value(decode_object(doc)?)?)
    }

    /// Read every entry under `prefix` in `store`.
    ///
    /// Fails with `EmptyResult` when the node returns no data, like [`Self::query`].
    /// A stored `[]` document yields an empty list.
    pub async fn query_subspace<T: DeserializeOwned>(
        &self,
        prefix: &str,
        store: &str,
        get_key_by: GetKeyBy,
    ) -> LinoResult<Vec<ResultKv<T>>> {
        let doc = self
            .query_raw(prefix, store, format!("/store/{store}/subspace-js"))
            .await?;
        if doc.is_null() {
            metrics::record_query_empty(store);
            return Err(LinoError::EmptyResult {
                store: store.to_string(),
                key: prefix.to_string(),
            });
        }

        let entries: Vec<RawKv> = serde_json::from_value(doc)?;
        entries
            .into_iter()
            .map(|entry| -> LinoResult<ResultKv<T>> {
                let raw_key = BASE64.decode(entry.key.as_bytes())?;
                let raw_value = BASE64.decode(entry.value.as_bytes())?;
                let value: Value = serde_json::from_slice(&raw_value)?;
                Ok(ResultKv {
                    key: trim_key(&raw_key, get_key_by),
                    value: serde_json::from_value(decode_object(value)?)?,
                })
            })
            .collect()
    }

    /// Raw `block` RPC result.
    pub async fn block(&self, height: u64) -> LinoResult<Value> {
        self.rpc.block(height).await
    }

    /// Raw `status` RPC result.
    pub async fn status(&self) -> LinoResult<Value> {
        self.rpc.status().await
    }

    /// Sign `msg` offline and return the base64 wire transaction.
    pub fn build_signed_tx(&self, msg: &Msg, priv_key_hex: &str, seq: u64) -> LinoResult<String> {
        let key = KeyPair::from_priv_key_hex(priv_key_hex)?;
        let msgs = vec![msg.encode()?];
        let digest = encode_sign_msg(&msgs, &self.chain_id, seq)?;
        let signature = sign_digest(&key, &digest)?;
        let pub_key = InternalPubKey::from_raw(SECP256K1_PUB_KEY_TYPE, &key.pub_key_bytes());
        encode_tx(msgs, pub_key, &signature, seq)
    }

    /// Sign, broadcast and wait for commit.
    pub async fn sign_build_broadcast(
        &self,
        msg: Msg,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let tx = self.build_signed_tx(&msg, priv_key_hex, seq)?;
        let result = self.rpc.broadcast_tx_commit(&tx).await?;

        let phases = [
            (BroadcastPhase::CheckTx, &result.check_tx),
            (BroadcastPhase::DeliverTx, &result.deliver_tx),
        ];
        for (phase, outcome) in phases {
            if let Some(code) = outcome.failure_code() {
                metrics::record_broadcast_rejected(phase.as_str());
                tracing::warn!(
                    msg_type = msg.wire_type(),
                    phase = phase.as_str(),
                    code,
                    log = %outcome.log,
                    "Transaction rejected"
                );
                return Err(BroadcastError::new(phase, code, outcome.log.clone()).into());
            }
        }

        tracing::debug!(
            msg_type = msg.wire_type(),
            hash = %result.hash,
            height = result.height,
            "Transaction committed"
        );
        Ok(result)
    }
}

/// Trim a raw subspace key to the part a caller cares about.
fn trim_key(raw: &[u8], get_key_by: GetKeyBy) -> String {
    let after_separator = move || {
        let sep = KEY_SEPARATOR.as_bytes()[0];
        match raw.iter().position(|b| *b == sep) {
            Some(i) => &raw[i + 1..],
            None => raw,
        }
    };
    match get_key_by {
        GetKeyBy::SubstringAfterSeparator => {
            String::from_utf8_lossy(after_separator()).into_owned()
        }
        GetKeyBy::HexSubstringAfterSeparator => hex::encode(after_separator()),
        GetKeyBy::SubstringAfterSubstore => {
            String::from_utf8_lossy(raw.get(1..).unwrap_or_default()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::canonical::{decode_tx, sign_bytes};
    use crate::crypto::keys::encode_priv_key;
    use crate::crypto::signing::{sha256, verify_digest};
    use crate::message::TransferMsg;

    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn transport() -> Transport {
        Transport::new(&NodeConfig::default()).unwrap()
    }

    #[test]
    fn test_trim_key_modes() {
        let raw = b"\x03alice/bob";
        assert_eq!(trim_key(raw, GetKeyBy::SubstringAfterSeparator), "bob");
        assert_eq!(
            trim_key(raw, GetKeyBy::HexSubstringAfterSeparator),
            hex::encode("bob")
        );
        assert_eq!(trim_key(raw, GetKeyBy::SubstringAfterSubstore), "alice/bob");
        assert_eq!(trim_key(b"", GetKeyBy::SubstringAfterSubstore), "");
    }

    #[test]
    fn test_signed_transfer_verifies() {
        let t = transport();
        let priv_key = encode_priv_key(TEST_KEY);
        let msg: Msg = TransferMsg {
            sender: "alice".into(),
            receiver: "bob".into(),
            amount: "1".into(),
            memo: "hi".into(),
        }
        .into();

        let tx = decode_tx(&t.build_signed_tx(&msg, &priv_key, 0).unwrap()).unwrap();
        assert_eq!(tx.msg.len(), 1);
        assert_eq!(tx.signatures.len(), 1);
        let sig = &tx.signatures[0];
        assert_eq!(sig.sequence, "0");
        assert_eq!(sig.account_number, "0");

        let digest = sha256(
            sign_bytes(&tx.msg, "test-chain-z0QKeL", 0)
                .unwrap()
                .as_bytes(),
        );
        let der = BASE64.decode(&sig.signature).unwrap();
        let pub_hex = sig.pub_key.to_prefixed_hex().unwrap();
        assert!(verify_digest(&pub_hex, &digest, &der));
        assert!(!verify_digest(&pub_hex, &sha256(b"other"), &der));
    }

    #[test]
    fn test_build_rejects_bad_key() {
        let msg: Msg = crate::message::ClaimMsg {
            username: "alice".into(),
        }
        .into();
        assert!(matches!(
            transport().build_signed_tx(&msg, "deadbeef", 0),
            Err(LinoError::Key(_))
        ));
    }
}
