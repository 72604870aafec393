//! Write-path tests: signing, wire encoding and admission results.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};

use lino_sdk::codec::{decode_tx, sign_bytes, StdTx};
use lino_sdk::crypto::keys::{encode_priv_key, pub_key_from_private};
use lino_sdk::crypto::signing::{sha256, verify_digest};
use lino_sdk::message::ClaimMsg;
use lino_sdk::store::keys;
use lino_sdk::{BroadcastPhase, LinoError};

mod common;
use common::{committed, query_key, start_mock_node, stored, MockNode};

const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn priv_key() -> String {
    encode_priv_key(TEST_KEY)
}

fn broadcast_tx(node: &MockNode) -> StdTx {
    let requests = node.requests_for("broadcast_tx_commit");
    assert_eq!(requests.len(), 1);
    decode_tx(requests[0]["params"]["tx"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_transfer_is_signed_and_committed() {
    let node = start_mock_node(|_, _| committed(json!({"log": ""}), json!({"log": ""}))).await;
    let result = node
        .client()
        .broadcast
        .transfer("alice", "bob", "1", "hi", &priv_key(), 0)
        .await
        .unwrap();
    assert_eq!(result.height, 42);

    let tx = broadcast_tx(&node);
    assert_eq!(
        tx.msg[0],
        json!({
            "type": "lino/transfer",
            "value": {"sender": "alice", "receiver": "bob", "amount": "1", "memo": "hi"}
        })
    );
    assert_eq!(tx.fee.gas, "0");
    assert!(tx.fee.amount.is_empty());

    let sig = &tx.signatures[0];
    assert_eq!(sig.pub_key.key_type, "tendermint/PubKeySecp256k1");
    let pub_key = sig.pub_key.to_prefixed_hex().unwrap();
    assert_eq!(pub_key, pub_key_from_private(&priv_key()).unwrap());

    let digest = sha256(sign_bytes(&tx.msg, "test-chain-z0QKeL", 0).unwrap().as_bytes());
    let der = BASE64.decode(&sig.signature).unwrap();
    assert!(verify_digest(&pub_key, &digest, &der));

    let wrong_chain = sha256(sign_bytes(&tx.msg, "other-chain", 0).unwrap().as_bytes());
    assert!(!verify_digest(&pub_key, &wrong_chain, &der));
}

#[tokio::test]
async fn test_check_tx_failure() {
    let node = start_mock_node(|_, _| {
        committed(json!({"code": 1, "log": "insufficient funds"}), json!({}))
    })
    .await;
    let err = node
        .client()
        .broadcast
        .transfer("alice", "bob", "1000", "", &priv_key(), 3)
        .await
        .unwrap_err();

    let rejection = err.as_broadcast().unwrap();
    assert_eq!(rejection.phase, BroadcastPhase::CheckTx);
    assert!(rejection.is_check_tx());
    assert_eq!(rejection.code, 1);
    assert_eq!(rejection.log, "insufficient funds");
}

#[tokio::test]
async fn test_deliver_tx_failure() {
    let node = start_mock_node(|_, _| {
        committed(json!({"code": 0}), json!({"code": 302, "log": "post not found"}))
    })
    .await;
    let err = node
        .client()
        .broadcast
        .like("alice", "bob", 10000, "p1", &priv_key(), 1)
        .await
        .unwrap_err();
    match err {
        LinoError::Broadcast(e) => {
            assert!(e.is_deliver_tx());
            assert_eq!(e.code, 302);
        }
        other => panic!("expected broadcast error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_zero_codes_are_success() {
    let node = start_mock_node(|_, _| committed(json!({"code": 0}), json!({"code": 0}))).await;
    let result = node
        .client()
        .broadcast
        .claim("alice", &priv_key(), 5)
        .await
        .unwrap();
    assert!(result.check_tx.failure_code().is_none());
    assert_eq!(broadcast_tx(&node).signatures[0].sequence, "5");
}

#[tokio::test]
async fn test_rpc_error_on_broadcast() {
    let node = start_mock_node(|_, _| {
        common::MockReply::Error(-32603, "tx already exists in cache")
    })
    .await;
    let err = node
        .client()
        .broadcast
        .claim("alice", &priv_key(), 0)
        .await
        .unwrap_err();
    assert!(matches!(err, LinoError::Rpc(ref e) if e.message == "tx already exists in cache"));
}

#[tokio::test]
async fn test_send_with_fresh_sequence() {
    let node = start_mock_node(|method, params: &Value| match method {
        "abci_query" => {
            assert_eq!(query_key(params), keys::account_meta_key("alice"));
            stored(json!({"sequence": "7", "json_meta": ""}))
        }
        _ => committed(json!({}), json!({})),
    })
    .await;

    let msg = ClaimMsg {
        username: "alice".into(),
    };
    node.client()
        .send_with_fresh_sequence("alice", msg, &priv_key())
        .await
        .unwrap();

    let tx = broadcast_tx(&node);
    assert_eq!(tx.signatures[0].sequence, "7");
    let digest = sha256(sign_bytes(&tx.msg, "test-chain-z0QKeL", 7).unwrap().as_bytes());
    let der = BASE64.decode(&tx.signatures[0].signature).unwrap();
    let pub_key = tx.signatures[0].pub_key.to_prefixed_hex().unwrap();
    assert!(verify_digest(&pub_key, &digest, &der));
}

#[tokio::test]
async fn test_register_carries_internal_keys() {
    let node = start_mock_node(|_, _| committed(json!({}), json!({}))).await;
    let pub_key = pub_key_from_private(&priv_key()).unwrap();
    node.client()
        .broadcast
        .register("lino", "1", "newbie", &pub_key, &pub_key, &pub_key, &priv_key(), 0)
        .await
        .unwrap();

    let tx = broadcast_tx(&node);
    let value = &tx.msg[0]["value"];
    assert_eq!(tx.msg[0]["type"], "lino/register");
    assert_eq!(value["new_reset_public_key"]["type"], "tendermint/PubKeySecp256k1");
    assert_eq!(
        value["new_app_public_key"],
        serde_json::to_value(&tx.signatures[0].pub_key).unwrap()
    );
}
