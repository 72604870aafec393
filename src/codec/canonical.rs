//! Canonical transaction encoding.
//!
//! # Sign bytes
//! ```text
//! StdSignMsg { account_number, chain_id, fee, memo, msgs, sequence }
//!     → sort_object      (every object's keys, case-insensitive, recursively)
//!     → number_to_string (every numeric leaf becomes its decimal string)
//!     → compact JSON text
//!     → SHA-256          (the digest that is signed)
//! ```
//!
//! # Wire transaction
//! The `StdTx` gets the same number normalisation but keeps field order, then
//! its JSON text is base64-encoded.
//!
//! Any deviation here produces signatures the node silently fails to verify,
//! so the ordering and normalisation rules must not change.

use std::cmp::Ordering;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::pubkey::InternalPubKey;
use crate::crypto::signing::sha256;
use crate::error::LinoResult;
use crate::types::Coin;

/// Account number is unused by the chain and always sent as `"0"`.
pub const ACCOUNT_NUMBER: &str = "0";

/// Transaction fee. Lino has no gas market, so only the zero fee is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

impl StdFee {
    pub fn zero() -> Self {
        Self {
            amount: Vec::new(),
            gas: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: InternalPubKey,
    /// Base64 of the DER-encoded signature.
    pub signature: String,
    pub account_number: String,
    pub sequence: String,
}

/// The transaction envelope as broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<Value>,
    pub signatures: Vec<StdSignature>,
    pub fee: StdFee,
}

#[derive(Serialize)]
struct StdSignMsg<'a> {
    account_number: &'a str,
    chain_id: &'a str,
    fee: StdFee,
    memo: &'a str,
    msgs: &'a [Value],
    sequence: String,
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_ascii_lowercase()
        .cmp(&b.to_ascii_lowercase())
        .then_with(|| a.cmp(b))
}

/// Recursively order every object's keys case-insensitively.
pub fn sort_object(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_object(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_object).collect()),
        other => other,
    }
}

/// Recursively replace every JSON number with its decimal string.
pub fn number_to_string(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, number_to_string(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(number_to_string).collect()),
        other => other,
    }
}

/// The canonical JSON text that is hashed and signed.
pub fn sign_bytes(msgs: &[Value], chain_id: &str, seq: u64) -> LinoResult<String> {
    let sign_msg = StdSignMsg {
        account_number: ACCOUNT_NUMBER,
        chain_id,
        fee: StdFee::zero(),
        memo: "",
        msgs,
        sequence: seq.to_string(),
    };
    let canonical = number_to_string(sort_object(serde_json::to_value(sign_msg)?));
    Ok(serde_json::to_string(&canonical)?)
}

/// SHA-256 of [`sign_bytes`].
pub fn encode_sign_msg(msgs: &[Value], chain_id: &str, seq: u64) -> LinoResult<[u8; 32]> {
    Ok(sha256(sign_bytes(msgs, chain_id, seq)?.as_bytes()))
}

/// Assemble the signed `StdTx` and return its base64 wire form.
pub fn encode_tx(
    msgs: Vec<Value>,
    pub_key: InternalPubKey,
    signature_der: &[u8],
    seq: u64,
) -> LinoResult<String> {
    let tx = StdTx {
        msg: msgs,
        signatures: vec![StdSignature {
            pub_key,
            signature: BASE64.encode(signature_der),
            account_number: ACCOUNT_NUMBER.to_string(),
            sequence: seq.to_string(),
        }],
        fee: StdFee::zero(),
    };
    let normalized = number_to_string(serde_json::to_value(tx)?);
    Ok(BASE64.encode(serde_json::to_string(&normalized)?))
}

/// Decode a base64 wire transaction, e.g. one taken from a block.
pub fn decode_tx(tx: &str) -> LinoResult<StdTx> {
    let bytes = BASE64.decode(tx.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transfer() -> Value {
        json!({
            "type": "lino/transfer",
            "value": {"sender": "alice", "receiver": "bob", "amount": "1", "memo": "hi"}
        })
    }

    #[test]
    fn test_sort_object_case_insensitive() {
        let sorted = sort_object(json!({"b": 1, "CDN": 2, "a": {"z": 1, "Y": 2}}));
        let keys: Vec<&String> = sorted.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b", "CDN"]);
        let inner: Vec<&String> = sorted["a"].as_object().unwrap().keys().collect();
        assert_eq!(inner, ["Y", "z"]);
    }

    #[test]
    fn test_sort_object_folds_ascii_only() {
        let sorted = sort_object(json!({"\u{e9}a": 1, "\u{c9}b": 2}));
        let keys: Vec<&String> = sorted.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["\u{c9}b", "\u{e9}a"]);
    }

    #[test]
    fn test_sort_object_tie_break_is_deterministic() {
        let a = sort_object(json!({"key": 1, "Key": 2}));
        let b = sort_object(json!({"Key": 2, "key": 1}));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_sort_object_sorts_inside_arrays() {
        let sorted = sort_object(json!([{"b": 1, "a": 2}]));
        assert_eq!(serde_json::to_string(&sorted).unwrap(), r#"[{"a":2,"b":1}]"#);
    }

    #[test]
    fn test_number_to_string() {
        let v = number_to_string(json!({"n": 5, "f": 0.5, "b": true, "s": "x", "l": [1, null]}));
        assert_eq!(v, json!({"n": "5", "f": "0.5", "b": true, "s": "x", "l": ["1", null]}));
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        let input = json!({"z": [{"y": 1, "X": 2.5}], "a": {"c": 3, "B": "4"}});
        let once = number_to_string(sort_object(input));
        let twice = number_to_string(sort_object(once.clone()));
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn test_sign_bytes_layout() {
        let bytes = sign_bytes(&[transfer()], "test-chain-z0QKeL", 0).unwrap();
        assert_eq!(
            bytes,
            concat!(
                r#"{"account_number":"0","chain_id":"test-chain-z0QKeL","#,
                r#""fee":{"amount":[],"gas":"0"},"memo":"","#,
                r#""msgs":[{"type":"lino/transfer","value":{"amount":"1","memo":"hi","receiver":"bob","sender":"alice"}}],"#,
                r#""sequence":"0"}"#
            )
        );
    }

    #[test]
    fn test_sign_bytes_stable_under_reordering_and_number_form() {
        let a = json!({"type": "lino/like", "value": {"username": "u", "weight": 10000}});
        let b = json!({"value": {"weight": "10000", "username": "u"}, "type": "lino/like"});
        assert_eq!(
            encode_sign_msg(&[a], "c", 3).unwrap(),
            encode_sign_msg(&[b], "c", 3).unwrap()
        );
    }

    #[test]
    fn test_sign_bytes_depend_on_chain_and_sequence() {
        let base = encode_sign_msg(&[transfer()], "c", 1).unwrap();
        assert_ne!(base, encode_sign_msg(&[transfer()], "c", 2).unwrap());
        assert_ne!(base, encode_sign_msg(&[transfer()], "d", 1).unwrap());
    }

    #[test]
    fn test_encode_tx_round_trip_keeps_order() {
        let pub_key = InternalPubKey::from_raw("tendermint/PubKeySecp256k1", &[2; 33]);
        let msg = json!({"type": "lino/like", "value": {"username": "u", "weight": 5}});
        let tx = encode_tx(vec![msg], pub_key.clone(), &[0x30, 0x01], 7).unwrap();

        let text = String::from_utf8(BASE64.decode(&tx).unwrap()).unwrap();
        assert!(text.starts_with(
            r#"{"msg":[{"type":"lino/like","value":{"username":"u","weight":"5"}}]"#
        ));

        let decoded = decode_tx(&tx).unwrap();
        assert_eq!(decoded.fee, StdFee::zero());
        assert_eq!(decoded.signatures[0].pub_key, pub_key);
        assert_eq!(decoded.signatures[0].sequence, "7");
        assert_eq!(decoded.signatures[0].account_number, "0");
        assert_eq!(decoded.signatures[0].signature, BASE64.encode([0x30, 0x01]));
    }
}
