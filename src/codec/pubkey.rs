//! Internal `{type, value}` public key representation.
//!
//! The node's JSON codec wraps public keys as a registered type name plus the
//! base64 of the raw key bytes. Users and validators use different families.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::crypto::keys::{
    encode_pub_key, encode_validator_pub_key, pub_key_bytes, validator_pub_key_bytes, KeyError,
};

pub const SECP256K1_PUB_KEY_TYPE: &str = "tendermint/PubKeySecp256k1";
pub const ED25519_PUB_KEY_TYPE: &str = "tendermint/PubKeyEd25519";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalPubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

impl InternalPubKey {
    /// Wrap a user's prefixed secp256k1 public key hex.
    pub fn secp256k1(pub_key_hex: &str) -> Result<Self, KeyError> {
        Ok(Self::from_raw(SECP256K1_PUB_KEY_TYPE, &pub_key_bytes(pub_key_hex)?))
    }

    /// Wrap a validator's prefixed Ed25519 public key hex.
    pub fn ed25519(pub_key_hex: &str) -> Result<Self, KeyError> {
        Ok(Self::from_raw(
            ED25519_PUB_KEY_TYPE,
            &validator_pub_key_bytes(pub_key_hex)?,
        ))
    }

    pub fn from_raw(key_type: &str, raw: &[u8]) -> Self {
        Self {
            key_type: key_type.to_string(),
            value: BASE64.encode(raw),
        }
    }

    /// Back to the prefixed hex form, choosing the prefix by key family.
    pub fn to_prefixed_hex(&self) -> Result<String, KeyError> {
        let raw = BASE64
            .decode(&self.value)
            .map_err(|_| KeyError::InvalidPublicKey)?;
        let raw_hex = hex::encode(raw);
        match self.key_type.as_str() {
            ED25519_PUB_KEY_TYPE => Ok(encode_validator_pub_key(&raw_hex)),
            SECP256K1_PUB_KEY_TYPE => Ok(encode_pub_key(&raw_hex)),
            _ => Err(KeyError::InvalidPublicKey),
        }
    }
}
