//! Key material and its prefixed-hex wire encoding.
//!
//! Keys travel as hex strings carrying a fixed 5-byte amino prefix that names
//! the key family. Decoding with the wrong prefix is an error.
//!
//! # Security
//! - Private keys are never logged or serialized by this crate
//! - `KeyPair` redacts itself in `Debug` output

use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use thiserror::Error;

/// Prefix of a hex-encoded secp256k1 private key.
pub const PRIV_KEY_PREFIX: &str = "E1B0F79B20";
/// Prefix of a hex-encoded compressed secp256k1 public key.
pub const PUB_KEY_PREFIX: &str = "EB5AE98721";
/// Prefix of a hex-encoded Ed25519 private key (validators only).
pub const VALIDATOR_PRIV_KEY_PREFIX: &str = "A328891040";
/// Prefix of a hex-encoded Ed25519 public key (validators only).
pub const VALIDATOR_PUB_KEY_PREFIX: &str = "1624DE6420";

/// Errors from key parsing and signature handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key does not start with expected prefix {expected}")]
    WrongPrefix { expected: &'static str },

    #[error("key is not valid hex")]
    InvalidHex,

    #[error("invalid secp256k1 private key")]
    InvalidPrivateKey,

    #[error("invalid secp256k1 public key")]
    InvalidPublicKey,

    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}

fn strip_key_prefix<'a>(key: &'a str, prefix: &'static str) -> Result<&'a str, KeyError> {
    match key.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Ok(&key[prefix.len()..]),
        _ => Err(KeyError::WrongPrefix { expected: prefix }),
    }
}

pub fn encode_priv_key(raw_hex: &str) -> String {
    format!("{PRIV_KEY_PREFIX}{raw_hex}")
}

pub fn decode_priv_key(key: &str) -> Result<String, KeyError> {
    strip_key_prefix(key, PRIV_KEY_PREFIX).map(str::to_string)
}

pub fn encode_pub_key(raw_hex: &str) -> String {
    format!("{PUB_KEY_PREFIX}{raw_hex}")
}

pub fn decode_pub_key(key: &str) -> Result<String, KeyError> {
    strip_key_prefix(key, PUB_KEY_PREFIX).map(str::to_string)
}

pub fn encode_validator_priv_key(raw_hex: &str) -> String {
    format!("{VALIDATOR_PRIV_KEY_PREFIX}{raw_hex}")
}

pub fn decode_validator_priv_key(key: &str) -> Result<String, KeyError> {
    strip_key_prefix(key, VALIDATOR_PRIV_KEY_PREFIX).map(str::to_string)
}

pub fn encode_validator_pub_key(raw_hex: &str) -> String {
    format!("{VALIDATOR_PUB_KEY_PREFIX}{raw_hex}")
}

pub fn decode_validator_pub_key(key: &str) -> Result<String, KeyError> {
    strip_key_prefix(key, VALIDATOR_PUB_KEY_PREFIX).map(str::to_string)
}

/// Raw bytes of a prefixed secp256k1 public key.
pub fn pub_key_bytes(pub_key_hex: &str) -> Result<Vec<u8>, KeyError> {
    hex::decode(decode_pub_key(pub_key_hex)?).map_err(|_| KeyError::InvalidHex)
}

/// Raw bytes of a prefixed Ed25519 validator public key.
pub fn validator_pub_key_bytes(pub_key_hex: &str) -> Result<Vec<u8>, KeyError> {
    hex::decode(decode_validator_pub_key(pub_key_hex)?).map_err(|_| KeyError::InvalidHex)
}

pub(crate) fn verifying_key_from_hex(pub_key_hex: &str) -> Result<VerifyingKey, KeyError> {
    let bytes = pub_key_bytes(pub_key_hex)?;
    VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)
}

/// A secp256k1 key pair used to sign transactions.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Load a key pair from a prefixed private key hex string.
    pub fn from_priv_key_hex(priv_key_hex: &str) -> Result<Self, KeyError> {
        let raw = decode_priv_key(priv_key_hex.trim())?;
        let bytes = hex::decode(raw).map_err(|_| KeyError::InvalidHex)?;
        let signing_key =
            SigningKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Prefixed hex encoding of the private scalar.
    pub fn priv_key_hex(&self) -> String {
        encode_priv_key(&hex::encode(self.signing_key.to_bytes()))
    }

    /// Compressed (33-byte) SEC1 public key.
    pub fn pub_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// Prefixed hex encoding of the compressed public key.
    pub fn pub_key_hex(&self) -> String {
        encode_pub_key(&hex::encode(self.pub_key_bytes()))
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("pub_key", &self.pub_key_hex())
            .finish_non_exhaustive()
    }
}

/// Generate a new prefixed secp256k1 private key.
pub fn gen_priv_key_hex() -> String {
    KeyPair::generate().priv_key_hex()
}

/// Derive the prefixed compressed public key for a prefixed private key.
pub fn pub_key_from_private(priv_key_hex: &str) -> Result<String, KeyError> {
    Ok(KeyPair::from_priv_key_hex(priv_key_hex)?.pub_key_hex())
}

/// Whether `pub_key_hex` is the public half of `priv_key_hex`.
///
/// Comparison is on decoded bytes, so hex case does not matter.
pub fn is_key_match(priv_key_hex: &str, pub_key_hex: &str) -> Result<bool, KeyError> {
    let derived = KeyPair::from_priv_key_hex(priv_key_hex)?.pub_key_bytes();
    Ok(derived == pub_key_bytes(pub_key_hex)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known development key (Anvil's first account), never holds real funds.
    const TEST_RAW_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_priv_key_round_trip() {
        let encoded = encode_priv_key(TEST_RAW_KEY);
        assert!(encoded.starts_with(PRIV_KEY_PREFIX));
        assert_eq!(decode_priv_key(&encoded).unwrap(), TEST_RAW_KEY);
    }

    #[test]
    fn test_pub_key_round_trip() {
        let raw = "02".to_string() + &"ab".repeat(32);
        assert_eq!(decode_pub_key(&encode_pub_key(&raw)).unwrap(), raw);
        assert_eq!(
            decode_validator_pub_key(&encode_validator_pub_key(&raw)).unwrap(),
            raw
        );
        assert_eq!(
            decode_validator_priv_key(&encode_validator_priv_key(&raw)).unwrap(),
            raw
        );
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let encoded = encode_pub_key(TEST_RAW_KEY);
        assert_eq!(
            decode_priv_key(&encoded),
            Err(KeyError::WrongPrefix {
                expected: PRIV_KEY_PREFIX
            })
        );
        assert!(decode_validator_pub_key(&encoded).is_err());
        assert!(decode_pub_key("EB5A").is_err());
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let lower = encode_priv_key(TEST_RAW_KEY).to_lowercase();
        assert_eq!(decode_priv_key(&lower).unwrap(), TEST_RAW_KEY);
    }

    #[test]
    fn test_key_pair_from_hex() {
        let kp = KeyPair::from_priv_key_hex(&encode_priv_key(TEST_RAW_KEY)).unwrap();
        assert_eq!(kp.priv_key_hex(), encode_priv_key(TEST_RAW_KEY));
        assert_eq!(kp.pub_key_bytes().len(), 33);
        assert!(kp.pub_key_hex().starts_with(PUB_KEY_PREFIX));
    }

    #[test]
    fn test_invalid_private_key() {
        let zero = encode_priv_key(&"00".repeat(32));
        assert_eq!(
            KeyPair::from_priv_key_hex(&zero).unwrap_err(),
            KeyError::InvalidPrivateKey
        );
        assert_eq!(
            KeyPair::from_priv_key_hex(&encode_priv_key("zz")).unwrap_err(),
            KeyError::InvalidHex
        );
    }

    #[test]
    fn test_generated_key_matches_derived_pub_key() {
        let priv_key = gen_priv_key_hex();
        let pub_key = pub_key_from_private(&priv_key).unwrap();
        assert!(is_key_match(&priv_key, &pub_key).unwrap());
        assert!(is_key_match(&priv_key, &pub_key.to_lowercase()).unwrap());

        let other = pub_key_from_private(&gen_priv_key_hex()).unwrap();
        assert!(!is_key_match(&priv_key, &other).unwrap());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let kp = KeyPair::from_priv_key_hex(&encode_priv_key(TEST_RAW_KEY)).unwrap();
        let debug = format!("{:?}", kp);
        assert!(!debug.contains(TEST_RAW_KEY));
    }
}
