//! Key material and signatures.
//!
//! # Data Flow
//! ```text
//! prefixed private key hex (application-owned, never sent)
//!     → keys.rs (prefix check, secp256k1 scalar, compressed public key)
//!     → signing.rs (SHA-256 digest → low-S ECDSA → DER)
//!     → transport (signature placed into the StdTx envelope)
//! ```

pub mod keys;
pub mod signing;

pub use keys::{
    decode_priv_key, decode_pub_key, encode_priv_key, encode_pub_key, gen_priv_key_hex,
    is_key_match, pub_key_from_private, KeyError, KeyPair,
};
pub use signing::{sign_with_sha256, verify_with_sha256};
