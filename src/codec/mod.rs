//! Wire encodings shared by the query and broadcast paths.
//!
//! # Responsibilities
//! - Canonical sign bytes and the base64 `StdTx` wire form (`canonical`)
//! - `{type, value}` public key wrapping (`pubkey`)
//! - LNO ⇄ base-unit rescale of coin amounts (`amount`)

pub mod amount;
pub mod canonical;
pub mod pubkey;

pub use amount::{decode_object, encode_object};
pub use canonical::{
    decode_tx, encode_sign_msg, encode_tx, number_to_string, sign_bytes, sort_object, StdFee,
    StdSignature, StdTx,
};
pub use pubkey::InternalPubKey;
