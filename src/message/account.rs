//! Account messages.

use serde::Serialize;

use crate::codec::pubkey::InternalPubKey;
use crate::crypto::keys::KeyError;

/// Register a new account, paid for by `referrer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterMsg {
    pub referrer: String,
    pub register_fee: String,
    pub new_username: String,
    pub new_reset_public_key: InternalPubKey,
    pub new_transaction_public_key: InternalPubKey,
    pub new_app_public_key: InternalPubKey,
}

impl RegisterMsg {
    /// Keys are prefixed secp256k1 public key hex strings.
    pub fn new(
        referrer: &str,
        register_fee: &str,
        new_username: &str,
        reset_pub_key: &str,
        transaction_pub_key: &str,
        app_pub_key: &str,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            referrer: referrer.to_string(),
            register_fee: register_fee.to_string(),
            new_username: new_username.to_string(),
            new_reset_public_key: InternalPubKey::secp256k1(reset_pub_key)?,
            new_transaction_public_key: InternalPubKey::secp256k1(transaction_pub_key)?,
            new_app_public_key: InternalPubKey::secp256k1(app_pub_key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferMsg {
    pub sender: String,
    pub receiver: String,
    pub amount: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowMsg {
    pub follower: String,
    pub followee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnfollowMsg {
    pub follower: String,
    pub followee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimInterestMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateAccountMsg {
    pub username: String,
    pub json_meta: String,
}

/// Replace all three keys of an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoverMsg {
    pub username: String,
    pub new_reset_public_key: InternalPubKey,
    pub new_transaction_public_key: InternalPubKey,
    pub new_app_public_key: InternalPubKey,
}

impl RecoverMsg {
    pub fn new(
        username: &str,
        reset_pub_key: &str,
        transaction_pub_key: &str,
        app_pub_key: &str,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            username: username.to_string(),
            new_reset_public_key: InternalPubKey::secp256k1(reset_pub_key)?,
            new_transaction_public_key: InternalPubKey::secp256k1(transaction_pub_key)?,
            new_app_public_key: InternalPubKey::secp256k1(app_pub_key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrantPermissionMsg {
    pub username: String,
    pub authorized_app: String,
    pub validity_period_second: i64,
    pub grant_level: i64,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevokePermissionMsg {
    pub username: String,
    pub public_key: InternalPubKey,
}

impl RevokePermissionMsg {
    pub fn new(username: &str, pub_key: &str) -> Result<Self, KeyError> {
        Ok(Self {
            username: username.to_string(),
            public_key: InternalPubKey::secp256k1(pub_key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreAuthorizationMsg {
    pub username: String,
    pub authorized_app: String,
    pub validity_period_second: i64,
    pub amount: String,
}
