//! Validator, voter, developer and infra provider messages.

use serde::Serialize;

use crate::codec::pubkey::InternalPubKey;
use crate::crypto::keys::KeyError;

/// Stake as a validator. The key is the validator's Ed25519 consensus key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorDepositMsg {
    pub username: String,
    pub deposit: String,
    pub validator_public_key: InternalPubKey,
    pub link: String,
}

impl ValidatorDepositMsg {
    /// `validator_pub_key` is a prefixed Ed25519 public key hex string.
    pub fn new(
        username: &str,
        deposit: &str,
        validator_pub_key: &str,
        link: &str,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            username: username.to_string(),
            deposit: deposit.to_string(),
            validator_public_key: InternalPubKey::ed25519(validator_pub_key)?,
            link: link.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorWithdrawMsg {
    pub username: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorRevokeMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoterDepositMsg {
    pub username: String,
    pub deposit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoterWithdrawMsg {
    pub username: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoterRevokeMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegateMsg {
    pub delegator: String,
    pub voter: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelegatorWithdrawMsg {
    pub delegator: String,
    pub voter: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevokeDelegationMsg {
    pub delegator: String,
    pub voter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperRegisterMsg {
    pub username: String,
    pub deposit: String,
    pub website: String,
    pub description: String,
    pub app_meta_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperUpdateMsg {
    pub username: String,
    pub website: String,
    pub description: String,
    pub app_meta_data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperRevokeMsg {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderReportMsg {
    pub username: String,
    pub usage: i64,
}
