//! Validator, vote, developer and infra store records.

use serde::{Deserialize, Serialize};

use crate::types::common::{int, null_as_empty, pub_key_hex, Coin};

/// Tendermint's view of a validator. The key is re-encoded as prefixed hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbciValidator {
    pub address: String,
    #[serde(deserialize_with = "pub_key_hex")]
    pub pub_key: String,
    #[serde(deserialize_with = "int")]
    pub power: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Validator {
    #[serde(rename = "ABCIValidator")]
    pub abci_validator: AbciValidator,
    pub username: String,
    pub deposit: Coin,
    #[serde(deserialize_with = "int")]
    pub absent_commit: i64,
    #[serde(deserialize_with = "int")]
    pub byzantine_commit: i64,
    #[serde(deserialize_with = "int")]
    pub produced_blocks: i64,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorList {
    #[serde(deserialize_with = "null_as_empty")]
    pub oncall_validators: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub all_validators: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub pre_block_validators: Vec<String>,
    pub lowest_power: Coin,
    pub lowest_validator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voter {
    pub username: String,
    pub lino_stake: Coin,
    pub delegated_power: Coin,
    pub delegate_to_others: Coin,
    #[serde(deserialize_with = "int")]
    pub last_power_change_at: i64,
    pub interest: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delegation {
    pub delegator: String,
    pub amount: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vote {
    pub voter: String,
    pub result: bool,
    pub voting_power: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Developer {
    pub username: String,
    pub deposit: Coin,
    pub app_consumption: Coin,
    pub website: String,
    pub description: String,
    pub app_meta_data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperList {
    #[serde(deserialize_with = "null_as_empty")]
    pub all_developers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraProvider {
    pub username: String,
    #[serde(deserialize_with = "int")]
    pub usage: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraProviderList {
    #[serde(deserialize_with = "null_as_empty")]
    pub all_infra_providers: Vec<String>,
}
