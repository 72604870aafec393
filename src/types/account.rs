//! Account store records.

use serde::{Deserialize, Serialize};

use crate::types::common::{int, null_as_empty, pub_key_hex, Coin};

/// Identity and keys of an account. Keys are re-encoded as prefixed hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub username: String,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    #[serde(deserialize_with = "pub_key_hex")]
    pub reset_key: String,
    #[serde(deserialize_with = "pub_key_hex")]
    pub transaction_key: String,
    #[serde(deserialize_with = "pub_key_hex")]
    pub app_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrozenMoney {
    pub amount: Coin,
    #[serde(deserialize_with = "int")]
    pub start_at: i64,
    #[serde(deserialize_with = "int")]
    pub times: i64,
    #[serde(deserialize_with = "int")]
    pub interval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBank {
    pub saving: Coin,
    pub coin_day: Coin,
    #[serde(deserialize_with = "null_as_empty")]
    pub frozen_money_list: Vec<FrozenMoney>,
    #[serde(deserialize_with = "int")]
    pub number_of_transaction: i64,
    #[serde(deserialize_with = "int")]
    pub number_of_reward: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountMeta {
    #[serde(deserialize_with = "int")]
    pub sequence: i64,
    #[serde(deserialize_with = "int")]
    pub last_activity_at: i64,
    pub transaction_capacity: Coin,
    pub json_meta: String,
    #[serde(deserialize_with = "int")]
    pub last_report_or_upvote_at: i64,
    #[serde(deserialize_with = "int")]
    pub last_post_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    pub interest_income: Coin,
    pub original_income: Coin,
    pub friction_income: Coin,
    pub actual_reward: Coin,
    pub unclaim_interest: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    #[serde(deserialize_with = "int")]
    pub donation_times: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerMeta {
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    pub follower_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowingMeta {
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    pub following_name: String,
}

/// An application key granted access to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantPubKey {
    pub username: String,
    #[serde(deserialize_with = "int")]
    pub permission: i64,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    #[serde(deserialize_with = "int")]
    pub expires_at: i64,
    pub amount: Coin,
}

/// One balance-changing event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    #[serde(deserialize_with = "int")]
    pub detail_type: i64,
    pub from: String,
    pub to: String,
    pub amount: Coin,
    pub balance: Coin,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    pub memo: String,
}

/// One history bucket of up to 100 balance events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceHistory {
    #[serde(deserialize_with = "null_as_empty")]
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardDetail {
    pub original_donation: Coin,
    pub friction_donation: Coin,
    pub actual_reward: Coin,
    pub consumer: String,
    pub post_author: String,
    pub post_id: String,
}

/// One history bucket of up to 100 reward events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardHistory {
    #[serde(deserialize_with = "null_as_empty")]
    pub details: Vec<RewardDetail>,
}

/// Permission levels that can be granted to an application key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Reset,
    Transaction,
    App,
    GrantApp,
    PreAuthorization,
}

impl Permission {
    /// Numeric level used on the wire.
    pub fn level(self) -> i64 {
        match self {
            Permission::Reset => 0,
            Permission::Transaction => 1,
            Permission::App => 2,
            Permission::GrantApp => 3,
            Permission::PreAuthorization => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pubkey::InternalPubKey;
    use crate::crypto::keys::KeyPair;
    use serde_json::json;

    #[test]
    fn test_account_info_keys_become_prefixed_hex() {
        let kp = KeyPair::generate();
        let internal =
            serde_json::to_value(InternalPubKey::secp256k1(&kp.pub_key_hex()).unwrap()).unwrap();
        let info: AccountInfo = serde_json::from_value(json!({
            "username": "alice",
            "created_at": "1530000000",
            "reset_key": internal,
            "transaction_key": internal,
            "app_key": internal,
        }))
        .unwrap();
        assert_eq!(info.created_at, 1_530_000_000);
        assert_eq!(info.reset_key, kp.pub_key_hex());
    }

    #[test]
    fn test_bank_tolerates_null_frozen_list() {
        let bank: AccountBank = serde_json::from_value(json!({
            "saving": {"amount": "10"},
            "frozen_money_list": null,
            "number_of_transaction": "120",
            "number_of_reward": 3,
        }))
        .unwrap();
        assert_eq!(bank.saving.amount, "10");
        assert!(bank.frozen_money_list.is_empty());
        assert_eq!(bank.number_of_transaction, 120);
        assert_eq!(bank.number_of_reward, 3);
    }

    #[test]
    fn test_permission_levels() {
        assert_eq!(Permission::Reset.level(), 0);
        assert_eq!(Permission::PreAuthorization.level(), 4);
    }
}
