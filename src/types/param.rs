//! Governance parameter records.
//!
//! These are read from the `param` store and also sent back inside
//! `change_*_param` proposals, so they serialize as well as deserialize.
//! Ratios are fractions written as strings (e.g. `"1/5"`).

use serde::{Deserialize, Serialize};

use crate::types::common::{int, Coin};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOfContentValueParam {
    #[serde(deserialize_with = "int")]
    pub consumption_time_adjust_base: i64,
    #[serde(deserialize_with = "int")]
    pub consumption_time_adjust_offset: i64,
    #[serde(deserialize_with = "int")]
    pub num_of_consumption_on_author_adjust_base: i64,
    #[serde(deserialize_with = "int")]
    pub num_of_consumption_on_author_adjust_offset: i64,
    #[serde(deserialize_with = "int")]
    pub total_amount_of_consumption_base: i64,
    #[serde(deserialize_with = "int")]
    pub total_amount_of_consumption_offset: i64,
    pub amount_of_consumption_exponent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalAllocationParam {
    pub infra_allocation: String,
    pub content_creator_allocation: String,
    pub developer_allocation: String,
    pub validator_allocation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraInternalAllocationParam {
    pub storage_allocation: String,
    #[serde(rename = "CDN_allocation")]
    pub cdn_allocation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperParam {
    pub developer_min_deposit: Coin,
    #[serde(deserialize_with = "int")]
    pub developer_coin_return_interval_second: i64,
    #[serde(deserialize_with = "int")]
    pub developer_coin_return_times: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteParam {
    pub voter_min_deposit: Coin,
    pub voter_min_withdraw: Coin,
    pub delegator_min_withdraw: Coin,
    #[serde(deserialize_with = "int")]
    pub voter_coin_return_interval_second: i64,
    #[serde(deserialize_with = "int")]
    pub voter_coin_return_times: i64,
    #[serde(deserialize_with = "int")]
    pub delegator_coin_return_interval_second: i64,
    #[serde(deserialize_with = "int")]
    pub delegator_coin_return_times: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalParam {
    #[serde(deserialize_with = "int")]
    pub content_censorship_decide_sec: i64,
    pub content_censorship_min_deposit: Coin,
    pub content_censorship_pass_ratio: String,
    pub content_censorship_pass_votes: Coin,
    #[serde(deserialize_with = "int")]
    pub change_param_decide_sec: i64,
    #[serde(deserialize_with = "int")]
    pub change_param_execution_sec: i64,
    pub change_param_min_deposit: Coin,
    pub change_param_pass_ratio: String,
    pub change_param_pass_votes: Coin,
    #[serde(deserialize_with = "int")]
    pub protocol_upgrade_decide_sec: i64,
    pub protocol_upgrade_min_deposit: Coin,
    pub protocol_upgrade_pass_ratio: String,
    pub protocol_upgrade_pass_votes: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorParam {
    pub validator_min_withdraw: Coin,
    pub validator_min_voting_deposit: Coin,
    pub validator_min_commiting_deposit: Coin,
    #[serde(deserialize_with = "int")]
    pub validator_coin_return_second: i64,
    #[serde(deserialize_with = "int")]
    pub validator_coin_return_times: i64,
    pub penalty_miss_vote: Coin,
    pub penalty_miss_commit: Coin,
    pub penalty_byzantine: Coin,
    #[serde(deserialize_with = "int")]
    pub validator_list_size: i64,
    #[serde(deserialize_with = "int")]
    pub absent_commit_limitation: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinDayParam {
    #[serde(deserialize_with = "int")]
    pub seconds_to_recover_coin_day: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandwidthParam {
    #[serde(deserialize_with = "int")]
    pub seconds_to_recover_bandwidth: i64,
    pub capacity_usage_per_transaction: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountParam {
    pub minimum_balance: Coin,
    pub register_fee: Coin,
    pub first_deposit_full_coin_day_limit: Coin,
    #[serde(deserialize_with = "int")]
    pub max_num_frozen_money: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostParam {
    #[serde(deserialize_with = "int")]
    pub report_or_upvote_interval_second: i64,
    #[serde(deserialize_with = "int")]
    pub post_interval_sec: i64,
}
