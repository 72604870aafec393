//! Proposal and global store records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::common::{int, null_as_empty, Coin};

/// Fields shared by every proposal kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalInfo {
    pub creator: String,
    #[serde(deserialize_with = "int")]
    pub proposal_id: i64,
    pub agree_votes: Coin,
    pub disagree_votes: Coin,
    #[serde(deserialize_with = "int")]
    pub result: i64,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    #[serde(deserialize_with = "int")]
    pub expired_at: i64,
    pub reason: String,
}

/// Proposal body; kind-specific fields are present only for that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalValue {
    #[serde(rename = "ProposalInfo")]
    pub info: ProposalInfo,
    /// Content censorship proposals.
    pub permlink: Option<String>,
    /// Protocol upgrade proposals.
    pub link: Option<String>,
    /// Parameter change proposals; shape depends on the parameter.
    pub param: Option<Value>,
}

/// A proposal as stored: registered type name plus body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proposal {
    #[serde(rename = "type")]
    pub proposal_type: String,
    pub value: ProposalValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalList {
    #[serde(deserialize_with = "null_as_empty")]
    pub ongoing_proposal: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub past_proposal: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextProposalId {
    #[serde(deserialize_with = "int")]
    pub next_proposal_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalMeta {
    pub total_lino_coin: Coin,
    pub last_year_cumulative_consumption: Coin,
    pub cumulative_consumption: Coin,
    pub growth_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationPool {
    pub infra_inflation_pool: Coin,
    pub content_creator_inflation_pool: Coin,
    pub developer_inflation_pool: Coin,
    pub validator_inflation_pool: Coin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionMeta {
    pub consumption_friction_rate: String,
    pub consumption_window: Coin,
    pub consumption_reward_pool: Coin,
    #[serde(deserialize_with = "int")]
    pub consumption_freezing_period_hr: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tps {
    pub current_tps: String,
    pub max_tps: String,
}

/// Events scheduled by the chain for one unix second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEventList {
    #[serde(deserialize_with = "null_as_empty")]
    pub events: Vec<Value>,
}
