//! Post store records.

use serde::{Deserialize, Serialize};

use crate::types::common::{int, null_as_empty, Coin, IdToUrlMapping};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostInfo {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub parent_author: String,
    #[serde(rename = "parent_postID")]
    pub parent_post_id: String,
    pub source_author: String,
    #[serde(rename = "source_postID")]
    pub source_post_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub links: Vec<IdToUrlMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    #[serde(deserialize_with = "int")]
    pub last_updated_at: i64,
    #[serde(deserialize_with = "int")]
    pub last_activity_at: i64,
    pub allow_replies: bool,
    pub is_deleted: bool,
    #[serde(deserialize_with = "int")]
    pub total_donate_count: i64,
    pub total_report_coin_day: Coin,
    pub total_upvote_coin_day: Coin,
    #[serde(deserialize_with = "int")]
    pub total_view_count: i64,
    pub total_reward: Coin,
    pub redistribution_split_rate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOrUpvote {
    pub username: String,
    pub coin_day: Coin,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    pub is_report: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub author: String,
    pub post_id: String,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub username: String,
    #[serde(deserialize_with = "int")]
    pub created_at: i64,
    #[serde(deserialize_with = "int")]
    pub times: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Donations {
    pub username: String,
    #[serde(deserialize_with = "int")]
    pub times: i64,
    pub amount: Coin,
}
