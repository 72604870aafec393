//! Post messages.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::IdToUrlMapping;

/// Turn a link map into the ordered wire list; empty maps are sent as `null`.
pub fn links_from_map(links: &BTreeMap<String, String>) -> Option<Vec<IdToUrlMapping>> {
    if links.is_empty() {
        return None;
    }
    Some(
        links
            .iter()
            .map(|(identifier, url)| IdToUrlMapping {
                identifier: identifier.clone(),
                url: url.clone(),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePostMsg {
    pub author: String,
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub parent_author: String,
    #[serde(rename = "parent_postID")]
    pub parent_post_id: String,
    pub source_author: String,
    #[serde(rename = "source_postID")]
    pub source_post_id: String,
    pub links: Option<Vec<IdToUrlMapping>>,
    pub redistribution_split_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikeMsg {
    pub username: String,
    pub weight: i64,
    pub author: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonateMsg {
    pub username: String,
    pub amount: String,
    pub author: String,
    pub post_id: String,
    pub from_app: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOrUpvoteMsg {
    pub username: String,
    pub author: String,
    pub post_id: String,
    pub is_report: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletePostMsg {
    pub author: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewMsg {
    pub username: String,
    pub author: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePostMsg {
    pub author: String,
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub links: Option<Vec<IdToUrlMapping>>,
}
