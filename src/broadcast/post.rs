//! Post authoring and interactions.

use std::collections::BTreeMap;

use crate::broadcast::Broadcast;
use crate::error::LinoResult;
use crate::message::{
    links_from_map, CreatePostMsg, DeletePostMsg, DonateMsg, LikeMsg, ReportOrUpvoteMsg,
    UpdatePostMsg, ViewMsg,
};
use crate::transport::BroadcastResult;

/// Fields of a new post. Parent and source fields are empty for top-level originals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    pub author: String,
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub parent_author: String,
    pub parent_post_id: String,
    pub source_author: String,
    pub source_post_id: String,
    pub links: BTreeMap<String, String>,
    pub redistribution_split_rate: String,
}

impl From<NewPost> for CreatePostMsg {
    fn from(post: NewPost) -> Self {
        CreatePostMsg {
            links: links_from_map(&post.links),
            author: post.author,
            post_id: post.post_id,
            title: post.title,
            content: post.content,
            parent_author: post.parent_author,
            parent_post_id: post.parent_post_id,
            source_author: post.source_author,
            source_post_id: post.source_post_id,
            redistribution_split_rate: post.redistribution_split_rate,
        }
    }
}

impl Broadcast {
    pub async fn create_post(
        &self,
        post: NewPost,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        self.send(CreatePostMsg::from(post), priv_key_hex, seq).await
    }

    pub async fn like(
        &self,
        username: &str,
        author: &str,
        weight: i64,
        post_id: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = LikeMsg {
            username: username.to_string(),
            weight,
            author: author.to_string(),
            post_id: post_id.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn donate(
        &self,
        username: &str,
        author: &str,
        amount: &str,
        post_id: &str,
        from_app: &str,
        memo: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DonateMsg {
            username: username.to_string(),
            amount: amount.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
            from_app: from_app.to_string(),
            memo: memo.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn report_or_upvote(
        &self,
        username: &str,
        author: &str,
        post_id: &str,
        is_report: bool,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ReportOrUpvoteMsg {
            username: username.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
            is_report,
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn delete_post(
        &self,
        author: &str,
        post_id: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DeletePostMsg {
            author: author.to_string(),
            post_id: post_id.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn view(
        &self,
        username: &str,
        author: &str,
        post_id: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ViewMsg {
            username: username.to_string(),
            author: author.to_string(),
            post_id: post_id.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_post(
        &self,
        author: &str,
        post_id: &str,
        title: &str,
        content: &str,
        links: &BTreeMap<String, String>,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = UpdatePostMsg {
            author: author.to_string(),
            post_id: post_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            links: links_from_map(links),
        };
        self.send(msg, priv_key_hex, seq).await
    }
}
