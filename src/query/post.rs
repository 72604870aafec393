//! Post content and interaction reads. Posts are addressed by `author#post_id`.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::keys::{self, permlink};
use crate::store::POST_STORE;
use crate::transport::GetKeyBy;
use crate::types::{Comment, Donations, PostInfo, PostMeta, ReportOrUpvote, ResultKv, View};

impl Query {
    pub async fn get_post_info(&self, author: &str, post_id: &str) -> LinoResult<PostInfo> {
        self.transport
            .query(&keys::post_info_key(&permlink(author, post_id)), POST_STORE)
            .await
    }

    pub async fn get_post_meta(&self, author: &str, post_id: &str) -> LinoResult<PostMeta> {
        self.transport
            .query(&keys::post_meta_key(&permlink(author, post_id)), POST_STORE)
            .await
    }

    /// Every post by `author`, keyed by permlink.
    pub async fn get_all_posts(&self, author: &str) -> LinoResult<Vec<ResultKv<PostInfo>>> {
        self.transport
            .query_subspace(
                &keys::post_info_prefix(author),
                POST_STORE,
                GetKeyBy::SubstringAfterSubstore,
            )
            .await
    }

    pub async fn get_post_comment(
        &self,
        author: &str,
        post_id: &str,
        comment_permlink: &str,
    ) -> LinoResult<Comment> {
        let key = keys::post_comment_key(&permlink(author, post_id), comment_permlink);
        self.transport.query(&key, POST_STORE).await
    }

    /// Comments keyed by the comment's permlink.
    pub async fn get_post_all_comments(
        &self,
        author: &str,
        post_id: &str,
    ) -> LinoResult<Vec<ResultKv<Comment>>> {
        self.transport
            .query_subspace(
                &keys::post_comment_prefix(&permlink(author, post_id)),
                POST_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_post_view(
        &self,
        author: &str,
        post_id: &str,
        viewer: &str,
    ) -> LinoResult<View> {
        let key = keys::post_view_key(&permlink(author, post_id), viewer);
        self.transport.query(&key, POST_STORE).await
    }

    pub async fn get_post_all_views(
        &self,
        author: &str,
        post_id: &str,
    ) -> LinoResult<Vec<ResultKv<View>>> {
        self.transport
            .query_subspace(
                &keys::post_view_prefix(&permlink(author, post_id)),
                POST_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_post_donations(
        &self,
        author: &str,
        post_id: &str,
        donator: &str,
    ) -> LinoResult<Donations> {
        let key = keys::post_donations_key(&permlink(author, post_id), donator);
        self.transport.query(&key, POST_STORE).await
    }

    pub async fn get_post_all_donations(
        &self,
        author: &str,
        post_id: &str,
    ) -> LinoResult<Vec<ResultKv<Donations>>> {
        self.transport
            .query_subspace(
                &keys::post_donations_prefix(&permlink(author, post_id)),
                POST_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_post_report_or_upvote(
        &self,
        author: &str,
        post_id: &str,
        user: &str,
    ) -> LinoResult<ReportOrUpvote> {
        let key = keys::post_report_or_upvote_key(&permlink(author, post_id), user);
        self.transport.query(&key, POST_STORE).await
    }

    pub async fn get_post_all_report_or_upvotes(
        &self,
        author: &str,
        post_id: &str,
    ) -> LinoResult<Vec<ResultKv<ReportOrUpvote>>> {
        self.transport
            .query_subspace(
                &keys::post_report_or_upvote_prefix(&permlink(author, post_id)),
                POST_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }
}
