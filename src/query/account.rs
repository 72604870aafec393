//! Account identity, balance and social graph reads.

use crate::crypto::keys::is_key_match;
use crate::error::{LinoError, LinoResult};
use crate::query::Query;
use crate::store::{keys, ACCOUNT_STORE};
use crate::transport::GetKeyBy;
use crate::types::{
    AccountBank, AccountInfo, AccountMeta, FollowerMeta, FollowingMeta, GrantPubKey, Relationship,
    ResultKv, Reward,
};

impl Query {
    /// True when `priv_key_hex` derives the account's reset key.
    /// A missing account is `false`, not an error.
    pub async fn does_username_match_reset_priv_key(
        &self,
        username: &str,
        priv_key_hex: &str,
    ) -> LinoResult<bool> {
        self.key_matches(username, priv_key_hex, |info| &info.reset_key)
            .await
    }

    pub async fn does_username_match_transaction_priv_key(
        &self,
        username: &str,
        priv_key_hex: &str,
    ) -> LinoResult<bool> {
        self.key_matches(username, priv_key_hex, |info| &info.transaction_key)
            .await
    }

    pub async fn does_username_match_app_priv_key(
        &self,
        username: &str,
        priv_key_hex: &str,
    ) -> LinoResult<bool> {
        self.key_matches(username, priv_key_hex, |info| &info.app_key)
            .await
    }

    async fn key_matches(
        &self,
        username: &str,
        priv_key_hex: &str,
        stored: impl Fn(&AccountInfo) -> &String,
    ) -> LinoResult<bool> {
        match self.get_account_info(username).await {
            Ok(info) => Ok(is_key_match(priv_key_hex, stored(&info))?),
            Err(LinoError::EmptyResult { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn get_account_info(&self, username: &str) -> LinoResult<AccountInfo> {
        self.transport
            .query(&keys::account_info_key(username), ACCOUNT_STORE)
            .await
    }

    pub async fn get_account_bank(&self, username: &str) -> LinoResult<AccountBank> {
        self.transport
            .query(&keys::account_bank_key(username), ACCOUNT_STORE)
            .await
    }

    pub async fn get_account_meta(&self, username: &str) -> LinoResult<AccountMeta> {
        self.transport
            .query(&keys::account_meta_key(username), ACCOUNT_STORE)
            .await
    }

    /// Sequence number the next signed transaction must carry.
    pub async fn get_seq_number(&self, username: &str) -> LinoResult<u64> {
        let meta = self.get_account_meta(username).await?;
        u64::try_from(meta.sequence).map_err(|_| {
            LinoError::UnexpectedValue(format!(
                "negative sequence {} for {username}",
                meta.sequence
            ))
        })
    }

    pub async fn get_reward(&self, username: &str) -> LinoResult<Reward> {
        self.transport
            .query(&keys::reward_key(username), ACCOUNT_STORE)
            .await
    }

    pub async fn get_relationship(&self, me: &str, other: &str) -> LinoResult<Relationship> {
        self.transport
            .query(&keys::relationship_key(me, other), ACCOUNT_STORE)
            .await
    }

    /// Relationships keyed by the other party's username.
    pub async fn get_all_relationships(&self, me: &str) -> LinoResult<Vec<ResultKv<Relationship>>> {
        self.transport
            .query_subspace(
                &keys::relationship_prefix(me),
                ACCOUNT_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_follower_meta(&self, me: &str, follower: &str) -> LinoResult<FollowerMeta> {
        self.transport
            .query(&keys::follower_key(me, follower), ACCOUNT_STORE)
            .await
    }

    pub async fn get_all_follower_meta(&self, me: &str) -> LinoResult<Vec<ResultKv<FollowerMeta>>> {
        self.transport
            .query_subspace(
                &keys::follower_prefix(me),
                ACCOUNT_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_following_meta(&self, me: &str, following: &str) -> LinoResult<FollowingMeta> {
        self.transport
            .query(&keys::following_key(me, following), ACCOUNT_STORE)
            .await
    }

    pub async fn get_all_following_meta(
        &self,
        me: &str,
    ) -> LinoResult<Vec<ResultKv<FollowingMeta>>> {
        self.transport
            .query_subspace(
                &keys::following_prefix(me),
                ACCOUNT_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_grant_pub_key(
        &self,
        username: &str,
        pub_key_hex: &str,
    ) -> LinoResult<GrantPubKey> {
        self.transport
            .query(&keys::grant_pub_key_key(username, pub_key_hex), ACCOUNT_STORE)
            .await
    }

    /// Granted keys, keyed by the lower-case prefixed public key hex.
    pub async fn get_all_grant_pub_keys(
        &self,
        username: &str,
    ) -> LinoResult<Vec<ResultKv<GrantPubKey>>> {
        self.transport
            .query_subspace(
                &keys::grant_pub_key_prefix(username),
                ACCOUNT_STORE,
                GetKeyBy::HexSubstringAfterSeparator,
            )
            .await
    }
}
