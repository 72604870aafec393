//! Account lifecycle, transfers and permissions.

use crate::broadcast::Broadcast;
use crate::error::LinoResult;
use crate::message::{
    ClaimInterestMsg, ClaimMsg, FollowMsg, GrantPermissionMsg, PreAuthorizationMsg, RecoverMsg,
    RegisterMsg, RevokePermissionMsg, TransferMsg, UnfollowMsg, UpdateAccountMsg,
};
use crate::transport::BroadcastResult;
use crate::types::Permission;

impl Broadcast {
    /// Register `new_username`; all keys are prefixed public key hex.
    #[allow(clippy::too_many_arguments)]
    pub async fn register(
        &self,
        referrer: &str,
        register_fee: &str,
        new_username: &str,
        reset_pub_key: &str,
        transaction_pub_key: &str,
        app_pub_key: &str,
        referrer_priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = RegisterMsg::new(
            referrer,
            register_fee,
            new_username,
            reset_pub_key,
            transaction_pub_key,
            app_pub_key,
        )?;
        self.send(msg, referrer_priv_key_hex, seq).await
    }

    pub async fn transfer(
        &self,
        sender: &str,
        receiver: &str,
        amount: &str,
        memo: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = TransferMsg {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount: amount.to_string(),
            memo: memo.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn follow(
        &self,
        follower: &str,
        followee: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = FollowMsg {
            follower: follower.to_string(),
            followee: followee.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn unfollow(
        &self,
        follower: &str,
        followee: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = UnfollowMsg {
            follower: follower.to_string(),
            followee: followee.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn claim(
        &self,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ClaimMsg {
            username: username.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn claim_interest(
        &self,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ClaimInterestMsg {
            username: username.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn update_account(
        &self,
        username: &str,
        json_meta: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = UpdateAccountMsg {
            username: username.to_string(),
            json_meta: json_meta.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    /// Replace all three account keys; signed with the current reset key.
    pub async fn recover(
        &self,
        username: &str,
        new_reset_pub_key: &str,
        new_transaction_pub_key: &str,
        new_app_pub_key: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = RecoverMsg::new(
            username,
            new_reset_pub_key,
            new_transaction_pub_key,
            new_app_pub_key,
        )?;
        self.send(msg, priv_key_hex, seq).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn grant_permission(
        &self,
        username: &str,
        authorized_app: &str,
        validity_period_second: i64,
        permission: Permission,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = GrantPermissionMsg {
            username: username.to_string(),
            authorized_app: authorized_app.to_string(),
            validity_period_second,
            grant_level: permission.level(),
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn revoke_permission(
        &self,
        username: &str,
        pub_key_hex: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = RevokePermissionMsg::new(username, pub_key_hex)?;
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn pre_authorization(
        &self,
        username: &str,
        authorized_app: &str,
        validity_period_second: i64,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = PreAuthorizationMsg {
            username: username.to_string(),
            authorized_app: authorized_app.to_string(),
            validity_period_second,
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }
}
