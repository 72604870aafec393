//! Validator, voter, delegation, developer and infra provider writes.

use crate::broadcast::Broadcast;
use crate::error::LinoResult;
use crate::message::{
    DelegateMsg, DelegatorWithdrawMsg, DeveloperRegisterMsg, DeveloperRevokeMsg,
    DeveloperUpdateMsg, ProviderReportMsg, RevokeDelegationMsg, ValidatorDepositMsg,
    ValidatorRevokeMsg, ValidatorWithdrawMsg, VoterDepositMsg, VoterRevokeMsg, VoterWithdrawMsg,
};
use crate::transport::BroadcastResult;

impl Broadcast {
    /// `validator_pub_key` is the node's prefixed Ed25519 consensus key.
    pub async fn validator_deposit(
        &self,
        username: &str,
        deposit: &str,
        validator_pub_key: &str,
        link: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ValidatorDepositMsg::new(username, deposit, validator_pub_key, link)?;
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn validator_withdraw(
        &self,
        username: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ValidatorWithdrawMsg {
            username: username.to_string(),
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn validator_revoke(
        &self,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ValidatorRevokeMsg {
            username: username.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn voter_deposit(
        &self,
        username: &str,
        deposit: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = VoterDepositMsg {
            username: username.to_string(),
            deposit: deposit.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn voter_withdraw(
        &self,
        username: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = VoterWithdrawMsg {
            username: username.to_string(),
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn voter_revoke(
        &self,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = VoterRevokeMsg {
            username: username.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn delegate(
        &self,
        delegator: &str,
        voter: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DelegateMsg {
            delegator: delegator.to_string(),
            voter: voter.to_string(),
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn delegator_withdraw(
        &self,
        delegator: &str,
        voter: &str,
        amount: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DelegatorWithdrawMsg {
            delegator: delegator.to_string(),
            voter: voter.to_string(),
            amount: amount.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn revoke_delegation(
        &self,
        delegator: &str,
        voter: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = RevokeDelegationMsg {
            delegator: delegator.to_string(),
            voter: voter.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn developer_register(
        &self,
        username: &str,
        deposit: &str,
        website: &str,
        description: &str,
        app_meta_data: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DeveloperRegisterMsg {
            username: username.to_string(),
            deposit: deposit.to_string(),
            website: website.to_string(),
            description: description.to_string(),
            app_meta_data: app_meta_data.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn developer_update(
        &self,
        username: &str,
        website: &str,
        description: &str,
        app_meta_data: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DeveloperUpdateMsg {
            username: username.to_string(),
            website: website.to_string(),
            description: description.to_string(),
            app_meta_data: app_meta_data.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn developer_revoke(
        &self,
        username: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DeveloperRevokeMsg {
            username: username.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn provider_report(
        &self,
        username: &str,
        usage: i64,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = ProviderReportMsg {
            username: username.to_string(),
            usage,
        };
        self.send(msg, priv_key_hex, seq).await
    }
}
