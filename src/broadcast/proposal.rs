//! Governance writes: content takedown, upgrades, parameter changes, votes.

use crate::broadcast::Broadcast;
use crate::error::LinoResult;
use crate::message::{ChangeParamMsg, DeletePostContentMsg, UpgradeProtocolMsg, VoteProposalMsg};
use crate::store::keys::permlink;
use crate::transport::BroadcastResult;
use crate::types::{
    AccountParam, BandwidthParam, CoinDayParam, DeveloperParam, EvaluateOfContentValueParam,
    GlobalAllocationParam, InfraInternalAllocationParam, PostParam, ProposalParam,
    ValidatorParam, VoteParam,
};

macro_rules! change_param {
    ($($name:ident($param:ty);)+) => {
        impl Broadcast {
            $(
                pub async fn $name(
                    &self,
                    creator: &str,
                    parameter: $param,
                    reason: &str,
                    priv_key_hex: &str,
                    seq: u64,
                ) -> LinoResult<BroadcastResult> {
                    let msg = ChangeParamMsg::new(creator, parameter, reason);
                    self.send(msg, priv_key_hex, seq).await
                }
            )+
        }
    };
}

change_param! {
    change_evaluate_of_content_value_param(EvaluateOfContentValueParam);
    change_global_allocation_param(GlobalAllocationParam);
    change_infra_internal_allocation_param(InfraInternalAllocationParam);
    change_vote_param(VoteParam);
    change_proposal_param(ProposalParam);
    change_developer_param(DeveloperParam);
    change_validator_param(ValidatorParam);
    change_bandwidth_param(BandwidthParam);
    change_account_param(AccountParam);
    change_post_param(PostParam);
    change_coin_day_param(CoinDayParam);
}

impl Broadcast {
    pub async fn delete_post_content(
        &self,
        creator: &str,
        post_author: &str,
        post_id: &str,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = DeletePostContentMsg {
            creator: creator.to_string(),
            permlink: permlink(post_author, post_id),
            reason: reason.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn upgrade_protocol(
        &self,
        creator: &str,
        link: &str,
        reason: &str,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = UpgradeProtocolMsg {
            creator: creator.to_string(),
            link: link.to_string(),
            reason: reason.to_string(),
        };
        self.send(msg, priv_key_hex, seq).await
    }

    pub async fn vote_proposal(
        &self,
        voter: &str,
        proposal_id: &str,
        result: bool,
        priv_key_hex: &str,
        seq: u64,
    ) -> LinoResult<BroadcastResult> {
        let msg = VoteProposalMsg {
            voter: voter.to_string(),
            proposal_id: proposal_id.to_string(),
            result,
        };
        self.send(msg, priv_key_hex, seq).await
    }
}
