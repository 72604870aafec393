//! Governance messages.

use serde::Serialize;

use crate::types::param::{
    AccountParam, BandwidthParam, CoinDayParam, DeveloperParam, EvaluateOfContentValueParam,
    GlobalAllocationParam, InfraInternalAllocationParam, PostParam, ProposalParam,
    ValidatorParam, VoteParam,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletePostContentMsg {
    pub creator: String,
    pub permlink: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeProtocolMsg {
    pub creator: String,
    pub link: String,
    pub reason: String,
}

/// Proposal to replace one parameter singleton.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeParamMsg<P> {
    pub creator: String,
    pub parameter: P,
    pub reason: String,
}

impl<P> ChangeParamMsg<P> {
    pub fn new(creator: &str, parameter: P, reason: &str) -> Self {
        Self {
            creator: creator.to_string(),
            parameter,
            reason: reason.to_string(),
        }
    }
}

pub type ChangeGlobalAllocationParamMsg = ChangeParamMsg<GlobalAllocationParam>;
pub type ChangeEvaluateOfContentValueParamMsg = ChangeParamMsg<EvaluateOfContentValueParam>;
pub type ChangeInfraInternalAllocationParamMsg = ChangeParamMsg<InfraInternalAllocationParam>;
pub type ChangeVoteParamMsg = ChangeParamMsg<VoteParam>;
pub type ChangeProposalParamMsg = ChangeParamMsg<ProposalParam>;
pub type ChangeDeveloperParamMsg = ChangeParamMsg<DeveloperParam>;
pub type ChangeValidatorParamMsg = ChangeParamMsg<ValidatorParam>;
pub type ChangeBandwidthParamMsg = ChangeParamMsg<BandwidthParam>;
pub type ChangeAccountParamMsg = ChangeParamMsg<AccountParam>;
pub type ChangePostParamMsg = ChangeParamMsg<PostParam>;
pub type ChangeCoinDayParamMsg = ChangeParamMsg<CoinDayParam>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteProposalMsg {
    pub voter: String,
    pub proposal_id: String,
    pub result: bool,
}
