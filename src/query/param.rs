//! Parameter singletons, one getter each.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::{keys, PARAM_STORE};
use crate::types::{
    AccountParam, BandwidthParam, CoinDayParam, DeveloperParam, EvaluateOfContentValueParam,
    GlobalAllocationParam, InfraInternalAllocationParam, PostParam, ProposalParam,
    ValidatorParam, VoteParam,
};

macro_rules! param_getters {
    ($($name:ident -> $ty:ty = $key:path;)+) => {
        impl Query {
            $(
                pub async fn $name(&self) -> LinoResult<$ty> {
                    self.transport.query(&$key(), PARAM_STORE).await
                }
            )+
        }
    };
}

param_getters! {
    get_evaluate_of_content_value_param -> EvaluateOfContentValueParam = keys::evaluate_of_content_value_param_key;
    get_global_allocation_param -> GlobalAllocationParam = keys::global_allocation_param_key;
    get_infra_internal_allocation_param -> InfraInternalAllocationParam = keys::infra_internal_allocation_param_key;
    get_developer_param -> DeveloperParam = keys::developer_param_key;
    get_vote_param -> VoteParam = keys::vote_param_key;
    get_proposal_param -> ProposalParam = keys::proposal_param_key;
    get_validator_param -> ValidatorParam = keys::validator_param_key;
    get_coin_day_param -> CoinDayParam = keys::coin_day_param_key;
    get_bandwidth_param -> BandwidthParam = keys::bandwidth_param_key;
    get_account_param -> AccountParam = keys::account_param_key;
    get_post_param -> PostParam = keys::post_param_key;
}
