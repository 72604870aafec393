//! Validator and voting-stake reads.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::{keys, VALIDATOR_STORE, VOTE_STORE};
use crate::transport::GetKeyBy;
use crate::types::{Delegation, ResultKv, Validator, ValidatorList, Vote, Voter};

impl Query {
    pub async fn get_validator(&self, username: &str) -> LinoResult<Validator> {
        self.transport
            .query(&keys::validator_key(username), VALIDATOR_STORE)
            .await
    }

    pub async fn get_validator_list(&self) -> LinoResult<ValidatorList> {
        self.transport
            .query(&keys::validator_list_key(), VALIDATOR_STORE)
            .await
    }

    /// Every validator named in the validator list, fetched concurrently.
    pub async fn get_all_validators(&self) -> LinoResult<Vec<Validator>> {
        let list = self.get_validator_list().await?;
        let member_keys = list
            .all_validators
            .iter()
            .map(|name| keys::validator_key(name))
            .collect();
        self.fetch_all(member_keys, VALIDATOR_STORE).await
    }

    pub async fn get_voter(&self, username: &str) -> LinoResult<Voter> {
        self.transport
            .query(&keys::voter_key(username), VOTE_STORE)
            .await
    }

    pub async fn get_delegation(&self, voter: &str, delegator: &str) -> LinoResult<Delegation> {
        self.transport
            .query(&keys::delegation_key(voter, delegator), VOTE_STORE)
            .await
    }

    /// Delegations to `voter`, keyed by delegator.
    pub async fn get_all_delegation(&self, voter: &str) -> LinoResult<Vec<ResultKv<Delegation>>> {
        self.transport
            .query_subspace(
                &keys::delegation_prefix(voter),
                VOTE_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }

    pub async fn get_vote(&self, proposal_id: &str, voter: &str) -> LinoResult<Vote> {
        self.transport
            .query(&keys::vote_key(proposal_id, voter), VOTE_STORE)
            .await
    }

    /// Votes on a proposal, keyed by voter.
    pub async fn get_proposal_all_votes(
        &self,
        proposal_id: &str,
    ) -> LinoResult<Vec<ResultKv<Vote>>> {
        self.transport
            .query_subspace(
                &keys::vote_prefix(proposal_id),
                VOTE_STORE,
                GetKeyBy::SubstringAfterSeparator,
            )
            .await
    }
}
