//! Governance proposal reads.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::{keys, PROPOSAL_STORE};
use crate::types::{NextProposalId, Proposal, ProposalList};

impl Query {
    pub async fn get_proposal_list(&self) -> LinoResult<ProposalList> {
        self.transport
            .query(&keys::proposal_list_key(), PROPOSAL_STORE)
            .await
    }

    pub async fn get_proposal(&self, proposal_id: &str) -> LinoResult<Proposal> {
        self.transport
            .query(&keys::proposal_key(proposal_id), PROPOSAL_STORE)
            .await
    }

    pub async fn get_ongoing_proposals(&self) -> LinoResult<Vec<Proposal>> {
        let list = self.get_proposal_list().await?;
        self.fetch_proposals(&list.ongoing_proposal).await
    }

    pub async fn get_expired_proposals(&self) -> LinoResult<Vec<Proposal>> {
        let list = self.get_proposal_list().await?;
        self.fetch_proposals(&list.past_proposal).await
    }

    pub async fn get_next_proposal_id(&self) -> LinoResult<NextProposalId> {
        self.transport
            .query(&keys::next_proposal_id_key(), PROPOSAL_STORE)
            .await
    }

    async fn fetch_proposals(&self, ids: &[String]) -> LinoResult<Vec<Proposal>> {
        let member_keys = ids.iter().map(|id| keys::proposal_key(id)).collect();
        self.fetch_all(member_keys, PROPOSAL_STORE).await
    }
}
