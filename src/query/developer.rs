//! Developer and infrastructure provider reads.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::{keys, DEVELOPER_STORE, INFRA_STORE};
use crate::types::{Developer, DeveloperList, InfraProvider, InfraProviderList};

impl Query {
    pub async fn get_developer(&self, username: &str) -> LinoResult<Developer> {
        self.transport
            .query(&keys::developer_key(username), DEVELOPER_STORE)
            .await
    }

    pub async fn get_developer_list(&self) -> LinoResult<DeveloperList> {
        self.transport
            .query(&keys::developer_list_key(), DEVELOPER_STORE)
            .await
    }

    pub async fn get_developers(&self) -> LinoResult<Vec<Developer>> {
        let list = self.get_developer_list().await?;
        let member_keys = list
            .all_developers
            .iter()
            .map(|name| keys::developer_key(name))
            .collect();
        self.fetch_all(member_keys, DEVELOPER_STORE).await
    }

    pub async fn get_infra_provider(&self, username: &str) -> LinoResult<InfraProvider> {
        self.transport
            .query(&keys::infra_provider_key(username), INFRA_STORE)
            .await
    }

    pub async fn get_infra_provider_list(&self) -> LinoResult<InfraProviderList> {
        self.transport
            .query(&keys::infra_provider_list_key(), INFRA_STORE)
            .await
    }

    pub async fn get_infra_providers(&self) -> LinoResult<Vec<InfraProvider>> {
        let list = self.get_infra_provider_list().await?;
        let member_keys = list
            .all_infra_providers
            .iter()
            .map(|name| keys::infra_provider_key(name))
            .collect();
        self.fetch_all(member_keys, INFRA_STORE).await
    }
}
