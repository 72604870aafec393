//! Chain-wide accounting reads.

use crate::error::LinoResult;
use crate::query::Query;
use crate::store::{keys, GLOBAL_STORE};
use crate::types::{ConsumptionMeta, GlobalMeta, InflationPool, TimeEventList, Tps};

impl Query {
    pub async fn get_global_meta(&self) -> LinoResult<GlobalMeta> {
        self.transport
            .query(&keys::global_meta_key(), GLOBAL_STORE)
            .await
    }

    pub async fn get_inflation_pool(&self) -> LinoResult<InflationPool> {
        self.transport
            .query(&keys::inflation_pool_key(), GLOBAL_STORE)
            .await
    }

    pub async fn get_consumption_meta(&self) -> LinoResult<ConsumptionMeta> {
        self.transport
            .query(&keys::consumption_meta_key(), GLOBAL_STORE)
            .await
    }

    pub async fn get_tps(&self) -> LinoResult<Tps> {
        self.transport.query(&keys::tps_key(), GLOBAL_STORE).await
    }

    /// Events scheduled for `unix_time` (seconds).
    pub async fn get_time_event_list(&self, unix_time: i64) -> LinoResult<TimeEventList> {
        self.transport
            .query(&keys::time_event_key(unix_time), GLOBAL_STORE)
            .await
    }
}
