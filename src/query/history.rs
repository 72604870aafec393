//! Bucketed balance and reward history.
//!
//! History entries are stored in buckets of [`HISTORY_BUCKET_SIZE`] addressed
//! by bucket index; entry `i` lives in bucket `i / 100`. The entry count comes
//! from the account bank, so every ranged read costs one bank lookup plus one
//! concurrent fetch per spanned bucket.
//!
//! Results are returned newest first (descending entry index).

use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;

use crate::error::{LinoError, LinoResult};
use crate::query::Query;
use crate::store::{keys, ACCOUNT_STORE};
use crate::types::{AccountBank, BalanceHistory, Detail, RewardDetail, RewardHistory};

pub const HISTORY_BUCKET_SIZE: u64 = 100;

/// A stored history bucket and how to find it.
trait HistoryBucket: DeserializeOwned {
    type Entry;

    fn key(username: &str, bucket: u64) -> String;
    fn count(bank: &AccountBank) -> LinoResult<u64>;
    fn into_entries(self) -> Vec<Self::Entry>;
}

impl HistoryBucket for BalanceHistory {
    type Entry = Detail;

    fn key(username: &str, bucket: u64) -> String {
        keys::balance_history_key(username, bucket)
    }

    fn count(bank: &AccountBank) -> LinoResult<u64> {
        non_negative(bank.number_of_transaction)
    }

    fn into_entries(self) -> Vec<Detail> {
        self.details
    }
}

impl HistoryBucket for RewardHistory {
    type Entry = RewardDetail;

    fn key(username: &str, bucket: u64) -> String {
        keys::reward_history_key(username, bucket)
    }

    fn count(bank: &AccountBank) -> LinoResult<u64> {
        non_negative(bank.number_of_reward)
    }

    fn into_entries(self) -> Vec<RewardDetail> {
        self.details
    }
}

fn non_negative(count: i64) -> LinoResult<u64> {
    u64::try_from(count)
        .map_err(|_| LinoError::UnexpectedValue(format!("negative history count {count}")))
}

/// Inclusive `[from, to]` range of entry indices to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryRange {
    from: u64,
    to: u64,
}

impl EntryRange {
    /// Range for an explicit request; `to` must not pass the last stored entry.
    fn bounded(from: u64, to: u64, count: u64) -> LinoResult<Self> {
        check_order(from, to)?;
        if count == 0 || to > count - 1 {
            return Err(LinoError::InvalidRange(format!(
                "to ({to}) exceeds the last history index ({})",
                count as i128 - 1
            )));
        }
        Ok(Self { from, to })
    }

    /// The newest `n` entries, clamped to what exists.
    fn recent(n: u64, count: u64) -> Option<Self> {
        if n == 0 || count == 0 {
            return None;
        }
        Some(Self {
            from: count.saturating_sub(n),
            to: count - 1,
        })
    }

    fn buckets(&self) -> std::ops::RangeInclusive<u64> {
        self.from / HISTORY_BUCKET_SIZE..=self.to / HISTORY_BUCKET_SIZE
    }
}

fn check_order(from: u64, to: u64) -> LinoResult<()> {
    if from > to {
        return Err(LinoError::InvalidRange(format!(
            "from ({from}) is greater than to ({to})"
        )));
    }
    Ok(())
}

/// Keep the entries of one bucket that fall inside `range`.
fn trim_bucket<E>(bucket: u64, entries: Vec<E>, range: EntryRange) -> impl Iterator<Item = E> {
    let base = bucket * HISTORY_BUCKET_SIZE;
    entries
        .into_iter()
        .enumerate()
        .filter(move |(i, _)| {
            let index = base + *i as u64;
            index >= range.from && index <= range.to
        })
        .map(|(_, entry)| entry)
}

impl Query {
    async fn history_bucket<H: HistoryBucket>(&self, username: &str, bucket: u64) -> LinoResult<H> {
        self.transport
            .query(&H::key(username, bucket), ACCOUNT_STORE)
            .await
    }

    async fn history_count<H: HistoryBucket>(&self, username: &str) -> LinoResult<u64> {
        H::count(&self.get_account_bank(username).await?)
    }

    async fn history_range<H: HistoryBucket>(
        &self,
        username: &str,
        range: EntryRange,
    ) -> LinoResult<Vec<H::Entry>> {
        let fetches = range.buckets().map(|bucket| async move {
            let stored: H = self.history_bucket(username, bucket).await?;
            Ok::<_, LinoError>((bucket, stored.into_entries()))
        });
        let mut buckets = try_join_all(fetches).await?;
        buckets.sort_by_key(|(bucket, _)| *bucket);

        let mut entries: Vec<H::Entry> = buckets
            .into_iter()
            .flat_map(|(bucket, stored)| trim_bucket(bucket, stored, range))
            .collect();
        entries.reverse();
        Ok(entries)
    }

    async fn all_history<H: HistoryBucket>(&self, username: &str) -> LinoResult<Vec<H::Entry>> {
        match self.history_count::<H>(username).await? {
            0 => Ok(Vec::new()),
            count => {
                self.history_range::<H>(username, EntryRange { from: 0, to: count - 1 })
                    .await
            }
        }
    }

    async fn history_from_to<H: HistoryBucket>(
        &self,
        username: &str,
        from: u64,
        to: u64,
    ) -> LinoResult<Vec<H::Entry>> {
        check_order(from, to)?;
        let count = self.history_count::<H>(username).await?;
        let range = EntryRange::bounded(from, to, count)?;
        self.history_range::<H>(username, range).await
    }

    async fn recent_history<H: HistoryBucket>(
        &self,
        username: &str,
        n: u64,
    ) -> LinoResult<Vec<H::Entry>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let count = self.history_count::<H>(username).await?;
        match EntryRange::recent(n, count) {
            Some(range) => self.history_range::<H>(username, range).await,
            None => Ok(Vec::new()),
        }
    }

    /// One stored bucket of balance history.
    pub async fn get_balance_history_bundle(
        &self,
        username: &str,
        bucket: u64,
    ) -> LinoResult<BalanceHistory> {
        self.history_bucket(username, bucket).await
    }

    pub async fn get_all_balance_history(&self, username: &str) -> LinoResult<Vec<Detail>> {
        self.all_history::<BalanceHistory>(username).await
    }

    /// Entries `from..=to`, newest first. Fails with `InvalidRange` when
    /// `from > to` or `to` is past the last entry.
    pub async fn get_balance_history_from_to(
        &self,
        username: &str,
        from: u64,
        to: u64,
    ) -> LinoResult<Vec<Detail>> {
        self.history_from_to::<BalanceHistory>(username, from, to)
            .await
    }

    /// The newest `n` entries (fewer if the account has fewer), newest first.
    pub async fn get_recent_balance_history(
        &self,
        username: &str,
        n: u64,
    ) -> LinoResult<Vec<Detail>> {
        self.recent_history::<BalanceHistory>(username, n).await
    }

    pub async fn get_reward_history_bundle(
        &self,
        username: &str,
        bucket: u64,
    ) -> LinoResult<RewardHistory> {
        self.history_bucket(username, bucket).await
    }

    pub async fn get_all_reward_history(&self, username: &str) -> LinoResult<Vec<RewardDetail>> {
        self.all_history::<RewardHistory>(username).await
    }

    pub async fn get_reward_history_from_to(
        &self,
        username: &str,
        from: u64,
        to: u64,
    ) -> LinoResult<Vec<RewardDetail>> {
        self.history_from_to::<RewardHistory>(username, from, to)
            .await
    }

    pub async fn get_recent_reward_history(
        &self,
        username: &str,
        n: u64,
    ) -> LinoResult<Vec<RewardDetail>> {
        self.recent_history::<RewardHistory>(username, n).await
    }
}
