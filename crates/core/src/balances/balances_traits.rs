//! Balance snapshot repository trait.

use async_trait::async_trait;
use std::collections::HashMap;

use super::balances_model::{BalanceSnapshot, NewBalanceSnapshot};
use crate::errors::Result;

/// Persistence contract for balance snapshots.
#[async_trait]
pub trait BalanceRepositoryTrait: Send + Sync {
    /// Appends one snapshot. Each call is its own transaction.
    async fn insert(&self, snapshot: NewBalanceSnapshot) -> Result<BalanceSnapshot>;

    /// Returns the snapshot with the latest `recorded_at` for an account.
    fn get_latest_for_account(&self, account_id: &str) -> Result<Option<BalanceSnapshot>>;

    /// Returns the latest snapshot of every account that has one, keyed by
    /// account ID.
    fn get_latest_for_all_accounts(&self) -> Result<HashMap<String, BalanceSnapshot>>;

    /// Returns every snapshot, ordered by `recorded_at` ascending.
    fn list_all(&self) -> Result<Vec<BalanceSnapshot>>;
}
