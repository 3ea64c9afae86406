//! Rollup service over persisted accounts and balances.

use chrono_tz::Tz;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::rollup_calculator::{group_breakdown, rollup_current, rollup_history};
use super::rollup_model::{BalanceRollup, DashboardSummary, RollupHistoryPoint};
use super::rollup_traits::RollupServiceTrait;
use crate::accounts::{Account, AccountCategory, AccountRepositoryTrait};
use crate::balances::{BalanceRepositoryTrait, BalanceSnapshot};
use crate::errors::Result;

/// Service computing rollups from the store.
pub struct RollupService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    balance_repository: Arc<dyn BalanceRepositoryTrait>,
    history_timezone: Tz,
}

impl RollupService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        balance_repository: Arc<dyn BalanceRepositoryTrait>,
        history_timezone: Tz,
    ) -> Self {
        Self {
            account_repository,
            balance_repository,
            history_timezone,
        }
    }

    /// Pairs every account that has at least one snapshot with its latest one.
    fn latest_pairs(&self) -> Result<Vec<(Account, BalanceSnapshot)>> {
        let mut latest = self.balance_repository.get_latest_for_all_accounts()?;
        let pairs = self
            .account_repository
            .list()?
            .into_iter()
            .filter_map(|account| {
                latest
                    .remove(&account.id)
                    .map(|snapshot| (account, snapshot))
            })
            .collect();
        Ok(pairs)
    }
}

impl RollupServiceTrait for RollupService {
    fn get_current_rollup(&self) -> Result<BalanceRollup> {
        let pairs = self.latest_pairs()?;
        Ok(rollup_current(&pairs))
    }

    fn get_summary(&self) -> Result<DashboardSummary> {
        let pairs = self.latest_pairs()?;
        Ok(DashboardSummary {
            rollup: rollup_current(&pairs),
            breakdown: group_breakdown(&pairs),
        })
    }

    fn get_balance_history(&self) -> Result<Vec<RollupHistoryPoint>> {
        let categories: HashMap<String, AccountCategory> = self
            .account_repository
            .list()?
            .into_iter()
            .map(|account| (account.id, account.category))
            .collect();
        let snapshots = self.balance_repository.list_all()?;
        debug!(
            "Computing balance history from {} snapshots in {}",
            snapshots.len(),
            self.history_timezone
        );
        Ok(rollup_history(
            &snapshots,
            &categories,
            self.history_timezone,
        ))
    }
}
