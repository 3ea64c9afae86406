use super::rollup_model::{BalanceRollup, DashboardSummary, RollupHistoryPoint};
use crate::errors::Result;

/// Read-side rollups over the persisted accounts and snapshots.
pub trait RollupServiceTrait: Send + Sync {
    /// Rollup of every account's latest snapshot.
    fn get_current_rollup(&self) -> Result<BalanceRollup>;

    /// Current rollup with the per-group breakdown.
    fn get_summary(&self) -> Result<DashboardSummary>;

    /// One rollup per calendar day that has snapshots, ascending by date.
    fn get_balance_history(&self) -> Result<Vec<RollupHistoryPoint>>;
}
