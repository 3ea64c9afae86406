use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::notifications::BalanceChange;
use crate::rollup::BalanceRollup;

/// Outcome of one refresh cycle across all link items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    /// Always true; failed cycles surface as errors instead
    pub success: bool,
    pub changes: Vec<BalanceChange>,
    /// Sum of the signed deltas in `changes`
    pub total_change: Decimal,
    /// False when nothing changed or the sender failed
    pub email_sent: bool,
    /// Rollup across all accounts after the new snapshots were written
    pub summary: BalanceRollup,
    pub message: String,
}
