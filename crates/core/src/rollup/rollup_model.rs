//! Rollup domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouped totals of a set of balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRollup {
    /// Sum of asset balances
    pub total_assets: Decimal,
    /// Sum of liability balances (positive magnitude)
    pub total_liabilities: Decimal,
    /// total_assets - total_liabilities
    pub net_worth: Decimal,
}

impl BalanceRollup {
    pub fn from_totals(total_assets: Decimal, total_liabilities: Decimal) -> Self {
        Self {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }
}

/// A single point in the daily rollup history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupHistoryPoint {
    /// Calendar day in the configured history timezone
    pub date: NaiveDate,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
}

impl RollupHistoryPoint {
    pub fn new(date: NaiveDate, rollup: BalanceRollup) -> Self {
        Self {
            date,
            total_assets: rollup.total_assets,
            total_liabilities: rollup.total_liabilities,
            net_worth: rollup.net_worth,
        }
    }
}

/// Dashboard grouping of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancialGroup {
    /// Checking, savings, CDs
    Cash,
    /// Brokerage and retirement accounts
    Investments,
    /// Credit cards and loans (positive magnitude)
    Liabilities,
}

impl FinancialGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            FinancialGroup::Cash => "Cash",
            FinancialGroup::Investments => "Investments",
            FinancialGroup::Liabilities => "Liabilities",
        }
    }
}

/// Individual item in the group breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBreakdownItem {
    pub group: FinancialGroup,
    pub name: String,
    pub value: Decimal,
    pub account_count: usize,
}

/// Current rollup plus the per-group breakdown shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub rollup: BalanceRollup,
    pub breakdown: Vec<GroupBreakdownItem>,
}
