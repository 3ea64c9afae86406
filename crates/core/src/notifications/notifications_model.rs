use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material balance movement on one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    pub account_name: String,
    pub institution_name: String,
    pub previous_balance: Decimal,
    pub current_balance: Decimal,
    pub delta: Decimal,
}

/// Payload handed to the notification sender after a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdateNotification {
    pub changes: Vec<BalanceChange>,
    pub total_change: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
}
