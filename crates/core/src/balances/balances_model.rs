//! Balance snapshot domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// One timestamped recording of an account's balance.
///
/// Snapshots are never updated or deleted; a new one is appended whenever a
/// refresh sees a material change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub id: String,
    pub account_id: String,
    /// Current balance as reported by the institution
    pub current: Decimal,
    /// Funds available for withdrawal, when reported
    pub available: Option<Decimal>,
    /// Credit limit, when reported
    pub limit: Option<Decimal>,
    pub recorded_at: DateTime<Utc>,
}

/// Input model for appending a balance snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBalanceSnapshot {
    pub account_id: String,
    pub current: Decimal,
    pub available: Option<Decimal>,
    pub limit: Option<Decimal>,
    /// Defaults to the insertion time when absent
    pub recorded_at: Option<DateTime<Utc>>,
}

impl NewBalanceSnapshot {
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        Ok(())
    }
}
