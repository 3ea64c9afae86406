//! Account domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::accounts_constants::account_categories;
use crate::balances::BalanceSnapshot;
use crate::{errors::ValidationError, Error, Result};

/// Which side of the balance sheet an account's balance lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollupSide {
    /// Counted at its signed current amount
    Asset,
    /// Counted at the absolute value of its current amount
    Liability,
    /// Contributes to neither total
    Excluded,
}

/// Provider-reported account category.
///
/// Categories the rollup does not know about are kept verbatim in `Other`
/// so they round-trip through storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountCategory {
    Depository,
    Credit,
    Loan,
    Investment,
    Other(String),
}

impl AccountCategory {
    pub fn as_str(&self) -> &str {
        match self {
            AccountCategory::Depository => account_categories::DEPOSITORY,
            AccountCategory::Credit => account_categories::CREDIT,
            AccountCategory::Loan => account_categories::LOAN,
            AccountCategory::Investment => account_categories::INVESTMENT,
            AccountCategory::Other(raw) => raw.as_str(),
        }
    }

    pub fn rollup_side(&self) -> RollupSide {
        match self {
            AccountCategory::Depository | AccountCategory::Investment => RollupSide::Asset,
            AccountCategory::Credit | AccountCategory::Loan => RollupSide::Liability,
            AccountCategory::Other(_) => RollupSide::Excluded,
        }
    }

    pub fn is_asset(&self) -> bool {
        self.rollup_side() == RollupSide::Asset
    }

    pub fn is_liability(&self) -> bool {
        self.rollup_side() == RollupSide::Liability
    }
}

impl From<&str> for AccountCategory {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            account_categories::DEPOSITORY => AccountCategory::Depository,
            account_categories::CREDIT => AccountCategory::Credit,
            account_categories::LOAN => AccountCategory::Loan,
            account_categories::INVESTMENT => AccountCategory::Investment,
            _ => AccountCategory::Other(value.to_string()),
        }
    }
}

impl From<String> for AccountCategory {
    fn from(value: String) -> Self {
        AccountCategory::from(value.as_str())
    }
}

impl From<AccountCategory> for String {
    fn from(category: AccountCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a linked bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    /// Owning link item
    pub item_id: String,
    /// Account ID in the aggregation provider's system
    pub provider_account_id: String,
    pub name: String,
    pub category: AccountCategory,
    pub subcategory: Option<String>,
    /// Last digits of the account number, as shown by the institution
    pub mask: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item_id: String,
    pub provider_account_id: String,
    pub name: String,
    pub category: AccountCategory,
    pub subcategory: Option<String>,
    pub mask: Option<String>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.item_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "itemId".to_string(),
            )));
        }
        if self.provider_account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "providerAccountId".to_string(),
            )));
        }
        Ok(())
    }
}

/// An account joined with its latest balance and institution metadata,
/// as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    #[serde(flatten)]
    pub account: Account,
    pub institution_name: Option<String>,
    pub institution_logo: Option<String>,
    pub latest_balance: Option<BalanceSnapshot>,
}
