//! Data returned by the aggregation provider.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountCategory;

/// Short-lived token the hosted linking widget is initialised with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkToken {
    pub link_token: String,
    pub expiration: Option<String>,
}

/// Result of exchanging the widget's public token.
#[derive(Debug, Clone)]
pub struct ExchangedToken {
    pub access_token: String,
    pub item_id: String,
}

/// Institution display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionInfo {
    pub institution_id: String,
    pub name: String,
    /// Base64-encoded PNG, when the provider has one
    pub logo: Option<String>,
}

/// An account with its balances as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    pub provider_account_id: String,
    pub name: String,
    pub category: AccountCategory,
    pub subcategory: Option<String>,
    pub mask: Option<String>,
    pub current: Option<Decimal>,
    pub available: Option<Decimal>,
    pub limit: Option<Decimal>,
}
