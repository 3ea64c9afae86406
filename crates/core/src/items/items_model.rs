//! Link item domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::{errors::ValidationError, Error, Result};

/// One bank connection made through the aggregation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    pub id: String,
    /// Item ID in the provider's system
    pub provider_item_id: String,
    /// Opaque credential; never sent to clients
    #[serde(skip_serializing)]
    pub access_token: String,
    pub institution_id: String,
    pub institution_name: Option<String>,
    pub institution_logo: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for persisting a freshly linked item.
#[derive(Debug, Clone)]
pub struct NewLinkItem {
    pub provider_item_id: String,
    pub access_token: String,
    pub institution_id: String,
    pub institution_name: Option<String>,
    pub institution_logo: Option<String>,
}

impl NewLinkItem {
    pub fn validate(&self) -> Result<()> {
        if self.provider_item_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "providerItemId".to_string(),
            )));
        }
        if self.access_token.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accessToken".to_string(),
            )));
        }
        Ok(())
    }
}

/// A link item together with the accounts created for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedItem {
    pub item: LinkItem,
    pub accounts: Vec<Account>,
}
