use async_trait::async_trait;

use super::provider_model::{ExchangedToken, InstitutionInfo, LinkToken, ProviderAccount};
use crate::errors::Result;

/// Trait for talking to the bank-data aggregation API.
///
/// Network, authentication and API failures are all reported as
/// [`crate::Error::Provider`].
#[async_trait]
pub trait AggregationProviderTrait: Send + Sync {
    /// Creates a link token for the hosted linking widget.
    async fn create_link_token(&self, client_user_id: &str) -> Result<LinkToken>;

    /// Exchanges the widget's public token for a long-lived access token.
    async fn exchange_public_token(&self, public_token: &str) -> Result<ExchangedToken>;

    /// Returns the institution ID behind an item.
    async fn get_item_institution_id(&self, access_token: &str) -> Result<String>;

    /// Fetches display metadata for an institution.
    async fn get_institution(&self, institution_id: &str) -> Result<InstitutionInfo>;

    /// Lists the item's accounts with the provider's cached balances.
    async fn get_accounts(&self, access_token: &str) -> Result<Vec<ProviderAccount>>;

    /// Lists the item's accounts with balances fetched live from the institution.
    async fn get_balances(&self, access_token: &str) -> Result<Vec<ProviderAccount>>;
}
