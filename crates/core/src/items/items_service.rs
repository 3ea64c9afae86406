use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::items_model::{LinkedItem, NewLinkItem};
use super::items_traits::{LinkItemRepositoryTrait, LinkServiceTrait};
use crate::accounts::{AccountRepositoryTrait, NewAccount};
use crate::balances::{BalanceRepositoryTrait, NewBalanceSnapshot};
use crate::errors::{Error, Result, ValidationError};
use crate::provider::{AggregationProviderTrait, LinkToken};

/// Service that turns a completed linking handshake into stored items,
/// accounts and opening balances.
pub struct LinkService {
    provider: Arc<dyn AggregationProviderTrait>,
    item_repository: Arc<dyn LinkItemRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    balance_repository: Arc<dyn BalanceRepositoryTrait>,
}

impl LinkService {
    pub fn new(
        provider: Arc<dyn AggregationProviderTrait>,
        item_repository: Arc<dyn LinkItemRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        balance_repository: Arc<dyn BalanceRepositoryTrait>,
    ) -> Self {
        Self {
            provider,
            item_repository,
            account_repository,
            balance_repository,
        }
    }
}

#[async_trait]
impl LinkServiceTrait for LinkService {
    async fn create_link_token(&self, client_user_id: &str) -> Result<LinkToken> {
        self.provider.create_link_token(client_user_id).await
    }

    async fn link_item(&self, public_token: &str) -> Result<LinkedItem> {
        if public_token.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "publicToken".to_string(),
            )));
        }

        let exchanged = self.provider.exchange_public_token(public_token).await?;
        let institution_id = self
            .provider
            .get_item_institution_id(&exchanged.access_token)
            .await?;
        let institution = self.provider.get_institution(&institution_id).await?;

        let item = self
            .item_repository
            .create(NewLinkItem {
                provider_item_id: exchanged.item_id,
                access_token: exchanged.access_token,
                institution_id,
                institution_name: Some(institution.name),
                institution_logo: institution.logo,
            })
            .await?;
        info!(
            "Linked item {} ({})",
            item.id,
            item.institution_name.as_deref().unwrap_or_default()
        );

        let provider_accounts = self.provider.get_accounts(&item.access_token).await?;
        let linked_at = Utc::now();
        let mut accounts = Vec::with_capacity(provider_accounts.len());

        for provider_account in provider_accounts {
            let account = self
                .account_repository
                .create(NewAccount {
                    id: None,
                    item_id: item.id.clone(),
                    provider_account_id: provider_account.provider_account_id,
                    name: provider_account.name,
                    category: provider_account.category,
                    subcategory: provider_account.subcategory,
                    mask: provider_account.mask,
                })
                .await?;

            self.balance_repository
                .insert(NewBalanceSnapshot {
                    account_id: account.id.clone(),
                    current: provider_account.current.unwrap_or(Decimal::ZERO),
                    available: provider_account.available,
                    limit: provider_account.limit,
                    recorded_at: Some(linked_at),
                })
                .await?;

            debug!("Stored account {} with opening balance", account.id);
            accounts.push(account);
        }

        Ok(LinkedItem { item, accounts })
    }
}
