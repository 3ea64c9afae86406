//! Refresh cycle: fetch live balances, append material changes, notify.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

use super::change_detection::detect_change;
use super::refresh_model::RefreshSummary;
use crate::accounts::AccountRepositoryTrait;
use crate::balances::{BalanceRepositoryTrait, NewBalanceSnapshot};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNKNOWN_INSTITUTION_NAME};
use crate::errors::{ProviderError, Result};
use crate::items::{LinkItem, LinkItemRepositoryTrait};
use crate::notifications::{BalanceChange, BalanceUpdateNotification, NotificationSenderTrait};
use crate::provider::{AggregationProviderTrait, ProviderAccount};
use crate::rollup::RollupServiceTrait;

#[async_trait]
pub trait RefreshServiceTrait: Send + Sync {
    /// Runs one refresh cycle over every link item.
    ///
    /// Provider failures skip the affected item; notification failures only
    /// clear `email_sent`. Store failures abort the cycle.
    async fn refresh_balances(&self) -> Result<RefreshSummary>;
}

pub struct RefreshService {
    item_repository: Arc<dyn LinkItemRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    balance_repository: Arc<dyn BalanceRepositoryTrait>,
    rollup_service: Arc<dyn RollupServiceTrait>,
    provider: Arc<dyn AggregationProviderTrait>,
    sender: Arc<dyn NotificationSenderTrait>,
    provider_timeout: Duration,
}

impl RefreshService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_repository: Arc<dyn LinkItemRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        balance_repository: Arc<dyn BalanceRepositoryTrait>,
        rollup_service: Arc<dyn RollupServiceTrait>,
        provider: Arc<dyn AggregationProviderTrait>,
        sender: Arc<dyn NotificationSenderTrait>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            item_repository,
            account_repository,
            balance_repository,
            rollup_service,
            provider,
            sender,
            provider_timeout,
        }
    }

    /// Fetches live balances for an item, bounded by the provider timeout.
    async fn fetch_balances(&self, item: &LinkItem) -> Result<Vec<ProviderAccount>> {
        match tokio::time::timeout(
            self.provider_timeout,
            self.provider.get_balances(&item.access_token),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.provider_timeout.as_millis() as u64).into()),
        }
    }

    /// Compares one item's fetched balances with the store and appends a
    /// snapshot for every material change.
    async fn apply_item_balances(
        &self,
        item: &LinkItem,
        fetched: Vec<ProviderAccount>,
    ) -> Result<Vec<BalanceChange>> {
        let accounts = self.account_repository.list_by_item(&item.id)?;
        let institution_name = item
            .institution_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_INSTITUTION_NAME.to_string());
        let mut changes = Vec::new();

        for provider_account in fetched {
            let Some(account) = accounts
                .iter()
                .find(|a| a.provider_account_id == provider_account.provider_account_id)
            else {
                debug!(
                    "Skipping provider account {} with no stored counterpart",
                    provider_account.provider_account_id
                );
                continue;
            };

            let previous = self
                .balance_repository
                .get_latest_for_account(&account.id)?
                .map(|snapshot| snapshot.current);
            let current = provider_account.current.unwrap_or(Decimal::ZERO);

            let Some(delta) = detect_change(previous, current) else {
                continue;
            };

            self.balance_repository
                .insert(NewBalanceSnapshot {
                    account_id: account.id.clone(),
                    current,
                    available: provider_account.available,
                    limit: provider_account.limit,
                    recorded_at: Some(Utc::now()),
                })
                .await?;

            changes.push(BalanceChange {
                account_name: account.name.clone(),
                institution_name: institution_name.clone(),
                previous_balance: previous.unwrap_or(Decimal::ZERO),
                current_balance: current,
                delta,
            });
        }

        Ok(changes)
    }

    /// Hands the payload to the sender; any failure is logged and reported
    /// as `false`.
    async fn notify(&self, notification: &BalanceUpdateNotification) -> bool {
        match self.sender.send(notification).await {
            Ok(()) => {
                info!(
                    "Balance notification sent for {} changes",
                    notification.changes.len()
                );
                true
            }
            Err(e) => {
                error!("Failed to send balance notification: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl RefreshServiceTrait for RefreshService {
    async fn refresh_balances(&self) -> Result<RefreshSummary> {
        let items = self.item_repository.list()?;
        let mut changes: Vec<BalanceChange> = Vec::new();

        for item in &items {
            let fetched = match self.fetch_balances(item).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!("Error refreshing balances for item {}: {}", item.id, e);
                    continue;
                }
            };
            changes.extend(self.apply_item_balances(item, fetched).await?);
        }

        let total_change: Decimal = changes.iter().map(|c| c.delta).sum();
        let summary = self.rollup_service.get_current_rollup()?;

        let email_sent = if changes.is_empty() {
            false
        } else {
            let notification = BalanceUpdateNotification {
                changes: changes.clone(),
                total_change,
                total_assets: summary.total_assets,
                total_liabilities: summary.total_liabilities,
                net_worth: summary.net_worth,
            };
            self.notify(&notification).await
        };

        let message = format!(
            "Refreshed balances. Found {} changes totaling ${:.prec$}{}",
            changes.len(),
            total_change,
            if email_sent {
                ". Email notification sent."
            } else {
                "."
            },
            prec = DISPLAY_DECIMAL_PRECISION as usize
        );
        info!("{}", message);

        Ok(RefreshSummary {
            success: true,
            changes,
            total_change,
            email_sent,
            summary,
            message,
        })
    }
}
