use async_trait::async_trait;
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::notifications_model::{BalanceChange, BalanceUpdateNotification};
use super::notifications_traits::{NotificationSenderTrait, NotificationServiceTrait};
use crate::accounts::AccountServiceTrait;
use crate::constants::{
    EMAIL_CONNECTION_FAILED_MESSAGE, TEST_NOTIFICATION_INSTITUTION_NAME,
    TEST_NOTIFICATION_SAMPLE_DELTA, TEST_NOTIFICATION_SAMPLE_SIZE,
};
use crate::errors::{Error, Result};
use crate::rollup::RollupServiceTrait;

pub struct NotificationService {
    sender: Arc<dyn NotificationSenderTrait>,
    account_service: Arc<dyn AccountServiceTrait>,
    rollup_service: Arc<dyn RollupServiceTrait>,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSenderTrait>,
        account_service: Arc<dyn AccountServiceTrait>,
        rollup_service: Arc<dyn RollupServiceTrait>,
    ) -> Self {
        Self {
            sender,
            account_service,
            rollup_service,
        }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn send_test_notification(&self) -> Result<BalanceUpdateNotification> {
        if !self.sender.verify_connection().await {
            warn!("Notification transport failed its connectivity check");
            return Err(Error::Notification(EMAIL_CONNECTION_FAILED_MESSAGE.to_string()));
        }

        let changes: Vec<BalanceChange> = self
            .account_service
            .list_account_overviews()?
            .into_iter()
            .take(TEST_NOTIFICATION_SAMPLE_SIZE)
            .map(|overview| {
                let current = overview
                    .latest_balance
                    .map(|b| b.current)
                    .unwrap_or(Decimal::ZERO);
                BalanceChange {
                    account_name: overview.account.name,
                    institution_name: overview
                        .institution_name
                        .unwrap_or_else(|| TEST_NOTIFICATION_INSTITUTION_NAME.to_string()),
                    previous_balance: current - TEST_NOTIFICATION_SAMPLE_DELTA,
                    current_balance: current,
                    delta: TEST_NOTIFICATION_SAMPLE_DELTA,
                }
            })
            .collect();

        let rollup = self.rollup_service.get_current_rollup()?;
        let notification = BalanceUpdateNotification {
            total_change: changes.iter().map(|c| c.delta).sum(),
            changes,
            total_assets: rollup.total_assets,
            total_liabilities: rollup.total_liabilities,
            net_worth: rollup.net_worth,
        };

        self.sender.send(&notification).await?;
        info!(
            "Test notification sent with {} sample changes",
            notification.changes.len()
        );
        Ok(notification)
    }
}
