use async_trait::async_trait;

use super::notifications_model::BalanceUpdateNotification;
use crate::errors::Result;

/// Outbound channel for balance notifications (email in production).
#[async_trait]
pub trait NotificationSenderTrait: Send + Sync {
    async fn send(&self, notification: &BalanceUpdateNotification) -> Result<()>;

    /// Checks that the transport is reachable and accepts our credentials.
    async fn verify_connection(&self) -> bool;
}

#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Sends a notification built from sample changes on the first few
    /// accounts and the live rollup, after checking the transport.
    async fn send_test_notification(&self) -> Result<BalanceUpdateNotification>;
}
