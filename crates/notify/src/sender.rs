//! SMTP transport for balance notifications.

use async_trait::async_trait;
use chrono::Utc;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{debug, error, info};
use std::fmt;
use std::time::Duration;

use crate::template::render_balance_update_email;
use finboard_core::errors::{Error, Result};
use finboard_core::notifications::{BalanceUpdateNotification, NotificationSenderTrait};

/// Default bound on a single SMTP exchange.
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// SMTP relay settings.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// Sends balance updates as multipart (text + HTML) email.
///
/// The connection upgrades to TLS with STARTTLS when the relay offers it.
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotificationSender {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| Error::Notification(format!("Invalid sender address: {}", e)))?;
        let to: Mailbox = config
            .to
            .parse()
            .map_err(|e| Error::Notification(format!("Invalid recipient address: {}", e)))?;

        let tls = TlsParameters::new(config.host.clone())
            .map_err(|e| Error::Notification(format!("Invalid TLS parameters: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(Tls::Opportunistic(tls))
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(DEFAULT_SMTP_TIMEOUT_SECS)))
            .build();

        Ok(Self { transport, from, to })
    }

    fn build_message(&self, notification: &BalanceUpdateNotification) -> Result<Message> {
        let email = render_balance_update_email(notification, Utc::now().date_naive());

        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))
            .map_err(|e| Error::Notification(format!("Failed to build email: {}", e)))
    }
}

#[async_trait]
impl NotificationSenderTrait for SmtpNotificationSender {
    async fn send(&self, notification: &BalanceUpdateNotification) -> Result<()> {
        let message = self.build_message(notification)?;
        debug!("Sending balance email with {} changes", notification.changes.len());

        self.transport.send(message).await.map_err(|e| {
            error!("Error sending email: {}", e);
            Error::Notification(e.to_string())
        })?;

        info!("Email sent successfully");
        Ok(())
    }

    async fn verify_connection(&self) -> bool {
        match self.transport.test_connection().await {
            Ok(true) => {
                info!("Email server connection successful");
                true
            }
            Ok(false) => {
                error!("Email server connection failed");
                false
            }
            Err(e) => {
                error!("Email server connection failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_core::notifications::BalanceChange;
    use rust_decimal_macros::dec;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "user".to_string(),
            password: "hunter2".to_string(),
            from: "Finboard <alerts@example.com>".to_string(),
            to: "me@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_builds_multipart_message() {
        let sender = SmtpNotificationSender::new(&config()).unwrap();
        let notification = BalanceUpdateNotification {
            changes: vec![BalanceChange {
                account_name: "Checking".to_string(),
                institution_name: "Chase".to_string(),
                previous_balance: dec!(10),
                current_balance: dec!(20),
                delta: dec!(10),
            }],
            total_change: dec!(10),
            total_assets: dec!(20),
            total_liabilities: dec!(0),
            net_worth: dec!(20),
        };

        let message = sender.build_message(&notification).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: me@example.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("Subject: Daily Finance Update - 1 changes (+$10.00)"));
    }

    #[tokio::test]
    async fn test_rejects_invalid_recipient() {
        let mut bad = config();
        bad.to = "not an address".to_string();
        assert!(matches!(
            SmtpNotificationSender::new(&bad),
            Err(Error::Notification(_))
        ));
    }

    #[test]
    fn test_debug_hides_password() {
        assert!(!format!("{:?}", config()).contains("hunter2"));
    }
}
