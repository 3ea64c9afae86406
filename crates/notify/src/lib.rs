//! Finboard Notify - balance-change emails over SMTP.
//!
//! [`SmtpNotificationSender`] implements
//! [`finboard_core::notifications::NotificationSenderTrait`]; the message body
//! is produced by [`render_balance_update_email`].

mod sender;
mod template;

pub use sender::{SmtpConfig, SmtpNotificationSender};
pub use template::{format_currency, render_balance_update_email, RenderedEmail};
