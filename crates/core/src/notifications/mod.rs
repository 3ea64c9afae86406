//! Balance-change notifications.

mod notifications_model;
mod notifications_service;
mod notifications_traits;


pub use notifications_model::{BalanceChange, BalanceUpdateNotification};
pub use notifications_service::NotificationService;
pub use notifications_traits::{NotificationSenderTrait, NotificationServiceTrait};
