//! Link item repository and service traits.

use async_trait::async_trait;

use super::items_model::{LinkItem, LinkedItem, NewLinkItem};
use crate::errors::Result;
use crate::provider::LinkToken;

/// Persistence contract for link items.
#[async_trait]
pub trait LinkItemRepositoryTrait: Send + Sync {
    async fn create(&self, new_item: NewLinkItem) -> Result<LinkItem>;

    fn get_by_id(&self, item_id: &str) -> Result<LinkItem>;

    /// Lists every link item in creation order.
    fn list(&self) -> Result<Vec<LinkItem>>;
}

/// Service contract for linking new bank connections.
#[async_trait]
pub trait LinkServiceTrait: Send + Sync {
    /// Creates a token for the hosted linking widget.
    async fn create_link_token(&self, client_user_id: &str) -> Result<LinkToken>;

    /// Completes a link: exchanges the public token, then persists the item,
    /// its accounts and their initial balances.
    async fn link_item(&self, public_token: &str) -> Result<LinkedItem>;
}
