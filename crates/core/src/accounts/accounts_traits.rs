//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountOverview, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Accounts are immutable once created, so the repository only creates and
/// reads them.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists every account, ordered by name.
    fn list(&self) -> Result<Vec<Account>>;

    /// Lists the accounts owned by one link item.
    fn list_by_item(&self, item_id: &str) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts.
    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Lists all accounts with their latest balance and institution metadata.
    fn list_account_overviews(&self) -> Result<Vec<AccountOverview>>;
}
