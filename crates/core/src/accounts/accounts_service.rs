use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::accounts_model::{Account, AccountOverview};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::balances::BalanceRepositoryTrait;
use crate::errors::Result;
use crate::items::LinkItemRepositoryTrait;

/// Service for reading accounts together with their balances
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    balance_repository: Arc<dyn BalanceRepositoryTrait>,
    item_repository: Arc<dyn LinkItemRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        balance_repository: Arc<dyn BalanceRepositoryTrait>,
        item_repository: Arc<dyn LinkItemRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            balance_repository,
            item_repository,
        }
    }
}

impl AccountServiceTrait for AccountService {
    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists all accounts
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    fn list_account_overviews(&self) -> Result<Vec<AccountOverview>> {
        let accounts = self.repository.list()?;
        let mut latest = self.balance_repository.get_latest_for_all_accounts()?;
        let items: HashMap<String, _> = self
            .item_repository
            .list()?
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        debug!(
            "Building overviews for {} accounts across {} link items",
            accounts.len(),
            items.len()
        );

        let overviews = accounts
            .into_iter()
            .map(|account| {
                let item = items.get(&account.item_id);
                AccountOverview {
                    institution_name: item.and_then(|i| i.institution_name.clone()),
                    institution_logo: item.and_then(|i| i.institution_logo.clone()),
                    latest_balance: latest.remove(&account.id),
                    account,
                }
            })
            .collect();

        Ok(overviews)
    }
}
