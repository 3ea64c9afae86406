//! In-memory doubles shared by the service tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::accounts::{Account, AccountCategory, AccountRepositoryTrait, NewAccount};
use crate::balances::{BalanceRepositoryTrait, BalanceSnapshot, NewBalanceSnapshot};
use crate::errors::{DatabaseError, Error, ProviderError, Result};
use crate::items::{LinkItem, LinkItemRepositoryTrait, NewLinkItem};
use crate::notifications::{BalanceUpdateNotification, NotificationSenderTrait};
use crate::provider::{
    AggregationProviderTrait, ExchangedToken, InstitutionInfo, LinkToken, ProviderAccount,
};

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn created_at() -> NaiveDateTime {
    ts(2024, 1, 1, 0, 0).naive_utc()
}

pub fn account(id: &str, item_id: &str, name: &str, category: &str) -> Account {
    Account {
        id: id.to_string(),
        item_id: item_id.to_string(),
        provider_account_id: format!("p-{}", id),
        name: name.to_string(),
        category: AccountCategory::from(category),
        subcategory: None,
        mask: None,
        created_at: created_at(),
    }
}

pub fn snapshot(account_id: &str, current: Decimal, recorded_at: DateTime<Utc>) -> BalanceSnapshot {
    BalanceSnapshot {
        id: format!("{}-{}", account_id, recorded_at.timestamp()),
        account_id: account_id.to_string(),
        current,
        available: None,
        limit: None,
        recorded_at,
    }
}

pub fn link_item(id: &str, institution_name: Option<&str>) -> LinkItem {
    LinkItem {
        id: id.to_string(),
        provider_item_id: format!("prov-{}", id),
        access_token: format!("access-{}", id),
        institution_id: format!("ins-{}", id),
        institution_name: institution_name.map(str::to_string),
        institution_logo: None,
        created_at: created_at(),
    }
}

pub fn provider_account(provider_account_id: &str, current: Option<Decimal>) -> ProviderAccount {
    ProviderAccount {
        provider_account_id: provider_account_id.to_string(),
        name: format!("Account {}", provider_account_id),
        category: AccountCategory::Depository,
        subcategory: Some("checking".to_string()),
        mask: Some("0000".to_string()),
        current,
        available: current,
        limit: None,
    }
}

// ----------------------------------------------------------------------------
// Repositories
// ----------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryAccountRepository {
    pub accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn with(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        let mut accounts = self.accounts.write().unwrap();
        let account = Account {
            id: new_account
                .id
                .unwrap_or_else(|| format!("acc-{}", accounts.len() + 1)),
            item_id: new_account.item_id,
            provider_account_id: new_account.provider_account_id,
            name: new_account.name,
            category: new_account.category,
            subcategory: new_account.subcategory,
            mask: new_account.mask,
            created_at: created_at(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(account_id.to_string())))
    }

    fn list(&self) -> Result<Vec<Account>> {
        let mut accounts = self.accounts.read().unwrap().clone();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    fn list_by_item(&self, item_id: &str) -> Result<Vec<Account>> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.item_id == item_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryBalanceRepository {
    pub snapshots: RwLock<Vec<BalanceSnapshot>>,
}

impl InMemoryBalanceRepository {
    pub fn with(snapshots: Vec<BalanceSnapshot>) -> Self {
        Self {
            snapshots: RwLock::new(snapshots),
        }
    }

    pub fn count_for(&self, account_id: &str) -> usize {
        self.snapshots
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.account_id == account_id)
            .count()
    }
}

#[async_trait]
impl BalanceRepositoryTrait for InMemoryBalanceRepository {
    async fn insert(&self, snapshot: NewBalanceSnapshot) -> Result<BalanceSnapshot> {
        snapshot.validate()?;
        let mut snapshots = self.snapshots.write().unwrap();
        let stored = BalanceSnapshot {
            id: format!("snap-{}", snapshots.len() + 1),
            account_id: snapshot.account_id,
            current: snapshot.current,
            available: snapshot.available,
            limit: snapshot.limit,
            recorded_at: snapshot.recorded_at.unwrap_or_else(Utc::now),
        };
        snapshots.push(stored.clone());
        Ok(stored)
    }

    fn get_latest_for_account(&self, account_id: &str) -> Result<Option<BalanceSnapshot>> {
        Ok(self
            .snapshots
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.account_id == account_id)
            .max_by_key(|s| s.recorded_at)
            .cloned())
    }

    fn get_latest_for_all_accounts(&self) -> Result<HashMap<String, BalanceSnapshot>> {
        let mut latest: HashMap<String, BalanceSnapshot> = HashMap::new();
        for snapshot in self.snapshots.read().unwrap().iter() {
            match latest.get(&snapshot.account_id) {
                Some(existing) if existing.recorded_at >= snapshot.recorded_at => {}
                _ => {
                    latest.insert(snapshot.account_id.clone(), snapshot.clone());
                }
            }
        }
        Ok(latest)
    }

    fn list_all(&self) -> Result<Vec<BalanceSnapshot>> {
        let mut snapshots = self.snapshots.read().unwrap().clone();
        snapshots.sort_by_key(|s| s.recorded_at);
        Ok(snapshots)
    }
}

#[derive(Default)]
pub struct InMemoryItemRepository {
    pub items: RwLock<Vec<LinkItem>>,
}

impl InMemoryItemRepository {
    pub fn with(items: Vec<LinkItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl LinkItemRepositoryTrait for InMemoryItemRepository {
    async fn create(&self, new_item: NewLinkItem) -> Result<LinkItem> {
        new_item.validate()?;
        let mut items = self.items.write().unwrap();
        let item = LinkItem {
            id: format!("item-{}", items.len() + 1),
            provider_item_id: new_item.provider_item_id,
            access_token: new_item.access_token,
            institution_id: new_item.institution_id,
            institution_name: new_item.institution_name,
            institution_logo: new_item.institution_logo,
            created_at: created_at(),
        };
        items.push(item.clone());
        Ok(item)
    }

    fn get_by_id(&self, item_id: &str) -> Result<LinkItem> {
        self.items
            .read()
            .unwrap()
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(item_id.to_string())))
    }

    fn list(&self) -> Result<Vec<LinkItem>> {
        Ok(self.items.read().unwrap().clone())
    }
}

// ----------------------------------------------------------------------------
// Provider
// ----------------------------------------------------------------------------

/// Scripted provider. Balances are keyed by access token; a token with no
/// entry fails with an API error, and a token listed in `slow_tokens` never
/// answers within any reasonable timeout.
#[derive(Default)]
pub struct MockProvider {
    pub balances: Mutex<HashMap<String, Vec<ProviderAccount>>>,
    pub accounts: Vec<ProviderAccount>,
    pub institution: Option<InstitutionInfo>,
    pub slow_tokens: Vec<String>,
    pub fail_exchange: bool,
    pub balance_calls: AtomicUsize,
}

impl MockProvider {
    pub fn set_balances(&self, access_token: &str, accounts: Vec<ProviderAccount>) {
        self.balances
            .lock()
            .unwrap()
            .insert(access_token.to_string(), accounts);
    }
}

#[async_trait]
impl AggregationProviderTrait for MockProvider {
    async fn create_link_token(&self, client_user_id: &str) -> Result<LinkToken> {
        Ok(LinkToken {
            link_token: format!("link-sandbox-{}", client_user_id),
            expiration: None,
        })
    }

    async fn exchange_public_token(&self, public_token: &str) -> Result<ExchangedToken> {
        if self.fail_exchange {
            return Err(ProviderError::Api {
                status: 400,
                code: "INVALID_PUBLIC_TOKEN".to_string(),
                message: "provided public token is in an invalid format".to_string(),
            }
            .into());
        }
        Ok(ExchangedToken {
            access_token: format!("access-{}", public_token),
            item_id: format!("prov-{}", public_token),
        })
    }

    async fn get_item_institution_id(&self, _access_token: &str) -> Result<String> {
        Ok(self
            .institution
            .as_ref()
            .map(|i| i.institution_id.clone())
            .unwrap_or_else(|| "ins_1".to_string()))
    }

    async fn get_institution(&self, institution_id: &str) -> Result<InstitutionInfo> {
        Ok(self.institution.clone().unwrap_or_else(|| InstitutionInfo {
            institution_id: institution_id.to_string(),
            name: "First Platypus Bank".to_string(),
            logo: None,
        }))
    }

    async fn get_accounts(&self, _access_token: &str) -> Result<Vec<ProviderAccount>> {
        Ok(self.accounts.clone())
    }

    async fn get_balances(&self, access_token: &str) -> Result<Vec<ProviderAccount>> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if self.slow_tokens.iter().any(|t| t == access_token) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.balances
            .lock()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or_else(|| {
                ProviderError::Api {
                    status: 400,
                    code: "ITEM_LOGIN_REQUIRED".to_string(),
                    message: "the login details of this item have changed".to_string(),
                }
                .into()
            })
    }
}

// ----------------------------------------------------------------------------
// Notification sender
// ----------------------------------------------------------------------------

/// Records every payload it is asked to send.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<VecDeque<BalanceUpdateNotification>>,
    pub fail_send: bool,
    pub unreachable: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            fail_send: true,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<BalanceUpdateNotification> {
        self.sent.lock().unwrap().back().cloned()
    }
}

#[async_trait]
impl NotificationSenderTrait for RecordingSender {
    async fn send(&self, notification: &BalanceUpdateNotification) -> Result<()> {
        if self.fail_send {
            return Err(Error::Notification("SMTP relay refused the message".to_string()));
        }
        self.sent.lock().unwrap().push_back(notification.clone());
        Ok(())
    }

    async fn verify_connection(&self) -> bool {
        !self.unreachable
    }
}

/// Wires the in-memory repositories into `Arc`s for service construction.
pub struct Store {
    pub accounts: Arc<InMemoryAccountRepository>,
    pub balances: Arc<InMemoryBalanceRepository>,
    pub items: Arc<InMemoryItemRepository>,
}

impl Store {
    pub fn new(items: Vec<LinkItem>, accounts: Vec<Account>, snapshots: Vec<BalanceSnapshot>) -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepository::with(accounts)),
            balances: Arc::new(InMemoryBalanceRepository::with(snapshots)),
            items: Arc::new(InMemoryItemRepository::with(items)),
        }
    }
}
