//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use finboard_core::accounts::{Account, AccountCategory, NewAccount};

/// Database model for accounts
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub item_id: String,
    pub provider_account_id: String,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub mask: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            item_id: db.item_id,
            provider_account_id: db.provider_account_id,
            name: db.name,
            category: AccountCategory::from(db.category),
            subcategory: db.subcategory,
            mask: db.mask,
            created_at: db.created_at,
        }
    }
}

impl From<NewAccount> for AccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            item_id: domain.item_id,
            provider_account_id: domain.provider_account_id,
            name: domain.name,
            category: domain.category.to_string(),
            subcategory: domain.subcategory,
            mask: domain.mask,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
