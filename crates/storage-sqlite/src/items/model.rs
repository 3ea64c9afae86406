//! Database model for link items.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use finboard_core::items::{LinkItem, NewLinkItem};

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::link_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LinkItemDB {
    pub id: String,
    pub provider_item_id: String,
    pub access_token: String,
    pub institution_id: String,
    pub institution_name: Option<String>,
    pub institution_logo: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<LinkItemDB> for LinkItem {
    fn from(db: LinkItemDB) -> Self {
        Self {
            id: db.id,
            provider_item_id: db.provider_item_id,
            access_token: db.access_token,
            institution_id: db.institution_id,
            institution_name: db.institution_name,
            institution_logo: db.institution_logo,
            created_at: db.created_at,
        }
    }
}

impl From<NewLinkItem> for LinkItemDB {
    fn from(domain: NewLinkItem) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            provider_item_id: domain.provider_item_id,
            access_token: domain.access_token,
            institution_id: domain.institution_id,
            institution_name: domain.institution_name,
            institution_logo: domain.institution_logo,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
