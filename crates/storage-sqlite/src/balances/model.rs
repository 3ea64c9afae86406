//! Database model for balance snapshots.
//!
//! Amounts are stored as decimal strings so no precision is lost in SQLite's
//! REAL affinity. Timestamps are stored as naive UTC.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use finboard_core::balances::{BalanceSnapshot, NewBalanceSnapshot};
use finboard_core::errors::Error;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::balance_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BalanceSnapshotDB {
    pub id: String,
    pub account_id: String,
    pub current: String,
    pub available: Option<String>,
    pub credit_limit: Option<String>,
    pub recorded_at: NaiveDateTime,
}

fn parse_amount(raw: Option<String>) -> Result<Option<Decimal>, Error> {
    raw.map(|s| Decimal::from_str(&s)).transpose().map_err(Error::from)
}

impl TryFrom<BalanceSnapshotDB> for BalanceSnapshot {
    type Error = Error;

    fn try_from(db: BalanceSnapshotDB) -> Result<Self, Self::Error> {
        Ok(Self {
            current: Decimal::from_str(&db.current)?,
            available: parse_amount(db.available)?,
            limit: parse_amount(db.credit_limit)?,
            id: db.id,
            account_id: db.account_id,
            recorded_at: db.recorded_at.and_utc(),
        })
    }
}

impl From<NewBalanceSnapshot> for BalanceSnapshotDB {
    fn from(domain: NewBalanceSnapshot) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: domain.account_id,
            current: domain.current.to_string(),
            available: domain.available.map(|d| d.to_string()),
            credit_limit: domain.limit.map(|d| d.to_string()),
            recorded_at: domain.recorded_at.unwrap_or_else(Utc::now).naive_utc(),
        }
    }
}
