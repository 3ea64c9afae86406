use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::model::BalanceSnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::balance_snapshots;
use crate::schema::balance_snapshots::dsl::*;
use finboard_core::balances::{BalanceRepositoryTrait, BalanceSnapshot, NewBalanceSnapshot};
use finboard_core::errors::Result;

/// Append-only store of balance snapshots.
pub struct BalanceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BalanceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn to_domain(rows: Vec<BalanceSnapshotDB>) -> Result<Vec<BalanceSnapshot>> {
    rows.into_iter().map(BalanceSnapshot::try_from).collect()
}

#[async_trait]
impl BalanceRepositoryTrait for BalanceRepository {
    async fn insert(&self, snapshot: NewBalanceSnapshot) -> Result<BalanceSnapshot> {
        snapshot.validate()?;
        let row: BalanceSnapshotDB = snapshot.into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(balance_snapshots::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                debug!("Recorded balance {} for account {}", row.current, row.account_id);
                BalanceSnapshot::try_from(row)
            })
            .await
    }

    fn get_latest_for_account(&self, target_account_id: &str) -> Result<Option<BalanceSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        balance_snapshots
            .filter(account_id.eq(target_account_id))
            .select(BalanceSnapshotDB::as_select())
            .order((recorded_at.desc(), id.desc()))
            .first::<BalanceSnapshotDB>(&mut conn)
            .optional()
            .into_core()?
            .map(BalanceSnapshot::try_from)
            .transpose()
    }

    fn get_latest_for_all_accounts(&self) -> Result<HashMap<String, BalanceSnapshot>> {
        // Ascending scan; later rows overwrite earlier ones per account.
        let latest = self
            .list_all()?
            .into_iter()
            .map(|snapshot| (snapshot.account_id.clone(), snapshot))
            .collect();
        Ok(latest)
    }

    fn list_all(&self) -> Result<Vec<BalanceSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = balance_snapshots
            .select(BalanceSnapshotDB::as_select())
            .order((recorded_at.asc(), id.asc()))
            .load::<BalanceSnapshotDB>(&mut conn)
            .into_core()?;

        to_domain(rows)
    }
}
