use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::LinkItemDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::link_items;
use crate::schema::link_items::dsl::*;
use finboard_core::errors::Result;
use finboard_core::items::{LinkItem, LinkItemRepositoryTrait, NewLinkItem};

pub struct LinkItemRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LinkItemRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LinkItemRepositoryTrait for LinkItemRepository {
    async fn create(&self, new_item: NewLinkItem) -> Result<LinkItem> {
        new_item.validate()?;
        let item_db: LinkItemDB = new_item.into();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(link_items::table)
                    .values(&item_db)
                    .execute(conn)
                    .into_core()?;
                Ok(item_db.into())
            })
            .await
    }

    fn get_by_id(&self, target_id: &str) -> Result<LinkItem> {
        let mut conn = get_connection(&self.pool)?;

        let item = link_items
            .select(LinkItemDB::as_select())
            .find(target_id)
            .first::<LinkItemDB>(&mut conn)
            .into_core()?;

        Ok(item.into())
    }

    fn list(&self) -> Result<Vec<LinkItem>> {
        let mut conn = get_connection(&self.pool)?;

        let results = link_items
            .select(LinkItemDB::as_select())
            .order((created_at.asc(), id.asc()))
            .load::<LinkItemDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(LinkItem::from).collect())
    }
}
