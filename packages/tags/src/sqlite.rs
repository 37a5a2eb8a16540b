// ABOUTME: SQLite implementation of the tag store
// ABOUTME: Builds chunked, parameterized IN-list queries and bulk inserts with sqlx::QueryBuilder

use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::Result;
use crate::store::{TagScope, TagStore};
use crate::types::{NewTag, Tag, TagId, TagRef};

/// Bound parameters per statement. SQLite builds before 3.32 cap host
/// parameters at 999.
const MAX_BIND_PARAMS: usize = 999;

/// Storage layer for tags
#[derive(Clone)]
pub struct SqliteTagStore {
    pool: SqlitePool,
}

impl SqliteTagStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// An open SQLite transaction. Dropping it without committing rolls back.
pub struct SqliteTagScope {
    tx: Transaction<'static, Sqlite>,
}

/// Unique values in first-seen order, so one row never matches twice across chunks.
fn distinct<T: Eq + Hash>(values: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    values.iter().filter(|value| seen.insert(*value)).collect()
}

/// Append `(?, ?, ...)` binding every value.
fn push_in_list<'args, T>(builder: &mut QueryBuilder<'args, Sqlite>, values: &'args [T])
where
    T: sqlx::Encode<'args, Sqlite> + sqlx::Type<Sqlite> + Sync,
{
    builder.push("(");
    let mut separated = builder.separated(", ");
    for value in values {
        separated.push_bind(value);
    }
    separated.push_unseparated(")");
}

#[async_trait]
impl TagScope for SqliteTagScope {
    async fn find_by_names(&mut self, names: &[String]) -> Result<Vec<TagRef>> {
        let names = distinct(names);
        let mut tags = Vec::new();

        for chunk in names.chunks(MAX_BIND_PARAMS) {
            let mut builder = QueryBuilder::new("SELECT id, name FROM tags WHERE name IN ");
            push_in_list(&mut builder, chunk);

            let rows = builder
                .build_query_as::<TagRef>()
                .fetch_all(&mut *self.tx)
                .await?;
            tags.extend(rows);
        }

        tags.sort_by_key(|tag| tag.id);
        Ok(tags)
    }

    async fn insert_many(&mut self, tags: &[NewTag]) -> Result<u64> {
        let mut inserted = 0;

        for chunk in tags.chunks(MAX_BIND_PARAMS / 2) {
            let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO tags (name, color) ");
            builder.push_values(chunk, |mut row, tag| {
                row.push_bind(&tag.name).push_bind(&tag.color);
            });

            let result = builder.build().execute(&mut *self.tx).await?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    async fn find_ids_by_names_excluding(
        &mut self,
        names: &[String],
        exclude_ids: &[TagId],
    ) -> Result<Vec<TagId>> {
        let names = distinct(names);
        let excluded: HashSet<TagId> = exclude_ids.iter().copied().collect();
        let mut ids = Vec::new();

        // The exclusion list can be as long as the name list, so it is applied
        // here rather than as a second bound IN list.
        for chunk in names.chunks(MAX_BIND_PARAMS) {
            let mut builder = QueryBuilder::new("SELECT id FROM tags WHERE name IN ");
            push_in_list(&mut builder, chunk);

            let rows = builder
                .build_query_scalar::<TagId>()
                .fetch_all(&mut *self.tx)
                .await?;
            ids.extend(rows.into_iter().filter(|id| !excluded.contains(id)));
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[async_trait]
impl TagStore for SqliteTagStore {
    type Scope = SqliteTagScope;

    async fn begin(&self) -> Result<SqliteTagScope> {
        let tx = self.pool.begin().await?;
        Ok(SqliteTagScope { tx })
    }

    async fn commit(&self, scope: SqliteTagScope) -> Result<()> {
        scope.tx.commit().await?;
        Ok(())
    }

    async fn rollback(&self, scope: SqliteTagScope) -> Result<()> {
        scope.tx.rollback().await?;
        Ok(())
    }

    async fn delete_orphaned(&self, ids: &[TagId]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let ids = distinct(ids);
        let mut deleted = 0;

        // Chunks share one transaction so the prune stays all-or-nothing
        let mut tx = self.pool.begin().await?;
        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let mut builder = QueryBuilder::new("DELETE FROM tags WHERE id IN ");
            push_in_list(&mut builder, chunk);
            builder.push(" AND NOT EXISTS (SELECT 1 FROM quote_tags WHERE quote_tags.tag_id = tags.id)");

            let result = builder.build().execute(&mut *tx).await?;
            deleted += result.rows_affected();
        }
        tx.commit().await?;

        debug!(
            "Pruned {} orphaned tag(s) of {} candidate(s)",
            deleted,
            ids.len()
        );

        Ok(deleted)
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>> {
        let ids = distinct(ids);
        let mut tags = Vec::new();

        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let mut builder = QueryBuilder::new("SELECT id, name, color FROM tags WHERE id IN ");
            push_in_list(&mut builder, chunk);

            let rows = builder
                .build_query_as::<Tag>()
                .fetch_all(&self.pool)
                .await?;
            tags.extend(rows);
        }

        tags.sort_by_key(|tag| tag.id);
        Ok(tags)
    }
}
