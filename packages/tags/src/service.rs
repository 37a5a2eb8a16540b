// ABOUTME: Tag service used by the quote workflows
// ABOUTME: Runs reconciliation inside a store transaction and prunes orphaned tags

use sqlx::SqlitePool;
use tracing::debug;

use crate::color::{ColorGenerator, RandomColor};
use crate::error::Result;
use crate::reconcile::reconcile_tags;
use crate::sqlite::SqliteTagStore;
use crate::store::TagStore;
use crate::types::{DeleteSummary, Tag, TagId};

pub struct TagService<S = SqliteTagStore, G = RandomColor> {
    store: S,
    generator: G,
}

impl TagService {
    /// SQLite-backed service with the default random color generator
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(SqliteTagStore::new(pool), RandomColor::new())
    }
}

impl<S, G> TagService<S, G>
where
    S: TagStore,
    G: ColorGenerator,
{
    pub fn new(store: S, generator: G) -> Self {
        Self { store, generator }
    }

    /// Ensure a tag exists for every name and return their ids.
    ///
    /// Ids of tags that already existed come first, followed by the ids of
    /// tags created by this call. Runs in one transaction: either every
    /// missing tag is created or none is.
    pub async fn upsert_tags(&self, names: &[String]) -> Result<Vec<TagId>> {
        debug!("Upserting {} tag name(s)", names.len());

        let mut scope = self.store.begin().await?;

        let outcome = reconcile_tags(&mut scope, names, &self.generator).await;

        match outcome {
            Ok(tag_ids) => {
                self.store.commit(scope).await?;
                Ok(tag_ids)
            }
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback(scope).await {
                    debug!("Rollback after failed upsert also failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Delete the tags in `ids` that are no longer attached to any quote.
    pub async fn delete_orphaned_tags(&self, ids: &[TagId]) -> Result<DeleteSummary> {
        let count = self.store.delete_orphaned(ids).await?;
        Ok(DeleteSummary { count })
    }

    pub async fn get_tags(&self, ids: &[TagId]) -> Result<Vec<Tag>> {
        self.store.find_by_ids(ids).await
    }
}
