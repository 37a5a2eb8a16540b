// ABOUTME: Store abstractions used by the tag service
// ABOUTME: A transaction scope for reconciliation plus the store that opens and closes it

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewTag, Tag, TagId, TagRef};

/// Operations available inside one open transaction.
///
/// Nothing done through a scope is visible to other connections until the
/// owning [`TagStore`] commits it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagScope: Send {
    /// Existing tags whose name is in `names`
    async fn find_by_names(&mut self, names: &[String]) -> Result<Vec<TagRef>>;

    /// Insert every record, returning the number of rows written
    async fn insert_many(&mut self, tags: &[NewTag]) -> Result<u64>;

    /// Ids of tags whose name is in `names` and whose id is not in `exclude_ids`
    async fn find_ids_by_names_excluding(
        &mut self,
        names: &[String],
        exclude_ids: &[TagId],
    ) -> Result<Vec<TagId>>;
}

#[async_trait]
pub trait TagStore: Send + Sync {
    type Scope: TagScope;

    async fn begin(&self) -> Result<Self::Scope>;

    async fn commit(&self, scope: Self::Scope) -> Result<()>;

    async fn rollback(&self, scope: Self::Scope) -> Result<()>;

    /// Delete tags in `ids` that no quote references. Single statement.
    async fn delete_orphaned(&self, ids: &[TagId]) -> Result<u64>;

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>>;
}
