// ABOUTME: Tag type definitions
// ABOUTME: Rows, projections, and insert records used by the tag store

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned tag identifier
pub type TagId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

/// Id and name of an existing tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TagRef {
    pub id: TagId,
    pub name: String,
}

/// A tag waiting to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub color: String,
}

/// Result of an orphan prune
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSummary {
    pub count: u64,
}
