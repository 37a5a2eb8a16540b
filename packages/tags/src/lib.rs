// ABOUTME: Tag management for quotes
// ABOUTME: Reconciles tag names into ids inside one transaction and prunes orphaned tags

pub mod color;
pub mod error;
pub mod reconcile;
pub mod service;
pub mod sqlite;
pub mod store;
pub mod types;

// Re-export main types
pub use color::{ColorGenerator, ColorOptions, GeneratorError, Luminosity, RandomColor};
pub use error::{Result, TagError};
pub use reconcile::reconcile_tags;
pub use service::TagService;
pub use sqlite::{SqliteTagScope, SqliteTagStore};
pub use store::{TagScope, TagStore};
pub use types::{DeleteSummary, NewTag, Tag, TagId, TagRef};
