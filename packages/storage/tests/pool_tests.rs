// ABOUTME: Integration tests for pool construction and schema migrations
// ABOUTME: Verifies file and in-memory databases come up with the tags schema

use quotes_storage::{open_memory_pool, open_pool, run_migrations, StorageConfig, StorageError};
use sqlx::Row;
use tempfile::TempDir;

async fn table_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.get::<String, _>("name"))
        .collect()
}

#[tokio::test]
async fn test_open_pool_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("quotes.db");
    let config = StorageConfig::at(&db_path);

    let pool = open_pool(&config).await.unwrap();

    assert!(db_path.exists());
    let tables = table_names(&pool).await;
    assert!(tables.contains(&"tags".to_string()));
    assert!(tables.contains(&"quotes".to_string()));
    assert!(tables.contains(&"quote_tags".to_string()));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = open_memory_pool().await.unwrap();

    // Second run is a no-op
    run_migrations(&pool).await.unwrap();

    let tables = table_names(&pool).await;
    assert!(tables.contains(&"tags".to_string()));
}

#[tokio::test]
async fn test_tag_names_are_unique() {
    let pool = open_memory_pool().await.unwrap();

    sqlx::query("INSERT INTO tags (name, color) VALUES ('wisdom', '#ffffff')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO tags (name, color) VALUES ('wisdom', '#000000')")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)
        .unwrap_err();

    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_foreign_keys_are_enforced() {
    let pool = open_memory_pool().await.unwrap();

    let result = sqlx::query("INSERT INTO quote_tags (quote_id, tag_id) VALUES (41, 42)")
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_reopening_file_database_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig::at(temp_dir.path().join("quotes.db"));

    {
        let pool = open_pool(&config).await.unwrap();
        sqlx::query("INSERT INTO tags (name, color) VALUES ('humor', '#abcdef')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;
    }

    let pool = open_pool(&config).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
