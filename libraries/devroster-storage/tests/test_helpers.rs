//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so migrations and constraints run the same way they do in production.

#![allow(dead_code)]

use devroster_core::types::{Dev, Gender};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = devroster_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        devroster_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: an unsaved developer
pub fn sample_dev(name: &str) -> Dev {
    Dev::new(
        name,
        5,
        format!("{}@example.com", name.to_lowercase()),
        Some(Gender::Male),
        vec!["Java".to_string(), "Rust".to_string()],
    )
}
