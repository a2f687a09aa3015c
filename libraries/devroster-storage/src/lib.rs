//! Devroster Storage
//!
//! `SQLite` persistence for developer records.
//!
//! The `devs` slice owns its queries; [`SqliteDevService`] wraps a pool and
//! exposes them through the [`devroster_core::DevService`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use devroster_storage::{create_pool, run_migrations, SqliteDevService};
//! use devroster_core::DevService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://devroster.db").await?;
//! run_migrations(&pool).await?;
//!
//! let service = SqliteDevService::new(pool);
//! let devs = service.select_all().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod devs;

pub use context::SqliteDevService;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to a service.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://devroster.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // SQLite creates the file but not its directory
    let filename = options.get_filename();
    if filename != std::path::Path::new(":memory:") {
        if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
