use crate::devs;
use async_trait::async_trait;
use devroster_core::{
    error::Result,
    types::{Dev, DevId},
    DevService,
};
use sqlx::SqlitePool;

/// `DevService` backed by a local `SQLite` database
#[derive(Clone)]
pub struct SqliteDevService {
    pool: SqlitePool,
}

impl SqliteDevService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `database_url` and migrate it
    pub async fn connect(database_url: &str) -> std::result::Result<Self, crate::StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DevService for SqliteDevService {
    async fn insert(&self, dev: &Dev) -> Result<u64> {
        Ok(devs::insert(&self.pool, dev).await?)
    }

    async fn select_all(&self) -> Result<Vec<Dev>> {
        Ok(devs::get_all(&self.pool).await?)
    }

    async fn select_by_key(&self, id: DevId) -> Result<Option<Dev>> {
        Ok(devs::get_by_id(&self.pool, id).await?)
    }

    async fn update(&self, dev: &Dev) -> Result<u64> {
        Ok(devs::update(&self.pool, dev).await?)
    }

    async fn delete(&self, id: DevId) -> Result<u64> {
        Ok(devs::delete(&self.pool, id).await?)
    }
}
