//! Persistence contract consumed by the request handlers

use crate::error::Result;
use crate::types::{Dev, DevId};
use async_trait::async_trait;

/// Service providing access to stored developer records
///
/// Counts returned by the mutating operations are affected rows.
#[async_trait]
pub trait DevService: Send + Sync {
    /// Store a new record; its `id` is ignored and assigned by the store
    async fn insert(&self, dev: &Dev) -> Result<u64>;

    /// All stored records, newest first
    async fn select_all(&self) -> Result<Vec<Dev>>;

    /// Record by key
    async fn select_by_key(&self, id: DevId) -> Result<Option<Dev>>;

    /// Overwrite name, career, email, gender and languages of `dev.id`
    async fn update(&self, dev: &Dev) -> Result<u64>;

    /// Remove the record with the given key
    async fn delete(&self, id: DevId) -> Result<u64>;
}
