//! Developer records: queries against the `dev` table

use crate::StorageError;
use chrono::{DateTime, Utc};
use devroster_core::types::{Dev, DevId, Gender};
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;

type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, sqlx::FromRow)]
struct DevRow {
    no: i64,
    name: String,
    career: i64,
    email: String,
    gender: Option<String>,
    lang: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DevRow> for Dev {
    type Error = StorageError;

    fn try_from(row: DevRow) -> Result<Self> {
        let career = u32::try_from(row.career)
            .map_err(|_| StorageError::corrupt(row.no, format!("career {}", row.career)))?;
        let gender = row
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()
            .map_err(|e| StorageError::corrupt(row.no, e.to_string()))?;
        let languages: Vec<String> = serde_json::from_str(&row.lang)?;

        Ok(Dev {
            id: row.no,
            name: row.name,
            career,
            email: row.email,
            gender,
            languages,
            created_at: row.created_at,
        })
    }
}

async fn insert_row(pool: &SqlitePool, dev: &Dev) -> Result<SqliteQueryResult> {
    let lang = serde_json::to_string(&dev.languages)?;

    let result = sqlx::query(
        "INSERT INTO dev (name, career, email, gender, lang, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&dev.name)
    .bind(i64::from(dev.career))
    .bind(&dev.email)
    .bind(dev.gender.map(|g| g.as_str()))
    .bind(lang)
    .bind(dev.created_at)
    .execute(pool)
    .await?;

    Ok(result)
}

/// Insert a record, returning the affected row count
///
/// The record's own `id` is ignored; the table assigns the key.
pub async fn insert(pool: &SqlitePool, dev: &Dev) -> Result<u64> {
    Ok(insert_row(pool, dev).await?.rows_affected())
}

/// Insert a record and return it with its assigned key
pub async fn create(pool: &SqlitePool, dev: &Dev) -> Result<Dev> {
    let result = insert_row(pool, dev).await?;

    Ok(Dev {
        id: result.last_insert_rowid(),
        ..dev.clone()
    })
}

/// All records, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Dev>> {
    let rows: Vec<DevRow> = sqlx::query_as(
        "SELECT no, name, career, email, gender, lang, created_at
         FROM dev ORDER BY no DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Dev::try_from).collect()
}

/// Get a record by key
pub async fn get_by_id(pool: &SqlitePool, id: DevId) -> Result<Option<Dev>> {
    let row: Option<DevRow> = sqlx::query_as(
        "SELECT no, name, career, email, gender, lang, created_at
         FROM dev WHERE no = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Dev::try_from).transpose()
}

/// Overwrite the editable fields of `dev.id`; `created_at` is left alone
pub async fn update(pool: &SqlitePool, dev: &Dev) -> Result<u64> {
    let lang = serde_json::to_string(&dev.languages)?;

    let result = sqlx::query(
        "UPDATE dev SET name = ?, career = ?, email = ?, gender = ?, lang = ?
         WHERE no = ?",
    )
    .bind(&dev.name)
    .bind(i64::from(dev.career))
    .bind(&dev.email)
    .bind(dev.gender.map(|g| g.as_str()))
    .bind(lang)
    .bind(dev.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a record by key
pub async fn delete(pool: &SqlitePool, id: DevId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM dev WHERE no = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
