//! Phone record operations.

use crate::error::DatabaseError;
use crate::types::{Category, FailedImage, NumberStats};
use crate::{Error, Result};

use super::{Database, FailedRow};

impl Database {
    /// Check whether `phone` is already pending
    ///
    /// Only the pending partition is consulted: a number that already succeeded or failed
    /// may be queued again.
    pub async fn pending_exists(&self, phone: &str) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM phone_numbers WHERE phone = ? AND status = 'pending' LIMIT 1",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(found.is_some())
    }

    /// Insert phones as pending records in a single transaction
    ///
    /// Phones that are already pending are skipped by the partial unique index, so the
    /// returned count can be lower than `phones.len()` when another writer got there
    /// first. Any failure rolls back the whole batch.
    pub async fn insert_pending_batch(&self, phones: &[String]) -> Result<u64> {
        if phones.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await.map_err(|e| {
            Error::Database(DatabaseError::InsertFailed(format!(
                "Failed to begin transaction: {}",
                e
            )))
        })?;

        let mut inserted = 0u64;
        for phone in phones {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO phone_numbers (phone, status, created_at) VALUES (?, 'pending', ?)",
            )
            .bind(phone)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::InsertFailed(format!(
                    "Failed to insert {}: {}",
                    phone, e
                )))
            })?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            Error::Database(DatabaseError::InsertFailed(format!(
                "Failed to commit batch: {}",
                e
            )))
        })?;

        Ok(inserted)
    }

    /// Count records in one partition
    pub async fn count_by_category(&self, category: Category) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM phone_numbers WHERE status = ?",
        )
        .bind(category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(count as u64)
    }

    /// Count all records regardless of state
    pub async fn count_all(&self) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM phone_numbers")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Sqlx)?;

        Ok(count as u64)
    }

    /// Per-state counts
    ///
    /// Each count is its own query; no snapshot spans them.
    pub async fn stats(&self) -> Result<NumberStats> {
        Ok(NumberStats {
            total: self.count_all().await?,
            pending: self.count_by_category(Category::Pending).await?,
            success: self.count_by_category(Category::Success).await?,
            failed: self.count_by_category(Category::Failed).await?,
        })
    }

    /// Most recent failed records that carry evidence
    ///
    /// Ordered by `timestamp` descending. Records without a timestamp come after every
    /// timestamped record; ties fall back to newest `id` first.
    ///
    /// Fractional timestamps are truncated to whole seconds and non-numeric ones count as
    /// missing. Evidence is returned whatever its storage class; binary payloads that are
    /// not UTF-8 are rendered lossily.
    pub async fn recent_failures(&self, limit: u32) -> Result<Vec<FailedImage>> {
        let rows = sqlx::query_as::<_, FailedRow>(
            r#"
            SELECT id, phone, error_screenshot, outcome_at
            FROM (
                SELECT id, phone,
                    CAST(error_screenshot AS BLOB) AS error_screenshot,
                    CASE WHEN typeof(timestamp) IN ('integer', 'real')
                        THEN CAST(timestamp AS INTEGER)
                    END AS outcome_at
                FROM phone_numbers
                WHERE status = 'failed' AND error_screenshot IS NOT NULL
            )
            ORDER BY outcome_at IS NULL, outcome_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(rows.into_iter().map(FailedImage::from).collect())
    }

    /// Every phone in a partition, in insertion order
    pub async fn list_phones(&self, category: Category) -> Result<Vec<String>> {
        let phones = sqlx::query_scalar::<_, String>(
            "SELECT phone FROM phone_numbers WHERE status = ? ORDER BY id",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(phones)
    }

    /// Delete every record in every state
    ///
    /// Returns the number of records deleted.
    /// This is a destructive operation - use with caution.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM phone_numbers")
            .execute(&self.pool)
            .await
            .map_err(Error::Sqlx)?;

        Ok(result.rows_affected())
    }
}
