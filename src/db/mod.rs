//! Database layer for phone-intake
//!
//! Handles SQLite persistence for phone records. All records live in a single
//! `phone_numbers` table; the `status` column partitions them into pending, success
//! and failed.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] - Database lifecycle, schema migrations
//! - [`numbers`] - Phone record inserts, counts, listings and purge

use crate::types::{FailedImage, RecordId, format_clock_time};
use sqlx::{FromRow, sqlite::SqlitePool};

mod migrations;
mod numbers;

/// Failed record carrying evidence, raw from SQLite
///
/// `timestamp` and `error_screenshot` are written by the external automation without
/// type enforcement, so the query normalizes them before they reach this struct.
#[derive(Debug, Clone, FromRow)]
pub struct FailedRow {
    /// Unique database ID
    pub id: i64,
    /// Phone number as submitted
    pub phone: String,
    /// Opaque evidence payload, read as raw bytes whatever its storage class
    pub error_screenshot: Vec<u8>,
    /// Unix timestamp the failure was recorded; NULL unless stored as a number
    pub outcome_at: Option<i64>,
}

impl From<FailedRow> for FailedImage {
    fn from(row: FailedRow) -> Self {
        let image = String::from_utf8(row.error_screenshot)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        FailedImage {
            id: RecordId(row.id),
            phone: row.phone,
            image,
            timestamp: format_clock_time(row.outcome_at),
        }
    }
}

/// Database handle for phone-intake
pub struct Database {
    pool: SqlitePool,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
