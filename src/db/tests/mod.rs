use crate::db::*;
use crate::types::Category;
use tempfile::NamedTempFile;


/// Open a fresh database backed by a temporary file
///
/// Keep the returned file alive for the duration of the test.
async fn open_temp_db() -> (Database, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let url = format!("sqlite:{}", temp_file.path().display());
    let db = Database::new(&url).await.unwrap();
    (db, temp_file)
}

/// Write a record the way the external dialing automation does
async fn seed_outcome(
    db: &Database,
    phone: &str,
    category: Category,
    timestamp: Option<i64>,
    screenshot: Option<&str>,
) -> i64 {
    let result = sqlx::query(
        "INSERT INTO phone_numbers (phone, status, timestamp, error_screenshot, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(phone)
    .bind(category.as_str())
    .bind(timestamp)
    .bind(screenshot)
    .bind(chrono::Utc::now().timestamp())
    .execute(db.pool())
    .await
    .unwrap();

    result.last_insert_rowid()
}
