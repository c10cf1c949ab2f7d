//! Shared fixtures for service and API tests.

use super::NumberService;
use crate::config::Config;
use crate::types::Category;
use tempfile::tempdir;

/// Helper to create a NumberService backed by a temporary database
///
/// Keep the returned directory alive for the duration of the test.
pub(crate) async fn create_test_service() -> (NumberService, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let mut config = Config::new(format!("sqlite:{}?mode=rwc", db_path.display()));
    config.api.index_path = temp_dir.path().join("index.html");

    let service = NumberService::new(config).await.unwrap();
    (service, temp_dir)
}

/// Write a record the way the external dialing automation does
pub(crate) async fn seed_outcome(
    service: &NumberService,
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
    .execute(service.db.pool())
    .await
    .unwrap();

    result.last_insert_rowid()
}
