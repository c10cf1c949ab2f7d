//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`numbers`] - Upload, counts, failure evidence, export and purge
//! - [`system`] - Root page, health, OpenAPI

use serde::{Deserialize, Serialize};

mod numbers;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use numbers::*;
pub use system::*;

// ============================================================================
// Response Types (shared across handlers)
// ============================================================================

/// Response for POST /upload
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    /// Always `"success"`
    pub status: String,
    /// Human-readable summary, e.g. "3 new numbers added!"
    pub message: String,
    /// Number of records created by this upload
    pub added_count: u64,
}

impl UploadResponse {
    /// Build the success body for `added_count` new numbers
    pub fn new(added_count: u64) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("{} new numbers added!", added_count),
            added_count,
        }
    }
}

/// Response for DELETE /delete_all
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DeleteAllResponse {
    /// Always `"success"`
    pub status: String,
    /// Number of records removed
    pub deleted_count: u64,
}

/// Response for GET /failed-images
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct FailedImagesResponse {
    /// Most recent failures first
    pub images: Vec<crate::types::FailedImage>,
}
