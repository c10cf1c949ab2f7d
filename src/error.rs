//! Error types for phone-intake
//!
//! This module provides error handling for the service, including:
//! - Domain-specific error types (store, upload, configuration)
//! - HTTP status code mapping for API integration
//! - The uniform `{status, message, code}` JSON error envelope

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for phone-intake operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for phone-intake
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The environment variable that caused the error (e.g., "DATABASE_URL")
        key: Option<String>,
    },

    /// Store operation failed (connection, migration, query)
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Uploaded file is not valid UTF-8
    #[error("uploaded file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Unrecognized export category
    #[error("invalid category '{0}': expected one of pending, success, failed")]
    InvalidCategory(String),

    /// Upload request did not carry a `file` field
    #[error("no file provided in 'file' field")]
    MissingFile,

    /// Multipart body could not be read
    #[error("failed to read upload: {0}")]
    Multipart(String),

    /// Root HTML page is absent
    #[error("asset not found: {0}")]
    AssetMissing(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to run migrations
    #[error("failed to run migrations: {0}")]
    MigrationFailed(String),

    /// Query failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Batch insert failed
    #[error("insert failed: {0}")]
    InsertFailed(String),
}

/// API error response format
///
/// Every failing JSON endpoint answers with this envelope.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "status": "error",
///   "message": "invalid category 'bogus': expected one of pending, success, failed",
///   "code": "invalid_category"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Always `"error"`
    pub status: String,

    /// Human-readable error message
    pub message: String,

    /// Machine-readable error code (e.g., "database_error", "invalid_category")
    pub code: String,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error
            Error::InvalidCategory(_) => 400,
            Error::MissingFile => 400,
            Error::Multipart(_) => 400,

            // 404 Not Found
            Error::AssetMissing(_) => 404,

            // 500 Internal Server Error - everything else, including undecodable uploads
            Error::Config { .. } => 500,
            Error::Database(_) => 500,
            Error::Sqlx(_) => 500,
            Error::Decode(_) => 500,
            Error::Io(_) => 500,
            Error::ApiServerError(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Database(DatabaseError::InsertFailed(_)) => "insert_error",
            Error::Database(_) => "database_error",
            Error::Sqlx(_) => "database_error",
            Error::Decode(_) => "decode_error",
            Error::InvalidCategory(_) => "invalid_category",
            Error::MissingFile => "missing_file",
            Error::Multipart(_) => "invalid_upload",
            Error::AssetMissing(_) => "asset_missing",
            Error::Io(_) => "io_error",
            Error::ApiServerError(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::new(error.error_code(), error.to_string())
    }
}
