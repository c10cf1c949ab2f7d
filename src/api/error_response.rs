//! HTTP error response handling for the API
//!
//! This module provides conversions from domain errors to HTTP responses
//! with appropriate status codes and JSON error bodies.

use crate::error::{ApiError, Error, ToHttpStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Inline page returned when the root HTML asset is absent
pub const ASSET_MISSING_HTML: &str = "<h1>Error: index.html not found!</h1>";

/// Implement IntoResponse for Error to automatically convert errors to HTTP responses
///
/// A missing root page renders as an HTML fragment; every other error renders as the
/// JSON envelope.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if let Error::AssetMissing(_) = self {
            return (status_code, Html(ASSET_MISSING_HTML)).into_response();
        }

        let api_error: ApiError = self.into();

        (status_code, Json(api_error)).into_response()
    }
}
