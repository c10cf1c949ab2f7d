//! Phone number handlers: upload, counts, failure evidence, export, purge.

use super::{DeleteAllResponse, FailedImagesResponse, UploadResponse};
use crate::api::AppState;
use crate::error::Error;
use crate::types::Category;
use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Multipart field carrying the uploaded file
const UPLOAD_FIELD: &str = "file";

/// POST /upload - Add phone numbers from a text file
#[utoipa::path(
    post,
    path = "/upload",
    tag = "numbers",
    request_body(content = Vec<u8>, description = "Newline-delimited phone numbers in the 'file' field (multipart/form-data)", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Numbers ingested", body = UploadResponse),
        (status = 400, description = "Missing or unreadable file field", body = crate::error::ApiError),
        (status = 500, description = "Upload could not be decoded or stored", body = crate::error::ApiError)
    )
)]
pub async fn upload_numbers(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    // Only the first `file` part is ingested; the rest of the body is left unread
    let content = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(UPLOAD_FIELD) => match field.bytes().await {
                Ok(bytes) => break bytes.to_vec(),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read upload field");
                    return Error::Multipart(e.to_string()).into_response();
                }
            },
            Ok(Some(_)) => continue,
            Ok(None) => return Error::MissingFile.into_response(),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed multipart body");
                return Error::Multipart(e.to_string()).into_response();
            }
        }
    };

    match state.service.ingest(content).await {
        Ok(added) => (StatusCode::OK, Json(UploadResponse::new(added))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to ingest upload");
            e.into_response()
        }
    }
}

/// GET /stats - Record counts per state
#[utoipa::path(
    get,
    path = "/stats",
    tag = "numbers",
    responses(
        (status = 200, description = "Counts per lifecycle state", body = crate::types::NumberStats),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Response {
    match state.service.stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to count numbers");
            e.into_response()
        }
    }
}

/// GET /failed-images - Most recent failures with evidence
#[utoipa::path(
    get,
    path = "/failed-images",
    tag = "numbers",
    responses(
        (status = 200, description = "Most recent failed numbers carrying a screenshot", body = FailedImagesResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn failed_images(State(state): State<AppState>) -> Response {
    let limit = state.config.api.failed_images_limit;

    match state.service.recent_failures(limit).await {
        Ok(images) => (StatusCode::OK, Json(FailedImagesResponse { images })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, limit, "Failed to load failed images");
            e.into_response()
        }
    }
}

/// GET /download/:category - Export one state as a text attachment
#[utoipa::path(
    get,
    path = "/download/{category}",
    tag = "numbers",
    params(
        ("category" = String, Path, description = "One of pending, success, failed")
    ),
    responses(
        (status = 200, description = "Newline-delimited numbers", body = String, content_type = "text/plain"),
        (status = 400, description = "Unknown category", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn download_numbers(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Response {
    let category: Category = match category.parse() {
        Ok(category) => category,
        Err(e) => return e.into_response(),
    };

    match state.service.export(category).await {
        Ok(file) => {
            let disposition = format!("attachment; filename=\"{}\"", file.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %category, "Failed to export numbers");
            e.into_response()
        }
    }
}

/// DELETE /delete_all - Remove every record
#[utoipa::path(
    delete,
    path = "/delete_all",
    tag = "numbers",
    responses(
        (status = 200, description = "All records removed", body = DeleteAllResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn delete_all(State(state): State<AppState>) -> Response {
    match state.service.purge_all().await {
        Ok(deleted_count) => (
            StatusCode::OK,
            Json(DeleteAllResponse {
                status: "success".to_string(),
                deleted_count,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete numbers");
            e.into_response()
        }
    }
}
