//! System handlers: root page, health, OpenAPI.

use crate::api::AppState;
use crate::error::Error;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

/// GET / - Serve the operator page
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "HTML page", body = String, content_type = "text/html"),
        (status = 404, description = "Page file is absent", body = String, content_type = "text/html")
    )
)]
pub async fn index_page(State(state): State<AppState>) -> Response {
    let path = &state.config.api.index_path;

    match tokio::fs::read_to_string(path).await {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Index page not found");
            Error::AssetMissing(path.display().to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read index page");
            Error::Io(e).into_response()
        }
    }
}

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
