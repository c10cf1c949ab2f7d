//! REST API server module
//!
//! Serves the operator page plus a small JSON API for uploading phone numbers,
//! inspecting counts and failures, exporting partitions and purging the store.

use crate::{NumberService, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Path the Swagger UI loads its document from
///
/// Kept apart from `/openapi.json` so the two routes don't collide.
const SWAGGER_SPEC_PATH: &str = "/api-docs/openapi.json";

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Numbers
/// - `POST /upload` - Add numbers from a multipart `file` field
/// - `GET /stats` - Counts per lifecycle state
/// - `GET /failed-images` - Most recent failures with evidence
/// - `GET /download/:category` - Export one state as a text attachment
/// - `DELETE /delete_all` - Remove every record
///
/// ## System
/// - `GET /` - Operator HTML page
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(service: NumberService) -> Router {
    let state = AppState::new(service);
    let config = state.config.clone();

    let router = Router::new()
        // Numbers
        .route("/upload", post(routes::upload_numbers))
        .route("/stats", get(routes::get_stats))
        .route("/failed-images", get(routes::failed_images))
        .route("/download/:category", get(routes::download_numbers))
        .route("/delete_all", delete(routes::delete_all))
        // System
        .route("/", get(routes::index_page))
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state)
    let router = if config.api.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url(SWAGGER_SPEC_PATH, ApiDoc::openapi()))
    } else {
        router
    };

    router
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.api.max_upload_bytes))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Build a CORS layer that accepts every origin, method and header with credentials
///
/// Wildcards are rejected by browsers (and by tower-http) once credentials are
/// allowed, so the request's own values are mirrored back instead.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Serve the API on an already-bound listener until `shutdown` resolves
///
/// In-flight requests are allowed to finish once `shutdown` completes; the store
/// is left open for the caller to close.
pub async fn serve<F>(listener: TcpListener, service: NumberService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(service);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

/// Start the API server on the configured bind address.
///
/// Runs until SIGTERM or SIGINT (Ctrl+C on other platforms) is received.
///
/// # Example
///
/// ```no_run
/// use phone_intake::{Config, NumberService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let service = NumberService::new(config).await?;
///
/// // Start API server (blocks until shutdown)
/// phone_intake::api::start_api_server(service.clone()).await?;
/// service.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(service: NumberService) -> Result<()> {
    let bind_address = service.config().api.bind_address;

    tracing::info!(
        address = %bind_address,
        "Starting API server"
    );

    // Bind TCP listener to the configured address
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %bind_address,
        "API server listening"
    );

    serve(listener, service, crate::shutdown_signal()).await
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
