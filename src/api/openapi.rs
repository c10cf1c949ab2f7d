//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the phone-intake REST API
//! using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the phone-intake REST API
///
/// The document can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "phone-intake REST API",
        version = "0.1.0",
        description = "Intake and triage of phone numbers for an external dialing automation",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Numbers
        crate::api::routes::upload_numbers,
        crate::api::routes::get_stats,
        crate::api::routes::failed_images,
        crate::api::routes::download_numbers,
        crate::api::routes::delete_all,

        // System
        crate::api::routes::index_page,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::RecordId,
        crate::types::Category,
        crate::types::NumberStats,
        crate::types::FailedImage,

        // API response types from routes
        crate::api::routes::UploadResponse,
        crate::api::routes::DeleteAllResponse,
        crate::api::routes::FailedImagesResponse,

        // Error types from error.rs
        crate::error::ApiError,
    )),
    tags(
        (name = "numbers", description = "Phone numbers - Upload, count, inspect failures, export and purge"),
        (name = "system", description = "System endpoints - Root page, health check, OpenAPI spec"),
    )
)]
pub struct ApiDoc;
