//! Configuration types for phone-intake
//!
//! Configuration is read from the process environment (optionally seeded from a `.env`
//! file). The store connection string has no default: startup fails without it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf};

/// Environment variable holding the sqlx SQLite connection URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable overriding the HTTP bind address
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";
/// Environment variable overriding the path of the root HTML page
pub const ENV_INDEX_HTML_PATH: &str = "INDEX_HTML_PATH";
/// Environment variable toggling the Swagger UI
pub const ENV_SWAGGER_UI: &str = "SWAGGER_UI";
/// Environment variable overriding how many failures `/failed-images` returns
pub const ENV_FAILED_IMAGES_LIMIT: &str = "FAILED_IMAGES_LIMIT";
/// Environment variable overriding the request body limit for uploads
pub const ENV_MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Path of the HTML page served at `/` (default: "index.html")
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,

    /// Maximum number of entries returned by `/failed-images` (default: 10)
    #[serde(default = "default_failed_images_limit")]
    pub failed_images_limit: u32,

    /// Maximum accepted request body size in bytes (default: 50 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            index_path: default_index_path(),
            swagger_ui: true,
            failed_images_limit: default_failed_images_limit(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Main configuration for the intake service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// sqlx SQLite connection URL, e.g. `sqlite:numbers.db` (required, no default)
    ///
    /// The file must already exist unless the URL carries `?mode=rwc`.
    pub database_url: String,

    /// API settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Create a configuration for the given store URL with default API settings
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            api: ApiConfig::default(),
        }
    }

    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if present; variables
    /// already set in the environment take precedence.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get(ENV_DATABASE_URL).ok_or_else(|| Error::Config {
            message: format!("{} must be set", ENV_DATABASE_URL),
            key: Some(ENV_DATABASE_URL.to_string()),
        })?;

        let mut api = ApiConfig::default();

        if let Some(raw) = get(ENV_BIND_ADDRESS) {
            api.bind_address = raw.trim().parse().map_err(|e| Error::Config {
                message: format!("invalid bind address '{}': {}", raw, e),
                key: Some(ENV_BIND_ADDRESS.to_string()),
            })?;
        }

        if let Some(raw) = get(ENV_INDEX_HTML_PATH) {
            api.index_path = PathBuf::from(raw);
        }

        if let Some(raw) = get(ENV_SWAGGER_UI) {
            api.swagger_ui = parse_bool(&raw).ok_or_else(|| Error::Config {
                message: format!("invalid boolean '{}'", raw),
                key: Some(ENV_SWAGGER_UI.to_string()),
            })?;
        }

        if let Some(raw) = get(ENV_FAILED_IMAGES_LIMIT) {
            api.failed_images_limit = raw.trim().parse().map_err(|e| Error::Config {
                message: format!("invalid limit '{}': {}", raw, e),
                key: Some(ENV_FAILED_IMAGES_LIMIT.to_string()),
            })?;
        }

        if let Some(raw) = get(ENV_MAX_UPLOAD_BYTES) {
            api.max_upload_bytes = raw.trim().parse().map_err(|e| Error::Config {
                message: format!("invalid byte count '{}': {}", raw, e),
                key: Some(ENV_MAX_UPLOAD_BYTES.to_string()),
            })?;
        }

        Ok(Self { database_url, api })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_failed_images_limit() -> u32 {
    10
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_true() -> bool {
    true
}
