//! # phone-intake
//!
//! Intake and triage service for phone numbers worked by an external dialing automation.
//!
//! Operators upload newline-delimited files of numbers; each new number becomes a
//! *pending* record. The automation (outside this crate) moves records to *success* or
//! *failed*, optionally attaching a screenshot as evidence. The service reports counts,
//! shows recent failures, exports each state as a text file and can purge the store.
//!
//! ## Quick Start
//!
//! ```no_run
//! use phone_intake::{Config, NumberService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::new("sqlite:numbers.db");
//!     config.api.bind_address = "127.0.0.1:8000".parse()?;
//!
//!     let service = NumberService::new(config).await?;
//!     let added = service.ingest(b"555-0100\n555-0101\n".to_vec()).await?;
//!     println!("{} new numbers added", added);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// Number intake service (decomposed into focused submodules)
pub mod intake;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config};
pub use db::Database;
pub use error::{ApiError, DatabaseError, Error, Result, ToHttpStatus};
pub use intake::{ExportFile, NumberService};
pub use types::{Category, FailedImage, NumberStats, RecordId};

/// Run the service until a termination signal arrives.
///
/// Connects the store, serves the API on the configured address, and closes the
/// store once the server has drained.
///
/// Stops on SIGTERM or Ctrl+C (SIGTERM only on unix).
///
/// # Example
///
/// ```no_run
/// use phone_intake::{Config, run};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     run(config).await?;
///     Ok(())
/// }
/// ```
pub async fn run(config: Config) -> Result<()> {
    let service = NumberService::new(config).await?;

    let result = api::start_api_server(service.clone()).await;
    service.shutdown().await;

    result
}

/// Resolve once the process is asked to stop
///
/// Ctrl+C (SIGINT) everywhere, plus SIGTERM on unix. A listener that cannot be
/// registered is logged and never fires, so the other one still applies.
pub(crate) async fn shutdown_signal() {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received SIGINT, shutting down"),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}
