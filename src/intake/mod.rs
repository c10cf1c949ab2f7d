//! Number intake service split into focused submodules.
//!
//! The `NumberService` struct and its methods are organized by operation:
//! - [`ingest`] - Upload parsing and deduplicated insertion
//! - [`query`] - Per-state counts and recent failure evidence
//! - [`export`] - Newline-delimited export of one partition
//! - [`purge`] - Removal of every record
//! - [`lifecycle`] - Startup and shutdown of the store handle

mod export;
mod ingest;
mod lifecycle;
mod purge;
mod query;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

pub use export::ExportFile;
pub use ingest::parse_candidates;

use crate::config::Config;
use crate::db::Database;
use std::sync::Arc;

/// Main service instance (cloneable - all fields are Arc-wrapped)
///
/// Every operation goes straight to the store; the service keeps no state of its own
/// and takes no locks across requests.
#[derive(Clone)]
pub struct NumberService {
    /// Database instance for persistence (shared by every request handler)
    /// Public for integration tests to seed and inspect records
    pub db: Arc<Database>,
    /// Configuration (wrapped in Arc for sharing across handlers)
    pub(crate) config: Arc<Config>,
}
