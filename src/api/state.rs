//! Application state for the API server

use crate::{Config, NumberService};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the service instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The intake service, holding the shared store handle
    pub service: NumberService,

    /// Configuration (read-only)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: NumberService) -> Self {
        let config = service.config().clone();
        Self { service, config }
    }
}
