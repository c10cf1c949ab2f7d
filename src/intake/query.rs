//! Per-state counts and recent failure evidence.

use super::NumberService;
use crate::error::Result;
use crate::types::{FailedImage, NumberStats};

impl NumberService {
    /// Record counts per lifecycle state
    pub async fn stats(&self) -> Result<NumberStats> {
        self.db.stats().await
    }

    /// Most recent failed records that carry evidence, at most `limit` of them
    pub async fn recent_failures(&self, limit: u32) -> Result<Vec<FailedImage>> {
        self.db.recent_failures(limit).await
    }
}
