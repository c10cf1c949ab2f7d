//! Removal of every record.

use super::NumberService;
use crate::error::Result;

impl NumberService {
    /// Delete every record in every state
    ///
    /// Irreversible; returns the number of records removed.
    pub async fn purge_all(&self) -> Result<u64> {
        let deleted = self.db.delete_all().await?;
        tracing::warn!(deleted, "Purged all phone numbers");
        Ok(deleted)
    }
}
