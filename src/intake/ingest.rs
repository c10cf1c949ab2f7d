//! Upload parsing and deduplicated insertion.

use super::NumberService;
use crate::error::Result;
use std::collections::HashSet;

/// Split uploaded text into candidate phone numbers
///
/// Each line is trimmed; blank and whitespace-only lines are dropped. No other
/// normalization is applied, so `+1 555` and `1555` are distinct numbers.
pub fn parse_candidates(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

impl NumberService {
    /// Ingest an uploaded file of newline-delimited phone numbers
    ///
    /// Numbers already pending, and repeats within the same upload, are skipped. All new
    /// numbers are written in one transaction; on failure nothing from this upload is kept.
    ///
    /// Returns how many numbers were added.
    pub async fn ingest(&self, content: Vec<u8>) -> Result<u64> {
        let text = String::from_utf8(content)?;
        let candidates = parse_candidates(&text);

        let mut seen: HashSet<&str> = HashSet::with_capacity(candidates.len());
        let mut staged: Vec<String> = Vec::new();

        for phone in candidates {
            if !seen.insert(phone) {
                continue;
            }
            if self.db.pending_exists(phone).await? {
                continue;
            }
            staged.push(phone.to_string());
        }

        let added = self.db.insert_pending_batch(&staged).await?;

        tracing::info!(
            unique = seen.len(),
            staged = staged.len(),
            added,
            "Ingested phone numbers"
        );

        Ok(added)
    }
}
