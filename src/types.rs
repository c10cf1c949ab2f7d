//! Core types for phone-intake

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::Error;

/// Unique identifier for a phone record
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a phone record
///
/// Records are created as [`Category::Pending`]; the external dialing automation moves
/// them to [`Category::Success`] or [`Category::Failed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Accepted, not yet attempted
    Pending,
    /// Attempted successfully
    Success,
    /// Attempted and failed
    Failed,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 3] = [Category::Pending, Category::Success, Category::Failed];

    /// Value stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pending => "pending",
            Category::Success => "success",
            Category::Failed => "failed",
        }
    }

    /// File name used for the export attachment
    pub fn export_file_name(&self) -> String {
        format!("{}_numbers.txt", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Category::Pending),
            "success" => Ok(Category::Success),
            "failed" => Ok(Category::Failed),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

/// Per-state record counts
///
/// Each count is an independent query; under concurrent writes `total` may not equal the
/// sum of the other three.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NumberStats {
    /// Number of records in any state
    pub total: u64,
    /// Number of pending records
    pub pending: u64,
    /// Number of successful records
    pub success: u64,
    /// Number of failed records
    pub failed: u64,
}

/// A failed record with its evidence, as returned by `/failed-images`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailedImage {
    /// Record identifier
    pub id: RecordId,
    /// Phone number as submitted
    pub phone: String,
    /// Opaque evidence payload, passed through unchanged
    pub image: String,
    /// Local time the failure was recorded (`HH:MM:SS`), empty if unknown
    pub timestamp: String,
}

/// Render a Unix timestamp as a local-time `HH:MM:SS` string
///
/// Missing or out-of-range timestamps render as an empty string.
pub fn format_clock_time(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt: DateTime<Local>| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn category_parses_known_values() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_unknown_and_differently_cased_values() {
        for raw in ["bogus", "Pending", "FAILED", ""] {
            match raw.parse::<Category>() {
                Err(Error::InvalidCategory(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidCategory for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Success).unwrap(),
            "\"success\""
        );
    }

    #[test]
    fn export_file_name_includes_category() {
        assert_eq!(Category::Failed.export_file_name(), "failed_numbers.txt");
        assert_eq!(Category::Pending.export_file_name(), "pending_numbers.txt");
    }

    #[test]
    fn format_clock_time_is_empty_without_timestamp() {
        assert_eq!(format_clock_time(None), "");
    }

    #[test]
    fn format_clock_time_uses_local_hours_minutes_seconds() {
        let local = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).single().unwrap();
        let rendered = format_clock_time(Some(local.timestamp()));

        assert_eq!(rendered, "14:05:07");
        assert_eq!(rendered.len(), 8);
        assert_eq!(local.hour(), 14);
    }

    #[test]
    fn format_clock_time_out_of_range_is_empty() {
        assert_eq!(format_clock_time(Some(i64::MAX)), "");
    }
}
