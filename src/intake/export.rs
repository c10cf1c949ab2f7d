//! Newline-delimited export of one partition.

use super::NumberService;
use crate::error::Result;
use crate::types::Category;

/// A partition rendered as a downloadable text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Attachment name, e.g. `failed_numbers.txt`
    pub file_name: String,
    /// Numbers joined by `\n`, without a trailing newline
    pub body: String,
}

impl NumberService {
    /// Export every number in `category`
    ///
    /// An empty partition produces an empty body.
    pub async fn export(&self, category: Category) -> Result<ExportFile> {
        let phones = self.db.list_phones(category).await?;

        tracing::debug!(%category, count = phones.len(), "Exporting numbers");

        Ok(ExportFile {
            file_name: category.export_file_name(),
            body: phones.join("\n"),
        })
    }
}
