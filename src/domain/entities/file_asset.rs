//! FileAsset entity: a short identifier for an uploaded file's descriptor.
//!
//! The bytes live in external blob storage; only the location and metadata are
//! stored here.

use chrono::{DateTime, Utc};

use super::alias::Alias;

/// MIME type recorded when the uploader did not report one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A stored file descriptor with its download counter.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAsset {
    pub id: i64,
    pub blob_location: String,
    pub file_name: String,
    pub size_bytes: i64,
    pub mime_type: String,
    pub alias: Option<String>,
    pub created_at: DateTime<Utc>,
    pub download_count: i64,
}

impl FileAsset {
    /// The public path segment for this file: the alias if set, else the id.
    pub fn public_key(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// Input for persisting a new file asset under an already allocated id.
#[derive(Debug, Clone)]
pub struct NewFileAsset {
    pub id: i64,
    pub blob_location: String,
    pub file_name: String,
    pub size_bytes: i64,
    pub mime_type: String,
    pub alias: Option<Alias>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(alias: Option<&str>) -> FileAsset {
        FileAsset {
            id: 1000,
            blob_location: "https://blob.example.com/uploads/report.pdf".to_string(),
            file_name: "report.pdf".to_string(),
            size_bytes: 2048,
            mime_type: "application/pdf".to_string(),
            alias: alias.map(str::to_string),
            created_at: Utc::now(),
            download_count: 0,
        }
    }

    #[test]
    fn test_public_key_uses_id_without_alias() {
        assert_eq!(sample(None).public_key(), "1000");
    }

    #[test]
    fn test_public_key_uses_alias() {
        assert_eq!(sample(Some("q3-report")).public_key(), "q3-report");
    }
}
