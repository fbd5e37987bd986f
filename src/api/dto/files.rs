//! DTOs for file asset endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::PaginationMeta;
use super::requested_alias;
use crate::application::services::NewFileAssetInput;
use crate::domain::entities::FileAsset;

/// Request to register an uploaded file.
///
/// The upload itself happens elsewhere; this carries the stored blob's
/// descriptor.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFileRequest {
    #[validate(length(min = 1, max = 2048))]
    pub blob_location: String,

    #[validate(length(min = 1, max = 255))]
    pub file_name: String,

    #[validate(range(min = 0))]
    pub size_bytes: i64,

    pub mime_type: Option<String>,

    /// Optional alias. Empty means none.
    pub alias: Option<String>,
}

impl From<CreateFileRequest> for NewFileAssetInput {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            blob_location: req.blob_location,
            file_name: req.file_name,
            size_bytes: req.size_bytes,
            mime_type: req.mime_type,
            alias: requested_alias(req.alias),
        }
    }
}

/// A stored file asset as returned by the API.
#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub short_url: String,
    pub blob_location: String,
    pub file_name: String,
    pub size_bytes: i64,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
    pub download_count: i64,
}

impl FileResponse {
    pub fn new(file: FileAsset, short_url: String) -> Self {
        Self {
            id: file.id,
            alias: file.alias,
            short_url,
            blob_location: file.blob_location,
            file_name: file.file_name,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type,
            created_at: file.created_at,
            download_count: file.download_count,
        }
    }
}

/// Paginated list of file assets.
#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<FileResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        let req: CreateFileRequest = serde_json::from_str(
            r#"{"blob_location": "s3://bucket/a.pdf", "file_name": "a.pdf", "size_bytes": 10}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());

        let req: CreateFileRequest = serde_json::from_str(
            r#"{"blob_location": "", "file_name": "a.pdf", "size_bytes": -1}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("blob_location"));
        assert!(fields.contains_key("size_bytes"));
    }

    #[test]
    fn test_empty_alias_becomes_none() {
        let req: CreateFileRequest = serde_json::from_str(
            r#"{"blob_location": "s3://b/a", "file_name": "a", "size_bytes": 1, "alias": ""}"#,
        )
        .unwrap();

        let input = NewFileAssetInput::from(req);
        assert!(input.alias.is_none());
    }
}
