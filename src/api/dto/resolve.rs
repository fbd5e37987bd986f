//! JSON description of a resolved identifier.

use serde::Serialize;

use crate::domain::entities::{FileAsset, Link};

/// Returned by `GET /{identifier}` when the client asks for JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveResponse {
    Link {
        id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
        target_url: String,
        visit_count: i64,
    },
    File {
        id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
        blob_location: String,
        file_name: String,
        size_bytes: i64,
        mime_type: String,
        download_count: i64,
    },
}

impl From<Link> for ResolveResponse {
    fn from(link: Link) -> Self {
        Self::Link {
            id: link.id,
            alias: link.alias,
            target_url: link.target_url,
            visit_count: link.visit_count,
        }
    }
}

impl From<FileAsset> for ResolveResponse {
    fn from(file: FileAsset) -> Self {
        Self::File {
            id: file.id,
            alias: file.alias,
            blob_location: file.blob_location,
            file_name: file.file_name,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type,
            download_count: file.download_count,
        }
    }
}
