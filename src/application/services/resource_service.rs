//! Creation and listing of links and file assets.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{
    DEFAULT_MIME_TYPE, FileAsset, Link, NewFileAsset, NewLink, ResourceKind,
};
use crate::domain::repositories::{AliasRepository, FileAssetRepository, IdSequence, LinkRepository};
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_target_url;

use super::alias_registry::AliasRegistry;
use super::identifier_allocator::IdentifierAllocator;

/// Upload size cap used when none is configured (50 MiB).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: i64 = 50 * 1024 * 1024;

const MAX_FILE_NAME_LEN: usize = 255;
const MAX_BLOB_LOCATION_LEN: usize = 2048;
const MAX_MIME_TYPE_LEN: usize = 255;

/// Descriptor of an already stored upload, as received from the upload flow.
#[derive(Debug, Clone)]
pub struct NewFileAssetInput {
    pub blob_location: String,
    pub file_name: String,
    pub size_bytes: i64,
    pub mime_type: Option<String>,
    pub alias: Option<String>,
}

/// One page of a newest-first listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Service owning the creation flow for both resource kinds.
///
/// # Creation Flow
///
/// 1. Validate every input field and the alias (no mutation on failure)
/// 2. Allocate an id from the shared sequence
/// 3. Claim the alias and insert the record in one store transaction
///
/// A request abandoned before step 3 commits leaves no alias behind; the only
/// trace is a skipped id. Nothing is retried.
pub struct ResourceService<L, F, A, S>
where
    L: LinkRepository,
    F: FileAssetRepository,
    A: AliasRepository,
    S: IdSequence,
{
    link_repository: Arc<L>,
    file_repository: Arc<F>,
    alias_registry: AliasRegistry<A>,
    allocator: IdentifierAllocator<S>,
    max_file_size_bytes: i64,
}

impl<L, F, A, S> ResourceService<L, F, A, S>
where
    L: LinkRepository,
    F: FileAssetRepository,
    A: AliasRepository,
    S: IdSequence,
{
    /// Creates a new resource service with the default upload size cap.
    pub fn new(
        link_repository: Arc<L>,
        file_repository: Arc<F>,
        alias_registry: AliasRegistry<A>,
        allocator: IdentifierAllocator<S>,
    ) -> Self {
        Self {
            link_repository,
            file_repository,
            alias_registry,
            allocator,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }

    /// Overrides the upload size cap.
    pub fn with_max_file_size(mut self, max_file_size_bytes: i64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }

    /// Creates a link to `target_url`, optionally under `alias`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a bad URL or an alias rule violation
    /// - [`AppError::AliasTaken`] if the alias is used by any link or file
    /// - [`AppError::Allocation`] if no id could be allocated
    pub async fn create_link(
        &self,
        target_url: String,
        alias: Option<String>,
    ) -> Result<Link, AppError> {
        let target_url = normalize_target_url(&target_url).map_err(|e| {
            AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        let alias = alias
            .map(|candidate| self.alias_registry.validate(&candidate))
            .transpose()?;

        let id = self.allocator.allocate().await?;

        let link = self
            .link_repository
            .create(NewLink {
                id,
                target_url,
                alias,
            })
            .await?;

        metrics::counter!("resources_created_total", "kind" => ResourceKind::Link.as_str())
            .increment(1);
        tracing::info!(id = link.id, alias = ?link.alias, "Link created");

        Ok(link)
    }

    /// Registers an uploaded file, optionally under `alias`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_link`]; validation also covers the descriptor
    /// fields and the size cap.
    pub async fn create_file_asset(&self, input: NewFileAssetInput) -> Result<FileAsset, AppError> {
        let NewFileAssetInput {
            blob_location,
            file_name,
            size_bytes,
            mime_type,
            alias,
        } = input;

        let blob_location = blob_location.trim().to_string();
        if blob_location.is_empty() || blob_location.len() > MAX_BLOB_LOCATION_LEN {
            return Err(AppError::bad_request(
                "Blob location must be 1-2048 characters",
                json!({ "field": "blob_location" }),
            ));
        }

        if file_name.trim().is_empty() || file_name.chars().count() > MAX_FILE_NAME_LEN {
            return Err(AppError::bad_request(
                "File name must be 1-255 characters",
                json!({ "field": "file_name" }),
            ));
        }

        if size_bytes < 0 || size_bytes > self.max_file_size_bytes {
            return Err(AppError::bad_request(
                "File size is out of range",
                json!({
                    "field": "size_bytes",
                    "size_bytes": size_bytes,
                    "max_size_bytes": self.max_file_size_bytes,
                }),
            ));
        }

        let mime_type = mime_type
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
        if mime_type.len() > MAX_MIME_TYPE_LEN {
            return Err(AppError::bad_request(
                "MIME type must be at most 255 characters",
                json!({ "field": "mime_type" }),
            ));
        }

        let alias = alias
            .map(|candidate| self.alias_registry.validate(&candidate))
            .transpose()?;

        let id = self.allocator.allocate().await?;

        let file = self
            .file_repository
            .create(NewFileAsset {
                id,
                blob_location,
                file_name,
                size_bytes,
                mime_type,
                alias,
            })
            .await?;

        metrics::counter!("resources_created_total", "kind" => ResourceKind::File.as_str())
            .increment(1);
        tracing::info!(id = file.id, alias = ?file.alias, size_bytes = file.size_bytes, "File asset created");

        Ok(file)
    }

    /// Reads a link by id without counting a visit.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Reads a file asset by id without counting a download.
    pub async fn get_file_asset(&self, id: i64) -> Result<FileAsset, AppError> {
        self.file_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found", json!({ "id": id })))
    }

    /// Lists links newest first.
    pub async fn list_links(&self, offset: i64, limit: i64) -> Result<Page<Link>, AppError> {
        let items = self.link_repository.list(offset, limit).await?;
        let total = self.link_repository.count().await?;
        Ok(Page { items, total })
    }

    /// Lists file assets newest first.
    pub async fn list_files(&self, offset: i64, limit: i64) -> Result<Page<FileAsset>, AppError> {
        let items = self.file_repository.list(offset, limit).await?;
        let total = self.file_repository.count().await?;
        Ok(Page { items, total })
    }

    /// Raises the id sequence above the highest id stored in either table.
    pub async fn reconcile_sequence(&self) -> Result<i64, AppError> {
        let link_max = self.link_repository.max_id().await?;
        let file_max = self.file_repository.max_id().await?;
        self.allocator.reconcile(link_max.max(file_max)).await
    }
}
