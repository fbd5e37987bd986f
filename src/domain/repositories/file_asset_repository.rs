//! Repository trait for file asset storage.

use crate::domain::entities::{FileAsset, Identifier, NewFileAsset};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for file asset descriptors.
///
/// Mirrors [`super::LinkRepository`]; the counter bumped on resolution is
/// `download_count`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileAssetRepository: Send + Sync {
    /// Persists a new file asset under `new_file.id`, claiming its alias (if
    /// any) in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already used by a link or a
    /// file asset, and [`AppError::AliasTaken`] if the alias is held by any
    /// link or file asset.
    async fn create(&self, new_file: NewFileAsset) -> Result<FileAsset, AppError>;

    /// Reads a file asset without touching its `download_count`.
    async fn find_by_id(&self, id: i64) -> Result<Option<FileAsset>, AppError>;

    /// Finds a file asset and increments its `download_count` atomically.
    async fn find_and_increment(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<FileAsset>, AppError>;

    /// Lists file assets newest first.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<FileAsset>, AppError>;

    /// Counts all file assets.
    async fn count(&self) -> Result<i64, AppError>;

    /// Highest file asset id in use, or 0 when there are none.
    async fn max_id(&self) -> Result<i64, AppError>;
}
