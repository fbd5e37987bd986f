//! Repository trait for link storage.

use crate::domain::entities::{Identifier, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link under `new_link.id`, claiming its alias (if any)
    /// in the same transaction. Nothing is written unless both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already used by a link or a
    /// file asset, and [`AppError::AliasTaken`] if the alias is held by any
    /// link or file asset.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Reads a link without touching its `visit_count`.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds a link and increments its `visit_count` in one atomic statement.
    ///
    /// Returns the row as it is after the increment, or `None` without
    /// touching any row.
    async fn find_and_increment(&self, identifier: &Identifier)
    -> Result<Option<Link>, AppError>;

    /// Lists links newest first.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Highest link id in use, or 0 when there are none.
    async fn max_id(&self) -> Result<i64, AppError>;
}
