//! Repository trait for the cross-kind alias registry.

use crate::domain::entities::{Alias, ResourceRef};
use crate::error::AppError;
use async_trait::async_trait;

/// Registry of reserved aliases, shared by links and file assets.
///
/// The backing store must make `reserve` atomic with respect to concurrent
/// reservations of the same alias: at most one of them succeeds. Resource
/// repositories claim an alias themselves, in the same transaction as the
/// record insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Claims `alias` for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the alias is already claimed.
    async fn reserve(&self, alias: &Alias, owner: ResourceRef) -> Result<(), AppError>;

    /// Counts all reserved aliases.
    async fn count(&self) -> Result<i64, AppError>;
}
