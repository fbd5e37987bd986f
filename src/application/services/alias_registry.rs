//! Alias validation and reservation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Alias, ResourceRef};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// Validates a candidate alias, reporting the violated rule.
///
/// # Errors
///
/// Returns [`AppError::Validation`] whose details carry the rule name and the
/// rejected candidate.
pub fn validate_alias(candidate: &str) -> Result<Alias, AppError> {
    Alias::parse(candidate).map_err(|rule| {
        AppError::bad_request(
            rule.to_string(),
            json!({ "rule": rule.as_str(), "alias": candidate }),
        )
    })
}

/// Validates aliases and reserves them across links and file assets.
pub struct AliasRegistry<A: AliasRepository> {
    repository: Arc<A>,
}

impl<A: AliasRepository> AliasRegistry<A> {
    pub fn new(repository: Arc<A>) -> Self {
        Self { repository }
    }

    /// See [`validate_alias`].
    pub fn validate(&self, candidate: &str) -> Result<Alias, AppError> {
        validate_alias(candidate)
    }

    /// Reserves `alias` for `owner`.
    ///
    /// Concurrent reservations of the same alias are decided by the store's
    /// uniqueness constraint: exactly one succeeds. Record creation does not go
    /// through here; the resource repositories claim the alias in the same
    /// transaction as the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the alias is held by any link or
    /// file asset.
    pub async fn reserve(&self, alias: &Alias, owner: ResourceRef) -> Result<(), AppError> {
        self.repository.reserve(alias, owner).await?;
        tracing::debug!(alias = %alias, kind = %owner.kind, id = owner.id, "Alias reserved");
        Ok(())
    }
}
