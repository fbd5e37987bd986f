//! Identifier resolution with atomic usage counting.

use std::sync::Arc;

use crate::domain::entities::{Identifier, Resolution};
use crate::domain::repositories::{FileAssetRepository, LinkRepository};
use crate::error::AppError;

/// Resolves public identifiers to links or file assets.
///
/// # Lookup Protocol
///
/// 1. Classify the raw string once ([`Identifier::classify`])
/// 2. Find-and-increment in the link store
/// 3. On a miss, find-and-increment in the file asset store with the same key
/// 4. Otherwise [`Resolution::NotFound`]
///
/// Each store call is a single atomic read-modify-write, so concurrent
/// resolutions of one record each commit their own increment. Identifiers are
/// unique across both kinds, so at most one record is touched, and a miss
/// touches none.
pub struct ResolutionService<L: LinkRepository, F: FileAssetRepository> {
    link_repository: Arc<L>,
    file_repository: Arc<F>,
}

impl<L: LinkRepository, F: FileAssetRepository> ResolutionService<L, F> {
    pub fn new(link_repository: Arc<L>, file_repository: Arc<F>) -> Self {
        Self {
            link_repository,
            file_repository,
        }
    }

    /// Resolves a raw identifier string.
    ///
    /// # Errors
    ///
    /// Only storage failures are errors; an unknown identifier is
    /// `Ok(Resolution::NotFound)`.
    pub async fn resolve(&self, raw: &str) -> Result<Resolution, AppError> {
        let resolution = match Identifier::classify(raw) {
            Some(identifier) => self.resolve_identifier(&identifier).await?,
            None => Resolution::NotFound,
        };

        metrics::counter!("resolutions_total", "outcome" => resolution.outcome()).increment(1);
        tracing::debug!(identifier = raw, outcome = resolution.outcome(), "Resolved identifier");

        Ok(resolution)
    }

    /// Resolves an already classified identifier.
    pub async fn resolve_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Resolution, AppError> {
        if let Some(link) = self.link_repository.find_and_increment(identifier).await? {
            return Ok(Resolution::Link(link));
        }

        if let Some(file) = self.file_repository.find_and_increment(identifier).await? {
            return Ok(Resolution::File(file));
        }

        Ok(Resolution::NotFound)
    }
}
