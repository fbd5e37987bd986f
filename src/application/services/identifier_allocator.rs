//! Identifier allocation over the shared sequence.

use std::sync::Arc;

use crate::domain::repositories::IdSequence;
use crate::error::AppError;

/// Hands out identifiers for new links and file assets.
///
/// Every allocation is a single atomic draw from one sequence shared by both
/// resource kinds, so concurrent callers always receive distinct values and
/// each value is greater than every one handed out before it. Allocation is
/// not retried.
pub struct IdentifierAllocator<S: IdSequence> {
    sequence: Arc<S>,
}

impl<S: IdSequence> IdentifierAllocator<S> {
    pub fn new(sequence: Arc<S>) -> Self {
        Self { sequence }
    }

    /// Allocates the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocation`] if the sequence cannot be reached.
    pub async fn allocate(&self) -> Result<i64, AppError> {
        self.sequence.next_id().await.map_err(|e| {
            tracing::error!(error = %e, "Identifier allocation failed");
            AppError::allocation("Failed to allocate identifier")
        })
    }

    /// Moves the sequence past `in_use_max` so rows written outside the
    /// allocator can never be handed out again.
    ///
    /// Returns the last value considered taken.
    pub async fn reconcile(&self, in_use_max: i64) -> Result<i64, AppError> {
        let last = self.sequence.advance_past(in_use_max).await?;
        tracing::info!(in_use_max, last, "Identifier sequence reconciled");
        Ok(last)
    }
}
