//! Trait for the shared identifier sequence.

use crate::error::AppError;
use async_trait::async_trait;

/// An atomic, monotonically increasing id source shared by every resource kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdSequence: Send + Sync {
    /// Draws the next value. Concurrent callers never receive the same value.
    async fn next_id(&self) -> Result<i64, AppError>;

    /// Moves the sequence so the next value is greater than `floor`.
    ///
    /// Never moves it backwards. Returns the value the next call to
    /// [`Self::next_id`] will start after.
    async fn advance_past(&self, floor: i64) -> Result<i64, AppError>;
}
