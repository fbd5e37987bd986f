//! PostgreSQL sequence backing identifier allocation.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::IdSequence;
use crate::error::AppError;

/// Identifier source backed by `resource_id_seq`.
///
/// `nextval` is atomic and never hands out the same value twice, even across
/// aborted transactions; gaps are possible and harmless.
pub struct PgIdSequence {
    pool: Arc<PgPool>,
}

impl PgIdSequence {
    /// Creates a new sequence handle with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdSequence for PgIdSequence {
    async fn next_id(&self) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar("SELECT nextval('resource_id_seq')")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn advance_past(&self, floor: i64) -> Result<i64, AppError> {
        // Not safe against concurrent nextval calls; run before serving traffic
        // or while creation is quiescent.
        let last: i64 = sqlx::query_scalar(
            r#"
            WITH seq_state AS (
                SELECT GREATEST(
                    $1::bigint,
                    CASE WHEN is_called THEN last_value ELSE last_value - 1 END
                ) AS v
                FROM resource_id_seq
            )
            SELECT CASE
                WHEN v < 1 THEN setval('resource_id_seq', 1, false) - 1
                ELSE setval('resource_id_seq', v, true)
            END
            FROM seq_state
            "#,
        )
        .bind(floor)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(last)
    }
}
