//! PostgreSQL implementation of the alias registry.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Alias, ResourceRef};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::db_error::{constraints, is_unique_violation_on};

/// Alias registry backed by the `aliases` table.
///
/// Reservation is an optimistic insert; the table's primary key is what keeps
/// an alias unique across links and file assets.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Inserts the claim row for `alias` on `conn`.
///
/// The resource repositories call this inside the transaction that inserts the
/// record, so a claim is only ever committed together with its owner.
pub(crate) async fn claim_alias(
    conn: &mut PgConnection,
    alias: &Alias,
    owner: ResourceRef,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO aliases (alias, resource_kind, resource_id) VALUES ($1, $2, $3)")
        .bind(alias.as_str())
        .bind(owner.kind.as_str())
        .bind(owner.id)
        .execute(conn)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, &[constraints::ALIASES_PKEY]) {
                AppError::alias_taken(alias.as_str())
            } else if is_unique_violation_on(&e, &[constraints::ALIASES_RESOURCE_ID_KEY]) {
                AppError::conflict("Resource already has an alias", json!({ "id": owner.id }))
            } else {
                AppError::from(e)
            }
        })?;

    Ok(())
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn reserve(&self, alias: &Alias, owner: ResourceRef) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        claim_alias(&mut conn, alias, owner).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM aliases")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
