//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Identifier, Link, NewLink, ResourceRef};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::{constraints, is_unique_violation_on};

use super::pg_alias_repository::claim_alias;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    target_url: String,
    alias: Option<String>,
    created_at: DateTime<Utc>,
    visit_count: i64,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.target_url, r.alias, r.created_at, r.visit_count)
    }
}

/// PostgreSQL repository for links.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_create_error(e: sqlx::Error, new_link: &NewLink) -> AppError {
    if is_unique_violation_on(&e, &[constraints::LINKS_ALIAS_KEY])
        && let Some(alias) = &new_link.alias
    {
        return AppError::alias_taken(alias.as_str());
    }

    if is_unique_violation_on(&e, &[constraints::LINKS_PKEY]) {
        return AppError::conflict("Identifier already in use", json!({ "id": new_link.id }));
    }

    AppError::from(e)
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        // Dropping `tx` before commit rolls back the alias claim with the row.
        let mut tx = self.pool.begin().await?;

        if let Some(alias) = &new_link.alias {
            claim_alias(&mut tx, alias, ResourceRef::link(new_link.id)).await?;
        }

        // The id must not exist in file_assets either; the shared sequence makes
        // this a backstop for ids supplied from outside the allocator.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (id, target_url, alias)
            SELECT $1::bigint, $2::text, $3::text
            WHERE NOT EXISTS (SELECT 1 FROM file_assets WHERE id = $1::bigint)
            RETURNING id, target_url, alias, created_at, visit_count
            "#,
        )
        .bind(new_link.id)
        .bind(&new_link.target_url)
        .bind(new_link.alias.as_ref().map(|a| a.as_str()))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_create_error(e, &new_link))?;

        let Some(row) = row else {
            return Err(AppError::conflict(
                "Identifier already in use",
                json!({ "id": new_link.id }),
            ));
        };

        tx.commit().await?;

        Ok(Link::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, target_url, alias, created_at, visit_count FROM links WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_and_increment(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Link>, AppError> {
        let query = match identifier {
            Identifier::NumericId(id) => sqlx::query_as::<_, LinkRow>(
                r#"
                UPDATE links
                SET visit_count = visit_count + 1
                WHERE id = $1
                RETURNING id, target_url, alias, created_at, visit_count
                "#,
            )
            .bind(*id),
            Identifier::Alias(alias) => sqlx::query_as::<_, LinkRow>(
                r#"
                UPDATE links
                SET visit_count = visit_count + 1
                WHERE alias = $1
                RETURNING id, target_url, alias, created_at, visit_count
                "#,
            )
            .bind(alias.as_str()),
        };

        let row = query.fetch_optional(self.pool.as_ref()).await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target_url, alias, created_at, visit_count
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn max_id(&self) -> Result<i64, AppError> {
        let max: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(id), 0)::bigint FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(max)
    }
}
