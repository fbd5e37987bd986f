//! PostgreSQL implementation of file asset repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{FileAsset, Identifier, NewFileAsset, ResourceRef};
use crate::domain::repositories::FileAssetRepository;
use crate::error::AppError;
use crate::utils::db_error::{constraints, is_unique_violation_on};

use super::pg_alias_repository::claim_alias;

#[derive(sqlx::FromRow)]
struct FileAssetRow {
    id: i64,
    blob_location: String,
    file_name: String,
    size_bytes: i64,
    mime_type: String,
    alias: Option<String>,
    created_at: DateTime<Utc>,
    download_count: i64,
}

impl From<FileAssetRow> for FileAsset {
    fn from(r: FileAssetRow) -> Self {
        FileAsset {
            id: r.id,
            blob_location: r.blob_location,
            file_name: r.file_name,
            size_bytes: r.size_bytes,
            mime_type: r.mime_type,
            alias: r.alias,
            created_at: r.created_at,
            download_count: r.download_count,
        }
    }
}

const FILE_ASSET_COLUMNS: &str =
    "id, blob_location, file_name, size_bytes, mime_type, alias, created_at, download_count";

/// PostgreSQL repository for file asset descriptors.
pub struct PgFileAssetRepository {
    pool: Arc<PgPool>,
}

impl PgFileAssetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_create_error(e: sqlx::Error, new_file: &NewFileAsset) -> AppError {
    if is_unique_violation_on(&e, &[constraints::FILE_ASSETS_ALIAS_KEY])
        && let Some(alias) = &new_file.alias
    {
        return AppError::alias_taken(alias.as_str());
    }

    if is_unique_violation_on(&e, &[constraints::FILE_ASSETS_PKEY]) {
        return AppError::conflict("Identifier already in use", json!({ "id": new_file.id }));
    }

    AppError::from(e)
}

#[async_trait]
impl FileAssetRepository for PgFileAssetRepository {
    async fn create(&self, new_file: NewFileAsset) -> Result<FileAsset, AppError> {
        let mut tx = self.pool.begin().await?;

        if let Some(alias) = &new_file.alias {
            claim_alias(&mut tx, alias, ResourceRef::file(new_file.id)).await?;
        }

        let sql = format!(
            r#"
            INSERT INTO file_assets (id, blob_location, file_name, size_bytes, mime_type, alias)
            SELECT $1::bigint, $2::text, $3::text, $4::bigint, $5::text, $6::text
            WHERE NOT EXISTS (SELECT 1 FROM links WHERE id = $1::bigint)
            RETURNING {FILE_ASSET_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, FileAssetRow>(&sql)
            .bind(new_file.id)
            .bind(&new_file.blob_location)
            .bind(&new_file.file_name)
            .bind(new_file.size_bytes)
            .bind(&new_file.mime_type)
            .bind(new_file.alias.as_ref().map(|a| a.as_str()))
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_create_error(e, &new_file))?;

        let Some(row) = row else {
            return Err(AppError::conflict(
                "Identifier already in use",
                json!({ "id": new_file.id }),
            ));
        };

        tx.commit().await?;

        Ok(FileAsset::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FileAsset>, AppError> {
        let sql = format!("SELECT {FILE_ASSET_COLUMNS} FROM file_assets WHERE id = $1");

        let row = sqlx::query_as::<_, FileAssetRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(FileAsset::from))
    }

    async fn find_and_increment(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<FileAsset>, AppError> {
        let row = match identifier {
            Identifier::NumericId(id) => {
                let sql = format!(
                    "UPDATE file_assets SET download_count = download_count + 1 \
                     WHERE id = $1 RETURNING {FILE_ASSET_COLUMNS}"
                );
                sqlx::query_as::<_, FileAssetRow>(&sql)
                    .bind(*id)
                    .fetch_optional(self.pool.as_ref())
                    .await?
            }
            Identifier::Alias(alias) => {
                let sql = format!(
                    "UPDATE file_assets SET download_count = download_count + 1 \
                     WHERE alias = $1 RETURNING {FILE_ASSET_COLUMNS}"
                );
                sqlx::query_as::<_, FileAssetRow>(&sql)
                    .bind(alias.as_str())
                    .fetch_optional(self.pool.as_ref())
                    .await?
            }
        };

        Ok(row.map(FileAsset::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<FileAsset>, AppError> {
        let sql = format!(
            "SELECT {FILE_ASSET_COLUMNS} FROM file_assets \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );

        let rows = sqlx::query_as::<_, FileAssetRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(FileAsset::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM file_assets")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn max_id(&self) -> Result<i64, AppError> {
        let max: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(id), 0)::bigint FROM file_assets")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(max)
    }
}
