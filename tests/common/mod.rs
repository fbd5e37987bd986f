#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use shortlink::application::services::NewFileAssetInput;
use shortlink::domain::entities::{FileAsset, Link};
use shortlink::state::AppState;

pub const TEST_PASSKEY: &str = "test-admin-passkey";
pub const TEST_BASE_URL: &str = "https://s.example.com";
pub const TEST_MAX_FILE_SIZE: i64 = 1024 * 1024;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_BASE_URL,
        TEST_PASSKEY,
        TEST_MAX_FILE_SIZE,
    )
}

pub fn bearer() -> String {
    format!("Bearer {TEST_PASSKEY}")
}

pub async fn create_test_link(state: &AppState, url: &str, alias: Option<&str>) -> Link {
    state
        .resource_service
        .create_link(url.to_string(), alias.map(str::to_string))
        .await
        .unwrap()
}

pub fn file_input(file_name: &str, alias: Option<&str>) -> NewFileAssetInput {
    NewFileAssetInput {
        blob_location: format!("https://blob.example.com/uploads/{file_name}"),
        file_name: file_name.to_string(),
        size_bytes: 2048,
        mime_type: Some("application/pdf".to_string()),
        alias: alias.map(str::to_string),
    }
}

pub async fn create_test_file(state: &AppState, file_name: &str, alias: Option<&str>) -> FileAsset {
    state
        .resource_service
        .create_file_asset(file_input(file_name, alias))
        .await
        .unwrap()
}

pub async fn visit_count(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT visit_count FROM links WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn download_count(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT download_count FROM file_assets WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn total_counters(pool: &PgPool) -> (i64, i64) {
    sqlx::query_as(
        r#"
        SELECT
            (SELECT COALESCE(SUM(visit_count), 0)::bigint FROM links),
            (SELECT COALESCE(SUM(download_count), 0)::bigint FROM file_assets)
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn alias_owner(pool: &PgPool, alias: &str) -> Option<(String, i64)> {
    sqlx::query_as("SELECT resource_kind, resource_id FROM aliases WHERE alias = $1")
        .bind(alias)
        .fetch_optional(pool)
        .await
        .unwrap()
}
