//! Handlers for file asset endpoints (register, read, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::files::{CreateFileRequest, FileListResponse, FileResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Registers an uploaded file under a fresh identifier.
///
/// # Endpoint
///
/// `POST /api/files`
///
/// # Request Body
///
/// ```json
/// {
///   "blob_location": "https://blob.example.com/uploads/report.pdf",
///   "file_name": "report.pdf",
///   "size_bytes": 52311,
///   "mime_type": "application/pdf",
///   "alias": "q3-report"
/// }
/// ```
///
/// # Errors
///
/// Same as `POST /api/links`, plus 400 when `size_bytes` exceeds the
/// configured upload cap.
pub async fn create_file_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileResponse>), AppError> {
    payload.validate()?;

    let file = state
        .resource_service
        .create_file_asset(payload.into())
        .await?;

    let short_url = state.short_url(&file.public_key());

    Ok((StatusCode::CREATED, Json(FileResponse::new(file, short_url))))
}

/// `GET /api/files/{id}`: one file asset with its current `download_count`,
/// without counting a download. 404 if no file has this id.
pub async fn get_file_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FileResponse>, AppError> {
    let file = state.resource_service.get_file_asset(id).await?;
    let short_url = state.short_url(&file.public_key());

    Ok(Json(FileResponse::new(file, short_url)))
}

/// Lists file assets newest first.
///
/// # Endpoint
///
/// `GET /api/files?page=1&page_size=25`
pub async fn list_files_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<FileListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = state.resource_service.list_files(offset, limit).await?;

    let items = page
        .items
        .into_iter()
        .map(|file| {
            let short_url = state.short_url(&file.public_key());
            FileResponse::new(file, short_url)
        })
        .collect();

    Ok(Json(FileListResponse {
        pagination: params.meta(page.total),
        items,
    }))
}
