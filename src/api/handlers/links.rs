//! Handlers for link management endpoints (create, read, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::requested_alias;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "promo" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1042,
///   "alias": "promo",
///   "short_url": "https://s.example.com/promo",
///   "target_url": "https://example.com/",
///   "created_at": "2026-01-01T00:00:00Z",
///   "visit_count": 0
/// }
/// ```
///
/// # Errors
///
/// - 400 if the URL or alias is invalid (`details.rule` names the alias rule)
/// - 409 `alias_taken` if any link or file already uses the alias
/// - 503 if no identifier could be allocated
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .resource_service
        .create_link(payload.url, requested_alias(payload.alias))
        .await?;

    let short_url = state.short_url(&link.public_key());

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}

/// Returns one link with its current `visit_count`. Does not count as a visit.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// - 404 if no link has this id
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.resource_service.get_link(id).await?;
    let short_url = state.short_url(&link.public_key());

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Lists links newest first.
///
/// # Endpoint
///
/// `GET /api/links?page=1&page_size=25`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = state.resource_service.list_links(offset, limit).await?;

    let items = page
        .items
        .into_iter()
        .map(|link| {
            let short_url = state.short_url(&link.public_key());
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        pagination: params.meta(page.total),
        items,
    }))
}
