//! Handler for public identifier resolution.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::api::dto::resolve::ResolveResponse;
use crate::domain::entities::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves an identifier and redirects to the resource.
///
/// # Endpoint
///
/// `GET /{identifier}`
///
/// # Request Flow
///
/// 1. Classify the path segment as a numeric id or an alias
/// 2. Look up links, then file assets, bumping the matched row's counter
/// 3. Return 307 to the link target or the file's blob location
///
/// Clients sending `Accept: application/json` get a JSON description of the
/// resource instead of a redirect. The counter is bumped either way.
///
/// # Errors
///
/// Returns 404 Not Found for unknown identifiers. Malformed and missing
/// identifiers are indistinguishable.
pub async fn redirect_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let resolution = state.resolution_service.resolve(&identifier).await?;

    let (location, description) = match resolution {
        Resolution::Link(link) => (link.target_url.clone(), ResolveResponse::from(link)),
        Resolution::File(file) => (file.blob_location.clone(), ResolveResponse::from(file)),
        Resolution::NotFound => {
            return Err(AppError::not_found(
                "Not found",
                json!({ "identifier": identifier }),
            ));
        }
    };

    if wants_json(&headers) {
        return Ok(Json(description).into_response());
    }

    Ok(Redirect::temporary(&location).into_response())
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
