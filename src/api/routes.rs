//! API route configuration.
//!
//! All API endpoints require Bearer passkey authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_file_handler, create_link_handler, get_file_handler, get_link_handler,
    list_files_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer passkey authentication.
///
/// # Endpoints
///
/// - `GET  /links` - List links (paginated)
/// - `POST /links` - Create a link
/// - `GET  /links/{id}` - One link's stats, without counting a visit
/// - `GET  /files` - List file assets (paginated)
/// - `POST /files` - Register an uploaded file
/// - `GET  /files/{id}` - One file's stats, without counting a download
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{id}", get(get_link_handler))
        .route("/files", get(list_files_handler).post(create_file_handler))
        .route("/files/{id}", get(get_file_handler))
}
