//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{identifier}` - Resolve a link or file by id or alias (public)
//! - `GET  /api/health`   - Health check: DB ping (public)
//! - `/api/*`             - Management API (Bearer passkey required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer passkey on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Everything except resolution lives under `/api`. `api` is a reserved
/// alias, so no resource can be shadowed by a service route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .route("/health", get(health_handler));

    let router = Router::new()
        .route("/{identifier}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
