//! Admin passkey check for the management API.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Lets the request through only when it carries `Authorization: Bearer <passkey>`
/// matching the configured admin passkey.
///
/// Mounted with `route_layer` so unknown paths still produce 404 rather than 401:
///
/// ```rust,ignore
/// protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
/// ```
pub async fn layer(
    State(st): State<AppState>,
    bearer: Result<AuthBearer, (StatusCode, &'static str)>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let AuthBearer(passkey) = bearer.map_err(|(_, why)| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({ "reason": "missing or malformed bearer passkey", "detail": why }),
        )
    })?;

    st.auth_service.authenticate(&passkey)?;

    Ok(next.run(req).await)
}
